use alloy::primitives::{Address, TxHash};
use alloy::rpc::types::TransactionReceipt;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw role value stored by the marketplace contract for an account.
///
/// The contract encodes its role enum as `uint8`; the value is passed through
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(pub u8);

impl Role {
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl From<u8> for Role {
    fn from(value: u8) -> Self {
        Role(value)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata of a mined `addAdmin` / `removeAdmin` transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminTxReceipt {
    pub transaction_hash: TxHash,
    pub block_number: Option<u64>,
    pub from: Address,
    pub success: bool,
}

impl From<TransactionReceipt> for AdminTxReceipt {
    fn from(receipt: TransactionReceipt) -> Self {
        Self {
            transaction_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            from: receipt.from,
            success: receipt.status(),
        }
    }
}
