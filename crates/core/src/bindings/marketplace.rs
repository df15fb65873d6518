use alloy::sol;

sol! {
    #[sol(rpc)]
    contract Marketplace {
        function role(address account) external view returns (uint8 role);
        function addAdmin(address account) external;
        function removeAdmin(address account) external;
    }
}
