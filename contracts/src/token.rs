use alloy::sol;

sol! {
    /// Fungible token; the four constructor addresses receive the initial
    /// allocation buckets.
    #[sol(rpc, all_derives)]
    contract BrainerToken {
        constructor(
            address playToEarnWallet,
            address stakingGovWallet,
            address marketingWallet,
            address developmentWallet
        );
    }
}

sol! {
    #[sol(rpc, all_derives)]
    interface IERC20 {
        function totalSupply() external view returns (uint256);
    }
}
