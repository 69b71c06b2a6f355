use alloy::sol;

sol! {
    #[sol(rpc, all_derives)]
    contract BrainerPreSale {
        constructor(address brainerToken, address pixelBrainerCollection);
    }
}
