pub mod artifact;
pub mod collection;
pub mod presale;
pub mod revert;
pub mod token;

/// Names the deployment scripts resolve artifacts by.
pub mod names {
    pub const NFT_COLLECTION: &str = "PixelBrainerNFTCollection";
    pub const TEST_COLLECTION: &str = "PixelBrainerCollection";
    pub const TOKEN: &str = "BrainerToken";
    pub const PRESALE: &str = "BrainerPreSale";
    pub const IERC20: &str = "@openzeppelin/contracts/token/ERC20/IERC20.sol:IERC20";
}
