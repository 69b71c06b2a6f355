use alloy::sol;

sol! {
    /// Collection deployed by the `deploy-collection` script. The full URI list
    /// is fixed at construction, one entry per supply slot.
    #[sol(rpc, all_derives)]
    contract PixelBrainerNFTCollection {
        constructor(uint256 maxSupply, uint256 mintPrice, string[] uris);
    }
}

sol! {
    /// Owner-minted collection exercised by the behaviour suite.
    #[sol(rpc, all_derives)]
    contract PixelBrainerCollection {
        error OwnableUnauthorizedAccount(address account);
        error ERC721NonexistentToken(uint256 tokenId);

        constructor(uint256 maxSupply);

        function maxSupply() external view returns (uint256);
        function currentTokenId() external view returns (uint256);
        function tokenURI(uint256 tokenId) external view returns (string);
        function ownerOf(uint256 tokenId) external view returns (address);
        function owner() external view returns (address);
        function mintNFT(address recipient, string tokenURI) external returns (uint256);
    }
}
