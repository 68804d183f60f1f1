use crate::modules::nfts::core::nft::Nft;

#[derive(async_graphql::Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NftChangeKind {
    Created,
    Updated,
}

/// A stored NFT together with the slot at which the store accepted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NftChange {
    pub kind: NftChangeKind,
    pub slot: u64,
    pub nft: Nft,
}
