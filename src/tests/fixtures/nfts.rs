// Shared test fixture for NFT metadata records.

use crate::modules::nfts::core::nft::{Creator, Nft};

pub struct NftBuilder {
    inner: Nft,
}

impl Default for NftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NftBuilder {
    pub fn new() -> Self {
        Self {
            inner: Nft {
                address: "nft-0001".to_string(),
                mint: "mint-0001".to_string(),
                owner: "owner-1".to_string(),
                update_authority: "authority-1".to_string(),
                name: "Degen Ape #1".to_string(),
                symbol: "DAPE".to_string(),
                uri: "https://arweave.net/degen-ape-1.json".to_string(),
                seller_fee_basis_points: 420,
                primary_sale_happened: true,
                is_mutable: true,
                creators: vec![Creator {
                    address: "creator-1".to_string(),
                    share: 100,
                    verified: true,
                }],
            },
        }
    }

    pub fn address(mut self, v: impl Into<String>) -> Self {
        self.inner.address = v.into();
        self
    }

    pub fn mint(mut self, v: impl Into<String>) -> Self {
        self.inner.mint = v.into();
        self
    }

    pub fn owner(mut self, v: impl Into<String>) -> Self {
        self.inner.owner = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn seller_fee_basis_points(mut self, v: u16) -> Self {
        self.inner.seller_fee_basis_points = v;
        self
    }

    pub fn creators(mut self, v: Vec<Creator>) -> Self {
        self.inner.creators = v;
        self
    }

    pub fn build(self) -> Nft {
        self.inner
    }
}
