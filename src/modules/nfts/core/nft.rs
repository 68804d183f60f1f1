use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_SYMBOL_LENGTH: usize = 10;
pub const MAX_URI_LENGTH: usize = 200;
pub const MAX_CREATOR_LIMIT: usize = 5;
pub const MAX_SELLER_FEE_BASIS_POINTS: u16 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub address: String,
    pub share: u8,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nft {
    pub address: String,
    pub mint: String,
    pub owner: String,
    pub update_authority: String,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    #[serde(default)]
    pub primary_sale_happened: bool,
    #[serde(default = "default_is_mutable")]
    pub is_mutable: bool,
    #[serde(default)]
    pub creators: Vec<Creator>,
}

fn default_is_mutable() -> bool {
    true
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NftError {
    #[error("{field} must not be empty")]
    MissingField { field: &'static str },

    #[error("{field} is {actual} bytes, limit is {limit}")]
    TooLong {
        field: &'static str,
        actual: usize,
        limit: usize,
    },

    #[error("seller fee of {0} basis points exceeds 10000")]
    InvalidSellerFee(u16),

    #[error("{0} creators exceed the limit of 5")]
    TooManyCreators(usize),

    #[error("creator shares sum to {0}, expected 100")]
    InvalidCreatorShares(u32),
}

impl Nft {
    pub fn has_creator(&self, address: &str) -> bool {
        self.creators.iter().any(|c| c.address == address)
    }

    /// Checks the record against the token-metadata program limits.
    pub fn validate(&self) -> Result<(), NftError> {
        for (field, value) in [
            ("address", &self.address),
            ("mint", &self.mint),
            ("owner", &self.owner),
        ] {
            if value.trim().is_empty() {
                return Err(NftError::MissingField { field });
            }
        }

        for (field, value, limit) in [
            ("name", &self.name, MAX_NAME_LENGTH),
            ("symbol", &self.symbol, MAX_SYMBOL_LENGTH),
            ("uri", &self.uri, MAX_URI_LENGTH),
        ] {
            if value.len() > limit {
                return Err(NftError::TooLong {
                    field,
                    actual: value.len(),
                    limit,
                });
            }
        }

        if self.seller_fee_basis_points > MAX_SELLER_FEE_BASIS_POINTS {
            return Err(NftError::InvalidSellerFee(self.seller_fee_basis_points));
        }

        if self.creators.len() > MAX_CREATOR_LIMIT {
            return Err(NftError::TooManyCreators(self.creators.len()));
        }

        if !self.creators.is_empty() {
            let total: u32 = self.creators.iter().map(|c| u32::from(c.share)).sum();
            if total != 100 {
                return Err(NftError::InvalidCreatorShares(total));
            }
        }

        Ok(())
    }
}
