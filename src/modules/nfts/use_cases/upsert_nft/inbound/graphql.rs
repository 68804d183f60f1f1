use async_graphql::{Context, InputObject, Object, Result as GqlResult};

use crate::modules::nfts::api_port::SharedApi;
use crate::modules::nfts::core::changes::{NftChange, NftChangeKind};
use crate::modules::nfts::core::nft::{Creator, Nft};
use crate::modules::nfts::use_cases::query_nfts::inbound::graphql::GqlNft;

#[derive(InputObject)]
pub struct CreatorInput {
    pub address: String,
    pub share: u8,
    #[graphql(default)]
    pub verified: bool,
}

#[derive(InputObject)]
pub struct NftInput {
    pub address: String,
    pub mint: String,
    pub owner: String,
    pub update_authority: String,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    #[graphql(default)]
    pub primary_sale_happened: bool,
    #[graphql(default = true)]
    pub is_mutable: bool,
    #[graphql(default)]
    pub creators: Vec<CreatorInput>,
}

impl From<NftInput> for Nft {
    fn from(input: NftInput) -> Self {
        Self {
            address: input.address,
            mint: input.mint,
            owner: input.owner,
            update_authority: input.update_authority,
            name: input.name,
            symbol: input.symbol,
            uri: input.uri,
            seller_fee_basis_points: input.seller_fee_basis_points,
            primary_sale_happened: input.primary_sale_happened,
            is_mutable: input.is_mutable,
            creators: input
                .creators
                .into_iter()
                .map(|c| Creator {
                    address: c.address,
                    share: c.share,
                    verified: c.verified,
                })
                .collect(),
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlNftChange {
    pub kind: NftChangeKind,
    pub slot: u64,
    pub nft: GqlNft,
}

impl From<NftChange> for GqlNftChange {
    fn from(c: NftChange) -> Self {
        Self {
            kind: c.kind,
            slot: c.slot,
            nft: c.nft.into(),
        }
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn upsert_nft(&self, context: &Context<'_>, input: NftInput) -> GqlResult<GqlNftChange> {
        let api = context.data::<SharedApi>()?;
        let change = api.put_nft(input.into()).await?;
        Ok(change.into())
    }
}
