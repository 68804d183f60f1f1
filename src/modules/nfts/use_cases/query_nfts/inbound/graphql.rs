use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::nfts::api_port::SharedApi;
use crate::modules::nfts::core::nft::{Creator, Nft};

pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 100;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlCreator {
    pub address: String,
    pub share: u8,
    pub verified: bool,
}

impl From<Creator> for GqlCreator {
    fn from(c: Creator) -> Self {
        Self {
            address: c.address,
            share: c.share,
            verified: c.verified,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlNft {
    pub address: String,
    pub mint: String,
    pub owner: String,
    pub update_authority: String,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    pub primary_sale_happened: bool,
    pub is_mutable: bool,
    pub creators: Vec<GqlCreator>,
}

impl From<Nft> for GqlNft {
    fn from(n: Nft) -> Self {
        Self {
            address: n.address,
            mint: n.mint,
            owner: n.owner,
            update_authority: n.update_authority,
            name: n.name,
            symbol: n.symbol,
            uri: n.uri,
            seller_fee_basis_points: n.seller_fee_basis_points,
            primary_sale_happened: n.primary_sale_happened,
            is_mutable: n.is_mutable,
            creators: n.creators.into_iter().map(Into::into).collect(),
        }
    }
}

pub(crate) fn page(offset: Option<i64>, limit: Option<i64>) -> (u64, u64) {
    let offset = offset.unwrap_or(0).max(0) as u64;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT) as u64;
    (offset, limit)
}

#[derive(Default)]
pub struct NftQuery;

#[Object]
impl NftQuery {
    async fn nft(&self, context: &Context<'_>, address: String) -> GqlResult<Option<GqlNft>> {
        let api = context.data::<SharedApi>()?;
        Ok(api.nft(&address).await?.map(Into::into))
    }

    async fn nfts_by_owner(
        &self,
        context: &Context<'_>,
        owner: String,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> GqlResult<Vec<GqlNft>> {
        let api = context.data::<SharedApi>()?;
        let (offset, limit) = page(offset, limit);
        let list = api.nfts_by_owner(&owner, offset, limit).await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn nfts_by_creator(
        &self,
        context: &Context<'_>,
        creator: String,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> GqlResult<Vec<GqlNft>> {
        let api = context.data::<SharedApi>()?;
        let (offset, limit) = page(offset, limit);
        let list = api.nfts_by_creator(&creator, offset, limit).await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
