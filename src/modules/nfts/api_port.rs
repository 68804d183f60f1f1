use crate::modules::nfts::core::changes::NftChange;
use crate::modules::nfts::core::nft::{Nft, NftError};
use crate::shared::core::context::RequestContext;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::broadcast;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("data source offline")]
    Offline,

    #[error(transparent)]
    Invalid(#[from] NftError),
}

/// The data source shared by every transport.
///
/// `init_context` runs once per HTTP request and once per WebSocket
/// `connection_init`, before the context reaches any resolver.
#[async_trait]
pub trait MetaplexApi: Send + Sync {
    fn init_context(&self, context: &mut RequestContext);

    async fn nft(&self, address: &str) -> Result<Option<Nft>, ApiError>;

    async fn nfts_by_owner(
        &self,
        owner: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Nft>, ApiError>;

    async fn nfts_by_creator(
        &self,
        creator: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Nft>, ApiError>;

    async fn put_nft(&self, nft: Nft) -> Result<NftChange, ApiError>;

    fn changes(&self) -> broadcast::Receiver<NftChange>;
}

pub type SharedApi = Arc<dyn MetaplexApi>;
