// In memory Metaplex data source.
//
// Purpose
// - Serve NFT metadata without an RPC node or indexer.
//
// Responsibilities
// - Store records in a map keyed by metadata address.
// - Assign a slot to every accepted write and publish it on the change feed.
// - Stamp request contexts with the cluster it serves.

use crate::modules::nfts::api_port::{ApiError, MetaplexApi};
use crate::modules::nfts::core::changes::{NftChange, NftChangeKind};
use crate::modules::nfts::core::nft::Nft;
use crate::shared::core::context::RequestContext;
use crate::shared::infrastructure::change_feed::ChangeFeed;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{RwLock, broadcast};

pub struct InMemoryMetaplexApi {
    cluster: String,
    nfts: RwLock<HashMap<String, Nft>>,
    slot: AtomicU64,
    feed: ChangeFeed<NftChange>,
    is_offline: bool,
}

impl InMemoryMetaplexApi {
    pub fn new(cluster: impl Into<String>) -> Self {
        Self {
            cluster: cluster.into(),
            nfts: RwLock::new(HashMap::new()),
            slot: AtomicU64::new(0),
            feed: ChangeFeed::default(),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn subscriber_count(&self) -> usize {
        self.feed.subscriber_count()
    }

    fn ensure_online(&self) -> Result<(), ApiError> {
        if self.is_offline {
            return Err(ApiError::Offline);
        }
        Ok(())
    }

    async fn list_where(
        &self,
        offset: u64,
        limit: u64,
        predicate: impl Fn(&Nft) -> bool,
    ) -> Result<Vec<Nft>, ApiError> {
        self.ensure_online()?;

        let guard = self.nfts.read().await;
        let mut items: Vec<Nft> = guard.values().filter(|n| predicate(*n)).cloned().collect();
        items.sort_by(|a, b| a.address.cmp(&b.address));

        Ok(items
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}

#[async_trait]
impl MetaplexApi for InMemoryMetaplexApi {
    fn init_context(&self, context: &mut RequestContext) {
        context.cluster = Some(self.cluster.clone());
        context.initialized_at = Some(Utc::now().timestamp_millis());
    }

    async fn nft(&self, address: &str) -> Result<Option<Nft>, ApiError> {
        self.ensure_online()?;
        Ok(self.nfts.read().await.get(address).cloned())
    }

    async fn nfts_by_owner(
        &self,
        owner: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Nft>, ApiError> {
        self.list_where(offset, limit, |n| n.owner == owner).await
    }

    async fn nfts_by_creator(
        &self,
        creator: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Nft>, ApiError> {
        self.list_where(offset, limit, |n| n.has_creator(creator))
            .await
    }

    async fn put_nft(&self, nft: Nft) -> Result<NftChange, ApiError> {
        self.ensure_online()?;
        nft.validate()?;

        // Slot is taken under the write lock so feed order matches store order.
        let change = {
            let mut guard = self.nfts.write().await;
            let kind = match guard.insert(nft.address.clone(), nft.clone()) {
                Some(_) => NftChangeKind::Updated,
                None => NftChangeKind::Created,
            };
            let slot = self.slot.fetch_add(1, Ordering::SeqCst) + 1;
            let change = NftChange { kind, slot, nft };
            self.feed.publish(change.clone());
            change
        };

        tracing::debug!(
            address = %change.nft.address,
            slot = change.slot,
            kind = ?change.kind,
            "nft stored"
        );
        Ok(change)
    }

    fn changes(&self) -> broadcast::Receiver<NftChange> {
        self.feed.subscribe()
    }
}
