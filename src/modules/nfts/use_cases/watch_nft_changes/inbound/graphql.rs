use async_graphql::{Context, Result, Subscription};
use futures_util::future::ready;
use futures_util::{Stream, StreamExt};

use crate::modules::nfts::api_port::SharedApi;
use crate::modules::nfts::core::changes::NftChange;
use crate::modules::nfts::use_cases::upsert_nft::inbound::graphql::GqlNftChange;
use crate::shared::infrastructure::change_feed;

fn matches(change: &NftChange, address: Option<&str>, owner: Option<&str>) -> bool {
    address.is_none_or(|a| change.nft.address == a) && owner.is_none_or(|o| change.nft.owner == o)
}

pub struct NftSubscription;

#[Subscription]
impl NftSubscription {
    /// Every accepted write, optionally narrowed to one address or owner.
    async fn nft_changed(
        &self,
        context: &Context<'_>,
        address: Option<String>,
        owner: Option<String>,
    ) -> Result<impl Stream<Item = GqlNftChange>> {
        let api = context.data::<SharedApi>()?;
        let changes = change_feed::stream(api.changes());

        Ok(changes
            .filter(move |change| ready(matches(change, address.as_deref(), owner.as_deref())))
            .map(GqlNftChange::from))
    }
}
