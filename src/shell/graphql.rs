use async_graphql::{Context, MergedObject, Object, Result as GqlResult, Schema, SimpleObject};

use crate::modules::nfts::api_port::SharedApi;
pub use crate::modules::nfts::use_cases::query_nfts::inbound::graphql::NftQuery;
pub use crate::modules::nfts::use_cases::upsert_nft::inbound::graphql::MutationRoot;
pub use crate::modules::nfts::use_cases::watch_nft_changes::inbound::graphql::NftSubscription as SubscriptionRoot;
use crate::shared::core::context::{RequestContext, Transport};

/// The request context as resolvers see it.
#[derive(SimpleObject)]
pub struct GqlSession {
    pub connection_id: String,
    pub transport: Transport,
    pub cluster: Option<String>,
    pub initialized_at: Option<i64>,
}

impl From<&RequestContext> for GqlSession {
    fn from(c: &RequestContext) -> Self {
        Self {
            connection_id: c.connection_id.to_string(),
            transport: c.transport,
            cluster: c.cluster.clone(),
            initialized_at: c.initialized_at,
        }
    }
}

#[derive(Default)]
pub struct SessionQuery;

#[Object]
impl SessionQuery {
    async fn session(&self, context: &Context<'_>) -> GqlResult<GqlSession> {
        Ok(context.data::<RequestContext>()?.into())
    }
}

#[derive(MergedObject, Default)]
pub struct QueryRoot(NftQuery, SessionQuery);

pub type AppSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

pub fn build_schema(api: SharedApi, introspection: bool) -> AppSchema {
    let builder = Schema::build(QueryRoot::default(), MutationRoot, SubscriptionRoot).data(api);
    if introspection {
        builder.finish()
    } else {
        builder.disable_introspection().finish()
    }
}
