use crate::modules::nfts::api_port::SharedApi;
use crate::shell::graphql::AppSchema;
use crate::shell::subscriptions::SubscriptionServer;

#[derive(Clone)]
pub struct AppState {
    pub schema: AppSchema,
    pub api: SharedApi,
    pub subscriptions: SubscriptionServer,
}
