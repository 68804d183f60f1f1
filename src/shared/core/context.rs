// Per-request context handed to resolvers.
//
// One value is built for every HTTP request and for every WebSocket connection.
// The data source fills in the rest through `MetaplexApi::init_context` before
// the value is attached to the GraphQL request data.

use serde_json::Value;
use uuid::Uuid;

#[derive(async_graphql::Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Http,
    WebSocket,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    pub connection_id: Uuid,
    pub transport: Transport,
    pub connection_params: Value,
    pub cluster: Option<String>,
    pub initialized_at: Option<i64>,
}

impl RequestContext {
    pub fn new(transport: Transport) -> Self {
        Self {
            connection_id: Uuid::now_v7(),
            transport,
            connection_params: Value::Null,
            cluster: None,
            initialized_at: None,
        }
    }

    pub fn over_http() -> Self {
        Self::new(Transport::Http)
    }

    /// Context for a WebSocket connection, carrying the `connection_init` payload.
    pub fn over_websocket(connection_params: Value) -> Self {
        Self {
            connection_params,
            ..Self::new(Transport::WebSocket)
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized_at.is_some()
    }
}
