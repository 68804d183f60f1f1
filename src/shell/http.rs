use async_graphql::Data;
use async_graphql::http::{ALL_WEBSOCKET_PROTOCOLS, GraphiQLSource, parse_query_string};
use async_graphql_axum::{GraphQLProtocol, GraphQLRequest, GraphQLResponse, GraphQLWebSocket};
use axum::{
    Router,
    extract::{
        RawQuery, State,
        ws::{WebSocketUpgrade, rejection::WebSocketUpgradeRejection},
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::shared::core::context::RequestContext;
use crate::shell::state::AppState;

/// Path shared by the HTTP endpoint and the WebSocket endpoint.
pub const GRAPHQL_PATH: &str = "/";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphql_get).post(graphql_post))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn execute(state: &AppState, request: async_graphql::Request) -> GraphQLResponse {
    let mut context = RequestContext::over_http();
    state.api.init_context(&mut context);
    state.schema.execute(request.data(context)).await.into()
}

async fn graphql_post(State(state): State<AppState>, request: GraphQLRequest) -> GraphQLResponse {
    execute(&state, request.into_inner()).await
}

async fn graphql_get(
    State(state): State<AppState>,
    upgrade: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
    protocol: Result<GraphQLProtocol, StatusCode>,
    RawQuery(query): RawQuery,
) -> Response {
    if let Ok(upgrade) = upgrade {
        return match protocol {
            Ok(protocol) => websocket(state, protocol, upgrade),
            Err(status) => status.into_response(),
        };
    }

    match query.filter(|q| !q.is_empty()) {
        Some(query) => match parse_query_string(&query) {
            Ok(request) => execute(&state, request).await.into_response(),
            Err(err) => (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
        },
        None => Html(
            GraphiQLSource::build()
                .endpoint(GRAPHQL_PATH)
                .subscription_endpoint(GRAPHQL_PATH)
                .finish(),
        )
        .into_response(),
    }
}

fn websocket(state: AppState, protocol: GraphQLProtocol, upgrade: WebSocketUpgrade) -> Response {
    if state.subscriptions.is_closed() {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }

    upgrade
        .protocols(ALL_WEBSOCKET_PROTOCOLS)
        .on_upgrade(move |stream| async move {
            let api = state.api.clone();
            let connection = GraphQLWebSocket::new(stream, state.schema.clone(), protocol)
                .on_connection_init(move |params| async move {
                    let mut context = RequestContext::over_websocket(params);
                    api.init_context(&mut context);
                    tracing::debug!(
                        connection_id = %context.connection_id,
                        "subscription connection initialised"
                    );
                    let mut data = Data::default();
                    data.insert(context);
                    Ok(data)
                })
                .serve();
            state.subscriptions.serve_connection(connection).await;
        })
}
