// Server lifecycle.
//
// Construction order is fixed: schema, subscription server, router. The HTTP
// server's graceful shutdown closes the subscription server first, then axum
// drains in-flight HTTP requests, then the subscription connections get a
// bounded window to finish.

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::modules::nfts::api_port::SharedApi;
use crate::shell::config::ServerConfig;
use crate::shell::graphql::build_schema;
use crate::shell::http::{GRAPHQL_PATH, router};
use crate::shell::state::AppState;
use crate::shell::subscriptions::SubscriptionServer;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Serve(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerUrls {
    pub graphql: String,
    pub subscriptions: String,
}

impl ServerUrls {
    pub fn for_port(port: u16) -> Self {
        Self {
            graphql: format!("http://localhost:{port}{GRAPHQL_PATH}"),
            subscriptions: format!("ws://localhost:{port}{GRAPHQL_PATH}"),
        }
    }

    /// The two startup lines, one per transport.
    pub fn announcements(&self) -> [String; 2] {
        [
            format!("Server ready at {}", self.graphql),
            format!("Subscription ready at {}", self.subscriptions),
        ]
    }
}

pub struct GraphqlServer {
    pub state: AppState,
    pub router: Router,
    pub shutdown_timeout: Duration,
}

pub fn get_server(api: SharedApi, config: &ServerConfig) -> GraphqlServer {
    let schema = build_schema(api.clone(), config.introspection);
    let subscriptions = SubscriptionServer::new();
    let state = AppState {
        schema,
        api,
        subscriptions,
    };
    let router = router(state.clone());

    GraphqlServer {
        state,
        router,
        shutdown_timeout: config.shutdown_timeout,
    }
}

/// Serves until `shutdown` resolves, then drains both transports.
pub async fn serve<F>(
    listener: TcpListener,
    server: GraphqlServer,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let port = listener.local_addr()?.port();
    let urls = ServerUrls::for_port(port);
    let subscriptions = server.state.subscriptions.clone();

    for line in urls.announcements() {
        tracing::info!("{line}");
    }

    let closing = subscriptions.clone();
    axum::serve(listener, server.router)
        .with_graceful_shutdown(async move {
            shutdown.await;
            tracing::info!("shutting down");
            closing.close();
        })
        .await?;

    if tokio::time::timeout(server.shutdown_timeout, subscriptions.drained())
        .await
        .is_err()
    {
        tracing::warn!(
            remaining = subscriptions.active_connections(),
            "subscription connections still open after shutdown timeout"
        );
    }

    tracing::info!("server stopped");
    Ok(())
}

pub async fn start_server(api: SharedApi, config: &ServerConfig) -> Result<(), ServerError> {
    let server = get_server(api, config);

    let addr = SocketAddr::new(config.host, config.port);
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    serve(listener, server, shutdown_signal()).await
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
