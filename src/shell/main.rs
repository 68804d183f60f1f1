use std::sync::Arc;

use metaplex_graphql::modules::nfts::adapters::outbound::in_memory_api::InMemoryMetaplexApi;
use metaplex_graphql::modules::nfts::adapters::outbound::seed_file::{load_seed_file, seed};
use metaplex_graphql::modules::nfts::api_port::SharedApi;
use metaplex_graphql::shell::config::ServerConfig;
use metaplex_graphql::shell::server::start_server;
use metaplex_graphql::shell::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init();

    let config = ServerConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    // In-memory data source for now
    let api: SharedApi = Arc::new(InMemoryMetaplexApi::new(config.cluster.clone()));

    if let Some(path) = &config.seed_file {
        let nfts = load_seed_file(path).await?;
        let count = seed(api.as_ref(), nfts).await?;
        tracing::info!(count, path = %path.display(), "seeded data source");
    }

    start_server(api, &config).await?;
    Ok(())
}
