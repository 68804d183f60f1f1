use tracing_subscriber::{EnvFilter, fmt};

pub const DEFAULT_FILTER: &str = "metaplex_graphql=info,tower_http=info";

pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt().with_env_filter(env_filter).init();
}
