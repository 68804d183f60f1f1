use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_CLUSTER: &str = "mainnet-beta";
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_millis(5_000);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub cluster: String,
    pub introspection: bool,
    pub seed_file: Option<PathBuf>,
    pub shutdown_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            cluster: DEFAULT_CLUSTER.to_string(),
            introspection: true,
            seed_file: None,
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
        }
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { key, value }),
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source; unset or empty variables keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            host: var("HOST")
                .map(|v| parse("HOST", v))
                .transpose()?
                .unwrap_or(defaults.host),
            port: var("PORT")
                .map(|v| parse("PORT", v))
                .transpose()?
                .unwrap_or(defaults.port),
            cluster: var("CLUSTER").unwrap_or(defaults.cluster),
            introspection: var("GRAPHQL_INTROSPECTION")
                .map(|v| parse_bool("GRAPHQL_INTROSPECTION", v))
                .transpose()?
                .unwrap_or(defaults.introspection),
            seed_file: var("SEED_FILE").map(PathBuf::from),
            shutdown_timeout: var("SHUTDOWN_TIMEOUT_MS")
                .map(|v| parse::<u64>("SHUTDOWN_TIMEOUT_MS", v))
                .transpose()?
                .map(Duration::from_millis)
                .unwrap_or(defaults.shutdown_timeout),
        })
    }
}

#[cfg(test)]
mod server_config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn it_should_default_to_port_4000() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 4000);
    }

    #[test]
    fn it_should_read_every_variable() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("CLUSTER", "devnet"),
            ("GRAPHQL_INTROSPECTION", "off"),
            ("SEED_FILE", "/tmp/nfts.json"),
            ("SHUTDOWN_TIMEOUT_MS", "250"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.cluster, "devnet");
        assert!(!config.introspection);
        assert_eq!(config.seed_file, Some(PathBuf::from("/tmp/nfts.json")));
        assert_eq!(config.shutdown_timeout, Duration::from_millis(250));
    }

    #[test]
    fn it_should_treat_empty_values_as_unset() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", ""), ("SEED_FILE", " ")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.seed_file, None);
    }

    #[rstest]
    #[case("PORT", "not-a-port")]
    #[case("PORT", "70000")]
    #[case("HOST", "localhost:1")]
    #[case("GRAPHQL_INTROSPECTION", "maybe")]
    #[case("SHUTDOWN_TIMEOUT_MS", "-1")]
    fn it_should_reject_malformed_values(#[case] key: &'static str, #[case] value: &str) {
        let result = ServerConfig::from_lookup(lookup(&[(key, value)]));
        assert_eq!(
            result,
            Err(ConfigError::Invalid {
                key,
                value: value.to_string()
            })
        );
    }
}
