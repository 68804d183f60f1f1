use crate::modules::nfts::api_port::{ApiError, MetaplexApi};
use crate::modules::nfts::core::nft::Nft;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads a JSON array of NFT records.
pub async fn load_seed_file(path: &Path) -> Result<Vec<Nft>, SeedError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub async fn seed(api: &dyn MetaplexApi, nfts: Vec<Nft>) -> Result<usize, ApiError> {
    let count = nfts.len();
    for nft in nfts {
        api.put_nft(nft).await?;
    }
    Ok(count)
}
