use anyhow::Result;
use async_trait::async_trait;

/// Trait that every prediction-file source must implement.
#[async_trait]
pub trait PredictionSource: Send + Sync {
    /// Fetch the raw bytes of the file at `path`, relative to the source root.
    async fn fetch(&self, path: &str) -> Result<Vec<u8>>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}
