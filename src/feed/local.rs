use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

use super::provider::PredictionSource;

/// Prediction files read from a directory on disk.
pub struct LocalDirSource {
    root: PathBuf,
}

impl LocalDirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        LocalDirSource { root: root.into() }
    }
}

#[async_trait]
impl PredictionSource for LocalDirSource {
    fn name(&self) -> &str {
        "LocalDir"
    }

    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let full = self.root.join(path);
        debug!("Reading predictions from {}", full.display());
        tokio::fs::read(&full)
            .await
            .with_context(|| format!("failed to read {}", full.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "prop-picker-{}-{}",
            tag,
            std::process::id()
        ));
        std::fs::create_dir_all(dir.join("predictions")).unwrap();
        dir
    }

    #[tokio::test]
    async fn reads_relative_to_root() {
        let dir = scratch_dir("read");
        std::fs::write(
            dir.join("predictions/predictions_2025-01-07.csv"),
            "PLAYER_NAME,Prop_Type,Line\n",
        )
        .unwrap();

        let source = LocalDirSource::new(&dir);
        let bytes = source
            .fetch("predictions/predictions_2025-01-07.csv")
            .await
            .unwrap();
        assert_eq!(bytes, b"PLAYER_NAME,Prop_Type,Line\n");

        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn missing_file_names_the_path() {
        let dir = scratch_dir("missing");
        let source = LocalDirSource::new(&dir);
        let err = source
            .fetch("predictions/predictions_1999-12-31.csv")
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("predictions_1999-12-31.csv"));

        std::fs::remove_dir_all(dir).ok();
    }
}
