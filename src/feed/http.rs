use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::provider::PredictionSource;

/// Prediction files served over HTTP(S) under a base URL.
pub struct HttpPredictionSource {
    http: Client,
    base_url: Url,
}

impl HttpPredictionSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        let mut base_url =
            Url::parse(base_url).with_context(|| format!("Invalid base URL '{}'", base_url))?;
        // Url::join replaces the last segment unless the path ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(HttpPredictionSource { http, base_url })
    }

    pub fn url_for(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Cannot resolve '{}' against {}", path, self.base_url))
    }
}

#[async_trait]
impl PredictionSource for HttpPredictionSource {
    fn name(&self) -> &str {
        "Http"
    }

    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.url_for(path)?;
        debug!("Fetching predictions from {}", url);

        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;

        if !resp.status().is_success() {
            anyhow::bail!("{} returned {}", url, resp.status());
        }

        let body = resp
            .bytes()
            .await
            .with_context(|| format!("failed to read body from {}", url))?;
        Ok(body.to_vec())
    }
}
