pub mod csv_rows;
pub mod http;
pub mod local;
pub mod provider;

pub use csv_rows::{parse_rows, FieldValue, RawRow};
pub use http::HttpPredictionSource;
pub use local::LocalDirSource;
pub use provider::PredictionSource;

use anyhow::Result;
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;

/// `YYYY-MM-DD`, zero padded.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Relative path of the prediction file for `date`.
pub fn predictions_path(date: NaiveDate) -> String {
    format!("predictions/predictions_{}.csv", date_key(date))
}

/// Build a source from a location string: `http://` / `https://` URLs are
/// fetched over the network, anything else is treated as a local directory.
pub fn source_from_location(
    location: &str,
    timeout: Duration,
) -> Result<Arc<dyn PredictionSource>> {
    let lower = location.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Ok(Arc::new(HttpPredictionSource::new(location, timeout)?))
    } else {
        Ok(Arc::new(LocalDirSource::new(location)))
    }
}
