use chrono::{Local, NaiveDate};
use clap::Parser;
use std::time::Duration;

use crate::picks::SelectionRules;
use crate::presentation::AnimationConfig;

/// Daily player-prop pick selector
#[derive(Parser, Debug, Clone)]
#[command(name = "prop-picker", version, about)]
pub struct Config {
    /// Where prediction files live: an http(s) base URL or a local directory
    #[arg(long, env = "PREDICTIONS_SOURCE", default_value = ".")]
    pub source: String,

    /// Prediction date (YYYY-MM-DD); defaults to today in local time
    #[arg(long, env = "PREDICTIONS_DATE")]
    pub date: Option<NaiveDate>,

    /// Seed for the headline draw (random when unset)
    #[arg(long, env = "PICK_SEED")]
    pub seed: Option<u64>,

    /// Number of runner-up picks shown under the headline
    #[arg(long, env = "SURPLUS_COUNT", default_value = "3")]
    pub surplus_count: usize,

    /// Milliseconds between animation steps
    #[arg(long, env = "TICK_MS", default_value = "500")]
    pub tick_ms: u64,

    /// Progress percentage added per animation step (1–100)
    #[arg(long, env = "PROGRESS_STEP", default_value = "5")]
    pub progress_step: u8,

    /// Minimum milliseconds before a result may be shown
    #[arg(long, env = "MIN_DISPLAY_MS", default_value = "10500")]
    pub min_display_ms: u64,

    /// Delay before the prediction file is fetched, in milliseconds
    #[arg(long, env = "FETCH_DELAY_MS", default_value = "2000")]
    pub fetch_delay_ms: u64,

    /// HTTP fetch timeout in seconds
    #[arg(long, env = "FETCH_TIMEOUT_SECS", default_value = "10")]
    pub fetch_timeout_secs: u64,

    /// Print the final result as JSON instead of the text card
    #[arg(long, env = "JSON_OUTPUT", default_value = "false")]
    pub json: bool,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.source.trim().is_empty() {
            anyhow::bail!("source must not be empty");
        }
        if self.tick_ms == 0 {
            anyhow::bail!("tick_ms must be positive");
        }
        if !(1..=100).contains(&self.progress_step) {
            anyhow::bail!("progress_step must be between 1 and 100");
        }
        if self.fetch_timeout_secs == 0 {
            anyhow::bail!("fetch_timeout_secs must be positive");
        }
        Ok(())
    }

    pub fn prediction_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn animation(&self) -> AnimationConfig {
        AnimationConfig {
            tick: Duration::from_millis(self.tick_ms),
            step: self.progress_step,
            min_duration: Duration::from_millis(self.min_display_ms),
        }
    }

    pub fn rules(&self) -> SelectionRules {
        SelectionRules {
            surplus_len: self.surplus_count,
            ..SelectionRules::default()
        }
    }

    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
