use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::watch;
use tracing::info;

mod config;
mod error;
mod feed;
mod picks;
mod presentation;

use config::Config;
use presentation::{render_view, run_cycle, CycleEnd, CycleSettings, View};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the rendered result
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    let date = config.prediction_date();
    let source = feed::source_from_location(&config.source, config.fetch_timeout())?;
    info!(
        "Prediction cycle for {} from {} ({})",
        feed::date_key(date),
        config.source,
        source.name()
    );

    let rng = match config.seed {
        Some(seed) => {
            info!("Headline draw seeded with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let settings = CycleSettings {
        date,
        animation: config.animation(),
        fetch_delay: config.fetch_delay(),
        rules: config.rules(),
    };

    let (view_tx, mut view_rx) = watch::channel(View::Loading);

    // Terminal printer follows the published views until the cycle ends
    let show_progress = !config.json;
    let printer = tokio::spawn(async move {
        let mut last_progress = None;
        while view_rx.changed().await.is_ok() {
            let view = view_rx.borrow_and_update().clone();
            if let View::Analyzing { progress, .. } = view {
                if show_progress && last_progress != Some(progress) {
                    println!("{}", render_view(&view));
                }
                last_progress = Some(progress);
            }
        }
    });

    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    let end = run_cycle(source, settings, rng, view_tx, shutdown).await;
    let _ = printer.await;

    match end {
        CycleEnd::Rendered(view) => {
            if config.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!();
                println!("{}", render_view(&view));
            }
        }
        CycleEnd::Cancelled => info!("Interrupted, no result shown"),
    }

    Ok(())
}
