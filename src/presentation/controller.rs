use chrono::NaiveDate;
use rand::rngs::StdRng;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{error, info, warn};

use super::{AnimationConfig, CycleOutcome, PresentationState, View};
use crate::error::CycleError;
use crate::feed::{self, PredictionSource};
use crate::picks::{self, Selection, SelectionRules};

/// Everything one prediction cycle needs besides its collaborators.
#[derive(Debug, Clone)]
pub struct CycleSettings {
    pub date: NaiveDate,
    pub animation: AnimationConfig,
    /// Pause before the data task starts fetching
    pub fetch_delay: Duration,
    pub rules: SelectionRules,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CycleEnd {
    /// Animation finished and the data task reported; this is the final view.
    Rendered(View),
    /// Shutdown arrived first; both tasks were aborted.
    Cancelled,
}

#[derive(Debug)]
enum AnimationEvent {
    Progress(u8),
    Finished,
}

/// Run one prediction cycle.
///
/// Spawns the animation task and the data task, publishes every state change
/// on `views`, and returns once both have completed or `shutdown` resolves.
pub async fn run_cycle<F>(
    source: Arc<dyn PredictionSource>,
    settings: CycleSettings,
    rng: StdRng,
    views: watch::Sender<View>,
    shutdown: F,
) -> CycleEnd
where
    F: Future<Output = ()>,
{
    let (anim_tx, mut anim_rx) = mpsc::channel(32);
    let animation = tokio::spawn(run_animation(settings.animation.clone(), anim_tx));
    let mut data = tokio::spawn(run_data_task(
        source,
        settings.date,
        settings.fetch_delay,
        settings.rules,
        rng,
    ));

    let mut state = PresentationState::new();
    views.send_replace(state.view());
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                animation.abort();
                data.abort();
                info!("Cycle cancelled before completion");
                return CycleEnd::Cancelled;
            }
            Some(event) = anim_rx.recv() => match event {
                AnimationEvent::Progress(p) => state.advance_to(p),
                AnimationEvent::Finished => state.finish_animation(),
            },
            joined = &mut data, if !state.has_outcome() => {
                let outcome = joined.unwrap_or_else(|e| {
                    error!("Data task failed: {}", e);
                    Err(CycleError::Task(e.to_string()))
                });
                state.record_outcome(outcome);
            }
        }

        views.send_replace(state.view());
        if state.is_complete() {
            break;
        }
    }

    let view = state.view();
    info!("Cycle complete: {}", view_label(&view));
    CycleEnd::Rendered(view)
}

fn view_label(view: &View) -> &'static str {
    match view {
        View::Analyzing { .. } => "analyzing",
        View::Loading => "loading",
        View::Error { .. } => "error",
        View::Headline { .. } => "headline",
        View::Empty => "empty",
    }
}

/// Step the progress bar on a fixed cadence, then hold until the minimum
/// display time has passed.
async fn run_animation(config: AnimationConfig, events: mpsc::Sender<AnimationEvent>) {
    let started = Instant::now();
    let step = config.step.max(1);
    let tick = config.tick.max(Duration::from_millis(1));
    let mut interval = tokio::time::interval_at(started + tick, tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut progress: u8 = 0;
    while progress < 100 {
        interval.tick().await;
        progress = progress.saturating_add(step).min(100);
        if events.send(AnimationEvent::Progress(progress)).await.is_err() {
            return;
        }
    }

    tokio::time::sleep_until(started + config.min_duration).await;
    let _ = events.send(AnimationEvent::Finished).await;
}

/// Fetch → parse → select for the configured date.
async fn run_data_task(
    source: Arc<dyn PredictionSource>,
    date: NaiveDate,
    fetch_delay: Duration,
    rules: SelectionRules,
    mut rng: StdRng,
) -> CycleOutcome {
    tokio::time::sleep(fetch_delay).await;

    let date_key = feed::date_key(date);
    let path = feed::predictions_path(date);
    info!("Fetching {} via {}", path, source.name());

    let bytes = source.fetch(&path).await.map_err(|e| {
        warn!("Error loading prediction file: {:#}", e);
        CycleError::Fetch {
            date: date_key.clone(),
            path: path.clone(),
            reason: format!("{:#}", e),
        }
    })?;

    let rows = feed::parse_rows(&bytes).map_err(|e| {
        warn!("Error parsing {}: {}", path, e);
        CycleError::Parse(e.to_string())
    })?;
    if rows.is_empty() {
        return Err(CycleError::EmptyResult);
    }

    let selection = picks::pick_from_rows(&rows, &rules, &mut rng);
    if selection == Selection::Empty {
        info!("No valid rows in {}", path);
    }
    Ok(selection)
}
