//! Staged "analysis" presentation around one prediction cycle.
//!
//! The animation advances on its own clock; the result is revealed only once
//! the animation has finished *and* the data task has reported. All state
//! lives in [`PresentationState`], which only the coordinator mutates.

pub mod controller;
pub mod render;

pub use controller::{run_cycle, CycleEnd, CycleSettings};
pub use render::render_view;

use serde::Serialize;
use std::time::Duration;
use tracing::warn;

use crate::error::CycleError;
use crate::picks::{Picks, Selection};

/// Result published by the data task.
pub type CycleOutcome = Result<Selection, CycleError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    LoadingData,
    FeatureEngineering,
    AnalyzingMatchups,
    CalculatingProbabilities,
    Finalizing,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::LoadingData,
        Stage::FeatureEngineering,
        Stage::AnalyzingMatchups,
        Stage::CalculatingProbabilities,
        Stage::Finalizing,
    ];

    /// Stage shown at a given progress percentage (20 points per stage).
    pub fn for_progress(progress: u8) -> Stage {
        let idx = (progress / 20) as usize;
        Stage::ALL[idx.min(Stage::ALL.len() - 1)]
    }

    pub fn title(self) -> &'static str {
        match self {
            Stage::LoadingData => "LOADING PLAYER DATA",
            Stage::FeatureEngineering => "FEATURE ENGINEERING",
            Stage::AnalyzingMatchups => "ANALYZING MATCHUPS",
            Stage::CalculatingProbabilities => "CALCULATING PROBABILITIES",
            Stage::Finalizing => "FINALIZING PREDICTION",
        }
    }
}

/// Cadence of the progress animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Time between progress steps
    pub tick: Duration,
    /// Percentage points added per tick
    pub step: u8,
    /// Results are never revealed earlier than this after the cycle starts
    pub min_duration: Duration,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            tick: Duration::from_millis(500),
            step: 5,
            // 20 steps to 100% plus the closing tick
            min_duration: Duration::from_millis(10_500),
        }
    }
}

/// What the terminal should show right now. Exactly one variant at a time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum View {
    Analyzing { stage: Stage, progress: u8 },
    Loading,
    Error { message: String },
    Headline { picks: Picks },
    Empty,
}

/// Presentation state owned by the coordinator.
#[derive(Debug, Default)]
pub struct PresentationState {
    progress: u8,
    animation_done: bool,
    outcome: Option<CycleOutcome>,
}

impl PresentationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the progress bar forward. Progress never goes backwards and
    /// saturates at 100.
    pub fn advance_to(&mut self, progress: u8) {
        self.progress = self.progress.max(progress.min(100));
    }

    pub fn finish_animation(&mut self) {
        self.progress = 100;
        self.animation_done = true;
    }

    /// Store the data task's result. The first write wins.
    pub fn record_outcome(&mut self, outcome: CycleOutcome) {
        if self.outcome.is_some() {
            warn!("Cycle outcome already recorded, ignoring second write");
            return;
        }
        self.outcome = Some(outcome);
    }

    pub fn has_outcome(&self) -> bool {
        self.outcome.is_some()
    }

    /// Both the animation and the data task are finished.
    pub fn is_complete(&self) -> bool {
        self.animation_done && self.outcome.is_some()
    }

    pub fn view(&self) -> View {
        if !self.animation_done {
            return View::Analyzing {
                stage: Stage::for_progress(self.progress),
                progress: self.progress,
            };
        }
        match &self.outcome {
            None => View::Loading,
            Some(Err(e)) => View::Error {
                message: e.to_string(),
            },
            Some(Ok(Selection::Picks(picks))) => View::Headline {
                picks: picks.clone(),
            },
            Some(Ok(Selection::Empty)) => View::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picks::models::{HeadlinePick, PropRecord};

    fn sample_picks() -> Picks {
        let r = PropRecord {
            player_name: "Tyrese Haliburton".into(),
            prop_type: "Points assists rebounds".into(),
            line: 31.5,
            xgboost: 0.69,
            xgboost_rf: 0.58,
            catboost: 1.0,
            adv_nn: 0.72,
            xgb_reg: 33.0,
            xgb_rf_reg: 32.4,
        };
        Picks {
            headline: HeadlinePick::from_record(&r),
            surplus: Vec::new(),
        }
    }

    #[test]
    fn stage_follows_progress() {
        assert_eq!(Stage::for_progress(0), Stage::LoadingData);
        assert_eq!(Stage::for_progress(19), Stage::LoadingData);
        assert_eq!(Stage::for_progress(20), Stage::FeatureEngineering);
        assert_eq!(Stage::for_progress(65), Stage::CalculatingProbabilities);
        assert_eq!(Stage::for_progress(95), Stage::Finalizing);
        assert_eq!(Stage::for_progress(100), Stage::Finalizing);
    }

    #[test]
    fn result_hidden_until_animation_finishes() {
        let mut s = PresentationState::new();
        s.record_outcome(Ok(Selection::Picks(sample_picks())));
        s.advance_to(95);
        assert!(matches!(s.view(), View::Analyzing { progress: 95, .. }));
        assert!(!s.is_complete());

        s.finish_animation();
        assert!(s.is_complete());
        assert!(matches!(s.view(), View::Headline { .. }));
    }

    #[test]
    fn loading_when_animation_done_but_data_pending() {
        let mut s = PresentationState::new();
        s.finish_animation();
        assert_eq!(s.view(), View::Loading);
        assert!(!s.is_complete());
    }

    #[test]
    fn error_and_empty_views() {
        let mut s = PresentationState::new();
        s.finish_animation();
        s.record_outcome(Err(CycleError::EmptyResult));
        assert_eq!(
            s.view(),
            View::Error {
                message: "No prediction data found".into()
            }
        );

        let mut s = PresentationState::new();
        s.finish_animation();
        s.record_outcome(Ok(Selection::Empty));
        assert_eq!(s.view(), View::Empty);
    }

    #[test]
    fn outcome_is_write_once() {
        let mut s = PresentationState::new();
        s.finish_animation();
        s.record_outcome(Ok(Selection::Empty));
        s.record_outcome(Err(CycleError::EmptyResult));
        assert_eq!(s.view(), View::Empty);
    }

    #[test]
    fn progress_is_monotonic_and_capped() {
        let mut s = PresentationState::new();
        s.advance_to(40);
        s.advance_to(25);
        assert!(matches!(s.view(), View::Analyzing { progress: 40, .. }));
        s.advance_to(250);
        assert!(matches!(s.view(), View::Analyzing { progress: 100, .. }));
    }

    #[test]
    fn view_serializes_with_state_tag() {
        let v = serde_json::to_value(View::Loading).unwrap();
        assert_eq!(v["state"], "loading");
        let v = serde_json::to_value(View::Headline {
            picks: sample_picks(),
        })
        .unwrap();
        assert_eq!(v["state"], "headline");
        assert_eq!(
            v["data"]["picks"]["headline"]["propType"],
            "POINTS ASSISTS REBOUNDS"
        );
    }
}
