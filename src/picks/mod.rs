pub mod confidence;
pub mod models;
pub mod ranker;
pub mod selector;
pub mod validator;

pub use confidence::{filter_high_confidence, ConfidenceThresholds};
pub use models::{Picks, Selection};
pub use ranker::rank_by_xgboost;
pub use selector::select;
pub use validator::validate_rows;

use rand::Rng;
use tracing::info;

use crate::feed::RawRow;

/// Number of runners-up shown under the headline by default.
pub const DEFAULT_SURPLUS_LEN: usize = 3;

/// Knobs for one run of the selection pipeline.
#[derive(Debug, Clone)]
pub struct SelectionRules {
    pub thresholds: ConfidenceThresholds,
    pub surplus_len: usize,
}

impl Default for SelectionRules {
    fn default() -> Self {
        SelectionRules {
            thresholds: ConfidenceThresholds::default(),
            surplus_len: DEFAULT_SURPLUS_LEN,
        }
    }
}

/// Validate → filter → rank → select over one day's parsed rows.
pub fn pick_from_rows<R: Rng>(
    rows: &[RawRow],
    rules: &SelectionRules,
    rng: &mut R,
) -> Selection {
    let valid = validate_rows(rows);
    let high_confidence = filter_high_confidence(&valid, &rules.thresholds);
    info!(
        "{} rows, {} valid, {} high-confidence",
        rows.len(),
        valid.len(),
        high_confidence.len()
    );
    let ranked = rank_by_xgboost(valid);
    select(&high_confidence, &ranked, rules.surplus_len, rng)
}
