use std::cmp::Ordering;

use super::models::PropRecord;

/// Sort by `xgboost`, highest first. The sort is stable, so equal scores keep
/// their input order; `NaN` scores sink below every real score.
pub fn rank_by_xgboost(mut records: Vec<PropRecord>) -> Vec<PropRecord> {
    records.sort_by(|a, b| {
        rank_key(b.xgboost)
            .partial_cmp(&rank_key(a.xgboost))
            .unwrap_or(Ordering::Equal)
    });
    records
}

fn rank_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score
    }
}
