use super::models::PropRecord;

/// Multi-model agreement rule for a "high confidence" pick.
///
/// Every comparison is strict, so a `NaN` score never qualifies.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceThresholds {
    /// Prop categories eligible for the headline (exact, case-sensitive match)
    pub prop_types: Vec<String>,
    pub min_xgboost: f64,
    pub min_xgboost_rf: f64,
    /// Required catboost class
    pub catboost_class: f64,
    pub min_adv_nn: f64,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        ConfidenceThresholds {
            prop_types: [
                "Fantasy score",
                "Points assists rebounds",
                "Rebounds assists",
                "Points rebounds",
                "Rebounds",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            min_xgboost: 0.65,
            min_xgboost_rf: 0.55,
            catboost_class: 1.0,
            min_adv_nn: 0.7,
        }
    }
}

impl ConfidenceThresholds {
    pub fn is_high_confidence(&self, r: &PropRecord) -> bool {
        self.prop_types.iter().any(|p| *p == r.prop_type)
            && r.xgboost > self.min_xgboost
            && r.xgboost_rf > self.min_xgboost_rf
            && r.catboost == self.catboost_class
            && r.adv_nn > self.min_adv_nn
            && r.xgb_reg > r.line
            && r.xgb_rf_reg > r.line
    }
}

/// Order-preserving subsequence of records passing every threshold.
pub fn filter_high_confidence(
    records: &[PropRecord],
    thresholds: &ConfidenceThresholds,
) -> Vec<PropRecord> {
    records
        .iter()
        .filter(|r| thresholds.is_high_confidence(r))
        .cloned()
        .collect()
}
