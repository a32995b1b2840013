use serde::Serialize;

/// One model-scored prediction for one player/prop on one date.
///
/// Score fields that were missing or non-numeric in the source row hold `NaN`,
/// which fails every threshold comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct PropRecord {
    pub player_name: String,
    /// e.g. "Points rebounds", "Fantasy score"
    pub prop_type: String,
    /// Statistical threshold the prediction is over/under
    pub line: f64,
    /// Primary confidence score (0.0–1.0)
    pub xgboost: f64,
    pub xgboost_rf: f64,
    /// Binary classifier output, expected to be exactly 0 or 1
    pub catboost: f64,
    pub adv_nn: f64,
    /// Regression-predicted value for the stat
    pub xgb_reg: f64,
    pub xgb_rf_reg: f64,
}

/// Headline card payload: a display copy of the chosen record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlinePick {
    pub player_name: String,
    /// Upper-cased for display
    pub prop_type: String,
    pub line: f64,
    pub xgboost: f64,
    pub xgboost_rf: f64,
    pub catboost: f64,
    #[serde(rename = "advNN")]
    pub adv_nn: f64,
    pub xgb_reg: f64,
    pub xgb_rf_reg: f64,
    /// `round(xgboost * 100)`
    pub confidence_percent: f64,
}

impl HeadlinePick {
    pub fn from_record(record: &PropRecord) -> Self {
        HeadlinePick {
            player_name: record.player_name.clone(),
            prop_type: record.prop_type.to_uppercase(),
            line: record.line,
            xgboost: record.xgboost,
            xgboost_rf: record.xgboost_rf,
            catboost: record.catboost,
            adv_nn: record.adv_nn,
            xgb_reg: record.xgb_reg,
            xgb_rf_reg: record.xgb_rf_reg,
            confidence_percent: confidence_percent(record.xgboost),
        }
    }
}

/// Runner-up row shown under the headline card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurplusPick {
    pub player_name: String,
    pub prop_type: String,
    pub line: f64,
    pub xgboost: f64,
}

impl SurplusPick {
    pub fn from_record(record: &PropRecord) -> Self {
        SurplusPick {
            player_name: record.player_name.clone(),
            prop_type: record.prop_type.to_uppercase(),
            line: record.line,
            xgboost: record.xgboost,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Picks {
    pub headline: HeadlinePick,
    pub surplus: Vec<SurplusPick>,
}

/// Outcome of the selector for one cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Picks(Picks),
    /// No valid records: "no predictions available".
    Empty,
}

/// Half-up rounding of the primary score to a whole percentage. `NaN` stays `NaN`.
pub fn confidence_percent(xgboost: f64) -> f64 {
    (xgboost * 100.0 + 0.5).floor()
}
