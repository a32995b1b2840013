use crate::feed::{FieldValue, RawRow};

use super::models::PropRecord;

pub const PLAYER_NAME: &str = "PLAYER_NAME";
pub const PROP_TYPE: &str = "Prop_Type";
pub const LINE: &str = "Line";
pub const XGBOOST: &str = "xgboost";
pub const XGBOOST_RF: &str = "xgboost_rf";
pub const CATBOOST: &str = "catboost";
pub const ADV_NN: &str = "Adv_NN";
pub const XGB_REG: &str = "xgb_reg";
pub const XGB_RF_REG: &str = "xgb_rf_reg";

/// Convert one parsed row into a record, or reject it.
///
/// Requires a truthy `PLAYER_NAME` and `Prop_Type` and a non-null `Line`
/// (zero is fine). Missing or non-numeric score cells become `NaN`.
pub fn validate_row(row: &RawRow) -> Option<PropRecord> {
    let player_name = row.get(PLAYER_NAME).and_then(FieldValue::as_label)?;
    let prop_type = row.get(PROP_TYPE).and_then(FieldValue::as_label)?;
    let line = row.get(LINE).filter(|v| !v.is_null())?.as_number();

    let number = |key: &str| row.get(key).map_or(f64::NAN, FieldValue::as_number);

    Some(PropRecord {
        player_name,
        prop_type,
        line,
        xgboost: number(XGBOOST),
        xgboost_rf: number(XGBOOST_RF),
        catboost: number(CATBOOST),
        adv_nn: number(ADV_NN),
        xgb_reg: number(XGB_REG),
        xgb_rf_reg: number(XGB_RF_REG),
    })
}

/// Validate every row, silently dropping the rejects. Input order is kept.
pub fn validate_rows(rows: &[RawRow]) -> Vec<PropRecord> {
    rows.iter().filter_map(validate_row).collect()
}
