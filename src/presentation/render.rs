use std::fmt::Write;

use super::View;
use crate::picks::Picks;

const BAR_WIDTH: usize = 40;

/// Plain-text rendering of a view for the terminal.
pub fn render_view(view: &View) -> String {
    match view {
        View::Analyzing { stage, progress } => {
            let filled = BAR_WIDTH * (*progress as usize) / 100;
            format!(
                "{:<27} [{}{}] {}% COMPLETE",
                stage.title(),
                "#".repeat(filled),
                ".".repeat(BAR_WIDTH - filled),
                progress
            )
        }
        View::Loading => "Loading prediction data...".to_string(),
        View::Error { message } => message.clone(),
        View::Headline { picks } => render_card(picks),
        View::Empty => "No predictions available".to_string(),
    }
}

fn render_card(picks: &Picks) -> String {
    let h = &picks.headline;
    let mut out = String::new();

    // Writing into a String never fails
    let _ = writeln!(out, "HIGH CONFIDENCE PICK IDENTIFIED");
    let _ = writeln!(out);
    let _ = writeln!(out, "PLAYER      {}", h.player_name);
    let _ = writeln!(out, "PREDICTION  OVER {} {}", h.line, h.prop_type);
    let _ = writeln!(out);
    let _ = writeln!(out, "  XGBOOST      {}", percent(h.xgboost));
    let _ = writeln!(out, "  XGBOOST RF   {}", percent(h.xgboost_rf));
    let _ = writeln!(out, "  CATBOOST     {}", percent(h.catboost));
    let _ = writeln!(out, "  ADVANCED NN  {}", percent(h.adv_nn));
    let _ = writeln!(out, "  XGB REG      {:.2}", h.xgb_reg);
    let _ = writeln!(out, "  XGB RF REG   {:.2}", h.xgb_rf_reg);
    let _ = writeln!(out);
    let _ = writeln!(out, "AI CONFIDENCE: {}%", h.confidence_percent);

    if !picks.surplus.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "ADDITIONAL HIGH CONFIDENCE PICKS");
        for pick in &picks.surplus {
            let _ = writeln!(
                out,
                "  {} {} O{}  {}",
                pick.player_name,
                pick.prop_type,
                pick.line,
                percent(pick.xgboost)
            );
        }
    }
    out
}

fn percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}
