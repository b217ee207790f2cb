use crate::core::{FeatureImportance, History, PredictionRecord, SENSOR_NAMES};
use strum::EnumMessage;

const BAR_WIDTH: usize = 40;
const NAME_WIDTH: usize = 9;

pub const IMPORTANCE_UNAVAILABLE: &str =
    "This model does not expose feature importances.";

pub fn render_prediction(record: &PredictionRecord) -> String {
    let mut out = format!("✓ Predicted RUL: {:.2} cycles remaining", record.rul());
    if record.is_low_life() {
        if let Some(msg) = record.status().get_message() {
            out.push_str("\n⚠ ");
            out.push_str(msg);
        }
    }
    out
}

/// One row per record, sensors in model column order.
pub fn render_history(history: &History) -> String {
    if history.is_empty() {
        return "No predictions yet.".to_string();
    }

    let mut out = format!("{:>3}  {:<8}  {:>8}  {:<6}", "#", "time", "RUL", "status");
    for name in SENSOR_NAMES {
        out.push_str(&format!("  {name:>NAME_WIDTH$}"));
    }
    out.push('\n');

    for (i, r) in history.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<8}  {:>8.2}  {:<6}",
            i + 1,
            r.recorded_at().format("%H:%M:%S").to_string(),
            r.rul(),
            r.status().to_string()
        ));
        for (_, value) in r.readings().named() {
            out.push_str(&format!("  {value:>NAME_WIDTH$.2}"));
        }
        out.push('\n');
    }
    out
}

/// Horizontal bars, least important first.
pub fn render_importance(fi: &FeatureImportance) -> String {
    let max = fi.max_weight().unwrap_or(0.0);
    fi.iter()
        .map(|(name, weight)| {
            let len = if max > 0.0 {
                ((weight / max) * BAR_WIDTH as f64).round().max(0.0) as usize
            } else {
                0
            };
            let bar = "█".repeat(len);
            format!("{name:<NAME_WIDTH$} {bar:<BAR_WIDTH$} {weight:.4}\n")
        })
        .collect()
}
