use crate::ui::types::choices::{SensorReadings, UIChoice};
use anyhow::Result;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Empty parameter object so the wizard can still look under "params"
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct NoParams {}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(ActionKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum SessionAction {
    #[strum_discriminants(strum(
        message = "Predict RUL",
        detailed_message = "Enter the sensor readings and estimate the remaining cycles."
    ))]
    Predict(SensorReadings),

    #[strum_discriminants(strum(
        message = "Show history",
        detailed_message = "Predictions made so far in this session."
    ))]
    ShowHistory(NoParams),

    #[strum_discriminants(strum(
        message = "Show feature importance",
        detailed_message = "How much each sensor weighs in the model."
    ))]
    ShowImportance(NoParams),

    #[strum_discriminants(strum(message = "Quit"))]
    Quit(NoParams),
}

impl UIChoice for SessionAction {
    type Kind = ActionKind;

    fn schema() -> Schema {
        schema_for!(SessionAction)
    }

    fn prompt_label() -> &'static str {
        "What would you like to do?"
    }

    fn default_params(kind: Self::Kind) -> Result<Value> {
        Ok(match kind {
            ActionKind::Predict => serde_json::to_value(SensorReadings::default())?,
            ActionKind::ShowHistory | ActionKind::ShowImportance | ActionKind::Quit => {
                serde_json::to_value(NoParams::default())?
            }
        })
    }
}
