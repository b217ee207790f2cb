use crate::core::SensorVector;
use crate::session::{PredictionSession, SessionError};
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::render::{
    IMPORTANCE_UNAVAILABLE, render_history, render_importance, render_prediction,
};
use crate::ui::cli::wizard::prompt_choice;
use crate::ui::types::choices::SessionAction;
use anyhow::Result;
use inquire::InquireError;
use std::io::Write;

/// Runs the action menu until the user quits or cancels a prompt.
///
/// Per-request failures are reported on `out` and the loop keeps going.
pub fn run_session<D: PromptDriver, W: Write>(
    driver: &D,
    session: &mut PredictionSession,
    out: &mut W,
) -> Result<()> {
    loop {
        let action = match prompt_choice::<SessionAction, D>(driver) {
            Ok(action) => action,
            Err(e) if is_user_exit(&e) => {
                log::info!("session cancelled from prompt");
                break;
            }
            Err(e) => return Err(e),
        };

        match action {
            SessionAction::Predict(readings) => {
                let result = SensorVector::try_from(readings)
                    .map_err(SessionError::from)
                    .and_then(|values| session.evaluate(values));
                match result {
                    Ok(record) => writeln!(out, "{}", render_prediction(&record))?,
                    Err(e) => writeln!(out, "✗ {e}")?,
                }
            }
            SessionAction::ShowHistory(_) => {
                writeln!(out, "{}", render_history(session.history()))?;
            }
            SessionAction::ShowImportance(_) => match session.feature_importance() {
                Ok(Some(fi)) => write!(out, "{}", render_importance(&fi))?,
                Ok(None) => writeln!(out, "{IMPORTANCE_UNAVAILABLE}")?,
                Err(e) => writeln!(out, "✗ {e}")?,
            },
            SessionAction::Quit(_) => break,
        }
    }

    writeln!(
        out,
        "{} prediction(s) made this session.",
        session.history().len()
    )?;
    Ok(())
}

fn is_user_exit(e: &anyhow::Error) -> bool {
    matches!(
        e.downcast_ref::<InquireError>(),
        Some(InquireError::OperationCanceled | InquireError::OperationInterrupted)
    )
}
