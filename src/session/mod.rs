mod error;
mod prediction_session;

pub use error::SessionError;
pub use prediction_session::{PredictionSession, SessionState};
