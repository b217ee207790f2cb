use anyhow::{Context, Result};
use env_logger::Env;
use rul_predictor::models::{DEFAULT_MODEL_PATH, load_model};
use rul_predictor::session::PredictionSession;
use rul_predictor::ui::cli::app::run_session;
use rul_predictor::ui::cli::drivers::InquireDriver;
use std::io;

const BANNER: &str = "\
Engine Remaining Useful Life (RUL) estimator
Estimates how many cycles an aircraft engine has left before failure,
from the readings of its sensors.
";

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let model = load_model(DEFAULT_MODEL_PATH)
        .with_context(|| format!("cannot start without a model at {DEFAULT_MODEL_PATH}"))?;

    println!("{BANNER}");
    let mut session = PredictionSession::new(model);
    run_session(&InquireDriver, &mut session, &mut io::stdout().lock())
}
