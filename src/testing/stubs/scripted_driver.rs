use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Result, bail};
use inquire::InquireError;
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Select(usize),
    Number(f64),
}

/// Replays canned answers. Once the script runs out every prompt is
/// cancelled, as if the user pressed Esc.
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
    defaults: RefCell<Vec<f64>>,
}

impl ScriptedDriver {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
            asked: RefCell::new(Vec::new()),
            defaults: RefCell::new(Vec::new()),
        }
    }

    /// Titles of every prompt shown so far.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    /// Defaults offered by numeric prompts.
    pub fn defaults(&self) -> Vec<f64> {
        self.defaults.borrow().clone()
    }

    fn next(&self, title: &str) -> Result<Answer> {
        self.asked.borrow_mut().push(title.to_string());
        match self.answers.borrow_mut().pop_front() {
            Some(a) => Ok(a),
            None => Err(InquireError::OperationCanceled.into()),
        }
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_select(&self, title: &str, _help: Option<&str>, _options: &[String]) -> Result<usize> {
        match self.next(title)? {
            Answer::Select(i) => Ok(i),
            other => bail!("expected a selection for '{title}', script has {other:?}"),
        }
    }

    fn ask_f64(
        &self,
        title: &str,
        _help: &str,
        default: f64,
        _min: Option<f64>,
        _max: Option<f64>,
    ) -> Result<f64> {
        self.defaults.borrow_mut().push(default);
        match self.next(title)? {
            Answer::Number(x) => Ok(x),
            other => bail!("expected a number for '{title}', script has {other:?}"),
        }
    }
}
