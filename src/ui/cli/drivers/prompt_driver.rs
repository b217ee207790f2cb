use anyhow::Result;

/// Source of answers for the interactive session.
pub trait PromptDriver {
    /// Index of the chosen entry in `options`.
    fn ask_select(&self, title: &str, help: Option<&str>, options: &[String]) -> Result<usize>;

    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64>;
}
