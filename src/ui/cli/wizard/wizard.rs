use anyhow::{Context, Result};
use serde_json::{Map, Value};
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{UIChoice, specs_for_kind};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

fn kind_items<K>() -> Vec<(K, String)>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
{
    K::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let text = match k.get_detailed_message() {
                // strum falls back to `message` when no detailed message is set
                Some(desc) if !desc.is_empty() && desc != label => {
                    format!("{label}  {DIM_ITALIC}{desc}{RESET}")
                }
                _ => label.to_string(),
            };
            (k, text)
        })
        .collect()
}

/// Asks which variant of `C` to build, then one numeric prompt per field of
/// its `params`.
pub fn prompt_choice<C: UIChoice, D: PromptDriver>(driver: &D) -> Result<C> {
    let items = kind_items::<C::Kind>();
    let labels: Vec<String> = items.iter().map(|(_, text)| text.clone()).collect();

    let picked = driver.ask_select(C::prompt_label(), C::prompt_help(), &labels)?;
    let (choice_kind, _) = *items
        .get(picked)
        .with_context(|| format!("selection {picked} is out of range"))?;

    let key: &'static str = choice_kind.into();
    let schema = C::schema();
    let specs = specs_for_kind(&schema, key)?;

    let defaults = C::default_params(choice_kind)?;

    let mut params = Map::new();
    for s in specs {
        let def = s
            .default
            .as_ref()
            .or_else(|| defaults.get(&s.name))
            .and_then(Value::as_f64)
            .unwrap_or(0.0);
        let help = s.description.as_deref().unwrap_or("");

        let answer = driver.ask_f64(&s.title, help, def, s.min, s.max)?;
        params.insert(s.name.clone(), Value::from(answer));
    }

    C::from_parts(choice_kind, Value::Object(params))
}
