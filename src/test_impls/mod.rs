mod runs;

use anyhow::{anyhow, Context, Result};

use crate::Number;

pub use runs::{Run, RunList};

pub fn scan_eval(sentence: &str) -> Result<Number> {
    crate::evaluate_expression(sentence).with_context(|| anyhow!("evaluating {:?}", sentence))
}

/// The line a run list records for `expr`: the value, or `error: <message>`.
pub fn render(expr: &str) -> String {
    match crate::evaluate_expression(expr) {
        Ok(value) => value.to_string(),
        Err(e) => format!("error: {e}"),
    }
}
