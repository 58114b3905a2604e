use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use super::render;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunList {
    pub runs: Vec<Run>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Run {
    pub expr: String,
    pub output: String,
}

impl RunList {
    pub fn empty() -> Self {
        RunList { runs: Vec::new() }
    }

    pub fn open(content: impl AsRef<str>) -> Result<Self> {
        Ok(toml::from_str(content.as_ref())?)
    }

    pub fn save(&mut self) -> Result<String> {
        self.sort();
        Ok(toml::to_string_pretty(self)?)
    }

    fn sort(&mut self) {
        self.runs.sort_by_key(|r| r.expr.to_string())
    }

    /// Records the current output for `expr`, unless it is already present.
    pub fn add(&mut self, expr: impl AsRef<str>) -> Run {
        let expr = expr.as_ref();
        if let Some(run) = self.runs.iter().find(|r| r.expr == expr) {
            return run.clone();
        }
        let run = Run {
            expr: expr.to_string(),
            output: render(expr),
        };
        self.runs.push(run.clone());
        run
    }
}

impl Run {
    pub fn check(&self) -> Result<()> {
        let us = render(&self.expr);
        if us != self.output {
            bail!("incorrect output, we got {us:?}, expected {:?}", self.output);
        }
        Ok(())
    }
}
