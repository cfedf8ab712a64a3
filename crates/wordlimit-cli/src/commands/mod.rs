pub mod check;
pub mod count;
pub mod render;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use wordlimit::Config;

use crate::InputArgs;

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {:?}", path);
            }
            Config::load(path)
        }
        None => Config::load_default(),
    }
}

/// Text given with `--value`, read from `--file`, or empty.
pub fn read_input(input: &InputArgs) -> Result<String> {
    if let Some(value) = &input.value {
        return Ok(value.clone());
    }
    match &input.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {:?}", path)),
        None => Ok(String::new()),
    }
}
