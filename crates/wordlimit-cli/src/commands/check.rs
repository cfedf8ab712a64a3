use std::collections::HashMap;

use anyhow::{Context, Result};
use colored::Colorize;
use wordlimit::{char_count, word_count, Config, FormContext, FormTag, HookRegistry, WordLimit};

use super::read_input;
use crate::InputArgs;

/// Validate the input against `tag`. Returns whether it passed.
pub fn execute(config: &Config, tag: &str, input: &InputArgs, json: bool) -> Result<bool> {
    let tag = FormTag::parse(tag).context("Invalid --tag")?;
    let value = read_input(input)?;

    let mut host = HookRegistry::with_builtin_textarea(config);
    WordLimit::new(config).install(&mut host);

    let ctx = FormContext::new(HashMap::from([(tag.name.clone(), value.clone())]));
    let result = host.validate_form(std::slice::from_ref(&tag), &ctx);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(result.is_valid());
    }

    println!(
        "{} words, {} characters",
        word_count(&value).to_string().cyan(),
        char_count(&value).to_string().cyan()
    );

    match result.get_errors(&tag.name) {
        Some(errors) => {
            for error in errors {
                println!("{} {}", "✗".red().bold(), error);
            }
        }
        None => println!("{}", "✓ Valid".green().bold()),
    }

    Ok(result.is_valid())
}
