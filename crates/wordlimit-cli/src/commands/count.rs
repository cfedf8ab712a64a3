use anyhow::Result;
use colored::Colorize;
use wordlimit::{char_count, word_count};

use super::read_input;
use crate::InputArgs;

pub fn execute(input: &InputArgs) -> Result<()> {
    let text = read_input(input)?;
    println!("{} {}", "Words:".bold(), word_count(&text));
    println!("{} {}", "Characters:".bold(), char_count(&text));
    Ok(())
}
