// File: src/validation/messages.rs
// Purpose: User-facing validation messages

use serde::{Deserialize, Serialize};

/// Messages shown when a textarea fails validation.
///
/// The word-count templates take `{count}` (words submitted) and `{limit}`
/// (the configured maximum or minimum) placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default = "default_invalid_required")]
    pub invalid_required: String,

    #[serde(default = "default_invalid_too_long")]
    pub invalid_too_long: String,

    #[serde(default = "default_invalid_too_short")]
    pub invalid_too_short: String,

    #[serde(default = "default_too_many_words")]
    pub too_many_words: String,

    #[serde(default = "default_too_few_words")]
    pub too_few_words: String,
}

fn default_invalid_required() -> String {
    "The field is required.".to_string()
}

fn default_invalid_too_long() -> String {
    "The field is too long.".to_string()
}

fn default_invalid_too_short() -> String {
    "The field is too short.".to_string()
}

fn default_too_many_words() -> String {
    "Your input is too long ({count}/{limit} maximum words)".to_string()
}

fn default_too_few_words() -> String {
    "Your input is too short ({count}/{limit} minimum words)".to_string()
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            invalid_required: default_invalid_required(),
            invalid_too_long: default_invalid_too_long(),
            invalid_too_short: default_invalid_too_short(),
            too_many_words: default_too_many_words(),
            too_few_words: default_too_few_words(),
        }
    }
}

impl Messages {
    pub fn too_long_in_words(&self, count: usize, limit: usize) -> String {
        fill(&self.too_many_words, count, limit)
    }

    pub fn too_short_in_words(&self, count: usize, limit: usize) -> String {
        fill(&self.too_few_words, count, limit)
    }
}

fn fill(template: &str, count: usize, limit: usize) -> String {
    template
        .replace("{count}", &count.to_string())
        .replace("{limit}", &limit.to_string())
}
