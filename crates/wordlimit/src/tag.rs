// File: src/tag.rs
// Purpose: Form-tag descriptors and the shortcode syntax they are parsed from

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""[^"]*"|'[^']*'|\S+"#).unwrap());

static TYPE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][0-9a-zA-Z_-]*\*?$").unwrap());

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][0-9a-zA-Z:._-]*$").unwrap());

static SIZE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d*)x(\d*)(?:/\d+)?$").unwrap());

// Older form definitions wrote the character limit as `40x10/200`.
static LEGACY_MAXLENGTH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d*x?\d*)?/(\d+)$").unwrap());

static CLASS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-0-9a-zA-Z_]+$").unwrap());

/// One field of a form definition.
///
/// Written in form definitions as a shortcode:
///
/// ```text
/// [textarea* your-message 40x8 maxlength:200 maxlengthwords:true "Tell us more"]
/// ```
///
/// The first token is the field type (a trailing `*` marks it required), the
/// second its name, quoted tokens are default values and everything else is an
/// option token.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormTag {
    #[serde(rename = "type")]
    pub tag_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub content: String,
}

impl FormTag {
    pub fn new(tag_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            tag_type: tag_type.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Parse a tag from shortcode syntax. Surrounding brackets are optional.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let body = trimmed
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .unwrap_or(trimmed);

        let mut tokens = Vec::new();
        for m in TOKEN_REGEX.find_iter(body) {
            let token = m.as_str();
            if let Some(quote) = token.chars().next().filter(|c| *c == '"' || *c == '\'') {
                if token.len() < 2 || !token.ends_with(quote) {
                    bail!("Unterminated quote in form tag: {}", input);
                }
            }
            tokens.push(token);
        }

        let mut tokens = tokens.into_iter();
        let tag_type = match tokens.next() {
            Some(t) => t,
            None => bail!("Empty form tag"),
        };
        if !TYPE_REGEX.is_match(tag_type) {
            bail!("Invalid form tag type: {}", tag_type);
        }

        let mut tag = FormTag::new(tag_type, "");
        for (index, token) in tokens.enumerate() {
            if let Some(value) = unquote(token) {
                tag.values.push(value.to_string());
            } else if index == 0 {
                if !NAME_REGEX.is_match(token) {
                    bail!("Invalid form tag name: {}", token);
                }
                tag.name = token.to_string();
            } else {
                tag.options.push(token.to_string());
            }
        }

        Ok(tag)
    }

    /// Type without the required marker
    pub fn basetype(&self) -> &str {
        self.tag_type.trim_end_matches('*')
    }

    pub fn is_required(&self) -> bool {
        self.tag_type.ends_with('*')
    }

    /// True for a bare `name` option or any `name:value` option.
    pub fn has_option(&self, name: &str) -> bool {
        self.options
            .iter()
            .any(|opt| opt == name || option_value(opt, name).is_some())
    }

    /// Values of every `name:value` option, in definition order.
    pub fn get_option(&self, name: &str) -> Vec<&str> {
        self.options
            .iter()
            .filter_map(|opt| option_value(opt, name))
            .collect()
    }

    /// Character limit from `maxlength:N`, falling back to the `/N` size suffix.
    pub fn maxlength_option(&self) -> Option<usize> {
        self.positive_int_option("maxlength").or_else(|| {
            self.options.iter().find_map(|opt| {
                LEGACY_MAXLENGTH_REGEX
                    .captures(opt)
                    .and_then(|caps| caps[1].parse().ok())
                    .filter(|n| *n > 0)
            })
        })
    }

    pub fn minlength_option(&self) -> Option<usize> {
        self.positive_int_option("minlength")
    }

    pub fn cols_option(&self, default: u32) -> u32 {
        self.size_option(1).unwrap_or(default)
    }

    pub fn rows_option(&self, default: u32) -> u32 {
        self.size_option(2).unwrap_or(default)
    }

    /// `default` followed by every valid `class:X` option.
    pub fn class_option(&self, default: &str) -> String {
        let mut classes: Vec<&str> = default.split_whitespace().collect();
        classes.extend(self.get_option("class").into_iter().filter(|c| CLASS_REGEX.is_match(c)));
        classes.join(" ")
    }

    pub fn id_option(&self) -> Option<&str> {
        self.get_option("id").into_iter().find(|id| CLASS_REGEX.is_match(id))
    }

    pub fn tabindex_option(&self) -> Option<i32> {
        self.get_option("tabindex").into_iter().find_map(|v| v.parse().ok())
    }

    /// Sources named by `default:` options, e.g. `default:get_post` yields `get`, `post`.
    pub fn default_sources(&self) -> Vec<&str> {
        self.get_option("default")
            .into_iter()
            .flat_map(|v| v.split('_'))
            .filter(|s| !s.is_empty())
            .collect()
    }

    fn positive_int_option(&self, name: &str) -> Option<usize> {
        self.get_option(name)
            .into_iter()
            .find_map(|v| v.parse::<usize>().ok())
            .filter(|n| *n > 0)
    }

    fn size_option(&self, group: usize) -> Option<u32> {
        self.options.iter().find_map(|opt| {
            let caps = SIZE_REGEX.captures(opt)?;
            caps.get(group)?.as_str().parse::<u32>().ok().filter(|n| *n > 0)
        })
    }
}

fn option_value<'a>(option: &'a str, name: &str) -> Option<&'a str> {
    option
        .strip_prefix(name)
        .and_then(|rest| rest.strip_prefix(':'))
        .filter(|value| !value.is_empty())
}

fn unquote(token: &str) -> Option<&str> {
    token
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| token.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
}
