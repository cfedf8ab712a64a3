// File: src/limits.rs
// Purpose: Length limits and word-count mode flags derived from a form tag

use crate::tag::FormTag;

const MAX_WORDS_FLAG: &str = "maxlengthwords:true";
const MIN_WORDS_FLAG: &str = "minlengthwords:true";

/// Maximum and minimum length configured on a field.
///
/// Whether the numbers count words or characters is decided separately by
/// [`WordCountMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LengthLimits {
    pub max: Option<usize>,
    pub min: Option<usize>,
}

impl LengthLimits {
    pub fn new(max: Option<usize>, min: Option<usize>) -> Self {
        Self { max, min }.reconciled()
    }

    /// Limits of a tag, already reconciled.
    pub fn from_tag(tag: &FormTag) -> Self {
        Self::new(tag.maxlength_option(), tag.minlength_option())
    }

    /// A maximum below the minimum cancels both limits.
    pub fn reconciled(self) -> Self {
        match (self.max, self.min) {
            (Some(max), Some(min)) if max < min => Self::default(),
            _ => self,
        }
    }
}

/// Which limits count words instead of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordCountMode {
    pub max: bool,
    pub min: bool,
}

impl WordCountMode {
    pub fn from_tag(tag: &FormTag) -> Self {
        Self {
            max: has_flag(&tag.options, MAX_WORDS_FLAG),
            min: has_flag(&tag.options, MIN_WORDS_FLAG),
        }
    }
}

// Case-insensitive substring match over every option token.
fn has_flag(options: &[String], flag: &str) -> bool {
    options
        .iter()
        .any(|option| option.to_lowercase().contains(flag))
}
