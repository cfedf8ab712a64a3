// File: src/validation/textarea.rs
// Purpose: Textarea validators (word-aware and character-only)

use tracing::debug;

use super::{Messages, ValidationResult};
use crate::count::{char_count, word_count};
use crate::limits::{LengthLimits, WordCountMode};
use crate::tag::FormTag;

/// Validate a submitted textarea value, counting words where the tag asks for it.
///
/// - An empty value only fails when the field is required; length checks are skipped.
/// - With `maxlengthwords:true` the maximum counts words, otherwise characters.
/// - With `minlengthwords:true` the minimum counts words, otherwise characters.
///
/// Every failing check adds its own message; nothing short-circuits.
pub fn validate_textarea(
    value: &str,
    tag: &FormTag,
    result: &mut ValidationResult,
    messages: &Messages,
) {
    if tag.is_required() && value.is_empty() {
        result.invalidate(tag, messages.invalid_required.as_str());
    }

    if value.is_empty() {
        return;
    }

    let words = word_count(value);
    let chars = char_count(value);
    let limits = LengthLimits::from_tag(tag);
    let mode = WordCountMode::from_tag(tag);

    debug!(
        field = %tag.name,
        words,
        chars,
        max = ?limits.max,
        min = ?limits.min,
        max_words = mode.max,
        min_words = mode.min,
        "validating textarea"
    );

    if let Some(max) = limits.max {
        if mode.max {
            if words > max {
                result.invalidate(tag, messages.too_long_in_words(words, max));
            }
        } else if max < chars {
            result.invalidate(tag, messages.invalid_too_long.as_str());
        }
    }

    if let Some(min) = limits.min {
        if mode.min {
            if words < min {
                result.invalidate(tag, messages.too_short_in_words(words, min));
            }
        } else if chars < min {
            result.invalidate(tag, messages.invalid_too_short.as_str());
        }
    }
}

/// Character-only textarea validation, ignoring any word-count flags.
///
/// This is what a form host does before the word-aware validator replaces it.
pub fn validate_textarea_characters(
    value: &str,
    tag: &FormTag,
    result: &mut ValidationResult,
    messages: &Messages,
) {
    if tag.is_required() && value.is_empty() {
        result.invalidate(tag, messages.invalid_required.as_str());
    }

    if value.is_empty() {
        return;
    }

    let chars = char_count(value);
    let limits = LengthLimits::from_tag(tag);

    if limits.max.is_some_and(|max| max < chars) {
        result.invalidate(tag, messages.invalid_too_long.as_str());
    }
    if limits.min.is_some_and(|min| chars < min) {
        result.invalidate(tag, messages.invalid_too_short.as_str());
    }
}
