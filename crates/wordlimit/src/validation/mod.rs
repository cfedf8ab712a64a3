// File: src/validation/mod.rs
// Purpose: Validation result accumulator shared by every field validator

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::tag::FormTag;

pub mod messages;
pub mod textarea;

pub use messages::Messages;
pub use textarea::{validate_textarea, validate_textarea_characters};

/// Messages collected while validating one form submission.
///
/// Validators never fail; they call [`ValidationResult::invalidate`] instead.
/// A field can be invalidated several times and keeps every message in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: HashMap<String, Vec<String>>,
    order: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `tag`
    pub fn invalidate(&mut self, tag: &FormTag, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(field = %tag.name, %message, "field invalidated");

        if !self.errors.contains_key(&tag.name) {
            self.order.push(tag.name.clone());
        }
        self.errors.entry(tag.name.clone()).or_default().push(message);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get first error for a specific field
    pub fn get_error(&self, field: &str) -> Option<&String> {
        self.errors.get(field).and_then(|errors| errors.first())
    }

    /// Get all errors for a specific field
    pub fn get_errors(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    /// Names of invalid fields, in the order they were first invalidated.
    pub fn invalid_fields(&self) -> &[String] {
        &self.order
    }

    /// First message of every invalid field.
    pub fn first_errors(&self) -> HashMap<String, String> {
        self.errors
            .iter()
            .filter_map(|(field, errors)| errors.first().map(|e| (field.clone(), e.clone())))
            .collect()
    }
}
