// File: src/form_field.rs
// Purpose: Ordered HTML attribute sets for form controls

use maud::html;
use serde::{Deserialize, Serialize};

/// HTML attributes of one form control, kept in insertion order so the
/// rendered markup is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldAttrs {
    attrs: Vec<(String, String)>,
}

impl FieldAttrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute. Keys are lowercased; an existing key keeps its position.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let key = key.trim().to_lowercase();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.attrs.push((key, value)),
        }
    }

    /// Set an attribute only when a value is present.
    pub fn set_opt<V: ToString>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.set(key, value.to_string());
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.attrs.iter().position(|(k, _)| k == key)?;
        Some(self.attrs.remove(index).1)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Render as `key="value"` pairs. Empty values are left out.
    pub fn format(&self) -> String {
        self.attrs
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| format!("{}=\"{}\"", k, escape(v)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// HTML-escape text for element content or a double-quoted attribute value.
pub fn escape(text: &str) -> String {
    html! { (text) }.into_string()
}
