// File: src/renderer.rs
// Purpose: Textarea rendering that drops character limits in word-count mode

use maud::{html, PreEscaped};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::config::RenderConfig;
use crate::form_context::FormContext;
use crate::form_field::{escape, FieldAttrs};
use crate::limits::{LengthLimits, WordCountMode};
use crate::tag::FormTag;

const CONTROL_CLASS: &str = "wpcf7-form-control";
const REQUIRED_CLASS: &str = "wpcf7-validates-as-required";
const NOT_VALID_CLASS: &str = "wpcf7-not-valid";

static HTML_CLASS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_-]").unwrap());

/// A textarea ready to be turned into markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextareaField {
    pub name: String,
    pub attrs: FieldAttrs,
    /// Element content after default and hangover resolution
    pub value: String,
    pub validation_error: Option<String>,
}

impl TextareaField {
    pub fn to_markup(&self) -> String {
        let textarea = format!(
            "<textarea {}>{}</textarea>",
            self.attrs.format(),
            escape(&self.value)
        );
        let wrap_class = format!("wpcf7-form-control-wrap {}", sanitize_html_class(&self.name));

        html! {
            span class=(wrap_class) {
                (PreEscaped(textarea))
                @if let Some(error) = &self.validation_error {
                    span class="wpcf7-not-valid-tip" aria-hidden="true" { (error) }
                }
            }
        }
        .into_string()
    }
}

/// Renders `textarea` and `textarea*` fields.
#[derive(Debug, Clone, Default)]
pub struct TextareaRenderer {
    config: RenderConfig,
    character_limits_only: bool,
}

impl TextareaRenderer {
    /// Renderer honouring `maxlengthwords:true`
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            character_limits_only: false,
        }
    }

    /// Renderer that always emits `maxlength`/`minlength`, as a host does by default.
    pub fn characters_only(config: RenderConfig) -> Self {
        Self {
            config,
            character_limits_only: true,
        }
    }

    /// Attributes and value for `tag`, or `None` for an unnamed tag.
    pub fn field(&self, tag: &FormTag, ctx: &FormContext) -> Option<TextareaField> {
        if tag.name.is_empty() {
            return None;
        }

        let validation_error = ctx.validation_error(&tag.name).map(str::to_string);
        let mut attrs = FieldAttrs::new();

        attrs.set("cols", tag.cols_option(self.config.default_cols).to_string());
        attrs.set("rows", tag.rows_option(self.config.default_rows).to_string());

        let limits = LengthLimits::from_tag(tag);
        attrs.set_opt("maxlength", limits.max);
        attrs.set_opt("minlength", limits.min);

        // The browser enforces maxlength in characters, so word mode gets neither.
        if !self.character_limits_only && WordCountMode::from_tag(tag).max {
            attrs.remove("maxlength");
            attrs.remove("minlength");
        }

        let mut class = controls_class(tag);
        if validation_error.is_some() {
            class.push(' ');
            class.push_str(NOT_VALID_CLASS);
        }
        attrs.set("class", tag.class_option(&class));
        attrs.set_opt("id", tag.id_option());
        attrs.set_opt("tabindex", tag.tabindex_option());

        if tag.has_option("readonly") {
            attrs.set("readonly", "readonly");
        }
        if tag.is_required() {
            attrs.set("aria-required", "true");
        }
        attrs.set(
            "aria-invalid",
            if validation_error.is_some() { "true" } else { "false" },
        );

        let mut value = if tag.content.is_empty() {
            tag.values.first().cloned().unwrap_or_default()
        } else {
            tag.content.clone()
        };

        if tag.has_option("placeholder") || tag.has_option("watermark") {
            attrs.set("placeholder", std::mem::take(&mut value));
        }

        let value = ctx.default_value(tag, value);
        let value = ctx.hangover(&tag.name, value);

        attrs.set("name", tag.name.as_str());

        Some(TextareaField {
            name: tag.name.clone(),
            attrs,
            value,
            validation_error,
        })
    }

    /// Full markup for `tag`; empty for an unnamed tag.
    pub fn render(&self, tag: &FormTag, ctx: &FormContext) -> String {
        self.field(tag, ctx)
            .map(|field| field.to_markup())
            .unwrap_or_default()
    }
}

fn controls_class(tag: &FormTag) -> String {
    let mut class = format!("{} wpcf7-{}", CONTROL_CLASS, tag.basetype());
    if tag.is_required() {
        class.push(' ');
        class.push_str(REQUIRED_CLASS);
    }
    class
}

fn sanitize_html_class(name: &str) -> String {
    HTML_CLASS_REGEX.replace_all(name, "").into_owned()
}
