// File: src/host.rs
// Purpose: Form host extension points and an in-memory host

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::config::Config;
use crate::form_context::FormContext;
use crate::renderer::TextareaRenderer;
use crate::tag::FormTag;
use crate::validation::{validate_textarea_characters, ValidationResult};

/// Validation hook: checks one submitted field and records failures.
pub type ValidatorFn = Arc<dyn Fn(&mut ValidationResult, &FormTag, &FormContext) + Send + Sync>;

/// Rendering hook: markup for one field.
pub type RendererFn = Arc<dyn Fn(&FormTag, &FormContext) -> String + Send + Sync>;

/// Extension points a form host offers to plugins.
///
/// Field types are the full tag type, so `textarea` and `textarea*` are
/// registered separately.
pub trait FormHost {
    /// Whether the host is loaded and accepting registrations
    fn is_active(&self) -> bool {
        true
    }

    /// Append a validator to the chain for `field_type`
    fn register_validator(&mut self, field_type: &str, validator: ValidatorFn);

    /// Replace the renderer for `field_type`
    fn register_renderer(&mut self, field_type: &str, renderer: RendererFn);

    /// Drop every validator registered for `field_type`
    fn deregister_validator(&mut self, field_type: &str);
}

/// In-memory form host.
///
/// Validators run in registration order; each field type has at most one renderer.
#[derive(Clone, Default)]
pub struct HookRegistry {
    active: bool,
    validators: HashMap<String, Vec<ValidatorFn>>,
    renderers: HashMap<String, RendererFn>,
}

impl HookRegistry {
    /// An active host with no hooks
    pub fn new() -> Self {
        Self {
            active: true,
            ..Self::default()
        }
    }

    /// A host that is installed but not running; plugins should not register.
    pub fn inactive() -> Self {
        Self::default()
    }

    /// An active host with the stock character-length textarea hooks.
    pub fn with_builtin_textarea(config: &Config) -> Self {
        let mut host = Self::new();

        for field_type in ["textarea", "textarea*"] {
            let messages = config.messages.clone();
            host.register_validator(
                field_type,
                Arc::new(
                    move |result: &mut ValidationResult, tag: &FormTag, ctx: &FormContext| {
                        validate_textarea_characters(
                            ctx.submitted_value(&tag.name),
                            tag,
                            result,
                            &messages,
                        )
                    },
                ),
            );

            let renderer = TextareaRenderer::characters_only(config.render.clone());
            host.register_renderer(
                field_type,
                Arc::new(move |tag: &FormTag, ctx: &FormContext| renderer.render(tag, ctx)),
            );
        }

        host
    }

    pub fn validator_count(&self, field_type: &str) -> usize {
        self.validators.get(field_type).map_or(0, Vec::len)
    }

    pub fn has_renderer(&self, field_type: &str) -> bool {
        self.renderers.contains_key(field_type)
    }

    /// Run every registered validator over `tags`.
    pub fn validate_form(&self, tags: &[FormTag], ctx: &FormContext) -> ValidationResult {
        let mut result = ValidationResult::new();
        for tag in tags {
            if let Some(chain) = self.validators.get(&tag.tag_type) {
                for validator in chain {
                    validator(&mut result, tag, ctx);
                }
            }
        }
        result
    }

    /// Markup for `tag`, or `None` when no renderer handles its type.
    pub fn render_field(&self, tag: &FormTag, ctx: &FormContext) -> Option<String> {
        self.renderers.get(&tag.tag_type).map(|render| render(tag, ctx))
    }
}

impl FormHost for HookRegistry {
    fn is_active(&self) -> bool {
        self.active
    }

    fn register_validator(&mut self, field_type: &str, validator: ValidatorFn) {
        debug!(field_type, "registering validator");
        self.validators
            .entry(field_type.to_string())
            .or_default()
            .push(validator);
    }

    fn register_renderer(&mut self, field_type: &str, renderer: RendererFn) {
        debug!(field_type, "registering renderer");
        self.renderers.insert(field_type.to_string(), renderer);
    }

    fn deregister_validator(&mut self, field_type: &str) {
        debug!(field_type, "removing validators");
        self.validators.remove(field_type);
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut validators: Vec<_> = self
            .validators
            .iter()
            .map(|(ty, chain)| (ty.as_str(), chain.len()))
            .collect();
        validators.sort();
        let mut renderers: Vec<_> = self.renderers.keys().map(String::as_str).collect();
        renderers.sort();

        f.debug_struct("HookRegistry")
            .field("active", &self.active)
            .field("validators", &validators)
            .field("renderers", &renderers)
            .finish()
    }
}
