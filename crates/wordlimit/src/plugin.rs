// File: src/plugin.rs
// Purpose: Wiring the word-limit hooks into a form host

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Config;
use crate::form_context::FormContext;
use crate::host::FormHost;
use crate::renderer::TextareaRenderer;
use crate::tag::FormTag;
use crate::validation::{validate_textarea, Messages, ValidationResult};

/// Field types the extension takes over.
pub const TEXTAREA_TYPES: [&str; 2] = ["textarea", "textarea*"];

/// The word-limit extension.
///
/// Built once at startup from [`Config`] and handed to [`WordLimit::install`].
///
/// ```ignore
/// let config = Config::load_default()?;
/// let mut host = HookRegistry::with_builtin_textarea(&config);
/// WordLimit::new(&config).install(&mut host);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordLimit {
    messages: Messages,
    renderer: TextareaRenderer,
}

impl WordLimit {
    pub fn new(config: &Config) -> Self {
        Self {
            messages: config.messages.clone(),
            renderer: TextareaRenderer::new(config.render.clone()),
        }
    }

    /// Replace the host's textarea validation and rendering.
    ///
    /// Returns `false` without touching the host when it is not active.
    pub fn install<H: FormHost + ?Sized>(&self, host: &mut H) -> bool {
        if !host.is_active() {
            warn!("form host is not active, word limits not installed");
            return false;
        }

        for field_type in TEXTAREA_TYPES {
            // The stock validator would re-check word-mode limits as characters.
            host.deregister_validator(field_type);

            let plugin = self.clone();
            host.register_validator(
                field_type,
                Arc::new(move |result: &mut ValidationResult, tag: &FormTag, ctx: &FormContext| {
                    plugin.validate(ctx.submitted_value(&tag.name), tag, result)
                }),
            );

            let plugin = self.clone();
            host.register_renderer(
                field_type,
                Arc::new(move |tag: &FormTag, ctx: &FormContext| plugin.render(tag, ctx)),
            );
        }

        info!(field_types = ?TEXTAREA_TYPES, "word limits installed");
        true
    }

    pub fn validate(&self, value: &str, tag: &FormTag, result: &mut ValidationResult) {
        validate_textarea(value, tag, result, &self.messages);
    }

    pub fn render(&self, tag: &FormTag, ctx: &FormContext) -> String {
        self.renderer.render(tag, ctx)
    }

    pub fn renderer(&self) -> &TextareaRenderer {
        &self.renderer
    }
}
