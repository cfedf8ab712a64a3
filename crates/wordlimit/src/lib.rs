// wordlimit - word-count limits for textarea form fields
// Validation and rendering hooks that let a form host count words instead of characters

pub mod config;
pub mod count;
pub mod form_context;
pub mod form_field;
pub mod host;
pub mod limits;
pub mod plugin;
pub mod renderer;
pub mod tag;
pub mod validation;

pub use config::{Config, RenderConfig};
pub use count::{char_count, word_count};
pub use form_context::FormContext;
pub use form_field::FieldAttrs;
pub use host::{FormHost, HookRegistry, RendererFn, ValidatorFn};
pub use limits::{LengthLimits, WordCountMode};
pub use plugin::{WordLimit, TEXTAREA_TYPES};
pub use renderer::{TextareaField, TextareaRenderer};
pub use tag::FormTag;
pub use validation::{validate_textarea, Messages, ValidationResult};
