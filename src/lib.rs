//! Component Scaffold - boilerplate templates for React components and Redux containers
//!
//! This library provides a small template language (`<%= identifier %>`
//! placeholders), the renderer that instantiates it, and the built-in templates
//! a generator uses to scaffold a component and its container binding.
//!
//! Choosing output paths and writing files is left to the host.
//!
//! # Example
//!
//! ```rust
//! use component_scaffold::{render, SubstitutionContext};
//!
//! let ctx = SubstitutionContext::new()
//!     .with("nameUpper", "Widget")
//!     .with("nameLower", "widget");
//!
//! let out = render("<%= nameUpper %>/<%= nameLower %>", &ctx).unwrap();
//! assert_eq!(out, "Widget/widget");
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod names;
pub mod scaffold;
mod suggest;
pub mod template;

pub use config::RenderConfig;
pub use context::{ContextError, SubstitutionContext, NAME_LOWER, NAME_UPPER};
pub use error::{MalformedKind, RenderError, Span};
pub use names::{NameError, NameForms};
pub use scaffold::{scaffold, Builtin, ScaffoldError, ScaffoldFile};
pub use template::{Placeholder, RegistryError, Segment, Template, TemplateRegistry};

/// Parse and render template source with default configuration
///
/// # Example
///
/// ```rust
/// use component_scaffold::{render, RenderError, SubstitutionContext};
///
/// let ctx = SubstitutionContext::new().with("name", "World");
/// assert_eq!(render("Hello <%= name %>!", &ctx).unwrap(), "Hello World!");
///
/// let err = render("Hello <%= nam %>!", &ctx).unwrap_err();
/// assert!(matches!(err, RenderError::UnknownPlaceholder { .. }));
/// ```
pub fn render(source: &str, ctx: &SubstitutionContext) -> Result<String, RenderError> {
    render_with_config(source, ctx, &RenderConfig::default())
}

/// Parse and render template source with custom configuration
pub fn render_with_config(
    source: &str,
    ctx: &SubstitutionContext,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    Template::parse(source)?.render_with_config(ctx, config)
}
