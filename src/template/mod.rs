//! Templates and the renderer that instantiates them
//!
//! A template is plain text with placeholders written as `<%= identifier %>`.
//! Parsing happens once and yields an immutable sequence of segments; rendering
//! walks the segments and copies literal text verbatim, substituting each
//! placeholder with its value from a [`SubstitutionContext`].
//!
//! # Example
//!
//! ```rust
//! use component_scaffold::{SubstitutionContext, Template};
//!
//! let template = Template::parse("Hello <%= name %>!").unwrap();
//! let ctx = SubstitutionContext::new().with("name", "World");
//!
//! assert_eq!(template.render(&ctx).unwrap(), "Hello World!");
//! ```

pub mod lexer;
mod parser;
mod registry;

use std::str::FromStr;

use crate::config::RenderConfig;
use crate::context::SubstitutionContext;
use crate::error::{RenderError, Span};
use crate::suggest::find_similar;

pub use registry::{RegistryError, TemplateRegistry};

/// A placeholder reference inside a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Identifier looked up in the substitution context
    pub name: String,
    /// Byte range of the whole `<%= ... %>` marker
    pub span: Span,
}

/// One piece of a parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, copied to the output unchanged
    Text(String),
    /// Placeholder replaced by its context value
    Placeholder(Placeholder),
}

/// A parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
    source_len: usize,
}

impl Template {
    /// Parse template source
    ///
    /// Fails with [`RenderError::MalformedTemplate`] when a marker is never
    /// closed or does not hold a single identifier.
    pub fn parse(source: &str) -> Result<Self, RenderError> {
        let segments = parser::parse_segments(source)?;
        let template = Self {
            segments,
            source_len: source.len(),
        };
        log::debug!(
            "parsed template: {} bytes, {} segments, {} placeholders",
            template.source_len,
            template.segments.len(),
            template.placeholder_count()
        );
        Ok(template)
    }

    /// Parsed segments in source order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Length in bytes of the source this template was parsed from
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Distinct placeholder names, in order of first appearance
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for placeholder in self.placeholder_refs() {
            if !names.contains(&placeholder.name.as_str()) {
                names.push(&placeholder.name);
            }
        }
        names
    }

    /// Check that `ctx` has a value for every placeholder, without rendering
    pub fn check(&self, ctx: &SubstitutionContext) -> Result<(), RenderError> {
        self.check_with_config(ctx, &RenderConfig::default())
    }

    /// Check with custom configuration for the suggestion list
    pub fn check_with_config(
        &self,
        ctx: &SubstitutionContext,
        config: &RenderConfig,
    ) -> Result<(), RenderError> {
        match self
            .placeholder_refs()
            .find(|p| ctx.get(&p.name).is_none())
        {
            Some(missing) => Err(unknown_placeholder(missing, ctx, config)),
            None => Ok(()),
        }
    }

    /// Render with default configuration
    pub fn render(&self, ctx: &SubstitutionContext) -> Result<String, RenderError> {
        self.render_with_config(ctx, &RenderConfig::default())
    }

    /// Render with custom configuration
    ///
    /// Substituted values are never scanned for placeholders. On error nothing
    /// is returned, the partially built output is dropped.
    pub fn render_with_config(
        &self,
        ctx: &SubstitutionContext,
        config: &RenderConfig,
    ) -> Result<String, RenderError> {
        let mut out = String::with_capacity(self.source_len);
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Placeholder(placeholder) => match ctx.get(&placeholder.name) {
                    Some(value) => {
                        log::trace!("substituting '{}' at {:?}", placeholder.name, placeholder.span);
                        out.push_str(value);
                    }
                    None => return Err(unknown_placeholder(placeholder, ctx, config)),
                },
            }
        }
        log::debug!(
            "rendered template: {} bytes in, {} bytes out",
            self.source_len,
            out.len()
        );
        Ok(out)
    }

    fn placeholder_refs(&self) -> impl Iterator<Item = &Placeholder> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(p) => Some(p),
            Segment::Text(_) => None,
        })
    }

    fn placeholder_count(&self) -> usize {
        self.placeholder_refs().count()
    }
}

impl FromStr for Template {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn unknown_placeholder(
    placeholder: &Placeholder,
    ctx: &SubstitutionContext,
    config: &RenderConfig,
) -> RenderError {
    let suggestions = find_similar(
        ctx.keys(),
        &placeholder.name,
        config.suggestion_distance,
        config.max_suggestions,
    );
    RenderError::unknown(placeholder.name.clone(), placeholder.span.clone(), suggestions)
}
