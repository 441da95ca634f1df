//! Error types for parsing and rendering templates

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in template source text
pub type Span = std::ops::Range<usize>;

/// Why a placeholder marker could not be read
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedKind {
    /// `<%=` with no closing `%>` before the end of the template
    #[error("unterminated placeholder, expected '%>'")]
    Unterminated,

    /// `<%= %>` with nothing between the delimiters
    #[error("empty placeholder")]
    EmptyPlaceholder,

    /// Marker content is not a single identifier
    #[error("'{0}' is not a valid placeholder identifier")]
    InvalidIdentifier(String),

    /// A second `<%=` inside an open marker
    #[error("placeholder opened inside another placeholder")]
    NestedOpen,
}

/// Errors that can occur while parsing or rendering a template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A placeholder has no value in the substitution context
    #[error("unknown placeholder '{name}'{}", format_suggestions(suggestions))]
    UnknownPlaceholder {
        name: String,
        span: Span,
        suggestions: Vec<String>,
    },

    /// Placeholder delimiters are not paired correctly
    ///
    /// The message carries no position; use [`RenderError::char_offset`] or
    /// [`RenderError::format`] with the source to locate it.
    #[error("malformed template: {kind}")]
    MalformedTemplate { span: Span, kind: MalformedKind },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean {}?)", suggestions.join(", "))
    }
}

impl RenderError {
    /// Create an unknown placeholder error with suggestions
    pub fn unknown(name: impl Into<String>, span: Span, suggestions: Vec<String>) -> Self {
        Self::UnknownPlaceholder {
            name: name.into(),
            span,
            suggestions,
        }
    }

    /// Create a malformed template error
    pub fn malformed(span: Span, kind: MalformedKind) -> Self {
        Self::MalformedTemplate { span, kind }
    }

    /// Byte range of the offending marker
    pub fn span(&self) -> &Span {
        match self {
            Self::UnknownPlaceholder { span, .. } => span,
            Self::MalformedTemplate { span, .. } => span,
        }
    }

    /// Get suggestions if available
    pub fn suggestions(&self) -> Option<&[String]> {
        match self {
            Self::UnknownPlaceholder { suggestions, .. } => Some(suggestions),
            Self::MalformedTemplate { .. } => None,
        }
    }

    /// Character offset of the error within `source`
    ///
    /// Spans are byte ranges; users want to be pointed at a character.
    pub fn char_offset(&self, source: &str) -> usize {
        char_index(source, self.span().start)
    }

    /// Format the error with source context using ariadne
    ///
    /// Output is uncolored so it can go to logs as well as terminals.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = self.span();
        let start = char_index(source, span.start);
        let end = char_index(source, span.end).max(start);

        let label = match self {
            Self::UnknownPlaceholder { name, .. } => {
                format!("no value for '{}' in the substitution context", name)
            }
            Self::MalformedTemplate { kind, .. } => kind.to_string(),
        };

        let mut report = Report::build(ReportKind::Error, filename, start)
            .with_config(Config::default().with_color(false))
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, start..end))
                    .with_message(label)
                    .with_color(Color::Red),
            );
        if let Some(suggestions) = self.suggestions().filter(|s| !s.is_empty()) {
            report = report.with_help(format!("did you mean {}?", suggestions.join(", ")));
        }

        let mut buf = Vec::new();
        match report
            .finish()
            .write((filename, Source::from(source)), &mut buf)
        {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// Convert a byte offset into a character offset, clamped to the source
fn char_index(source: &str, byte: usize) -> usize {
    let byte = byte.min(source.len());
    source
        .char_indices()
        .take_while(|(i, _)| *i < byte)
        .count()
}
