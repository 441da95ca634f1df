//! Single-pass parser folding lexer tokens into template segments

use super::lexer::{lex, Token};
use super::{Placeholder, Segment};
use crate::error::{MalformedKind, RenderError, Span};

const OPEN_LEN: usize = "<%=".len();

/// Parse template source into literal and placeholder segments
///
/// Adjacent literal tokens are merged, so a template never holds two text
/// segments in a row.
pub(super) fn parse_segments(source: &str) -> Result<Vec<Segment>, RenderError> {
    let mut segments = Vec::new();
    // Start of the pending literal run
    let mut text_start: Option<usize> = None;
    // Start of the currently open marker
    let mut open_start: Option<usize> = None;

    for (token, span) in lex(source) {
        match open_start {
            None => match token {
                Ok(Token::Open) => {
                    flush_text(source, &mut text_start, span.start, &mut segments);
                    open_start = Some(span.start);
                }
                // Unmatched input and stray closers are literal text
                _ => {
                    text_start.get_or_insert(span.start);
                }
            },
            Some(start) => match token {
                Ok(Token::Open) => {
                    return Err(RenderError::malformed(
                        start..span.end,
                        MalformedKind::NestedOpen,
                    ));
                }
                Ok(Token::Close) => {
                    let marker = start..span.end;
                    let name = placeholder_name(&source[start + OPEN_LEN..span.start], &marker)?;
                    segments.push(Segment::Placeholder(Placeholder { name, span: marker }));
                    open_start = None;
                }
                _ => {}
            },
        }
    }

    if let Some(start) = open_start {
        return Err(RenderError::malformed(
            start..source.len(),
            MalformedKind::Unterminated,
        ));
    }
    flush_text(source, &mut text_start, source.len(), &mut segments);

    Ok(segments)
}

fn flush_text(source: &str, text_start: &mut Option<usize>, end: usize, out: &mut Vec<Segment>) {
    if let Some(start) = text_start.take() {
        out.push(Segment::Text(source[start..end].to_string()));
    }
}

/// Validate marker content as a single identifier, ignoring surrounding whitespace
fn placeholder_name(content: &str, marker: &Span) -> Result<String, RenderError> {
    let name = content.trim();
    if name.is_empty() {
        return Err(RenderError::malformed(
            marker.clone(),
            MalformedKind::EmptyPlaceholder,
        ));
    }
    if !is_identifier(name) {
        return Err(RenderError::malformed(
            marker.clone(),
            MalformedKind::InvalidIdentifier(name.to_string()),
        ));
    }
    Ok(name.to_string())
}

/// `[A-Za-z_$][A-Za-z0-9_$]*`
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
