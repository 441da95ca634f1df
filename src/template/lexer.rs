//! Lexer for `<%= identifier %>` templates using logos

use logos::Logos;

pub use crate::error::Span;

/// Template tokens
///
/// Everything that is not a delimiter lexes as text, so the concatenation of
/// all token slices is the original source.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Placeholder opening delimiter
    #[token("<%=")]
    Open,

    /// Placeholder closing delimiter
    #[token("%>")]
    Close,

    /// Run of characters that cannot start a delimiter
    #[regex(r"[^<%]+")]
    Text,

    /// `<` not followed by `%=`
    #[token("<")]
    Lt,

    /// `%` not followed by `>`
    #[token("%")]
    Percent,
}

/// Lex input string into tokens with spans
///
/// A slice logos cannot match comes back as `Err` with its span; the parser
/// keeps it as literal text so no bytes are dropped.
pub fn lex(input: &str) -> impl Iterator<Item = (Result<Token, ()>, Span)> + '_ {
    Token::lexer(input).spanned()
}
