//! Upper and lower name forms for scaffolded components

use thiserror::Error;

/// Errors that can occur when deriving name forms
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("component name is empty")]
    Empty,
    #[error("component name '{name}' contains invalid character '{ch}'")]
    InvalidCharacter { name: String, ch: char },
    #[error("component name '{0}' must not start with a digit")]
    LeadingDigit(String),
}

/// A component name in the two forms the templates use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameForms {
    /// PascalCase, e.g. `UserProfile`
    pub upper: String,
    /// All lower case, e.g. `userprofile`
    pub lower: String,
}

impl NameForms {
    /// Derive both forms from a raw name
    ///
    /// Words are split on `-`, `_`, `.`, whitespace and lower-to-upper case
    /// boundaries. For the upper form, letters after the first of each word
    /// keep their case, so `myAPI` becomes `MyAPI`. The lower form is the words
    /// joined and lower-cased, so `myAPI` becomes `myapi`.
    pub fn derive(raw: &str) -> Result<Self, NameError> {
        let words = split_words(raw)?;
        let first = words.first().ok_or(NameError::Empty)?;
        if first.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(NameError::LeadingDigit(raw.to_string()));
        }

        let upper: String = words.iter().map(|w| capitalize(w)).collect();
        let lower = words.iter().map(|w| w.to_lowercase()).collect();

        Ok(Self { upper, lower })
    }
}

fn split_words(raw: &str) -> Result<Vec<String>, NameError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for ch in raw.chars() {
        if ch == '-' || ch == '_' || ch == '.' || ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }
        if !ch.is_ascii_alphanumeric() {
            return Err(NameError::InvalidCharacter {
                name: raw.to_string(),
                ch,
            });
        }
        let boundary = ch.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit());
        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(ch);
        prev = Some(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }

    Ok(words)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
