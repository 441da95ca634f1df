//! Substitution contexts: placeholder name to value mappings

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use crate::names::{NameError, NameForms};

/// Placeholder for the PascalCase component name
pub const NAME_UPPER: &str = "nameUpper";
/// Placeholder for the lower-cased component name
pub const NAME_LOWER: &str = "nameLower";

/// Errors that can occur when loading a context
#[derive(Error, Debug)]
pub enum ContextError {
    /// Content is not a TOML table of string values
    #[error("Failed to parse context TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Values for one render call
///
/// Keys are ordered so iteration, and therefore error suggestions, are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SubstitutionContext {
    values: BTreeMap<String, String>,
}

impl SubstitutionContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Context holding `nameUpper` and `nameLower` derived from a raw name
    pub fn for_name(raw: &str) -> Result<Self, NameError> {
        let forms = NameForms::derive(raw)?;
        Ok(Self::new()
            .with(NAME_UPPER, forms.upper)
            .with(NAME_LOWER, forms.lower))
    }

    /// Load a context from a TOML string of top-level `key = "value"` pairs
    pub fn from_toml_str(content: &str) -> Result<Self, ContextError> {
        Ok(toml::from_str(content)?)
    }

    /// Add a value, consuming and returning the context
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a value, returning the previous one for this name
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(name.into(), value.into())
    }

    /// Look up the value for a placeholder name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|s| s.as_str())
    }

    /// Defined names in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }

    /// Number of defined names
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no names are defined
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubstitutionContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ctx = Self::new();
        ctx.extend(iter);
        ctx
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for SubstitutionContext {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}
