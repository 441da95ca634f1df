//! Template registry for storing and retrieving parsed templates

use std::collections::HashMap;
use thiserror::Error;

use super::Template;
use crate::context::SubstitutionContext;
use crate::error::RenderError;
use crate::scaffold::Builtin;

/// Errors that can occur during registry operations
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Template not found in registry
    #[error("template not found: {name} (available: {})", available.join(", "))]
    NotFound { name: String, available: Vec<String> },

    /// Duplicate template name
    #[error("duplicate template definition: {name}")]
    Duplicate { name: String },

    /// Template failed to parse or render
    #[error("template error: {0}")]
    Template(#[from] RenderError),
}

/// Registry of named templates
#[derive(Debug, Default, Clone)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every [`Builtin`] template under its name
    pub fn with_builtins() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for builtin in Builtin::ALL {
            registry.register_template(builtin.name(), builtin.template()?)?;
        }
        Ok(registry)
    }

    /// Parse and register a template
    pub fn register(&mut self, name: impl Into<String>, source: &str) -> Result<(), RegistryError> {
        let template = Template::parse(source)?;
        self.register_template(name, template)
    }

    /// Register an already parsed template
    pub fn register_template(
        &mut self,
        name: impl Into<String>,
        template: Template,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.templates.contains_key(&name) {
            return Err(RegistryError::Duplicate { name });
        }
        self.templates.insert(name, template);
        Ok(())
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Check if a template exists
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Get all template names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Render a registered template
    pub fn render(&self, name: &str, ctx: &SubstitutionContext) -> Result<String, RegistryError> {
        let template = self.get(name).ok_or_else(|| RegistryError::NotFound {
            name: name.to_string(),
            available: self.names().into_iter().map(String::from).collect(),
        })?;
        log::debug!("rendering registered template '{}'", name);
        Ok(template.render(ctx)?)
    }
}
