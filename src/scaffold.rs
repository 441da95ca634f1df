//! Built-in React component and Redux container templates

use thiserror::Error;

use crate::context::SubstitutionContext;
use crate::error::RenderError;
use crate::names::NameError;
use crate::template::Template;

const COMPONENT_SOURCE: &str = include_str!("../templates/component.js");
const CONTAINER_SOURCE: &str = include_str!("../templates/container.js");

/// Templates shipped with the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// React component class rendering a titled container with a cancel link
    Component,
    /// Redux `connect` wrapper binding the component's action creators
    Container,
}

impl Builtin {
    pub const ALL: [Builtin; 2] = [Builtin::Component, Builtin::Container];

    /// Registry name
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Component => "component",
            Builtin::Container => "container",
        }
    }

    /// Raw template source
    pub fn source(self) -> &'static str {
        match self {
            Builtin::Component => COMPONENT_SOURCE,
            Builtin::Container => CONTAINER_SOURCE,
        }
    }

    /// Parse the template source
    pub fn template(self) -> Result<Template, RenderError> {
        Template::parse(self.source())
    }
}

/// Errors that can occur while scaffolding a component
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("invalid component name: {0}")]
    Name(#[from] NameError),
    #[error("failed to render template: {0}")]
    Render(#[from] RenderError),
}

/// One rendered file of a scaffold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldFile {
    pub builtin: Builtin,
    pub contents: String,
}

/// Render every built-in template for a component name
///
/// Either all templates render or an error is returned; where the files go is
/// up to the caller.
pub fn scaffold(raw_name: &str) -> Result<Vec<ScaffoldFile>, ScaffoldError> {
    let ctx = SubstitutionContext::for_name(raw_name)?;
    log::debug!("scaffolding '{}'", raw_name);

    Builtin::ALL
        .iter()
        .map(|&builtin| {
            let contents = builtin.template()?.render(&ctx)?;
            Ok::<_, ScaffoldError>(ScaffoldFile { builtin, contents })
        })
        .collect()
}
