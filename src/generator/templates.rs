use askama::Template;

use super::code::{escape_qualified_name, CodeNamespace, TypeDeclaration};
use super::synth::{ControllerUnit, ViewUnit};
use crate::error::GenerateError;

/// Template data for rendering one C# namespace
///
/// Layout is fixed: opening braces on their own line, four-space indents,
/// imports inside the namespace in model order, a blank line between the
/// imports and each type declaration.
#[derive(Template)]
#[template(path = "namespace.cs.txt", escape = "none")]
pub struct NamespaceTemplateData<'a> {
    /// Namespace name
    pub name: &'a str,
    /// `using` directives, already ordered
    pub imports: &'a [String],
    /// Type declarations in order
    pub types: &'a [TypeDeclaration],
}

/// Render a namespace to source text
///
/// The output is a pure function of the code model: no timestamps, no
/// environment-dependent content, LF line endings, trailing newline.
/// Reserved keywords used as names are emitted with an `@` prefix.
///
/// # Errors
///
/// `SynthesisInconsistency` if the model references an invalid name, `Render`
/// if the template engine fails.
pub fn render_namespace(namespace: &CodeNamespace) -> Result<String, GenerateError> {
    namespace.validate()?;
    let name = escape_qualified_name(&namespace.name);
    let imports: Vec<String> = namespace
        .imports
        .iter()
        .map(|import| escape_qualified_name(import))
        .collect();
    let mut rendered = NamespaceTemplateData {
        name: &name,
        imports: &imports,
        types: &namespace.types,
    }
    .render()?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

/// Render a partial controller file
pub fn render_controller(unit: &ControllerUnit) -> Result<String, GenerateError> {
    render_namespace(&unit.namespace)
}

/// Render a view stub file
pub fn render_view(unit: &ViewUnit) -> Result<String, GenerateError> {
    render_namespace(&unit.namespace)
}
