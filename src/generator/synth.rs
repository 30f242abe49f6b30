use http::Method;
use tracing::debug;

use super::code::{
    check_identifier, check_qualified_name, CodeNamespace, Expression, MemberMethod, Statement,
    TypeDeclaration, TypeReference, Visibility,
};
use crate::config::GeneratorConfig;
use crate::descriptor::EndpointDescriptor;
use crate::error::GenerateError;

/// One partial controller class holding a single action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerUnit {
    /// Controller name without suffix, e.g. `Cars`
    pub controller: String,
    pub action: String,
    pub namespace: CodeNamespace,
}

impl ControllerUnit {
    /// `{controller}Controller`
    pub fn class_name(&self) -> String {
        controller_class_name(&self.controller)
    }
}

/// An empty placeholder declaration standing in for a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewUnit {
    pub controller: String,
    pub action: String,
    pub namespace: CodeNamespace,
}

pub fn controller_class_name(controller: &str) -> String {
    format!("{controller}Controller")
}

/// Select the attribute marking an action with its HTTP verb.
///
/// Only GET and POST can be scaffolded; any other verb is an error rather
/// than a silent fallback.
pub fn verb_marker<'a>(
    descriptor: &EndpointDescriptor,
    config: &'a GeneratorConfig,
) -> Result<&'a str, GenerateError> {
    match descriptor.verb() {
        &Method::GET => Ok(config.get_marker.as_str()),
        &Method::POST => Ok(config.post_marker.as_str()),
        other => Err(GenerateError::UnsupportedVerb {
            verb: other.clone(),
            controller: descriptor.controller().to_string(),
            action: descriptor.action().to_string(),
        }),
    }
}

fn check_descriptor(descriptor: &EndpointDescriptor) -> Result<(), GenerateError> {
    check_identifier("controller name", descriptor.controller())?;
    check_identifier("action name", descriptor.action())
}

/// Build the partial controller class for one descriptor.
///
/// # Errors
///
/// `UnsupportedVerb` for verbs other than GET/POST, `SynthesisInconsistency`
/// for malformed descriptor names or configuration.
pub fn synthesize_controller(
    descriptor: &EndpointDescriptor,
    config: &GeneratorConfig,
) -> Result<ControllerUnit, GenerateError> {
    let marker = verb_marker(descriptor, config)?;
    check_descriptor(descriptor)?;
    check_qualified_name("base controller", &config.base_controller)?;
    check_qualified_name("namespace", &config.namespace)?;

    let action = MemberMethod {
        name: descriptor.action().to_string(),
        visibility: Visibility::Public,
        attributes: vec![TypeReference::new(marker)],
        return_type: TypeReference::new(&config.action_result_type),
        statements: vec![Statement::Return(Expression::ObjectCreate(
            TypeReference::new(&config.view_result_type),
        ))],
    };

    let class = TypeDeclaration {
        name: controller_class_name(descriptor.controller()),
        visibility: Visibility::Public,
        is_partial: true,
        base_types: vec![TypeReference::new(&config.base_controller)],
        members: vec![action],
    };

    debug!(%descriptor, class = %class.name, "synthesized controller");
    Ok(ControllerUnit {
        controller: descriptor.controller().to_string(),
        action: descriptor.action().to_string(),
        namespace: CodeNamespace {
            name: config.namespace.clone(),
            imports: config.imports(),
            types: vec![class],
        },
    })
}

/// Build the view placeholder for one descriptor: a public class named after
/// the action, with no base type and no members.
pub fn synthesize_view(
    descriptor: &EndpointDescriptor,
    config: &GeneratorConfig,
) -> Result<ViewUnit, GenerateError> {
    check_descriptor(descriptor)?;
    check_qualified_name("view namespace", &config.view_namespace)?;

    Ok(ViewUnit {
        controller: descriptor.controller().to_string(),
        action: descriptor.action().to_string(),
        namespace: CodeNamespace {
            name: config.view_namespace.clone(),
            imports: Vec::new(),
            types: vec![TypeDeclaration {
                name: descriptor.action().to_string(),
                visibility: Visibility::Public,
                is_partial: false,
                base_types: Vec::new(),
                members: Vec::new(),
            }],
        },
    })
}
