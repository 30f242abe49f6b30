//! In-memory model of the generated C# source.
//!
//! A namespace holds type declarations, which hold methods whose bodies are a
//! single `return new T();`.

use std::borrow::Cow;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::GenerateError;

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}\p{Nl}_][\p{L}\p{Nl}\p{Mn}\p{Mc}\p{Nd}\p{Pc}]*$")
        .expect("identifier regex should be valid")
});
static QUALIFIED_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[\p{L}\p{Nl}_][\p{L}\p{Nl}\p{Mn}\p{Mc}\p{Nd}\p{Pc}]*(\.[\p{L}\p{Nl}_][\p{L}\p{Nl}\p{Mn}\p{Mc}\p{Nd}\p{Pc}]*)*$",
    )
    .expect("qualified name regex should be valid")
});
static FILE_EXTENSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+(\.[A-Za-z0-9_]+)*$").expect("extension regex should be valid")
});

/// C# reserved keywords. Contextual keywords (`var`, `async`, ...) are valid
/// identifiers and are not listed.
const RESERVED_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Check that `name` is a plain identifier such as `Cars` or `Načíst`.
pub fn check_identifier(what: &str, name: &str) -> Result<(), GenerateError> {
    if IDENTIFIER.is_match(name) {
        Ok(())
    } else {
        Err(GenerateError::inconsistency(format!(
            "{what} `{name}` is not a valid identifier"
        )))
    }
}

/// Check that `name` is a dotted name such as `Web.Controllers.MyControllerBase`.
pub fn check_qualified_name(what: &str, name: &str) -> Result<(), GenerateError> {
    if QUALIFIED_NAME.is_match(name) {
        Ok(())
    } else {
        Err(GenerateError::inconsistency(format!(
            "{what} `{name}` is not a valid qualified name"
        )))
    }
}

/// Check that `ext` is a file extension (`cs`, `g.cs`) that stays inside its directory.
pub fn check_file_extension(what: &str, ext: &str) -> Result<(), GenerateError> {
    if FILE_EXTENSION.is_match(ext) {
        Ok(())
    } else {
        Err(GenerateError::inconsistency(format!(
            "{what} `{ext}` is not a valid file extension"
        )))
    }
}

/// Prefix reserved keywords with `@` so they can be used as identifiers.
pub fn escape_identifier(name: &str) -> Cow<'_, str> {
    if RESERVED_KEYWORDS.contains(&name) {
        Cow::Owned(format!("@{name}"))
    } else {
        Cow::Borrowed(name)
    }
}

/// [`escape_identifier`] applied to every segment of a dotted name.
pub fn escape_qualified_name(name: &str) -> String {
    name.split('.')
        .map(escape_identifier)
        .collect::<Vec<_>>()
        .join(".")
}

/// Reference to a type by (possibly qualified) name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReference(String);

impl TypeReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&escape_qualified_name(&self.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => f.write_str("public"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// `new T()`
    ObjectCreate(TypeReference),
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::ObjectCreate(ty) => write!(f, "new {ty}()"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Return(Expression),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Return(expr) => write!(f, "return {expr};"),
        }
    }
}

/// An action method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberMethod {
    pub name: String,
    pub visibility: Visibility,
    /// Attribute types, rendered as `[Name]` above the signature
    pub attributes: Vec<TypeReference>,
    pub return_type: TypeReference,
    pub statements: Vec<Statement>,
}

impl MemberMethod {
    /// `public ActionResult Load()`
    pub fn signature(&self) -> String {
        format!(
            "{} {} {}()",
            self.visibility,
            self.return_type,
            escape_identifier(&self.name)
        )
    }
}

/// A class declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub name: String,
    pub visibility: Visibility,
    pub is_partial: bool,
    pub base_types: Vec<TypeReference>,
    pub members: Vec<MemberMethod>,
}

impl TypeDeclaration {
    /// `public partial class CarsController : Controller`
    pub fn header(&self) -> String {
        let mut header = self.visibility.to_string();
        if self.is_partial {
            header.push_str(" partial");
        }
        header.push_str(" class ");
        header.push_str(&escape_identifier(&self.name));
        if !self.base_types.is_empty() {
            let bases: Vec<String> = self
                .base_types
                .iter()
                .map(TypeReference::to_string)
                .collect();
            header.push_str(" : ");
            header.push_str(&bases.join(", "));
        }
        header
    }
}

/// A namespace with its imports and type declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeNamespace {
    pub name: String,
    pub imports: Vec<String>,
    pub types: Vec<TypeDeclaration>,
}

impl CodeNamespace {
    /// Check every name and type reference in the unit.
    ///
    /// Units built by the synthesizer always pass; a failure here means the
    /// code model was assembled by hand with holes in it.
    pub fn validate(&self) -> Result<(), GenerateError> {
        check_qualified_name("namespace", &self.name)?;
        for import in &self.imports {
            check_qualified_name("import", import)?;
        }
        for ty in &self.types {
            check_identifier("type name", &ty.name)?;
            for base in &ty.base_types {
                check_qualified_name("base type", base.name())?;
            }
            for method in &ty.members {
                check_identifier("method name", &method.name)?;
                check_qualified_name("return type", method.return_type.name())?;
                for attribute in &method.attributes {
                    check_qualified_name("attribute", attribute.name())?;
                }
                for statement in &method.statements {
                    let Statement::Return(Expression::ObjectCreate(ty)) = statement;
                    check_qualified_name("constructed type", ty.name())?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_rules() {
        assert!(check_identifier("action", "Load").is_ok());
        assert!(check_identifier("action", "_load2").is_ok());
        assert!(check_identifier("action", "").is_err());
        assert!(check_identifier("action", "2Load").is_err());
        assert!(check_identifier("controller", "../Cars").is_err());
        assert!(check_qualified_name("base", "Web.Controllers.Base").is_ok());
        assert!(check_qualified_name("base", "Web..Base").is_err());
        assert!(check_qualified_name("base", "Web.").is_err());
        assert!(check_identifier("action", "Načíst").is_ok());
        assert!(check_identifier("action", "Ñandú_2").is_ok());
        assert!(check_qualified_name("namespace", "Aplikace.Řadiče").is_ok());
        assert!(check_identifier("action", "Load-Now").is_err());
    }

    #[test]
    fn test_file_extension_rules() {
        assert!(check_file_extension("ext", "cs").is_ok());
        assert!(check_file_extension("ext", "g.cs").is_ok());
        assert!(check_file_extension("ext", "").is_err());
        assert!(check_file_extension("ext", "x/../../y").is_err());
        assert!(check_file_extension("ext", "..").is_err());
        assert!(check_file_extension("ext", ".cs").is_err());
    }

    #[test]
    fn test_reserved_keywords_are_escaped() {
        assert_eq!(escape_identifier("class"), "@class");
        assert_eq!(escape_identifier("Load"), "Load");
        assert_eq!(escape_identifier("var"), "var");
        assert_eq!(escape_qualified_name("Web.event.Models"), "Web.@event.Models");
        assert_eq!(TypeReference::new("Web.base").to_string(), "Web.@base");
    }

    #[test]
    fn test_header_and_signature() {
        let method = MemberMethod {
            name: "Load".to_string(),
            visibility: Visibility::Public,
            attributes: vec![TypeReference::new("HttpGet")],
            return_type: TypeReference::new("ActionResult"),
            statements: vec![Statement::Return(Expression::ObjectCreate(
                TypeReference::new("ViewResult"),
            ))],
        };
        let ty = TypeDeclaration {
            name: "CarsController".to_string(),
            visibility: Visibility::Public,
            is_partial: true,
            base_types: vec![TypeReference::new("Controller")],
            members: vec![method.clone()],
        };
        assert_eq!(ty.header(), "public partial class CarsController : Controller");
        assert_eq!(method.signature(), "public ActionResult Load()");
        assert_eq!(method.statements[0].to_string(), "return new ViewResult();");
    }

    #[test]
    fn test_validate_rejects_unresolved_type_reference() {
        let ns = CodeNamespace {
            name: "GeneratedViews".to_string(),
            imports: vec![],
            types: vec![TypeDeclaration {
                name: "Load".to_string(),
                visibility: Visibility::Public,
                is_partial: false,
                base_types: vec![TypeReference::new("")],
                members: vec![],
            }],
        };
        assert!(matches!(
            ns.validate(),
            Err(GenerateError::SynthesisInconsistency { .. })
        ));
    }
}
