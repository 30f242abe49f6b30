use std::fmt;
use std::io;
use std::path::PathBuf;

use http::Method;

/// Failure of a generation run
///
/// Every variant is terminal: the run stops at the first error and artifacts
/// written by earlier iterations stay on disk.
#[derive(Debug)]
pub enum GenerateError {
    /// An endpoint descriptor carries a verb other than GET or POST
    UnsupportedVerb {
        /// The offending verb
        verb: Method,
        /// Controller name of the descriptor
        controller: String,
        /// Action name of the descriptor
        action: String,
    },
    /// Creating a directory or writing a file failed
    Io {
        /// Path being created or written
        path: PathBuf,
        /// Underlying filesystem error
        source: io::Error,
    },
    /// A descriptor or code unit violates an invariant of the code model
    ///
    /// Malformed identifiers and unresolved type references end up here.
    SynthesisInconsistency {
        /// What was inconsistent
        detail: String,
    },
    /// Template rendering failed
    Render(askama::Error),
    /// A type-name pivot matched no type known to the descriptor source
    UnknownPivot {
        /// The pivot as given by the caller
        pivot: String,
    },
}

impl GenerateError {
    pub(crate) fn inconsistency(detail: impl Into<String>) -> Self {
        GenerateError::SynthesisInconsistency {
            detail: detail.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GenerateError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::UnsupportedVerb {
                verb,
                controller,
                action,
            } => write!(
                f,
                "unsupported HTTP verb {verb} on {controller}/{action}: only GET and POST can be scaffolded"
            ),
            GenerateError::Io { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
            GenerateError::SynthesisInconsistency { detail } => {
                write!(f, "synthesis inconsistency: {detail}")
            }
            GenerateError::Render(err) => write!(f, "failed to render generated source: {err}"),
            GenerateError::UnknownPivot { pivot } => {
                write!(f, "pivot `{pivot}` does not name a known type")
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Io { source, .. } => Some(source),
            GenerateError::Render(err) => Some(err),
            _ => None,
        }
    }
}

impl From<askama::Error> for GenerateError {
    fn from(err: askama::Error) -> Self {
        GenerateError::Render(err)
    }
}
