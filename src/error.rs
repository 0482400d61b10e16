//! Error taxonomy for project generation
//!
//! Three failure kinds, all fatal at the point of occurrence:
//! an unrecognized machine type, a template asset absent from the
//! embedded store, and a destination that cannot be written.
//! Already-written files are never rolled back.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ScaffoldError {
    /// The requested machine type key is not in the supported set
    UnknownVariant(String),
    /// An expected template asset is missing from the embedded store
    TemplateMissing(String),
    /// A project file or directory could not be written
    WriteFailure { path: PathBuf, source: io::Error },
}

impl fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaffoldError::UnknownVariant(key) => {
                write!(f, "unknown ZX Spectrum machine type: '{}'", key)
            }
            ScaffoldError::TemplateMissing(path) => {
                write!(f, "template asset missing from store: {}", path)
            }
            ScaffoldError::WriteFailure { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ScaffoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaffoldError::WriteFailure { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl ScaffoldError {
    pub fn write_failure(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScaffoldError::WriteFailure {
            path: path.into(),
            source,
        }
    }
}
