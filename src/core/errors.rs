//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for testgen operations
#[derive(Debug, Error)]
pub enum Error {
    /// No conventional source file for the target could be opened
    #[error("neither of the conventional source files could be opened for `{class}`: {tried:?}")]
    ClassNotFound { class: String, tried: Vec<PathBuf> },

    /// An explicitly given source location does not resolve to a readable file
    #[error("source file `{path}` could not be opened")]
    SourceNotReadable {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The source file loaded, but the target type is not declared in it
    #[error("could not find `{class}` in `{path}`")]
    ClassMissingFromSource { class: String, path: PathBuf },

    /// The source file is not parseable Rust
    #[error("failed to parse `{path}`")]
    Parse {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },

    /// An expectation carries an operator outside the fixed mapping table
    #[error("token `{token}` could not be parsed in @assert annotation")]
    UnsupportedOperator { token: String },

    /// A named template is missing from the registry; a deployment defect
    #[error("no template named `{name}` is registered")]
    TemplateNotFound { name: String },

    /// Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the resolution family of failures, which abort a run before
    /// any rendering begins.
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Error::ClassNotFound { .. }
                | Error::SourceNotReadable { .. }
                | Error::ClassMissingFromSource { .. }
                | Error::Parse { .. }
        )
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
