//! Core data model shared by the descriptor and generation layers.

pub mod errors;

pub use errors::{Error, Result};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Identity of the type a generation run inspects. Immutable once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetClass {
    pub fully_qualified_name: String,
    pub short_name: String,
    pub source_file: PathBuf,
}

/// Identity of the test class being generated. Derived from the target when
/// not explicitly supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputClass {
    pub namespace: String,
    pub short_name: String,
    pub source_file: PathBuf,
}

/// Result of one generation run. `incomplete` is true exactly when no method
/// carried a matching expectation, so every generated test is a placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedClass {
    pub code: String,
    pub incomplete: bool,
}
