use crate::core::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tool configuration loaded from `.testgen.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestgenConfig {
    #[serde(default)]
    pub generator: GeneratorSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// Suffix appended to the target name for the default test class name
    #[serde(default = "default_test_suffix")]
    pub test_suffix: String,

    /// Prefix for generated mock variable names
    #[serde(default = "default_mock_prefix")]
    pub mock_prefix: String,
}

fn default_test_suffix() -> String {
    "Test".to_string()
}

fn default_mock_prefix() -> String {
    "mock_".to_string()
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            test_suffix: default_test_suffix(),
            mock_prefix: default_mock_prefix(),
        }
    }
}

impl TestgenConfig {
    /// Loads configuration from `path`, or `.testgen.toml` in the working
    /// directory. A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.unwrap_or_else(|| Path::new(".testgen.toml"));
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|err| Error::Configuration(err.to_string()))
    }
}
