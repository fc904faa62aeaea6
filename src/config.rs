use serde::Deserialize;

use crate::error::DemoError;

/// Names passed to the greeters. The binary always runs with the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub russian_name: String,
    pub american_name: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            russian_name: "Алексей".to_string(),
            american_name: "Aleksei".to_string(),
        }
    }
}

impl DemoConfig {
    /// Library entry point for callers that embed the demo with their own
    /// names. Missing keys keep their default value.
    pub fn from_toml_str(content: &str) -> Result<Self, DemoError> {
        Ok(toml::from_str(content)?)
    }
}
