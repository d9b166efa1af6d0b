//! Condition configuration supplied by the host
//!
//! Values arrive through whatever binding the host defines: a YAML
//! document, a JSON value, or direct construction. Everything is
//! validated before a condition is built from it, so invalid input is
//! reported at configuration time and never reaches evaluation.

pub mod validation;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for the build-cadence condition.
///
/// Immutable once a condition has been built from it; the condition owns
/// its own copy of the values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CadenceConfig {
    /// Divisor for the build number; the gated step runs on every
    /// multiple. Must be positive.
    pub build_number_multiple: u64,
    /// Restrict runs to the office-hours window.
    #[serde(default)]
    pub only_in_office_hours: bool,
}

impl CadenceConfig {
    /// Reject values the field types alone cannot: a zero divisor.
    /// Negative input already fails deserialization into the unsigned
    /// field.
    pub fn validate(&self) -> Result<()> {
        if self.build_number_multiple == 0 {
            return Err(Error::Validation(
                "build_number_multiple must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }
}

/// Host-facing envelope naming a condition kind plus its parameters.
///
/// ```yaml
/// condition: build-cadence
/// with:
///   build_number_multiple: 5
///   only_in_office_hours: true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionConfig {
    /// Registry kind to resolve.
    pub condition: String,
    /// Parameters handed to the condition's factory.
    #[serde(default)]
    pub with: serde_yaml::Value,
}

impl ConditionConfig {
    /// Parse from a YAML document.
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Convert from a JSON value, for hosts that bind configuration as
    /// JSON.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}
