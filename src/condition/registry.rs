//! Static registration of condition kinds
//!
//! The host integration layer resolves configured kinds through an
//! explicit registry table; there is no runtime discovery.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::condition::{CadenceCondition, RunCondition};
use crate::config::{CadenceConfig, ConditionConfig};
use crate::error::{Error, Result};

/// Factory building a boxed condition from its `with:` parameters.
pub type ConditionFactory = fn(&serde_yaml::Value) -> Result<Box<dyn RunCondition>>;

struct Registration {
    display_name: &'static str,
    factory: ConditionFactory,
}

/// Name-indexed table of available condition kinds.
pub struct ConditionRegistry {
    registrations: HashMap<&'static str, Registration>,
}

impl ConditionRegistry {
    pub fn new() -> Self {
        Self {
            registrations: HashMap::new(),
        }
    }

    /// Register a condition kind. Registering the same kind twice is an
    /// error.
    pub fn register(
        &mut self,
        kind: &'static str,
        display_name: &'static str,
        factory: ConditionFactory,
    ) -> Result<()> {
        if self.registrations.contains_key(kind) {
            return Err(Error::ConditionAlreadyExists(kind.to_string()));
        }
        self.registrations.insert(
            kind,
            Registration {
                display_name,
                factory,
            },
        );
        Ok(())
    }

    /// Build the condition a configuration names.
    pub fn build(&self, config: &ConditionConfig) -> Result<Box<dyn RunCondition>> {
        let registration = self
            .registrations
            .get(config.condition.as_str())
            .ok_or_else(|| Error::UnknownCondition(config.condition.clone()))?;
        debug!("Building run condition '{}'", config.condition);
        (registration.factory)(&config.with)
    }

    /// Registered kinds, sorted, for host UIs.
    pub fn kinds(&self) -> Vec<&'static str> {
        let mut kinds: Vec<_> = self.registrations.keys().copied().collect();
        kinds.sort_unstable();
        kinds
    }

    /// Display name for a kind, if registered.
    pub fn display_name(&self, kind: &str) -> Option<&'static str> {
        self.registrations.get(kind).map(|r| r.display_name)
    }
}

impl Default for ConditionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The registry of conditions shipped with this crate.
pub fn builtin() -> &'static ConditionRegistry {
    static BUILTIN: Lazy<ConditionRegistry> = Lazy::new(|| {
        let mut registry = ConditionRegistry::new();
        registry
            .register(
                CadenceCondition::KIND,
                CadenceCondition::DISPLAY_NAME,
                build_cadence,
            )
            .expect("builtin kinds are unique");
        registry
    });
    &BUILTIN
}

fn build_cadence(params: &serde_yaml::Value) -> Result<Box<dyn RunCondition>> {
    let config: CadenceConfig = serde_yaml::from_value(params.clone())?;
    Ok(Box::new(CadenceCondition::from_config(&config)?))
}
