//! The build-cadence condition: every Nth build, optionally only during
//! office hours

use tracing::debug;

use crate::condition::{EvaluationContext, OfficeHours, RunCondition};
use crate::config::CadenceConfig;
use crate::error::{Error, Result};

/// Gates a step on the build number being a multiple of a configured
/// divisor, optionally restricted to the office-hours window.
#[derive(Debug, Clone)]
pub struct CadenceCondition {
    build_number_multiple: u64,
    only_in_office_hours: bool,
    office_hours: OfficeHours,
}

impl CadenceCondition {
    /// Registry kind for this condition.
    pub const KIND: &'static str = "build-cadence";
    /// Name shown by host UIs.
    pub const DISPLAY_NAME: &'static str = "Build cadence";

    /// Create a condition that runs every `build_number_multiple`-th
    /// build.
    ///
    /// The multiple must be positive; a zero divisor is a validation
    /// error here, before any evaluation can happen.
    pub fn new(build_number_multiple: u64, only_in_office_hours: bool) -> Result<Self> {
        if build_number_multiple == 0 {
            return Err(Error::Validation(
                "build_number_multiple must be a positive integer".to_string(),
            ));
        }
        debug!(
            "Built '{}' condition: multiple {build_number_multiple}, office hours only: {only_in_office_hours}",
            Self::KIND
        );
        Ok(Self {
            build_number_multiple,
            only_in_office_hours,
            office_hours: OfficeHours::default(),
        })
    }

    /// Build from validated host configuration.
    pub fn from_config(config: &CadenceConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.build_number_multiple, config.only_in_office_hours)
    }

    pub fn build_number_multiple(&self) -> u64 {
        self.build_number_multiple
    }

    pub fn only_in_office_hours(&self) -> bool {
        self.only_in_office_hours
    }
}

impl RunCondition for CadenceCondition {
    fn display_name(&self) -> &str {
        Self::DISPLAY_NAME
    }

    fn should_run(&self, ctx: &EvaluationContext) -> Result<bool> {
        // Construction rejects zero; a value that bypassed it surfaces as
        // a configuration error, never an arithmetic fault.
        if self.build_number_multiple == 0 {
            return Err(Error::InvalidCondition(
                "build_number_multiple must be positive".to_string(),
            ));
        }
        if ctx.build_number() % self.build_number_multiple != 0 {
            return Ok(false);
        }
        if !self.only_in_office_hours {
            return Ok(true);
        }
        Ok(self.office_hours.contains(ctx.now(), ctx.listener()))
    }
}
