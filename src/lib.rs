//! # Buildgate
//!
//! Run conditions for build-automation hosts: small gating predicates a
//! host consults to decide whether a dependent build step should run.
//!
//! The host resolves a condition kind through the [`condition::registry`],
//! hands the built condition an [`EvaluationContext`] per build, and gates
//! the step on the returned boolean.
//!
//! ## Modules
//!
//! - `condition` - The [`RunCondition`] capability interface, the shipped
//!   build-cadence condition, and the registry hosts resolve kinds through
//! - `config` - Typed condition configuration and form-entry validation
//! - `listener` - Injected diagnostic sinks for evaluation output
//! - `error` - Crate-wide error and result types
pub mod condition;
pub mod config;
pub mod error;
pub mod listener;

pub use condition::{
    CadenceCondition, ConditionRegistry, EvaluationContext, OfficeHours, RunCondition,
};
pub use config::{CadenceConfig, ConditionConfig};
pub use error::{Error, Result};
pub use listener::{BuildListener, ConsoleListener, MemoryListener, NullListener, TracingListener};
