//! Gating predicates consulted before a build step runs
//!
//! A [`RunCondition`] answers one question per build: should the dependent
//! step execute? Conditions are immutable once built from validated
//! configuration and may be evaluated from any thread.

mod cadence;
mod office_hours;
pub mod registry;

pub use cadence::CadenceCondition;
pub use office_hours::OfficeHours;
pub use registry::ConditionRegistry;

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::listener::BuildListener;

/// Capability interface for gating predicates.
///
/// Implementations are registered with a [`ConditionRegistry`] and built
/// from host configuration; the host then calls the two evaluation phases
/// at the matching points of the build lifecycle.
pub trait RunCondition: std::fmt::Debug + Send + Sync {
    /// Human-readable name shown by host UIs.
    fn display_name(&self) -> &str;

    /// Whether the prebuild phase of the gated step should run.
    fn should_run_prebuild(&self, _ctx: &EvaluationContext) -> Result<bool> {
        Ok(true)
    }

    /// Whether the gated step itself should run.
    fn should_run(&self, ctx: &EvaluationContext) -> Result<bool>;
}

/// Per-evaluation inputs supplied by the host: the build's ordinal number,
/// the evaluation timestamp, and the diagnostic sink for this build's
/// console output. Nothing here is retained by a condition.
pub struct EvaluationContext<'a> {
    build_number: u64,
    now: DateTime<Local>,
    listener: &'a dyn BuildListener,
}

impl<'a> EvaluationContext<'a> {
    /// Context for an evaluation happening now.
    pub fn new(build_number: u64, listener: &'a dyn BuildListener) -> Self {
        Self::at(build_number, Local::now(), listener)
    }

    /// Context with an explicit evaluation timestamp.
    pub fn at(build_number: u64, now: DateTime<Local>, listener: &'a dyn BuildListener) -> Self {
        Self {
            build_number,
            now,
            listener,
        }
    }

    pub fn build_number(&self) -> u64 {
        self.build_number
    }

    pub fn now(&self) -> DateTime<Local> {
        self.now
    }

    pub fn listener(&self) -> &dyn BuildListener {
        self.listener
    }
}
