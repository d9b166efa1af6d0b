//! Diagnostic output for condition evaluation
//!
//! Conditions never talk to a global logger; the host hands each
//! evaluation a listener wired to wherever that build's console output
//! goes.

use std::sync::Mutex;

/// Sink for human-readable diagnostics emitted during condition
/// evaluation.
pub trait BuildListener: Send + Sync {
    /// Write one line of diagnostic output.
    fn info(&self, message: &str);
}

/// Listener that prints to stdout.
pub struct ConsoleListener;

impl BuildListener for ConsoleListener {
    fn info(&self, message: &str) {
        println!("{message}");
    }
}

/// Listener that forwards to the `tracing` subscriber at info level.
pub struct TracingListener;

impl BuildListener for TracingListener {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }
}

/// Listener that discards all output.
pub struct NullListener;

impl BuildListener for NullListener {
    fn info(&self, _message: &str) {}
}

/// Listener that buffers lines in memory so callers can inspect what an
/// evaluation wrote.
#[derive(Default)]
pub struct MemoryListener {
    lines: Mutex<Vec<String>>,
}

impl MemoryListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl BuildListener for MemoryListener {
    fn info(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}
