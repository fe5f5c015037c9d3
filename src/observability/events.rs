//! Observable events for specalgebra
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A traced combinator appended a record to its sink
    TraceAppended,
    /// A sink could not render a record it received
    TraceRenderFailed,
    /// Configuration loaded
    ConfigLoaded,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::TraceAppended => "SPEC_TRACE_APPENDED",
            Event::TraceRenderFailed => "SPEC_TRACE_RENDER_FAILED",
            Event::ConfigLoaded => "CONFIG_LOADED",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::TraceAppended => Severity::Trace,
            Event::TraceRenderFailed => Severity::Warn,
            Event::ConfigLoaded => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
