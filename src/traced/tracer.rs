//! Tracer sinks
//!
//! A sink is caller-owned and append-only from the algebra's point of view:
//! one `append` per visited combinator, in evaluation order, never read back.
//! Sinks synchronize internally so a traced tree can be evaluated from
//! several threads; records from concurrent evaluations interleave.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::observability::{log_event_with_fields, Event, Logger, Severity};
use crate::trace::{ExplainConfig, OperationTrace, OperatorLabel, TraceError, TraceResult};

/// Destination for trace records.
pub trait Tracer: Send + Sync {
    /// Accept one record. Must not fail for well-formed records.
    fn append(&self, trace: OperationTrace);
}

/// Shared sink reference stored by every traced node.
pub type TracerHandle = Arc<dyn Tracer>;

/// Log the record at TRACE level and hand it to the sink.
pub(crate) fn emit(tracer: &TracerHandle, trace: OperationTrace, result: bool) {
    if Logger::enabled(Severity::Trace) {
        log_fields(Event::TraceAppended, &append_fields(&trace, result));
    }
    tracer.append(trace);
}

/// Fields of a `SPEC_TRACE_APPENDED` line.
fn append_fields(trace: &OperationTrace, result: bool) -> Vec<(&'static str, String)> {
    vec![
        ("operator", trace.label().as_str().to_string()),
        ("result", result.to_string()),
        ("short_circuit", trace.is_short_circuited().to_string()),
    ]
}

/// Fields of a `SPEC_TRACE_RENDER_FAILED` line.
fn render_failure_fields(
    trace: &OperationTrace,
    err: &TraceError,
) -> Vec<(&'static str, String)> {
    vec![
        ("code", err.code().to_string()),
        ("operator", trace.label().as_str().to_string()),
        ("reason", err.to_string()),
    ]
}

fn log_fields(event: Event, fields: &[(&'static str, String)]) {
    let borrowed: Vec<(&str, &str)> = fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
    log_event_with_fields(event, &borrowed);
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Ordered log of trace records.
#[derive(Debug, Default)]
pub struct TraceLog {
    records: Mutex<Vec<OperationTrace>>,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// New log behind an `Arc`, ready to hand out as a `TracerHandle`.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn len(&self) -> usize {
        lock(&self.records).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.records).is_empty()
    }

    /// Record at position `index`, if any.
    pub fn get(&self, index: usize) -> Option<OperationTrace> {
        lock(&self.records).get(index).cloned()
    }

    /// Snapshot of all records in append order.
    pub fn records(&self) -> Vec<OperationTrace> {
        lock(&self.records).clone()
    }

    /// Operator of each record in append order.
    pub fn labels(&self) -> Vec<OperatorLabel> {
        lock(&self.records).iter().map(|r| r.label()).collect()
    }

    /// Render every record with the default configuration.
    pub fn explain_all(&self) -> TraceResult<Vec<String>> {
        self.explain_all_with(&ExplainConfig::default())
    }

    /// Render every record, stopping at the first malformed one.
    pub fn explain_all_with(&self, config: &ExplainConfig) -> TraceResult<Vec<String>> {
        lock(&self.records)
            .iter()
            .map(|r| r.explain_with(config))
            .collect()
    }

    /// Drain all records, leaving the log empty.
    pub fn take(&self) -> Vec<OperationTrace> {
        std::mem::take(&mut *lock(&self.records))
    }

    pub fn clear(&self) {
        lock(&self.records).clear();
    }
}

impl Tracer for TraceLog {
    fn append(&self, trace: OperationTrace) {
        lock(&self.records).push(trace);
    }
}

/// Log of rendered explanations.
///
/// Records are rendered on arrival. A record that cannot be rendered is
/// dropped and reported as a WARN event.
#[derive(Debug, Default)]
pub struct ExplanationLog {
    config: ExplainConfig,
    explanations: Mutex<Vec<String>>,
}

impl ExplanationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExplainConfig) -> Self {
        Self {
            config,
            explanations: Mutex::new(Vec::new()),
        }
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn config(&self) -> &ExplainConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        lock(&self.explanations).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.explanations).is_empty()
    }

    pub fn get(&self, index: usize) -> Option<String> {
        lock(&self.explanations).get(index).cloned()
    }

    pub fn explanations(&self) -> Vec<String> {
        lock(&self.explanations).clone()
    }

    pub fn clear(&self) {
        lock(&self.explanations).clear();
    }
}

impl Tracer for ExplanationLog {
    fn append(&self, trace: OperationTrace) {
        match trace.explain_with(&self.config) {
            Ok(explanation) => lock(&self.explanations).push(explanation),
            Err(err) => {
                log_fields(Event::TraceRenderFailed, &render_failure_fields(&trace, &err));
            }
        }
    }
}
