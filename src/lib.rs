//! specalgebra - A composable, explainable boolean specification algebra
//!
//! Define atomic predicates over a subject type, combine them with
//! AND/OR/NOT into a tree, evaluate the tree against a subject, and
//! optionally record a short-circuit-aware trace of how the result was
//! reached.
//!
//! - `spec`: untraced algebra
//! - `traced`: traced algebra and tracer sinks
//! - `trace`: trace records and their explanations
//! - `observability`: structured logging
//! - `config`: ambient configuration

pub mod config;
pub mod observability;
pub mod spec;
pub mod trace;
pub mod traced;

pub use config::{AlgebraConfig, ConfigError, ConfigResult};
pub use spec::{spec_fn, BoxedSpecification, Specification};
pub use trace::{ExplainConfig, ExpressionOutcome, OperationTrace, OperatorLabel, TraceError, TraceResult};
pub use traced::{
    traced_fn, BoxedTracedSpecification, ExplanationLog, TraceLog, Traced, TracedSpecification,
    Tracer, TracerHandle,
};
