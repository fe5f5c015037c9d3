//! Traced specification algebra
//!
//! Structurally identical to the untraced algebra in `crate::spec`, but
//! every combinator evaluation appends one `OperationTrace` to an injected
//! sink:
//!
//! - AND with a false left: record with the left outcome only
//! - OR with a true left: record with the left outcome only
//! - otherwise AND/OR: record with both outcomes
//! - NOT: record with its operand's outcome in the left slot
//!
//! Leaves append nothing. Records for one evaluation arrive in the order
//! their combinators complete. Skipped subtrees contribute no records.
//!
//! # Sharing
//!
//! Trees are immutable and may be evaluated from several threads. The
//! algebra performs one `append` per visited combinator and does no
//! locking of its own; `TraceLog` and `ExplanationLog` synchronize
//! internally, but records from concurrent evaluations interleave.

mod combinators;
mod specification;
mod tracer;

pub use combinators::{TracedAnd, TracedNot, TracedOr};
pub use specification::{traced_fn, BoxedTracedSpecification, Traced, TracedSpecification};
pub use tracer::{ExplanationLog, TraceLog, Tracer, TracerHandle};
