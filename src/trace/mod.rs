//! Trace model
//!
//! The data produced by the traced algebra and the logic that renders a
//! record into an explanation:
//!
//! - `OperatorLabel`: which combinator produced a record
//! - `ExpressionOutcome`: an operand's name and boolean result
//! - `OperationTrace`: one record per combinator evaluation
//! - `explain` / `explain_with`: record to human-readable text
//!
//! Records are immutable data. Rendering is the only fallible step.

mod errors;
mod explain;
mod model;

pub use errors::{OperandSlot, TraceError, TraceResult};
pub use explain::{explain_raw, ExplainConfig};
pub use model::{ExpressionOutcome, OperationTrace, OperatorLabel};
