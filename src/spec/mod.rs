//! Untraced specification algebra
//!
//! Evaluates a predicate tree with no side effects beyond the boolean
//! result:
//!
//! - AND evaluates left first and skips right when left is false
//! - OR evaluates left first and skips right when left is true
//! - NOT always evaluates its operand
//!
//! Trees are immutable after construction and hold no shared mutable
//! state, so a tree may be evaluated concurrently by any number of callers.

mod combinators;
mod specification;

pub use combinators::{AndSpecification, NotSpecification, OrSpecification};
pub use specification::{spec_fn, BoxedSpecification, FnSpecification, Specification};
