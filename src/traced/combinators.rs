//! Traced AND / OR / NOT nodes
//!
//! Same evaluation order and short-circuit rules as the untraced nodes.
//! Each evaluation appends exactly one record, after the records of any
//! subtree it visited, so a tree's records arrive in post-order.

use std::fmt;

use super::specification::TracedSpecification;
use super::tracer::{emit, TracerHandle};
use crate::trace::{ExpressionOutcome, OperationTrace, OperatorLabel};

const AND_NAME: &str = "And Expression";
const OR_NAME: &str = "Or Expression";
const NOT_NAME: &str = "Not Expression";

/// Traced conjunction node.
pub struct TracedAnd<L, R> {
    left: L,
    right: R,
    tracer: TracerHandle,
}

impl<L, R> TracedAnd<L, R> {
    pub fn new(left: L, right: R, tracer: TracerHandle) -> Self {
        Self {
            left,
            right,
            tracer,
        }
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<T, L, R> TracedSpecification<T> for TracedAnd<L, R>
where
    T: ?Sized,
    L: TracedSpecification<T>,
    R: TracedSpecification<T>,
{
    fn is_satisfied_by(&self, subject: &T) -> bool {
        let left_value = self.left.is_satisfied_by(subject);
        let left = ExpressionOutcome::new(self.left.name(), left_value);

        if !left_value {
            emit(
                &self.tracer,
                OperationTrace::short_circuited(OperatorLabel::And, left),
                false,
            );
            return false;
        }

        let right_value = self.right.is_satisfied_by(subject);
        let right = ExpressionOutcome::new(self.right.name(), right_value);
        let result = left_value && right_value;

        emit(
            &self.tracer,
            OperationTrace::binary(OperatorLabel::And, left, right),
            result,
        );
        result
    }

    fn name(&self) -> &str {
        AND_NAME
    }

    fn tracer(&self) -> &TracerHandle {
        &self.tracer
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for TracedAnd<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracedAnd")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish_non_exhaustive()
    }
}

/// Traced disjunction node.
pub struct TracedOr<L, R> {
    left: L,
    right: R,
    tracer: TracerHandle,
}

impl<L, R> TracedOr<L, R> {
    pub fn new(left: L, right: R, tracer: TracerHandle) -> Self {
        Self {
            left,
            right,
            tracer,
        }
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<T, L, R> TracedSpecification<T> for TracedOr<L, R>
where
    T: ?Sized,
    L: TracedSpecification<T>,
    R: TracedSpecification<T>,
{
    fn is_satisfied_by(&self, subject: &T) -> bool {
        let left_value = self.left.is_satisfied_by(subject);
        let left = ExpressionOutcome::new(self.left.name(), left_value);

        if left_value {
            emit(
                &self.tracer,
                OperationTrace::short_circuited(OperatorLabel::Or, left),
                true,
            );
            return true;
        }

        let right_value = self.right.is_satisfied_by(subject);
        let right = ExpressionOutcome::new(self.right.name(), right_value);
        let result = left_value || right_value;

        emit(
            &self.tracer,
            OperationTrace::binary(OperatorLabel::Or, left, right),
            result,
        );
        result
    }

    fn name(&self) -> &str {
        OR_NAME
    }

    fn tracer(&self) -> &TracerHandle {
        &self.tracer
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for TracedOr<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracedOr")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish_non_exhaustive()
    }
}

/// Traced negation node.
pub struct TracedNot<S> {
    operand: S,
    tracer: TracerHandle,
}

impl<S> TracedNot<S> {
    pub fn new(operand: S, tracer: TracerHandle) -> Self {
        Self { operand, tracer }
    }

    pub fn operand(&self) -> &S {
        &self.operand
    }
}

impl<T, S> TracedSpecification<T> for TracedNot<S>
where
    T: ?Sized,
    S: TracedSpecification<T>,
{
    fn is_satisfied_by(&self, subject: &T) -> bool {
        let value = self.operand.is_satisfied_by(subject);
        let result = !value;

        emit(
            &self.tracer,
            OperationTrace::unary(ExpressionOutcome::new(self.operand.name(), value)),
            result,
        );
        result
    }

    fn name(&self) -> &str {
        NOT_NAME
    }

    fn tracer(&self) -> &TracerHandle {
        &self.tracer
    }
}

impl<S: fmt::Debug> fmt::Debug for TracedNot<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracedNot")
            .field("operand", &self.operand)
            .finish_non_exhaustive()
    }
}
