//! AND / OR / NOT nodes for the untraced algebra
//!
//! Each node exclusively owns its operands and carries no per-evaluation
//! state. Binary nodes evaluate left first and short-circuit.

use super::specification::Specification;

/// Conjunction node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndSpecification<L, R> {
    left: L,
    right: R,
}

impl<L, R> AndSpecification<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }

    /// Take the operands back out of the node.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<T, L, R> Specification<T> for AndSpecification<L, R>
where
    T: ?Sized,
    L: Specification<T>,
    R: Specification<T>,
{
    fn is_satisfied_by(&self, subject: &T) -> bool {
        if !self.left.is_satisfied_by(subject) {
            return false;
        }
        self.right.is_satisfied_by(subject)
    }
}

/// Disjunction node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrSpecification<L, R> {
    left: L,
    right: R,
}

impl<L, R> OrSpecification<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }

    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<T, L, R> Specification<T> for OrSpecification<L, R>
where
    T: ?Sized,
    L: Specification<T>,
    R: Specification<T>,
{
    fn is_satisfied_by(&self, subject: &T) -> bool {
        if self.left.is_satisfied_by(subject) {
            return true;
        }
        self.right.is_satisfied_by(subject)
    }
}

/// Negation node. Always evaluates its operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotSpecification<S> {
    operand: S,
}

impl<S> NotSpecification<S> {
    pub fn new(operand: S) -> Self {
        Self { operand }
    }

    pub fn operand(&self) -> &S {
        &self.operand
    }

    pub fn into_inner(self) -> S {
        self.operand
    }
}

impl<T, S> Specification<T> for NotSpecification<S>
where
    T: ?Sized,
    S: Specification<T>,
{
    fn is_satisfied_by(&self, subject: &T) -> bool {
        !self.operand.is_satisfied_by(subject)
    }
}
