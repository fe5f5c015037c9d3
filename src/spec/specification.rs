//! Untraced specification contract

use std::rc::Rc;
use std::sync::Arc;

use super::combinators::{AndSpecification, NotSpecification, OrSpecification};

/// A type-erased specification, for heterogeneous collections of trees.
pub type BoxedSpecification<T> = Box<dyn Specification<T>>;

/// A reusable predicate over subjects of type `T`, composable with
/// AND/OR/NOT.
///
/// Implementors supply `is_satisfied_by`; the combinators are provided.
/// Each combinator call consumes its operands and allocates exactly one new
/// node. `a.and(b).and(c)` builds `And(And(a, b), c)`; nothing is flattened
/// or simplified.
///
/// `is_satisfied_by` must be deterministic for a fixed tree and subject.
pub trait Specification<T: ?Sized> {
    /// Evaluate this node against `subject`.
    fn is_satisfied_by(&self, subject: &T) -> bool;

    /// Conjunction of `self` and `other`. `other` is only evaluated when
    /// `self` is satisfied.
    fn and<S>(self, other: S) -> AndSpecification<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        AndSpecification::new(self, other)
    }

    /// Disjunction of `self` and `other`. `other` is only evaluated when
    /// `self` is not satisfied.
    fn or<S>(self, other: S) -> OrSpecification<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        OrSpecification::new(self, other)
    }

    /// Negation of `self`.
    fn not(self) -> NotSpecification<Self>
    where
        Self: Sized,
    {
        NotSpecification::new(self)
    }

    /// Erase the node's concrete type.
    fn boxed(self) -> BoxedSpecification<T>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied_by(&self, subject: &T) -> bool {
        (**self).is_satisfied_by(subject)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied_by(&self, subject: &T) -> bool {
        (**self).is_satisfied_by(subject)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Rc<S> {
    fn is_satisfied_by(&self, subject: &T) -> bool {
        (**self).is_satisfied_by(subject)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Arc<S> {
    fn is_satisfied_by(&self, subject: &T) -> bool {
        (**self).is_satisfied_by(subject)
    }
}

/// Leaf specification backed by a closure.
#[derive(Clone, Copy)]
pub struct FnSpecification<F> {
    predicate: F,
}

impl<F> FnSpecification<F> {
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> std::fmt::Debug for FnSpecification<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSpecification").finish_non_exhaustive()
    }
}

impl<T: ?Sized, F: Fn(&T) -> bool> Specification<T> for FnSpecification<F> {
    fn is_satisfied_by(&self, subject: &T) -> bool {
        (self.predicate)(subject)
    }
}

/// Wrap a closure as a leaf specification.
pub fn spec_fn<T: ?Sized, F: Fn(&T) -> bool>(predicate: F) -> FnSpecification<F> {
    FnSpecification::new(predicate)
}
