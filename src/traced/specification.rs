//! Traced specification contract and the leaf wrapper

use std::fmt;
use std::sync::Arc;

use super::combinators::{TracedAnd, TracedNot, TracedOr};
use super::tracer::TracerHandle;
use crate::spec::{self, FnSpecification};

/// A type-erased traced specification.
pub type BoxedTracedSpecification<T> = Box<dyn TracedSpecification<T>>;

/// A named specification whose combinators append one `OperationTrace` per
/// evaluation to a caller-owned sink.
///
/// The sink reference is configured once on the leaves; `and`, `or` and
/// `not` copy the handle of `self` into the node they create. Leaves append
/// nothing.
pub trait TracedSpecification<T: ?Sized> {
    /// Evaluate this node against `subject`, tracing every combinator visited.
    fn is_satisfied_by(&self, subject: &T) -> bool;

    /// Stable, human-readable label used in trace records.
    fn name(&self) -> &str;

    /// Sink this node (and anything built from it) reports to.
    fn tracer(&self) -> &TracerHandle;

    fn and<S>(self, other: S) -> TracedAnd<Self, S>
    where
        Self: Sized,
        S: TracedSpecification<T>,
    {
        let tracer = Arc::clone(self.tracer());
        TracedAnd::new(self, other, tracer)
    }

    fn or<S>(self, other: S) -> TracedOr<Self, S>
    where
        Self: Sized,
        S: TracedSpecification<T>,
    {
        let tracer = Arc::clone(self.tracer());
        TracedOr::new(self, other, tracer)
    }

    fn not(self) -> TracedNot<Self>
    where
        Self: Sized,
    {
        let tracer = Arc::clone(self.tracer());
        TracedNot::new(self, tracer)
    }

    fn boxed(self) -> BoxedTracedSpecification<T>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

macro_rules! forward_traced {
    ($($ptr:ty),*) => {
        $(
            impl<T: ?Sized, S: TracedSpecification<T> + ?Sized> TracedSpecification<T> for $ptr {
                fn is_satisfied_by(&self, subject: &T) -> bool {
                    (**self).is_satisfied_by(subject)
                }

                fn name(&self) -> &str {
                    (**self).name()
                }

                fn tracer(&self) -> &TracerHandle {
                    (**self).tracer()
                }
            }
        )*
    };
}

forward_traced!(&S, Box<S>, Arc<S>);

/// Traced leaf: an untraced specification plus a name and a sink.
pub struct Traced<S> {
    name: String,
    spec: S,
    tracer: TracerHandle,
}

impl<S> Traced<S> {
    pub fn new(name: impl Into<String>, spec: S, tracer: TracerHandle) -> Self {
        Self {
            name: name.into(),
            spec,
            tracer,
        }
    }

    /// The wrapped untraced specification.
    pub fn inner(&self) -> &S {
        &self.spec
    }
}

impl<S: fmt::Debug> fmt::Debug for Traced<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traced")
            .field("name", &self.name)
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized, S: spec::Specification<T>> TracedSpecification<T> for Traced<S> {
    fn is_satisfied_by(&self, subject: &T) -> bool {
        spec::Specification::is_satisfied_by(&self.spec, subject)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tracer(&self) -> &TracerHandle {
        &self.tracer
    }
}

/// Wrap a closure as a named traced leaf.
pub fn traced_fn<T: ?Sized, F: Fn(&T) -> bool>(
    name: impl Into<String>,
    predicate: F,
    tracer: TracerHandle,
) -> Traced<FnSpecification<F>> {
    Traced::new(name, FnSpecification::new(predicate), tracer)
}
