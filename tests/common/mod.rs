//! Shared fixtures: a user record and a handful of leaf specifications.

#![allow(dead_code)]

use std::collections::HashSet;

use specalgebra::spec::Specification;
use specalgebra::traced::{Traced, TracedSpecification, TracerHandle};

#[derive(Debug, Clone, Default)]
pub struct User {
    pub id: String,
    pub name: String,
    pub age: u8,
}

impl User {
    pub fn aged(age: u8) -> Self {
        Self {
            age,
            ..Self::default()
        }
    }

    pub fn new(id: &str, name: &str, age: u8) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            age,
        }
    }
}

/// Age-based leaf.
#[derive(Debug, Clone)]
pub struct IsLegalAdult {
    age_of_majority: u8,
}

impl IsLegalAdult {
    pub fn new(age_of_majority: u8) -> Self {
        Self { age_of_majority }
    }
}

impl Specification<User> for IsLegalAdult {
    fn is_satisfied_by(&self, user: &User) -> bool {
        user.age >= self.age_of_majority
    }
}

/// "User X has been flagged for risky behavior".
#[derive(Debug, Clone)]
pub struct IsFlagged {
    flagged_ids: HashSet<String>,
}

impl IsFlagged {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            flagged_ids: ids.iter().map(|id| id.to_string()).collect(),
        }
    }
}

impl Specification<User> for IsFlagged {
    fn is_satisfied_by(&self, user: &User) -> bool {
        self.flagged_ids.contains(&user.id)
    }
}

/// Name-based leaf.
#[derive(Debug, Clone)]
pub struct HasName {
    name: String,
}

impl HasName {
    pub fn bob() -> Self {
        Self {
            name: "Bob".to_string(),
        }
    }
}

impl Specification<User> for HasName {
    fn is_satisfied_by(&self, user: &User) -> bool {
        user.name == self.name
    }
}

pub fn adult() -> IsLegalAdult {
    IsLegalAdult::new(18)
}

pub fn flagged() -> IsFlagged {
    IsFlagged::new(&["1"])
}

pub fn is_bob() -> HasName {
    HasName::bob()
}

pub fn traced_adult(tracer: &TracerHandle) -> Traced<IsLegalAdult> {
    Traced::new("IsLegalAdult", adult(), tracer.clone())
}

pub fn traced_flagged(tracer: &TracerHandle) -> Traced<IsFlagged> {
    Traced::new("IsFlagged", flagged(), tracer.clone())
}

pub fn traced_bob(tracer: &TracerHandle) -> Traced<HasName> {
    Traced::new("IsBob", is_bob(), tracer.clone())
}

/// Composite: under age, flagged, or named Bob.
pub fn is_banned() -> impl Specification<User> {
    adult().not().or(flagged()).or(is_bob())
}

/// Traced composite with the same shape as `is_banned`.
pub fn traced_is_banned(tracer: &TracerHandle) -> impl TracedSpecification<User> {
    traced_adult(tracer)
        .not()
        .or(traced_flagged(tracer))
        .or(traced_bob(tracer))
}
