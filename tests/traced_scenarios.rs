//! Traced algebra tests
//!
//! Results must match the untraced algebra; in addition each visited
//! combinator leaves exactly one record, in completion order, carrying the
//! names and values of the operands it actually evaluated.

mod common;

use std::sync::Arc;

use common::{traced_adult, traced_bob, traced_flagged, traced_is_banned, User};
use specalgebra::trace::{ExplainConfig, ExpressionOutcome, OperatorLabel};
use specalgebra::traced::{
    traced_fn, BoxedTracedSpecification, ExplanationLog, TraceLog, TracedSpecification,
    TracerHandle,
};

fn sink() -> (Arc<TraceLog>, TracerHandle) {
    let log = TraceLog::shared();
    let handle: TracerHandle = log.clone();
    (log, handle)
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_leaf_only_produces_no_records() {
    let (log, tracer) = sink();
    let spec = traced_adult(&tracer);

    assert!(spec.is_satisfied_by(&User::aged(31)));
    assert_eq!(log.len(), 0);
}

#[test]
fn test_not_produces_one_record() {
    let (log, tracer) = sink();
    let spec = traced_adult(&tracer).not();

    assert!(spec.is_satisfied_by(&User::aged(16)));
    assert_eq!(log.labels(), vec![OperatorLabel::Not]);

    let record = log.get(0).unwrap();
    assert_eq!(record.left(), Some(&ExpressionOutcome::new("IsLegalAdult", false)));
    assert!(record.right().is_none());
}

#[test]
fn test_and_evaluates_right_when_left_true() {
    let (log, tracer) = sink();
    let spec = traced_adult(&tracer).and(traced_flagged(&tracer));

    assert!(!spec.is_satisfied_by(&User::new("2", "", 21)));
    assert_eq!(log.len(), 1);

    let record = log.get(0).unwrap();
    assert_eq!(record.label(), OperatorLabel::And);
    assert_eq!(record.left(), Some(&ExpressionOutcome::new("IsLegalAdult", true)));
    assert_eq!(record.right(), Some(&ExpressionOutcome::new("IsFlagged", false)));
}

#[test]
fn test_and_short_circuits_when_left_false() {
    let (log, tracer) = sink();
    let spec = traced_adult(&tracer).and(traced_flagged(&tracer));

    assert!(!spec.is_satisfied_by(&User::new("1", "", 16)));
    assert_eq!(log.len(), 1);

    let record = log.get(0).unwrap();
    assert_eq!(record.label(), OperatorLabel::And);
    assert_eq!(record.left(), Some(&ExpressionOutcome::new("IsLegalAdult", false)));
    assert!(record.right().is_none());
    assert!(record.is_short_circuited());
}

#[test]
fn test_composite_records_in_completion_order() {
    let (log, tracer) = sink();
    let spec = traced_is_banned(&tracer);

    assert!(spec.is_satisfied_by(&User::new("3", "Bob", 34)));
    assert_eq!(
        log.labels(),
        vec![OperatorLabel::Not, OperatorLabel::Or, OperatorLabel::Or]
    );

    let records = log.records();

    // NOT(IsLegalAdult): adult, so false
    assert_eq!(records[0].left(), Some(&ExpressionOutcome::new("IsLegalAdult", true)));

    // Inner OR: left false, so IsFlagged is evaluated
    assert_eq!(records[1].left(), Some(&ExpressionOutcome::new("Not Expression", false)));
    assert_eq!(records[1].right(), Some(&ExpressionOutcome::new("IsFlagged", false)));

    // Outer OR: left false, so IsBob is evaluated
    assert_eq!(records[2].left(), Some(&ExpressionOutcome::new("Or Expression", false)));
    assert_eq!(records[2].right(), Some(&ExpressionOutcome::new("IsBob", true)));
}

#[test]
fn test_composite_short_circuit_skips_subtree_records() {
    let (log, tracer) = sink();
    let spec = traced_is_banned(&tracer);

    // Minor: NOT is true, the inner OR short-circuits, the outer OR too
    assert!(spec.is_satisfied_by(&User::new("3", "Bob", 12)));
    let records = log.records();
    assert_eq!(records.len(), 3);
    assert!(records[1].is_short_circuited());
    assert!(records[2].is_short_circuited());
    assert_eq!(records[2].left(), Some(&ExpressionOutcome::new("Or Expression", true)));
}

#[test]
fn test_unvisited_combinators_leave_no_record() {
    let (log, tracer) = sink();
    let spec = traced_adult(&tracer).and(traced_flagged(&tracer).or(traced_bob(&tracer)).not());

    assert!(!spec.is_satisfied_by(&User::new("1", "Bob", 10)));
    assert_eq!(log.labels(), vec![OperatorLabel::And]);

    log.clear();
    assert!(!spec.is_satisfied_by(&User::new("1", "Bob", 40)));
    assert_eq!(
        log.labels(),
        vec![OperatorLabel::Or, OperatorLabel::Not, OperatorLabel::And]
    );
}

// =============================================================================
// Decision Table With Explanation Prefixes
// =============================================================================

struct Case {
    description: &'static str,
    user: User,
    spec: BoxedTracedSpecification<User>,
    expected: bool,
    prefixes: &'static [&'static str],
}

const AND: &str = "[left AND right]";
const OR: &str = "[left OR right]";
const NOT: &str = "[NOT left]";

fn user_cases(tracer: &TracerHandle) -> Vec<Case> {
    let and = || traced_adult(tracer).and(traced_flagged(tracer)).boxed();
    let or = || traced_adult(tracer).or(traced_flagged(tracer)).boxed();

    vec![
        Case {
            description: "simple",
            user: User::aged(31),
            spec: traced_adult(tracer).boxed(),
            expected: true,
            prefixes: &[],
        },
        Case {
            description: "not",
            user: User::aged(16),
            spec: traced_adult(tracer).not().boxed(),
            expected: true,
            prefixes: &[NOT],
        },
        Case {
            description: "and: left is true, right is true",
            user: User::new("1", "", 21),
            spec: and(),
            expected: true,
            prefixes: &[AND],
        },
        Case {
            description: "and: left is true, right is false",
            user: User::new("2", "", 21),
            spec: and(),
            expected: false,
            prefixes: &[AND],
        },
        Case {
            description: "and: left is false, right is true",
            user: User::new("1", "", 16),
            spec: and(),
            expected: false,
            prefixes: &[AND],
        },
        Case {
            description: "and: left is false, right is false",
            user: User::new("2", "", 12),
            spec: and(),
            expected: false,
            prefixes: &[AND],
        },
        Case {
            description: "or: left is true, right is true",
            user: User::new("1", "", 21),
            spec: or(),
            expected: true,
            prefixes: &[OR],
        },
        Case {
            description: "or: left is true, right is false",
            user: User::new("2", "", 21),
            spec: or(),
            expected: true,
            prefixes: &[OR],
        },
        Case {
            description: "or: left is false, right is true",
            user: User::new("1", "", 16),
            spec: or(),
            expected: true,
            prefixes: &[OR],
        },
        Case {
            description: "or: left is false, right is false",
            user: User::new("2", "", 16),
            spec: or(),
            expected: false,
            prefixes: &[OR],
        },
        Case {
            description: "not chain",
            user: User::aged(26),
            spec: traced_adult(tracer).not().not().boxed(),
            expected: true,
            prefixes: &[NOT, NOT],
        },
        Case {
            description: "and chain",
            user: User::new("1", "Bob", 26),
            spec: traced_adult(tracer)
                .and(traced_flagged(tracer))
                .and(traced_bob(tracer))
                .boxed(),
            expected: true,
            prefixes: &[AND, AND],
        },
        Case {
            description: "or chain",
            user: User::new("2", "Alice", 12),
            spec: traced_adult(tracer)
                .or(traced_flagged(tracer))
                .or(traced_bob(tracer))
                .boxed(),
            expected: false,
            prefixes: &[OR, OR],
        },
        Case {
            description: "composite specification",
            user: User::new("3", "Bob", 34),
            spec: traced_is_banned(tracer).boxed(),
            expected: true,
            prefixes: &[NOT, OR, OR],
        },
    ]
}

#[test]
fn test_decision_table_with_explanations() {
    let (log, tracer) = sink();

    for case in user_cases(&tracer) {
        assert_eq!(
            case.spec.is_satisfied_by(&case.user),
            case.expected,
            "{}",
            case.description
        );

        let explanations = log.explain_all().unwrap();
        assert_eq!(explanations.len(), case.prefixes.len(), "{}", case.description);
        for (explanation, prefix) in explanations.iter().zip(case.prefixes) {
            assert!(
                explanation.starts_with(prefix),
                "{}: {:.20}",
                case.description,
                explanation
            );
        }

        log.clear();
    }
}

// =============================================================================
// Explanation Sink
// =============================================================================

#[test]
fn test_explanation_log_renders_composite() {
    let log = Arc::new(ExplanationLog::with_config(ExplainConfig::default()));
    let tracer: TracerHandle = log.clone();
    let spec = traced_is_banned(&tracer);

    assert!(spec.is_satisfied_by(&User::new("3", "Bob", 34)));
    assert_eq!(
        log.explanations(),
        vec![
            "[NOT left] > left: IsLegalAdult evaluates to true > NOT true is false",
            "[left OR right] > left: Not Expression evaluates to false \
             > right: IsFlagged evaluates to false > false OR false is false",
            "[left OR right] > left: Or Expression evaluates to false \
             > right: IsBob evaluates to true > false OR true is true",
        ]
    );
}

#[test]
fn test_explanation_log_short_circuit() {
    let log = ExplanationLog::shared();
    let tracer: TracerHandle = log.clone();
    let spec = traced_adult(&tracer).and(traced_flagged(&tracer));

    assert!(!spec.is_satisfied_by(&User::new("1", "", 16)));
    assert_eq!(
        log.get(0).unwrap(),
        "[left AND right] > left: IsLegalAdult evaluates to false \
         > false AND X is false through short-circuit"
    );
}

// =============================================================================
// Equivalence With The Untraced Algebra
// =============================================================================

#[test]
fn test_traced_matches_untraced() {
    use specalgebra::spec::Specification;

    let (_log, tracer) = sink();
    let traced = traced_is_banned(&tracer);
    let untraced = common::is_banned();

    for id in ["1", "2", "3"] {
        for name in ["Bob", "Alice"] {
            for age in [10u8, 18, 40] {
                let user = User::new(id, name, age);
                assert_eq!(
                    TracedSpecification::is_satisfied_by(&traced, &user),
                    Specification::is_satisfied_by(&untraced, &user),
                    "{:?}",
                    user
                );
            }
        }
    }
}

#[test]
fn test_record_count_matches_visited_combinators() {
    let (log, tracer) = sink();
    let spec = traced_fn("a", |n: &u32| *n > 1, tracer.clone())
        .and(traced_fn("b", |n: &u32| *n > 2, tracer.clone()))
        .or(traced_fn("c", |n: &u32| *n == 0, tracer.clone()).not());

    // n = 0: AND short-circuits (1), OR evaluates NOT (1 + 1) = 3 records
    assert!(!spec.is_satisfied_by(&0));
    assert_eq!(log.take().len(), 3);

    // n = 3: AND evaluates both (1), OR short-circuits (1) = 2 records
    assert!(spec.is_satisfied_by(&3));
    assert_eq!(log.take().len(), 2);
}

// =============================================================================
// Sharing
// =============================================================================

#[test]
fn test_concurrent_evaluation_with_synchronized_sink() {
    let (log, tracer) = sink();
    let spec = traced_adult(&tracer).and(traced_flagged(&tracer).not());
    let user = User::new("2", "Alice", 30);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..25 {
                    assert!(spec.is_satisfied_by(&user));
                }
            });
        }
    });

    // Two combinators visited per evaluation
    assert_eq!(log.len(), 200);
    let labels = log.labels();
    let nots = labels.iter().filter(|l| **l == OperatorLabel::Not).count();
    assert_eq!(nots, 100);
}
