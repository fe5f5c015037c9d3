//! Trace record model
//!
//! One `OperationTrace` is produced per traced combinator evaluation:
//! - operator: AND / OR / NOT
//! - left: outcome of the left operand (the single operand for NOT)
//! - right: outcome of the right operand, present only if it was evaluated
//!
//! Records are plain data. The algebra hands ownership to the sink and
//! never reads them back.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::{TraceError, TraceResult};

/// Combinator that produced a trace record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OperatorLabel {
    /// Conjunction, short-circuits on a false left operand
    And,
    /// Disjunction, short-circuits on a true left operand
    Or,
    /// Negation, always evaluates its operand
    Not,
}

impl OperatorLabel {
    /// Wire representation of the label
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorLabel::And => "AND",
            OperatorLabel::Or => "OR",
            OperatorLabel::Not => "NOT",
        }
    }

    /// Returns true for the binary combinators
    pub fn is_binary(&self) -> bool {
        matches!(self, OperatorLabel::And | OperatorLabel::Or)
    }

    /// Left value that makes evaluating the right operand redundant
    pub fn short_circuit_value(&self) -> Option<bool> {
        match self {
            OperatorLabel::And => Some(false),
            OperatorLabel::Or => Some(true),
            OperatorLabel::Not => None,
        }
    }
}

impl fmt::Display for OperatorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatorLabel {
    type Err = TraceError;

    fn from_str(s: &str) -> TraceResult<Self> {
        match s {
            "AND" => Ok(OperatorLabel::And),
            "OR" => Ok(OperatorLabel::Or),
            "NOT" => Ok(OperatorLabel::Not),
            other => Err(TraceError::UnknownOperator(other.to_string())),
        }
    }
}

impl TryFrom<String> for OperatorLabel {
    type Error = TraceError;

    fn try_from(value: String) -> TraceResult<Self> {
        value.parse()
    }
}

impl From<OperatorLabel> for String {
    fn from(label: OperatorLabel) -> Self {
        label.as_str().to_string()
    }
}

/// Outcome of evaluating one operand, labelled with the operand's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionOutcome {
    /// Name of the evaluated node
    pub name: String,
    /// Result of the evaluation
    pub value: bool,
}

impl ExpressionOutcome {
    /// Create an outcome.
    pub fn new(name: impl Into<String>, value: bool) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Structured account of one combinator evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationTrace {
    operator: OperatorLabel,
    #[serde(default)]
    left: Option<ExpressionOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    right: Option<ExpressionOutcome>,
}

impl OperationTrace {
    /// Record of a NOT evaluation.
    pub fn unary(operand: ExpressionOutcome) -> Self {
        Self {
            operator: OperatorLabel::Not,
            left: Some(operand),
            right: None,
        }
    }

    /// Record of an AND/OR evaluation whose right operand was skipped.
    pub fn short_circuited(operator: OperatorLabel, left: ExpressionOutcome) -> Self {
        Self {
            operator,
            left: Some(left),
            right: None,
        }
    }

    /// Record of an AND/OR evaluation that visited both operands.
    pub fn binary(
        operator: OperatorLabel,
        left: ExpressionOutcome,
        right: ExpressionOutcome,
    ) -> Self {
        Self {
            operator,
            left: Some(left),
            right: Some(right),
        }
    }

    /// Assemble a record from a raw label and optional outcomes.
    ///
    /// # Errors
    ///
    /// Returns `TraceError::UnknownOperator` if `label` is not AND, OR or NOT.
    pub fn from_parts(
        label: &str,
        left: Option<ExpressionOutcome>,
        right: Option<ExpressionOutcome>,
    ) -> TraceResult<Self> {
        Ok(Self {
            operator: label.parse()?,
            left,
            right,
        })
    }

    /// Decode a record from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Encode the record as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Combinator that produced the record.
    pub fn label(&self) -> OperatorLabel {
        self.operator
    }

    /// Left operand outcome (the single operand for NOT).
    pub fn left(&self) -> Option<&ExpressionOutcome> {
        self.left.as_ref()
    }

    /// Right operand outcome, absent under short-circuit and for NOT.
    pub fn right(&self) -> Option<&ExpressionOutcome> {
        self.right.as_ref()
    }

    /// Returns true if a binary record's right operand was skipped.
    pub fn is_short_circuited(&self) -> bool {
        self.operator.is_binary() && self.right.is_none()
    }
}
