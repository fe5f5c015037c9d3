//! Trace error types
//!
//! Error codes:
//! - SPEC_MISSING_OPERAND (ERROR)
//! - SPEC_UNKNOWN_OPERATOR (ERROR)
//!
//! Both are confined to trace rendering and label parsing. Evaluation
//! itself never fails.

use thiserror::Error;

use super::model::OperatorLabel;

/// Result type for trace operations
pub type TraceResult<T> = Result<T, TraceError>;

/// Which operand slot of a record was expected but absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandSlot {
    /// Left operand of AND/OR, or the single operand of NOT
    Left,
    /// Right operand of a non-short-circuited AND/OR
    Right,
}

impl OperandSlot {
    /// Slot name as used in rendered explanations
    pub fn as_str(&self) -> &'static str {
        match self {
            OperandSlot::Left => "left",
            OperandSlot::Right => "right",
        }
    }
}

impl std::fmt::Display for OperandSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trace errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    #[error("{operator} record is missing its {operand} operand outcome")]
    MissingOperand {
        operator: OperatorLabel,
        operand: OperandSlot,
    },

    #[error("Unknown operator label: {0}")]
    UnknownOperator(String),
}

impl TraceError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            TraceError::MissingOperand { .. } => "SPEC_MISSING_OPERAND",
            TraceError::UnknownOperator(_) => "SPEC_UNKNOWN_OPERATOR",
        }
    }

    /// Trace errors describe a malformed record, never a process-level failure
    pub fn is_fatal(&self) -> bool {
        false
    }
}
