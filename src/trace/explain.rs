//! Trace explanation renderer
//!
//! Turns one `OperationTrace` into a human-readable explanation. An
//! explanation is the sequence of facts the record supports, in the order
//! the combinator established them:
//!
//! ```text
//! [left AND right] > left: IsLegalAdult evaluates to true > right: IsFlagged evaluates to false > true AND false is false
//! ```

use serde::{Deserialize, Serialize};

use super::errors::{OperandSlot, TraceError, TraceResult};
use super::model::{ExpressionOutcome, OperationTrace, OperatorLabel};

/// Rendering options for explanations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainConfig {
    /// Text placed between consecutive facts (default: " > ")
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_separator() -> String {
    " > ".to_string()
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

impl ExplainConfig {
    /// One fact per line.
    pub fn multiline() -> Self {
        Self {
            separator: "\n".to_string(),
        }
    }

    /// Use a custom separator.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}

impl OperationTrace {
    /// Render the record with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `TraceError::MissingOperand` if the left outcome is absent, or
    /// if an AND/OR record that did not short-circuit lacks its right outcome.
    pub fn explain(&self) -> TraceResult<String> {
        self.explain_with(&ExplainConfig::default())
    }

    /// Render the record with the given configuration.
    pub fn explain_with(&self, config: &ExplainConfig) -> TraceResult<String> {
        let operator = self.label();
        let left = self.left().ok_or(TraceError::MissingOperand {
            operator,
            operand: OperandSlot::Left,
        })?;

        let mut facts = Vec::with_capacity(5);

        match operator {
            OperatorLabel::And | OperatorLabel::Or => {
                facts.push(format!("[left {} right]", operator));
                facts.push(operand_fact(OperandSlot::Left, left));

                if Some(left.value) == operator.short_circuit_value() {
                    facts.push(format!(
                        "{} {} X is {} through short-circuit",
                        left.value, operator, left.value
                    ));
                    return Ok(facts.join(&config.separator));
                }

                let right = self.right().ok_or(TraceError::MissingOperand {
                    operator,
                    operand: OperandSlot::Right,
                })?;
                facts.push(operand_fact(OperandSlot::Right, right));

                let result = match operator {
                    OperatorLabel::And => left.value && right.value,
                    _ => left.value || right.value,
                };
                facts.push(format!(
                    "{} {} {} is {}",
                    left.value, operator, right.value, result
                ));
            }
            OperatorLabel::Not => {
                facts.push(format!("[{} left]", operator));
                facts.push(operand_fact(OperandSlot::Left, left));
                facts.push(format!("{} {} is {}", operator, left.value, !left.value));
            }
        }

        Ok(facts.join(&config.separator))
    }
}

fn operand_fact(slot: OperandSlot, outcome: &ExpressionOutcome) -> String {
    format!("{}: {} evaluates to {}", slot, outcome.name, outcome.value)
}

/// Render a raw record whose operator label has not been validated yet.
///
/// # Errors
///
/// Returns `TraceError::UnknownOperator` for a label outside AND/OR/NOT,
/// otherwise whatever `OperationTrace::explain_with` returns.
pub fn explain_raw(
    label: &str,
    left: Option<ExpressionOutcome>,
    right: Option<ExpressionOutcome>,
    config: &ExplainConfig,
) -> TraceResult<String> {
    OperationTrace::from_parts(label, left, right)?.explain_with(config)
}
