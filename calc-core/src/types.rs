//! Core types for the calculator library
//!
//! This module defines the value types shared by the evaluator and the input
//! state machine. Arithmetic never fails with an error: math failures are the
//! `Operand::Invalid` value. `CalcError` only covers building events and key
//! maps from outside input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result type for calculator operations that parse outside input
pub type Result<T> = std::result::Result<T, CalcError>;

/// Text shown in place of a number when a result is invalid
pub const ERROR_MARKER: &str = "Math Error";

/// Errors raised while building events, key maps or key scripts
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error("Digit out of range: {0} (expected 0-9)")]
    InvalidDigit(u8),

    #[error("Unknown operator symbol: '{0}'")]
    UnknownOperator(char),

    #[error("Unknown action: {0:?}")]
    UnknownAction(String),

    #[error("No binding for key: {0:?}")]
    UnknownKey(String),

    #[error("Unterminated key name in script: {0:?}")]
    UnterminatedKeyName(String),
}

/// A calculator operand: a finite number or the invalid-result marker
///
/// NaN and infinities are never stored in `Number`; they are folded into
/// `Invalid` by [`crate::evaluator::to_operand`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    Number(f64),
    Invalid,
}

impl Operand {
    /// Check if this operand is the invalid marker
    pub fn is_invalid(&self) -> bool {
        matches!(self, Operand::Invalid)
    }

    /// Get the numeric value, if any
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Operand::Number(v) => Some(*v),
            Operand::Invalid => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Number(v) => write!(f, "{}", format_number(*v)),
            Operand::Invalid => write!(f, "{}", ERROR_MARKER),
        }
    }
}

/// Shortest round-trip form; exponent notation outside [1e-6, 1e21)
fn format_number(value: f64) -> String {
    // Also catches -0.0
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}

/// Binary operators, applied strictly left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Power,
    ];

    /// Keyboard symbol for this operator
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
        }
    }

    /// Action name used in key maps (e.g. "add")
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
            Operator::Divide => "divide",
            Operator::Power => "power",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(symbol: char) -> Result<Self> {
        Operator::ALL
            .into_iter()
            .find(|op| op.symbol() == symbol)
            .ok_or(CalcError::UnknownOperator(symbol))
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    /// Accepts either the symbol ("+") or the action name ("add")
    fn from_str(s: &str) -> Result<Self> {
        if let Some(op) = Operator::ALL.into_iter().find(|op| op.name() == s) {
            return Ok(op);
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Operator::try_from(symbol),
            _ => Err(CalcError::UnknownAction(s.to_string())),
        }
    }
}

/// Which operand register keystrokes currently target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntrySlot {
    #[default]
    A,
    B,
}
