//! Input state machine
//!
//! Interprets a stream of key/button events into transitions of a small
//! state: operand A, an optional pending operator, an optional operand B and
//! the slot that keystrokes currently target. Operands are kept as the text
//! the user typed (so "3." survives) and parsed only when folded.
//!
//! Every transition is total. Out-of-sequence events (equals with nothing
//! pending, backspace on an error) are no-ops or recovery paths, never errors.

use crate::evaluator::{evaluate, format_operand, parse_operand};
use crate::types::{CalcError, EntrySlot, Operand, Operator, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InputEvent {
    /// A digit 0-9 (use [`InputEvent::digit`] to build one from outside input)
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    SignToggle,
    Backspace,
    Clear,
    Equals,
}

impl InputEvent {
    /// Checked digit constructor
    pub fn digit(value: u8) -> Result<Self> {
        if value > 9 {
            return Err(CalcError::InvalidDigit(value));
        }
        Ok(InputEvent::Digit(value))
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputEvent::Digit(d) => write!(f, "{}", d),
            InputEvent::DecimalPoint => write!(f, "decimal"),
            InputEvent::Operator(op) => write!(f, "{}", op.name()),
            InputEvent::SignToggle => write!(f, "sign"),
            InputEvent::Backspace => write!(f, "backspace"),
            InputEvent::Clear => write!(f, "clear"),
            InputEvent::Equals => write!(f, "equals"),
        }
    }
}

impl FromStr for InputEvent {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "decimal" => Ok(InputEvent::DecimalPoint),
            "sign" => Ok(InputEvent::SignToggle),
            "backspace" => Ok(InputEvent::Backspace),
            "clear" => Ok(InputEvent::Clear),
            "equals" => Ok(InputEvent::Equals),
            _ => {
                if let Ok(value) = s.parse::<u8>() {
                    return InputEvent::digit(value);
                }
                s.parse::<Operator>()
                    .map(InputEvent::Operator)
                    .map_err(|_| CalcError::UnknownAction(s.to_string()))
            }
        }
    }
}

impl TryFrom<String> for InputEvent {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<InputEvent> for String {
    fn from(event: InputEvent) -> Self {
        event.to_string()
    }
}

/// Entry state of the calculator
///
/// `operand_b` is only ever set while `operator` is set, and `active` is
/// `EntrySlot::B` exactly while an operator is pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Left operand text (also holds the result of the last fold)
    pub operand_a: String,
    /// Pending operator
    pub operator: Option<Operator>,
    /// Right operand text, unset until the first keystroke after an operator
    pub operand_b: Option<String>,
    /// Register that keystrokes target
    pub active: EntrySlot,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Fresh calculator state: "0", nothing pending, slot A
pub fn initial_state() -> CalculatorState {
    CalculatorState::new()
}

/// Pure transition: consume `state`, return the state after `event`
pub fn apply(mut state: CalculatorState, event: InputEvent) -> CalculatorState {
    state.apply(event);
    state
}

impl CalculatorState {
    /// Create the initial state
    pub fn new() -> Self {
        Self {
            operand_a: "0".to_string(),
            operator: None,
            operand_b: None,
            active: EntrySlot::A,
        }
    }

    /// Text to show on the display
    pub fn display_value(&self) -> &str {
        match self.active {
            EntrySlot::B => self.operand_b.as_deref().unwrap_or(&self.operand_a),
            EntrySlot::A => &self.operand_a,
        }
    }

    /// Operator awaiting its right operand (highlighted on a keypad)
    pub fn pending_operator(&self) -> Option<Operator> {
        match self.active {
            EntrySlot::B => self.operator,
            EntrySlot::A => None,
        }
    }

    /// Check if the display currently shows an invalid result
    pub fn is_error(&self) -> bool {
        parse_operand(self.display_value()).is_invalid()
    }

    /// Apply every event in order
    pub fn apply_all<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.apply(event);
        }
    }

    /// Apply one event in place
    pub fn apply(&mut self, event: InputEvent) {
        log::debug!("apply {} (display {:?})", event, self.display_value());

        match event {
            InputEvent::Digit(value) => self.on_digit(value),
            InputEvent::DecimalPoint => self.on_decimal_point(),
            InputEvent::Operator(op) => self.on_operator(op),
            InputEvent::SignToggle => self.on_sign_toggle(),
            InputEvent::Backspace => self.on_backspace(),
            InputEvent::Clear => *self = Self::new(),
            InputEvent::Equals => {
                if self.fold().is_none() {
                    log::trace!("equals ignored: no pending operation");
                }
            }
        }

        log::trace!("state after {}: {:?}", event, self);
    }

    fn current_text(&self) -> Option<&str> {
        match self.active {
            EntrySlot::A => Some(&self.operand_a),
            EntrySlot::B => self.operand_b.as_deref(),
        }
    }

    fn set_current_text(&mut self, text: String) {
        match self.active {
            EntrySlot::A => self.operand_a = text,
            EntrySlot::B => self.operand_b = Some(text),
        }
    }

    fn on_digit(&mut self, value: u8) {
        if value > 9 {
            log::warn!("ignoring out-of-range digit {}", value);
            return;
        }
        let digit = char::from(b'0' + value);

        let next = match self.current_text() {
            None => digit.to_string(),
            Some(text) if text == "0" || parse_operand(text).is_invalid() => digit.to_string(),
            Some("-0") => format!("-{}", digit),
            Some(text) => format!("{}{}", text, digit),
        };
        self.set_current_text(next);
    }

    fn on_decimal_point(&mut self) {
        let next = match self.current_text() {
            None => "0.".to_string(),
            Some(text) if parse_operand(text).is_invalid() => "0.".to_string(),
            Some(text) if !text.contains('.') => format!("{}.", text),
            // At most one decimal point per operand
            Some(_) => return,
        };
        self.set_current_text(next);
    }

    fn on_sign_toggle(&mut self) {
        let next = match self.current_text() {
            None => "-0".to_string(),
            Some(text) => match text.strip_prefix('-') {
                Some(positive) => positive.to_string(),
                None => format!("-{}", text),
            },
        };
        self.set_current_text(next);
    }

    fn on_backspace(&mut self) {
        let next = match self.current_text() {
            Some(text) if !parse_operand(text).is_invalid() => {
                let mut trimmed = text.to_string();
                trimmed.pop();
                match trimmed.as_str() {
                    "" => "0".to_string(),
                    "-" => "-0".to_string(),
                    _ => trimmed,
                }
            }
            _ => "0".to_string(),
        };
        self.set_current_text(next);
    }

    fn on_operator(&mut self, op: Operator) {
        if self.active == EntrySlot::B {
            self.fold();
        }

        if parse_operand(&self.operand_a).is_invalid() {
            log::debug!("operator {} dropped: left operand is invalid", op);
            return;
        }
        self.operator = Some(op);
        self.active = EntrySlot::B;
    }

    /// Evaluate `A op B` into operand A and return to slot A
    ///
    /// Returns `None` (leaving the state untouched) unless both the operator
    /// and operand B are set.
    fn fold(&mut self) -> Option<Operand> {
        let op = self.operator?;
        let operand_b = self.operand_b.take()?;

        let result = evaluate(parse_operand(&self.operand_a), parse_operand(&operand_b), op);
        log::debug!("fold {} {} {} = {}", self.operand_a, op, operand_b, result);

        self.operand_a = format_operand(result);
        self.operator = None;
        self.active = EntrySlot::A;
        Some(result)
    }
}
