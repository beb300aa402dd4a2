//! Calculator Core Library
//!
//! The input logic of a basic four-function (plus power) calculator: a
//! display value, one pending operator and two operands, driven by discrete
//! key/button events.
//!
//! # Architecture
//!
//! - [`evaluator`]: pure arithmetic over [`Operand`]s with invalid-result
//!   propagation (division by zero, overflow, undefined powers)
//! - [`machine`]: the input state machine folding events into a
//!   [`CalculatorState`]
//! - [`keymap`]: key-name to event mapping for text frontends
//!
//! Operations apply strictly left to right: every operator press evaluates
//! what has been entered so far. There is no precedence and no expression
//! parsing.
//!
//! The library does NOT render anything. Layout, keyboard capture and help
//! screens belong to the presentation layer (calc-cli).
//!
//! # Example Usage
//!
//! ```
//! use calc_core::{CalculatorState, InputEvent, KeyMap, Operator};
//!
//! let mut state = CalculatorState::new();
//! state.apply(InputEvent::Digit(2));
//! state.apply(InputEvent::Operator(Operator::Add));
//! state.apply(InputEvent::Digit(3));
//! state.apply(InputEvent::Operator(Operator::Multiply));
//! state.apply(InputEvent::Digit(4));
//! state.apply(InputEvent::Equals);
//! assert_eq!(state.display_value(), "20");
//!
//! // The same sequence typed on a keyboard
//! let events = KeyMap::default().events_for_script("2+3*4{Enter}").unwrap();
//! let mut typed = CalculatorState::new();
//! typed.apply_all(events);
//! assert_eq!(typed, state);
//! ```

// Public modules
pub mod evaluator;
pub mod keymap;
pub mod machine;
pub mod types;

// Re-export main types for convenience
pub use evaluator::{evaluate, format_operand, parse_operand, to_operand};
pub use keymap::{parse_key_script, KeyMap};
pub use machine::{apply, initial_state, CalculatorState, InputEvent};
pub use types::{CalcError, EntrySlot, Operand, Operator, Result, ERROR_MARKER};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: a fresh calculator shows zero
        let state = initial_state();
        assert_eq!(state.display_value(), "0");
        assert!(!state.is_error());
    }
}
