//! Text rendering of the display and the keyboard help

use crate::config::DisplayConfig;
use calc_core::{CalculatorState, InputEvent, KeyMap};

/// Help groups in display order
const GROUPS: [&str; 7] = [
    "Clear all",
    "Calculate",
    "Toggle sign",
    "Digits",
    "Decimal point",
    "Operators",
    "Delete last character",
];

fn group_of(event: InputEvent) -> &'static str {
    match event {
        InputEvent::Clear => GROUPS[0],
        InputEvent::Equals => GROUPS[1],
        InputEvent::SignToggle => GROUPS[2],
        InputEvent::Digit(_) => GROUPS[3],
        InputEvent::DecimalPoint => GROUPS[4],
        InputEvent::Operator(_) => GROUPS[5],
        InputEvent::Backspace => GROUPS[6],
    }
}

/// One line of calculator output, e.g. `3  [+]`
pub fn display_line(state: &CalculatorState, display: &DisplayConfig) -> String {
    match state.pending_operator() {
        Some(op) if display.show_operator => format!("{}  [{}]", state.display_value(), op),
        _ => state.display_value().to_string(),
    }
}

/// Keyboard controls table for the given key map
pub fn shortcuts_table(keys: &KeyMap) -> String {
    let mut out = String::from("Keyboard Controls\n");

    for group in GROUPS {
        let bound: Vec<String> = keys
            .bindings()
            .filter(|(_, event)| group_of(*event) == group)
            .map(|(key, _)| {
                if key.chars().count() > 1 {
                    format!("{{{}}}", key)
                } else {
                    key.to_string()
                }
            })
            .collect();

        if !bound.is_empty() {
            out.push_str(&format!("  {:<24} {}\n", bound.join(" "), group));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line_shows_pending_operator() {
        let mut state = CalculatorState::new();
        state.apply_all(KeyMap::default().events_for_script("3+").unwrap());

        let display = DisplayConfig::default();
        assert_eq!(display_line(&state, &display), "3  [+]");

        let plain = DisplayConfig {
            show_operator: false,
            ..DisplayConfig::default()
        };
        assert_eq!(display_line(&state, &plain), "3");
    }

    #[test]
    fn test_display_line_without_operator() {
        let state = CalculatorState::new();
        assert_eq!(display_line(&state, &DisplayConfig::default()), "0");
    }

    #[test]
    fn test_shortcuts_table() {
        let table = shortcuts_table(&KeyMap::default());
        assert!(table.starts_with("Keyboard Controls\n"));
        assert!(table.contains("{Escape}"));
        assert!(table.contains("0 1 2 3 4 5 6 7 8 9"));
        assert!(table.contains("= {Enter}"));

        let clear = table.find("Clear all").unwrap();
        let operators = table.find("Operators").unwrap();
        assert!(clear < operators);
    }

    #[test]
    fn test_shortcuts_table_skips_unbound_groups() {
        let keys = KeyMap::empty().bind("c", InputEvent::Clear);
        let table = shortcuts_table(&keys);
        assert!(table.contains("Clear all"));
        assert!(!table.contains("Digits"));
    }
}
