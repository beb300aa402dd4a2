//! Key-to-event mapping for text-input frontends
//!
//! A key is either a single character ("7", "+") or a named key
//! ("Enter", "Backspace", "Escape"). Key scripts write named keys in braces:
//! `"9{Backspace}{Backspace}"`.

use crate::machine::InputEvent;
use crate::types::{CalcError, Operator, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from key names to input events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyMap {
    bindings: BTreeMap<String, InputEvent>,
}

impl Default for KeyMap {
    /// Standard keyboard layout: digits, `.`, `+ - * / ^`, `Enter`/`=`,
    /// `Backspace`, `Escape` and `~` for sign toggle
    fn default() -> Self {
        let mut map = Self::empty();
        for value in 0..=9u8 {
            map = map.bind(value.to_string(), InputEvent::Digit(value));
        }
        for op in Operator::ALL {
            map = map.bind(op.symbol().to_string(), InputEvent::Operator(op));
        }
        map.bind(".", InputEvent::DecimalPoint)
            .bind("Enter", InputEvent::Equals)
            .bind("=", InputEvent::Equals)
            .bind("Backspace", InputEvent::Backspace)
            .bind("Escape", InputEvent::Clear)
            .bind("~", InputEvent::SignToggle)
    }
}

impl KeyMap {
    /// Create a key map with no bindings
    pub fn empty() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    /// Builder method: bind a key (replacing any previous binding)
    pub fn bind(mut self, key: impl Into<String>, event: InputEvent) -> Self {
        self.bindings.insert(key.into(), event);
        self
    }

    /// Builder method: remove a key binding
    pub fn unbind(mut self, key: &str) -> Self {
        self.bindings.remove(key);
        self
    }

    /// Builder method: layer `overrides` on top of this map
    pub fn merge(mut self, overrides: KeyMap) -> Self {
        self.bindings.extend(overrides.bindings);
        self
    }

    /// Look up the event bound to a key
    pub fn event_for(&self, key: &str) -> Option<InputEvent> {
        self.bindings.get(key).copied()
    }

    /// All bindings, sorted by key name
    pub fn bindings(&self) -> impl Iterator<Item = (&str, InputEvent)> {
        self.bindings.iter().map(|(key, event)| (key.as_str(), *event))
    }

    /// Number of bound keys
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if no key is bound
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Translate a key script into events
    pub fn events_for_script(&self, script: &str) -> Result<Vec<InputEvent>> {
        parse_key_script(script)?
            .into_iter()
            .map(|key| self.event_for(&key).ok_or(CalcError::UnknownKey(key)))
            .collect()
    }
}

/// Split a key script into key names
///
/// Whitespace is ignored; `{Name}` is a named key; any other character is a
/// key by itself.
pub fn parse_key_script(script: &str) -> Result<Vec<String>> {
    let mut keys = Vec::new();
    let mut chars = script.char_indices();

    while let Some((start, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        if c != '{' {
            keys.push(c.to_string());
            continue;
        }

        let mut name = String::new();
        let mut closed = false;
        for (_, c) in chars.by_ref() {
            if c == '}' {
                closed = true;
                break;
            }
            name.push(c);
        }
        if !closed {
            return Err(CalcError::UnterminatedKeyName(script[start..].to_string()));
        }
        keys.push(name);
    }

    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let map = KeyMap::default();
        assert_eq!(map.event_for("5"), Some(InputEvent::Digit(5)));
        assert_eq!(map.event_for("^"), Some(InputEvent::Operator(Operator::Power)));
        assert_eq!(map.event_for("Enter"), Some(InputEvent::Equals));
        assert_eq!(map.event_for("="), Some(InputEvent::Equals));
        assert_eq!(map.event_for("Escape"), Some(InputEvent::Clear));
        assert_eq!(map.event_for("~"), Some(InputEvent::SignToggle));
        assert_eq!(map.event_for("x"), None);
        // 10 digits + 5 operators + . Enter = Backspace Escape ~
        assert_eq!(map.len(), 21);
    }

    #[test]
    fn test_parse_key_script() {
        let keys = parse_key_script("9 {Backspace}+{Enter}").unwrap();
        assert_eq!(keys, vec!["9", "Backspace", "+", "Enter"]);
        assert!(parse_key_script("").unwrap().is_empty());
    }

    #[test]
    fn test_unterminated_key_name() {
        let err = parse_key_script("1{Back").unwrap_err();
        assert_eq!(err, CalcError::UnterminatedKeyName("{Back".to_string()));
    }

    #[test]
    fn test_events_for_script() {
        let events = KeyMap::default().events_for_script("5+3=").unwrap();
        assert_eq!(
            events,
            vec![
                InputEvent::Digit(5),
                InputEvent::Operator(Operator::Add),
                InputEvent::Digit(3),
                InputEvent::Equals,
            ]
        );

        let err = KeyMap::default().events_for_script("5x3").unwrap_err();
        assert_eq!(err, CalcError::UnknownKey("x".to_string()));
    }

    #[test]
    fn test_builder_and_merge() {
        let overrides = KeyMap::empty()
            .bind("x", InputEvent::Operator(Operator::Multiply))
            .bind("c", InputEvent::Clear);
        let map = KeyMap::default().unbind("~").merge(overrides);

        assert_eq!(map.event_for("x"), Some(InputEvent::Operator(Operator::Multiply)));
        assert_eq!(map.event_for("c"), Some(InputEvent::Clear));
        assert_eq!(map.event_for("~"), None);
    }

    #[test]
    fn test_deserialize_from_json_table() {
        let map: KeyMap = serde_json::from_str(r#"{"x": "multiply", "n": "sign", "0": "0"}"#).unwrap();
        assert_eq!(map.event_for("x"), Some(InputEvent::Operator(Operator::Multiply)));
        assert_eq!(map.event_for("n"), Some(InputEvent::SignToggle));
        assert_eq!(map.event_for("0"), Some(InputEvent::Digit(0)));

        let bad = serde_json::from_str::<KeyMap>(r#"{"x": "teleport"}"#);
        assert!(bad.is_err());
    }
}
