//! Key bindings for the page-list control.
//!
//! Bindings are built with the functional options pattern:
//!
//! ```rust
//! use bubbletea_pagelist::key::{new_binding, with_help, with_keys_str};
//!
//! let next = new_binding(vec![
//!     with_keys_str(&["right", "l"]),
//!     with_help("→/l", "next page"),
//! ]);
//! assert_eq!(next.keys().len(), 2);
//! assert_eq!(next.help().desc, "next page");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Modifier keys held with it.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Parses a key description such as `"left"`, `"pgdown"`, `"ctrl+n"` or `"G"`.
    ///
    /// Returns `None` for names that do not describe a key.
    pub fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let mut rest = s;
        loop {
            if let Some(tail) = rest.strip_prefix("ctrl+") {
                modifiers |= KeyModifiers::CONTROL;
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("alt+") {
                modifiers |= KeyModifiers::ALT;
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("shift+") {
                modifiers |= KeyModifiers::SHIFT;
                rest = tail;
            } else {
                break;
            }
        }

        let code = match rest {
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "pgup" => KeyCode::PageUp,
            "pgdown" => KeyCode::PageDown,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "enter" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "esc" => KeyCode::Esc,
            "backspace" => KeyCode::Backspace,
            "delete" => KeyCode::Delete,
            "space" | " " => KeyCode::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };

        Some(Self { code, modifiers })
    }

    /// Reports whether a key message is this key press.
    ///
    /// Shift is ignored for character keys since terminals report it
    /// inconsistently alongside upper-case letters.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        match self.code {
            KeyCode::Char(_) => {
                self.modifiers.difference(KeyModifiers::SHIFT)
                    == msg.modifiers.difference(KeyModifiers::SHIFT)
            }
            _ => self.modifiers == msg.modifiers,
        }
    }
}

/// Help text shown for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"←/h"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of key presses that trigger one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Returns the key presses of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the help text of this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding is enabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Reports whether a key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// A functional option applied by [`new_binding`].
pub struct BindingOpt(Box<dyn FnOnce(&mut Binding)>);

/// Creates a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        (opt.0)(&mut binding);
    }
    binding
}

/// Sets the keys of a binding from key presses.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    BindingOpt(Box::new(move |b| b.keys = keys))
}

/// Sets the keys of a binding from key names. Unknown names are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let parsed: Vec<KeyPress> = keys.iter().filter_map(|k| KeyPress::parse(k)).collect();
    with_keys(parsed)
}

/// Sets the help text of a binding.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    BindingOpt(Box::new(move |b| b.help = help))
}

/// Creates the binding in a disabled state.
pub fn with_disabled() -> BindingOpt {
    BindingOpt(Box::new(|b| b.disabled = true))
}

/// Reports whether a key message matches any of the given bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// A component's key bindings, grouped for help views.
pub trait KeyMap {
    /// Bindings for the compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings for the expanded help view, one inner vector per column.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(KeyPress::parse("pgdown").unwrap().code, KeyCode::PageDown);
        assert_eq!(KeyPress::parse("home").unwrap().code, KeyCode::Home);
        assert_eq!(KeyPress::parse("h").unwrap().code, KeyCode::Char('h'));
        assert!(KeyPress::parse("nonsense").is_none());
    }

    #[test]
    fn test_parse_modifiers() {
        let k = KeyPress::parse("ctrl+alt+n").unwrap();
        assert_eq!(k.code, KeyCode::Char('n'));
        assert!(k.modifiers.contains(KeyModifiers::CONTROL));
        assert!(k.modifiers.contains(KeyModifiers::ALT));
    }

    #[test]
    fn test_binding_matches() {
        let b = new_binding(vec![with_keys_str(&["right", "l"])]);
        assert!(b.matches(&key(KeyCode::Right, KeyModifiers::NONE)));
        assert!(b.matches(&key(KeyCode::Char('l'), KeyModifiers::NONE)));
        assert!(!b.matches(&key(KeyCode::Left, KeyModifiers::NONE)));
        assert!(!b.matches(&key(KeyCode::Right, KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_uppercase_char_ignores_shift() {
        let b = new_binding(vec![with_keys_str(&["G"])]);
        assert!(b.matches(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)));
        assert!(b.matches(&key(KeyCode::Char('G'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = new_binding(vec![with_keys_str(&["m"]), with_disabled()]);
        assert!(!b.matches(&key(KeyCode::Char('m'), KeyModifiers::NONE)));
        b.set_enabled(true);
        assert!(b.matches(&key(KeyCode::Char('m'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_matches_any() {
        let a = new_binding(vec![with_keys_str(&["a"])]);
        let b = new_binding(vec![with_keys_str(&["b"])]);
        let msg = key(KeyCode::Char('b'), KeyModifiers::NONE);
        assert!(matches(&msg, &[&a, &b]));
        assert!(!matches(&msg, &[&a]));
    }
}
