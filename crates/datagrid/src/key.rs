//! Keybinding definitions and key-event canonicalization.
//!
//! Bindings pair one or more key strings with help text, and incoming
//! `crossterm` key events are canonicalized into the same string vocabulary
//! ("j", "ctrl+c", "shift+tab", "enter", ...) so keymaps stay declarative
//! and user-configurable.
//!
//! # Example
//!
//! ```rust
//! use datagrid::key::{Binding, matches};
//!
//! let up = Binding::new().keys(&["k", "up"]).help("↑/k", "up");
//! let down = Binding::new().keys(&["j", "down"]).help("↓/j", "down");
//!
//! assert!(matches("k", &[&up, &down]));
//! assert!(matches("down", &[&up, &down]));
//! assert!(!matches("x", &[&up, &down]));
//! ```

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A keybinding with associated help text.
///
/// Bindings can be disabled and contain zero or more key strings that
/// trigger them.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<String>,
    help_key: String,
    help_desc: String,
    disabled: bool,
}

impl Binding {
    /// Creates a new empty binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the keys for this binding.
    #[must_use]
    pub fn keys(mut self, keys: &[&str]) -> Self {
        self.keys = keys.iter().map(|&s| s.to_string()).collect();
        self
    }

    /// Sets the help text for this binding.
    #[must_use]
    pub fn help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help_key = key.into();
        self.help_desc = desc.into();
        self
    }

    /// Creates a disabled binding.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Returns the keys for this binding.
    #[must_use]
    pub fn get_keys(&self) -> &[String] {
        &self.keys
    }

    /// Returns the help text as a (key, description) pair.
    #[must_use]
    pub fn get_help(&self) -> (&str, &str) {
        (&self.help_key, &self.help_desc)
    }

    /// Returns whether this binding is enabled.
    ///
    /// A binding is enabled if it's not explicitly disabled and has at
    /// least one key.
    #[must_use]
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn enable(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }
}

/// Checks if the given key matches any of the given bindings.
///
/// Only enabled bindings are considered.
pub fn matches<K: fmt::Display>(key: K, bindings: &[&Binding]) -> bool {
    let key_str = key.to_string();
    bindings
        .iter()
        .filter(|b| b.enabled())
        .any(|b| b.keys.iter().any(|k| *k == key_str))
}

/// Canonicalizes a `crossterm` key event into the binding vocabulary.
///
/// Plain characters map to themselves ("j", "G"), the space bar to
/// "space", and modified keys to "ctrl+x" / "alt+x" / "shift+tab" forms.
/// Events with no canonical name map to an empty string.
#[must_use]
pub fn key_string(ev: &KeyEvent) -> String {
    let base = match ev.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => {
            if ev.modifiers.contains(KeyModifiers::CONTROL) {
                format!("ctrl+{}", c.to_ascii_lowercase())
            } else {
                c.to_string()
            }
        }
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdown".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Insert => "insert".to_string(),
        KeyCode::BackTab => "shift+tab".to_string(),
        KeyCode::Tab => {
            if ev.modifiers.contains(KeyModifiers::SHIFT) {
                "shift+tab".to_string()
            } else {
                "tab".to_string()
            }
        }
        KeyCode::F(n) => format!("f{n}"),
        _ => String::new(),
    };

    if base.is_empty() {
        return base;
    }
    if ev.modifiers.contains(KeyModifiers::ALT) {
        format!("alt+{base}")
    } else {
        base
    }
}
