//! Key bindings matched against `bubbletea_rs::KeyMsg`.
//!
//! A [`Binding`] groups one or more [`KeyPress`]es that trigger the same action,
//! together with a short help label. Character keys ignore the `SHIFT` modifier,
//! since terminals report `G` both as `Char('G')` and `Char('G') + SHIFT`.
//!
//! ```rust
//! use bubbletea_listbox::key::Binding;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let page_down = Binding::new(vec![(KeyCode::Char('d'), KeyModifiers::CONTROL).into()])
//!     .with_help("ctrl+d", "page down");
//!
//! let msg = KeyMsg { key: KeyCode::Char('d'), modifiers: KeyModifiers::CONTROL };
//! assert!(page_down.matches(&msg));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key code plus the modifiers that must be held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Required modifiers (`SHIFT` is ignored for character keys).
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    /// Returns true if `msg` is this key press.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        let held = match msg.key {
            KeyCode::Char(_) => msg.modifiers.difference(KeyModifiers::SHIFT),
            _ => msg.modifiers,
        };
        held == self.modifiers
    }
}

/// Help label of a binding, e.g. `("ctrl+d", "page down")`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Key label shown to the user.
    pub key: String,
    /// What the key does.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding triggered by any of `keys`.
    pub fn new(keys: Vec<KeyPress>) -> Self {
        Self {
            keys,
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help label.
    pub fn with_help(mut self, key: &str, desc: &str) -> Self {
        self.help = Help {
            key: key.to_string(),
            desc: desc.to_string(),
        };
        self
    }

    /// Disables the binding; a disabled binding never matches.
    pub fn with_disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Key presses of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Help label of this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns true if the binding is enabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Returns true if `msg` triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(key: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg { key, modifiers }
    }

    #[test]
    fn test_shift_ignored_for_chars() {
        let b = Binding::new(vec![KeyCode::Char('G').into()]);
        assert!(b.matches(&msg(KeyCode::Char('G'), KeyModifiers::NONE)));
        assert!(b.matches(&msg(KeyCode::Char('G'), KeyModifiers::SHIFT)));
        assert!(!b.matches(&msg(KeyCode::Char('g'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_modifiers_must_match() {
        let b = Binding::new(vec![(KeyCode::Char('d'), KeyModifiers::CONTROL).into()]);
        assert!(b.matches(&msg(KeyCode::Char('d'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&msg(KeyCode::Char('d'), KeyModifiers::NONE)));
        assert!(!b.matches(&msg(KeyCode::Char('d'), KeyModifiers::ALT)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Down.into()]).with_disabled();
        assert!(!b.matches(&msg(KeyCode::Down, KeyModifiers::NONE)));
        b.set_enabled(true);
        assert!(b.matches(&msg(KeyCode::Down, KeyModifiers::NONE)));
    }

    #[test]
    fn test_empty_binding_disabled() {
        assert!(!Binding::new(vec![]).enabled());
    }
}
