//! Type-safe key bindings for the dropdown component.
//!
//! A [`Binding`] groups the key presses that trigger one action together
//! with the help text shown for it. Bindings are built with the option
//! functions [`new_binding`], [`with_keys_str`] and [`with_help`]:
//!
//! ```rust
//! use bubbletea_results_per_page::key::{new_binding, with_help, with_keys_str};
//!
//! let toggle = new_binding(vec![
//!     with_keys_str(&["enter", "space"]),
//!     with_help("enter", "open/choose"),
//! ]);
//! assert_eq!(toggle.help().key, "enter");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the press.
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

/// Help text for a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"↑/k"`.
    pub key: String,
    /// Description of the action, e.g. `"up"`.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
}

impl Binding {
    /// Creates a binding from key codes or `(KeyCode, KeyModifiers)` pairs.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
        }
    }

    /// Sets the help text (builder pattern).
    pub fn with_help(mut self, key: &str, desc: &str) -> Self {
        self.help = Help {
            key: key.to_string(),
            desc: desc.to_string(),
        };
        self
    }

    /// Key presses that trigger this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding can match anything. A binding with no keys
    /// never does.
    pub fn enabled(&self) -> bool {
        !self.keys.is_empty()
    }

    /// Reports whether `msg` is one of this binding's key presses.
    ///
    /// Character keys match regardless of the shift modifier, since the
    /// terminal already reports the shifted character.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if !self.enabled() {
            return false;
        }
        self.keys.iter().any(|press| {
            if press.code != msg.key {
                return false;
            }
            match press.code {
                KeyCode::Char(_) => {
                    press.modifiers == msg.modifiers.difference(KeyModifiers::SHIFT)
                }
                _ => press.modifiers == msg.modifiers,
            }
        })
    }
}

/// Option applied by [`new_binding`].
pub enum BindingOpt {
    /// Sets the bound keys.
    Keys(Vec<KeyPress>),
    /// Sets the help text.
    Help(Help),
}

/// Creates a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::new::<KeyPress>(Vec::new());
    for opt in opts {
        match opt {
            BindingOpt::Keys(keys) => binding.keys = keys,
            BindingOpt::Help(help) => binding.help = help,
        }
    }
    binding
}

/// Binds the keys named in `names`. Unknown names are skipped.
pub fn with_keys_str(names: &[&str]) -> BindingOpt {
    BindingOpt::Keys(names.iter().filter_map(|name| parse_key(name)).collect())
}

/// Sets the help label and description of a binding.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    BindingOpt::Help(Help {
        key: key.to_string(),
        desc: desc.to_string(),
    })
}

/// Parses a key name such as `"enter"`, `"ctrl+n"` or `"k"`.
pub fn parse_key(name: &str) -> Option<KeyPress> {
    let mut modifiers = KeyModifiers::NONE;
    let mut rest = name;
    loop {
        if let Some(r) = rest.strip_prefix("ctrl+") {
            modifiers |= KeyModifiers::CONTROL;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("alt+") {
            modifiers |= KeyModifiers::ALT;
            rest = r;
        } else {
            break;
        }
    }

    let code = match rest {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "space" | " " => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        s => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(KeyPress { code, modifiers })
}

/// Components expose their bindings for help views through this trait.
pub trait KeyMap {
    /// Bindings for the compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped into columns for the expanded help view.
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
        assert_eq!(parse_key("enter"), Some(KeyPress::from(KeyCode::Enter)));
        assert_eq!(parse_key("space"), Some(KeyPress::from(KeyCode::Char(' '))));
        assert_eq!(
            parse_key("ctrl+n"),
            Some(KeyPress::from((KeyCode::Char('n'), KeyModifiers::CONTROL)))
        );
        assert_eq!(parse_key("shift+nothing"), None);
    }

    #[test]
    fn test_matches_respects_modifiers() {
        let binding = new_binding(vec![with_keys_str(&["j", "down"])]);
        assert!(binding.matches(&key(KeyCode::Char('j'), KeyModifiers::NONE)));
        assert!(binding.matches(&key(KeyCode::Down, KeyModifiers::NONE)));
        assert!(!binding.matches(&key(KeyCode::Char('j'), KeyModifiers::CONTROL)));
        assert!(!binding.matches(&key(KeyCode::Up, KeyModifiers::NONE)));
    }

    #[test]
    fn test_binding_without_keys_never_matches() {
        let binding = new_binding(vec![with_keys_str(&["nonsense"]), with_help("?", "none")]);
        assert!(!binding.enabled());
        assert!(!binding.matches(&key(KeyCode::Char('?'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_builder_help() {
        let binding = Binding::new(vec![KeyCode::Enter]).with_help("enter", "choose");
        assert_eq!(binding.help().desc, "choose");
        assert_eq!(binding.keys().len(), 1);
    }
}
