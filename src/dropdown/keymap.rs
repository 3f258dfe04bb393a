//! Key bindings for the dropdown.

use crate::key::{self, new_binding, with_help, with_keys_str, Binding};

/// Keys that drive the dropdown while it is focused.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Opens the popup, or picks the highlighted item when open.
    pub toggle: Binding,
    /// Moves the highlight up.
    pub up: Binding,
    /// Moves the highlight down.
    pub down: Binding,
    /// Closes the popup without picking.
    pub close: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

/// The default bindings.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        toggle: new_binding(vec![
            with_keys_str(&["enter", "space"]),
            with_help("enter", "open/choose"),
        ]),
        up: new_binding(vec![with_keys_str(&["up", "k"]), with_help("↑/k", "up")]),
        down: new_binding(vec![
            with_keys_str(&["down", "j"]),
            with_help("↓/j", "down"),
        ]),
        close: new_binding(vec![with_keys_str(&["esc"]), with_help("esc", "close")]),
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.toggle, &self.close]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![vec![&self.up, &self.down], vec![&self.toggle, &self.close]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyMap as _;

    fn labels(bindings: &[&Binding]) -> Vec<(String, String)> {
        bindings
            .iter()
            .map(|b| (b.help().key.clone(), b.help().desc.clone()))
            .collect()
    }

    #[test]
    fn test_short_help() {
        let keymap = default_key_map();
        assert_eq!(
            labels(&keymap.short_help()),
            vec![
                ("enter".to_string(), "open/choose".to_string()),
                ("esc".to_string(), "close".to_string()),
            ]
        );
    }

    #[test]
    fn test_full_help_groups_navigation_first() {
        let keymap = default_key_map();
        let groups = keymap.full_help();
        assert_eq!(groups.len(), 2);
        assert_eq!(
            labels(&groups[0]),
            vec![
                ("↑/k".to_string(), "up".to_string()),
                ("↓/j".to_string(), "down".to_string()),
            ]
        );
        assert_eq!(labels(&groups[1]), labels(&keymap.short_help()));
    }
}
