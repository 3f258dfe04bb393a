//! Styles for the dropdown's caption, label and popup items.
//!
//! Defaults use `AdaptiveColor` so the dropdown reads well on both light
//! and dark terminals.
//!
//! ```rust
//! use bubbletea_results_per_page::style::DropdownStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = DropdownStyles::default();
//! styles.caption = Style::new().italic(true);
//! ```

use lipgloss_extras::prelude::*;

/// Arrow shown after the label while the popup is closed.
pub const ARROW_CLOSED: &str = "▾";

/// Arrow shown after the label while the popup is open.
pub const ARROW_OPEN: &str = "▴";

/// Marker drawn in front of the active popup item.
pub const ACTIVE_MARKER: &str = "›";

/// Styles for every part of the dropdown.
#[derive(Debug, Clone)]
pub struct DropdownStyles {
    /// Caption before the label.
    pub caption: Style,
    /// Label while the popup is closed.
    pub label: Style,
    /// Label while the popup is open.
    pub label_active: Style,
    /// Popup item.
    pub item: Style,
    /// Popup item mirroring the selected entry, drawn after [`ACTIVE_MARKER`].
    pub item_active: Style,
    /// Popup item under the keyboard cursor.
    pub item_cursor: Style,
}

impl Default for DropdownStyles {
    fn default() -> Self {
        let normal = AdaptiveColor {
            Light: "#1a1a1a",
            Dark: "#dddddd",
        };
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            caption: Style::new().foreground(subdued).padding(0, 1, 0, 0),
            label: Style::new().foreground(normal.clone()).padding(0, 1, 0, 1),
            label_active: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            item: Style::new().foreground(normal.clone()).padding_left(2),
            item_active: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#EE6FF8",
                    Dark: "#EE6FF8",
                })
                .bold(true),
            item_cursor: Style::new()
                .foreground(normal)
                .underline(true)
                .padding_left(2),
        }
    }
}
