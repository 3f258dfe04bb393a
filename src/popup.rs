//! State of the styled presentation: the label showing the current choice
//! and the popup list the user picks from.

/// One item of the popup list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupItem {
    /// Value of the native entry this item mirrors.
    pub value: String,
    /// Display text.
    pub text: String,
    /// Whether this item carries the active marker.
    pub active: bool,
}

/// The styled label plus its popup list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Popup {
    label: String,
    label_active: bool,
    visible: bool,
    items: Vec<PopupItem>,
}

impl Popup {
    /// Creates an empty, closed popup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Sets the label text.
    pub fn set_label(&mut self, text: impl Into<String>) {
        self.label = text.into();
    }

    /// Whether the label shows its "open" style.
    pub fn label_active(&self) -> bool {
        self.label_active
    }

    /// Whether the list is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Items in order.
    pub fn items(&self) -> &[PopupItem] {
        &self.items
    }

    /// Index of the first active item.
    pub fn active_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.active)
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Appends an item.
    pub fn push(&mut self, value: impl Into<String>, text: impl Into<String>, active: bool) {
        self.items.push(PopupItem {
            value: value.into(),
            text: text.into(),
            active,
        });
    }

    /// Clears every active marker, then marks item `index`.
    pub fn activate(&mut self, index: usize) {
        for (i, item) in self.items.iter_mut().enumerate() {
            item.active = i == index;
        }
    }

    /// Flips both the label's open style and the list visibility.
    pub fn toggle(&mut self) {
        self.label_active = !self.label_active;
        self.visible = !self.visible;
    }

    /// Removes the label's open style without touching the list.
    pub fn deactivate_label(&mut self) {
        self.label_active = false;
    }

    /// Hides the list.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Hides the list and removes the label's open style.
    pub fn close(&mut self) {
        self.label_active = false;
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_is_exclusive() {
        let mut popup = Popup::new();
        popup.push("10", "10", true);
        popup.push("25", "25", false);
        popup.activate(1);
        assert_eq!(popup.active_index(), Some(1));
        assert!(!popup.items()[0].active);
    }

    #[test]
    fn test_toggle_and_close() {
        let mut popup = Popup::new();
        popup.toggle();
        assert!(popup.is_visible() && popup.label_active());
        popup.close();
        assert!(!popup.is_visible() && !popup.label_active());
    }
}
