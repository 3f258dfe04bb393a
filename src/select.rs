//! The native selection element the dropdown keeps in sync.
//!
//! It behaves like a form `select`: an ordered list of entries with
//! exactly one selected once any entry exists. When no entry was selected
//! explicitly, the first one is.

use crate::error::DropdownError;

/// One entry of the native select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectEntry {
    /// Submitted value.
    pub value: String,
    /// Display text.
    pub text: String,
}

impl SelectEntry {
    /// Creates an entry.
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

/// A native selection element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NativeSelect {
    entries: Vec<SelectEntry>,
    selected: Option<usize>,
    hidden: bool,
}

impl NativeSelect {
    /// Creates an empty select.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a select with pre-existing entries (builder pattern).
    pub fn with_entries(mut self, entries: Vec<SelectEntry>) -> Self {
        self.entries = entries;
        self.selected = None;
        self
    }

    /// Appends an entry, selecting it when `selected` is true.
    pub fn push(&mut self, entry: SelectEntry, selected: bool) {
        self.entries.push(entry);
        if selected {
            self.selected = Some(self.entries.len() - 1);
        }
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.selected = None;
    }

    /// All entries in order.
    pub fn entries(&self) -> &[SelectEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the select has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the selected entry; the first entry when none was picked.
    pub fn selected_index(&self) -> Option<usize> {
        match self.selected {
            Some(i) if i < self.entries.len() => Some(i),
            _ if self.entries.is_empty() => None,
            _ => Some(0),
        }
    }

    /// The selected entry.
    pub fn selected(&self) -> Option<&SelectEntry> {
        self.selected_index().map(|i| &self.entries[i])
    }

    /// Value of the selected entry.
    ///
    /// # Errors
    ///
    /// [`DropdownError::NoOptions`] when there are no entries.
    pub fn selected_value(&self) -> Result<String, DropdownError> {
        self.selected()
            .map(|entry| entry.value.clone())
            .ok_or(DropdownError::NoOptions)
    }

    /// Selects the entry whose value is `value`.
    ///
    /// Returns the index of the newly selected entry, or `None` (leaving
    /// the selection untouched) when no entry has that value.
    pub fn set_value(&mut self, value: &str) -> Option<usize> {
        let index = self.position(value)?;
        self.selected = Some(index);
        Some(index)
    }

    /// Index of the entry whose value is `value`.
    pub fn position(&self, value: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.value == value)
    }

    /// Hides the element visually.
    pub fn hide(&mut self) {
        self.hidden = true;
    }

    /// Whether the element is hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select_of(values: &[&str]) -> NativeSelect {
        NativeSelect::new().with_entries(values.iter().map(|v| SelectEntry::new(*v, *v)).collect())
    }

    #[test]
    fn test_first_entry_selected_by_default() {
        let select = select_of(&["10", "25"]);
        assert_eq!(select.selected_index(), Some(0));
        assert_eq!(NativeSelect::new().selected(), None);
    }

    #[test]
    fn test_selected_value_without_entries_is_an_error() {
        assert_eq!(NativeSelect::new().selected_value(), Err(DropdownError::NoOptions));
        assert_eq!(select_of(&["10"]).selected_value(), Ok("10".to_string()));
    }

    #[test]
    fn test_set_value() {
        let mut select = select_of(&["10", "25", "50"]);
        assert_eq!(select.set_value("50"), Some(2));
        assert_eq!(select.selected().map(|e| e.text.as_str()), Some("50"));
        assert_eq!(select.set_value("7"), None);
        assert_eq!(select.selected_index(), Some(2));
    }

    #[test]
    fn test_push_selected_and_clear() {
        let mut select = NativeSelect::new();
        select.push(SelectEntry::new("10", "10"), false);
        select.push(SelectEntry::new("25", "25"), true);
        assert_eq!(select.selected_index(), Some(1));
        select.clear();
        assert!(select.is_empty());
        assert_eq!(select.selected_index(), None);
    }
}
