//! Localized strings used by the dropdown.

/// Key of the caption string.
pub const RESULTS_PER_PAGE: &str = "ResultsPerPage";

/// Looks up localized strings by key.
pub trait Localizer {
    /// Returns the localized text for `key`, or `None` if it is unknown.
    fn localize(&self, key: &str) -> Option<String>;
}

/// English strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl Localizer for English {
    fn localize(&self, key: &str) -> Option<String> {
        match key {
            RESULTS_PER_PAGE => Some("Results Per Page".to_string()),
            _ => None,
        }
    }
}

/// Localizes `key`, falling back to the key itself.
pub fn l(localizer: &dyn Localizer, key: &str) -> String {
    localizer.localize(key).unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(l(&English, RESULTS_PER_PAGE), "Results Per Page");
        assert_eq!(l(&English, "Nope"), "Nope");
    }
}
