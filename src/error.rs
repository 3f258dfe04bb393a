//! Error types for the dropdown component.

use thiserror::Error;

/// Errors raised by the dropdown's synchronization accessors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DropdownError {
    /// The native select has no entries, so nothing can be selected.
    ///
    /// This happens when the selection is read before the component has
    /// built its options at least once.
    #[error("the native select has no options; render the dropdown before reading its selection")]
    NoOptions,
}

/// Errors raised while reading component options from string attributes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An attribute that must hold a positive integer did not.
    #[error("option `{key}` expects a positive integer, got {value:?}")]
    InvalidNumber {
        /// Attribute name.
        key: String,
        /// Raw attribute value.
        value: String,
    },
    /// An attribute that must hold a boolean did not.
    #[error("option `{key}` expects `true` or `false`, got {value:?}")]
    InvalidBool {
        /// Attribute name.
        key: String,
        /// Raw attribute value.
        value: String,
    },
}
