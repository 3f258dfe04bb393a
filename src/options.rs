//! Configuration surface of the dropdown.
//!
//! Every option is optional. [`Options`] holds what the caller configured,
//! either through builder methods or from markup-style string attributes,
//! and [`Options::resolve`] turns it into the [`ResolvedOptions`] the
//! component runs with, applying device-dependent and localized defaults.
//!
//! ```rust
//! use bubbletea_results_per_page::device::Device;
//! use bubbletea_results_per_page::i18n::English;
//! use bubbletea_results_per_page::options::Options;
//!
//! let resolved = Options::new()
//!     .with_choices_displayed(vec![20, 40])
//!     .with_initial_choice(40)
//!     .resolve(&Device::Desktop, &English);
//!
//! assert_eq!(resolved.choices_displayed, vec![20, 40]);
//! assert_eq!(resolved.initial_choice, Some(40));
//! assert_eq!(resolved.caption, "Results Per Page");
//! ```

use crate::device::{self, DeviceClass};
use crate::error::ConfigError;
use crate::i18n::{self, Localizer};
use crate::Choice;

/// Attribute holding the comma-separated choices.
pub const ATTR_CHOICES_DISPLAYED: &str = "data-choices-displayed";
/// Attribute holding the initial choice.
pub const ATTR_INITIAL_CHOICE: &str = "data-initial-choice";
/// Attribute holding the caption text.
pub const ATTR_CAPTION: &str = "data-caption";
/// Attribute toggling the caption.
pub const ATTR_DISPLAY_CAPTION: &str = "data-display-caption";

/// Options as configured by the caller. `None` means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Page sizes the user can pick from, in display order.
    pub choices_displayed: Option<Vec<Choice>>,
    /// Page size selected initially.
    pub initial_choice: Option<Choice>,
    /// Caption shown before the dropdown.
    pub caption: Option<String>,
    /// Whether the caption is shown.
    pub display_caption: Option<bool>,
}

/// Options after validation and defaulting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// Non-empty, unique, ordered page sizes.
    pub choices_displayed: Vec<Choice>,
    /// Page size selected initially, if any.
    pub initial_choice: Option<Choice>,
    /// Caption text.
    pub caption: String,
    /// Whether the caption is shown.
    pub display_caption: bool,
}

impl Options {
    /// Creates options with nothing configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the choices (builder pattern).
    ///
    /// Zeros and repeated values are dropped. If nothing is left the option
    /// counts as not provided, so the device default applies.
    pub fn with_choices_displayed(mut self, choices: Vec<Choice>) -> Self {
        self.choices_displayed = normalize(choices);
        self
    }

    /// Sets the initial choice (builder pattern). Zero means "none".
    pub fn with_initial_choice(mut self, choice: Choice) -> Self {
        self.initial_choice = (choice > 0).then_some(choice);
        self
    }

    /// Sets the caption text (builder pattern).
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Shows or hides the caption (builder pattern).
    pub fn with_display_caption(mut self, display: bool) -> Self {
        self.display_caption = Some(display);
        self
    }

    /// Reads options from string attributes such as `data-initial-choice`.
    ///
    /// Unknown attributes are ignored. Unparseable entries of
    /// `data-choices-displayed` are dropped; an unparseable
    /// `data-initial-choice` or `data-display-caption` is an error. As with
    /// [`Options::with_initial_choice`], an initial choice of `0` means
    /// "none".
    pub fn from_attributes<'a, I>(attributes: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut options = Self::new();
        for (key, value) in attributes {
            match key {
                ATTR_CHOICES_DISPLAYED => {
                    let list: Vec<&str> = value.split(',').collect();
                    options.choices_displayed = parse_choices(&list);
                }
                ATTR_INITIAL_CHOICE => {
                    let choice = value.trim().parse::<Choice>().map_err(|_| ConfigError::InvalidNumber {
                        key: key.to_string(),
                        value: value.to_string(),
                    })?;
                    options = options.with_initial_choice(choice);
                }
                ATTR_CAPTION => options.caption = Some(value.to_string()),
                ATTR_DISPLAY_CAPTION => {
                    let display = match value.trim() {
                        "true" | "" => true,
                        "false" => false,
                        _ => {
                            return Err(ConfigError::InvalidBool {
                                key: key.to_string(),
                                value: value.to_string(),
                            })
                        }
                    };
                    options.display_caption = Some(display);
                }
                _ => {}
            }
        }
        Ok(options)
    }

    /// Applies defaults: device-dependent choices, localized caption and a
    /// visible caption.
    pub fn resolve(&self, device: &dyn DeviceClass, localizer: &dyn Localizer) -> ResolvedOptions {
        let choices_displayed = self
            .choices_displayed
            .clone()
            .and_then(normalize)
            .unwrap_or_else(|| device::default_choices(device));
        let initial_choice = self.initial_choice.filter(|c| *c > 0);
        if let Some(initial) = initial_choice {
            if !choices_displayed.contains(&initial) {
                tracing::warn!(initial, ?choices_displayed, "initial choice is not one of the displayed choices");
            }
        }

        ResolvedOptions {
            choices_displayed,
            initial_choice,
            caption: self
                .caption
                .clone()
                .unwrap_or_else(|| i18n::l(localizer, i18n::RESULTS_PER_PAGE)),
            display_caption: self.display_caption.unwrap_or(true),
        }
    }
}

/// Parses a list of raw choices.
///
/// Entries that are not positive integers are dropped. Returns `None` when
/// nothing valid remains: an empty list means "not provided", never
/// "zero choices".
pub fn parse_choices<S: AsRef<str>>(list: &[S]) -> Option<Vec<Choice>> {
    let parsed = list
        .iter()
        .filter_map(|raw| {
            let choice = parse_choice(raw.as_ref());
            if choice.is_none() && !raw.as_ref().trim().is_empty() {
                tracing::warn!(entry = raw.as_ref(), "dropping invalid results-per-page choice");
            }
            choice
        })
        .collect();
    normalize(parsed)
}

fn parse_choice(raw: &str) -> Option<Choice> {
    raw.trim().parse::<Choice>().ok().filter(|c| *c > 0)
}

fn normalize(choices: Vec<Choice>) -> Option<Vec<Choice>> {
    let mut unique = Vec::with_capacity(choices.len());
    for choice in choices {
        if choice > 0 && !unique.contains(&choice) {
            unique.push(choice);
        }
    }
    (!unique.is_empty()).then_some(unique)
}
