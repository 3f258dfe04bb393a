//! Messages and construction inputs of the dropdown.

use std::fmt;
use std::sync::Arc;

use crate::controller::{ControllerFactory, ResultsPerPageController, SearchInterface};
use crate::device::{DeviceClass, Terminal};
use crate::hash::{HashSource, NoHash};
use crate::i18n::{English, Localizer};
use crate::select::NativeSelect;

/// What the dropdown is mounted on.
#[derive(Debug, Clone, Default)]
pub enum Root {
    /// A bare container; an empty native select is created inside it.
    #[default]
    Container,
    /// A pre-existing native select, possibly with entries already.
    Select(NativeSelect),
}

/// Where a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The styled label of dropdown `id`.
    Label {
        /// Component id.
        id: i64,
    },
    /// Item `index` of the popup list of dropdown `id`.
    Item {
        /// Component id.
        id: i64,
        /// Item index in display order.
        index: usize,
    },
    /// Anywhere that is not part of a dropdown.
    Elsewhere,
}

/// A mouse click, already hit-tested to a [`ClickTarget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickMsg {
    /// What was clicked.
    pub target: ClickTarget,
}

/// Sent by the construction command once the results-per-page controller
/// has been built. Route it to the dropdown whose [`id`](super::Model::id)
/// matches.
pub struct ControllerReadyMsg {
    /// Id of the dropdown that requested the controller.
    pub id: i64,
    /// The resolved controller.
    pub controller: Box<dyn ResultsPerPageController>,
}

impl fmt::Debug for ControllerReadyMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerReadyMsg")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Shared services the dropdown is wired to.
pub struct Bindings {
    pub(super) search: Box<dyn SearchInterface>,
    pub(super) controllers: Arc<dyn ControllerFactory>,
    pub(super) hash: Box<dyn HashSource + Send>,
    pub(super) device: Box<dyn DeviceClass>,
    pub(super) localizer: Box<dyn Localizer>,
}

impl Bindings {
    /// Wires the dropdown to a search interface and a controller factory.
    ///
    /// The page has no hash state, the device class comes from the terminal
    /// size and strings are English until overridden.
    pub fn new(
        search: impl SearchInterface + 'static,
        controllers: impl ControllerFactory + 'static,
    ) -> Self {
        Self {
            search: Box::new(search),
            controllers: Arc::new(controllers),
            hash: Box::new(NoHash),
            device: Box::new(Terminal),
            localizer: Box::new(English),
        }
    }

    /// Reads the page hash from `hash` (builder pattern).
    pub fn with_hash(mut self, hash: impl HashSource + Send + 'static) -> Self {
        self.hash = Box::new(hash);
        self
    }

    /// Uses `device` to pick default choices (builder pattern).
    pub fn with_device(mut self, device: impl DeviceClass + 'static) -> Self {
        self.device = Box::new(device);
        self
    }

    /// Localizes the default caption with `localizer` (builder pattern).
    pub fn with_localizer(mut self, localizer: impl Localizer + 'static) -> Self {
        self.localizer = Box::new(localizer);
        self
    }
}
