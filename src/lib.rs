#![warn(missing_docs)]

//! # bubbletea-results-per-page
//!
//! A results-per-page dropdown for search interfaces built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! The dropdown shows a styled label and a popup list of page sizes. It
//! keeps a hidden native select in sync with what the user sees, and hands
//! every change to the search flow:
//!
//! - before the first query runs, the page size is written straight onto
//!   the [`SearchInterface`](controller::SearchInterface);
//! - afterwards, the external
//!   [`ResultsPerPageController`](controller::ResultsPerPageController) is
//!   told, which re-runs the query.
//!
//! The controller is built asynchronously. [`dropdown::Model::new`] returns
//! the command that resolves it; the dropdown is fully usable before that.
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust,no_run
//! use bubbletea_results_per_page::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct Pager;
//! impl ResultsPerPageController for Pager {
//!     fn disable(&mut self) {}
//!     fn hide(&mut self) {}
//!     fn set_results_per_page(&mut self, _: u32) {}
//! }
//!
//! struct App {
//!     dropdown: Dropdown,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let bindings = Bindings::new(SearchSettings::default(), |_: ControllerOptions| async {
//!             Box::new(Pager) as Box<dyn ResultsPerPageController>
//!         });
//!         let (mut dropdown, resolve) = Dropdown::new(Root::Container, &Options::new(), bindings);
//!         dropdown.focus();
//!         (Self { dropdown }, Some(resolve))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.dropdown.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.dropdown.view()
//!     }
//! }
//! ```

pub mod controller;
pub mod device;
pub mod document;
pub mod dropdown;
pub mod error;
pub mod hash;
pub mod i18n;
pub mod key;
pub mod options;
pub mod popup;
pub mod select;
pub mod style;

use bubbletea_rs::Cmd;

/// A results-per-page value. Always greater than zero.
pub type Choice = u32;

/// Focus management shared by interactive components.
///
/// A focused component reacts to key presses; a blurred one ignores them.
///
/// ```rust
/// use bubbletea_results_per_page::prelude::*;
///
/// fn cycle<T: Component>(component: &mut T) {
///     let _ = component.focus();
///     assert!(component.focused());
///     component.blur();
///     assert!(!component.focused());
/// }
/// ```
pub trait Component {
    /// Gives the component keyboard focus. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Takes keyboard focus away.
    fn blur(&mut self);

    /// Whether the component has keyboard focus.
    fn focused(&self) -> bool;
}

pub use dropdown::Model as Dropdown;
pub use error::{ConfigError, DropdownError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::controller::{
        ControllerFactory, ControllerOptions, QueryPhase, ResultsPerPageController,
        SearchInterface, SearchSettings,
    };
    pub use crate::device::{Device, DeviceClass};
    pub use crate::dropdown::{Bindings, ClickMsg, ClickTarget, ControllerReadyMsg, Root};
    pub use crate::dropdown::Model as Dropdown;
    pub use crate::error::{ConfigError, DropdownError};
    pub use crate::hash::HashSource;
    pub use crate::key::{Binding, KeyMap};
    pub use crate::options::{Options, ResolvedOptions};
    pub use crate::style::DropdownStyles;
    pub use crate::{Choice, Component};
}
