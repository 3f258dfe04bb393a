//! Results-per-page dropdown component.
//!
//! The dropdown lets the user pick how many results a search interface
//! shows per page. It keeps three things in sync:
//!
//! - a hidden native select, which holds the selection for form semantics;
//! - a styled label plus popup list, which is what the user sees and clicks;
//! - the external results-per-page controller, which is told whenever the
//!   choice changes once a first query has run.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_results_per_page::controller::{
//!     ControllerOptions, ResultsPerPageController, SearchSettings,
//! };
//! use bubbletea_results_per_page::device::Device;
//! use bubbletea_results_per_page::dropdown::{Bindings, Model, Root};
//! use bubbletea_results_per_page::options::Options;
//!
//! struct Pager;
//! impl ResultsPerPageController for Pager {
//!     fn disable(&mut self) {}
//!     fn hide(&mut self) {}
//!     fn set_results_per_page(&mut self, _: u32) {}
//! }
//!
//! let bindings = Bindings::new(SearchSettings::default(), |_: ControllerOptions| async {
//!     Box::new(Pager) as Box<dyn ResultsPerPageController>
//! })
//! .with_device(Device::Desktop);
//!
//! // `init` resolves the controller; return it from your app's init().
//! let (mut dropdown, _init) = Model::new(Root::Container, &Options::new(), bindings);
//!
//! assert_eq!(dropdown.selected_option().unwrap(), "10");
//! dropdown.set_selected_option("50");
//! assert_eq!(dropdown.popup().label(), "50");
//! ```
//!
//! # Messages
//!
//! - [`ControllerReadyMsg`]: produced by the command returned from
//!   [`Model::new`]; hand it back to [`Model::update`].
//! - [`ClickMsg`]: a mouse click hit-tested with [`Model::target_at`].
//! - `KeyMsg`: handled while the dropdown is focused.

pub mod keymap;
pub mod model;
pub mod types;
pub mod view;


pub use keymap::{default_key_map, KeyMap};
pub use model::Model;
pub use types::{Bindings, ClickMsg, ClickTarget, ControllerReadyMsg, Root};
