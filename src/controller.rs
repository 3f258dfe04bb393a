//! Collaborators the dropdown delegates paging to.
//!
//! The dropdown never executes searches itself. It talks to two external
//! objects:
//!
//! - the [`SearchInterface`], whose results-per-page setting is written
//!   directly while no query has run yet, and which reports the
//!   [`QueryPhase`];
//! - a [`ResultsPerPageController`], built asynchronously by a
//!   [`ControllerFactory`], which is told about every later change and
//!   re-runs the query with the new page size.
//!
//! Both traits have blanket implementations for `Arc<Mutex<T>>` so an
//! application can keep a handle on the same object it gives the dropdown.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::Choice;

/// Whether the search flow has executed its first query.
///
/// The only transition is `PreFirstQuery` to `PostFirstQuery`, and it
/// never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryPhase {
    /// No query has executed yet.
    #[default]
    PreFirstQuery,
    /// At least one query has executed.
    PostFirstQuery,
}

/// The enclosing search interface.
pub trait SearchInterface: Send {
    /// Current query phase, read fresh on every call.
    fn query_phase(&self) -> QueryPhase;
    /// Writes the results-per-page setting used by the next query.
    fn set_results_per_page(&mut self, results_per_page: Choice);
}

/// The external results-per-page controller.
pub trait ResultsPerPageController: Send {
    /// Turns off the controller's own rendering.
    fn disable(&mut self);
    /// Hides the controller's element.
    fn hide(&mut self);
    /// Changes the page size, triggering a new query.
    fn set_results_per_page(&mut self, results_per_page: Choice);
}

/// Options handed to the controller when it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Initial page size, if configured.
    pub initial_choice: Option<Choice>,
    /// Page sizes offered, in display order.
    pub choices_displayed: Vec<Choice>,
}

/// Future resolving to a freshly built controller.
pub type ControllerFuture =
    Pin<Box<dyn Future<Output = Box<dyn ResultsPerPageController>> + Send>>;

/// Builds the results-per-page controller, possibly after loading it lazily.
///
/// Any `Fn(ControllerOptions) -> impl Future` closure is a factory:
///
/// ```rust
/// use bubbletea_results_per_page::controller::{
///     ControllerFactory, ControllerOptions, ResultsPerPageController,
/// };
///
/// struct Noop;
/// impl ResultsPerPageController for Noop {
///     fn disable(&mut self) {}
///     fn hide(&mut self) {}
///     fn set_results_per_page(&mut self, _: u32) {}
/// }
///
/// let factory = |_: ControllerOptions| async {
///     Box::new(Noop) as Box<dyn ResultsPerPageController>
/// };
/// let _future = factory.build(ControllerOptions {
///     initial_choice: None,
///     choices_displayed: vec![10, 25],
/// });
/// ```
pub trait ControllerFactory: Send + Sync {
    /// Starts building a controller for `options`.
    fn build(&self, options: ControllerOptions) -> ControllerFuture;
}

impl<F, Fut> ControllerFactory for F
where
    F: Fn(ControllerOptions) -> Fut + Send + Sync,
    Fut: Future<Output = Box<dyn ResultsPerPageController>> + Send + 'static,
{
    fn build(&self, options: ControllerOptions) -> ControllerFuture {
        Box::pin(self(options))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<T: SearchInterface> SearchInterface for Arc<Mutex<T>> {
    fn query_phase(&self) -> QueryPhase {
        lock(self).query_phase()
    }

    fn set_results_per_page(&mut self, results_per_page: Choice) {
        lock(self).set_results_per_page(results_per_page)
    }
}

impl<T: ResultsPerPageController> ResultsPerPageController for Arc<Mutex<T>> {
    fn disable(&mut self) {
        lock(self).disable()
    }

    fn hide(&mut self) {
        lock(self).hide()
    }

    fn set_results_per_page(&mut self, results_per_page: Choice) {
        lock(self).set_results_per_page(results_per_page)
    }
}

/// A minimal search interface holding the setting and the query phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSettings {
    /// Results per page used by the next query.
    pub results_per_page: Option<Choice>,
    /// Current query phase.
    pub phase: QueryPhase,
}

impl SearchSettings {
    /// Records that the first query has executed.
    pub fn mark_first_query_executed(&mut self) {
        self.phase = QueryPhase::PostFirstQuery;
    }
}

impl SearchInterface for SearchSettings {
    fn query_phase(&self) -> QueryPhase {
        self.phase
    }

    fn set_results_per_page(&mut self, results_per_page: Choice) {
        self.results_per_page = Some(results_per_page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_transition_is_one_way() {
        let mut settings = SearchSettings::default();
        assert_eq!(settings.query_phase(), QueryPhase::PreFirstQuery);
        settings.mark_first_query_executed();
        settings.mark_first_query_executed();
        assert_eq!(settings.query_phase(), QueryPhase::PostFirstQuery);
    }

    #[test]
    fn test_shared_search_interface_writes_through() {
        let shared = Arc::new(Mutex::new(SearchSettings::default()));
        let mut handle = Arc::clone(&shared);
        handle.set_results_per_page(25);
        assert_eq!(lock(&shared).results_per_page, Some(25));
    }
}
