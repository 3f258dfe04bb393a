//! Core model of the dropdown: option building, styled presentation and
//! synchronization with the external controller.

use std::sync::atomic::{AtomicI64, Ordering};

use bubbletea_rs::{Cmd, KeyMsg, Msg};

use super::keymap::{default_key_map, KeyMap};
use super::types::{Bindings, ClickMsg, ClickTarget, ControllerReadyMsg, Root};
use crate::controller::{ControllerOptions, QueryPhase, ResultsPerPageController, SearchInterface};
use crate::document;
use crate::error::DropdownError;
use crate::hash::{self, HashSource, NUMBER_OF_RESULTS};
use crate::options::{Options, ResolvedOptions};
use crate::popup::Popup;
use crate::select::{NativeSelect, SelectEntry};
use crate::style::DropdownStyles;
use crate::Choice;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// A results-per-page dropdown.
///
/// The model owns a hidden [`NativeSelect`], the styled [`Popup`] that
/// mirrors it, and, once resolved, the external results-per-page
/// controller. Every change of choice is pushed to the search interface
/// (before the first query) or to the controller (afterwards).
pub struct Model {
    id: i64,
    options: ResolvedOptions,
    select: NativeSelect,
    popup: Popup,
    options_initialized: bool,
    controller: Option<Box<dyn ResultsPerPageController>>,
    search: Box<dyn SearchInterface>,
    hash: Box<dyn HashSource + Send>,
    cursor: usize,
    focus: bool,
    /// Key bindings.
    pub keymap: KeyMap,
    /// Styles.
    pub styles: DropdownStyles,
}

impl Model {
    /// Builds the dropdown on `root` and starts resolving its controller.
    ///
    /// The native select is hidden, the styled label and popup are rendered
    /// right away, and the outside-click listener is registered. The
    /// returned command resolves the controller and yields a
    /// [`ControllerReadyMsg`] to feed back into [`Model::update`]. Until
    /// then, choices go straight to the search interface.
    pub fn new(root: Root, options: &Options, bindings: Bindings) -> (Self, Cmd) {
        let Bindings {
            search,
            controllers,
            hash,
            device,
            localizer,
        } = bindings;
        let options = options.resolve(device.as_ref(), localizer.as_ref());

        let mut select = match root {
            Root::Container => NativeSelect::new(),
            Root::Select(select) => select,
        };
        select.hide();
        let options_initialized = !select.is_empty();

        let mut model = Self {
            id: next_id(),
            options,
            select,
            popup: Popup::new(),
            options_initialized,
            controller: None,
            search,
            hash,
            cursor: 0,
            focus: false,
            keymap: default_key_map(),
            styles: DropdownStyles::default(),
        };
        document::add_click_listener(model.id);
        model.render();

        let id = model.id;
        let pending = controllers.build(ControllerOptions {
            initial_choice: model.options.initial_choice,
            choices_displayed: model.options.choices_displayed.clone(),
        });
        tracing::debug!(id, "resolving results-per-page controller");
        let cmd: Cmd = Box::pin(async move {
            let controller = pending.await;
            Some(Box::new(ControllerReadyMsg { id, controller }) as Msg)
        });

        (model, cmd)
    }

    /// Unique id of this dropdown, used to route messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The options the dropdown runs with.
    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    /// The hidden native select.
    pub fn select(&self) -> &NativeSelect {
        &self.select
    }

    /// The styled label and popup list.
    pub fn popup(&self) -> &Popup {
        &self.popup
    }

    /// Whether the popup list is open.
    pub fn is_open(&self) -> bool {
        self.popup.is_visible()
    }

    /// Whether the external controller has been resolved.
    pub fn controller_resolved(&self) -> bool {
        self.controller.is_some()
    }

    /// Caption text, or `None` when the caption is turned off.
    pub fn caption(&self) -> Option<&str> {
        self.options
            .display_caption
            .then_some(self.options.caption.as_str())
    }

    /// Index of the popup item under the keyboard highlight.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Fills the native select with one entry per configured choice.
    ///
    /// Entry value and text are the choice in decimal; the entry equal to
    /// the initial choice is selected. Does nothing once the options exist.
    pub fn build_options(&mut self) {
        if self.options_initialized {
            return;
        }
        self.select.clear();
        for &choice in &self.options.choices_displayed {
            let text = choice.to_string();
            let selected = self.options.initial_choice == Some(choice);
            self.select.push(SelectEntry::new(text.clone(), text), selected);
        }
        self.options_initialized = true;
    }

    /// Rebuilds the label and popup list from the native select.
    ///
    /// The label shows the `numberOfResults` hash value when the page hash
    /// has one, otherwise the selected entry's text. Items whose text
    /// equals the label are marked active.
    pub fn render(&mut self) {
        self.popup.clear();
        if !self.options_initialized {
            self.build_options();
        }

        let current = self
            .hash
            .get_hash()
            .and_then(|h| hash::get_value(NUMBER_OF_RESULTS, &h))
            .or_else(|| self.select.selected().map(|entry| entry.text.clone()))
            .unwrap_or_default();
        self.popup.set_label(current.as_str());

        for entry in self.select.entries() {
            self.popup
                .push(entry.value.as_str(), entry.text.as_str(), entry.text == current);
        }
        self.cursor = self.popup.active_index().unwrap_or(0);
        tracing::debug!(id = self.id, label = %current, items = self.popup.items().len(), "rendered dropdown");
    }

    /// Value of the selected native entry.
    ///
    /// # Errors
    ///
    /// [`DropdownError::NoOptions`] when the native select has no entries.
    pub fn selected_option(&self) -> Result<String, DropdownError> {
        self.select.selected_value()
    }

    /// Selects the entry whose value is `value` and applies it.
    ///
    /// The label shows the entry's text, loses its open style, and the
    /// matching popup item becomes the active one. Unknown values are
    /// ignored.
    pub fn set_selected_option(&mut self, value: &str) {
        let Some(index) = self.select.set_value(value) else {
            tracing::trace!(id = self.id, value, "ignoring unknown results-per-page value");
            return;
        };
        self.apply_selected();
        let text = self.select.entries()[index].text.clone();
        self.popup.set_label(text);
        self.popup.deactivate_label();
        self.popup.activate(index);
        self.cursor = index;
    }

    /// Pushes `choice` to whoever owns the page size right now.
    ///
    /// Before the first query, and while the controller is unresolved, the
    /// search interface's setting is written directly. Afterwards the
    /// controller is told, which re-runs the query.
    pub fn apply_choice(&mut self, choice: Choice) {
        match (self.search.query_phase(), self.controller.as_mut()) {
            (QueryPhase::PostFirstQuery, Some(controller)) => {
                tracing::debug!(id = self.id, choice, "delegating results per page to controller");
                controller.set_results_per_page(choice);
            }
            (phase, controller) => {
                tracing::debug!(
                    id = self.id,
                    choice,
                    ?phase,
                    resolved = controller.is_some(),
                    "writing results per page on the search interface"
                );
                self.search.set_results_per_page(choice);
            }
        }
    }

    fn apply_selected(&mut self) {
        let value = match self.selected_option() {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(id = self.id, %err, "nothing to apply");
                return;
            }
        };
        match value.parse::<Choice>() {
            Ok(choice) => self.apply_choice(choice),
            Err(_) => tracing::warn!(id = self.id, value = %value, "selected value is not a page size"),
        }
    }

    /// Handles a click that landed on `target`.
    ///
    /// Clicks on this dropdown's label or items are consumed by it. Any
    /// other click reaches the outside-click listener, which closes the
    /// popup.
    pub fn handle_click(&mut self, target: &ClickTarget) {
        tracing::trace!(id = self.id, click = ?target, "click");
        match *target {
            ClickTarget::Label { id } if id == self.id => self.toggle(),
            ClickTarget::Item { id, index } if id == self.id => self.choose(index),
            _ => {
                if document::has_click_listener(self.id) {
                    self.popup.close();
                }
            }
        }
    }

    /// Maps a rendered row of [`Model::view`] to a click target.
    ///
    /// Row 0 is the label; while the popup is open, rows `1..=n` are its
    /// items.
    pub fn target_at(&self, row: u16) -> ClickTarget {
        let row = usize::from(row);
        if row == 0 {
            return ClickTarget::Label { id: self.id };
        }
        if self.popup.is_visible() && row <= self.popup.items().len() {
            return ClickTarget::Item {
                id: self.id,
                index: row - 1,
            };
        }
        ClickTarget::Elsewhere
    }

    fn toggle(&mut self) {
        self.popup.toggle();
        if self.popup.is_visible() {
            self.cursor = self.popup.active_index().unwrap_or(0);
        }
    }

    fn choose(&mut self, index: usize) {
        let Some(item) = self.popup.items().get(index).cloned() else {
            return;
        };
        self.select.set_value(&item.value);
        self.apply_selected();
        self.popup.set_label(item.text);
        self.popup.deactivate_label();
        self.popup.activate(index);
        self.popup.hide();
        self.cursor = index;
    }

    fn on_controller_ready(&mut self, mut controller: Box<dyn ResultsPerPageController>) {
        tracing::debug!(id = self.id, "results-per-page controller resolved");
        controller.disable();
        controller.hide();
        self.controller = Some(controller);
        self.render();
        self.apply_selected();
    }

    fn handle_key(&mut self, msg: &KeyMsg) {
        if self.keymap.toggle.matches(msg) {
            if self.popup.is_visible() {
                self.choose(self.cursor);
            } else {
                self.toggle();
            }
            return;
        }
        if !self.popup.is_visible() {
            return;
        }

        if self.keymap.close.matches(msg) {
            self.popup.close();
        } else if self.keymap.up.matches(msg) {
            self.cursor = self.cursor.saturating_sub(1);
        } else if self.keymap.down.matches(msg) {
            let last = self.popup.items().len().saturating_sub(1);
            self.cursor = (self.cursor + 1).min(last);
        }
    }

    /// Processes controller resolution, clicks and, while focused, keys.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let msg = match msg.downcast::<ControllerReadyMsg>() {
            Ok(ready) => {
                let ControllerReadyMsg { id, controller } = *ready;
                if id == self.id {
                    self.on_controller_ready(controller);
                } else {
                    tracing::warn!(id = self.id, routed_to = id, "dropping controller meant for another dropdown");
                }
                return None;
            }
            Err(msg) => msg,
        };

        if let Some(click) = msg.downcast_ref::<ClickMsg>() {
            self.handle_click(&click.target);
        } else if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.focus {
                self.handle_key(key_msg);
            }
        }
        None
    }

    /// Removes the outside-click listener. Called on drop.
    pub fn detach(&mut self) {
        if document::remove_click_listener(self.id) {
            tracing::trace!(id = self.id, "outside-click listener removed");
        }
    }

    pub(super) fn set_focus(&mut self, focus: bool) {
        self.focus = focus;
        if !focus {
            self.popup.close();
        }
    }

    pub(super) fn has_focus(&self) -> bool {
        self.focus
    }
}

impl Drop for Model {
    fn drop(&mut self) {
        self.detach();
    }
}

impl crate::Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.set_focus(true);
        None
    }

    fn blur(&mut self) {
        self.set_focus(false);
    }

    fn focused(&self) -> bool {
        self.has_focus()
    }
}
