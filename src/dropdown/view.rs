//! View rendering for the dropdown.

use unicode_width::UnicodeWidthStr;

use super::model::Model;
use crate::style::{ACTIVE_MARKER, ARROW_CLOSED, ARROW_OPEN};

impl Model {
    /// Renders the dropdown.
    ///
    /// The first line holds the caption (when shown) and the label, padded
    /// to the widest item so it does not jump around. While open, one line
    /// per popup item follows.
    pub fn view(&self) -> String {
        let popup = self.popup();
        let width = popup
            .items()
            .iter()
            .map(|item| item.text.width())
            .chain(std::iter::once(popup.label().width()))
            .max()
            .unwrap_or(0);
        let arrow = if popup.is_visible() { ARROW_OPEN } else { ARROW_CLOSED };
        let padding = " ".repeat(width.saturating_sub(popup.label().width()));
        let label = format!("{}{} {}", popup.label(), padding, arrow);

        let mut out = String::new();
        if let Some(caption) = self.caption() {
            out.push_str(&self.styles.caption.render(caption));
        }
        if popup.label_active() {
            out.push_str(&self.styles.label_active.render(&label));
        } else {
            out.push_str(&self.styles.label.render(&label));
        }

        if !popup.is_visible() {
            return out;
        }

        for (index, item) in popup.items().iter().enumerate() {
            let under_cursor = index == self.cursor();
            out.push('\n');
            if item.active {
                let style = if under_cursor {
                    self.styles.item_active.clone().underline(true)
                } else {
                    self.styles.item_active.clone()
                };
                out.push_str(ACTIVE_MARKER);
                out.push(' ');
                out.push_str(&style.render(&item.text));
            } else if under_cursor {
                out.push_str(&self.styles.item_cursor.render(&item.text));
            } else {
                out.push_str(&self.styles.item.render(&item.text));
            }
        }
        out
    }
}
