//! Concrete element kinds
//!
//! Each element is one file and satisfies the [`FormElement`] contract.
//! Behavior varies by type at construction time - the only capability the
//! container ever asks about is `display_only()`, there is no downcasting.
//!
//! - [`TextField`] - single-line editor with a label
//! - [`TextView`] - display-only text, optionally scrollable; refuses focus
//!   when it cannot scroll
//! - [`Checkbox`] - toggled with space or a click
//! - [`Button`] - pressed with enter, space or a click
//! - [`Tree`] - expandable node rows (file-browser shape)

mod button;
mod checkbox;
mod text_field;
mod text_view;
mod tree;

pub use button::Button;
pub use checkbox::Checkbox;
pub use text_field::TextField;
pub use text_view::TextView;
pub use tree::{Tree, TreeNode};

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use crate::element::{FinishKey, FinishedHook, Handled};

/// Relinquish focus when `key` is a navigation key; bubble up otherwise.
pub(crate) fn finish_on_nav(finished: &Option<FinishedHook>, key: &KeyEvent) -> Handled {
    match FinishKey::from_key(key) {
        Some(finish) => {
            if let Some(hook) = finished {
                hook.finish(finish);
            }
            Handled::Yes
        }
        None => Handled::No,
    }
}

/// Split an assigned rectangle into a one-row label cell and the field area.
pub(crate) fn split_label(area: Rect, label_width: u16) -> (Rect, Rect) {
    let label_width = label_width.min(area.width);
    let label = Rect::new(area.x, area.y, label_width, area.height.min(1));
    let field = Rect::new(
        area.x + label_width,
        area.y,
        area.width - label_width,
        area.height,
    );
    (label, field)
}
