//! Element capability contract - the interface every placed item satisfies
//!
//! The form container is generic over its contents: anything that can report
//! a label, accept a rectangle, take focus, and handle input can be placed in
//! it. Concrete element kinds live in [`crate::elements`].

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};
use unicode_width::UnicodeWidthStr;

/// Result of handling an input event
///
/// Tells the container whether the element consumed the event or
/// if it should bubble up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the element
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl Handled {
    /// Create from a boolean (true = handled)
    pub fn from_bool(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }

    /// Check if the event was handled
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        Self::from_bool(handled)
    }
}

/// Navigation key carried by a finish signal
///
/// An element emits one of these through its [`FinishedHook`] when it wants
/// to relinquish focus. `None` is the "no key information" sentinel: the
/// container replays the last recorded key in its place, which is how
/// elements that refuse focus get skipped transparently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishKey {
    /// Advance to the next element (Tab, Enter)
    Forward,
    /// Retreat to the previous element (Shift+Tab)
    Backward,
    /// Escape pressed
    Cancel,
    /// Some other key the element chose to finish on; recorded for replay
    Other(KeyCode),
    /// No key information - replay the last recorded action
    None,
}

impl FinishKey {
    /// Map a key event to the finish signal it conventionally produces.
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Tab | KeyCode::Enter => Some(Self::Forward),
            KeyCode::BackTab => Some(Self::Backward),
            KeyCode::Esc => Some(Self::Cancel),
            _ => None,
        }
    }
}

/// Channel through which an element relinquishes focus
///
/// The container clones one hook into every item. An element calls
/// [`finish`](Self::finish) with the key that triggered the hand-back; the
/// container drains the cell after each routed event or delegation attempt
/// and runs the focus transition. Everything is single-threaded (one UI
/// thread, no background tasks), hence `Rc`.
#[derive(Debug, Clone, Default)]
pub struct FinishedHook {
    signal: Rc<RefCell<Option<FinishKey>>>,
}

impl FinishedHook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal that the element wants to relinquish focus.
    ///
    /// A later call before the container drains the cell overwrites the
    /// earlier key; only the final intent of an input event counts.
    pub fn finish(&self, key: FinishKey) {
        *self.signal.borrow_mut() = Some(key);
    }

    /// Drain the pending signal, if any. Container side.
    pub(crate) fn take(&self) -> Option<FinishKey> {
        self.signal.borrow_mut().take()
    }
}

/// Capability contract for items placed in a [`crate::form::FormContainer`]
///
/// Ownership of whatever the element wraps stays with the caller that built
/// it; the container only tracks list membership, geometry, and focus.
pub trait FormElement {
    /// Label text shown in the form's label column.
    fn label(&self) -> &str;

    /// Display width of the label in terminal cells.
    fn label_width(&self) -> u16 {
        UnicodeWidthStr::width(self.label()) as u16
    }

    /// Shared label column width assigned by the layout pass so that fields
    /// align vertically. Elements that render a label should honor it.
    fn set_label_width(&mut self, width: u16) {
        let _ = width;
    }

    /// Preferred field width in cells; 0 defers to the layout default.
    fn field_width(&self) -> u16 {
        0
    }

    /// Preferred field height in rows; 0 defers to the layout default.
    fn field_height(&self) -> u16 {
        0
    }

    /// Accept the rectangle computed by the layout pass.
    fn set_area(&mut self, area: Rect);

    /// The most recently assigned rectangle.
    fn area(&self) -> Rect;

    /// Whether this element currently holds focus.
    fn has_focus(&self) -> bool;

    /// Store the finish hook. The container registers this on every item
    /// before delegating focus, and again whenever an item is added.
    fn set_finished(&mut self, finished: FinishedHook);

    /// Offer focus to this element.
    ///
    /// An element may refuse by leaving `has_focus` false and signalling
    /// [`FinishKey::None`] through its finish hook; the container then moves
    /// on to the next candidate.
    fn take_focus(&mut self);

    /// Withdraw focus from this element.
    fn release_focus(&mut self);

    /// Display-only elements never claim focus from a primary mouse press
    /// (they may still consume scroll or drag interactions).
    fn display_only(&self) -> bool {
        false
    }

    /// Handle a key event. Only called while this element holds focus.
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        let _ = key;
        Handled::No
    }

    /// Handle a mouse event. Called in item order until one consumes it.
    fn handle_mouse(&mut self, mouse: MouseEvent) -> Handled {
        let _ = mouse;
        Handled::No
    }

    /// Draw into the assigned rectangle. Implementations clip themselves to
    /// the frame, the assigned area may extend past the visible band.
    fn render(&self, f: &mut Frame);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_handled_from_bool() {
        assert_eq!(Handled::from_bool(true), Handled::Yes);
        assert_eq!(Handled::from_bool(false), Handled::No);
        assert!(Handled::Yes.was_handled());
        assert!(!Handled::No.was_handled());
        assert_eq!(Handled::from(true), Handled::Yes);
    }

    #[test]
    fn test_finish_key_mapping() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(FinishKey::from_key(&key(KeyCode::Tab)), Some(FinishKey::Forward));
        assert_eq!(FinishKey::from_key(&key(KeyCode::Enter)), Some(FinishKey::Forward));
        assert_eq!(
            FinishKey::from_key(&key(KeyCode::BackTab)),
            Some(FinishKey::Backward)
        );
        assert_eq!(FinishKey::from_key(&key(KeyCode::Esc)), Some(FinishKey::Cancel));
        assert_eq!(FinishKey::from_key(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_finished_hook_drains_once() {
        let hook = FinishedHook::new();
        let clone = hook.clone();
        clone.finish(FinishKey::Forward);
        assert_eq!(hook.take(), Some(FinishKey::Forward));
        assert_eq!(hook.take(), None);
    }

    #[test]
    fn test_finished_hook_last_signal_wins() {
        let hook = FinishedHook::new();
        hook.finish(FinishKey::Forward);
        hook.finish(FinishKey::Backward);
        assert_eq!(hook.take(), Some(FinishKey::Backward));
    }
}
