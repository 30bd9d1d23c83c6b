//! Form container: item list, focus delegation, input routing, draw
//!
//! Composes the other modules:
//!
//! ```text
//! draw:   layout::compute -> scroll::vertical_offset -> per-item render
//! input:  route to focused item -> drain finish signal -> focus transition
//! focus:  FocusCycle (intended index) -> delegation (confirmed focus)
//! ```
//!
//! The cycle index tracks the *intended* target; delegation confirms which
//! item actually accepted focus. Items that refuse (display-only views) are
//! skipped transparently because their refusal replays the last navigation
//! key, advancing the cycle exactly as a finish signal would.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    Frame,
};
use tracing::{debug, trace};

use crate::element::{FinishKey, FinishedHook, FormElement, Handled};
use crate::elements::{Button, Checkbox, TextField, TextView, Tree, TreeNode};
use crate::focus::{FocusCycle, Transition};
use crate::layout::{self, LayoutConfig, Orientation};
use crate::scroll;

type CancelFn = Box<dyn FnMut()>;

/// Vertical or horizontal arrangement of focusable elements
///
/// Items keep their insertion order; that order drives both the layout and
/// the focus cycle. All state changes happen synchronously inside the public
/// calls - the container runs no background work.
pub struct FormContainer {
    items: Vec<Box<dyn FormElement>>,
    config: LayoutConfig,
    cycle: FocusCycle,
    finished: FinishedHook,
    cancel: Option<CancelFn>,
    /// Set when delegation found no accepting item.
    container_focused: bool,
    /// Rectangle from the most recent draw; empty before the first draw.
    area: Rect,
}

impl FormContainer {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            config: LayoutConfig::default(),
            cycle: FocusCycle::new(),
            finished: FinishedHook::new(),
            cancel: None,
            container_focused: false,
            area: Rect::default(),
        }
    }

    // --- item list -------------------------------------------------------

    /// Append any element satisfying the capability contract.
    pub fn add_item(&mut self, mut item: Box<dyn FormElement>) -> &mut Self {
        item.set_finished(self.finished.clone());
        self.items.push(item);
        self
    }

    pub fn add_text_field(&mut self, label: &str, text: &str) -> &mut Self {
        self.add_item(Box::new(TextField::new(label, text)))
    }

    /// Add a display-only text view. A non-scrollable view also refuses
    /// keyboard focus, so the cycle skips over it.
    pub fn add_text_view(
        &mut self,
        label: &str,
        text: &str,
        field_width: u16,
        field_height: u16,
        scrollable: bool,
    ) -> &mut Self {
        self.add_item(Box::new(
            TextView::new(label, text)
                .with_size(field_width, field_height)
                .scrollable(scrollable),
        ))
    }

    pub fn add_checkbox(&mut self, label: &str, checked: bool) -> &mut Self {
        self.add_item(Box::new(Checkbox::new(label, checked)))
    }

    pub fn add_button(&mut self, label: &str, on_press: impl FnMut() + 'static) -> &mut Self {
        self.add_item(Box::new(Button::new(label, on_press)))
    }

    pub fn add_tree(&mut self, label: &str, roots: Vec<TreeNode>) -> &mut Self {
        self.add_item(Box::new(Tree::new(label, roots)))
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn item(&self, index: usize) -> Option<&dyn FormElement> {
        self.items.get(index).map(|item| item.as_ref())
    }

    pub fn item_mut(&mut self, index: usize) -> Option<&mut dyn FormElement> {
        Some(self.items.get_mut(index)?.as_mut())
    }

    /// First item with the given label.
    pub fn item_by_label(&self, label: &str) -> Option<&dyn FormElement> {
        self.index_of_label(label).and_then(|index| self.item(index))
    }

    /// Index of the first item with the given label.
    pub fn index_of_label(&self, label: &str) -> Option<usize> {
        self.items.iter().position(|item| item.label() == label)
    }

    /// Remove the item at `index`, preserving the order of the rest and
    /// re-clamping the focus index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn remove_item(&mut self, index: usize) -> Box<dyn FormElement> {
        let item = self.items.remove(index);
        self.cycle.clamp(self.items.len());
        item
    }

    // --- configuration ---------------------------------------------------

    /// Point the focus cycle at `index` (clamped). Takes effect on the next
    /// delegation, i.e. the next [`focus`](Self::focus) call.
    pub fn set_focus(&mut self, index: usize) -> &mut Self {
        self.cycle.set_index(index, self.items.len());
        self
    }

    pub fn set_orientation(&mut self, orientation: Orientation) -> &mut Self {
        self.config.orientation = orientation;
        self
    }

    pub fn set_item_padding(&mut self, padding: u16) -> &mut Self {
        self.config.item_padding = padding;
        self
    }

    /// Handler invoked when the user hits Escape. Without one, Escape
    /// returns focus to the first item.
    pub fn set_cancel(&mut self, cancel: impl FnMut() + 'static) -> &mut Self {
        self.cancel = Some(Box::new(cancel));
        self
    }

    // --- focus -----------------------------------------------------------

    /// Index of the item actually holding focus (first match).
    pub fn focused_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.has_focus())
    }

    /// Whether the container or any of its items holds focus.
    pub fn has_focus(&self) -> bool {
        self.container_focused || self.focused_index().is_some()
    }

    /// Hand focus to the intended item, skipping items that refuse.
    ///
    /// Bounded retry: each refusal signals the no-key finish, which replays
    /// the last navigation key and advances the cycle; after `len + 1`
    /// fruitless attempts the container itself takes focus.
    pub fn focus(&mut self) {
        let len = self.items.len();
        self.cycle.clamp(len);
        for _attempt in 0..=len {
            let index = self.cycle.index();
            if index >= len {
                break;
            }
            for (i, item) in self.items.iter_mut().enumerate() {
                item.set_finished(self.finished.clone());
                if i != index {
                    item.release_focus();
                }
            }
            self.container_focused = false;
            self.items[index].take_focus();
            if self.items[index].has_focus() {
                trace!(index, "focus delegated");
                return;
            }
            match self.finished.take() {
                Some(signal) => match self.cycle.apply(signal, len) {
                    Transition::Redelegate => continue,
                    Transition::Cancelled => {
                        if self.run_cancel() {
                            return;
                        }
                        continue;
                    }
                    Transition::Idle => continue,
                },
                // Refused without a signal: nothing to replay.
                None => break,
            }
        }
        debug!("no item accepted focus, container takes it");
        for item in &mut self.items {
            item.release_focus();
        }
        self.container_focused = true;
    }

    /// Run the cancel callback; true when one was registered. Without a
    /// callback the cycle resets to the first item.
    fn run_cancel(&mut self) -> bool {
        match self.cancel.as_mut() {
            Some(cancel) => {
                debug!("cancel callback invoked");
                cancel();
                true
            }
            None => {
                self.cycle.reset();
                false
            }
        }
    }

    /// Apply a finish signal produced by routed input.
    fn apply_finish(&mut self, signal: FinishKey) {
        let len = self.items.len();
        match self.cycle.apply(signal, len) {
            Transition::Redelegate => self.focus(),
            Transition::Cancelled => {
                if !self.run_cancel() {
                    self.focus();
                }
            }
            Transition::Idle => {}
        }
    }

    // --- input routing ---------------------------------------------------

    /// Forward a key event to the focused item; unhandled when no item
    /// holds focus.
    pub fn handle_key(&mut self, key: KeyEvent) -> Handled {
        let Some(index) = self.focused_index() else {
            return Handled::No;
        };
        let handled = self.items[index].handle_key(key);
        if let Some(signal) = self.finished.take() {
            trace!(?signal, index, "finish signal from focused item");
            self.apply_finish(signal);
        }
        handled
    }

    /// Offer a mouse event to items in order; the first consumer wins and
    /// becomes the focus target. Display-only items never see a primary
    /// press. An unconsumed primary press inside the container re-runs
    /// delegation, returning focus to the last remembered item.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Handled {
        let primary_press = mouse.kind == MouseEventKind::Down(MouseButton::Left);
        let len = self.items.len();
        for index in 0..len {
            if primary_press && self.items[index].display_only() {
                continue;
            }
            if !self.items[index].handle_mouse(mouse).was_handled() {
                continue;
            }
            if self.items[index].has_focus() {
                // The consumer took focus; it is the new intended target.
                for (i, item) in self.items.iter_mut().enumerate() {
                    if i != index {
                        item.release_focus();
                    }
                }
                self.container_focused = false;
                self.cycle.set_index(index, len);
                trace!(index, "mouse moved focus");
            }
            if let Some(signal) = self.finished.take() {
                self.apply_finish(signal);
            }
            return Handled::Yes;
        }
        if primary_press && self.area.contains(Position::new(mouse.column, mouse.row)) {
            debug!("primary press on container background, refocusing");
            self.focus();
            return Handled::Yes;
        }
        Handled::No
    }

    // --- draw ------------------------------------------------------------

    /// Layout, scroll, and draw all visible items into `area`.
    ///
    /// Two passes so the focused item draws last and wins overlaps. Items
    /// scrolled fully out of the band are skipped but still get a (empty)
    /// rectangle assigned for hit-testing consistency.
    pub fn draw(&mut self, f: &mut Frame, area: Rect) {
        self.area = area;
        let len = self.items.len();

        // The mouse may have moved focus since the last transition; keep
        // the intended index in step with reality.
        if let Some(index) = self.focused_index() {
            self.cycle.set_index(index, len);
        }

        let plan = layout::compute(&self.items, &self.config, area);
        let top_limit = area.y;
        let bottom_limit = area.y + area.height;
        let offset = plan
            .focused
            .map(|rect| scroll::vertical_offset(top_limit, bottom_limit, rect))
            .unwrap_or(0);

        let mut focused_visible = None;
        for (index, rect) in plan.rects.iter().enumerate() {
            let item = &mut self.items[index];
            item.set_label_width(plan.label_widths[index]);
            let assigned = scroll::shift_into_band(*rect, offset, top_limit, bottom_limit);
            item.set_area(assigned);
            if assigned.height == 0 {
                continue;
            }
            if item.has_focus() {
                focused_visible = Some(index);
                continue;
            }
            item.render(f);
        }
        if let Some(index) = focused_visible {
            self.items[index].render(f);
        }
    }
}

impl Default for FormContainer {
    fn default() -> Self {
        Self::new()
    }
}
