//! Display-only text area with optional scrolling
//!
//! Mirrors the classic form text-view semantics: the view never edits its
//! content, and when scrolling is turned off it cannot take keyboard focus
//! at all - offered focus, it signals the no-key finish so the container
//! skips over it.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::element::{FinishKey, FinishedHook, FormElement, Handled};

pub struct TextView {
    label: String,
    assigned_label_width: u16,
    text: String,
    field_width: u16,
    field_height: u16,
    scrollable: bool,
    /// First visible line.
    offset: usize,
    area: Rect,
    focused: bool,
    finished: Option<FinishedHook>,
}

impl TextView {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            assigned_label_width: 0,
            text: text.into(),
            field_width: 0,
            field_height: 0,
            scrollable: true,
            offset: 0,
            area: Rect::default(),
            focused: false,
            finished: None,
        }
    }

    /// Preferred field size; 0 keeps the layout defaults.
    pub fn with_size(mut self, field_width: u16, field_height: u16) -> Self {
        self.field_width = field_width;
        self.field_height = field_height;
        self
    }

    /// A non-scrollable view refuses keyboard focus entirely.
    pub fn scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.offset = self.offset.min(self.max_offset());
    }

    fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    fn max_offset(&self) -> usize {
        self.line_count().saturating_sub(self.area.height.max(1) as usize)
    }

    fn scroll_by(&mut self, delta: i32) {
        let offset = self.offset as i32 + delta;
        self.offset = offset.clamp(0, self.max_offset() as i32) as usize;
    }
}

impl FormElement for TextView {
    fn label(&self) -> &str {
        &self.label
    }

    fn set_label_width(&mut self, width: u16) {
        self.assigned_label_width = width;
    }

    fn field_width(&self) -> u16 {
        self.field_width
    }

    fn field_height(&self) -> u16 {
        self.field_height
    }

    fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    fn area(&self) -> Rect {
        self.area
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn set_finished(&mut self, finished: FinishedHook) {
        self.finished = Some(finished);
    }

    fn take_focus(&mut self) {
        if self.scrollable {
            self.focused = true;
        } else if let Some(hook) = &self.finished {
            // Refuse: no key information, the container replays its last
            // navigation action and moves on.
            hook.finish(FinishKey::None);
        }
    }

    fn release_focus(&mut self) {
        self.focused = false;
    }

    fn display_only(&self) -> bool {
        true
    }

    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        let page = self.area.height.max(1) as i32;
        match key.code {
            KeyCode::Up => {
                self.scroll_by(-1);
                Handled::Yes
            }
            KeyCode::Down => {
                self.scroll_by(1);
                Handled::Yes
            }
            KeyCode::PageUp => {
                self.scroll_by(-page);
                Handled::Yes
            }
            KeyCode::PageDown => {
                self.scroll_by(page);
                Handled::Yes
            }
            KeyCode::Home => {
                self.offset = 0;
                Handled::Yes
            }
            KeyCode::End => {
                self.offset = self.max_offset();
                Handled::Yes
            }
            _ => super::finish_on_nav(&self.finished, &key),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Handled {
        if !self.area.contains(Position::new(mouse.column, mouse.row)) {
            return Handled::No;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp if self.scrollable => {
                self.scroll_by(-1);
                Handled::Yes
            }
            MouseEventKind::ScrollDown if self.scrollable => {
                self.scroll_by(1);
                Handled::Yes
            }
            MouseEventKind::Down(MouseButton::Left) if self.scrollable => {
                self.focused = true;
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn render(&self, f: &mut Frame) {
        let area = self.area.intersection(f.area());
        if area.is_empty() {
            return;
        }
        let (label_area, field) = super::split_label(area, self.assigned_label_width);
        let label_style = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        if !label_area.is_empty() {
            f.render_widget(Span::styled(self.label.clone(), label_style), label_area);
        }
        if field.is_empty() {
            return;
        }
        let body: Vec<&str> = self
            .text
            .lines()
            .skip(self.offset)
            .take(field.height as usize)
            .collect();
        f.render_widget(Paragraph::new(body.join("\n")), field);
    }
}
