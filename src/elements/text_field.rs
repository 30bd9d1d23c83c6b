//! Single-line text input with a label

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::element::{FinishedHook, FormElement, Handled};

/// One-line editable field
///
/// Tab, Enter, Shift+Tab and Escape relinquish focus; everything else edits
/// the text or moves the cursor.
pub struct TextField {
    label: String,
    assigned_label_width: u16,
    text: String,
    /// Cursor as a char offset into `text`.
    cursor: usize,
    field_width: u16,
    area: Rect,
    focused: bool,
    finished: Option<FinishedHook>,
}

impl TextField {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            label: label.into(),
            assigned_label_width: 0,
            text,
            cursor,
            field_width: 0,
            area: Rect::default(),
            focused: false,
            finished: None,
        }
    }

    /// Preferred field width; 0 keeps the layout default.
    pub fn with_field_width(mut self, width: u16) -> Self {
        self.field_width = width;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.cursor.min(self.text.chars().count());
    }

    /// Byte offset of the char at `cursor`, or the text length at the end.
    fn byte_cursor(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len())
    }

    fn insert(&mut self, c: char) {
        let byte = self.byte_cursor();
        self.text.insert(byte, c);
        self.cursor += 1;
    }

    fn delete_at_cursor(&mut self) {
        let byte = self.byte_cursor();
        if byte < self.text.len() {
            self.text.remove(byte);
        }
    }

    /// First visible char so the cursor stays inside `width` cells.
    fn window_start(&self, width: u16) -> usize {
        let width = width.max(1) as usize;
        self.cursor.saturating_sub(width - 1)
    }
}

impl FormElement for TextField {
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
        1
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
        self.focused = true;
    }

    fn release_focus(&mut self) {
        self.focused = false;
    }

    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Handled::No;
        }
        match key.code {
            KeyCode::Char(c) => {
                self.insert(c);
                Handled::Yes
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.delete_at_cursor();
                }
                Handled::Yes
            }
            KeyCode::Delete => {
                self.delete_at_cursor();
                Handled::Yes
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                Handled::Yes
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.text.chars().count());
                Handled::Yes
            }
            KeyCode::Home => {
                self.cursor = 0;
                Handled::Yes
            }
            KeyCode::End => {
                self.cursor = self.text.chars().count();
                Handled::Yes
            }
            _ => super::finish_on_nav(&self.finished, &key),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Handled {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Handled::No;
        }
        if !self.area.contains(Position::new(mouse.column, mouse.row)) {
            return Handled::No;
        }
        self.focused = true;
        // Place the cursor under the click when it lands in the field.
        let field_x = self.area.x + self.assigned_label_width.min(self.area.width);
        if mouse.column >= field_x {
            let start = self.window_start(self.area.width.saturating_sub(field_x - self.area.x));
            self.cursor = (start + (mouse.column - field_x) as usize)
                .min(self.text.chars().count());
        }
        Handled::Yes
    }

    fn render(&self, f: &mut Frame) {
        let area = self.area.intersection(f.area());
        if area.is_empty() {
            return;
        }
        let (_, field) = super::split_label(area, self.assigned_label_width);
        let label = format!(
            "{:<width$}",
            self.label,
            width = self.assigned_label_width as usize
        );

        let visible: String = self
            .text
            .chars()
            .skip(self.window_start(field.width))
            .take(field.width as usize)
            .collect();
        let field_style = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::UNDERLINED)
        };
        let pad = (field.width as usize).saturating_sub(UnicodeWidthStr::width(visible.as_str()));
        let line = Line::from(vec![
            Span::raw(label),
            Span::styled(visible, field_style),
            Span::styled(" ".repeat(pad), field_style),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }
}
