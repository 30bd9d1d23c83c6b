//! Labeled checkbox toggled with space or a click

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::element::{FinishedHook, FormElement, Handled};

pub struct Checkbox {
    label: String,
    assigned_label_width: u16,
    checked: bool,
    area: Rect,
    focused: bool,
    finished: Option<FinishedHook>,
}

impl Checkbox {
    pub fn new(label: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            assigned_label_width: 0,
            checked,
            area: Rect::default(),
            focused: false,
            finished: None,
        }
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }
}

impl FormElement for Checkbox {
    fn label(&self) -> &str {
        &self.label
    }

    fn set_label_width(&mut self, width: u16) {
        self.assigned_label_width = width;
    }

    fn field_width(&self) -> u16 {
        1
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
        match key.code {
            KeyCode::Char(' ') => {
                self.checked = !self.checked;
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
        self.checked = !self.checked;
        Handled::Yes
    }

    fn render(&self, f: &mut Frame) {
        let area = self.area.intersection(f.area());
        if area.is_empty() {
            return;
        }
        let label = format!(
            "{:<width$}",
            self.label,
            width = self.assigned_label_width as usize
        );
        let box_style = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let line = Line::from(vec![
            Span::raw(label),
            Span::styled(if self.checked { "X" } else { " " }, box_style),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }
}
