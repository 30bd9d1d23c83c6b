//! Push button with a form-wide action

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::element::{FinishedHook, FormElement, Handled};

type PressFn = Box<dyn FnMut()>;

/// A button runs its action on Enter, space or a primary click.
///
/// Enter presses rather than advancing focus, so leaving a button is done
/// with Tab or Shift+Tab.
pub struct Button {
    label: String,
    on_press: Option<PressFn>,
    area: Rect,
    focused: bool,
    finished: Option<FinishedHook>,
}

impl Button {
    pub fn new(label: impl Into<String>, on_press: impl FnMut() + 'static) -> Self {
        Self {
            label: label.into(),
            on_press: Some(Box::new(on_press)),
            area: Rect::default(),
            focused: false,
            finished: None,
        }
    }

    fn press(&mut self) {
        if let Some(action) = self.on_press.as_mut() {
            action();
        }
    }
}

impl FormElement for Button {
    fn label(&self) -> &str {
        &self.label
    }

    fn field_width(&self) -> u16 {
        // Wide enough for the "< label >" decor.
        UnicodeWidthStr::width(self.label.as_str()) as u16 + 4
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
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.press();
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
        self.press();
        Handled::Yes
    }

    fn render(&self, f: &mut Frame) {
        let area = self.area.intersection(f.area());
        if area.is_empty() {
            return;
        }
        let style = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let text = format!("< {} >", self.label);
        f.render_widget(Paragraph::new(Span::styled(text, style)), area);
    }
}
