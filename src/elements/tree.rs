//! Expandable tree rows (sidebar/file-browser shape)

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::element::{FinishedHook, FormElement, Handled};

/// One node in a [`Tree`]; collapsed by default.
#[derive(Debug, Clone)]
pub struct TreeNode {
    text: String,
    expanded: bool,
    children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            expanded: false,
            children: Vec::new(),
        }
    }

    pub fn with_children(text: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            text: text.into(),
            expanded: false,
            children,
        }
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn add_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }
}

/// A visible row after flattening expanded nodes.
struct Row<'a> {
    depth: usize,
    node: &'a TreeNode,
}

pub struct Tree {
    label: String,
    roots: Vec<TreeNode>,
    /// Index into the flattened visible rows.
    selected: usize,
    /// First visible row.
    offset: usize,
    field_width: u16,
    field_height: u16,
    area: Rect,
    focused: bool,
    finished: Option<FinishedHook>,
}

impl Tree {
    pub fn new(label: impl Into<String>, roots: Vec<TreeNode>) -> Self {
        Self {
            label: label.into(),
            roots,
            selected: 0,
            offset: 0,
            field_width: 0,
            field_height: 0,
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

    fn rows(&self) -> Vec<Row<'_>> {
        fn walk<'a>(nodes: &'a [TreeNode], depth: usize, out: &mut Vec<Row<'a>>) {
            for node in nodes {
                out.push(Row { depth, node });
                if node.expanded {
                    walk(&node.children, depth + 1, out);
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.roots, 0, &mut out);
        out
    }

    pub fn row_count(&self) -> usize {
        self.rows().len()
    }

    /// Text of the currently selected row, if any.
    pub fn selected_text(&self) -> Option<String> {
        self.rows()
            .get(self.selected)
            .map(|row| row.node.text.clone())
    }

    /// Toggle expansion of the selected row; leaves are left alone.
    pub fn toggle_selected(&mut self) {
        fn toggle(nodes: &mut [TreeNode], target: usize, counter: &mut usize) -> bool {
            for node in nodes {
                if *counter == target {
                    if !node.children.is_empty() {
                        node.expanded = !node.expanded;
                    }
                    return true;
                }
                *counter += 1;
                if node.expanded && toggle(&mut node.children, target, counter) {
                    return true;
                }
            }
            false
        }
        let mut counter = 0;
        toggle(&mut self.roots, self.selected, &mut counter);
        self.selected = self.selected.min(self.row_count().saturating_sub(1));
    }

    fn select(&mut self, row: usize) {
        self.selected = row.min(self.row_count().saturating_sub(1));
        self.follow_selection();
    }

    fn move_selection(&mut self, delta: i32) {
        let last = self.row_count().saturating_sub(1) as i32;
        let next = (self.selected as i32 + delta).clamp(0, last.max(0));
        self.selected = next as usize;
        self.follow_selection();
    }

    /// Keep the selected row inside the visible window.
    fn follow_selection(&mut self) {
        let rows = self.area.height.max(1) as usize;
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + rows {
            self.offset = self.selected + 1 - rows;
        }
    }
}

impl FormElement for Tree {
    fn label(&self) -> &str {
        &self.label
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
        self.focused = true;
    }

    fn release_focus(&mut self) {
        self.focused = false;
    }

    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up => {
                self.move_selection(-1);
                Handled::Yes
            }
            KeyCode::Down => {
                self.move_selection(1);
                Handled::Yes
            }
            KeyCode::Home => {
                self.select(0);
                Handled::Yes
            }
            KeyCode::End => {
                self.select(self.row_count().saturating_sub(1));
                Handled::Yes
            }
            KeyCode::Char(' ') => {
                self.toggle_selected();
                Handled::Yes
            }
            KeyCode::Enter => {
                // Enter opens/closes rather than advancing focus.
                self.toggle_selected();
                Handled::Yes
            }
            _ => super::finish_on_nav(&self.finished, &key),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Handled {
        let inside = self.area.contains(Position::new(mouse.column, mouse.row));
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if inside => {
                self.focused = true;
                let row = (mouse.row - self.area.y) as usize + self.offset;
                if row < self.row_count() {
                    self.select(row);
                }
                Handled::Yes
            }
            MouseEventKind::ScrollUp if inside => {
                self.move_selection(-1);
                Handled::Yes
            }
            MouseEventKind::ScrollDown if inside => {
                self.move_selection(1);
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
        let rows = self.rows();
        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(area.height as usize)
            .map(|(index, row)| {
                let marker = if row.node.children.is_empty() {
                    "  "
                } else if row.node.expanded {
                    "▾ "
                } else {
                    "▸ "
                };
                let text = format!("{}{}{}", "  ".repeat(row.depth), marker, row.node.text);
                if index == self.selected && self.focused {
                    Line::styled(text, Style::default().add_modifier(Modifier::REVERSED))
                } else {
                    Line::raw(text)
                }
            })
            .collect();
        f.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn sample() -> Tree {
        Tree::new(
            "Files",
            vec![
                TreeNode::with_children(
                    "src",
                    vec![TreeNode::new("lib.rs"), TreeNode::new("form.rs")],
                ),
                TreeNode::new("README.md"),
            ],
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_collapsed_rows() {
        let tree = sample();
        assert_eq!(tree.row_count(), 2);
        assert_eq!(tree.selected_text().as_deref(), Some("src"));
    }

    #[test]
    fn test_expand_and_navigate() {
        let mut tree = sample();
        tree.set_area(Rect::new(0, 0, 20, 10));
        tree.handle_key(key(KeyCode::Enter));
        assert_eq!(tree.row_count(), 4);

        tree.handle_key(key(KeyCode::Down));
        assert_eq!(tree.selected_text().as_deref(), Some("lib.rs"));
        tree.handle_key(key(KeyCode::End));
        assert_eq!(tree.selected_text().as_deref(), Some("README.md"));
    }

    #[test]
    fn test_collapse_clamps_selection() {
        let mut tree = sample();
        tree.set_area(Rect::new(0, 0, 20, 10));
        tree.handle_key(key(KeyCode::Enter));
        tree.handle_key(key(KeyCode::End));
        // Collapse the root again from its own row.
        tree.handle_key(key(KeyCode::Home));
        tree.handle_key(key(KeyCode::Enter));
        assert_eq!(tree.row_count(), 2);
        assert!(tree.selected < 2);
    }

    #[test]
    fn test_leaf_toggle_is_noop() {
        let mut tree = sample();
        tree.set_area(Rect::new(0, 0, 20, 10));
        tree.handle_key(key(KeyCode::Down));
        tree.handle_key(key(KeyCode::Enter));
        assert_eq!(tree.row_count(), 2);
    }

    #[test]
    fn test_click_selects_row() {
        let mut tree = sample();
        tree.set_area(Rect::new(0, 5, 20, 4));
        let press = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 2,
            row: 6,
            modifiers: KeyModifiers::NONE,
        };
        assert!(tree.handle_mouse(press).was_handled());
        assert!(tree.has_focus());
        assert_eq!(tree.selected_text().as_deref(), Some("README.md"));
    }
}
