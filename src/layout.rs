// Flow layout computation for form items
//
// Pure function of (item list, config, available rectangle) -> rectangles.
// Two orientations:
// - Vertical: full-width rows sharing one label column, stacked with padding.
// - Horizontal: label+field cells flowing left to right, wrapping onto a new
//   line when the next label no longer fits.
//
// The engine never fails; zero items produce an empty plan.

use ratatui::layout::Rect;

use crate::element::FormElement;

/// Default field width for elements with a flexible (0) width. Used in
/// horizontal layouts.
pub const DEFAULT_FIELD_WIDTH: u16 = 10;

/// Default field height for multi-line elements with a flexible (0) height.
pub const DEFAULT_FIELD_HEIGHT: u16 = 5;

/// Layout flow direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Items stack top-to-bottom, each spanning the full available width
    #[default]
    Vertical,
    /// Items flow left-to-right and wrap onto new lines
    Horizontal,
}

/// Layout parameters
///
/// Style defaults live here instead of process-wide mutable state; callers
/// that want different flexible-field defaults pass their own config.
#[derive(Debug, Clone, Copy)]
pub struct LayoutConfig {
    pub orientation: Orientation,
    /// Empty cells between items (rows when vertical, columns when horizontal).
    pub item_padding: u16,
    /// Width given to flexible (0) fields in horizontal layouts.
    pub field_width: u16,
    /// Height given to flexible (0) fields.
    pub field_height: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            item_padding: 1,
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,
        }
    }
}

/// Result of a layout pass
#[derive(Debug, Clone, Default)]
pub struct LayoutPlan {
    /// One rectangle per item, parallel to the item list.
    pub rects: Vec<Rect>,
    /// Label column width assigned to each item (shared max in vertical
    /// orientation, the item's own label plus one cell in horizontal).
    pub label_widths: Vec<u16>,
    /// Rectangle of the item currently reporting focus, pre-scroll.
    pub focused: Option<Rect>,
}

/// Compute per-item rectangles inside `area`.
pub fn compute(items: &[Box<dyn FormElement>], config: &LayoutConfig, area: Rect) -> LayoutPlan {
    let right_limit = area.x.saturating_add(area.width);
    let start_x = area.x;
    let mut x = area.x;
    let mut y = area.y;

    // Longest label, plus one space, shared by all rows in vertical layouts.
    let max_label_width = items
        .iter()
        .map(|item| item.label_width())
        .max()
        .unwrap_or(0)
        + 1;

    let mut plan = LayoutPlan {
        rects: Vec::with_capacity(items.len()),
        label_widths: Vec::with_capacity(items.len()),
        focused: None,
    };

    let mut line_height: u16 = 1;
    for item in items {
        let label_width = item.label_width();
        let (item_width, assigned_label) = match config.orientation {
            Orientation::Horizontal => {
                let field_width = match item.field_width() {
                    0 => config.field_width,
                    w => w,
                };
                (
                    label_width.saturating_add(1).saturating_add(field_width),
                    label_width.saturating_add(1),
                )
            }
            Orientation::Vertical => (area.width, max_label_width),
        };
        let item_height = match item.field_height() {
            0 => config.field_height,
            h => h,
        };

        // Wrap when not even the label and one field cell fit.
        if config.orientation == Orientation::Horizontal
            && x.saturating_add(label_width).saturating_add(2) >= right_limit
        {
            x = start_x;
            y += line_height + config.item_padding;
            line_height = item_height;
        }

        // Line height is the running max of this line.
        if item_height > line_height {
            line_height = item_height;
        }

        // Clip to the right edge, never negative.
        let width = if x.saturating_add(item_width) >= right_limit {
            right_limit.saturating_sub(x)
        } else {
            item_width
        };

        let rect = Rect::new(x, y, width, item_height);
        if item.has_focus() {
            plan.focused = Some(rect);
        }
        plan.rects.push(rect);
        plan.label_widths.push(assigned_label);

        match config.orientation {
            Orientation::Horizontal => x += width + config.item_padding,
            Orientation::Vertical => y += item_height + config.item_padding,
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{FinishedHook, FormElement};
    use crate::elements::{TextField, TextView};
    use ratatui::Frame;

    /// Minimal contract implementation with fixed metrics.
    struct Probe {
        label: String,
        field_width: u16,
        field_height: u16,
        focused: bool,
        area: Rect,
    }

    impl Probe {
        fn new(label: &str, field_width: u16, field_height: u16) -> Self {
            Self {
                label: label.to_string(),
                field_width,
                field_height,
                focused: false,
                area: Rect::default(),
            }
        }
    }

    impl FormElement for Probe {
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
        fn set_finished(&mut self, _finished: FinishedHook) {}
        fn take_focus(&mut self) {
            self.focused = true;
        }
        fn release_focus(&mut self) {
            self.focused = false;
        }
        fn render(&self, _f: &mut Frame) {}
    }

    fn items(specs: &[(&str, u16, u16)]) -> Vec<Box<dyn FormElement>> {
        specs
            .iter()
            .map(|&(label, field_width, field_height)| {
                Box::new(Probe::new(label, field_width, field_height)) as Box<dyn FormElement>
            })
            .collect()
    }

    fn horizontal() -> LayoutConfig {
        LayoutConfig {
            orientation: Orientation::Horizontal,
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn vertical_form_scenario() {
        // "Name" text field (height 1), "Notes" text view (height 5).
        let list: Vec<Box<dyn FormElement>> = vec![
            Box::new(TextField::new("Name", "")),
            Box::new(TextView::new("Notes", "some text").scrollable(false)),
        ];
        let plan = compute(&list, &LayoutConfig::default(), Rect::new(0, 0, 40, 10));

        assert_eq!(plan.rects[0], Rect::new(0, 0, 40, 1));
        assert_eq!(plan.rects[1], Rect::new(0, 2, 40, 5));
    }

    #[test]
    fn vertical_alignment_invariant() {
        let list = items(&[("a", 5, 2), ("long label", 20, 3), ("mid", 0, 0)]);
        let area = Rect::new(2, 1, 30, 20);
        let plan = compute(&list, &LayoutConfig::default(), area);

        for rect in &plan.rects {
            assert_eq!(rect.x, area.x);
            assert_eq!(rect.width, area.width);
        }
        // Shared label column: longest label plus one space.
        assert!(plan.label_widths.iter().all(|&w| w == 11));
    }

    #[test]
    fn horizontal_wrap_scenario() {
        // Three items of width 15 (label 4 + space + field 10) in a width-30
        // area: two fit on line one, the third wraps.
        let list = items(&[("aaaa", 10, 1), ("bbbb", 10, 1), ("cccc", 10, 1)]);
        let plan = compute(&list, &horizontal(), Rect::new(0, 0, 30, 10));

        assert_eq!(plan.rects[0], Rect::new(0, 0, 15, 1));
        // Second item starts at 16 and is clipped to the right edge.
        assert_eq!(plan.rects[1], Rect::new(16, 0, 14, 1));
        // Third item wraps to x=0, y = line height + padding.
        assert_eq!(plan.rects[2], Rect::new(0, 2, 15, 1));
    }

    #[test]
    fn horizontal_wrap_invariant_no_overlap() {
        let list = items(&[
            ("one", 8, 1),
            ("two", 12, 2),
            ("three", 6, 1),
            ("four", 20, 1),
            ("five", 3, 1),
        ]);
        let area = Rect::new(0, 0, 34, 30);
        let plan = compute(&list, &horizontal(), area);

        for rect in &plan.rects {
            assert!(rect.x + rect.width <= area.x + area.width);
        }
        // No two items on the same line overlap in x.
        for (i, a) in plan.rects.iter().enumerate() {
            for b in plan.rects.iter().skip(i + 1) {
                if a.y == b.y {
                    assert!(a.x + a.width <= b.x || b.x + b.width <= a.x);
                }
            }
        }
    }

    #[test]
    fn horizontal_line_height_is_running_max() {
        // A tall item on the first line pushes the wrapped line below it.
        let list = items(&[("a", 5, 4), ("b", 5, 1), ("ccc", 18, 1)]);
        let plan = compute(&list, &horizontal(), Rect::new(0, 0, 20, 20));

        assert_eq!(plan.rects[0].y, 0);
        assert_eq!(plan.rects[1].y, 0);
        // Wrapped line starts after the line max height (4) plus padding.
        assert_eq!(plan.rects[2].y, 5);
    }

    #[test]
    fn flexible_sizes_use_config_defaults() {
        let list = items(&[("x", 0, 0)]);
        let plan = compute(&list, &horizontal(), Rect::new(0, 0, 80, 24));

        // width = label (1) + space + DEFAULT_FIELD_WIDTH
        assert_eq!(plan.rects[0].width, 2 + DEFAULT_FIELD_WIDTH);
        assert_eq!(plan.rects[0].height, DEFAULT_FIELD_HEIGHT);
    }

    #[test]
    fn extreme_field_width_saturates_instead_of_overflowing() {
        // A u16::MAX field width must clip to the area, not panic on the
        // width additions in debug builds.
        let list = items(&[("a", u16::MAX, 1), ("b", u16::MAX, 1)]);
        let area = Rect::new(0, 0, 30, 10);
        let plan = compute(&list, &horizontal(), area);

        assert_eq!(plan.rects[0], Rect::new(0, 0, 30, 1));
        // The second item wraps and clips the same way.
        assert_eq!(plan.rects[1], Rect::new(0, 2, 30, 1));
    }

    #[test]
    fn layout_is_deterministic() {
        let list = items(&[("a", 7, 2), ("bb", 0, 0), ("ccc", 13, 1)]);
        let area = Rect::new(3, 2, 25, 40);
        let first = compute(&list, &horizontal(), area);
        let second = compute(&list, &horizontal(), area);
        assert_eq!(first.rects, second.rects);
        assert_eq!(first.label_widths, second.label_widths);
    }

    #[test]
    fn empty_item_list() {
        let plan = compute(&[], &LayoutConfig::default(), Rect::new(0, 0, 10, 10));
        assert!(plan.rects.is_empty());
        assert!(plan.focused.is_none());
    }

    #[test]
    fn focused_rect_tracks_focused_item() {
        let mut list = items(&[("Other", 0, 1), ("Name", 0, 1)]);
        list[1].take_focus();
        let plan = compute(&list, &LayoutConfig::default(), Rect::new(0, 0, 40, 10));
        assert_eq!(plan.focused, Some(plan.rects[1]));
    }
}
