// Viewport scrolling for the focused item
//
// A single vertical offset applies uniformly to every item's y coordinate
// before drawing, chosen so the focused item stays inside the visible band.
// Scroll the minimum amount; when the item is taller than the band, favor
// showing its top over its bottom.

use ratatui::layout::Rect;

/// Offset keeping `focused` inside the band `[top_limit, bottom_limit)`.
///
/// Zero when the item already fits. `focused` is the post-layout,
/// pre-offset rectangle; its y is never above `top_limit`.
pub fn vertical_offset(top_limit: u16, bottom_limit: u16, focused: Rect) -> u16 {
    let bottom = focused.y.saturating_add(focused.height);
    if bottom <= bottom_limit {
        return 0;
    }
    let mut offset = bottom - bottom_limit;
    if (focused.y as i32 - offset as i32) < top_limit as i32 {
        offset = focused.y.saturating_sub(top_limit);
    }
    offset
}

/// Shift `rect` up by `offset` and clip it to the visible band.
///
/// Items fully outside the band get a zero-height rectangle at the band top:
/// they are skipped for drawing and can never match a mouse position, same
/// as a negative-y rectangle would behave. Bottom overhang is kept, the
/// element clips itself against the frame when drawing.
pub fn shift_into_band(rect: Rect, offset: u16, top_limit: u16, bottom_limit: u16) -> Rect {
    let y = rect.y as i32 - offset as i32;
    let bottom = y + rect.height as i32;
    if bottom <= top_limit as i32 || y >= bottom_limit as i32 {
        return Rect::new(rect.x, top_limit, rect.width, 0);
    }
    let hidden_top = (top_limit as i32 - y).max(0) as u16;
    Rect::new(
        rect.x,
        y.max(top_limit as i32) as u16,
        rect.width,
        rect.height - hidden_top,
    )
}
