use ratatui::layout::Rect;

/// Width a `width`-wide card actually gets inside `area`.
pub fn fitted_width(area: Rect, width: u16) -> u16 {
    width.min(area.width.saturating_sub(2))
}

/// Centers a `width` x `height` card inside `area`, shrinking it to fit.
pub fn centered_card(area: Rect, width: u16, height: u16) -> Rect {
    let width = fitted_width(area, width);
    let height = height.min(area.height);

    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
