use cyl_core::Direction;

/// Arrow keys step the carousel; everything else is left to the page.
#[inline]
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        crate::constants::KEY_NEXT => Some(Direction::Next),
        crate::constants::KEY_PREV => Some(Direction::Previous),
        _ => None,
    }
}

/// A click on the right half of the canvas goes forward, the left half back.
#[inline]
pub fn direction_for_click(offset_x: f64, client_width: f64) -> Option<Direction> {
    if !(client_width > 0.0) || !offset_x.is_finite() {
        return None;
    }
    if offset_x >= client_width / 2.0 {
        Some(Direction::Next)
    } else {
        Some(Direction::Previous)
    }
}
