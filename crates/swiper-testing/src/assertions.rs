//! Assertion utilities for swipe frames
//!
//! Helpers for checking what a drag frame painted without spelling out
//! every primitive.

use swiper_graphics::{Brush, Color, DrawPrimitive, IconId, Rect};

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that `inner` lies entirely inside `outer`.
pub fn assert_rect_within(inner: Rect, outer: Rect, msg: &str) {
    assert!(
        inner.left() >= outer.left()
            && inner.top() >= outer.top()
            && inner.right() <= outer.right()
            && inner.bottom() <= outer.bottom(),
        "{}: {:?} escapes {:?}",
        msg,
        inner,
        outer
    );
}

/// Background color of a frame: the first rect primitive.
pub fn background_color(primitives: &[DrawPrimitive]) -> Option<Color> {
    primitives.iter().find_map(|primitive| match primitive {
        DrawPrimitive::Rect {
            brush: Brush::Solid(color),
            ..
        } => Some(*color),
        _ => None,
    })
}

/// Bounds of the first icon with `id` drawn in a frame.
pub fn icon_bounds(primitives: &[DrawPrimitive], id: IconId) -> Option<Rect> {
    primitives.iter().find_map(|primitive| match primitive {
        DrawPrimitive::Icon { icon, rect } if icon.id == id => Some(*rect),
        _ => None,
    })
}

/// Assert that a frame painted `expected` as its background.
pub fn assert_background(primitives: &[DrawPrimitive], expected: Color, msg: &str) {
    assert_eq!(
        background_color(primitives),
        Some(expected),
        "{}: unexpected background in {:?}",
        msg,
        primitives
    );
}

/// Assert that a frame drew nothing at all.
pub fn assert_nothing_drawn(primitives: &[DrawPrimitive], msg: &str) {
    assert!(
        primitives.is_empty(),
        "{}: expected an empty frame, got {:?}",
        msg,
        primitives
    );
}
