//! Ready-made color and icon functions for steps.

use swiper_graphics::{Color, Icon, Rect, Size};

use crate::heading::{revealed_region, Heading};
use crate::host::SwipeItem;

/// One color for every distance.
pub fn solid<I>(color: Color) -> impl Fn(&I, f32) -> Color {
    move |_, _| color
}

/// Blends `from` into `to` while the damped distance moves from `start_x`
/// to `end_x`. Distances outside the range hold the nearest endpoint.
pub fn ramp<I>(from: Color, to: Color, start_x: f32, end_x: f32) -> impl Fn(&I, f32) -> Color {
    move |_, distance| {
        let span = end_x - start_x;
        if span <= 0.0 {
            return if distance >= end_x { to } else { from };
        }
        from.lerp(&to, (distance - start_x) / span)
    }
}

/// Icon anchored `margin` px inside the uncovered edge of the item and
/// centred vertically.
///
/// The icon shrinks, keeping its aspect ratio, while the uncovered strip is
/// narrower than the icon plus both margins, and is hidden until the strip
/// is wider than the margins.
pub fn leading_icon<I: SwipeItem>(
    icon: Icon,
    margin: f32,
) -> impl Fn(&I, f32, Heading) -> Option<(Icon, Rect)> {
    move |item, distance, heading| {
        let revealed = revealed_region(item.bounds(), distance, heading);
        let size = fit_icon(icon.intrinsic_size, revealed.size(), margin)?;
        let y = revealed.y + (revealed.height - size.height) / 2.0;
        let x = match heading {
            Heading::Right => revealed.left() + margin,
            Heading::Left => revealed.right() - margin - size.width,
        };
        Some((icon, Rect::new(x, y, size.width, size.height)))
    }
}

fn fit_icon(intrinsic: Size, available: Size, margin: f32) -> Option<Size> {
    let width = available.width - 2.0 * margin;
    let height = available.height - 2.0 * margin;
    if width <= 0.0 || height <= 0.0 || intrinsic.width <= 0.0 || intrinsic.height <= 0.0 {
        return None;
    }
    let scale = (width / intrinsic.width)
        .min(height / intrinsic.height)
        .min(1.0);
    Some(Size::new(intrinsic.width * scale, intrinsic.height * scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ItemKey;
    use swiper_graphics::IconId;

    struct Row;

    impl SwipeItem for Row {
        fn key(&self) -> ItemKey {
            5
        }

        fn bounds(&self) -> Rect {
            Rect::new(0.0, 100.0, 300.0, 64.0)
        }
    }

    fn trash() -> Icon {
        Icon::new(IconId(2), Size::new(24.0, 24.0))
    }

    #[test]
    fn solid_ignores_distance() {
        let color = solid::<Row>(Color::BLUE);
        assert_eq!(color(&Row, 0.0), Color::BLUE);
        assert_eq!(color(&Row, 500.0), Color::BLUE);
    }

    #[test]
    fn ramp_interpolates_and_holds_endpoints() {
        let color = ramp::<Row>(Color::BLACK, Color::WHITE, 100.0, 200.0);
        assert_eq!(color(&Row, 50.0), Color::BLACK);
        assert_eq!(color(&Row, 150.0), Color(0.5, 0.5, 0.5, 1.0));
        assert_eq!(color(&Row, 250.0), Color::WHITE);
    }

    #[test]
    fn degenerate_ramp_switches_at_end() {
        let color = ramp::<Row>(Color::RED, Color::GREEN, 80.0, 80.0);
        assert_eq!(color(&Row, 79.0), Color::RED);
        assert_eq!(color(&Row, 80.0), Color::GREEN);
    }

    #[test]
    fn leading_icon_sits_at_full_size_when_room_allows() {
        let place = leading_icon::<Row>(trash(), 16.0);
        let (_, rect) = place(&Row, 120.0, Heading::Left).expect("icon visible");
        // Strip spans x 180..300; icon hugs its right edge.
        assert_eq!(rect, Rect::new(260.0, 120.0, 24.0, 24.0));
    }

    #[test]
    fn leading_icon_shrinks_in_narrow_strip() {
        let place = leading_icon::<Row>(trash(), 16.0);
        let (_, rect) = place(&Row, 44.0, Heading::Right).expect("icon visible");
        assert_eq!(rect, Rect::new(16.0, 126.0, 12.0, 12.0));
    }

    #[test]
    fn leading_icon_hidden_inside_margins() {
        let place = leading_icon::<Row>(trash(), 16.0);
        assert!(place(&Row, 32.0, Heading::Right).is_none());
    }
}
