use swiper_graphics::Rect;

/// Which way an item travels while it is being swiped.
///
/// `Left` is a negative horizontal delta and is served by the right-leaving
/// steps; `Right` is a positive delta served by the left-leaving steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    Left,
    Right,
}

impl Heading {
    /// Heading of a raw horizontal delta. Zero has no heading.
    pub fn from_delta(dx: f32) -> Option<Heading> {
        if dx < 0.0 {
            Some(Heading::Left)
        } else if dx > 0.0 {
            Some(Heading::Right)
        } else {
            None
        }
    }

    /// Heading a settled signed position is resolved against.
    ///
    /// Non-positive positions belong to the right-leaving side.
    pub fn from_position(signed_position: f32) -> Heading {
        if signed_position <= 0.0 {
            Heading::Left
        } else {
            Heading::Right
        }
    }

    pub fn flag(self) -> DirectionFlags {
        match self {
            Heading::Left => DirectionFlags::LEFT,
            Heading::Right => DirectionFlags::RIGHT,
        }
    }
}

/// Part of the item bounds uncovered when the item is displaced by
/// `distance` towards `heading`.
///
/// The region hugs the edge the item moved away from and never grows wider
/// than the item itself.
pub fn revealed_region(item_bounds: Rect, distance: f32, heading: Heading) -> Rect {
    let width = distance.abs().min(item_bounds.width).max(0.0);
    match heading {
        Heading::Right => Rect::new(item_bounds.x, item_bounds.y, width, item_bounds.height),
        Heading::Left => Rect::new(
            item_bounds.right() - width,
            item_bounds.y,
            width,
            item_bounds.height,
        ),
    }
}

/// Enabled swipe directions, in the host list widget's LEFT/RIGHT bit layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct DirectionFlags(u8);

impl DirectionFlags {
    pub const NONE: Self = Self(0);
    pub const LEFT: Self = Self(1 << 2);
    pub const RIGHT: Self = Self(1 << 3);

    /// Raw bits to hand to the host widget.
    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn with(mut self, other: DirectionFlags) -> Self {
        self.0 |= other.0;
        self
    }

    pub fn contains(&self, other: DirectionFlags) -> bool {
        other.0 != 0 && (self.0 & other.0) == other.0
    }

    pub fn allows(&self, heading: Heading) -> bool {
        self.contains(heading.flag())
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for DirectionFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.with(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_sign_picks_heading() {
        assert_eq!(Heading::from_delta(-3.0), Some(Heading::Left));
        assert_eq!(Heading::from_delta(3.0), Some(Heading::Right));
        assert_eq!(Heading::from_delta(0.0), None);
        assert_eq!(Heading::from_delta(-0.0), None);
    }

    #[test]
    fn zero_position_resolves_to_right_leaving_side() {
        assert_eq!(Heading::from_position(0.0), Heading::Left);
        assert_eq!(Heading::from_position(-10.0), Heading::Left);
        assert_eq!(Heading::from_position(0.5), Heading::Right);
    }

    #[test]
    fn revealed_region_hugs_trailing_edge() {
        let bounds = Rect::new(10.0, 100.0, 200.0, 48.0);
        assert_eq!(
            revealed_region(bounds, 50.0, Heading::Right),
            Rect::new(10.0, 100.0, 50.0, 48.0)
        );
        assert_eq!(
            revealed_region(bounds, 50.0, Heading::Left),
            Rect::new(160.0, 100.0, 50.0, 48.0)
        );
    }

    #[test]
    fn revealed_region_is_capped_at_item_width() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 40.0);
        assert_eq!(revealed_region(bounds, 300.0, Heading::Left), bounds);
    }

    #[test]
    fn flags_combine() {
        let both = DirectionFlags::LEFT | DirectionFlags::RIGHT;
        assert!(both.allows(Heading::Left));
        assert!(both.allows(Heading::Right));
        assert!(!DirectionFlags::LEFT.allows(Heading::Right));
        assert!(DirectionFlags::NONE.is_empty());
        assert!(!DirectionFlags::NONE.contains(DirectionFlags::NONE));
        assert_eq!(both.bits(), 0b1100);
    }
}
