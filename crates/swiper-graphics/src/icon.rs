//! Icon handles drawn on top of a swipe background

use crate::color::Color;
use crate::geometry::Size;

/// Opaque identifier the host maps to an actual bitmap or vector asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IconId(pub u32);

/// An icon the draw scope can paint into a rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Icon {
    pub id: IconId,
    /// Size the asset is authored at; placement helpers scale down from it.
    pub intrinsic_size: Size,
    pub tint: Option<Color>,
}

impl Icon {
    pub const fn new(id: IconId, intrinsic_size: Size) -> Self {
        Self {
            id,
            intrinsic_size,
            tint: None,
        }
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = Some(tint);
        self
    }
}
