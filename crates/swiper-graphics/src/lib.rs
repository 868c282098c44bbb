//! Pure math/data for drawing swipe backgrounds in Swiper
//!
//! This crate contains geometry primitives, color definitions, brushes,
//! icon handles, draw primitives and unit types that the gesture core hands
//! to whatever surface the host list widget draws on.

mod brush;
mod color;
mod geometry;
mod icon;
mod unit;

pub use brush::*;
pub use color::*;
pub use geometry::*;
pub use icon::*;
pub use unit::*;

pub mod prelude {
    pub use crate::brush::Brush;
    pub use crate::color::Color;
    pub use crate::geometry::{DrawPrimitive, DrawScope, DrawScopeDefault, Point, Rect, Size};
    pub use crate::icon::{Icon, IconId};
    pub use crate::unit::Dp;
}
