//! Swipe-to-reveal gesture resolution for list items
//!
//! A [`Swiper`] turns the raw horizontal drag of a list item into a damped
//! display offset, picks the configured [`Step`] whose zone contains that
//! offset, paints the step's background and icon into a
//! [`DrawScope`](swiper_graphics::DrawScope), and on release decides whether
//! the step's action fires.
//!
//! ```
//! use swiper_core::prelude::*;
//!
//! struct Row(u64);
//!
//! impl SwipeItem for Row {
//!     fn key(&self) -> ItemKey {
//!         self.0
//!     }
//!
//!     fn bounds(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 200.0, 56.0)
//!     }
//! }
//!
//! let mut swiper = Swiper::<Row>::new();
//! swiper
//!     .right_leaving(|dir| {
//!         dir.set_friction(0.5);
//!         dir.push(Step::new(80.0).color(Color::GREEN))?;
//!         dir.push(Step::new(200.0).color(Color::RED))?;
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! let mut scope = DrawScopeDefault::new(Size::new(200.0, 56.0));
//! let offset = swiper.on_child_draw(&mut scope, &Row(1), ChildDrawEvent::active(-300.0));
//! assert_eq!(offset, Some(Point::new(-150.0, 0.0)));
//! ```

pub mod constants;
mod direction;
mod error;
mod heading;
mod host;
mod session;
mod step;
mod swiper;
pub mod visuals;

pub use direction::{friction_and_clamp, StepVec, SwipeDirection};
pub use error::ConfigError;
pub use heading::{revealed_region, DirectionFlags, Heading};
pub use host::{ActionState, ChildDrawEvent, ItemKey, SwipeHost, SwipeItem};
pub use session::{GestureSession, GestureSessions};
pub use step::{Step, StepActionFn, StepColorFn, StepIconFn};
pub use swiper::{ReleaseOutcome, Swiper, ThresholdFn};

pub use swiper_graphics;

pub mod prelude {
    pub use crate::host::{ActionState, ChildDrawEvent, ItemKey, SwipeHost, SwipeItem};
    pub use crate::visuals::{leading_icon, ramp, solid};
    pub use crate::{ConfigError, DirectionFlags, Heading, ReleaseOutcome, Step, SwipeDirection, Swiper};
    pub use swiper_graphics::prelude::*;
}
