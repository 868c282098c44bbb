//! Robot-style driver that replays drag gestures against a [`Swiper`].
//!
//! # Example
//!
//! ```
//! use swiper_core::Step;
//! use swiper_graphics::Color;
//! use swiper_testing::{ActionLog, SwipeRobot, TestItem};
//!
//! let log = ActionLog::new();
//! let mut robot = SwipeRobot::new();
//! robot
//!     .swiper_mut()
//!     .left_leaving(|dir| {
//!         dir.push(Step::new(120.0).color(Color::GREEN).action(log.recorder("done")))?;
//!         dir.set_threshold(100.0)?;
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! let item = TestItem::row(0, 320.0, 56.0);
//! robot.drag(&item, &[40.0, 90.0, 130.0]);
//! assert!(robot.release(&item).is_committed());
//! assert_eq!(log.labels(), vec!["done"]);
//! ```

use swiper_core::{ChildDrawEvent, Heading, ReleaseOutcome, Swiper};
use swiper_graphics::{DrawPrimitive, DrawScope, DrawScopeDefault, Point};

use crate::fixtures::{RecordingHost, TestItem};

/// Drives a swiper the way a list widget would: a run of active frames per
/// drag, then a release.
pub struct SwipeRobot {
    swiper: Swiper<TestItem>,
    host: RecordingHost,
    frames: Vec<Vec<DrawPrimitive>>,
    offsets: Vec<Option<Point>>,
}

impl Default for SwipeRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeRobot {
    pub fn new() -> Self {
        Self::with_swiper(Swiper::new())
    }

    pub fn with_swiper(swiper: Swiper<TestItem>) -> Self {
        Self {
            swiper,
            host: RecordingHost::new(),
            frames: Vec::new(),
            offsets: Vec::new(),
        }
    }

    pub fn swiper(&self) -> &Swiper<TestItem> {
        &self.swiper
    }

    pub fn swiper_mut(&mut self) -> &mut Swiper<TestItem> {
        &mut self.swiper
    }

    pub fn host(&self) -> &RecordingHost {
        &self.host
    }

    /// Sends one frame per raw delta, all marked as actively dragged.
    pub fn drag(&mut self, item: &TestItem, deltas: &[f32]) -> Option<Point> {
        let mut last = None;
        for &dx in deltas {
            last = self.frame(item, ChildDrawEvent::active(dx));
        }
        last
    }

    /// Sends a single frame and keeps what it drew.
    pub fn frame(&mut self, item: &TestItem, event: ChildDrawEvent) -> Option<Point> {
        let mut scope = DrawScopeDefault::new(item.bounds.size());
        let offset = self.swiper.on_child_draw(&mut scope, item, event);
        self.frames.push(scope.into_primitives());
        self.offsets.push(offset);
        offset
    }

    /// Lifts the finger, reporting the heading of the last recorded offset.
    pub fn release(&mut self, item: &TestItem) -> ReleaseOutcome {
        let heading = self
            .offsets
            .iter()
            .rev()
            .flatten()
            .next()
            .and_then(|offset| Heading::from_delta(offset.x));
        self.swiper.release(item, heading, &mut self.host)
    }

    /// Primitives drawn by the most recent frame.
    pub fn last_frame(&self) -> &[DrawPrimitive] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn frames(&self) -> &[Vec<DrawPrimitive>] {
        &self.frames
    }

    pub fn offsets(&self) -> &[Option<Point>] {
        &self.offsets
    }
}
