//! Ordered steps for one swipe direction, with friction and threshold.

use smallvec::SmallVec;

use crate::constants::{DEFAULT_FRICTION, MULTIPLIER_LEFT_LEAVING, MULTIPLIER_RIGHT_LEAVING};
use crate::error::{validate_distance, ConfigError};
use crate::heading::Heading;
use crate::step::Step;

/// Most lists configure one to three steps per side.
pub type StepVec<I> = SmallVec<[Step<I>; 4]>;

/// Steps of one swipe direction, sorted ascending by `end_x`.
///
/// Configured once before interaction; afterwards it is only read, so one
/// instance serves every item of the list.
pub struct SwipeDirection<I> {
    heading: Heading,
    steps: StepVec<I>,
    multiplier: f32,
    friction: f32,
    threshold: Option<f32>,
}

impl<I> SwipeDirection<I> {
    /// Creates an empty (disabled) direction for items travelling towards
    /// `heading`.
    pub fn new(heading: Heading) -> Self {
        let multiplier = match heading {
            Heading::Left => MULTIPLIER_RIGHT_LEAVING,
            Heading::Right => MULTIPLIER_LEFT_LEAVING,
        };
        Self {
            heading,
            steps: SmallVec::new(),
            multiplier,
            friction: DEFAULT_FRICTION,
            threshold: None,
        }
    }

    /// Inserts `step` at its sorted position.
    ///
    /// Steps with equal `end_x` keep their insertion order, the later one
    /// sorting after the earlier.
    pub fn push(&mut self, step: Step<I>) -> Result<&mut Self, ConfigError> {
        let end_x = step.end_x();
        if !validate_distance(end_x) {
            return Err(ConfigError::InvalidEndX { end_x });
        }
        let index = self.steps.partition_point(|existing| existing.end_x() <= end_x);
        self.steps.insert(index, step);
        Ok(self)
    }

    /// Sets the damping coefficient. Expected in `(0, 1]` but not checked.
    pub fn set_friction(&mut self, friction: f32) -> &mut Self {
        self.friction = friction;
        self
    }

    /// Overrides the damped distance a release must reach to commit.
    pub fn set_threshold(&mut self, threshold: f32) -> Result<&mut Self, ConfigError> {
        if !validate_distance(threshold) {
            return Err(ConfigError::InvalidThreshold { threshold });
        }
        self.threshold = Some(threshold);
        Ok(self)
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn steps(&self) -> &[Step<I>] {
        &self.steps
    }

    pub fn is_enabled(&self) -> bool {
        !self.steps.is_empty()
    }

    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    pub fn friction(&self) -> f32 {
        self.friction
    }

    /// Widest configured `end_x`, or 0 for an empty direction.
    pub fn max_x(&self) -> f32 {
        self.steps.last().map_or(0.0, Step::end_x)
    }

    /// Explicit commit threshold, if one was set.
    pub fn threshold(&self) -> Option<f32> {
        self.threshold
    }

    /// Applies friction to a raw drag magnitude and clamps it to `max_x`.
    pub fn damp(&self, magnitude: f32) -> f32 {
        friction_and_clamp(magnitude, self.friction, self.max_x())
    }

    /// Step whose zone contains `distance`.
    ///
    /// Zones are closed on their upper bound. Distances past the widest
    /// step resolve to it; an empty direction resolves to nothing.
    pub fn step_at(&self, distance: f32) -> Option<&Step<I>> {
        let index = self.steps.partition_point(|step| step.end_x() < distance);
        self.steps.get(index).or_else(|| self.steps.last())
    }

    /// `end_x` of every step in order, for diagnostics.
    pub fn end_xs(&self) -> Vec<f32> {
        self.steps.iter().map(Step::end_x).collect()
    }
}

/// `min(|magnitude * friction|, ceiling)`.
///
/// Out-of-range friction yields faster or slower tracking, never a panic.
pub fn friction_and_clamp(magnitude: f32, friction: f32, ceiling: f32) -> f32 {
    (magnitude * friction).abs().min(ceiling)
}
