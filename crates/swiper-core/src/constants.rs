//! Shared gesture constants for swipe-to-reveal handling.
//!
//! Values are in logical pixels unless noted otherwise. Hosts that work in
//! physical pixels should scale distances by their density before
//! configuring steps.

/// Factor applied to the host's default swipe escape velocity.
///
/// Escaping a swipe by flinging would commit it without the user choosing a
/// step, so the host's fling threshold is pushed far out of reach. A value of
/// 400 means a fling never escapes on any realistic touch screen; release
/// always goes through the step commit decision instead.
pub const SWIPE_ESCAPE_VELOCITY_FACTOR: f32 = 400.0;

/// Margin added to the item width for the host-facing swipe threshold.
///
/// `width + 1` keeps the host from ever treating the item as swiped out, so
/// the item always settles back and only the configured steps commit.
pub const SWIPE_THRESHOLD_MARGIN: f32 = 1.0;

/// Friction a direction starts with: damped distance tracks the finger 1:1.
pub const DEFAULT_FRICTION: f32 = 1.0;

/// Sign applied to the damped distance of a right-leaving swipe.
pub const MULTIPLIER_RIGHT_LEAVING: f32 = -1.0;

/// Sign applied to the damped distance of a left-leaving swipe.
pub const MULTIPLIER_LEFT_LEAVING: f32 = 1.0;
