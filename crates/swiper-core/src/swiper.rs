//! The per-list swipe controller driven by the host's draw and release
//! callbacks.

use std::fmt;
use std::rc::Rc;

use swiper_graphics::{Brush, DrawScope, Point};

use crate::constants::{SWIPE_ESCAPE_VELOCITY_FACTOR, SWIPE_THRESHOLD_MARGIN};
use crate::direction::SwipeDirection;
use crate::error::ConfigError;
use crate::heading::{DirectionFlags, Heading};
use crate::host::{ActionState, ChildDrawEvent, ItemKey, SwipeHost, SwipeItem};
use crate::session::{GestureSession, GestureSessions};

pub type ThresholdFn<I> = Rc<dyn Fn(&I) -> f32>;

/// What a release did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReleaseOutcome {
    /// The step ending at `end_x` fired its action.
    Committed { heading: Heading, end_x: f32 },
    /// The item was released short of the commit threshold.
    BelowThreshold { position: f32, threshold: f32 },
    /// Threshold reached but the direction has no step to commit.
    NoStep,
    /// No active frame was seen for the item; nothing to commit.
    NoSession,
}

impl ReleaseOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, ReleaseOutcome::Committed { .. })
    }
}

/// Resolves drag frames to steps, paints them and commits on release.
///
/// One `Swiper` serves a whole list. Step configuration is shared by every
/// item; the signed position of each dragged item lives in its own
/// [`GestureSession`].
pub struct Swiper<I> {
    right_leaving: SwipeDirection<I>,
    left_leaving: SwipeDirection<I>,
    threshold_override: Option<ThresholdFn<I>>,
    sessions: GestureSessions,
}

impl<I> Default for Swiper<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Swiper<I> {
    pub fn new() -> Self {
        Self {
            right_leaving: SwipeDirection::new(Heading::Left),
            left_leaving: SwipeDirection::new(Heading::Right),
            threshold_override: None,
            sessions: GestureSessions::new(),
        }
    }

    /// Configures the steps revealed when an item travels left.
    pub fn right_leaving<F>(&mut self, block: F) -> Result<&mut Self, ConfigError>
    where
        F: FnOnce(&mut SwipeDirection<I>) -> Result<(), ConfigError>,
    {
        block(&mut self.right_leaving)?;
        Ok(self)
    }

    /// Configures the steps revealed when an item travels right.
    pub fn left_leaving<F>(&mut self, block: F) -> Result<&mut Self, ConfigError>
    where
        F: FnOnce(&mut SwipeDirection<I>) -> Result<(), ConfigError>,
    {
        block(&mut self.left_leaving)?;
        Ok(self)
    }

    /// Replaces the per-item commit threshold for both directions.
    pub fn set_swipe_threshold(&mut self, threshold: impl Fn(&I) -> f32 + 'static) -> &mut Self {
        self.threshold_override = Some(Rc::new(threshold));
        self
    }

    pub fn direction(&self, heading: Heading) -> &SwipeDirection<I> {
        match heading {
            Heading::Left => &self.right_leaving,
            Heading::Right => &self.left_leaving,
        }
    }

    /// Directions an item may be swiped in, recomputed on every call.
    pub fn movement_flags(&self) -> DirectionFlags {
        let mut flags = DirectionFlags::NONE;
        if self.right_leaving.is_enabled() {
            flags = flags | DirectionFlags::LEFT;
        }
        if self.left_leaving.is_enabled() {
            flags = flags | DirectionFlags::RIGHT;
        }
        flags
    }

    /// Scales the host's fling escape velocity so flings never swipe an
    /// item out on their own.
    pub fn escape_velocity(&self, default_value: f32) -> f32 {
        default_value * SWIPE_ESCAPE_VELOCITY_FACTOR
    }

    pub fn is_item_view_swipe_enabled(&self) -> bool {
        true
    }

    /// Drag-to-reorder is not handled here; moves are always refused.
    pub fn on_move(&self, _from: &I, _to: &I) -> bool {
        false
    }

    pub fn session(&self, key: ItemKey) -> Option<&GestureSession> {
        self.sessions.get(key)
    }

    /// Signed position of `key`'s live gesture, 0 when it has none.
    pub fn signed_position(&self, key: ItemKey) -> f32 {
        self.sessions
            .get(key)
            .map_or(0.0, GestureSession::signed_position)
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }

    /// Drops every live gesture without committing or settling anything.
    ///
    /// Sessions otherwise end only on [`Swiper::release`] or
    /// [`Swiper::cancel`]; call this when the host rebinds the whole list.
    pub fn reset(&mut self) {
        if !self.sessions.is_empty() {
            log::debug!("dropping {} live swipe sessions", self.sessions.len());
        }
        self.sessions.clear();
    }
}

impl<I: SwipeItem> Swiper<I> {
    /// Threshold reported to the host widget: the override, or one pixel
    /// past the item width so the host never swipes the item out itself.
    pub fn swipe_threshold(&self, item: &I) -> f32 {
        match &self.threshold_override {
            Some(threshold) => threshold(item),
            None => item.width() + SWIPE_THRESHOLD_MARGIN,
        }
    }

    /// Distance a release towards `heading` must reach to commit.
    ///
    /// The override wins, then the direction's own threshold. Without
    /// either this is [`Swiper::swipe_threshold`], which damped distances
    /// clamped to the widest step cannot reach unless that step is wider
    /// than the item.
    pub fn commit_threshold(&self, item: &I, heading: Heading) -> f32 {
        match (&self.threshold_override, self.direction(heading).threshold()) {
            (Some(threshold), _) => threshold(item),
            (None, Some(threshold)) => threshold,
            (None, None) => self.swipe_threshold(item),
        }
    }

    /// Paints one drag frame and returns the displacement the host should
    /// apply to the item view.
    ///
    /// Returns `None` when nothing is drawn: zero delta, a non-swipe action
    /// state, an item without area, or a direction without steps.
    pub fn on_child_draw(
        &mut self,
        scope: &mut dyn DrawScope,
        item: &I,
        event: ChildDrawEvent,
    ) -> Option<Point> {
        if event.action_state != ActionState::Swipe {
            return None;
        }
        let Some(heading) = Heading::from_delta(event.dx) else {
            // Finger back at rest: a release now must not reuse an older frame.
            if event.is_currently_active && self.signed_position(item.key()) != 0.0 {
                self.sessions.begin(item.key()).record(0.0);
            }
            return None;
        };
        let bounds = item.bounds();
        if bounds.is_empty() {
            return None;
        }

        let direction = self.direction(heading);
        let distance = direction.damp(event.dx.abs());
        let step = direction.step_at(distance)?;

        scope.draw_rect_at(bounds, Brush::solid(step.color_at(item, distance)));
        if let Some((icon, icon_bounds)) = step.bounded_icon(item, distance, heading) {
            scope.draw_icon(icon, icon_bounds);
        }

        let offset = distance * direction.multiplier();
        log::trace!(
            "swipe frame: key={} dx={} damped={} step_end_x={}",
            item.key(),
            event.dx,
            distance,
            step.end_x()
        );
        if event.is_currently_active {
            self.sessions.begin(item.key()).record(offset);
        }
        Some(Point::new(offset, event.dy))
    }

    /// Ends the gesture of `item`: commits the resolved step when the last
    /// active frame crossed the threshold, then asks the host to settle the
    /// item. The host is notified whatever the outcome.
    ///
    /// `heading` is the direction the host reports the item left in; the
    /// decision itself only uses the recorded position.
    pub fn release(
        &mut self,
        item: &I,
        heading: Option<Heading>,
        host: &mut dyn SwipeHost,
    ) -> ReleaseOutcome {
        let key = item.key();
        let outcome = match self.sessions.end(key) {
            Some(session) => self.commit(item, session.signed_position()),
            None => {
                log::debug!("release without active frames: key={key} heading={heading:?}");
                ReleaseOutcome::NoSession
            }
        };
        host.settle(key);
        outcome
    }

    /// Drops the gesture of `item` without committing, e.g. when the host
    /// cancels the drag. The host is still asked to settle the item.
    ///
    /// Hosts that recycle an item view mid-gesture must call this for the
    /// item it showed, or its session outlives the view.
    pub fn cancel(&mut self, item: &I, host: &mut dyn SwipeHost) {
        self.sessions.end(item.key());
        host.settle(item.key());
    }

    fn commit(&self, item: &I, signed_position: f32) -> ReleaseOutcome {
        if signed_position == 0.0 || signed_position.is_nan() {
            return ReleaseOutcome::BelowThreshold {
                position: 0.0,
                threshold: self.commit_threshold(item, Heading::from_position(0.0)),
            };
        }
        let heading = Heading::from_position(signed_position);
        let direction = self.direction(heading);
        let position = signed_position.abs();
        let threshold = self.commit_threshold(item, heading);
        if position < threshold {
            return ReleaseOutcome::BelowThreshold {
                position,
                threshold,
            };
        }

        log::debug!(
            "swipe triggered, position: {signed_position}, options: {:?}",
            direction.end_xs()
        );
        match direction.step_at(position) {
            Some(step) => {
                step.invoke(item);
                ReleaseOutcome::Committed {
                    heading,
                    end_x: step.end_x(),
                }
            }
            None => ReleaseOutcome::NoStep,
        }
    }
}

impl<I> fmt::Debug for Swiper<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Swiper")
            .field("right_leaving", &self.right_leaving.end_xs())
            .field("left_leaving", &self.left_leaving.end_xs())
            .field("has_threshold_override", &self.threshold_override.is_some())
            .field("active_sessions", &self.sessions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Step;
    use std::cell::RefCell;
    use swiper_graphics::{Color, DrawPrimitive, DrawScopeDefault, Rect, Size};

    struct Row {
        key: ItemKey,
        width: f32,
    }

    impl SwipeItem for Row {
        fn key(&self) -> ItemKey {
            self.key
        }

        fn bounds(&self) -> Rect {
            Rect::new(0.0, 0.0, self.width, 56.0)
        }
    }

    fn row() -> Row {
        Row {
            key: 1,
            width: 200.0,
        }
    }

    fn scope() -> DrawScopeDefault {
        DrawScopeDefault::new(Size::new(200.0, 56.0))
    }

    fn two_step_swiper(log: &Rc<RefCell<Vec<&'static str>>>) -> Swiper<Row> {
        let archive = Rc::clone(log);
        let delete = Rc::clone(log);
        let mut swiper = Swiper::<Row>::new();
        swiper
            .right_leaving(|dir| {
                dir.set_friction(0.5);
                dir.push(
                    Step::new(80.0)
                        .color(Color::GREEN)
                        .action(move |_| archive.borrow_mut().push("archive")),
                )?;
                dir.push(
                    Step::new(200.0)
                        .color(Color::RED)
                        .action(move |_| delete.borrow_mut().push("delete")),
                )?;
                Ok(())
            })
            .expect("valid configuration");
        swiper
    }

    #[test]
    fn frame_draws_damped_step_and_reports_offset() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut swiper = two_step_swiper(&log);
        let mut scope = scope();

        let offset = swiper.on_child_draw(&mut scope, &row(), ChildDrawEvent::active(-300.0));

        assert_eq!(offset, Some(Point::new(-150.0, 0.0)));
        assert_eq!(
            scope.primitives(),
            &[DrawPrimitive::Rect {
                rect: Rect::new(0.0, 0.0, 200.0, 56.0),
                brush: Brush::Solid(Color::RED),
            }]
        );
        assert_eq!(swiper.signed_position(1), -150.0);
    }

    #[test]
    fn zero_delta_draws_nothing() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut swiper = two_step_swiper(&log);
        let mut scope = scope();
        assert_eq!(
            swiper.on_child_draw(&mut scope, &row(), ChildDrawEvent::active(0.0)),
            None
        );
        assert!(scope.primitives().is_empty());
        assert_eq!(swiper.active_sessions(), 0);
    }

    #[test]
    fn non_swipe_action_state_draws_nothing() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut swiper = two_step_swiper(&log);
        let mut scope = scope();
        let event = ChildDrawEvent::active(-50.0).with_action_state(ActionState::Drag);
        assert_eq!(swiper.on_child_draw(&mut scope, &row(), event), None);
        assert!(scope.primitives().is_empty());
    }

    #[test]
    fn settling_frames_do_not_move_the_session() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut swiper = two_step_swiper(&log);
        let mut scope = scope();
        swiper.on_child_draw(&mut scope, &row(), ChildDrawEvent::active(-120.0));
        swiper.on_child_draw(&mut scope, &row(), ChildDrawEvent::settling(-20.0));
        assert_eq!(swiper.signed_position(1), -60.0);
    }

    #[test]
    fn returning_to_rest_clears_stale_position() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut swiper = two_step_swiper(&log);
        swiper.set_swipe_threshold(|_| 10.0);
        let mut scope = scope();
        let mut settled = Vec::new();

        swiper.on_child_draw(&mut scope, &row(), ChildDrawEvent::active(-300.0));
        swiper.on_child_draw(&mut scope, &row(), ChildDrawEvent::active(0.0));
        let outcome = swiper.release(&row(), None, &mut |key: ItemKey| settled.push(key));

        assert!(!outcome.is_committed());
        assert!(log.borrow().is_empty());
        assert_eq!(settled, vec![1]);
    }

    #[test]
    fn release_past_override_commits_resolved_step() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut swiper = two_step_swiper(&log);
        swiper.set_swipe_threshold(|_| 100.0);
        let mut scope = scope();
        let mut settled = Vec::new();

        swiper.on_child_draw(&mut scope, &row(), ChildDrawEvent::active(-300.0));
        let outcome = swiper.release(&row(), Some(Heading::Left), &mut |key: ItemKey| settled.push(key));

        assert_eq!(
            outcome,
            ReleaseOutcome::Committed {
                heading: Heading::Left,
                end_x: 200.0
            }
        );
        assert_eq!(*log.borrow(), vec!["delete"]);
        assert_eq!(settled, vec![1]);
        assert_eq!(swiper.active_sessions(), 0);
    }

    #[test]
    fn release_without_frames_never_commits() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut swiper = two_step_swiper(&log);
        swiper.set_swipe_threshold(|_| 0.0);
        let mut settled = Vec::new();

        let outcome = swiper.release(&row(), None, &mut |key: ItemKey| settled.push(key));

        assert_eq!(outcome, ReleaseOutcome::NoSession);
        assert!(log.borrow().is_empty());
        assert_eq!(settled, vec![1]);
    }

    #[test]
    fn cancel_settles_without_commit() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut swiper = two_step_swiper(&log);
        swiper.set_swipe_threshold(|_| 10.0);
        let mut scope = scope();
        let mut settled = Vec::new();

        swiper.on_child_draw(&mut scope, &row(), ChildDrawEvent::active(-300.0));
        swiper.cancel(&row(), &mut |key: ItemKey| settled.push(key));

        assert!(log.borrow().is_empty());
        assert_eq!(settled, vec![1]);
        assert_eq!(swiper.session(1), None);
    }

    #[test]
    fn host_threshold_defaults_to_width_plus_margin() {
        let swiper = Swiper::<Row>::new();
        assert_eq!(swiper.swipe_threshold(&row()), 201.0);
    }

    #[test]
    fn commit_threshold_prefers_override_then_direction_then_width() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut swiper = two_step_swiper(&log);
        assert_eq!(swiper.commit_threshold(&row(), Heading::Left), 201.0);
        assert_eq!(swiper.commit_threshold(&row(), Heading::Right), 201.0);

        swiper
            .right_leaving(|dir| {
                dir.set_threshold(90.0)?;
                Ok(())
            })
            .expect("valid threshold");
        assert_eq!(swiper.commit_threshold(&row(), Heading::Left), 90.0);
        assert_eq!(swiper.commit_threshold(&row(), Heading::Right), 201.0);

        swiper.set_swipe_threshold(|_| 40.0);
        assert_eq!(swiper.commit_threshold(&row(), Heading::Left), 40.0);
        assert_eq!(swiper.commit_threshold(&row(), Heading::Right), 40.0);
    }

    #[test]
    fn clamped_drag_at_widest_step_stays_below_default_threshold() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut swiper = two_step_swiper(&log);
        let mut scope = scope();
        let mut settled = Vec::new();

        swiper.on_child_draw(&mut scope, &row(), ChildDrawEvent::active(-1000.0));
        assert_eq!(swiper.signed_position(1), -200.0);
        let outcome = swiper.release(&row(), None, &mut |key: ItemKey| settled.push(key));

        assert_eq!(
            outcome,
            ReleaseOutcome::BelowThreshold {
                position: 200.0,
                threshold: 201.0
            }
        );
        assert!(log.borrow().is_empty());
        assert_eq!(settled, vec![1]);
    }

    #[test]
    fn reset_drops_sessions_without_commit() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut swiper = two_step_swiper(&log);
        swiper.set_swipe_threshold(|_| 10.0);
        let mut scope = scope();
        let recycled = Row { key: 2, width: 200.0 };

        swiper.on_child_draw(&mut scope, &row(), ChildDrawEvent::active(-300.0));
        swiper.on_child_draw(&mut scope, &recycled, ChildDrawEvent::active(-100.0));
        assert_eq!(swiper.active_sessions(), 2);

        swiper.reset();

        assert_eq!(swiper.active_sessions(), 0);
        let mut settled = Vec::new();
        let outcome = swiper.release(&recycled, None, &mut |key: ItemKey| settled.push(key));
        assert_eq!(outcome, ReleaseOutcome::NoSession);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn host_queries_match_fixed_policy() {
        let swiper = Swiper::<Row>::new();
        assert_eq!(swiper.escape_velocity(2.0), 800.0);
        assert!(swiper.is_item_view_swipe_enabled());
        assert!(!swiper.on_move(&row(), &row()));
        assert_eq!(swiper.movement_flags(), DirectionFlags::NONE);
    }

    #[test]
    fn zero_width_item_is_not_drawn() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut swiper = two_step_swiper(&log);
        let mut scope = scope();
        let empty = Row { key: 4, width: 0.0 };
        assert_eq!(
            swiper.on_child_draw(&mut scope, &empty, ChildDrawEvent::active(-40.0)),
            None
        );
        assert_eq!(swiper.active_sessions(), 0);
    }
}
