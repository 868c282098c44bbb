//! A single zone of drag distance with its visuals and commit action.

use std::fmt;
use std::rc::Rc;

use swiper_graphics::{Color, Icon, Rect};

use crate::heading::{revealed_region, Heading};
use crate::host::SwipeItem;

pub type StepActionFn<I> = Rc<dyn Fn(&I)>;
pub type StepColorFn<I> = Rc<dyn Fn(&I, f32) -> Color>;
pub type StepIconFn<I> = Rc<dyn Fn(&I, f32, Heading) -> Option<(Icon, Rect)>>;

/// Zone of damped drag distance ending at `end_x`.
///
/// A step covers every distance above the previous step's `end_x` up to and
/// including its own. Steps are plain data: the callbacks receive the item
/// they act on and never hold on to it.
pub struct Step<I> {
    end_x: f32,
    action: Option<StepActionFn<I>>,
    color: StepColorFn<I>,
    icon: Option<StepIconFn<I>>,
}

impl<I> Step<I> {
    /// Creates a transparent step without icon or action.
    pub fn new(end_x: f32) -> Self {
        Self {
            end_x,
            action: None,
            color: Rc::new(|_: &I, _: f32| Color::TRANSPARENT),
            icon: None,
        }
    }

    /// Paints the whole zone with one color.
    pub fn color(self, color: Color) -> Self {
        self.color_fn(move |_: &I, _: f32| color)
    }

    /// Tint as a function of the item and the damped distance.
    pub fn color_fn(mut self, color: impl Fn(&I, f32) -> Color + 'static) -> Self {
        self.color = Rc::new(color);
        self
    }

    pub fn action(mut self, action: impl Fn(&I) + 'static) -> Self {
        self.action = Some(Rc::new(action));
        self
    }

    /// Icon provider. Returned bounds are clipped to the revealed part of
    /// the item before drawing.
    pub fn icon(
        mut self,
        icon: impl Fn(&I, f32, Heading) -> Option<(Icon, Rect)> + 'static,
    ) -> Self {
        self.icon = Some(Rc::new(icon));
        self
    }

    pub fn end_x(&self) -> f32 {
        self.end_x
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    pub fn color_at(&self, item: &I, distance: f32) -> Color {
        (self.color)(item, distance)
    }

    /// Fires the commit action, if the step has one.
    pub fn invoke(&self, item: &I) {
        if let Some(action) = &self.action {
            action(item);
        }
    }
}

impl<I: SwipeItem> Step<I> {
    /// Icon at `distance`, with bounds clipped to the revealed region.
    ///
    /// Returns `None` when the step has no icon, the provider declines, or
    /// nothing of the icon would be visible.
    pub fn bounded_icon(&self, item: &I, distance: f32, heading: Heading) -> Option<(Icon, Rect)> {
        let provider = self.icon.as_ref()?;
        let (icon, bounds) = provider(item, distance, heading)?;
        let revealed = revealed_region(item.bounds(), distance, heading);
        let clipped = bounds.intersect(&revealed)?;
        Some((icon, clipped))
    }
}

impl<I> Clone for Step<I> {
    fn clone(&self) -> Self {
        Self {
            end_x: self.end_x,
            action: self.action.clone(),
            color: Rc::clone(&self.color),
            icon: self.icon.clone(),
        }
    }
}

impl<I> fmt::Debug for Step<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("end_x", &self.end_x)
            .field("has_action", &self.action.is_some())
            .field("has_icon", &self.icon.is_some())
            .finish()
    }
}
