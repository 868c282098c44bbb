//! Narrow contracts towards the host list widget.

use swiper_graphics::Rect;

/// Stable identity of a list item, independent of the view currently
/// showing it.
pub type ItemKey = u64;

/// A list item as the gesture core sees it.
pub trait SwipeItem {
    fn key(&self) -> ItemKey;

    /// On-screen rect of the item at rest, in the draw scope's coordinates.
    fn bounds(&self) -> Rect;

    fn width(&self) -> f32 {
        self.bounds().width
    }
}

/// Callbacks sent back to the host list widget.
pub trait SwipeHost {
    /// Asks the list to rebind `key` so its view settles back to rest.
    fn settle(&mut self, key: ItemKey);
}

impl<F> SwipeHost for F
where
    F: FnMut(ItemKey),
{
    fn settle(&mut self, key: ItemKey) {
        self(key)
    }
}

/// Gesture state the host widget is in when it asks for a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActionState {
    #[default]
    Idle,
    Swipe,
    Drag,
}

/// One per-frame draw request from the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChildDrawEvent {
    /// Raw horizontal displacement the host would apply without damping.
    pub dx: f32,
    /// Vertical displacement, passed through untouched.
    pub dy: f32,
    pub action_state: ActionState,
    /// False for settle and replay frames after the finger lifted.
    pub is_currently_active: bool,
}

impl ChildDrawEvent {
    /// Frame of an item the user is dragging right now.
    pub fn active(dx: f32) -> Self {
        Self {
            dx,
            dy: 0.0,
            action_state: ActionState::Swipe,
            is_currently_active: true,
        }
    }

    /// Frame of an item animating back after release.
    pub fn settling(dx: f32) -> Self {
        Self {
            is_currently_active: false,
            ..Self::active(dx)
        }
    }

    pub fn with_dy(mut self, dy: f32) -> Self {
        self.dy = dy;
        self
    }

    pub fn with_action_state(mut self, action_state: ActionState) -> Self {
        self.action_state = action_state;
        self
    }
}
