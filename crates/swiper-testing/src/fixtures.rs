//! Stand-ins for the host list widget: items, a settle recorder and an
//! action log.

use std::cell::RefCell;
use std::rc::Rc;

use swiper_core::{ItemKey, SwipeHost, SwipeItem};
use swiper_graphics::Rect;

/// A list row with a fixed rect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TestItem {
    pub key: ItemKey,
    pub bounds: Rect,
}

impl TestItem {
    pub fn new(key: ItemKey, bounds: Rect) -> Self {
        Self { key, bounds }
    }

    /// Row `index` of a list whose rows are `width` x `height`, stacked from
    /// the top of the viewport. The key equals the index.
    pub fn row(index: u64, width: f32, height: f32) -> Self {
        Self {
            key: index,
            bounds: Rect::new(0.0, index as f32 * height, width, height),
        }
    }
}

impl SwipeItem for TestItem {
    fn key(&self) -> ItemKey {
        self.key
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

/// Host that remembers which items it was asked to settle.
#[derive(Debug, Default)]
pub struct RecordingHost {
    settled: Vec<ItemKey>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settled(&self) -> &[ItemKey] {
        &self.settled
    }
}

impl SwipeHost for RecordingHost {
    fn settle(&mut self, key: ItemKey) {
        self.settled.push(key);
    }
}

/// Shared log of fired step actions as `(item key, label)` pairs.
#[derive(Clone, Debug, Default)]
pub struct ActionLog {
    entries: Rc<RefCell<Vec<(ItemKey, &'static str)>>>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step action that appends `label` for the item it fires on.
    pub fn recorder(&self, label: &'static str) -> impl Fn(&TestItem) + 'static {
        let entries = Rc::clone(&self.entries);
        move |item: &TestItem| entries.borrow_mut().push((item.key, label))
    }

    pub fn entries(&self) -> Vec<(ItemKey, &'static str)> {
        self.entries.borrow().clone()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.borrow().iter().map(|(_, label)| *label).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}
