//! A small inbox list wired to a [`Swiper`]: swipe left to archive or
//! delete, swipe right to toggle read.

use std::cell::RefCell;
use std::rc::Rc;

use swiper_core::visuals::{leading_icon, ramp};
use swiper_core::{ConfigError, ItemKey, Step, SwipeItem, Swiper};
use swiper_graphics::{Color, Dp, Icon, IconId, Rect, Size};

pub const ROW_WIDTH: Dp = Dp(360.0);
pub const ROW_HEIGHT: Dp = Dp(72.0);
const ICON_SIZE: Dp = Dp(24.0);
const ICON_MARGIN: Dp = Dp(16.0);

pub const ARCHIVE_ICON: IconId = IconId(1);
pub const DELETE_ICON: IconId = IconId(2);
pub const READ_ICON: IconId = IconId(3);

const ARCHIVE_GREEN: Color = Color::from_argb(0xFF_2E_7D_32);
const DELETE_RED: Color = Color::from_argb(0xFF_C6_28_28);
const READ_BLUE: Color = Color::from_argb(0xFF_15_65_C0);

#[derive(Clone, Debug)]
pub struct Message {
    pub id: ItemKey,
    pub subject: String,
    pub read: bool,
    pub archived: bool,
}

/// A message row as laid out on screen.
pub struct MessageRow {
    pub id: ItemKey,
    pub bounds: Rect,
}

impl SwipeItem for MessageRow {
    fn key(&self) -> ItemKey {
        self.id
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

/// Messages shared between the list and the step actions.
#[derive(Clone)]
pub struct Inbox {
    messages: Rc<RefCell<Vec<Message>>>,
}

impl Inbox {
    pub fn with_subjects(subjects: &[&str]) -> Self {
        let messages = subjects
            .iter()
            .enumerate()
            .map(|(index, subject)| Message {
                id: index as ItemKey,
                subject: (*subject).to_string(),
                read: false,
                archived: false,
            })
            .collect();
        Self {
            messages: Rc::new(RefCell::new(messages)),
        }
    }

    pub fn messages(&self) -> Vec<Message> {
        self.messages.borrow().clone()
    }

    /// Rows of the visible (non-archived) messages, top to bottom.
    pub fn rows(&self, density: f32) -> Vec<MessageRow> {
        let width = ROW_WIDTH.to_px(density);
        let height = ROW_HEIGHT.to_px(density);
        self.messages
            .borrow()
            .iter()
            .filter(|message| !message.archived)
            .enumerate()
            .map(|(index, message)| MessageRow {
                id: message.id,
                bounds: Rect::new(0.0, index as f32 * height, width, height),
            })
            .collect()
    }

    fn update(&self, id: ItemKey, change: impl FnOnce(&mut Vec<Message>, usize)) {
        let mut messages = self.messages.borrow_mut();
        if let Some(index) = messages.iter().position(|message| message.id == id) {
            change(&mut *messages, index);
        }
    }

    fn archive(&self, id: ItemKey) {
        self.update(id, |messages, index| messages[index].archived = true);
    }

    fn delete(&self, id: ItemKey) {
        self.update(id, |messages, index| {
            messages.remove(index);
        });
    }

    fn toggle_read(&self, id: ItemKey) {
        self.update(id, |messages, index| {
            messages[index].read = !messages[index].read
        });
    }
}

fn icon(id: IconId, density: f32) -> Icon {
    let side = ICON_SIZE.to_px(density);
    Icon::new(id, Size::new(side, side)).with_tint(Color::WHITE)
}

/// Builds the swiper for `inbox` at the given screen density.
///
/// Travelling left reveals archive (first third of the row) then delete;
/// travelling right reveals a single toggle-read step.
pub fn build_swiper(inbox: &Inbox, density: f32) -> Result<Swiper<MessageRow>, ConfigError> {
    let row_width = ROW_WIDTH.to_px(density);
    let margin = ICON_MARGIN.to_px(density);
    let archive_end = row_width / 3.0;
    let delete_end = row_width * 2.0 / 3.0;

    let mut swiper = Swiper::<MessageRow>::new();
    let archive = inbox.clone();
    let delete = inbox.clone();
    swiper.right_leaving(|dir| {
        dir.set_friction(0.8);
        dir.push(
            Step::new(archive_end)
                .color_fn(ramp::<MessageRow>(Color::WHITE, ARCHIVE_GREEN, 0.0, archive_end))
                .icon(leading_icon::<MessageRow>(icon(ARCHIVE_ICON, density), margin))
                .action(move |row| archive.archive(row.id)),
        )?;
        dir.push(
            Step::new(delete_end)
                .color(DELETE_RED)
                .icon(leading_icon::<MessageRow>(icon(DELETE_ICON, density), margin))
                .action(move |row| delete.delete(row.id)),
        )?;
        dir.set_threshold(archive_end * 0.75)?;
        Ok(())
    })?;

    let read_end = row_width / 4.0;
    let read = inbox.clone();
    swiper.left_leaving(|dir| {
        dir.set_friction(0.5);
        dir.push(
            Step::new(read_end)
                .color(READ_BLUE)
                .icon(leading_icon::<MessageRow>(icon(READ_ICON, density), margin))
                .action(move |row| read.toggle_read(row.id)),
        )?;
        dir.set_threshold(read_end * 0.75)?;
        Ok(())
    })?;

    Ok(swiper)
}
