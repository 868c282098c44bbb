//! Per-item gesture state, owned by the controller rather than the view.

use rustc_hash::FxHashMap;

use crate::host::ItemKey;

/// State of one item's drag, from its first active frame until release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    key: ItemKey,
    signed_position: f32,
}

impl GestureSession {
    pub fn new(key: ItemKey) -> Self {
        Self {
            key,
            signed_position: 0.0,
        }
    }

    pub fn key(&self) -> ItemKey {
        self.key
    }

    /// Damped, signed offset of the latest active frame.
    pub fn signed_position(&self) -> f32 {
        self.signed_position
    }

    pub fn record(&mut self, signed_position: f32) {
        self.signed_position = signed_position;
    }
}

/// Live sessions keyed by item.
#[derive(Debug, Default)]
pub struct GestureSessions {
    sessions: FxHashMap<ItemKey, GestureSession>,
}

impl GestureSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session for `key`, starting one if the item had none.
    pub fn begin(&mut self, key: ItemKey) -> &mut GestureSession {
        self.sessions
            .entry(key)
            .or_insert_with(|| GestureSession::new(key))
    }

    pub fn get(&self, key: ItemKey) -> Option<&GestureSession> {
        self.sessions.get(&key)
    }

    /// Ends the session of `key`, returning its final state.
    pub fn end(&mut self, key: ItemKey) -> Option<GestureSession> {
        self.sessions.remove(&key)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Ends every session at once.
    pub fn clear(&mut self) {
        self.sessions.clear();
    }
}
