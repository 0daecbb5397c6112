// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-frame button state resolved through [`KeyBindings`].

use std::collections::BTreeSet;

use crate::bindings::{Key, KeyBindings};

/// Keys the host saw during one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Keys down at the end of the frame.
    pub held: BTreeSet<Key>,
    /// Keys that went down this frame.
    pub pressed: BTreeSet<Key>,
    /// Keys that went up this frame.
    pub released: BTreeSet<Key>,
}

impl InputSnapshot {
    /// Snapshot with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key` to the held set.
    pub fn with_held(mut self, key: Key) -> Self {
        self.held.insert(key);
        self
    }

    /// Adds `key` to the pressed set and, as it is now down, the held set.
    pub fn with_pressed(mut self, key: Key) -> Self {
        self.held.insert(key.clone());
        self.pressed.insert(key);
        self
    }

    /// Adds `key` to the released set.
    pub fn with_released(mut self, key: Key) -> Self {
        self.released.insert(key);
        self
    }
}

/// Action-level view of an [`InputSnapshot`].
///
/// Every query is `false` for an unknown action or one bound to [`Key::NONE`].
#[derive(Debug, Clone, Copy)]
pub struct Buttons<'a> {
    bindings: &'a KeyBindings,
    snapshot: &'a InputSnapshot,
}

impl<'a> Buttons<'a> {
    /// Resolves `snapshot` through `bindings`.
    pub fn new(bindings: &'a KeyBindings, snapshot: &'a InputSnapshot) -> Self {
        Self { bindings, snapshot }
    }

    /// Is the action's key down?
    pub fn held(&self, action: &str) -> bool {
        self.query(action, &self.snapshot.held)
    }

    /// Did the action's key go down this frame?
    pub fn pressed(&self, action: &str) -> bool {
        self.query(action, &self.snapshot.pressed)
    }

    /// Did the action's key go up this frame?
    pub fn released(&self, action: &str) -> bool {
        self.query(action, &self.snapshot.released)
    }

    fn query(&self, action: &str, keys: &BTreeSet<Key>) -> bool {
        self.bindings
            .get(action)
            .is_some_and(|key| !key.is_none() && keys.contains(key))
    }
}
