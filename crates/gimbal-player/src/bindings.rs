// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Named actions mapped to physical keys.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Action names bound by [`KeyBindings::default`].
pub mod actions {
    /// Move along local `+Z`.
    pub const FORWARD: &str = "Forward";
    /// Move along local `-Z`.
    pub const BACKWARDS: &str = "Backwards";
    /// Strafe along local `+X`.
    pub const RIGHT: &str = "Right";
    /// Strafe along local `-X`.
    pub const LEFT: &str = "Left";
    /// Jump while grounded.
    pub const JUMP: &str = "Jump";
    /// Primary mouse button.
    pub const LEFT_MOUSE: &str = "LeftMouse";
    /// Secondary mouse button.
    pub const RIGHT_MOUSE: &str = "RightMouse";
}

/// Attempts [`KeyBindings::rebind`] makes before giving up.
pub const DEFAULT_REBIND_ATTEMPTS: usize = 2000;

/// Opaque physical key name as reported by the host (`"W"`, `"Space"`, `"Mouse0"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(Cow<'static, str>);

impl Key {
    /// No key. Actions bound to it never fire.
    pub const NONE: Self = Self::from_static("None");
    /// `W`.
    pub const W: Self = Self::from_static("W");
    /// `A`.
    pub const A: Self = Self::from_static("A");
    /// `S`.
    pub const S: Self = Self::from_static("S");
    /// `D`.
    pub const D: Self = Self::from_static("D");
    /// Space bar.
    pub const SPACE: Self = Self::from_static("Space");
    /// Primary mouse button.
    pub const MOUSE0: Self = Self::from_static("Mouse0");
    /// Secondary mouse button.
    pub const MOUSE1: Self = Self::from_static("Mouse1");

    /// Key with a compile-time name.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Key with an arbitrary host-supplied name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// The key name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` for [`Key::NONE`].
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors from editing a [`KeyBindings`] table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// `add` was called for an action that already has a binding.
    #[error("{action} is already bound")]
    AlreadyBound {
        /// Offending action.
        action: String,
    },
    /// The action has no binding to edit.
    #[error("{action} is not bound")]
    UnknownAction {
        /// Offending action.
        action: String,
    },
}

/// Result of a successful [`KeyBindings::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The key was free.
    Added,
    /// The key was already bound to another action; both now share it.
    KeyOverlap,
}

/// Action → key table.
///
/// Serialises as a JSON object (`{"Forward": "W", ...}`) ordered by action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings {
    binds: BTreeMap<String, Key>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let binds = [
            (actions::FORWARD, Key::W),
            (actions::BACKWARDS, Key::S),
            (actions::RIGHT, Key::D),
            (actions::LEFT, Key::A),
            (actions::JUMP, Key::SPACE),
            (actions::LEFT_MOUSE, Key::MOUSE0),
            (actions::RIGHT_MOUSE, Key::MOUSE1),
        ]
        .into_iter()
        .map(|(action, key)| (action.to_owned(), key))
        .collect();
        Self { binds }
    }
}

impl KeyBindings {
    /// Table with no bindings at all.
    pub fn empty() -> Self {
        Self {
            binds: BTreeMap::new(),
        }
    }

    /// Binds a new action.
    ///
    /// Fails when `action` is already bound. Reusing a key that another action
    /// holds is allowed but reported as [`AddOutcome::KeyOverlap`].
    pub fn add(&mut self, action: impl Into<String>, key: Key) -> Result<AddOutcome, BindingError> {
        let action = action.into();
        if self.binds.contains_key(&action) {
            return Err(BindingError::AlreadyBound { action });
        }
        let outcome = if !key.is_none() && self.is_key_used(&key) {
            warn!(%action, %key, "key already bound; overlapping bindings fire together");
            AddOutcome::KeyOverlap
        } else {
            AddOutcome::Added
        };
        self.binds.insert(action, key);
        Ok(outcome)
    }

    /// Changes the key of an existing action.
    pub fn edit(&mut self, action: &str, key: Key) -> Result<(), BindingError> {
        match self.binds.get_mut(action) {
            Some(slot) => {
                *slot = key;
                Ok(())
            }
            None => Err(BindingError::UnknownAction {
                action: action.to_owned(),
            }),
        }
    }

    /// Key bound to `action`, or [`Key::NONE`] when the action is unknown.
    pub fn key_for(&self, action: &str) -> Key {
        self.binds.get(action).cloned().unwrap_or(Key::NONE)
    }

    /// Borrowing lookup; `None` when the action is unknown.
    pub fn get(&self, action: &str) -> Option<&Key> {
        self.binds.get(action)
    }

    /// `true` when any action is bound to `key`.
    pub fn is_key_used(&self, key: &Key) -> bool {
        self.binds.values().any(|bound| bound == key)
    }

    /// Rebinds `action` to the first key `poll` reports.
    ///
    /// `poll` is called at most `max_attempts` times; it returns `None` while
    /// nothing is pressed. When the budget runs out the action is bound to
    /// [`Key::NONE`]. Returns the key that was stored.
    pub fn rebind_from_poll<F>(
        &mut self,
        action: &str,
        mut poll: F,
        max_attempts: usize,
    ) -> Result<Key, BindingError>
    where
        F: FnMut() -> Option<Key>,
    {
        if !self.binds.contains_key(action) {
            return Err(BindingError::UnknownAction {
                action: action.to_owned(),
            });
        }
        let key = (0..max_attempts)
            .find_map(|_| poll().filter(|k| !k.is_none()))
            .unwrap_or(Key::NONE);
        debug!(%action, %key, "rebound");
        self.edit(action, key.clone())?;
        Ok(key)
    }

    /// [`KeyBindings::rebind_from_poll`] with [`DEFAULT_REBIND_ATTEMPTS`].
    pub fn rebind<F>(&mut self, action: &str, poll: F) -> Result<Key, BindingError>
    where
        F: FnMut() -> Option<Key>,
    {
        self.rebind_from_poll(action, poll, DEFAULT_REBIND_ATTEMPTS)
    }

    /// `(action, key)` pairs in action order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Key)> {
        self.binds.iter().map(|(action, key)| (action.as_str(), key))
    }

    /// Number of bound actions.
    pub fn len(&self) -> usize {
        self.binds.len()
    }

    /// `true` when no action is bound.
    pub fn is_empty(&self) -> bool {
        self.binds.is_empty()
    }
}
