// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pointer visibility and confinement flags.
//!
//! The host mirrors these onto its window after each change.

use tracing::debug;

/// Cursor `hidden` / `locked` flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorState {
    hidden: bool,
    locked: bool,
}

impl CursorState {
    /// Visible and free.
    pub const fn new() -> Self {
        Self {
            hidden: false,
            locked: false,
        }
    }

    /// Hidden and locked, the state play starts in.
    pub const fn captured() -> Self {
        Self {
            hidden: true,
            locked: true,
        }
    }

    /// Is the pointer hidden?
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Is the pointer locked to the window?
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Flips visibility.
    pub fn toggle_hidden(&mut self) {
        self.hidden = !self.hidden;
        debug!(hidden = self.hidden, "cursor visibility toggled");
    }

    /// Hides the pointer.
    pub fn hide(&mut self) {
        self.hidden = true;
    }

    /// Shows the pointer.
    pub fn show(&mut self) {
        self.hidden = false;
    }

    /// Flips the lock.
    pub fn toggle_locked(&mut self) {
        self.locked = !self.locked;
        debug!(locked = self.locked, "cursor lock toggled");
    }

    /// Locks the pointer.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Unlocks the pointer.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Flips both flags.
    pub fn toggle_hidden_and_locked(&mut self) {
        self.toggle_hidden();
        self.toggle_locked();
    }
}
