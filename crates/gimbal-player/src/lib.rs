// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! gimbal-player: first-person player state driven by [`gimbal_math`].
//!
//! Everything here is plain owned state. The host polls its devices, hands a
//! [`FrameInput`] to [`PlayerContext::tick`] once per simulation step, and
//! applies the returned rotations and translation to its own scene objects.
//! Nothing in this crate talks to a window system or a physics engine.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::module_name_repetitions
)]

pub mod bindings;
pub mod config;
mod context;
pub mod cursor;
pub mod input;
pub mod look;
pub mod movement;
mod transform;

pub use bindings::{actions, AddOutcome, BindingError, Key, KeyBindings};
pub use config::{ConfigError, ConfigService, ConfigStore, MemoryConfigStore, PlayerConfig};
pub use context::{FrameInput, PlayerContext, TickReport};
pub use cursor::CursorState;
pub use input::{Buttons, InputSnapshot};
pub use look::{LookConfig, LookController, LookPose};
pub use movement::{MovementConfig, MovementController, MovementInput, StepReport};
pub use transform::{Body, Transform};
