// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::{info, instrument};

use crate::bindings::KeyBindings;
use crate::config::PlayerConfig;
use crate::cursor::CursorState;
use crate::input::{Buttons, InputSnapshot};
use crate::look::{LookController, LookPose};
use crate::movement::{MovementController, MovementInput, StepReport};
use crate::transform::Body;

/// Host input for one simulation tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Horizontal mouse delta.
    pub mouse_dx: f32,
    /// Vertical mouse delta.
    pub mouse_dy: f32,
    /// Keys seen this tick.
    pub keys: InputSnapshot,
    /// Tick length in seconds.
    pub dt: f32,
    /// Distance to the ground straight below, `None` when nothing is hit.
    pub ground_hit: Option<f32>,
}

/// Outputs of [`PlayerContext::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Look state after this tick's mouse motion; `look.camera` is the
    /// camera rotation relative to the body.
    pub look: LookPose,
    /// Movement applied to the body.
    pub step: StepReport,
}

/// All player state for one session.
///
/// Created explicitly from a [`PlayerConfig`] and cleared with
/// [`PlayerContext::reset`]; nothing is global.
#[derive(Debug, Clone)]
pub struct PlayerContext {
    config: PlayerConfig,
    bindings: KeyBindings,
    cursor: CursorState,
    look: LookController,
    movement: MovementController,
}

impl PlayerContext {
    /// Builds a context with the pointer captured for play.
    pub fn init(config: PlayerConfig) -> Self {
        info!(bindings = config.bindings.len(), "player context initialised");
        Self {
            bindings: config.bindings.clone(),
            cursor: CursorState::captured(),
            look: LookController::new(config.look),
            movement: MovementController::new(config.movement),
            config,
        }
    }

    /// Restores bindings, cursor, look and movement state from the config.
    pub fn reset(&mut self) {
        info!("player context reset");
        *self = Self {
            bindings: self.config.bindings.clone(),
            cursor: CursorState::captured(),
            look: LookController::new(self.config.look),
            movement: MovementController::new(self.config.movement),
            config: self.config.clone(),
        };
    }

    /// Settings the context was built from.
    pub const fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Live bindings.
    pub const fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Live bindings, for rebinding during play.
    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Cursor flags.
    pub const fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    /// Cursor flags, for pause menus and the like.
    pub fn cursor_mut(&mut self) -> &mut CursorState {
        &mut self.cursor
    }

    /// Look state.
    pub const fn look(&self) -> &LookController {
        &self.look
    }

    /// New body at the configured spawn transform.
    pub fn spawn_body(&self) -> Body {
        Body::at(self.config.spawn)
    }

    /// Runs look then movement for one tick.
    ///
    /// The body's rotation is replaced by the look yaw before moving, so
    /// "forward" follows the mouse.
    #[instrument(level = "trace", skip(self, frame, body), fields(dt = frame.dt))]
    pub fn tick(&mut self, frame: &FrameInput, body: &mut Body) -> TickReport {
        let look = self.look.update(frame.mouse_dx, frame.mouse_dy);
        body.transform.set_rotation(look.body);

        let buttons = Buttons::new(&self.bindings, &frame.keys);
        let input = MovementInput::from_buttons(&buttons);
        let step = self.movement.step(body, input, frame.dt, frame.ground_hit);

        TickReport { look, step }
    }

    /// Moves `body` back to the spawn transform and stops it.
    pub fn respawn(&self, body: &mut Body) {
        *body = self.spawn_body();
    }
}
