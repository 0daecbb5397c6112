// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Walking, strafing and jumping for a player [`Body`].
//!
//! The controller moves the transform directly and only adjusts the vertical
//! velocity; integrating velocity and resolving collisions stays with the
//! host's physics.

use gimbal_math::Vec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bindings::actions;
use crate::input::Buttons;
use crate::transform::Body;

/// Standard gravity along `Y`, used when [`MovementConfig::gravity`] is unset.
pub const DEFAULT_GRAVITY: f32 = -9.81;

/// Movement tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Walk speed in meters per second.
    pub speed: f32,
    /// Upward velocity set by a jump.
    pub jump_velocity: f32,
    /// Extra gravity factor while falling.
    pub fall_multiplier: f32,
    /// Extra gravity factor while rising with jump released.
    pub low_jump_multiplier: f32,
    /// Vertical gravity; `None` uses [`DEFAULT_GRAVITY`].
    pub gravity: Option<f32>,
    /// Ground distance below which the body counts as grounded.
    pub grounded_distance: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 3.0,
            jump_velocity: 6.0,
            fall_multiplier: 2.5,
            low_jump_multiplier: 2.0,
            gravity: None,
            grounded_distance: 0.01,
        }
    }
}

impl MovementConfig {
    /// Effective vertical gravity.
    pub fn gravity(&self) -> f32 {
        self.gravity.unwrap_or(DEFAULT_GRAVITY)
    }
}

/// Movement intents for one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementInput {
    /// Move along local `+Z`.
    pub forward: bool,
    /// Move along local `-Z`.
    pub back: bool,
    /// Strafe along local `-X`.
    pub left: bool,
    /// Strafe along local `+X`.
    pub right: bool,
    /// Jump is held.
    pub jump: bool,
}

impl MovementInput {
    /// Reads the standard movement actions from `buttons`.
    pub fn from_buttons(buttons: &Buttons<'_>) -> Self {
        Self {
            forward: buttons.held(actions::FORWARD),
            back: buttons.held(actions::BACKWARDS),
            left: buttons.held(actions::LEFT),
            right: buttons.held(actions::RIGHT),
            jump: buttons.held(actions::JUMP),
        }
    }
}

/// What one [`MovementController::step`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    /// World-space offset applied to the transform.
    pub translation: Vec3,
    /// Whether the body was on the ground this step.
    pub grounded: bool,
    /// Whether a jump started this step.
    pub jumped: bool,
}

/// Applies [`MovementConfig`] to a [`Body`] once per step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementController {
    config: MovementConfig,
    grounded: bool,
}

impl MovementController {
    /// Controller with the given tuning.
    pub const fn new(config: MovementConfig) -> Self {
        Self {
            config,
            grounded: false,
        }
    }

    /// Active tuning.
    pub const fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Grounded state seen by the last step.
    pub const fn grounded(&self) -> bool {
        self.grounded
    }

    /// `true` when `ground_hit` (distance to the ground below, `None` when
    /// nothing is below) is under [`MovementConfig::grounded_distance`].
    pub fn is_grounded(&self, ground_hit: Option<f32>) -> bool {
        ground_hit.is_some_and(|distance| distance < self.config.grounded_distance)
    }

    /// Advances the body by `dt` seconds.
    ///
    /// Order: translate along the pressed local axes, scale gravity for a
    /// snappier fall (and a shorter hop when jump is released early), then
    /// start a jump if jump is held on the ground.
    pub fn step(
        &mut self,
        body: &mut Body,
        input: MovementInput,
        dt: f32,
        ground_hit: Option<f32>,
    ) -> StepReport {
        let MovementConfig {
            speed,
            jump_velocity,
            fall_multiplier,
            low_jump_multiplier,
            ..
        } = self.config;
        let gravity = self.config.gravity();

        let mut local = Vec3::ZERO;
        if input.forward {
            local += Vec3::FORWARD;
        }
        if input.back {
            local -= Vec3::FORWARD;
        }
        if input.left {
            local -= Vec3::RIGHT;
        }
        if input.right {
            local += Vec3::RIGHT;
        }
        let translation = body.transform.translate_local(local * (speed * dt));

        let mut velocity = body.velocity;
        if velocity.y() < 0.0 {
            velocity += Vec3::UP * (gravity * (fall_multiplier - 1.0) * dt);
        } else if velocity.y() > 0.0 && !input.jump {
            velocity += Vec3::UP * (gravity * (low_jump_multiplier - 1.0) * dt);
        }

        let grounded = self.is_grounded(ground_hit);
        if grounded != self.grounded {
            debug!(grounded, "ground contact changed");
        }
        self.grounded = grounded;

        let jumped = input.jump && grounded;
        if jumped {
            velocity = Vec3::new(velocity.x(), jump_velocity, velocity.z());
            debug!(jump_velocity, "jump");
        }
        body.velocity = velocity;

        StepReport {
            translation,
            grounded,
            jumped,
        }
    }

    /// Forgets the grounded state.
    pub fn reset(&mut self) {
        self.grounded = false;
    }
}
