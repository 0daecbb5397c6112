// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mouse look: yaw turns the body, pitch tilts the camera.

use gimbal_math::{clamp, normalize_degrees, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Mouse-look tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookConfig {
    /// Turn left when the mouse moves right.
    pub invert_x: bool,
    /// Look up when the mouse moves down.
    pub invert_y: bool,
    /// Lowest pitch in degrees (negative looks up).
    pub min_pitch: f32,
    /// Highest pitch in degrees (positive looks down).
    pub max_pitch: f32,
    /// Degrees per unit of mouse delta.
    pub sensitivity: f32,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            invert_x: false,
            invert_y: false,
            min_pitch: -90.0,
            max_pitch: 60.0,
            sensitivity: 1.0,
        }
    }
}

/// Orientation produced by one [`LookController::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookPose {
    /// Yaw-only rotation for the body.
    pub body: Quat,
    /// Pitch-only rotation for the camera, relative to the body.
    pub camera: Quat,
    /// `(pitch, yaw, 0)` in degrees.
    pub total_euler: Vec3,
    /// Combined view rotation, `body * camera`.
    pub total: Quat,
}

/// Accumulates mouse deltas into yaw and clamped pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookController {
    config: LookConfig,
    yaw: f32,
    pitch: f32,
}

impl LookController {
    /// Controller facing `+Z` with a level camera.
    ///
    /// An inverted pitch range (`min_pitch > max_pitch`) is swapped.
    pub fn new(mut config: LookConfig) -> Self {
        if config.min_pitch > config.max_pitch {
            std::mem::swap(&mut config.min_pitch, &mut config.max_pitch);
        }
        Self {
            config,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Active tuning.
    pub const fn config(&self) -> &LookConfig {
        &self.config
    }

    /// Accumulated yaw in degrees, `[0, 360)`.
    pub const fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Accumulated pitch in degrees, within `[min_pitch, max_pitch]`.
    pub const fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Feeds one frame of mouse motion and returns the resulting pose.
    pub fn update(&mut self, mouse_dx: f32, mouse_dy: f32) -> LookPose {
        let LookConfig {
            invert_x,
            invert_y,
            min_pitch,
            max_pitch,
            sensitivity,
        } = self.config;
        let dx = mouse_dx * sensitivity;
        let dy = mouse_dy * sensitivity;

        self.yaw = normalize_degrees(self.yaw + if invert_x { -dx } else { dx });
        self.pitch = clamp(
            self.pitch + if invert_y { dy } else { -dy },
            min_pitch,
            max_pitch,
        );
        self.pose()
    }

    /// Pose for the current yaw and pitch.
    pub fn pose(&self) -> LookPose {
        let total_euler = Vec3::new(self.pitch, self.yaw, 0.0);
        LookPose {
            body: Quat::euler(0.0, self.yaw, 0.0),
            camera: Quat::euler(self.pitch, 0.0, 0.0),
            total_euler,
            total: Quat::from_euler(total_euler),
        }
    }

    /// Faces `+Z` again with a level camera.
    pub fn reset(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }
}
