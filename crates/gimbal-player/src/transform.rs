// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use gimbal_math::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Rigid transform placing the player in the world.
///
/// Conventions:
/// - `translation` in meters (world space).
/// - `rotation` is kept unit length; every mutator renormalises.
/// - Local axes: `+X` right, `+Y` up, `+Z` forward.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    translation: Vec3,
    rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Identity transform (origin, no rotation).
    pub const fn identity() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }

    /// Creates a transform from components; `rotation` is normalised.
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation: rotation.normalize(),
        }
    }

    /// Translation component.
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Rotation component.
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Replaces the translation.
    pub fn set_translation(&mut self, translation: Vec3) {
        self.translation = translation;
    }

    /// Replaces the rotation.
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation.normalize();
    }

    /// Moves by `delta` expressed in local axes; returns the world-space offset.
    pub fn translate_local(&mut self, delta: Vec3) -> Vec3 {
        let world = self.rotation.rotate(&delta);
        self.translation += world;
        world
    }

    /// Moves by `delta` in world space.
    pub fn translate_world(&mut self, delta: Vec3) {
        self.translation += delta;
    }

    /// Applies an Euler rotation (degrees) about the local axes.
    pub fn rotate_euler(&mut self, angles: Vec3) {
        self.rotation = self.rotation.multiply(&Quat::from_euler(angles)).normalize();
    }

    /// Orientation as Euler angles in degrees, each in `[0, 360)`.
    pub fn euler_angles(&self) -> Vec3 {
        self.rotation.euler_angles()
    }

    /// Replaces the rotation with one built from Euler angles (degrees).
    pub fn set_euler_angles(&mut self, angles: Vec3) {
        self.rotation = Quat::from_euler(angles);
    }

    /// World direction of local `+Z`.
    pub fn forward(&self) -> Vec3 {
        self.rotation.rotate(&Vec3::FORWARD)
    }

    /// World direction of local `+X`.
    pub fn right(&self) -> Vec3 {
        self.rotation.rotate(&Vec3::RIGHT)
    }

    /// World direction of local `+Y`.
    pub fn up(&self) -> Vec3 {
        self.rotation.rotate(&Vec3::UP)
    }

    /// Maps a local point to world space (`R * p + T`).
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation.rotate(&point) + self.translation
    }
}

/// A transform plus the linear velocity the host's physics integrates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Body {
    /// Placement in the world.
    pub transform: Transform,
    /// Linear velocity in meters per second.
    pub velocity: Vec3,
}

impl Body {
    /// Body at rest at `transform`.
    pub fn at(transform: Transform) -> Self {
        Self {
            transform,
            velocity: Vec3::ZERO,
        }
    }
}
