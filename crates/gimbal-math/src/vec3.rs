// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;

use bytemuck::{Pod, Zeroable};

use crate::Vec2;

/// 3D point or direction.
///
/// * Components are plain `f32`; whether a value is a point or a direction is
///   up to the caller.
/// * [`Vec3::xy`] is a copy of the first two components, not a reference into
///   the vector; write back through [`Vec3::set_xy`].
/// * Rotate with [`crate::Quat::rotate`] (or `quat * vec`).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Vec3 {
    data: [f32; 3],
}

const _: () = assert!(std::mem::size_of::<Vec3>() == 12);

impl_vector_common!(Vec3, 3);

impl Vec3 {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// `(1, 1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// `(0, 1, 0)`.
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    /// `(0, -1, 0)`.
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    /// `(-1, 0, 0)`.
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    /// `(1, 0, 0)`.
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    /// `(0, 0, 1)`, the local look direction.
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    /// `(0, 0, -1)`.
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::RIGHT;
    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::UP;
    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::FORWARD;

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Builds a vector from an `xy` pair and a `z` component.
    pub fn from_xy(xy: Vec2, z: f32) -> Self {
        Self::new(xy.x(), xy.y(), z)
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// Copy of the `(x, y)` components.
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x(), self.y())
    }

    /// Overwrites `x` and `y` from `xy`, leaving `z`.
    pub fn set_xy(&mut self, xy: Vec2) {
        self.data[0] = xy.x();
        self.data[1] = xy.y();
    }

    /// Cross product with another vector (right-handed).
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Returns the vector scaled by `1 / length`.
    ///
    /// The zero vector is not special-cased: its components come back NaN.
    /// Guard with [`Vec3::length_squared`] when zero input is possible.
    pub fn normalize(&self) -> Self {
        self.scale(1.0 / self.length())
    }

    /// In-place form of [`Vec3::normalize`].
    pub fn normalize_in_place(&mut self) {
        *self = self.normalize();
    }
}

impl From<Vec2> for Vec3 {
    fn from(value: Vec2) -> Self {
        Self::from_xy(value, 0.0)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Z:{}", self.xy(), self.z())
    }
}
