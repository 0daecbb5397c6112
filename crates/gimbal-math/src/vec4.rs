// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;

use bytemuck::{Pod, Zeroable};

use crate::{scalar, Vec2, Vec3, VECTOR_EPSILON};

/// Homogeneous 4D value.
///
/// Used both as a generic 4-tuple for blending and as an `{axis, w}` pair.
/// Unlike [`Vec2`]/[`Vec3`], normalisation is guarded: anything with length
/// ≤ [`VECTOR_EPSILON`] normalises to [`Vec4::ZERO`].
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Vec4 {
    data: [f32; 4],
}

const _: () = assert!(std::mem::size_of::<Vec4>() == 16);

impl_vector_common!(Vec4, 4);

impl Vec4 {
    /// `(0, 0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// `(1, 1, 1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// All components `+∞`.
    pub const POSITIVE_INFINITY: Self =
        Self::new(f32::INFINITY, f32::INFINITY, f32::INFINITY, f32::INFINITY);
    /// All components `-∞`.
    pub const NEGATIVE_INFINITY: Self = Self::new(
        f32::NEG_INFINITY,
        f32::NEG_INFINITY,
        f32::NEG_INFINITY,
        f32::NEG_INFINITY,
    );

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Builds a vector from an `xyz` triple and a `w` component.
    pub fn from_xyz(xyz: Vec3, w: f32) -> Self {
        Self::new(xyz.x(), xyz.y(), xyz.z(), w)
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

    /// W component.
    pub fn w(&self) -> f32 {
        self.data[3]
    }

    /// Copy of the `(x, y, z)` components (drops `w`).
    pub fn xyz(&self) -> Vec3 {
        Vec3::new(self.x(), self.y(), self.z())
    }

    /// Overwrites `x`, `y`, `z` from `xyz`, leaving `w`.
    pub fn set_xyz(&mut self, xyz: Vec3) {
        self.data[0] = xyz.x();
        self.data[1] = xyz.y();
        self.data[2] = xyz.z();
    }

    /// Copy of the `(x, y)` components.
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x(), self.y())
    }

    /// Returns a unit-length copy, or [`Vec4::ZERO`] when the length is
    /// ≤ [`VECTOR_EPSILON`].
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > VECTOR_EPSILON {
            self.scale(1.0 / len)
        } else {
            Self::ZERO
        }
    }

    /// In-place form of [`Vec4::normalize`].
    pub fn normalize_in_place(&mut self) {
        *self = self.normalize();
    }

    /// Multiplies every component by the matching component of `factors`.
    pub fn scale_by(&mut self, factors: &Self) {
        *self = self.mul_components(factors);
    }

    /// Linear blend towards `other`; `t` is clamped to `[0, 1]`.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        self.lerp_unclamped(other, scalar::clamp01(t))
    }

    /// Linear blend towards `other` without clamping `t`.
    pub fn lerp_unclamped(&self, other: &Self, t: f32) -> Self {
        self.zip_with(other, |a, b| a + (b - a) * t)
    }

    /// Moves towards `target` by at most `max_distance_delta`.
    ///
    /// Returns `target` itself once it is within reach.
    pub fn move_towards(&self, target: &Self, max_distance_delta: f32) -> Self {
        let to_target = target.sub(self);
        let dist = to_target.length();
        if dist <= max_distance_delta || dist == 0.0 {
            return *target;
        }
        self.add(&to_target.scale(max_distance_delta / dist))
    }

    /// Projection of `self` onto `onto`: `onto * dot(self, onto) / dot(onto, onto)`.
    ///
    /// Projecting onto the zero vector yields NaN components.
    pub fn project(&self, onto: &Self) -> Self {
        onto.scale(self.dot(onto) / onto.dot(onto))
    }
}

impl From<Vec3> for Vec4 {
    fn from(value: Vec3) -> Self {
        Self::from_xyz(value, 0.0)
    }
}

impl From<Vec2> for Vec4 {
    fn from(value: Vec2) -> Self {
        Self::new(value.x(), value.y(), 0.0, 0.0)
    }
}

impl fmt::Display for Vec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{} Y:{} Z:{} W:{}", self.x(), self.y(), self.z(), self.w())
    }
}
