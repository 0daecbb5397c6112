// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;

use bytemuck::{Pod, Zeroable};

/// 2D point or direction.
///
/// No invariant is enforced; the length is `√(x² + y²)`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Vec2 {
    data: [f32; 2],
}

const _: () = assert!(std::mem::size_of::<Vec2>() == 8);

impl_vector_common!(Vec2, 2);

impl Vec2 {
    /// `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// `(1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0);
    /// `(0, 1)`.
    pub const UP: Self = Self::new(0.0, 1.0);
    /// `(0, -1)`.
    pub const DOWN: Self = Self::new(0.0, -1.0);
    /// `(-1, 0)`.
    pub const LEFT: Self = Self::new(-1.0, 0.0);
    /// `(1, 0)`.
    pub const RIGHT: Self = Self::new(1.0, 0.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Returns the vector scaled by `1 / length`.
    ///
    /// The zero vector is not special-cased: its components come back NaN.
    /// Guard with [`Vec2::length_squared`] when zero input is possible.
    pub fn normalize(&self) -> Self {
        self.scale(1.0 / self.length())
    }

    /// In-place form of [`Vec2::normalize`].
    pub fn normalize_in_place(&mut self) {
        *self = self.normalize();
    }

    /// Returns `true` when this vector is strictly longer than `other`.
    pub fn is_longer_than(&self, other: &Self) -> bool {
        self.length_squared() > other.length_squared()
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{}, Y:{}", self.x(), self.y())
    }
}
