// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Interpolation between rotations.

use crate::{scalar, Quat, Vec3, SLERP_LINEAR_THRESHOLD};

impl Quat {
    /// Spherical interpolation from `self` to `other`; `t` is clamped to `[0, 1]`.
    pub fn slerp(&self, other: &Self, t: f32) -> Self {
        self.slerp_unclamped(other, scalar::clamp01(t))
    }

    /// Spherical interpolation from `self` to `other` without clamping `t`.
    ///
    /// - A zero-length input yields the other input (identity if both are zero).
    /// - Equal or opposite inputs (`|cos| ≥ 1`) yield `self`.
    /// - `other` is negated when the inputs lie in opposite hemispheres, so
    ///   the blend always follows the shorter arc.
    /// - When `cos(half angle) ≥ SLERP_LINEAR_THRESHOLD` the weights fall back
    ///   to `(1 - t, t)`, as `sin(half angle)` is too small to divide by.
    ///
    /// The result is normalised; a blend that cancels to zero yields identity.
    pub fn slerp_unclamped(&self, other: &Self, t: f32) -> Self {
        let a = *self;
        let mut b = *other;
        if a.length_squared() == 0.0 {
            if b.length_squared() == 0.0 {
                return Self::identity();
            }
            return b;
        } else if b.length_squared() == 0.0 {
            return a;
        }

        let mut cos_half = a.dot(&b);
        if cos_half >= 1.0 || cos_half <= -1.0 {
            return a;
        }
        if cos_half < 0.0 {
            b = Self::from_xyz_w(-b.xyz(), -b.w());
            cos_half = -cos_half;
        }

        let (blend_a, blend_b) = if cos_half < SLERP_LINEAR_THRESHOLD {
            let half = cos_half.acos();
            let inv_sin = 1.0 / half.sin();
            (
                (half * (1.0 - t)).sin() * inv_sin,
                (half * t).sin() * inv_sin,
            )
        } else {
            (1.0 - t, t)
        };

        let blended = Self::from_xyz_w(
            a.xyz().scale(blend_a) + b.xyz().scale(blend_b),
            blend_a * a.w() + blend_b * b.w(),
        );
        if blended.length_squared() > 0.0 {
            blended.normalize()
        } else {
            Self::identity()
        }
    }

    /// Interpolation with `t` clamped to `[0, 1]`.
    ///
    /// Performs a spherical blend (it delegates to [`Quat::slerp`]); the name
    /// is kept for callers ported from engines that expose both spellings.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        self.slerp(other, t)
    }

    /// Interpolation without clamping `t`; spherical, see [`Quat::lerp`].
    pub fn lerp_unclamped(&self, other: &Self, t: f32) -> Self {
        self.slerp_unclamped(other, t)
    }

    /// Rotates `self` towards `target` by at most `max_degrees_delta`.
    ///
    /// Returns `target` when the two rotations already coincide; overshoot is
    /// prevented by capping the blend factor at 1. A negative delta rotates
    /// away from `target`.
    pub fn rotate_towards(&self, target: &Self, max_degrees_delta: f32) -> Self {
        let angle = self.angle_to(target);
        if angle == 0.0 {
            return *target;
        }
        let t = (max_degrees_delta / angle).min(1.0);
        self.slerp_unclamped(target, t)
    }

    /// Rotation that turns direction `from` onto direction `to`.
    ///
    /// Built from the two look rotations (with `+Y` up), so it also keeps the
    /// "up" side of `from` facing up after the turn. Directions parallel to
    /// `+Y` degenerate the same way [`Quat::look_rotation`] does.
    pub fn from_to_rotation(from: Vec3, to: Vec3) -> Self {
        Self::look_rotation(to)
            .multiply(&Self::look_rotation(from).inverse())
            .normalize()
    }

    /// Replaces this rotation with [`Quat::from_to_rotation`]`(from, to)`.
    pub fn set_from_to_rotation(&mut self, from: Vec3, to: Vec3) {
        *self = Self::from_to_rotation(from, to);
    }
}
