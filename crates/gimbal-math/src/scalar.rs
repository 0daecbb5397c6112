// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar helpers shared by the vector and quaternion types.
//!
//! Angles cross the public API in degrees; the conversions here are the
//! single place where the kernel changes units.

use std::f32::consts::TAU;

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// # Panics
/// Panics when `min > max`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Clamps `value` to `[0, 1]`, the domain of interpolation parameters.
pub fn clamp01(value: f32) -> f32 {
    value.max(0.0).min(1.0)
}

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}

/// Wraps an angle in degrees into `[0, 360)`.
///
/// Non-finite inputs are returned unchanged.
pub fn normalize_degrees(angle: f32) -> f32 {
    wrap(angle, 360.0)
}

/// Wraps an angle in radians into `[0, 2π)`.
pub(crate) fn normalize_radians(angle: f32) -> f32 {
    wrap(angle, TAU)
}

fn wrap(angle: f32, turn: f32) -> f32 {
    if !angle.is_finite() {
        return angle;
    }
    let wrapped = angle.rem_euclid(turn);
    // rem_euclid rounds tiny negatives up to exactly one turn.
    if wrapped >= turn {
        0.0
    } else {
        wrapped
    }
}

/// Returns `(sin, cos)` of half of `degrees`.
///
/// Evaluated in double precision and rounded once, so a half turn keeps a
/// non-negative cosine instead of the `-4.4e-8` that `f32` trig produces.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn half_angle_sin_cos(degrees: f32) -> (f32, f32) {
    let half = f64::from(degrees).to_radians() * 0.5;
    let (s, c) = half.sin_cos();
    (s as f32, c as f32)
}

/// Same as [`half_angle_sin_cos`] for an angle already in radians.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn half_radians_sin_cos(radians: f32) -> (f32, f32) {
    let (s, c) = (f64::from(radians) * 0.5).sin_cos();
    (s as f32, c as f32)
}
