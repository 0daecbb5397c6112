// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Euler-angle construction and extraction for [`Quat`].
//!
//! Convention: `(x, y, z)` are rotations about the X (pitch), Y (yaw) and
//! Z (roll) axes. The rotation applies Z first, then X, then Y, i.e.
//! `q = qY · qX · qZ`. Extraction is the inverse of that order and reports
//! every angle wrapped into one turn.

use core::f32::consts::FRAC_PI_2;

use crate::scalar::{half_angle_sin_cos, half_radians_sin_cos, normalize_radians, rad_to_deg};
use crate::{Quat, Vec3, GIMBAL_LOCK_THRESHOLD};

impl Quat {
    /// Rotation from Euler angles in degrees: `z` about Z, then `x` about X,
    /// then `y` about Y.
    ///
    /// # Examples
    /// ```
    /// use gimbal_math::{Quat, Vec3};
    /// let yaw = Quat::euler(0.0, 90.0, 0.0);
    /// assert!(yaw.rotate(&Vec3::FORWARD).approx_eq(&Vec3::RIGHT));
    /// ```
    pub fn euler(x: f32, y: f32, z: f32) -> Self {
        compose(
            half_angle_sin_cos(x),
            half_angle_sin_cos(y),
            half_angle_sin_cos(z),
        )
    }

    /// [`Quat::euler`] taking the angles as a vector of degrees.
    pub fn from_euler(angles: Vec3) -> Self {
        Self::euler(angles.x(), angles.y(), angles.z())
    }

    /// [`Quat::from_euler`] with the angles in radians.
    pub fn from_euler_radians(angles: Vec3) -> Self {
        compose(
            half_radians_sin_cos(angles.x()),
            half_radians_sin_cos(angles.y()),
            half_radians_sin_cos(angles.z()),
        )
    }

    /// Euler angles in radians, each wrapped into `[0, 2π)`.
    ///
    /// Near pitch ±90° the general formulas are ill-conditioned; there the
    /// roll is reported as zero and the whole twist is folded into yaw.
    pub fn to_euler_radians(&self) -> Vec3 {
        let [x, y, z, w] = self.to_array();
        let unit = x * x + y * y + z * z + w * w;
        if unit == 0.0 {
            return Vec3::ZERO;
        }
        let test = x * w - y * z;

        let raw = if test > GIMBAL_LOCK_THRESHOLD * unit {
            Vec3::new(FRAC_PI_2, 2.0 * y.atan2(x), 0.0)
        } else if test < -GIMBAL_LOCK_THRESHOLD * unit {
            Vec3::new(-FRAC_PI_2, -2.0 * y.atan2(x), 0.0)
        } else {
            // Permuted copy (w, z, x, y) lines the Y-X-Z order up with the
            // textbook yaw/pitch/roll extraction.
            let (a, b, c, d) = (w, z, x, y);
            // Scaled by `unit` so products of non-unit quaternions still
            // land inside the domain of asin.
            let yaw = (2.0 * a * d + 2.0 * b * c).atan2(unit - 2.0 * (c * c + d * d));
            let pitch = (2.0 * (a * c - d * b) / unit).clamp(-1.0, 1.0).asin();
            let roll = (2.0 * a * b + 2.0 * c * d).atan2(unit - 2.0 * (b * b + c * c));
            Vec3::new(pitch, yaw, roll)
        };
        raw.map(normalize_radians)
    }

    /// Euler angles in degrees, each wrapped into `[0, 360)`.
    pub fn euler_angles(&self) -> Vec3 {
        self.to_euler_radians()
            .map(|angle| crate::normalize_degrees(rad_to_deg(angle)))
    }

    /// Replaces this rotation with [`Quat::from_euler`]`(angles)`.
    pub fn set_euler_angles(&mut self, angles: Vec3) {
        *self = Self::from_euler(angles);
    }
}

fn compose(
    (sx, cx): (f32, f32),
    (sy, cy): (f32, f32),
    (sz, cz): (f32, f32),
) -> Quat {
    Quat::new(
        cy * sx * cz + sy * cx * sz,
        sy * cx * cz - cy * sx * sz,
        cy * cx * sz - sy * sx * cz,
        cy * cx * cz + sy * sx * sz,
    )
}
