// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;

use bytemuck::{Pod, Zeroable};

use crate::scalar::{half_angle_sin_cos, rad_to_deg};
use crate::{MathError, Vec3, AXIS_DEGENERATE_EPSILON, EPSILON, QUAT_EQUALITY_DOT};

/// Quaternion stored as `(x, y, z, w)` with `w` as the scalar part.
///
/// * Intended to hold a unit rotation, but neither [`Quat::new`] nor
///   [`Quat::multiply`] enforces unit length. Call [`Quat::normalize`] after
///   composing long chains.
/// * The dedicated constructors ([`Quat::from_angle_axis`], [`Quat::euler`],
///   [`Quat::look_rotation`]) always return unit quaternions.
/// * Angles on the public API are degrees.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Quat {
    data: [f32; 4],
}

const _: () = assert!(std::mem::size_of::<Quat>() == 16);

impl Quat {
    /// The "no rotation" quaternion `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Number of components.
    pub const LEN: usize = 4;

    /// Creates a quaternion from raw components.
    ///
    /// Components are taken verbatim; use [`Quat::from_angle_axis`] or
    /// [`Quat::euler`] to build a rotation from angles.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Creates a quaternion from its vector part and scalar part.
    pub fn from_xyz_w(xyz: Vec3, w: f32) -> Self {
        Self::new(xyz.x(), xyz.y(), xyz.z(), w)
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the quaternion as an array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
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

    /// W (scalar) component.
    pub fn w(&self) -> f32 {
        self.data[3]
    }

    /// Copy of the vector part `(x, y, z)`.
    pub fn xyz(&self) -> Vec3 {
        Vec3::new(self.x(), self.y(), self.z())
    }

    /// Overwrites the vector part, leaving `w`.
    pub fn set_xyz(&mut self, xyz: Vec3) {
        self.data[0] = xyz.x();
        self.data[1] = xyz.y();
        self.data[2] = xyz.z();
    }

    /// Returns component `index` (`0..4` ↦ `x, y, z, w`).
    pub fn get(&self, index: usize) -> Result<f32, MathError> {
        self.data
            .get(index)
            .copied()
            .ok_or(MathError::IndexOutOfRange { index, len: Self::LEN })
    }

    /// Overwrites component `index` (`0..4` ↦ `x, y, z, w`).
    pub fn set(&mut self, index: usize, value: f32) -> Result<(), MathError> {
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(MathError::IndexOutOfRange { index, len: Self::LEN }),
        }
    }

    /// Squared norm `x² + y² + z² + w²`.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Norm of the quaternion.
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Componentwise dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z() + self.w() * other.w()
    }

    /// Normalises the quaternion; returns identity when the norm is ≤ `EPSILON`.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::identity();
        }
        let inv = 1.0 / len;
        Self {
            data: self.data.map(|c| c * inv),
        }
    }

    /// In-place form of [`Quat::normalize`].
    pub fn normalize_in_place(&mut self) {
        *self = self.normalize();
    }

    /// Rotation of `angle` degrees around `axis`.
    ///
    /// The axis is normalised on a copy; the caller's value is untouched.
    /// Returns identity when `axis` has zero length.
    ///
    /// # Examples
    /// ```
    /// use gimbal_math::{Quat, Vec3};
    /// let q = Quat::from_angle_axis(90.0, Vec3::UP);
    /// let v = q.rotate(&Vec3::FORWARD);
    /// assert!(v.approx_eq(&Vec3::RIGHT));
    /// ```
    pub fn from_angle_axis(angle: f32, axis: Vec3) -> Self {
        let mut axis = axis;
        Self::from_angle_axis_normalizing(angle, &mut axis)
    }

    /// Rotation of `angle` degrees around `axis`, normalising `axis` in place.
    ///
    /// On return `axis` holds the unit axis that was used. A zero-length axis
    /// is left as is and the identity rotation is returned.
    pub fn from_angle_axis_normalizing(angle: f32, axis: &mut Vec3) -> Self {
        if axis.length_squared() == 0.0 {
            return Self::identity();
        }
        axis.normalize_in_place();
        let (sin_half, cos_half) = half_angle_sin_cos(angle);
        Self::from_xyz_w(axis.scale(sin_half), cos_half).normalize()
    }

    /// Decomposes into `(angle_degrees, axis)`.
    ///
    /// The angle lies in `[0, 360]`. When `sin(angle / 2)` is at most
    /// [`AXIS_DEGENERATE_EPSILON`] (no rotation) the axis is `+X`.
    ///
    /// `sin(angle / 2)` is taken as the length of the vector part rather
    /// than `sqrt(1 - w²)`, so small angles and angles just short of a full
    /// turn keep their precision.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_angle_axis(&self) -> (f32, Vec3) {
        let q = self.normalize();
        let xyz = q.xyz();
        let sin_half = f64::from(xyz.length());
        let angle = (2.0 * sin_half.atan2(f64::from(q.w()))).to_degrees() as f32;
        let axis = if sin_half > f64::from(AXIS_DEGENERATE_EPSILON) {
            xyz.scale((1.0 / sin_half) as f32)
        } else {
            Vec3::UNIT_X
        };
        (angle, axis)
    }

    /// Rotation whose local `+Z` points along `forward`, with `+Y` as up.
    pub fn look_rotation(forward: Vec3) -> Self {
        Self::look_rotation_with_up(forward, Vec3::UP)
    }

    /// Rotation whose local `+Z` points along `forward` and whose local `+Y`
    /// lies in the plane of `forward` and `up`.
    ///
    /// `forward` must be non-zero and not parallel to `up`; otherwise the
    /// basis degenerates and the components come back NaN.
    pub fn look_rotation_with_up(forward: Vec3, up: Vec3) -> Self {
        let forward = forward.normalize();
        let right = up.cross(&forward).normalize();
        let up = forward.cross(&right);
        Self::from_rotation_axes(right, up, forward)
    }

    /// Replaces this rotation with [`Quat::look_rotation`]`(forward)`.
    pub fn set_look_rotation(&mut self, forward: Vec3) {
        *self = Self::look_rotation(forward);
    }

    /// Replaces this rotation with [`Quat::look_rotation_with_up`]`(forward, up)`.
    pub fn set_look_rotation_with_up(&mut self, forward: Vec3, up: Vec3) {
        *self = Self::look_rotation_with_up(forward, up);
    }

    /// Converts an orthonormal basis to a quaternion.
    ///
    /// `right`, `up`, `forward` are the images of local `+X`, `+Y`, `+Z`
    /// (the rows of the rotation matrix). The branch is chosen on the trace
    /// and, failing that, on the largest diagonal term, so precision holds
    /// near half turns.
    pub fn from_rotation_axes(right: Vec3, up: Vec3, forward: Vec3) -> Self {
        let [m00, m01, m02] = right.to_array();
        let [m10, m11, m12] = up.to_array();
        let [m20, m21, m22] = forward.to_array();

        let trace = m00 + m11 + m22;
        if trace > 0.0 {
            let s = (trace + 1.0).sqrt();
            let k = 0.5 / s;
            return Self::new((m12 - m21) * k, (m20 - m02) * k, (m01 - m10) * k, 0.5 * s);
        }
        if m00 >= m11 && m00 >= m22 {
            let s = (1.0 + m00 - m11 - m22).sqrt();
            let k = 0.5 / s;
            return Self::new(0.5 * s, (m01 + m10) * k, (m02 + m20) * k, (m12 - m21) * k);
        }
        if m11 > m22 {
            let s = (1.0 + m11 - m00 - m22).sqrt();
            let k = 0.5 / s;
            return Self::new((m10 + m01) * k, 0.5 * s, (m21 + m12) * k, (m20 - m02) * k);
        }
        let s = (1.0 + m22 - m00 - m11).sqrt();
        let k = 0.5 / s;
        Self::new((m20 + m02) * k, (m21 + m12) * k, 0.5 * s, (m01 - m10) * k)
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// Rotating a vector by the product applies `other` first, then `self`.
    /// Quaternion multiplication is non-commutative, and the result is not
    /// renormalised.
    ///
    /// # Examples
    /// ```
    /// use gimbal_math::{Quat, Vec3};
    /// let yaw = Quat::from_angle_axis(90.0, Vec3::UP);
    /// let pitch = Quat::from_angle_axis(90.0, Vec3::RIGHT);
    /// assert_ne!(yaw.multiply(&pitch), pitch.multiply(&yaw));
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;
        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by + ay * bw + az * bx - ax * bz,
            aw * bz + az * bw + ax * by - ay * bx,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Rotates `point` by this quaternion (`q · v · q⁻¹` for unit `q`).
    ///
    /// Uses the expanded rotation-matrix form rather than two products.
    pub fn rotate(&self, point: &Vec3) -> Vec3 {
        let [x, y, z, w] = self.data;
        let x2 = x * 2.0;
        let y2 = y * 2.0;
        let z2 = z * 2.0;
        let xx = x * x2;
        let yy = y * y2;
        let zz = z * z2;
        let xy = x * y2;
        let xz = x * z2;
        let yz = y * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;
        let [px, py, pz] = point.to_array();
        Vec3::new(
            (1.0 - (yy + zz)) * px + (xy - wz) * py + (xz + wy) * pz,
            (xy + wz) * px + (1.0 - (xx + zz)) * py + (yz - wx) * pz,
            (xz - wy) * px + (yz + wx) * py + (1.0 - (xx + yy)) * pz,
        )
    }

    /// Conjugate `(-x, -y, -z, w)`.
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z(), self.w())
    }

    /// Multiplicative inverse: the conjugate divided by the squared norm.
    ///
    /// A zero quaternion is returned unchanged.
    pub fn inverse(&self) -> Self {
        let len_sq = self.length_squared();
        if len_sq == 0.0 {
            return *self;
        }
        let inv = 1.0 / len_sq;
        Self::new(-self.x() * inv, -self.y() * inv, -self.z() * inv, self.w() * inv)
    }

    /// Angle in degrees between two rotations, in `[0, 180]`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn angle_to(&self, other: &Self) -> f32 {
        let d = self.dot(other).abs().min(1.0);
        rad_to_deg(2.0 * (f64::from(d).acos() as f32))
    }

    /// Returns `true` when both quaternions describe (almost) the same
    /// orientation with the same sign: `dot > QUAT_EQUALITY_DOT`.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.dot(other) > QUAT_EQUALITY_DOT
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Converts `(x, y, z, w)` into a `Quat` verbatim; no normalisation.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl From<Quat> for [f32; 4] {
    fn from(value: Quat) -> Self {
        value.data
    }
}

impl core::ops::Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl core::ops::MulAssign for Quat {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl core::ops::Mul<Vec3> for Quat {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate(&rhs)
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{} Y:{} Z:{} W:{}", self.x(), self.y(), self.z(), self.w())
    }
}
