// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Boundary conversions to and from a host engine's float layouts.
//!
//! Every kernel type is `#[repr(C)]` over packed `f32` components in
//! `x, y, z, w` order, which is the layout engines use for their own vector
//! and quaternion structs. Single values convert with `From<[f32; N]>` /
//! `Into<[f32; N]>`; the functions here reinterpret whole slices without
//! copying, for bulk upload or readback.
//!
//! # Examples
//! ```
//! use gimbal_math::{host, Vec3};
//! let points = [Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)];
//! let floats = host::as_floats(&points);
//! assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! let back: &[Vec3] = host::from_floats(floats).unwrap();
//! assert_eq!(back, &points);
//! ```

use bytemuck::Pod;

use crate::{MathError, Quat, Vec2, Vec3, Vec4};

mod sealed {
    pub trait Sealed {}
}

/// Kernel value types that share a host engine's packed `f32` layout.
pub trait HostValue: Pod + sealed::Sealed {
    /// Number of `f32` components in one value.
    const COMPONENTS: usize;
}

macro_rules! host_value {
    ($($ty:ident => $n:literal),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl HostValue for $ty {
                const COMPONENTS: usize = $n;
            }
        )*
    };
}

host_value!(Vec2 => 2, Vec3 => 3, Vec4 => 4, Quat => 4);

/// Views a slice of values as their flat `f32` components.
pub fn as_floats<T: HostValue>(values: &[T]) -> &[f32] {
    bytemuck::cast_slice(values)
}

/// Views a slice of values as raw native-endian bytes.
pub fn as_bytes<T: HostValue>(values: &[T]) -> &[u8] {
    bytemuck::cast_slice(values)
}

/// Views a flat `f32` buffer as values of `T`.
///
/// Fails when `floats.len()` is not a multiple of `T::COMPONENTS`.
pub fn from_floats<T: HostValue>(floats: &[f32]) -> Result<&[T], MathError> {
    Ok(bytemuck::try_cast_slice(floats)?)
}

/// Copies a flat `f32` buffer into owned values of `T`.
pub fn to_values<T: HostValue>(floats: &[f32]) -> Result<Vec<T>, MathError> {
    from_floats(floats).map(<[T]>::to_vec)
}
