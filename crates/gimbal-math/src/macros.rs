// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

// Shared plumbing for the fixed-size `f32` vectors. Each vector stores its
// components as `data: [f32; N]` and gets the same componentwise operators,
// indexed access, array conversions, and `approx_eq`.
macro_rules! impl_vector_common {
    ($ty:ident, $n:literal) => {
        impl $ty {
            /// Number of components.
            pub const LEN: usize = $n;

            /// Returns the components as an array.
            pub fn to_array(self) -> [f32; $n] {
                self.data
            }

            /// Returns component `index`.
            pub fn get(&self, index: usize) -> Result<f32, $crate::MathError> {
                self.data
                    .get(index)
                    .copied()
                    .ok_or($crate::MathError::IndexOutOfRange { index, len: $n })
            }

            /// Overwrites component `index`.
            pub fn set(&mut self, index: usize, value: f32) -> Result<(), $crate::MathError> {
                match self.data.get_mut(index) {
                    Some(slot) => {
                        *slot = value;
                        Ok(())
                    }
                    None => Err($crate::MathError::IndexOutOfRange { index, len: $n }),
                }
            }

            /// Euclidean length (magnitude).
            pub fn length(&self) -> f32 {
                self.length_squared().sqrt()
            }

            /// Squared length; skips the square root for comparisons.
            pub fn length_squared(&self) -> f32 {
                self.data.iter().map(|c| c * c).sum()
            }

            /// Dot product with another vector.
            pub fn dot(&self, other: &Self) -> f32 {
                self.data.iter().zip(other.data).map(|(a, b)| a * b).sum()
            }

            /// Euclidean distance to `other`.
            pub fn distance(&self, other: &Self) -> f32 {
                self.sub(other).length()
            }

            /// Adds two vectors.
            pub fn add(&self, other: &Self) -> Self {
                self.zip_with(other, |a, b| a + b)
            }

            /// Subtracts another vector.
            pub fn sub(&self, other: &Self) -> Self {
                self.zip_with(other, |a, b| a - b)
            }

            /// Scales the vector by a scalar.
            pub fn scale(&self, scalar: f32) -> Self {
                self.map(|c| c * scalar)
            }

            /// Componentwise product.
            pub fn mul_components(&self, other: &Self) -> Self {
                self.zip_with(other, |a, b| a * b)
            }

            /// Componentwise quotient.
            pub fn div_components(&self, other: &Self) -> Self {
                self.zip_with(other, |a, b| a / b)
            }

            /// Componentwise minimum.
            pub fn min(&self, other: &Self) -> Self {
                self.zip_with(other, f32::min)
            }

            /// Componentwise maximum.
            pub fn max(&self, other: &Self) -> Self {
                self.zip_with(other, f32::max)
            }

            /// Returns `true` when `|self - other|² < VECTOR_EPSILON²`.
            ///
            /// Always `false` when either side holds a NaN.
            pub fn approx_eq(&self, other: &Self) -> bool {
                self.sub(other).length_squared()
                    < $crate::VECTOR_EPSILON * $crate::VECTOR_EPSILON
            }

            pub(crate) fn map(&self, f: impl Fn(f32) -> f32) -> Self {
                Self { data: self.data.map(f) }
            }

            pub(crate) fn zip_with(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
                let mut data = self.data;
                for (out, rhs) in data.iter_mut().zip(other.data) {
                    *out = f(*out, rhs);
                }
                Self { data }
            }
        }

        impl From<[f32; $n]> for $ty {
            fn from(data: [f32; $n]) -> Self {
                Self { data }
            }
        }

        impl From<$ty> for [f32; $n] {
            fn from(value: $ty) -> Self {
                value.data
            }
        }

        impl core::ops::Add for $ty {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                self.zip_with(&rhs, |a, b| a + b)
            }
        }

        impl core::ops::Sub for $ty {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                self.zip_with(&rhs, |a, b| a - b)
            }
        }

        impl core::ops::Mul for $ty {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                self.zip_with(&rhs, |a, b| a * b)
            }
        }

        impl core::ops::Div for $ty {
            type Output = Self;
            fn div(self, rhs: Self) -> Self {
                self.zip_with(&rhs, |a, b| a / b)
            }
        }

        impl core::ops::Add<f32> for $ty {
            type Output = Self;
            fn add(self, rhs: f32) -> Self {
                self.map(|c| c + rhs)
            }
        }

        impl core::ops::Sub<f32> for $ty {
            type Output = Self;
            fn sub(self, rhs: f32) -> Self {
                self.map(|c| c - rhs)
            }
        }

        impl core::ops::Mul<f32> for $ty {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self {
                self.map(|c| c * rhs)
            }
        }

        impl core::ops::Mul<$ty> for f32 {
            type Output = $ty;
            fn mul(self, rhs: $ty) -> $ty {
                rhs.map(|c| c * self)
            }
        }

        impl core::ops::Div<f32> for $ty {
            type Output = Self;
            fn div(self, rhs: f32) -> Self {
                self.map(|c| c / rhs)
            }
        }

        impl core::ops::Neg for $ty {
            type Output = Self;
            fn neg(self) -> Self {
                self.map(|c| -c)
            }
        }

        impl core::ops::AddAssign for $ty {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl core::ops::SubAssign for $ty {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl core::ops::MulAssign<f32> for $ty {
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }

        impl core::ops::DivAssign<f32> for $ty {
            fn div_assign(&mut self, rhs: f32) {
                *self = *self / rhs;
            }
        }
    };
}
