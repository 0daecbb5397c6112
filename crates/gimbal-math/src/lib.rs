// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! gimbal-math: vectors and rotation quaternions for orientation work.
//!
//! The crate is a pure value kernel. Every type is `Copy`, owns no resources,
//! performs no I/O, and is safe to use from any number of threads as long as
//! each thread works on its own values.
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`]: componentwise algebra, lengths, normalisation.
//! - [`Quat`]: rotations built from Euler angles, axis-angle, or a look
//!   direction; decomposed back to Euler/axis-angle; composed, inverted, and
//!   interpolated with `slerp`.
//! - [`host`]: zero-copy views used when handing values to an engine that
//!   stores the same `f32` layouts.
//!
//! All angles on the public API are in degrees unless the function name says
//! `radians`. Numeric edge cases (zero axes, gimbal lock, nearly parallel
//! quaternions) resolve to documented fallback values; the only error is an
//! out-of-range component index ([`MathError`]).
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::float_cmp
)]

#[macro_use]
mod macros;

mod error;
mod euler;
pub mod host;
mod interp;
mod quat;
pub mod scalar;
mod vec2;
mod vec3;
mod vec4;

pub use error::MathError;
pub use quat::Quat;
pub use scalar::{clamp, clamp01, deg_to_rad, normalize_degrees, rad_to_deg};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Degeneracy threshold for quaternion normalisation.
///
/// Quaternions whose length is ≤ `EPSILON` normalise to identity.
pub const EPSILON: f32 = 1e-6;

/// Threshold used by [`Vec4`] normalisation and by every `approx_eq` on vectors.
///
/// Two vectors compare approximately equal when the squared length of their
/// difference is below `VECTOR_EPSILON²`.
pub const VECTOR_EPSILON: f32 = 1e-5;

/// Minimum `sin(angle / 2)` for which [`Quat::to_angle_axis`] divides out the
/// axis; below it the axis falls back to `+X`.
pub const AXIS_DEGENERATE_EPSILON: f32 = 1e-4;

/// Fraction of the squared length above which Euler extraction treats a
/// rotation as pitched straight up or down (gimbal lock).
pub const GIMBAL_LOCK_THRESHOLD: f32 = 0.4995;

/// Cosine of the half angle above which `slerp` blends linearly.
pub const SLERP_LINEAR_THRESHOLD: f32 = 0.99;

/// Dot product above which two quaternions are treated as the same rotation.
pub const QUAT_EQUALITY_DOT: f32 = 0.999999;
