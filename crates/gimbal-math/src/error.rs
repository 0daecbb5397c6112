// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use thiserror::Error;

/// Errors surfaced by the math kernel.
///
/// Everything except component indexing and host-buffer reinterpretation is a
/// total function over `f32` inputs; NaN and infinities propagate per IEEE-754.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A component index was outside `0..len`.
    #[error("{index} is not a valid component index; valid range is 0..{len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of components of the indexed type.
        len: usize,
    },
    /// A host float buffer does not split evenly into the requested type.
    #[error("host buffer layout mismatch: {0}")]
    HostLayout(#[from] bytemuck::PodCastError),
}
