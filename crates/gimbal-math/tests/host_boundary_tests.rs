// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use gimbal_math::host::{self, HostValue};
use gimbal_math::{MathError, Quat, Vec2, Vec3, Vec4};

#[test]
fn component_counts_match_layout() {
    assert_eq!(Vec2::COMPONENTS, 2);
    assert_eq!(Vec3::COMPONENTS, 3);
    assert_eq!(Vec4::COMPONENTS, 4);
    assert_eq!(Quat::COMPONENTS, 4);
    assert_eq!(std::mem::size_of::<Vec3>(), 3 * std::mem::size_of::<f32>());
}

#[test]
fn quaternions_flatten_in_xyzw_order() {
    let rotations = [Quat::IDENTITY, Quat::new(0.1, 0.2, 0.3, 0.4)];
    assert_eq!(
        host::as_floats(&rotations),
        &[0.0, 0.0, 0.0, 1.0, 0.1, 0.2, 0.3, 0.4]
    );
    assert_eq!(host::as_bytes(&rotations).len(), 32);
}

#[test]
fn flat_buffer_views_as_values() {
    let floats = [1.0, 2.0, 3.0, 4.0];
    let pairs: &[Vec2] = host::from_floats(&floats).unwrap();
    assert_eq!(pairs, &[Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);

    let owned: Vec<Vec4> = host::to_values(&floats).unwrap();
    assert_eq!(owned, vec![Vec4::new(1.0, 2.0, 3.0, 4.0)]);
}

#[test]
fn ragged_buffer_is_rejected() {
    let floats = [1.0, 2.0, 3.0, 4.0, 5.0];
    let err = host::from_floats::<Vec3>(&floats).unwrap_err();
    assert!(matches!(err, MathError::HostLayout(_)), "{err}");
    assert!(host::to_values::<Quat>(&floats[..3]).is_err());
}

#[test]
fn empty_buffer_is_empty_slice() {
    let values: &[Quat] = host::from_floats(&[]).unwrap();
    assert!(values.is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_plain_component_arrays() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(serde_json::to_string(&v).unwrap(), "[1.0,2.0,3.0]");
    let q: Quat = serde_json::from_str("[0.0,0.0,0.0,1.0]").unwrap();
    assert_eq!(q, Quat::IDENTITY);
}
