// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use gimbal_math::{MathError, Quat, Vec3};

fn approx_vec(a: Vec3, b: Vec3, tol: f32) {
    let diff = a - b;
    assert!(
        diff.to_array().iter().all(|c| c.abs() <= tol),
        "expected {b}, got {a}"
    );
}

fn approx_quat(a: Quat, b: [f32; 4], tol: f32) {
    for (got, want) in a.to_array().into_iter().zip(b) {
        assert!((got - want).abs() <= tol, "expected {b:?}, got {a}");
    }
}

#[test]
fn identity_leaves_vectors_alone() {
    let v = Vec3::new(1.0, -2.0, 3.5);
    assert_eq!(Quat::IDENTITY.rotate(&v), v);
    assert_eq!(Quat::identity(), Quat::default());
    assert_eq!(Quat::IDENTITY.to_array(), [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn quarter_turn_about_y_maps_forward_to_right() {
    let q = Quat::from_angle_axis(90.0, Vec3::new(0.0, 1.0, 0.0));
    approx_vec(q.rotate(&Vec3::new(0.0, 0.0, 1.0)), Vec3::new(1.0, 0.0, 0.0), 1e-6);
    approx_vec(q * Vec3::RIGHT, Vec3::BACK, 1e-6);
}

#[test]
fn quarter_turn_about_x_tips_forward_down() {
    let q = Quat::from_angle_axis(90.0, Vec3::UNIT_X);
    approx_vec(q.rotate(&Vec3::FORWARD), Vec3::DOWN, 1e-6);
}

#[test]
fn angle_axis_normalises_a_copy_of_the_axis() {
    let axis = Vec3::new(0.0, 0.0, 5.0);
    let q = Quat::from_angle_axis(90.0, axis);
    assert_eq!(axis, Vec3::new(0.0, 0.0, 5.0));
    approx_vec(q.rotate(&Vec3::RIGHT), Vec3::UP, 1e-6);
    assert!((q.length() - 1.0).abs() < 1e-6);
}

#[test]
fn angle_axis_normalizing_rewrites_the_axis() {
    let mut axis = Vec3::new(0.0, 3.0, 0.0);
    let q = Quat::from_angle_axis_normalizing(90.0, &mut axis);
    assert_eq!(axis, Vec3::UP);
    assert!(q.approx_eq(&Quat::from_angle_axis(90.0, Vec3::UP)));
}

#[test]
fn zero_axis_yields_identity() {
    assert_eq!(Quat::from_angle_axis(45.0, Vec3::ZERO), Quat::IDENTITY);
    let mut axis = Vec3::ZERO;
    assert_eq!(Quat::from_angle_axis_normalizing(45.0, &mut axis), Quat::IDENTITY);
    assert_eq!(axis, Vec3::ZERO);
}

#[test]
fn to_angle_axis_recovers_angle_and_unit_axis() {
    let q = Quat::from_angle_axis(90.0, Vec3::new(0.0, 0.0, 2.0));
    let (angle, axis) = q.to_angle_axis();
    assert!((angle - 90.0).abs() < 1e-3, "angle {angle}");
    approx_vec(axis, Vec3::UNIT_Z, 1e-5);
}

#[test]
fn to_angle_axis_keeps_precision_at_both_ends_of_the_turn() {
    let unit = Vec3::new(1.0, 1.0, 1.0).normalize();
    for angle in [0.05_f32, 0.5, 1.0, 359.0, 359.9] {
        let (got, axis) = Quat::from_angle_axis(angle, unit).to_angle_axis();
        assert!((got - angle).abs() < 1e-4, "angle {angle}: got {got}");
        approx_vec(axis, unit, 1e-4);
    }
}

#[test]
fn to_angle_axis_of_non_unit_quat_matches_its_normalised_form() {
    let q = Quat::from_angle_axis(60.0, Vec3::UP);
    let scaled = Quat::new(q.x() * 3.0, q.y() * 3.0, q.z() * 3.0, q.w() * 3.0);
    let (angle, axis) = scaled.to_angle_axis();
    assert!((angle - 60.0).abs() < 1e-4, "angle {angle}");
    approx_vec(axis, Vec3::UP, 1e-5);
}

#[test]
fn to_angle_axis_of_identity_falls_back_to_x() {
    let (angle, axis) = Quat::IDENTITY.to_angle_axis();
    assert_eq!(angle, 0.0);
    assert_eq!(axis, Vec3::UNIT_X);
}

#[test]
fn look_rotation_forward_is_identity() {
    assert_eq!(Quat::look_rotation(Vec3::FORWARD), Quat::IDENTITY);
}

#[test]
fn look_rotation_backwards_is_half_turn_about_y() {
    let q = Quat::look_rotation(Vec3::new(0.0, 0.0, -1.0));
    assert!(q.approx_eq(&Quat::new(0.0, 1.0, 0.0, 0.0)), "{q}");
    approx_vec(q.rotate(&Vec3::FORWARD), Vec3::BACK, 1e-6);
    approx_vec(q.rotate(&Vec3::UP), Vec3::UP, 1e-6);
}

#[test]
fn look_rotation_points_forward_at_target() {
    let dir = Vec3::new(-1.0, 0.2, -0.3);
    let q = Quat::look_rotation(dir);
    approx_vec(q.rotate(&Vec3::FORWARD), dir.normalize(), 1e-5);
    assert!(q.rotate(&Vec3::UP).dot(&dir.normalize()).abs() < 1e-5);
    assert!(q.rotate(&Vec3::UP).y() > 0.0);
}

#[test]
fn look_rotation_with_up_controls_roll() {
    let q = Quat::look_rotation_with_up(Vec3::FORWARD, Vec3::RIGHT);
    approx_vec(q.rotate(&Vec3::FORWARD), Vec3::FORWARD, 1e-6);
    approx_vec(q.rotate(&Vec3::UP), Vec3::RIGHT, 1e-6);
}

#[test]
fn rotation_axes_cover_every_half_turn_branch() {
    let about_x = Quat::from_rotation_axes(Vec3::RIGHT, Vec3::DOWN, Vec3::BACK);
    assert!(about_x.approx_eq(&Quat::new(1.0, 0.0, 0.0, 0.0)), "{about_x}");

    let about_y = Quat::from_rotation_axes(Vec3::LEFT, Vec3::UP, Vec3::BACK);
    assert!(about_y.approx_eq(&Quat::new(0.0, 1.0, 0.0, 0.0)), "{about_y}");

    let about_z = Quat::from_rotation_axes(Vec3::LEFT, Vec3::DOWN, Vec3::FORWARD);
    assert!(about_z.approx_eq(&Quat::new(0.0, 0.0, 1.0, 0.0)), "{about_z}");
}

#[test]
fn multiply_applies_right_operand_first() {
    let yaw = Quat::from_angle_axis(90.0, Vec3::UP);
    let pitch = Quat::from_angle_axis(90.0, Vec3::UNIT_X);
    let combined = yaw.multiply(&pitch);
    approx_vec(combined.rotate(&Vec3::FORWARD), Vec3::DOWN, 1e-6);
    approx_vec(
        combined.rotate(&Vec3::FORWARD),
        yaw.rotate(&pitch.rotate(&Vec3::FORWARD)),
        1e-6,
    );
    assert_eq!(yaw * pitch, combined);

    let mut acc = yaw;
    acc *= pitch;
    assert_eq!(acc, combined);
}

#[test]
fn multiply_is_not_commutative() {
    let a = Quat::from_angle_axis(90.0, Vec3::UP);
    let b = Quat::from_angle_axis(90.0, Vec3::UNIT_X);
    assert!(!a.multiply(&b).approx_eq(&b.multiply(&a)));
}

#[test]
fn inverse_undoes_non_unit_quaternion() {
    let q = Quat::new(1.0, 2.0, 3.0, 4.0);
    let inv = q.inverse();
    approx_quat(inv, [-1.0 / 30.0, -2.0 / 30.0, -3.0 / 30.0, 4.0 / 30.0], 1e-7);
    approx_quat(q.multiply(&inv), [0.0, 0.0, 0.0, 1.0], 1e-6);
    approx_quat(inv.multiply(&q), [0.0, 0.0, 0.0, 1.0], 1e-6);
}

#[test]
fn inverse_of_zero_is_zero() {
    let zero = Quat::new(0.0, 0.0, 0.0, 0.0);
    assert_eq!(zero.inverse(), zero);
}

#[test]
fn conjugate_matches_inverse_for_unit_rotation() {
    let q = Quat::from_angle_axis(33.0, Vec3::new(1.0, 1.0, 0.0));
    assert!(q.conjugate().approx_eq(&q.inverse()));
    assert_eq!(q.conjugate().w(), q.w());
    assert_eq!(q.conjugate().xyz(), -q.xyz());
}

#[test]
fn normalize_degenerate_returns_identity() {
    assert_eq!(Quat::new(0.0, 0.0, 0.0, 0.0).normalize(), Quat::IDENTITY);
    assert_eq!(Quat::new(0.0, 0.0, 0.0, 1e-7).normalize(), Quat::IDENTITY);
    let mut q = Quat::new(0.0, 0.0, 0.0, 2.0);
    q.normalize_in_place();
    assert_eq!(q, Quat::IDENTITY);
}

#[test]
fn angle_to_measures_shortest_arc() {
    let a = Quat::IDENTITY;
    let b = Quat::from_angle_axis(90.0, Vec3::UP);
    assert!((a.angle_to(&b) - 90.0).abs() < 1e-3);
    let neg = Quat::new(-b.x(), -b.y(), -b.z(), -b.w());
    assert!((a.angle_to(&neg) - 90.0).abs() < 1e-3);
    assert!(b.angle_to(&b) < 0.1);
}

#[test]
fn approx_eq_is_sign_sensitive() {
    let q = Quat::from_angle_axis(40.0, Vec3::UP);
    let neg = Quat::new(-q.x(), -q.y(), -q.z(), -q.w());
    assert!(q.approx_eq(&q));
    assert!(!q.approx_eq(&neg));
    assert_eq!(q.rotate(&Vec3::FORWARD), neg.rotate(&Vec3::FORWARD));
}

#[test]
fn components_and_index_access() {
    let mut q = Quat::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(q.get(3), Ok(4.0));
    assert_eq!(
        q.get(4),
        Err(MathError::IndexOutOfRange { index: 4, len: 4 })
    );
    assert_eq!(q.set(0, -1.0), Ok(()));
    assert_eq!(q.x(), -1.0);
    assert!(q.set(9, 0.0).is_err());

    q.set_xyz(Vec3::new(7.0, 8.0, 9.0));
    assert_eq!(q, Quat::from_xyz_w(Vec3::new(7.0, 8.0, 9.0), 4.0));
    assert_eq!(Quat::from([1.0, 2.0, 3.0, 4.0]).to_array(), [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(<[f32; 4]>::from(Quat::IDENTITY), [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn display_lists_components() {
    assert_eq!(Quat::IDENTITY.to_string(), "X:0 Y:0 Z:0 W:1");
}

#[test]
fn set_look_rotation_overwrites_the_receiver() {
    let target = Vec3::new(1.0, 0.0, 1.0);
    let mut q = Quat::euler(45.0, 0.0, 0.0);
    q.set_look_rotation(target);
    assert_eq!(q, Quat::look_rotation(target));

    q.set_look_rotation_with_up(Vec3::FORWARD, Vec3::RIGHT);
    assert_eq!(q, Quat::look_rotation_with_up(Vec3::FORWARD, Vec3::RIGHT));
    approx_vec(q.rotate(&Vec3::UP), Vec3::RIGHT, 1e-5);
}
