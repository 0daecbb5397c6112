// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use gimbal_math::{Quat, Vec3};
use gimbal_player::Transform;

fn approx_vec(a: Vec3, b: Vec3) {
    assert!(
        (a - b).to_array().iter().all(|c| c.abs() < 1e-5),
        "expected {b}, got {a}"
    );
}

fn yawed(degrees: f32) -> Transform {
    Transform::new(Vec3::ZERO, Quat::euler(0.0, degrees, 0.0))
}

#[test]
fn identity_axes_are_the_local_axes() {
    let t = Transform::identity();
    assert_eq!(t.forward(), Vec3::FORWARD);
    assert_eq!(t.right(), Vec3::RIGHT);
    assert_eq!(t.up(), Vec3::UP);
}

#[test]
fn yaw_turns_forward_and_right_but_not_up() {
    let t = yawed(90.0);
    approx_vec(t.forward(), Vec3::RIGHT);
    approx_vec(t.right(), Vec3::BACK);
    approx_vec(t.up(), Vec3::UP);
}

#[test]
fn rotate_euler_turns_about_local_axes() {
    let mut t = yawed(90.0);
    t.rotate_euler(Vec3::new(90.0, 0.0, 0.0));
    // Pitching about the yawed body's own X tips forward down; a world-X
    // pitch would have left it pointing right.
    approx_vec(t.forward(), Vec3::DOWN);
    approx_vec(t.right(), Vec3::BACK);
    assert!((t.rotation().length() - 1.0).abs() < 1e-6);
}

#[test]
fn transform_point_rotates_then_translates() {
    let t = Transform::new(Vec3::new(1.0, 2.0, 3.0), Quat::euler(0.0, 90.0, 0.0));
    approx_vec(t.transform_point(Vec3::FORWARD), Vec3::new(2.0, 2.0, 3.0));
    approx_vec(t.transform_point(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn translate_local_follows_the_rotation() {
    let mut t = yawed(90.0);
    let world = t.translate_local(Vec3::new(0.0, 0.0, 2.0));
    approx_vec(world, Vec3::new(2.0, 0.0, 0.0));
    approx_vec(t.translation(), Vec3::new(2.0, 0.0, 0.0));
    t.translate_world(Vec3::UP);
    approx_vec(t.translation(), Vec3::new(2.0, 1.0, 0.0));
}

#[test]
fn setters_replace_components() {
    let mut t = Transform::identity();
    t.set_translation(Vec3::new(4.0, 5.0, 6.0));
    assert_eq!(t.translation(), Vec3::new(4.0, 5.0, 6.0));

    t.set_euler_angles(Vec3::new(10.0, 20.0, 30.0));
    let angles = t.euler_angles();
    for (got, want) in angles.to_array().into_iter().zip([10.0, 20.0, 30.0]) {
        assert!((got - want).abs() < 1e-3, "got {angles}");
    }
    assert_eq!(t.translation(), Vec3::new(4.0, 5.0, 6.0));
}

#[test]
fn new_and_set_rotation_normalise() {
    let t = Transform::new(Vec3::ZERO, Quat::new(0.0, 0.0, 0.0, 4.0));
    assert_eq!(t.rotation(), Quat::IDENTITY);
    let mut t = Transform::default();
    t.set_rotation(Quat::new(0.0, 2.0, 0.0, 0.0));
    assert_eq!(t.rotation(), Quat::new(0.0, 1.0, 0.0, 0.0));
}
