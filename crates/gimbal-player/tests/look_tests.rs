// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use gimbal_math::{Quat, Vec3};
use gimbal_player::{LookConfig, LookController};
use proptest::prelude::*;

fn approx(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-4, "expected {b}, got {a}");
}

#[test]
fn starts_level_facing_forward() {
    let look = LookController::new(LookConfig::default());
    assert_eq!(look.yaw(), 0.0);
    assert_eq!(look.pitch(), 0.0);
    assert_eq!(look.pose().total, Quat::IDENTITY);
}

#[test]
fn mouse_right_turns_body_right() {
    let mut look = LookController::new(LookConfig::default());
    let pose = look.update(90.0, 0.0);
    approx(look.yaw(), 90.0);
    assert!(pose.body.rotate(&Vec3::FORWARD).approx_eq(&Vec3::RIGHT));
    assert_eq!(pose.camera, Quat::IDENTITY);
}

#[test]
fn mouse_up_pitches_camera_up() {
    let mut look = LookController::new(LookConfig::default());
    let pose = look.update(0.0, 30.0);
    approx(look.pitch(), -30.0);
    assert!(pose.camera.rotate(&Vec3::FORWARD).y() > 0.0);
    assert_eq!(pose.body, Quat::IDENTITY);
}

#[test]
fn pitch_is_clamped_to_configured_range() {
    let mut look = LookController::new(LookConfig::default());
    look.update(0.0, 1000.0);
    assert_eq!(look.pitch(), -90.0);
    look.update(0.0, -1000.0);
    assert_eq!(look.pitch(), 60.0);
}

#[test]
fn inverted_axes_flip_direction() {
    let config = LookConfig {
        invert_x: true,
        invert_y: true,
        ..LookConfig::default()
    };
    let mut look = LookController::new(config);
    look.update(10.0, 5.0);
    approx(look.yaw(), 350.0);
    approx(look.pitch(), 5.0);
}

#[test]
fn sensitivity_scales_deltas() {
    let config = LookConfig {
        sensitivity: 2.0,
        ..LookConfig::default()
    };
    let mut look = LookController::new(config);
    look.update(3.0, -4.0);
    approx(look.yaw(), 6.0);
    approx(look.pitch(), 8.0);
}

#[test]
fn yaw_wraps_into_one_turn() {
    let mut look = LookController::new(LookConfig::default());
    look.update(370.0, 0.0);
    approx(look.yaw(), 10.0);
    look.update(-20.0, 0.0);
    approx(look.yaw(), 350.0);
}

#[test]
fn total_is_body_then_camera() {
    let mut look = LookController::new(LookConfig::default());
    let pose = look.update(40.0, -25.0);
    assert_eq!(pose.total_euler, Vec3::new(look.pitch(), look.yaw(), 0.0));
    assert!(pose.total.approx_eq(&pose.body.multiply(&pose.camera)));
}

#[test]
fn inverted_pitch_range_is_reordered() {
    let config = LookConfig {
        min_pitch: 45.0,
        max_pitch: -45.0,
        ..LookConfig::default()
    };
    let mut look = LookController::new(config);
    look.update(0.0, 500.0);
    assert_eq!(look.pitch(), -45.0);
    assert_eq!(look.config().min_pitch, -45.0);
}

#[test]
fn reset_faces_forward_again() {
    let mut look = LookController::new(LookConfig::default());
    look.update(12.0, 7.0);
    look.reset();
    assert_eq!(look.yaw(), 0.0);
    assert_eq!(look.pitch(), 0.0);
}

proptest! {
    #[test]
    fn pitch_stays_in_range_and_yaw_wraps(
        moves in prop::collection::vec((-720.0f32..720.0, -720.0f32..720.0), 1..32),
    ) {
        let config = LookConfig::default();
        let mut look = LookController::new(config);
        for (dx, dy) in moves {
            look.update(dx, dy);
            prop_assert!(look.pitch() >= config.min_pitch && look.pitch() <= config.max_pitch);
            prop_assert!((0.0..360.0).contains(&look.yaw()));
        }
    }
}
