use bevy::prelude::*;
use bevy::input::{keyboard::KeyCode, ButtonInput};

use crate::actions::{PlayerAction, ActionState};
use crate::manifest::CurrentScene;
use crate::setup::MainCamera;

pub const MAX_CAMERA_DT: f32 = 0.05; // never use a dt larger than 50ms

pub fn input_mapping_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut action_state: ResMut<ActionState>,
) {
    action_state.set(PlayerAction::MoveLeft, keys.pressed(KeyCode::ArrowLeft));
    action_state.set(PlayerAction::MoveRight, keys.pressed(KeyCode::ArrowRight));
    action_state.set(PlayerAction::MoveForward, keys.pressed(KeyCode::ArrowUp));
    action_state.set(PlayerAction::MoveBackward, keys.pressed(KeyCode::ArrowDown));
    action_state.set(PlayerAction::YawLeft, keys.pressed(KeyCode::KeyL));
    action_state.set(PlayerAction::YawRight, keys.pressed(KeyCode::KeyR));
}

/// Slide the camera on world X/Z and yaw it in place; no pitch, no zoom.
pub fn camera_controller(
    time: Res<Time>,
    scene: Res<CurrentScene>,
    action_state: Res<ActionState>,
    mut query: Query<&mut Transform, With<MainCamera>>,
) {
    // 0) Clamp delta
    let mut dt = time.delta_secs();
    if dt > MAX_CAMERA_DT {
        dt = MAX_CAMERA_DT;
    }

    let Ok(mut tf) = query.single_mut() else { return; };
    let cam = &scene.0.camera;

    // 1) Axis-aligned slide
    let mut dir = Vec3::ZERO;
    if action_state.pressed(PlayerAction::MoveLeft) { dir.x -= 1.0; }
    if action_state.pressed(PlayerAction::MoveRight) { dir.x += 1.0; }
    if action_state.pressed(PlayerAction::MoveForward) { dir.z -= 1.0; }
    if action_state.pressed(PlayerAction::MoveBackward) { dir.z += 1.0; }

    if dir != Vec3::ZERO {
        tf.translation += dir.normalize() * cam.move_speed * dt;
    }

    // 2) Yaw
    let mut yaw = 0.0;
    if action_state.pressed(PlayerAction::YawLeft) { yaw += cam.yaw_speed * dt; }
    if action_state.pressed(PlayerAction::YawRight) { yaw -= cam.yaw_speed * dt; }

    if yaw != 0.0 {
        tf.rotate_y(yaw);
    }
}
