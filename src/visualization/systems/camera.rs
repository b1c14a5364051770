//! Camera input and movement system.

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

use crate::visualization::camera::MoveIntent;
use crate::visualization::resources::{CameraRigRes, SettingsRes};

/// Drive the camera rig from the per-frame input snapshot.
///
/// Look mode is active while the right mouse button is held; pointer deltas
/// are ignored otherwise. Movement intent comes from WASD plus E/Q for
/// up/down. Runs before every other scene system so label distances and
/// picking see this frame's camera.
pub fn drive_camera(
    mut rig: ResMut<CameraRigRes>,
    settings: Res<SettingsRes>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    time: Res<Time>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    rig.0.look_active = mouse_button.pressed(MouseButton::Right);

    let mut delta = Vec2::ZERO;
    for ev in mouse_motion.read() {
        delta += ev.delta;
    }
    rig.0.apply_look(delta, &settings.0.camera);

    let intent = MoveIntent {
        forward: keyboard.pressed(KeyCode::KeyW),
        back: keyboard.pressed(KeyCode::KeyS),
        left: keyboard.pressed(KeyCode::KeyA),
        right: keyboard.pressed(KeyCode::KeyD),
        up: keyboard.pressed(KeyCode::KeyE),
        down: keyboard.pressed(KeyCode::KeyQ),
    };
    rig.0.advance(time.delta_secs(), intent, &settings.0.camera);

    if let Ok(mut transform) = camera_query.get_single_mut() {
        transform.translation = rig.0.position;
        transform.rotation = rig.0.orientation();
    }
}
