//! Debug overlay toggle and readout.

use bevy::prelude::*;

use crate::visualization::components::DebugOverlay;
use crate::visualization::resources::{CameraRigRes, DebugMode};

/// Shift+D flips the overlay on or off. The flip is an idempotent state
/// toggle with no other side effects.
pub fn toggle_debug_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut mode: ResMut<DebugMode>,
    mut overlay_query: Query<&mut Visibility, With<DebugOverlay>>,
) {
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);
    if !(shift && keyboard.just_pressed(KeyCode::KeyD)) {
        return;
    }
    mode.0 = !mode.0;
    for mut visibility in overlay_query.iter_mut() {
        *visibility = if mode.0 {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

/// Refresh the camera readout while the overlay is visible.
pub fn update_debug_overlay(
    mode: Res<DebugMode>,
    rig: Res<CameraRigRes>,
    mut text_query: Query<&mut Text, With<DebugOverlay>>,
) {
    if !mode.0 {
        return;
    }
    let Ok(mut text) = text_query.get_single_mut() else {
        return;
    };
    let pos = rig.0.position;
    **text = format!(
        "camera\n  x {:>8.2}\n  y {:>8.2}\n  z {:>8.2}\n  yaw {:>7.1}°\n  pitch {:>5.1}°\n  speed {:>5.2}",
        pos.x,
        pos.y,
        pos.z,
        rig.0.yaw.to_degrees(),
        rig.0.pitch.to_degrees(),
        rig.0.velocity.length(),
    );
}
