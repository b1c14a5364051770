//! Click picking and pin toggling.

use bevy::prelude::*;

use crate::visualization::constants::{NODE_HIT_FACTOR, NODE_RADIUS};
use crate::visualization::pick::{pick, BoundingSphere, PickRay};
use crate::visualization::resources::{CameraRigRes, HighlightRes, InfoSlot, SceneLayoutRes};

/// Resolve left clicks into pin toggles.
///
/// Disabled entirely while the camera is in look mode, so a look-drag never
/// also selects. A hit toggles the node's pinned state and updates the info
/// slot; a miss is a normal no-selection result and leaves highlight state
/// untouched.
#[allow(clippy::too_many_arguments)]
pub fn pick_on_click(
    rig: Res<CameraRigRes>,
    mut highlight: ResMut<HighlightRes>,
    mut info: ResMut<InfoSlot>,
    layout: Res<SceneLayoutRes>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
) {
    // Escape restores the nothing-selected baseline.
    if keyboard.just_pressed(KeyCode::Escape) {
        highlight.0.reset();
        info.clear();
        return;
    }

    if !mouse_button.just_pressed(MouseButton::Left) || rig.0.look_active {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor_pos) else {
        return;
    };

    // Candidates in layout order; equal-distance ties resolve to the first.
    let spheres: Vec<BoundingSphere> = layout
        .0
        .nodes
        .iter()
        .map(|node| BoundingSphere {
            center: node.position,
            radius: NODE_RADIUS * NODE_HIT_FACTOR,
        })
        .collect();

    let pick_ray = PickRay {
        origin: ray.origin,
        direction: *ray.direction,
    };
    let Some(idx) = pick(pick_ray, &spheres) else {
        return;
    };

    let node = &layout.0.nodes[idx];
    if highlight.0.toggle(&node.id) {
        tracing::debug!(node = %node.id, "pinned");
        info.replace(idx);
    } else {
        tracing::debug!(node = %node.id, "unpinned");
        if info.current() == Some(idx) {
            info.clear();
        }
    }
}
