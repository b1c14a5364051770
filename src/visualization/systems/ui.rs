//! UI systems: labels, connection visuals, and the info panel.

use bevy::prelude::*;
use bevy::ui::Node as UiNode;

use crate::visualization::components::{
    CategoryLabel, ConnectionMesh, InfoPanel, InfoPanelBody, InfoPanelTitle, NodeLabel,
};
use crate::visualization::constants::{CATEGORY_LABEL_OFFSET, NODE_LABEL_OFFSET};
use crate::visualization::resources::{
    CameraRigRes, CatalogRes, ConnectionMaterials, GraphIndexRes, HighlightRes, InfoSlot,
    SceneLayoutRes, SettingsRes,
};

/// Project a world position to the viewport, returning `None` when it is
/// behind the camera.
fn project(
    camera: &Camera,
    camera_transform: &GlobalTransform,
    world_pos: Vec3,
) -> Option<Vec2> {
    let to_target = world_pos - camera_transform.translation();
    if to_target.dot(*camera_transform.forward()) <= 0.0 {
        return None;
    }
    camera.world_to_viewport(camera_transform, world_pos).ok()
}

/// Refresh node label positions and opacity.
///
/// Pinned labels render fully opaque at any range; the rest fade with
/// distance from the camera. Runs after the camera system so distances use
/// this frame's position.
pub fn update_node_labels(
    layout: Res<SceneLayoutRes>,
    highlight: Res<HighlightRes>,
    rig: Res<CameraRigRes>,
    settings: Res<SettingsRes>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut label_query: Query<(&mut UiNode, &mut Visibility, &mut TextColor, &NodeLabel)>,
) {
    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        return;
    };

    for (mut ui_node, mut visibility, mut text_color, label) in label_query.iter_mut() {
        let Some(node) = layout.0.nodes.get(label.node_idx) else {
            continue;
        };
        let world_pos = node.position + Vec3::Y * NODE_LABEL_OFFSET;
        let opacity =
            highlight
                .0
                .label_opacity(&node.id, world_pos, rig.0.position, &settings.0.labels);

        let viewport_pos = match project(camera, camera_transform, world_pos) {
            Some(pos) if opacity > 0.0 => pos,
            _ => {
                *visibility = Visibility::Hidden;
                continue;
            }
        };

        *visibility = Visibility::Visible;
        text_color.0 = Color::srgba(1.0, 1.0, 1.0, opacity);
        ui_node.left = Val::Px(viewport_pos.x - 40.0);
        ui_node.top = Val::Px(viewport_pos.y - 10.0);
    }
}

/// Refresh category label positions; dim them while anything is pinned.
pub fn update_category_labels(
    layout: Res<SceneLayoutRes>,
    catalog: Res<CatalogRes>,
    highlight: Res<HighlightRes>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut label_query: Query<(&mut UiNode, &mut Visibility, &mut TextColor, &CategoryLabel)>,
) {
    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        return;
    };
    let opacity = highlight.0.category_label_opacity();

    for (mut ui_node, mut visibility, mut text_color, label) in label_query.iter_mut() {
        let Some(anchor) = layout.0.anchors.get(label.category_idx) else {
            continue;
        };
        let world_pos = anchor.position + Vec3::Y * CATEGORY_LABEL_OFFSET;

        let Some(viewport_pos) = project(camera, camera_transform, world_pos) else {
            *visibility = Visibility::Hidden;
            continue;
        };

        let [r, g, b] = catalog.0.categories[label.category_idx].color.to_f32();
        *visibility = Visibility::Visible;
        text_color.0 = Color::srgba(r, g, b, opacity);
        ui_node.left = Val::Px(viewport_pos.x - 50.0);
        ui_node.top = Val::Px(viewport_pos.y - 10.0);
    }
}

/// Assign each connection the material for its derived visual mode.
///
/// Modes are derived fresh from the pinned set every frame; connections
/// never store visual state of their own.
pub fn update_connection_modes(
    highlight: Res<HighlightRes>,
    graph: Res<GraphIndexRes>,
    materials: Res<ConnectionMaterials>,
    mut connection_query: Query<(&ConnectionMesh, &mut MeshMaterial3d<StandardMaterial>)>,
) {
    for (connection, mut material) in connection_query.iter_mut() {
        let Some(edge) = graph.0.edges().get(connection.edge_idx) else {
            continue;
        };
        let handle = materials.for_mode(highlight.0.edge_mode(edge));
        if material.0 != handle {
            *material = MeshMaterial3d(handle);
        }
    }
}

/// Rebuild the info panel when the slot changes.
pub fn update_info_panel(
    info: Res<InfoSlot>,
    layout: Res<SceneLayoutRes>,
    catalog: Res<CatalogRes>,
    mut panel_query: Query<&mut Visibility, With<InfoPanel>>,
    mut title_query: Query<(&mut Text, &mut TextColor), (With<InfoPanelTitle>, Without<InfoPanelBody>)>,
    mut body_query: Query<&mut Text, (With<InfoPanelBody>, Without<InfoPanelTitle>)>,
) {
    if !info.is_changed() {
        return;
    }
    let Ok(mut visibility) = panel_query.get_single_mut() else {
        return;
    };

    let Some(node_idx) = info.current() else {
        *visibility = Visibility::Hidden;
        return;
    };
    let Some(node) = layout.0.nodes.get(node_idx) else {
        *visibility = Visibility::Hidden;
        return;
    };

    let tool = &catalog.0.nodes[node.catalog_idx];
    let category = &catalog.0.categories[node.category_idx];
    let [r, g, b] = category.color.to_f32();

    if let Ok((mut title, mut title_color)) = title_query.get_single_mut() {
        **title = tool.name.clone();
        title_color.0 = Color::srgb(r, g, b);
    }
    if let Ok(mut body) = body_query.get_single_mut() {
        **body = format!(
            "{}\n\nCategory: {}\nWebsite: {}\nLicense: {}\nPopularity: {}/100",
            tool.description, category.name, tool.website, tool.license, tool.popularity_score
        );
    }
    *visibility = Visibility::Visible;
}
