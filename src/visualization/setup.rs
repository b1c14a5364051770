//! Scene setup: camera, lighting, meshes, labels, and UI panels.

use std::f32::consts::TAU;

use bevy::core_pipeline::bloom::Bloom;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::ui::PositionType;

use crate::models::Rgb;

use super::components::{
    CategoryLabel, CategoryOrb, ConnectionMesh, DebugOverlay, InfoPanel, InfoPanelBody,
    InfoPanelTitle, NodeLabel, NodeMesh, Pulse,
};
use super::constants::{
    connection_visual, CATEGORY_ORB_EMISSIVE, CATEGORY_ORB_OPACITY, CATEGORY_ORB_RADIUS,
    CONNECTION_THICKNESS, NODE_OPACITY, NODE_RADIUS, PULSE_EMISSIVE_BASE, PULSE_SPEED_MIN,
    PULSE_SPEED_SPREAD,
};
use super::highlight::EdgeMode;
use super::resources::{
    CameraRigRes, CatalogRes, ConnectionMaterials, GraphIndexRes, SceneLayoutRes, SettingsRes,
};

/// Convert a catalog color to a bevy color.
fn display_color(rgb: Rgb) -> Color {
    let [r, g, b] = rgb.to_f32();
    Color::srgb(r, g, b)
}

/// Deterministic per-node pulse parameters. Golden-ratio striding spreads
/// speeds and phases across the scene without randomness.
fn pulse_for(idx: usize) -> Pulse {
    let stride = idx as f32 * 0.618_034;
    Pulse {
        phase: (idx as f32 * 2.399_963).rem_euclid(TAU),
        speed: PULSE_SPEED_MIN + PULSE_SPEED_SPREAD * stride.fract(),
    }
}

/// Build the whole scene once at startup.
#[allow(clippy::too_many_arguments)]
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    catalog: Res<CatalogRes>,
    layout: Res<SceneLayoutRes>,
    graph: Res<GraphIndexRes>,
    rig: Res<CameraRigRes>,
    settings: Res<SettingsRes>,
) {
    // Camera: HDR + bloom + filmic tone mapping, projection from config.
    commands.spawn((
        Camera3d::default(),
        Camera {
            hdr: true,
            ..default()
        },
        Tonemapping::AcesFitted,
        Bloom::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: settings.0.camera.fov_degrees.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Transform::from_translation(rig.0.position).with_rotation(rig.0.orientation()),
    ));

    // Lighting
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
    });
    commands.spawn((
        PointLight {
            intensity: 500_000.0,
            color: Color::WHITE,
            shadows_enabled: false,
            range: 200.0,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0),
    ));

    // Shared connection materials, one per visual mode. Mode changes swap
    // handles, so the reset baseline is bit-identical to this initial state.
    let connection_material = |mode: EdgeMode, materials: &mut Assets<StandardMaterial>| {
        let (color, opacity) = connection_visual(mode);
        materials.add(StandardMaterial {
            base_color: color.with_alpha(opacity),
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..default()
        })
    };
    let connection_materials = ConnectionMaterials {
        neutral: connection_material(EdgeMode::Neutral, &mut materials),
        active: connection_material(EdgeMode::RelatedActive, &mut materials),
        dimmed: connection_material(EdgeMode::Dimmed, &mut materials),
    };

    // Category orbs and labels
    let orb_mesh = meshes.add(Sphere::new(CATEGORY_ORB_RADIUS).mesh().ico(4).unwrap());
    for anchor in &layout.0.anchors {
        let category = &catalog.0.categories[anchor.category_idx];
        let color = display_color(category.color);
        let emissive = color.to_linear() * CATEGORY_ORB_EMISSIVE;
        let material = materials.add(StandardMaterial {
            base_color: color.with_alpha(CATEGORY_ORB_OPACITY),
            emissive,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });

        commands.spawn((
            Mesh3d(orb_mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(anchor.position),
            CategoryOrb {
                category_idx: anchor.category_idx,
            },
        ));

        commands.spawn((
            Text::new(&category.name),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(color),
            bevy::ui::Node {
                position_type: PositionType::Absolute,
                ..default()
            },
            CategoryLabel {
                category_idx: anchor.category_idx,
            },
        ));
    }

    // Tool nodes and labels. Each node gets its own material instance so the
    // pulse driver can animate emissive intensity per node.
    let node_mesh = meshes.add(Sphere::new(NODE_RADIUS).mesh().ico(4).unwrap());
    for (idx, node) in layout.0.nodes.iter().enumerate() {
        let category = &catalog.0.categories[node.category_idx];
        let color = display_color(category.color);
        let material = materials.add(StandardMaterial {
            base_color: color.with_alpha(NODE_OPACITY),
            emissive: color.to_linear() * PULSE_EMISSIVE_BASE,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });

        commands.spawn((
            Mesh3d(node_mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(node.position),
            NodeMesh { node_idx: idx },
            pulse_for(idx),
        ));

        commands.spawn((
            Text::new(&node.name),
            TextFont {
                font_size: 12.0,
                ..default()
            },
            TextColor(Color::WHITE),
            bevy::ui::Node {
                position_type: PositionType::Absolute,
                ..default()
            },
            NodeLabel { node_idx: idx },
        ));
    }

    // Connections as thin cylinders between laid-out endpoints.
    let connection_mesh = meshes.add(Cylinder::new(CONNECTION_THICKNESS, 1.0));
    for (edge_idx, edge) in graph.0.edges().iter().enumerate() {
        let (Some(a), Some(b)) = (
            layout.0.node_index(edge.a()),
            layout.0.node_index(edge.b()),
        ) else {
            continue;
        };
        let from = layout.0.nodes[a].position;
        let to = layout.0.nodes[b].position;
        let direction = to - from;
        let length = direction.length();
        if length < 0.01 {
            continue;
        }

        let rotation = Quat::from_rotation_arc(Vec3::Y, direction / length);
        commands.spawn((
            Mesh3d(connection_mesh.clone()),
            MeshMaterial3d(connection_materials.neutral.clone()),
            Transform::from_translation((from + to) / 2.0)
                .with_rotation(rotation)
                .with_scale(Vec3::new(1.0, length, 1.0)),
            ConnectionMesh { edge_idx },
        ));
    }

    commands.insert_resource(connection_materials);

    spawn_ui(&mut commands);
}

/// Static UI: info panel, controls hint, debug overlay.
fn spawn_ui(commands: &mut Commands) {
    // Info panel, top right. Hidden until a node is shown.
    commands
        .spawn((
            bevy::ui::Node {
                position_type: PositionType::Absolute,
                right: Val::Px(20.0),
                top: Val::Px(20.0),
                width: Val::Px(300.0),
                padding: UiRect::all(Val::Px(14.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.8)),
            BorderRadius::all(Val::Px(8.0)),
            Visibility::Hidden,
            InfoPanel,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                InfoPanelTitle,
            ));
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                InfoPanelBody,
            ));
        });

    // Controls hint, bottom left.
    commands
        .spawn((
            bevy::ui::Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                bottom: Val::Px(10.0),
                padding: UiRect::all(Val::Px(10.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            BorderRadius::all(Val::Px(6.0)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(
                    "WASD - move    E/Q - up/down\n\
                     Right mouse - hold to look around\n\
                     Left click - pin a node    Esc - clear\n\
                     Shift+D - debug overlay",
                ),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
            ));
        });

    // Debug overlay, top left, toggled with Shift+D.
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.7, 1.0, 0.7)),
        bevy::ui::Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            top: Val::Px(20.0),
            ..default()
        },
        Visibility::Hidden,
        DebugOverlay,
    ));
}
