//! 3D Knowledge Graph Scene
//!
//! Renders the tool catalog as a navigable 3D scene using Bevy.
//!
//! ## Module Structure
//!
//! - `layout` - Deterministic category/node placement
//! - `graph` - Deduplicated undirected connection index
//! - `highlight` - Pin/dim state machine and label falloff
//! - `camera` - Inertial fly camera
//! - `pick` - Ray picking against node bounding spheres
//! - `components` - ECS components for nodes, orbs, connections, labels
//! - `resources` - ECS resources for state (camera, highlight, catalog)
//! - `systems` - ECS systems (camera, interaction, UI, pulse, debug)
//! - `setup` - Scene initialization
//! - `plugin` - Bevy plugin definition
//! - `constants` - Colors, sizes, and other fixed styling

mod camera;
mod components;
mod constants;
mod graph;
mod highlight;
mod layout;
mod pick;
mod plugin;
mod resources;
mod setup;
mod systems;

pub use camera::{CameraRig, MoveIntent};
pub use graph::{EdgeKey, GraphIndex};
pub use highlight::{distance_falloff, EdgeMode, HighlightController};
pub use layout::{category_anchor, compute_layout, node_position, SceneLayout};
pub use pick::{pick, BoundingSphere, PickRay};
pub use plugin::VisualizationPlugin;

use bevy::prelude::*;

use crate::config::Config;
use crate::models::Catalog;

/// Run the visualizer with a catalog.
///
/// This spawns a Bevy window with the 3D scene. The function blocks until
/// the window is closed.
pub fn run_visualizer(catalog: Catalog, config: Config) {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Technograph".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.05)))
        .add_plugins(VisualizationPlugin::new(catalog, config))
        .run();
}
