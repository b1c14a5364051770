//! Visualization plugin for Bevy.

use bevy::prelude::*;

use crate::config::Config;
use crate::models::{Catalog, ToolNode};

use super::camera::CameraRig;
use super::graph::GraphIndex;
use super::highlight::HighlightController;
use super::layout::compute_layout;
use super::resources::{
    CameraRigRes, CatalogRes, DebugMode, GraphIndexRes, HighlightRes, InfoSlot, SceneLayoutRes,
    SettingsRes,
};
use super::setup::setup_scene;
use super::systems;

/// Plugin that adds the 3D knowledge-graph scene.
pub struct VisualizationPlugin {
    /// The immutable catalog to render.
    pub catalog: Catalog,
    /// Resolved configuration.
    pub config: Config,
}

impl VisualizationPlugin {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        Self { catalog, config }
    }
}

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        let layout = compute_layout(&self.catalog, &self.config.layout);

        // Connections only make sense between nodes the layout placed;
        // nodes skipped for an unknown category contribute no edges.
        let placed: Vec<ToolNode> = self
            .catalog
            .nodes
            .iter()
            .filter(|n| layout.node_index(&n.id).is_some())
            .cloned()
            .collect();
        let graph = GraphIndex::build(&placed);

        tracing::info!(
            categories = layout.anchors.len(),
            nodes = layout.nodes.len(),
            connections = graph.len(),
            "scene laid out"
        );

        app.insert_resource(SettingsRes(self.config.clone()))
            .insert_resource(CatalogRes(self.catalog.clone()))
            .insert_resource(SceneLayoutRes(layout))
            .insert_resource(GraphIndexRes(graph))
            .insert_resource(HighlightRes(HighlightController::new()))
            .insert_resource(CameraRigRes(CameraRig::new(&self.config.camera)))
            .insert_resource(InfoSlot::default())
            .insert_resource(DebugMode::default())
            .add_systems(Startup, setup_scene)
            // Chained: camera advances before the click resolves, and both
            // complete before label visibility and connection modes refresh,
            // so a pin and its visual consequence land in the same frame.
            .add_systems(
                Update,
                (
                    systems::drive_camera,
                    systems::pick_on_click,
                    systems::update_node_labels,
                    systems::update_category_labels,
                    systems::update_connection_modes,
                    systems::update_info_panel,
                    systems::pulse_nodes,
                    systems::toggle_debug_overlay,
                    systems::update_debug_overlay,
                )
                    .chain(),
            );
    }
}
