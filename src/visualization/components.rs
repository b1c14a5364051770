//! ECS components for the scene.

use bevy::prelude::*;

/// Marker component for tool node meshes.
#[derive(Component)]
pub struct NodeMesh {
    /// Index into the layout's node list.
    pub node_idx: usize,
}

/// Marker component for category orb meshes.
#[derive(Component)]
pub struct CategoryOrb {
    /// Index into the catalog's category list.
    pub category_idx: usize,
}

/// A connection cylinder between two laid-out nodes.
#[derive(Component)]
pub struct ConnectionMesh {
    /// Index into the graph index's edge list.
    pub edge_idx: usize,
}

/// UI label following a tool node in screen space.
#[derive(Component)]
pub struct NodeLabel {
    pub node_idx: usize,
}

/// UI label following a category anchor in screen space.
#[derive(Component)]
pub struct CategoryLabel {
    pub category_idx: usize,
}

/// Per-node glow phase, advanced once per tick by the pulse driver system.
/// An entity stops pulsing simply by no longer matching the driver's query.
#[derive(Component)]
pub struct Pulse {
    /// Current phase, radians.
    pub phase: f32,
    /// Phase advance rate, radians/sec.
    pub speed: f32,
}

/// Marker component for the info panel root.
#[derive(Component)]
pub struct InfoPanel;

/// Marker component for the info panel title text.
#[derive(Component)]
pub struct InfoPanelTitle;

/// Marker component for the info panel body text.
#[derive(Component)]
pub struct InfoPanelBody;

/// Marker component for the debug overlay text.
#[derive(Component)]
pub struct DebugOverlay;
