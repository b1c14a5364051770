//! ECS resources for scene state.
//!
//! Each core component owns its state exclusively: the rig owns the camera,
//! the highlight controller owns the pinned set, the layout owns positions.
//! Systems read from the others but only the owner mutates.

use bevy::prelude::*;

use crate::config::Config;
use crate::models::Catalog;

use super::camera::CameraRig;
use super::graph::GraphIndex;
use super::highlight::{EdgeMode, HighlightController};
use super::layout::SceneLayout;

/// The immutable catalog the scene was built from.
#[derive(Resource)]
pub struct CatalogRes(pub Catalog);

/// Node and anchor positions. Written once at startup, read-only after.
#[derive(Resource)]
pub struct SceneLayoutRes(pub SceneLayout);

/// The deduplicated connection set.
#[derive(Resource)]
pub struct GraphIndexRes(pub GraphIndex);

/// Highlight state machine. No other resource stores visual state.
#[derive(Resource)]
pub struct HighlightRes(pub HighlightController);

/// Camera transform and velocity state.
#[derive(Resource)]
pub struct CameraRigRes(pub CameraRig);

/// Resolved configuration.
#[derive(Resource, Clone)]
pub struct SettingsRes(pub Config);

/// Debug overlay toggle. Flipping it is idempotent.
#[derive(Resource, Default)]
pub struct DebugMode(pub bool);

/// Single-slot register for the info panel.
///
/// Replacing the slot swaps the panel content atomically; there is never a
/// transient empty panel between two selections.
#[derive(Resource, Default)]
pub struct InfoSlot {
    current: Option<usize>,
}

impl InfoSlot {
    /// Create-or-replace the displayed node.
    pub fn replace(&mut self, node_idx: usize) {
        self.current = Some(node_idx);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Layout index of the node currently shown, if any.
    pub fn current(&self) -> Option<usize> {
        self.current
    }
}

/// Shared material handles for the three connection visual modes.
///
/// Connections swap between these handles instead of mutating materials, so
/// a mode change is a handle assignment and the baseline after `reset` is
/// bit-identical to the initial state.
#[derive(Resource)]
pub struct ConnectionMaterials {
    pub neutral: Handle<StandardMaterial>,
    pub active: Handle<StandardMaterial>,
    pub dimmed: Handle<StandardMaterial>,
}

impl ConnectionMaterials {
    pub fn for_mode(&self, mode: EdgeMode) -> Handle<StandardMaterial> {
        match mode {
            EdgeMode::Neutral => self.neutral.clone(),
            EdgeMode::RelatedActive => self.active.clone(),
            EdgeMode::Dimmed => self.dimmed.clone(),
        }
    }
}
