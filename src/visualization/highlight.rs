//! Highlight state machine over labels and connections.
//!
//! The only stored state is the set of pinned node ids. Every visual
//! parameter - per-edge mode, per-label opacity, category-label dimming - is
//! derived from that set on demand, so the visuals can never drift out of
//! sync with the selection.

use std::collections::HashSet;

use bevy::math::Vec3;

use crate::config::LabelConfig;

use super::constants::CATEGORY_LABEL_DIMMED_OPACITY;
use super::graph::EdgeKey;

/// Visual mode of a connection, derived from the pinned set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeMode {
    /// Baseline: fixed neutral color at low opacity.
    Neutral,
    /// Incident to a pinned node: highlight color, high opacity.
    RelatedActive,
    /// Not incident to any pinned node while something is pinned.
    Dimmed,
}

/// Owns which nodes are pinned and derives edge/label visual parameters.
#[derive(Debug, Clone, Default)]
pub struct HighlightController {
    pinned: HashSet<String>,
}

impl HighlightController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin a node: its label renders fully opaque and its connections switch
    /// to the active mode. Pinning an already-pinned node is a no-op.
    pub fn pin(&mut self, id: &str) {
        self.pinned.insert(id.to_string());
    }

    /// Unpin a node. Unpinning a node that was never pinned is a no-op.
    pub fn unpin(&mut self, id: &str) {
        self.pinned.remove(id);
    }

    /// Flip the pin state of a node; returns true when it ends up pinned.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.is_pinned(id) {
            self.unpin(id);
            false
        } else {
            self.pin(id);
            true
        }
    }

    /// Restore the canonical nothing-selected baseline. Produces the same
    /// derived visuals as a freshly constructed controller.
    pub fn reset(&mut self) {
        self.pinned.clear();
    }

    pub fn is_pinned(&self, id: &str) -> bool {
        self.pinned.contains(id)
    }

    pub fn any_pinned(&self) -> bool {
        !self.pinned.is_empty()
    }

    /// Derived visual mode for one edge.
    pub fn edge_mode(&self, edge: &EdgeKey) -> EdgeMode {
        if self.pinned.is_empty() {
            EdgeMode::Neutral
        } else if self.pinned.iter().any(|id| edge.touches(id)) {
            EdgeMode::RelatedActive
        } else {
            EdgeMode::Dimmed
        }
    }

    /// Category labels dim while anything is pinned.
    pub fn category_label_opacity(&self) -> f32 {
        if self.any_pinned() {
            CATEGORY_LABEL_DIMMED_OPACITY
        } else {
            1.0
        }
    }

    /// Per-label opacity for one node: pinned labels are always fully
    /// opaque; everything else fades with distance from the camera.
    pub fn label_opacity(
        &self,
        id: &str,
        label_pos: Vec3,
        camera_pos: Vec3,
        cfg: &LabelConfig,
    ) -> f32 {
        if self.is_pinned(id) {
            return 1.0;
        }
        distance_falloff(label_pos.distance(camera_pos), cfg)
    }
}

/// Clamped linear falloff: 1.0 at or below `fade_near`, 0.0 at or beyond
/// `fade_far`, linear in between. A degenerate config (`fade_far <=
/// fade_near`) degrades to a hard cutoff instead of dividing by zero.
pub fn distance_falloff(distance: f32, cfg: &LabelConfig) -> f32 {
    let span = cfg.fade_far - cfg.fade_near;
    if span <= 0.0 {
        return if distance <= cfg.fade_near { 1.0 } else { 0.0 };
    }
    1.0 - ((distance - cfg.fade_near) / span).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> LabelConfig {
        LabelConfig::default()
    }

    fn edges() -> Vec<EdgeKey> {
        vec![
            EdgeKey::new("n1", "n3"),
            EdgeKey::new("n2", "n3"),
            EdgeKey::new("n4", "n5"),
        ]
    }

    /// Full derived snapshot for comparing states structurally.
    fn snapshot(hc: &HighlightController, edges: &[EdgeKey]) -> (Vec<EdgeMode>, f32) {
        (
            edges.iter().map(|e| hc.edge_mode(e)).collect(),
            hc.category_label_opacity(),
        )
    }

    #[test]
    fn test_pin_activates_incident_edges_only() {
        let edges = edges();
        let mut hc = HighlightController::new();
        hc.pin("n1");
        assert_eq!(hc.edge_mode(&edges[0]), EdgeMode::RelatedActive);
        assert_eq!(hc.edge_mode(&edges[1]), EdgeMode::Dimmed);
        assert_eq!(hc.edge_mode(&edges[2]), EdgeMode::Dimmed);
    }

    #[test]
    fn test_category_dim_iff_pinned_nonempty() {
        let mut hc = HighlightController::new();
        assert_eq!(hc.category_label_opacity(), 1.0);
        hc.pin("n1");
        assert!(hc.category_label_opacity() < 1.0);
        hc.unpin("n1");
        assert_eq!(hc.category_label_opacity(), 1.0);
    }

    #[test]
    fn test_pin_unpin_roundtrip_matches_reset() {
        let edges = edges();
        let mut reset_state = HighlightController::new();
        reset_state.pin("n1");
        reset_state.reset();
        let baseline = snapshot(&reset_state, &edges);

        let mut hc = HighlightController::new();
        hc.pin("n1");
        hc.unpin("n1");
        assert_eq!(snapshot(&hc, &edges), baseline);
        assert_eq!(
            baseline.0,
            vec![EdgeMode::Neutral, EdgeMode::Neutral, EdgeMode::Neutral]
        );
    }

    #[test]
    fn test_pin_is_idempotent() {
        let edges = edges();
        let mut once = HighlightController::new();
        once.pin("n1");
        let mut twice = HighlightController::new();
        twice.pin("n1");
        twice.pin("n1");
        assert_eq!(snapshot(&once, &edges), snapshot(&twice, &edges));
        // Double pin still unpins with a single unpin.
        twice.unpin("n1");
        assert!(!twice.any_pinned());
    }

    #[test]
    fn test_unpin_never_pinned_is_noop() {
        let mut hc = HighlightController::new();
        hc.pin("n1");
        hc.unpin("ghost");
        assert!(hc.is_pinned("n1"));
    }

    #[test]
    fn test_second_pin_keeps_first_active() {
        let edges = edges();
        let mut hc = HighlightController::new();
        hc.pin("n1");
        hc.pin("n4");
        assert_eq!(hc.edge_mode(&edges[0]), EdgeMode::RelatedActive);
        assert_eq!(hc.edge_mode(&edges[2]), EdgeMode::RelatedActive);
        assert_eq!(hc.edge_mode(&edges[1]), EdgeMode::Dimmed);
        hc.unpin("n4");
        assert_eq!(hc.edge_mode(&edges[2]), EdgeMode::Dimmed);
    }

    #[test]
    fn test_falloff_thresholds() {
        let cfg = cfg();
        assert_eq!(distance_falloff(0.0, &cfg), 1.0);
        assert_eq!(distance_falloff(cfg.fade_near, &cfg), 1.0);
        assert_eq!(distance_falloff(cfg.fade_far, &cfg), 0.0);
        assert_eq!(distance_falloff(cfg.fade_far + 100.0, &cfg), 0.0);
        let mid = (cfg.fade_near + cfg.fade_far) / 2.0;
        assert!((distance_falloff(mid, &cfg) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_pinned_label_ignores_distance() {
        let cfg = cfg();
        let mut hc = HighlightController::new();
        hc.pin("n1");
        let far = Vec3::new(1000.0, 0.0, 0.0);
        assert_eq!(hc.label_opacity("n1", far, Vec3::ZERO, &cfg), 1.0);
        assert_eq!(hc.label_opacity("n2", far, Vec3::ZERO, &cfg), 0.0);
    }

    #[test]
    fn test_degenerate_fade_span() {
        let cfg = LabelConfig {
            fade_near: 30.0,
            fade_far: 30.0,
        };
        assert_eq!(distance_falloff(10.0, &cfg), 1.0);
        assert_eq!(distance_falloff(31.0, &cfg), 0.0);
    }
}
