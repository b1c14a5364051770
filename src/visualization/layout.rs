//! Deterministic spatial layout.
//!
//! Categories sit on a fixed-radius circle in the horizontal plane; each
//! category's nodes climb a rising spiral around the anchor. Positions are a
//! pure function of catalog order and the layout config - no randomness, no
//! iterative relaxation - so the same catalog always produces the same scene.

use std::collections::HashMap;
use std::f32::consts::TAU;

use bevy::math::Vec3;

use crate::config::LayoutConfig;
use crate::models::Catalog;

/// A category anchor with its laid-out position.
#[derive(Debug, Clone)]
pub struct CategoryAnchor {
    /// Index into the catalog's category list.
    pub category_idx: usize,
    pub position: Vec3,
}

/// A tool node with its laid-out position.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    /// Node id from the catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Index into the catalog's category list.
    pub category_idx: usize,
    /// Index into the catalog's node list.
    pub catalog_idx: usize,
    /// World position, assigned exactly once by the layout pass.
    pub position: Vec3,
}

/// Positions for every anchor and node, plus the id ↔ index maps that tie
/// render entities back to catalog records.
#[derive(Debug, Clone, Default)]
pub struct SceneLayout {
    pub anchors: Vec<CategoryAnchor>,
    pub nodes: Vec<LayoutNode>,
    index_by_id: HashMap<String, usize>,
}

impl SceneLayout {
    /// Index of a node id in `nodes`.
    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }
}

/// Place category `index` of `count` on the anchor circle.
pub fn category_anchor(index: usize, count: usize, cfg: &LayoutConfig) -> Vec3 {
    let angle = index as f32 / count.max(1) as f32 * TAU;
    Vec3::new(
        angle.cos() * cfg.category_radius,
        0.0,
        angle.sin() * cfg.category_radius,
    )
}

/// Place node `j` of `n` on the rising spiral around `anchor`.
///
/// The angle sweeps two full turns across the group; radius and height grow
/// linearly with `j/n`, and the whole spiral is shifted down so it straddles
/// the anchor height.
pub fn node_position(j: usize, n: usize, anchor: Vec3, cfg: &LayoutConfig) -> Vec3 {
    let t = j as f32 / n.max(1) as f32;
    let angle = t * 2.0 * TAU;
    let radius = cfg.spiral_base_radius + cfg.spiral_radius_gain * t;
    Vec3::new(
        anchor.x + angle.cos() * radius,
        anchor.y + cfg.spiral_height_gain * t - cfg.spiral_height_offset,
        anchor.z + angle.sin() * radius,
    )
}

/// Lay out the full catalog.
///
/// Nodes whose category id has no matching category are skipped with a
/// warning; the dataset is external input and must not crash the pass. A
/// category with no nodes still gets an anchor.
pub fn compute_layout(catalog: &Catalog, cfg: &LayoutConfig) -> SceneLayout {
    let count = catalog.categories.len();
    let anchors: Vec<CategoryAnchor> = (0..count)
        .map(|i| CategoryAnchor {
            category_idx: i,
            position: category_anchor(i, count, cfg),
        })
        .collect();

    // Group catalog node indices per category, preserving catalog order.
    let mut per_category: Vec<Vec<usize>> = vec![Vec::new(); count];
    for (idx, node) in catalog.nodes.iter().enumerate() {
        match catalog.category_index(&node.category) {
            Some(ci) => per_category[ci].push(idx),
            None => tracing::warn!(
                node = %node.id,
                category = %node.category,
                "skipping node with unknown category"
            ),
        }
    }

    let mut nodes = Vec::new();
    let mut index_by_id = HashMap::new();
    for (ci, members) in per_category.iter().enumerate() {
        let anchor = anchors[ci].position;
        let n = members.len();
        for (j, &catalog_idx) in members.iter().enumerate() {
            let tool = &catalog.nodes[catalog_idx];
            index_by_id.insert(tool.id.clone(), nodes.len());
            nodes.push(LayoutNode {
                id: tool.id.clone(),
                name: tool.name.clone(),
                category_idx: ci,
                catalog_idx,
                position: node_position(j, n, anchor, cfg),
            });
        }
    }

    SceneLayout {
        anchors,
        nodes,
        index_by_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Rgb, ToolNode};

    const EPSILON: f32 = 1e-4;

    fn cfg() -> LayoutConfig {
        LayoutConfig::default()
    }

    fn category(id: &str) -> Category {
        Category {
            id: id.to_string(),
            name: id.to_uppercase(),
            color: Rgb::from_hex("#44ff44").unwrap(),
            description: String::new(),
        }
    }

    fn node(id: &str, category: &str) -> ToolNode {
        ToolNode {
            id: id.to_string(),
            name: id.to_uppercase(),
            category: category.to_string(),
            sub_category: None,
            description: String::new(),
            website: String::new(),
            license: String::new(),
            created_by: String::new(),
            first_release_date: String::new(),
            programming_language: String::new(),
            dependencies: Vec::new(),
            alternatives: Vec::new(),
            popularity_score: 50,
            links: Vec::new(),
        }
    }

    #[test]
    fn test_anchors_lie_on_circle() {
        let cfg = cfg();
        let count = 9;
        for i in 0..count {
            let anchor = category_anchor(i, count, &cfg);
            assert_eq!(anchor.y, 0.0);
            let radius = (anchor.x * anchor.x + anchor.z * anchor.z).sqrt();
            assert!((radius - cfg.category_radius).abs() < EPSILON);
        }
    }

    #[test]
    fn test_anchor_angular_spacing() {
        let cfg = cfg();
        let count = 6;
        let step = TAU / count as f32;
        for i in 1..count {
            let prev = category_anchor(i - 1, count, &cfg);
            let curr = category_anchor(i, count, &cfg);
            let a_prev = prev.z.atan2(prev.x);
            let a_curr = curr.z.atan2(curr.x);
            let mut delta = a_curr - a_prev;
            if delta < 0.0 {
                delta += TAU;
            }
            assert!((delta - step).abs() < EPSILON);
        }
    }

    #[test]
    fn test_spiral_radius_monotonic_and_angle_step() {
        let cfg = cfg();
        let anchor = Vec3::new(40.0, 0.0, 0.0);
        let n = 10;
        let mut last_radius = 0.0;
        for j in 0..n {
            let pos = node_position(j, n, anchor, &cfg);
            let offset = pos - anchor;
            let radius = (offset.x * offset.x + offset.z * offset.z).sqrt();
            assert!(radius >= last_radius);
            last_radius = radius;

            // Angle advances 4π/n per step: two full revolutions across the group.
            let expected = j as f32 / n as f32 * 2.0 * TAU;
            let angle = offset.z.atan2(offset.x).rem_euclid(TAU);
            assert!((angle - expected.rem_euclid(TAU)).abs() < 1e-3);
        }
    }

    #[test]
    fn test_spiral_height_recentering() {
        let cfg = cfg();
        let anchor = Vec3::ZERO;
        let first = node_position(0, 4, anchor, &cfg);
        assert!((first.y - (-cfg.spiral_height_offset)).abs() < EPSILON);
        let last = node_position(3, 4, anchor, &cfg);
        assert!(last.y > first.y);
    }

    #[test]
    fn test_empty_category_keeps_anchor() {
        let catalog = Catalog {
            categories: vec![category("lang"), category("frontend")],
            nodes: vec![node("python", "lang")],
        };
        let layout = compute_layout(&catalog, &cfg());
        assert_eq!(layout.anchors.len(), 2);
        assert_eq!(layout.nodes.len(), 1);
    }

    #[test]
    fn test_unknown_category_skipped() {
        let catalog = Catalog {
            categories: vec![category("lang")],
            nodes: vec![node("python", "lang"), node("react", "missing")],
        };
        let layout = compute_layout(&catalog, &cfg());
        assert_eq!(layout.nodes.len(), 1);
        assert_eq!(layout.node_index("python"), Some(0));
        assert_eq!(layout.node_index("react"), None);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let catalog = Catalog {
            categories: vec![category("lang"), category("db")],
            nodes: vec![
                node("python", "lang"),
                node("javascript", "lang"),
                node("redis", "db"),
            ],
        };
        let a = compute_layout(&catalog, &cfg());
        let b = compute_layout(&catalog, &cfg());
        for (x, y) in a.nodes.iter().zip(&b.nodes) {
            assert_eq!(x.position, y.position);
        }
    }
}
