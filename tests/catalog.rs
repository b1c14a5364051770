//! Integrity tests over the shipped catalog.

use std::collections::HashSet;

use technograph::config::LayoutConfig;
use technograph::models::Catalog;
use technograph::visualization::{compute_layout, GraphIndex};

#[test]
fn embedded_catalog_ids_are_unique() {
    let catalog = Catalog::embedded();
    let mut seen = HashSet::new();
    for category in &catalog.categories {
        assert!(seen.insert(category.id.clone()), "duplicate category {}", category.id);
    }
    seen.clear();
    for node in &catalog.nodes {
        assert!(seen.insert(node.id.clone()), "duplicate node {}", node.id);
    }
}

#[test]
fn embedded_catalog_has_no_orphan_nodes() {
    let catalog = Catalog::embedded();
    let audit = catalog.audit();
    assert!(
        audit.orphan_nodes.is_empty(),
        "nodes with unknown categories: {:?}",
        audit.orphan_nodes
    );
}

#[test]
fn layout_covers_every_node() {
    let catalog = Catalog::embedded();
    let layout = compute_layout(&catalog, &LayoutConfig::default());
    assert_eq!(layout.anchors.len(), catalog.categories.len());
    assert_eq!(layout.nodes.len(), catalog.nodes.len());
    for node in &catalog.nodes {
        assert!(
            layout.node_index(&node.id).is_some(),
            "node {} missing from layout",
            node.id
        );
    }
}

#[test]
fn graph_index_is_symmetric_on_shipped_data() {
    let catalog = Catalog::embedded();
    let index = GraphIndex::build(&catalog.nodes);
    assert!(!index.is_empty());
    // react lists javascript; the edge must answer in both directions.
    assert!(index.neighbors_of("react").contains("javascript"));
    assert!(index.neighbors_of("javascript").contains("react"));
    for edge in index.edges() {
        assert!(index.neighbors_of(edge.a()).contains(edge.b()));
        assert!(index.neighbors_of(edge.b()).contains(edge.a()));
    }
}

#[test]
fn known_mutual_references_collapse_to_one_edge() {
    let catalog = Catalog::embedded();
    let index = GraphIndex::build(&catalog.nodes);
    // tensorflow and pytorch reference each other; exactly one edge survives.
    let count = index
        .edges()
        .iter()
        .filter(|e| e.touches("tensorflow") && e.touches("pytorch"))
        .count();
    assert_eq!(count, 1);
}
