//! Connection index derived from catalog relationship lists.
//!
//! Source relationships are asymmetric (A may list B without B listing A)
//! and spread across three lists per node. Once built, every relationship
//! collapses into a single undirected edge keyed by the sorted id pair, and
//! neighbor queries answer symmetrically in either direction.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::models::ToolNode;

/// Canonical order-independent key for an undirected edge.
///
/// `(a, b)` and `(b, a)` produce the same key; the lexicographically smaller
/// id always comes first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    a: String,
    b: String,
}

impl EdgeKey {
    pub fn new(x: &str, y: &str) -> Self {
        if x <= y {
            Self {
                a: x.to_string(),
                b: y.to_string(),
            }
        } else {
            Self {
                a: y.to_string(),
                b: x.to_string(),
            }
        }
    }

    pub fn a(&self) -> &str {
        &self.a
    }

    pub fn b(&self) -> &str {
        &self.b
    }

    /// Whether `id` is one of the endpoints.
    pub fn touches(&self, id: &str) -> bool {
        self.a == id || self.b == id
    }

    /// The endpoint opposite `id`, if `id` is an endpoint.
    pub fn other(&self, id: &str) -> Option<&str> {
        if self.a == id {
            Some(&self.b)
        } else if self.b == id {
            Some(&self.a)
        } else {
            None
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

/// Deduplicated undirected edge set with neighbor lookup.
#[derive(Debug, Clone, Default)]
pub struct GraphIndex {
    /// Edges in first-insertion order. Render entities index into this.
    edges: Vec<EdgeKey>,
    /// Canonical key → index into `edges`.
    by_key: HashMap<EdgeKey, usize>,
    /// Node id → indices of incident edges.
    incident: HashMap<String, Vec<usize>>,
}

impl GraphIndex {
    /// Build the edge set from every node's links, dependencies, and
    /// alternatives.
    ///
    /// Targets missing from the node set are silently dropped (the dataset
    /// may be partial), as are self references. However many lists mention a
    /// pair, it collapses to one edge.
    pub fn build(nodes: &[ToolNode]) -> Self {
        let known: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        let mut index = Self::default();
        for node in nodes {
            for target in node.relations() {
                if target == node.id || !known.contains(target) {
                    continue;
                }
                index.insert(EdgeKey::new(&node.id, target));
            }
        }
        index
    }

    fn insert(&mut self, key: EdgeKey) {
        if self.by_key.contains_key(&key) {
            return;
        }
        let idx = self.edges.len();
        self.by_key.insert(key.clone(), idx);
        self.incident.entry(key.a.clone()).or_default().push(idx);
        self.incident.entry(key.b.clone()).or_default().push(idx);
        self.edges.push(key);
    }

    pub fn edges(&self) -> &[EdgeKey] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, x: &str, y: &str) -> bool {
        self.by_key.contains_key(&EdgeKey::new(x, y))
    }

    /// Indices of edges incident to `id`.
    pub fn incident_edges(&self, id: &str) -> &[usize] {
        self.incident.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All ids connected to `id` via any relationship type, in either
    /// direction.
    pub fn neighbors_of(&self, id: &str) -> HashSet<&str> {
        self.incident_edges(id)
            .iter()
            .filter_map(|&idx| self.edges[idx].other(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, links: &[&str], dependencies: &[&str], alternatives: &[&str]) -> ToolNode {
        ToolNode {
            id: id.to_string(),
            name: id.to_uppercase(),
            category: "lang".to_string(),
            sub_category: None,
            description: String::new(),
            website: String::new(),
            license: String::new(),
            created_by: String::new(),
            first_release_date: String::new(),
            programming_language: String::new(),
            dependencies: dependencies.iter().map(|s| s.to_string()).collect(),
            alternatives: alternatives.iter().map(|s| s.to_string()).collect(),
            popularity_score: 50,
            links: links.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_key_is_order_independent() {
        assert_eq!(EdgeKey::new("react", "javascript"), EdgeKey::new("javascript", "react"));
        assert_eq!(EdgeKey::new("a", "b").to_string(), "a-b");
        assert_eq!(EdgeKey::new("b", "a").to_string(), "a-b");
    }

    #[test]
    fn test_build_is_symmetric() {
        let nodes = vec![node("a", &["b"], &[], &[]), node("b", &[], &[], &[])];
        let index = GraphIndex::build(&nodes);
        assert_eq!(index.len(), 1);
        assert!(index.neighbors_of("a").contains("b"));
        assert!(index.neighbors_of("b").contains("a"));
    }

    #[test]
    fn test_redundant_reverse_link_deduplicates() {
        let nodes = vec![node("a", &["b"], &[], &[]), node("b", &["a"], &[], &[])];
        let index = GraphIndex::build(&nodes);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_all_relationship_types_collapse_to_one_edge() {
        let nodes = vec![node("a", &["b"], &["b"], &["b"]), node("b", &[], &[], &[])];
        let index = GraphIndex::build(&nodes);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_unknown_target_dropped() {
        let nodes = vec![node("a", &["ghost"], &[], &[])];
        let index = GraphIndex::build(&nodes);
        assert!(index.is_empty());
        assert!(index.neighbors_of("a").is_empty());
    }

    #[test]
    fn test_self_reference_dropped() {
        let nodes = vec![node("a", &["a"], &[], &[])];
        let index = GraphIndex::build(&nodes);
        assert!(index.is_empty());
    }

    #[test]
    fn test_cross_category_scenario() {
        // n1 ∈ catA links n3 ∈ catB: exactly one edge, canonical key "n1-n3".
        let nodes = vec![
            node("n1", &["n3"], &[], &[]),
            node("n2", &[], &[], &[]),
            node("n3", &[], &[], &[]),
        ];
        let index = GraphIndex::build(&nodes);
        assert_eq!(index.len(), 1);
        assert_eq!(index.edges()[0].to_string(), "n1-n3");
        assert!(index.contains("n3", "n1"));
        assert!(!index.contains("n2", "n3"));
    }
}
