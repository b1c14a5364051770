//! Catalog loading and integrity checks.

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

use super::{Category, ToolNode};

/// The immutable node/category dataset the scene is built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub nodes: Vec<ToolNode>,
}

/// Catalog bundled into the binary, used when no path is given.
static EMBEDDED: Lazy<Catalog> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../assets/catalog.json"))
        .expect("embedded catalog is valid JSON")
});

impl Catalog {
    /// The built-in catalog.
    pub fn embedded() -> Catalog {
        EMBEDDED.clone()
    }

    /// Load a catalog from a JSON file and reject duplicate ids.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&content)?;
        catalog.ensure_unique_ids()?;
        Ok(catalog)
    }

    fn ensure_unique_ids(&self) -> Result<(), AppError> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.id.as_str()) {
                return Err(AppError::DuplicateId {
                    kind: "category",
                    id: category.id.clone(),
                });
            }
        }
        seen.clear();
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(AppError::DuplicateId {
                    kind: "node",
                    id: node.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Ordinal index of a category id.
    pub fn category_index(&self, id: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.id == id)
    }

    /// Collect the recoverable integrity issues in this catalog: nodes whose
    /// category does not exist (skipped by the layout pass) and relationship
    /// targets that resolve to no node (dropped by the connection pass).
    pub fn audit(&self) -> CatalogAudit {
        let known: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        let mut audit = CatalogAudit::default();

        for node in &self.nodes {
            if self.category_index(&node.category).is_none() {
                audit
                    .orphan_nodes
                    .push((node.id.clone(), node.category.clone()));
            }
            for target in node.relations() {
                if !known.contains(target) {
                    audit
                        .dangling_relations
                        .push((node.id.clone(), target.to_string()));
                }
            }
        }

        audit
    }
}

/// Recoverable integrity issues found by [`Catalog::audit`].
#[derive(Debug, Default)]
pub struct CatalogAudit {
    /// `(node id, category id)` pairs where the category does not exist.
    pub orphan_nodes: Vec<(String, String)>,
    /// `(node id, target id)` pairs where the target does not exist.
    pub dangling_relations: Vec<(String, String)>,
}

impl CatalogAudit {
    pub fn is_clean(&self) -> bool {
        self.orphan_nodes.is_empty() && self.dangling_relations.is_empty()
    }
}
