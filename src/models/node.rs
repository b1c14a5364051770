//! Tool node records.

use serde::{Deserialize, Serialize};

/// A technology tool in the catalog.
///
/// Relationship lists (`links`, `dependencies`, `alternatives`) hold node
/// ids and may reference ids that are not in the catalog; unresolved targets
/// are dropped when the connection set is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolNode {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category id; must match a catalog category.
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    pub description: String,
    pub website: String,
    pub license: String,
    pub created_by: String,
    /// ISO date of the first public release.
    pub first_release_date: String,
    pub programming_language: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub alternatives: Vec<String>,
    /// 0-100 scale.
    pub popularity_score: u8,
    #[serde(default)]
    pub links: Vec<String>,
}

impl ToolNode {
    /// All outgoing relationship targets, across every relationship type.
    pub fn relations(&self) -> impl Iterator<Item = &str> {
        self.links
            .iter()
            .chain(&self.dependencies)
            .chain(&self.alternatives)
            .map(String::as_str)
    }
}
