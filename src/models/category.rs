//! Category records.

use serde::{Deserialize, Serialize};

use super::color::Rgb;

/// A technology category. Categories are loaded once from the catalog and
/// never mutated; a category's ordinal index in the catalog list determines
/// its anchor angle in the scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier referenced by nodes.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display color, parsed from `#rrggbb` at load time.
    pub color: Rgb,
    /// Short description shown in the info panel.
    pub description: String,
}
