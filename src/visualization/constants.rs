//! Visual constants for the scene.
//!
//! Numeric tunables that users may want to adjust live in [`crate::config`];
//! everything here is fixed styling.

use bevy::prelude::*;

use super::highlight::EdgeMode;

// =============================================================================
// Mesh Sizing
// =============================================================================

/// Tool node sphere radius.
pub const NODE_RADIUS: f32 = 0.5;
/// Pick radius factor: bounding spheres are slightly larger than the visual
/// sphere so clicks near the silhouette still land.
pub const NODE_HIT_FACTOR: f32 = 1.8;
/// Category orb sphere radius.
pub const CATEGORY_ORB_RADIUS: f32 = 2.0;
/// Connection cylinder radius.
pub const CONNECTION_THICKNESS: f32 = 0.05;

// =============================================================================
// Label Placement
// =============================================================================

/// Node labels float this far above the node center.
pub const NODE_LABEL_OFFSET: f32 = 1.0;
/// Category labels float this far above the orb center.
pub const CATEGORY_LABEL_OFFSET: f32 = 3.0;

// =============================================================================
// Connection Visuals
// =============================================================================

/// Neutral connection color (dark gray).
pub const COLOR_CONNECTION_NEUTRAL: Color = Color::srgb(0.27, 0.27, 0.27); // #444444
/// Highlighted connection color (pale blue).
pub const COLOR_CONNECTION_ACTIVE: Color = Color::srgb(0.53, 0.67, 1.0); // #88aaff
/// Neutral connection opacity.
pub const CONNECTION_NEUTRAL_OPACITY: f32 = 0.3;
/// Opacity of connections incident to a pinned node.
pub const CONNECTION_ACTIVE_OPACITY: f32 = 0.8;
/// Opacity of unrelated connections while something is pinned.
pub const CONNECTION_DIMMED_OPACITY: f32 = 0.1;

// =============================================================================
// Label and Glow Visuals
// =============================================================================

/// Category label opacity while any node is pinned.
pub const CATEGORY_LABEL_DIMMED_OPACITY: f32 = 0.2;
/// Node sphere base opacity.
pub const NODE_OPACITY: f32 = 0.9;
/// Category orb opacity.
pub const CATEGORY_ORB_OPACITY: f32 = 0.7;
/// Category orb emissive strength.
pub const CATEGORY_ORB_EMISSIVE: f32 = 0.2;
/// Center of the pulsing node emissive intensity.
pub const PULSE_EMISSIVE_BASE: f32 = 0.3;
/// Amplitude of the pulsing node emissive intensity.
pub const PULSE_EMISSIVE_SWING: f32 = 0.2;
/// Slowest pulse, radians/sec.
pub const PULSE_SPEED_MIN: f32 = 0.5;
/// Additional pulse speed spread across nodes.
pub const PULSE_SPEED_SPREAD: f32 = 0.5;

// =============================================================================
// Helpers
// =============================================================================

/// Connection color and opacity for a visual mode.
pub fn connection_visual(mode: EdgeMode) -> (Color, f32) {
    match mode {
        EdgeMode::Neutral => (COLOR_CONNECTION_NEUTRAL, CONNECTION_NEUTRAL_OPACITY),
        EdgeMode::RelatedActive => (COLOR_CONNECTION_ACTIVE, CONNECTION_ACTIVE_OPACITY),
        EdgeMode::Dimmed => (COLOR_CONNECTION_NEUTRAL, CONNECTION_DIMMED_OPACITY),
    }
}
