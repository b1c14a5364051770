//! ECS systems for the scene.
//!
//! The plugin chains these in a fixed order each frame: camera advance,
//! click resolution, then visual refresh, so label distances always see the
//! already-updated camera and a pin lands in the same rendered frame.

pub mod camera;
pub mod debug;
pub mod interaction;
pub mod pulse;
pub mod ui;

pub use camera::drive_camera;
pub use debug::{toggle_debug_overlay, update_debug_overlay};
pub use interaction::pick_on_click;
pub use pulse::pulse_nodes;
pub use ui::{
    update_category_labels, update_connection_modes, update_info_panel, update_node_labels,
};
