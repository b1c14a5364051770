//! Technograph - 3D Technology Knowledge Graph
//!
//! Renders a static catalog of technology tools as a navigable 3D scene:
//! categories on a ring, tools on rising spirals around their category,
//! connections between related tools, and an inertial fly camera.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod visualization;
