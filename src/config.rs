//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. Built-in defaults
//! 2. User config: `~/.config/technograph/config.toml` (XDG) or platform config dir
//! 3. Project config: `technograph.toml` in the working directory
//! 4. Environment variables: `TECHNOGRAPH_*` (sections split on `__`,
//!    e.g. `TECHNOGRAPH_CAMERA__MAX_SPEED=30`)
//!
//! Every value has a default, so running with no config files at all works.
//! The tunables here are the numeric knobs of the scene: layout geometry,
//! camera feel, and label fade distances. Visual styling (colors, mesh sizes)
//! is fixed in `visualization::constants`.

use std::ops::Deref;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub camera: CameraConfig,
    pub labels: LabelConfig,
}

/// Spatial layout geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Radius of the horizontal circle category anchors sit on.
    pub category_radius: f32,
    /// Spiral radius at the first node of a category.
    pub spiral_base_radius: f32,
    /// Additional spiral radius gained across a category group.
    pub spiral_radius_gain: f32,
    /// Height gained across a category group.
    pub spiral_height_gain: f32,
    /// Downward shift recentering the spiral on its anchor.
    pub spiral_height_offset: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            category_radius: 40.0,
            spiral_base_radius: 8.0,
            spiral_radius_gain: 4.0,
            spiral_height_gain: 4.0,
            spiral_height_offset: 2.0,
        }
    }
}

/// Camera movement and look behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Maximum flight speed, units/sec.
    pub max_speed: f32,
    /// Acceleration toward the target velocity, units/sec².
    pub acceleration: f32,
    /// Deceleration toward rest, units/sec². Intentionally smaller than
    /// `acceleration`: the rig stops on a different curve than it starts.
    pub deceleration: f32,
    /// Look rotation per pointer pixel, radians.
    pub look_sensitivity: f32,
    /// Vertical field of view, degrees.
    pub fov_degrees: f32,
    /// Startup camera position.
    pub initial_position: [f32; 3],
    /// Startup pitch, radians (negative looks down).
    pub initial_pitch: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            max_speed: 20.0,
            acceleration: 40.0,
            deceleration: 10.0,
            look_sensitivity: 0.002,
            fov_degrees: 85.0,
            initial_position: [0.0, 50.0, 65.0],
            initial_pitch: -0.75,
        }
    }
}

/// Distance-based label fade thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Labels closer than this render fully opaque.
    pub fade_near: f32,
    /// Labels farther than this are invisible.
    pub fade_far: f32,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            fade_near: 20.0,
            fade_far: 50.0,
        }
    }
}

impl Config {
    /// Load config with layered resolution (defaults → user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        let user_config = Self::user_config_path();

        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(user_config))
            .merge(Toml::file("technograph.toml"))
            .merge(Env::prefixed("TECHNOGRAPH_").split("__"))
            .extract()
            .map_err(ConfigError::from)
    }

    /// User config path: ~/.config/technograph/config.toml (XDG) or platform config dir.
    fn user_config_path() -> std::path::PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("technograph").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("technograph").join("config.toml"))
            .unwrap_or_default()
    }
}
