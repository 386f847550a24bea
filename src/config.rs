//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`W4D_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_4;
use std::path::Path;

use wire4d_math::Plane4;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Camera eye points for each projection stage
    #[serde(default)]
    pub camera: CameraConfig,
    /// Target hyperplane for each projection stage
    #[serde(default)]
    pub projection: ProjectionConfig,
    /// Rotation sequence applied to the 4D shape before projection,
    /// in order
    #[serde(default = "default_rotation")]
    pub rotation: Vec<RotationStep>,
    /// Diagram rendering options
    #[serde(default)]
    pub diagram: DiagramConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            projection: ProjectionConfig::default(),
            rotation: default_rotation(),
            diagram: DiagramConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`W4D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // W4D_DIAGRAM__SCALE=3.0 -> diagram.scale = 3.0
        figment = figment.merge(Env::prefixed("W4D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Camera eye points, one per projection stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// 4D eye point for the 4D -> 3D stage [x, y, z, w]
    pub position4: [f64; 4],
    /// 3D eye point for the 3D -> 2D stage [x, y, z]
    pub position3: [f64; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position4: [0.0, 0.0, 0.0, -2.0],
            position3: [0.0, 0.0, -2.0],
        }
    }
}

/// Target hyperplanes, each the fixed value of the dropped coordinate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Fixed w of the 4D -> 3D target hyperplane
    pub plane_w: f64,
    /// Fixed z of the 3D -> 2D target hyperplane
    pub plane_z: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            plane_w: -1.0,
            plane_z: -1.0,
        }
    }
}

/// One rotation of the 4D shape: a named plane and an angle in radians
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RotationStep {
    /// The rotation plane
    pub plane: Plane4,
    /// The rotation angle in radians
    pub angle: f64,
}

fn default_rotation() -> Vec<RotationStep> {
    vec![RotationStep {
        plane: Plane4::XW,
        angle: FRAC_PI_4,
    }]
}

/// Diagram rendering options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramConfig {
    /// tikzpicture scale factor
    pub scale: f64,
    /// Radius of the filled vertex markers
    pub marker_radius: f64,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            scale: 2.0,
            marker_radius: 0.01,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
