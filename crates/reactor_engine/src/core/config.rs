//! # Reactor Room Configuration
//!
//! All runtime-tunable settings in one serializable tree. Every section has a
//! `Default` that reproduces the scene's stock behaviour, and every section is
//! `#[serde(default)]` so a config file only needs the keys it changes:
//!
//! ```toml
//! [animation]
//! speed = 0.25
//!
//! [scene]
//! show_floor_lights = false
//! ```
//!
//! Animation formulas are not configurable; they define what the scene looks like.

use serde::{Deserialize, Serialize};

pub use crate::config::{Config, ConfigError, ConfigFormat};
use crate::foundation::time::{DEFAULT_SPEED, MIN_SPEED, WRAP_PERIOD};

/// # Window Configuration
///
/// Initial surface size; the aspect ratio is recomputed on resize events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial width in pixels
    pub width: u32,
    /// Initial height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Reactor Room with Workers, Machines".to_string(),
            width: 1200,
            height: 800,
        }
    }
}

/// # Animation Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Per-frame increment of `t`
    pub speed: f32,
    /// Initial value of `t`
    pub start_time: f32,
    /// Whether the clock starts running
    pub animating: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            start_time: 0.0,
            animating: true,
        }
    }
}

/// # Camera Configuration
///
/// Projection parameters. The orbit path itself is fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 60.0,
            near: 0.1,
            far: 200.0,
        }
    }
}

/// # Scene Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Draw the floor light grid
    pub show_floor_lights: bool,
    /// Start in wireframe mode
    pub wireframe: bool,
    /// Frame clear colour (RGBA)
    pub clear_color: [f32; 4],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            show_floor_lights: true,
            wireframe: false,
            clear_color: [0.05, 0.05, 0.08, 1.0],
        }
    }
}

/// # Engine Configuration
///
/// Logging and headless-run settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log level for the engine
    pub log_level: String,
    /// Frames to render before stopping; `None` runs until an exit request
    pub max_frames: Option<u64>,
    /// Log frame statistics every N frames (0 disables)
    pub stats_interval: u64,
    /// Key presses replayed by the headless driver
    pub script: Vec<ScriptedKey>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            max_frames: Some(3600),
            stats_interval: 600,
            script: Vec::new(),
        }
    }
}

/// A key press delivered before a given frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedKey {
    /// Frame index the press is delivered on
    pub frame: u64,
    /// Key name, e.g. `"space"`, `"l"`, `"+"`
    pub key: String,
}

/// # Complete Application Configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactorConfig {
    /// Window settings
    pub window: WindowConfig,
    /// Animation clock settings
    pub animation: AnimationConfig,
    /// Camera projection settings
    pub camera: CameraConfig,
    /// Scene toggles
    pub scene: SceneConfig,
    /// Engine settings
    pub engine: EngineConfig,
}

impl ReactorConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }

        if !(self.animation.speed >= MIN_SPEED) {
            return Err(ConfigError::Invalid(format!(
                "animation speed must be at least {MIN_SPEED}, got {}",
                self.animation.speed
            )));
        }

        if !(0.0..=WRAP_PERIOD).contains(&self.animation.start_time) {
            return Err(ConfigError::Invalid(format!(
                "start time must lie in [0, {WRAP_PERIOD}], got {}",
                self.animation.start_time
            )));
        }

        let camera = &self.camera;
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "field of view must lie in (0, 180) degrees, got {}",
                camera.fov_degrees
            )));
        }
        if !(camera.near > 0.0 && camera.far > camera.near) {
            return Err(ConfigError::Invalid(format!(
                "clip planes must satisfy 0 < near < far, got near={} far={}",
                camera.near, camera.far
            )));
        }

        Ok(())
    }
}

impl Config for ReactorConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ReactorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.window.width, 1200);
        assert_eq!(config.window.height, 800);
        assert_eq!(config.animation.speed, 0.1);
        assert!(config.scene.show_floor_lights);
        assert!(!config.scene.wireframe);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let text = r#"
            [animation]
            speed = 0.25

            [scene]
            show_floor_lights = false

            [[engine.script]]
            frame = 10
            key = "space"
        "#;
        let config = ReactorConfig::from_str_with_format(text, ConfigFormat::Toml).unwrap();
        assert_eq!(config.animation.speed, 0.25);
        assert!(config.animation.animating);
        assert!(!config.scene.show_floor_lights);
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(
            config.engine.script,
            vec![ScriptedKey { frame: 10, key: "space".to_string() }]
        );
    }

    #[test]
    fn test_ron_round_trip_through_text() {
        let mut config = ReactorConfig::default();
        config.camera.fov_degrees = 45.0;
        let text = config.to_string_with_format(ConfigFormat::Ron).unwrap();
        let parsed = ReactorConfig::from_str_with_format(&text, ConfigFormat::Ron).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_file_format_from_extension() {
        use std::path::Path;
        assert_eq!(ConfigFormat::from_path(Path::new("a/room.toml")).unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("room.ron")).unwrap(), ConfigFormat::Ron);
        assert!(matches!(
            ConfigFormat::from_path(Path::new("room.json")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("reactor_config_{}.toml", std::process::id()));
        let mut config = ReactorConfig::default();
        config.engine.max_frames = Some(42);
        config.save_to_file(&path).unwrap();
        let loaded = ReactorConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = ReactorConfig::default();
        config.animation.speed = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ReactorConfig::default();
        config.camera.near = 10.0;
        config.camera.far = 1.0;
        assert!(config.validate().is_err());

        let mut config = ReactorConfig::default();
        config.window.height = 0;
        assert!(config.validate().is_err());

        let mut config = ReactorConfig::default();
        config.animation.start_time = 400.0;
        assert!(config.validate().is_err());
    }
}
