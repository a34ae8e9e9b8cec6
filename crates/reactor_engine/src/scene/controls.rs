//! User-toggleable scene flags

use crate::core::config::SceneConfig;

/// Flags the input layer can flip at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneControls {
    /// Draw polygons as outlines
    pub wireframe: bool,
    /// Draw the floor light grid
    pub show_floor_lights: bool,
}

impl Default for SceneControls {
    fn default() -> Self {
        Self {
            wireframe: false,
            show_floor_lights: true,
        }
    }
}

impl SceneControls {
    /// Initial flags from configuration
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            wireframe: config.wireframe,
            show_floor_lights: config.show_floor_lights,
        }
    }

    /// Flip wireframe mode, returning the new state
    pub fn toggle_wireframe(&mut self) -> bool {
        self.wireframe = !self.wireframe;
        log::info!("Wireframe {}", if self.wireframe { "on" } else { "off" });
        self.wireframe
    }

    /// Flip floor light visibility, returning the new state
    pub fn toggle_floor_lights(&mut self) -> bool {
        self.show_floor_lights = !self.show_floor_lights;
        log::info!("Floor lights {}", if self.show_floor_lights { "shown" } else { "hidden" });
        self.show_floor_lights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles() {
        let mut controls = SceneControls::default();
        assert!(!controls.toggle_floor_lights());
        assert!(controls.toggle_floor_lights());
        assert!(controls.toggle_wireframe());
        assert!(controls.wireframe);
    }

    #[test]
    fn test_from_config() {
        let config = SceneConfig {
            show_floor_lights: false,
            wireframe: true,
            ..SceneConfig::default()
        };
        let controls = SceneControls::from_config(&config);
        assert!(controls.wireframe);
        assert!(!controls.show_floor_lights);
    }
}
