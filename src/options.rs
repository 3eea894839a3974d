//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (camera projection and stepping, scene
//! population, key bindings) live here. Options serialize to and from
//! TOML so a preset file can override any subset of them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TeaviewError;
use crate::input::KeyBindings;

/// Camera projection and stepping parameters, shared by both cameras and
/// the lights.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Rotation step in degrees (and dolly step in world units, after
    /// conversion to radians) applied by each motion command.
    pub step_degrees: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 90.0,
            znear: 1.0,
            zfar: 100.0,
            step_degrees: 1.0,
        }
    }
}

/// Scene population parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneOptions {
    /// Number of teapots scattered on the disk.
    pub teapot_count: usize,
    /// Radius of the placement disk in the z = 0 plane.
    pub disk_radius: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            teapot_count: 20,
            disk_radius: 30.0,
        }
    }
}

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[camera]`) work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection and stepping parameters.
    pub camera: CameraOptions,
    /// Scene population parameters.
    pub scene: SceneOptions,
    /// Ordered key-binding priority list.
    pub keybindings: KeyBindings,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TeaviewError> {
        let content = std::fs::read_to_string(path).map_err(TeaviewError::Io)?;
        toml::from_str(&content)
            .map_err(|e| TeaviewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), TeaviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TeaviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TeaviewError::Io)?;
        }
        std::fs::write(path, content).map_err(TeaviewError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Command;
    use crate::input::KeySet;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
fovy = 45.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.fovy, 45.0);
        // Everything else stays at its default.
        assert_eq!(opts.camera.znear, 1.0);
        assert_eq!(opts.scene.teapot_count, 20);
        assert_eq!(opts.keybindings, KeyBindings::default());
    }

    #[test]
    fn keybinding_overrides_replace_the_whole_list() {
        let toml_str = r#"
[[keybindings]]
key = "Escape"
command = "quit"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        let mut keys = KeySet::new();
        keys.press("Escape");
        assert_eq!(
            opts.keybindings.first_match(&keys),
            Some(Command::Quit)
        );
        let mut old = KeySet::new();
        old.press("KeyQ");
        assert_eq!(opts.keybindings.first_match(&old), None);
    }
}
