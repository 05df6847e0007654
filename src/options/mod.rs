//! Camera configuration with TOML preset support.
//!
//! Initial camera state, control parameters and key bindings live here.
//! Options serialize to/from TOML so a host can keep named presets in a
//! directory and load one per view.

mod camera;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ViewcamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Initial camera state and control parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, ViewcamError> {
        toml::from_str(content)
            .map_err(|e| ViewcamError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ViewcamError> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_toml(&content)?;
        log::debug!("loaded camera options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ViewcamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewcamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(ViewcamError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraMode;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
initial_mode = "ego"
move_speed = 4.0
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.camera.initial_mode, CameraMode::Ego);
        assert_eq!(opts.camera.move_speed, 4.0);
        // Everything else should be default
        assert!(opts.camera.vertical_axis_fixed);
        assert_eq!(opts.camera.up_axis, [0.0, 0.0, 1.0]);
        assert_eq!(
            opts.keybindings.lookup("KeyF"),
            Some(KeyAction::ToggleMode)
        );
    }

    #[test]
    fn unknown_mode_is_a_parse_error() {
        let err = Options::from_toml("[camera]\ninitial_mode = \"hover\"\n")
            .unwrap_err();
        assert!(matches!(err, ViewcamError::OptionsParse(_)));
    }

    #[test]
    fn custom_keybindings_rebuild_reverse_map() {
        let toml_str = r#"
[keybindings.bindings]
move_forward = "KeyW"
toggle_mode = "Tab"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("KeyW"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(
            opts.keybindings.lookup("Tab"),
            Some(KeyAction::ToggleMode)
        );
        assert_eq!(opts.keybindings.lookup("ArrowUp"), None);
    }

    #[test]
    fn keybinding_lookup() {
        let mut opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("ArrowUp"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);

        opts.keybindings.bind(KeyAction::MoveForward, "KeyW");
        assert_eq!(
            opts.keybindings.lookup("KeyW"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(opts.keybindings.lookup("ArrowUp"), None);
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("viewcam-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.camera.distance = 42.0;
        opts.save(&dir.join("far.toml")).unwrap();
        Options::default().save(&dir.join("near.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["far", "near"]);
        let loaded = Options::load(&dir.join("far.toml")).unwrap();
        assert_eq!(loaded, opts);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("move_speed").is_some());
        assert!(camera.get("initial_mode").is_some());
        assert!(camera.get("up_axis").is_none());
        assert!(camera.get("min_distance").is_none());
    }
}
