use serde::{Deserialize, Serialize};

/// Camera actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// toggle_mode = "KeyF"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move along the camera's view direction.
    MoveForward,
    /// Move against the camera's view direction.
    MoveBackward,
    /// Strafe left.
    MoveLeft,
    /// Strafe right.
    MoveRight,
    /// Cycle between terrain and ego mode (on release).
    ToggleMode,
}

impl KeyAction {
    /// Whether this action feeds the move vector.
    #[must_use]
    pub fn is_movement(self) -> bool {
        !matches!(self, Self::ToggleMode)
    }
}
