use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ViewcamError;

/// How the camera reacts to input.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    /// Orbit around the focus point at a fixed distance; driven by
    /// pointer drags.
    #[default]
    Terrain,
    /// Free first-person look; driven by pointer moves and movement keys.
    Ego,
    /// First-person at a fixed eye height. Not reachable through the mode
    /// toggle and currently handled exactly like [`CameraMode::Ego`].
    Walk,
}

impl CameraMode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 3] = [Self::Terrain, Self::Ego, Self::Walk];

    /// Human-readable name, as shown to the user on a mode change.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Terrain => "terrain mode",
            Self::Ego => "ego mode",
            Self::Walk => "walk mode",
        }
    }

    /// Mode selected by the toggle key: terrain goes to ego, everything
    /// else goes back to terrain. Walk is never produced.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ego | Self::Walk => Self::Terrain,
            Self::Terrain => Self::Ego,
        }
    }

    /// Whether the pointer steers the view directly (ego and walk).
    #[must_use]
    pub fn is_first_person(self) -> bool {
        matches!(self, Self::Ego | Self::Walk)
    }
}

impl fmt::Display for CameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CameraMode {
    type Err = ViewcamError;

    /// Accepts either the label (`"ego mode"`) or the short name (`"ego"`),
    /// ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| {
                let label = mode.label();
                name.eq_ignore_ascii_case(label)
                    || label
                        .strip_suffix(" mode")
                        .is_some_and(|short| name.eq_ignore_ascii_case(short))
            })
            .ok_or_else(|| ViewcamError::UnknownMode(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back_to_their_mode() {
        for mode in CameraMode::ALL {
            assert_eq!(mode.label().parse::<CameraMode>().unwrap(), mode);
        }
        assert_eq!("EGO".parse::<CameraMode>().unwrap(), CameraMode::Ego);
        assert_eq!(" walk ".parse::<CameraMode>().unwrap(), CameraMode::Walk);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "orbit".parse::<CameraMode>().unwrap_err();
        assert!(matches!(
            err,
            ViewcamError::UnknownMode(name) if name == "orbit"
        ));
    }

    #[test]
    fn toggle_never_reaches_walk() {
        assert_eq!(CameraMode::Ego.toggled(), CameraMode::Terrain);
        assert_eq!(CameraMode::Walk.toggled(), CameraMode::Terrain);
        assert_eq!(CameraMode::Terrain.toggled(), CameraMode::Ego);
        for mode in CameraMode::ALL {
            assert_ne!(mode.toggled(), CameraMode::Walk);
        }
    }

    #[test]
    fn walk_counts_as_first_person() {
        assert!(CameraMode::Walk.is_first_person());
        assert!(CameraMode::Ego.is_first_person());
        assert!(!CameraMode::Terrain.is_first_person());
    }
}
