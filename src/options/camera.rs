use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::CameraMode;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera state and control parameters.
pub struct CameraOptions {
    /// Mode the controller starts in.
    #[schemars(title = "Initial Mode")]
    pub initial_mode: CameraMode,
    /// Keep the camera level against `up_axis` after every rotation.
    #[schemars(title = "Fix Vertical Axis")]
    pub vertical_axis_fixed: bool,
    /// Eye height above ground for walk mode.
    #[schemars(
        title = "Eye Height",
        range(min = 0.0, max = 10.0),
        extend("step" = 0.1)
    )]
    pub eye_height: f64,
    /// Initial distance from the focus point to the eye.
    #[schemars(title = "Distance", range(min = 0.05, max = 10000.0))]
    pub distance: f64,
    /// Smallest distance the zoom may reach.
    #[schemars(skip)]
    pub min_distance: f64,
    /// Translation per movement key press.
    #[schemars(
        title = "Move Speed",
        range(min = 1.0, max = 100.0),
        extend("step" = 0.5)
    )]
    pub move_speed: f64,
    /// World up direction of the (flat) coordinate frame.
    #[schemars(skip)]
    pub up_axis: [f64; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            initial_mode: CameraMode::Terrain,
            vertical_axis_fixed: true,
            eye_height: 1.5,
            distance: 10.0,
            min_distance: 0.05,
            move_speed: 1.0,
            up_axis: [0.0, 0.0, 1.0],
        }
    }
}
