//! Camera system for interactive 3D views.
//!
//! Provides a controller with an orbit (terrain) mode and a first-person
//! (ego) mode, plus the pure rotation math both are built on.

/// Stateful controller: transforms, key handling and mode switching.
pub mod controller;
/// First-person look driven by pointer moves.
mod ego;
/// Camera modes and their names.
pub mod mode;
/// Terrain-mode pointer drags.
mod orbit;
/// Re-leveling and clamped yaw/pitch composition.
pub mod orientation;

pub use controller::{CameraController, MIN_MOVE_SPEED};
pub use mode::CameraMode;
pub use orientation::{PitchOutcome, MAX_PITCH_ATTEMPTS};
