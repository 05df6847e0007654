use glam::{DMat4, DQuat, DVec3};

use super::mode::CameraMode;
use super::orientation::fix_vertical_axis;
use crate::input::{InputEvent, KeyAction, PointerHistory, RequestSink};
use crate::options::{CameraOptions, KeybindingOptions, Options};

/// Lower bound for [`CameraController::move_speed`].
pub const MIN_MOVE_SPEED: f64 = 1.0;

/// Orbit / first-person camera controller.
///
/// Owns the camera rotation, the focus point (`center`) and the orbit
/// distance, and turns input into an updated camera placement.
///
/// In [`CameraMode::Terrain`] the eye sits `distance` behind `center` along
/// the view axis and pointer drags orbit, pan and zoom. In
/// [`CameraMode::Ego`] (and [`CameraMode::Walk`]) pointer moves turn the
/// camera in place around the eye and the movement keys translate it.
pub struct CameraController {
    pub(super) mode: CameraMode,
    pub(super) rotation: DQuat,
    pub(super) center: DVec3,
    pub(super) distance: f64,
    pub(super) min_distance: f64,
    pub(super) up_axis: DVec3,
    pub(super) vertical_axis_fixed: bool,
    eye_height: f64,

    move_vector: DVec3,
    move_speed: f64,

    pub(super) pointer: PointerHistory,
    keybindings: KeybindingOptions,
}

impl CameraController {
    /// Create a controller in `initial_mode`. Everything else starts from
    /// [`CameraOptions::default`]: identity rotation, focus at the origin,
    /// `+Z` up.
    #[must_use]
    pub fn new(
        initial_mode: CameraMode,
        vertical_axis_fixed: bool,
        eye_height: f64,
    ) -> Self {
        let camera = CameraOptions {
            initial_mode,
            vertical_axis_fixed,
            eye_height,
            ..CameraOptions::default()
        };
        Self::with_parts(&camera, KeybindingOptions::default())
    }

    /// Create a controller from loaded options.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self::with_parts(&options.camera, options.keybindings.clone())
    }

    fn with_parts(
        camera: &CameraOptions,
        keybindings: KeybindingOptions,
    ) -> Self {
        Self {
            mode: camera.initial_mode,
            rotation: DQuat::IDENTITY,
            center: DVec3::ZERO,
            distance: camera.distance,
            min_distance: camera.min_distance,
            up_axis: DVec3::from_array(camera.up_axis),
            vertical_axis_fixed: camera.vertical_axis_fixed,
            eye_height: camera.eye_height,
            move_vector: DVec3::ZERO,
            move_speed: camera.move_speed.max(MIN_MOVE_SPEED),
            pointer: PointerHistory::new(),
            keybindings,
        }
    }

    // -- State access ------------------------------------------------------

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Switch mode. Stale pointer samples are dropped so the first look
    /// after entering ego mode does not jump.
    pub fn set_mode(&mut self, mode: CameraMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.pointer.clear();
        log::info!("camera switched to {}", mode.label());
    }

    /// Label of the current mode, suitable for an on-screen hint.
    #[must_use]
    pub fn mode_label(&self) -> &'static str {
        self.mode.label()
    }

    /// Camera rotation (camera-to-world).
    #[must_use]
    pub fn rotation(&self) -> DQuat {
        self.rotation
    }

    /// Replace the rotation as-is (no re-leveling).
    pub fn set_rotation(&mut self, rotation: DQuat) {
        self.rotation = rotation.normalize();
    }

    /// Focus point (orbit pivot).
    #[must_use]
    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// Move the focus point.
    pub fn set_center(&mut self, center: DVec3) {
        self.center = center;
    }

    /// Distance from the focus point to the eye.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Set the orbit distance, floored at the minimum zoom distance.
    pub fn set_distance(&mut self, distance: f64) {
        self.distance = distance.max(self.min_distance);
    }

    /// Eye position: `center` pushed back by `distance` along the view
    /// axis.
    #[must_use]
    pub fn eye(&self) -> DVec3 {
        self.center - self.rotation * DVec3::new(0.0, 0.0, -self.distance)
    }

    /// World up direction of the coordinate frame.
    #[must_use]
    pub fn up_axis(&self) -> DVec3 {
        self.up_axis
    }

    /// Whether rotations are re-leveled against [`Self::up_axis`].
    #[must_use]
    pub fn vertical_axis_fixed(&self) -> bool {
        self.vertical_axis_fixed
    }

    /// Turn re-leveling on or off. Turning it on levels the camera
    /// immediately.
    pub fn set_vertical_axis_fixed(&mut self, fixed: bool) {
        self.vertical_axis_fixed = fixed;
        if fixed {
            (self.center, self.rotation) =
                self.fix_vertical_axis_at(self.center, self.rotation);
        }
    }

    /// Eye height reserved for walk mode.
    #[must_use]
    pub fn eye_height(&self) -> f64 {
        self.eye_height
    }

    /// Accumulated translation intent from held movement keys.
    #[must_use]
    pub fn move_vector(&self) -> DVec3 {
        self.move_vector
    }

    /// Translation added per movement key press.
    #[must_use]
    pub fn move_speed(&self) -> f64 {
        self.move_speed
    }

    /// Set the movement speed, never below [`MIN_MOVE_SPEED`].
    pub fn set_move_speed(&mut self, speed: f64) {
        self.move_speed = speed.max(MIN_MOVE_SPEED);
    }

    /// Key bindings used by the key handlers.
    #[must_use]
    pub fn keybindings(&self) -> &KeybindingOptions {
        &self.keybindings
    }

    /// Mutable key bindings for reconfiguration.
    pub fn keybindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.keybindings
    }

    // -- Transforms ----------------------------------------------------------

    /// Camera placement (camera-to-world) for the current mode.
    ///
    /// Terrain: translate by `distance` along local `+Z`, rotate, then move
    /// to `center`. Ego/walk: rotate, then move to [`Self::eye`].
    #[must_use]
    pub fn view_matrix(&self) -> DMat4 {
        match self.mode {
            CameraMode::Terrain => {
                DMat4::from_translation(self.center)
                    * DMat4::from_quat(self.rotation)
                    * DMat4::from_translation(DVec3::new(
                        0.0,
                        0.0,
                        self.distance,
                    ))
            }
            CameraMode::Ego | CameraMode::Walk => {
                DMat4::from_rotation_translation(self.rotation, self.eye())
            }
        }
    }

    /// World-to-camera transform, the inverse of [`Self::view_matrix`],
    /// built from the inverse rotation rather than a matrix inversion.
    #[must_use]
    pub fn inverse_view_matrix(&self) -> DMat4 {
        let inverse_rotation = DMat4::from_quat(self.rotation.inverse());
        match self.mode {
            CameraMode::Terrain => {
                DMat4::from_translation(DVec3::new(0.0, 0.0, -self.distance))
                    * inverse_rotation
                    * DMat4::from_translation(-self.center)
            }
            CameraMode::Ego | CameraMode::Walk => {
                inverse_rotation * DMat4::from_translation(-self.eye())
            }
        }
    }

    /// Adopt an externally supplied camera placement. The focus point is
    /// taken `distance` in front of the camera; with a fixed vertical axis
    /// the result is re-leveled.
    pub fn set_from_matrix(&mut self, matrix: &DMat4) {
        let center =
            matrix.transform_point3(DVec3::new(0.0, 0.0, -self.distance));
        let (_, rotation, _) = matrix.to_scale_rotation_translation();
        self.center = center;
        self.rotation = rotation.normalize();

        if self.vertical_axis_fixed {
            (self.center, self.rotation) =
                self.fix_vertical_axis_at(self.center, self.rotation);
        }
    }

    /// World up direction at `position`. The frame is flat, so this is the
    /// configured up axis everywhere.
    #[must_use]
    pub fn up_at(&self, _position: DVec3) -> DVec3 {
        self.up_axis
    }

    /// Re-level `rotation` against the up direction of the frame at
    /// `position`, preventing flip-over. Returns the (unchanged, in a flat
    /// frame) position together with the leveled rotation.
    #[must_use]
    pub fn fix_vertical_axis_at(
        &self,
        position: DVec3,
        rotation: DQuat,
    ) -> (DVec3, DQuat) {
        let up_axis = self.up_at(position);
        (position, fix_vertical_axis(rotation, up_axis, true))
    }

    // -- Input ---------------------------------------------------------------

    /// Route a typed input event to its handler. Returns whether the event
    /// was consumed.
    pub fn handle_event(
        &mut self,
        event: InputEvent<'_>,
        sink: &mut impl RequestSink,
    ) -> bool {
        match event {
            InputEvent::PointerDrag {
                button,
                dt,
                dx,
                dy,
            } => self.handle_pointer_drag(button, dt, dx, dy),
            InputEvent::PointerMove(sample) => {
                self.handle_pointer_move(sample, sink)
            }
            InputEvent::KeyDown { key } => self.handle_key_down(key),
            InputEvent::KeyUp { key } => self.handle_key_up(key),
        }
    }

    /// Movement key pressed: grow the move vector along the key's axis
    /// (forward/back on `Z`, left/right on `X`). Every key-down, bound or
    /// not, then moves the focus point by the rotated move vector.
    pub fn handle_key_down(&mut self, key: &str) -> bool {
        let handled = match self.keybindings.lookup(key) {
            Some(KeyAction::MoveForward) => {
                self.move_vector.z -= self.move_speed;
                true
            }
            Some(KeyAction::MoveBackward) => {
                self.move_vector.z += self.move_speed;
                true
            }
            Some(KeyAction::MoveRight) => {
                self.move_vector.x += self.move_speed;
                true
            }
            Some(KeyAction::MoveLeft) => {
                self.move_vector.x -= self.move_speed;
                true
            }
            Some(KeyAction::ToggleMode) | None => false,
        };
        self.center += self.rotation * self.move_vector;
        handled
    }

    /// Key released. Releasing *any* movement key clears the whole move
    /// vector; releasing the toggle key cycles the mode.
    pub fn handle_key_up(&mut self, key: &str) -> bool {
        match self.keybindings.lookup(key) {
            Some(action) if action.is_movement() => {
                self.move_vector = DVec3::ZERO;
                true
            }
            Some(KeyAction::ToggleMode) => {
                self.set_mode(self.mode.toggled());
                true
            }
            _ => false,
        }
    }

    /// Per-frame update: re-apply the move vector while movement keys are
    /// held. Hosts that forward OS key repeat as key-downs need not call it.
    pub fn tick(&mut self) {
        if self.move_vector != DVec3::ZERO {
            self.center += self.rotation * self.move_vector;
        }
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::from_options(&Options::default())
    }
}
