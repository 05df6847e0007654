//! Terrain-mode pointer drags: orbit, pan and zoom around the focus point.

use glam::{DQuat, DVec3};

use super::controller::CameraController;
use super::mode::CameraMode;
use super::orientation::{camera_right, camera_up, orbit_yaw_pitch};
use crate::input::MouseButton;

/// Pan step as a fraction of the orbit distance per normalized unit.
const PAN_SCALE: f64 = -0.3;

impl CameraController {
    /// Pointer dragged with `button` held, `(dx, dy)` in normalized view
    /// coordinates. Only terrain mode reacts; other modes return `false`
    /// untouched.
    ///
    /// Bindings: left pans, middle orbits, right zooms with `dy` inverted.
    /// Left and middle are deliberately the reverse of the usual orbit
    /// manipulator layout. `_dt` is unused because drags never coast.
    pub fn handle_pointer_drag(
        &mut self,
        button: MouseButton,
        _dt: f64,
        dx: f64,
        dy: f64,
    ) -> bool {
        if self.mode != CameraMode::Terrain {
            return false;
        }
        match button {
            MouseButton::Left => self.pan_model(dx, dy),
            MouseButton::Middle => self.orbit_model(dx, dy),
            MouseButton::Right => self.zoom_model(-dy),
        }
        true
    }

    /// Revolve around the focus point: yaw by `dx`, pitch by `dy`. Unlike
    /// first-person look the pitch is never clamped.
    fn orbit_model(&mut self, dx: f64, dy: f64) {
        if self.vertical_axis_fixed {
            let up_axis = self.up_at(self.center);
            self.rotation = orbit_yaw_pitch(self.rotation, dx, dy, up_axis);
        } else {
            let yaw = DQuat::from_axis_angle(camera_up(self.rotation), -dx);
            let pitch = DQuat::from_axis_angle(camera_right(self.rotation), dy);
            self.rotation = (pitch * yaw * self.rotation).normalize();
        }
    }

    /// Slide the focus point over the ground plane; the step scales with
    /// the orbit distance.
    fn pan_model(&mut self, dx: f64, dy: f64) {
        let scale = PAN_SCALE * self.distance;
        let up = self.up_at(self.center).normalize_or_zero();
        let forward = up.cross(camera_right(self.rotation));
        let side = forward.cross(up);

        self.center += forward.normalize_or_zero() * (dy * scale)
            + side.normalize_or_zero() * (dx * scale);
    }

    /// Scale the orbit distance by `1 + dy`, stopping at the minimum
    /// distance.
    fn zoom_model(&mut self, dy: f64) {
        let scale = 1.0 + dy;
        if self.distance * scale > self.min_distance {
            self.distance *= scale;
        } else {
            self.distance = self.min_distance;
        }
    }
}
