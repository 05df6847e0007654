//! First-person look: pointer moves turn the camera around its eye.

use glam::{DMat4, DVec3};

use super::controller::CameraController;
use super::orientation::{fix_vertical_axis, rotate_yaw_pitch, PitchOutcome};
use crate::input::{ControllerRequest, PointerSample, RequestSink};

impl CameraController {
    /// Pointer moved. Only ego and walk mode react.
    ///
    /// The look delta is the displacement between the last two samples
    /// weighted by the time between them. Nothing happens (and `false` is
    /// returned) for the very first sample or when the delta is exactly
    /// zero. Otherwise the pointer is warped back to the view center via
    /// `sink` and the delta is applied as yaw (`dx`) and pitch (`dy`).
    ///
    /// The event counts as handled even when the pitch had to be dropped
    /// ([`PitchOutcome::YawOnly`]); use [`Self::apply_yaw_pitch`] directly
    /// to observe the outcome.
    pub fn handle_pointer_move(
        &mut self,
        sample: PointerSample,
        sink: &mut impl RequestSink,
    ) -> bool {
        if !self.mode.is_first_person() {
            return false;
        }

        self.pointer.push(sample);
        let Some(delta) = self.pointer.delta() else {
            return false;
        };
        if delta.is_zero() {
            return false;
        }

        sink.request(ControllerRequest::WarpPointerToCenter);
        self.pointer.recenter();

        // A yaw-only fallback is traced inside `rotate_yaw_pitch`.
        let _ = self.apply_yaw_pitch(delta.dx, delta.dy, self.up_axis);
        true
    }

    /// Turn the camera by `yaw` and `pitch` while keeping the eye where it
    /// is. See [`rotate_yaw_pitch`](super::orientation::rotate_yaw_pitch)
    /// for the clamping rules; a zero `up_axis` disables leveling.
    ///
    /// The stored rotation is leveled first and the eye is captured from
    /// that leveled state, before any candidate is tried.
    pub fn apply_yaw_pitch(
        &mut self,
        yaw: f64,
        pitch: f64,
        up_axis: DVec3,
    ) -> PitchOutcome {
        if up_axis != DVec3::ZERO {
            self.rotation = fix_vertical_axis(self.rotation, up_axis, true);
        }
        let eye = self.eye();

        let result = rotate_yaw_pitch(self.rotation, yaw, pitch, up_axis);
        self.set_from_matrix(&DMat4::from_rotation_translation(
            result.rotation,
            eye,
        ));
        result.outcome
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use glam::DQuat;

    use super::*;
    use crate::camera::orientation::{camera_forward, camera_up};
    use crate::camera::CameraMode;
    use crate::input::IgnoreRequests;

    fn ego_camera() -> CameraController {
        let mut camera = CameraController::new(CameraMode::Ego, true, 1.7);
        camera.set_distance(10.0);
        camera.set_center(DVec3::new(1.0, 1.0, 2.0));
        // Looking horizontally along +Y.
        camera.set_rotation(DQuat::from_rotation_x(FRAC_PI_2));
        camera
    }

    #[test]
    fn first_sample_is_not_handled() {
        let mut camera = ego_camera();
        let mut requests = Vec::new();
        let sample = PointerSample::new(0.4, 0.1, 1.0);
        assert!(!camera.handle_pointer_move(sample, &mut requests));
        assert!(requests.is_empty());
    }

    #[test]
    fn identical_samples_leave_the_camera_alone() {
        let mut camera = ego_camera();
        let mut requests = Vec::new();
        let before = (camera.center(), camera.rotation());
        let sample = PointerSample::new(0.3, -0.2, 1.0);
        assert!(!camera.handle_pointer_move(sample, &mut requests));
        let later = PointerSample { time: 1.5, ..sample };
        assert!(!camera.handle_pointer_move(later, &mut requests));
        assert_eq!((camera.center(), camera.rotation()), before);
        assert!(requests.is_empty());
    }

    #[test]
    fn moves_are_ignored_in_terrain_mode() {
        let mut camera = ego_camera();
        camera.set_mode(CameraMode::Terrain);
        let rotation = camera.rotation();
        let mut requests = Vec::new();
        for sample in [
            PointerSample::new(0.0, 0.0, 0.0),
            PointerSample::new(0.5, 0.0, 1.0),
        ] {
            assert!(!camera.handle_pointer_move(sample, &mut requests));
        }
        assert_eq!(camera.rotation(), rotation);
        assert!(requests.is_empty());
    }

    #[test]
    fn pointer_move_turns_around_the_eye_and_recenters() {
        for mode in [CameraMode::Ego, CameraMode::Walk] {
            let mut camera = ego_camera();
            camera.set_mode(mode);
            let eye = camera.eye();
            let mut requests = Vec::new();

            let start = PointerSample::new(0.0, 0.0, 0.0);
            assert!(!camera.handle_pointer_move(start, &mut requests));
            let moved = PointerSample::new(0.5, 0.0, 1.0);
            assert!(camera.handle_pointer_move(moved, &mut requests));

            assert_eq!(requests, vec![ControllerRequest::WarpPointerToCenter]);
            assert!(camera.eye().abs_diff_eq(eye, 1e-9));
            // Yaw of 0.5 (negated) around +Z swings the view from +Y
            // toward +X.
            let forward = camera_forward(camera.rotation());
            let expected = DVec3::new(0.5_f64.sin(), 0.5_f64.cos(), 0.0);
            assert!(forward.abs_diff_eq(expected, 1e-9), "{mode:?}");

            // The warp event itself arrives at the center: no movement.
            let warped = PointerSample::new(0.0, 0.0, 1.1);
            assert!(!camera.handle_pointer_move(warped, &mut requests));
            assert_eq!(requests.len(), 1);
        }
    }

    #[test]
    fn look_down_is_clamped_above_the_floor() {
        let mut camera = ego_camera();
        let mut sink = IgnoreRequests;
        let start = PointerSample::new(0.0, 0.0, 0.0);
        assert!(!camera.handle_pointer_move(start, &mut sink));
        for step in 1..40 {
            let sample = PointerSample::new(0.0, -0.9, f64::from(step));
            let _ = camera.handle_pointer_move(sample, &mut sink);
            assert!(camera_up(camera.rotation()).dot(DVec3::Z) >= -1e-12);
        }
    }

    #[test]
    fn apply_yaw_pitch_reports_the_fallback() {
        let mut camera = ego_camera();
        // Straight down, pitching further down.
        camera.set_rotation(DQuat::IDENTITY);
        let eye = camera.eye();
        let outcome = camera.apply_yaw_pitch(0.1, -0.4, DVec3::Z);
        assert_eq!(outcome, PitchOutcome::YawOnly);
        assert!(camera.eye().abs_diff_eq(eye, 1e-9));
        let expected = DQuat::from_rotation_z(-0.1);
        assert!(camera.rotation().dot(expected).abs() > 1.0 - 1e-9);
    }

    #[test]
    fn pointer_move_is_handled_when_only_yaw_applies() {
        let mut camera = ego_camera();
        // Straight down; moving the pointer down asks for more pitch.
        camera.set_rotation(DQuat::IDENTITY);
        let mut requests = Vec::new();
        let start = PointerSample::new(0.0, 0.0, 0.0);
        assert!(!camera.handle_pointer_move(start, &mut requests));
        let down = PointerSample::new(0.1, -0.4, 1.0);
        assert!(camera.handle_pointer_move(down, &mut requests));

        assert_eq!(requests, vec![ControllerRequest::WarpPointerToCenter]);
        let expected = DQuat::from_rotation_z(-0.1);
        assert!(camera.rotation().dot(expected).abs() > 1.0 - 1e-9);
    }

    #[test]
    fn apply_yaw_pitch_levels_a_rolled_camera_first() {
        let mut camera = ego_camera();
        camera.set_rotation(
            DQuat::from_rotation_x(FRAC_PI_2) * DQuat::from_rotation_z(0.3),
        );
        let outcome = camera.apply_yaw_pitch(0.0, 0.0, DVec3::Z);
        assert_eq!(outcome, PitchOutcome::Accepted { halvings: 0 });
        let expected = DQuat::from_rotation_x(FRAC_PI_2);
        assert!(camera.rotation().dot(expected).abs() > 1.0 - 1e-9);
    }
}
