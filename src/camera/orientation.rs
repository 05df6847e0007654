//! Rotation math shared by the orbit and first-person behaviours.
//!
//! Rotations are camera-to-world: the camera looks down its local `-Z`,
//! local `+Y` is its up vector and local `+X` its right vector.

use std::f64::consts::PI;

use glam::{DQuat, DVec3};

/// Number of pitch candidates tried (halving the pitch after each
/// rejection) before falling back to a yaw-only rotation.
pub const MAX_PITCH_ATTEMPTS: u32 = 20;

/// How [`rotate_yaw_pitch`] settled on its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitchOutcome {
    /// A candidate kept the camera upright. `halvings` is how many times
    /// the pitch was halved first (0 = requested pitch applied as-is).
    Accepted {
        /// Rejected candidates before this one.
        halvings: u32,
    },
    /// Every pitch candidate flipped the camera; only the yaw was applied.
    YawOnly,
}

/// Result of [`rotate_yaw_pitch`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YawPitch {
    /// Starting rotation after re-leveling, before yaw/pitch.
    pub leveled: DQuat,
    /// Final rotation.
    pub rotation: DQuat,
    /// Which branch produced `rotation`.
    pub outcome: PitchOutcome,
}

/// Camera up vector (local `+Y` in world space).
#[must_use]
pub fn camera_up(rotation: DQuat) -> DVec3 {
    rotation * DVec3::Y
}

/// Camera right vector (local `+X` in world space).
#[must_use]
pub fn camera_right(rotation: DQuat) -> DVec3 {
    rotation * DVec3::X
}

/// Camera view direction (local `-Z` in world space).
#[must_use]
pub fn camera_forward(rotation: DQuat) -> DVec3 {
    rotation * DVec3::NEG_Z
}

/// Re-level `rotation` so the camera's right vector is perpendicular to
/// `up_axis`, i.e. its up vector lies in the vertical plane through the
/// view direction. Yaw is preserved.
///
/// With `disallow_flip_over` the camera is additionally rolled by 180°
/// around its view axis if the leveled up vector points below the
/// horizon. A zero `up_axis` leaves the rotation unchanged.
///
/// Applying the function to its own output changes nothing.
#[must_use]
pub fn fix_vertical_axis(
    rotation: DQuat,
    up_axis: DVec3,
    disallow_flip_over: bool,
) -> DQuat {
    let up = camera_up(rotation);
    let right = camera_right(rotation);
    let forward = camera_forward(rotation);

    // Whichever cross product is better conditioned gives the new right.
    let right_from_forward = forward.cross(up_axis);
    let right_from_up = up.cross(up_axis);
    let mut new_right = if right_from_forward.length_squared()
        > right_from_up.length_squared()
    {
        right_from_forward
    } else {
        right_from_up
    };
    if new_right.dot(right) < 0.0 {
        new_right = -new_right;
    }
    let Some(new_right) = new_right.try_normalize() else {
        return rotation;
    };

    let correction = DQuat::from_rotation_arc(right, new_right);
    let mut fixed = (correction * rotation).normalize();

    if disallow_flip_over && camera_up(fixed).dot(up_axis) < 0.0 {
        fixed = fixed * DQuat::from_rotation_z(PI);
    }
    fixed
}

/// Compose a yaw and a pitch onto `rotation` without letting the camera
/// turn upside down relative to `up_axis`.
///
/// 1. With a non-zero `up_axis`, `rotation` is re-leveled first.
/// 2. Yaw turns by `-yaw` around `up_axis`, or around the camera's own up
///    vector when `up_axis` is zero.
/// 3. Pitch turns around the camera's right vector taken *before* the yaw.
/// 4. The candidate is `rotation`, then yaw, then pitch.
/// 5. With a non-zero `up_axis` the candidate is re-leveled (flip allowed).
/// 6. The candidate is rejected if its up vector is not strictly in the
///    `up_axis` hemisphere; the pitch is then halved and retried, up to
///    [`MAX_PITCH_ATTEMPTS`] candidates, after which only the yaw is kept.
///
/// A zero `up_axis` can never pass step 6, so it always degrades to
/// yaw-only.
#[must_use]
pub fn rotate_yaw_pitch(
    rotation: DQuat,
    yaw: f64,
    pitch: f64,
    up_axis: DVec3,
) -> YawPitch {
    let vertical_axis_fixed = up_axis != DVec3::ZERO;

    let rotation = if vertical_axis_fixed {
        fix_vertical_axis(rotation, up_axis, true)
    } else {
        rotation
    };

    let yaw_axis = if vertical_axis_fixed {
        up_axis
    } else {
        camera_up(rotation)
    }
    .normalize();
    let rotate_yaw = DQuat::from_axis_angle(yaw_axis, -yaw);
    let right = camera_right(rotation).normalize();

    let mut candidate_pitch = pitch;
    for halvings in 0..MAX_PITCH_ATTEMPTS {
        let rotate_pitch = DQuat::from_axis_angle(right, candidate_pitch);
        let mut candidate = (rotate_pitch * rotate_yaw * rotation).normalize();
        if vertical_axis_fixed {
            candidate = fix_vertical_axis(candidate, up_axis, false);
        }

        if camera_up(candidate).dot(up_axis) > 0.0 {
            return YawPitch {
                leveled: rotation,
                rotation: candidate,
                outcome: PitchOutcome::Accepted { halvings },
            };
        }
        candidate_pitch /= 2.0;
    }

    log::trace!(
        "pitch {pitch} rejected {MAX_PITCH_ATTEMPTS} times, applying yaw only"
    );
    YawPitch {
        leveled: rotation,
        rotation: (rotate_yaw * rotation).normalize(),
        outcome: PitchOutcome::YawOnly,
    }
}

/// Compose a yaw and a pitch onto `rotation` for orbiting a focus point.
///
/// Same composition as [`rotate_yaw_pitch`] (level with flip prevention,
/// yaw around `up_axis`, pitch around the pre-yaw right vector, level
/// again with flip allowed) but without the upright test: the candidate
/// is always kept, so a large pitch can carry the camera over the top.
/// A zero `up_axis` yaws around the camera's own up vector and skips
/// leveling.
#[must_use]
pub fn orbit_yaw_pitch(
    rotation: DQuat,
    yaw: f64,
    pitch: f64,
    up_axis: DVec3,
) -> DQuat {
    let vertical_axis_fixed = up_axis != DVec3::ZERO;

    let rotation = if vertical_axis_fixed {
        fix_vertical_axis(rotation, up_axis, true)
    } else {
        rotation
    };

    let yaw_axis = if vertical_axis_fixed {
        up_axis
    } else {
        camera_up(rotation)
    }
    .normalize();
    let rotate_yaw = DQuat::from_axis_angle(yaw_axis, -yaw);
    let rotate_pitch =
        DQuat::from_axis_angle(camera_right(rotation).normalize(), pitch);

    let orbited = (rotate_pitch * rotate_yaw * rotation).normalize();
    if vertical_axis_fixed {
        fix_vertical_axis(orbited, up_axis, false)
    } else {
        orbited
    }
}
