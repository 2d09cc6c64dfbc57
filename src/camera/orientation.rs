//! Orientation Controller
//!
//! Converts raw pointer deltas into a smoothed first-person camera
//! orientation. Targets move immediately when a delta is consumed; the
//! applied orientation chases the target with critically-damped exponential
//! smoothing evaluated at the fixed step, which keeps the feel identical
//! across frame rates and never overshoots.

use std::f32::consts::FRAC_PI_2;

use crate::camera::pose::CameraPose;
use crate::config::MovementSettings;

/// Pitch is clamped strictly inside the open interval (-PI/2, PI/2) so the
/// view never reaches the gimbal-flip poles.
const PITCH_MARGIN: f32 = 1e-4;

/// Smoothed yaw/pitch look controller.
///
/// Owns both the target angles (moved by pointer input) and the applied
/// angles (moved by [`step`](OrientationController::step)). The camera
/// quaternion is written exactly once per fixed step.
#[derive(Debug, Clone)]
pub struct OrientationController {
    /// Applied yaw in radians.
    yaw: f32,
    /// Applied pitch in radians, always inside the open pitch interval.
    pitch: f32,
    /// Target yaw the applied value converges toward.
    target_yaw: f32,
    /// Target pitch, clamped like the applied pitch.
    target_pitch: f32,
    /// Look sensitivity in radians per pointer unit.
    sensitivity: f32,
    /// Exponential smoothing rate. Higher = snappier.
    smoothing_rate: f32,
    /// Component-wise clamp applied to each consumed delta.
    max_delta: f32,
}

impl OrientationController {
    /// Create a controller from movement settings, starting at yaw 0 /
    /// pitch 0.
    pub fn new(settings: &MovementSettings) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            target_yaw: 0.0,
            target_pitch: 0.0,
            sensitivity: settings.mouse_sensitivity,
            smoothing_rate: settings.rotation_smoothing,
            max_delta: settings.max_pointer_delta,
        }
    }

    /// Applied yaw in radians.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Applied pitch in radians.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Target yaw in radians.
    pub fn target_yaw(&self) -> f32 {
        self.target_yaw
    }

    /// Target pitch in radians.
    pub fn target_pitch(&self) -> f32 {
        self.target_pitch
    }

    /// Re-seed both applied and target angles from an existing pose, so the
    /// view does not jump when capture is re-acquired.
    pub fn sync_from_pose(&mut self, pose: &CameraPose) {
        let (yaw, pitch) = pose.yaw_pitch();
        let pitch = Self::clamp_pitch(pitch);
        self.yaw = yaw;
        self.pitch = pitch;
        self.target_yaw = yaw;
        self.target_pitch = pitch;
    }

    /// Consume a pointer delta, moving the targets immediately.
    ///
    /// Each component is clamped to `max_delta` first; device glitches
    /// around capture transitions report deltas orders of magnitude too
    /// large and are suppressed rather than rejected.
    pub fn consume_pointer_delta(&mut self, dx: f32, dy: f32) {
        let dx = dx.clamp(-self.max_delta, self.max_delta);
        let dy = dy.clamp(-self.max_delta, self.max_delta);

        self.target_yaw -= dx * self.sensitivity;
        self.target_pitch = Self::clamp_pitch(self.target_pitch - dy * self.sensitivity);
    }

    /// Advance the applied angles one fixed step toward the targets and
    /// write the resulting orientation to the pose.
    ///
    /// `current += (target - current) * (1 - e^(-rate * dt))` converges
    /// without overshoot and is frame-rate-independent because `dt` is the
    /// fixed step, never the variable render delta.
    pub fn step(&mut self, dt_s: f32, pose: &mut CameraPose) {
        let t = 1.0 - (-self.smoothing_rate * dt_s).exp();
        self.yaw += (self.target_yaw - self.yaw) * t;
        self.pitch = Self::clamp_pitch(self.pitch + (self.target_pitch - self.pitch) * t);

        pose.set_yaw_pitch(self.yaw, self.pitch);
    }

    #[inline]
    fn clamp_pitch(pitch: f32) -> f32 {
        let limit = FRAC_PI_2 - PITCH_MARGIN;
        pitch.clamp(-limit, limit)
    }
}
