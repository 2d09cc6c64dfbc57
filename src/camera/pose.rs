//! Camera Pose
//!
//! One owned camera state passed by reference to each step function, so the
//! controller, integrator, picker and editor all see the same pose without
//! ambient globals.

use glam::{EulerRot, Quat, Vec3};

/// World-space camera pose: position plus orientation quaternion.
///
/// The orientation is always a yaw-then-pitch rotation (YXZ order, roll
/// fixed at zero); the orientation controller writes it exactly once per
/// fixed step. With yaw = 0 and pitch = 0 the camera looks toward -Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Orientation quaternion (yaw/pitch only, roll = 0).
    pub orientation: Quat,
}

impl CameraPose {
    /// Create a pose at the given position looking toward -Z.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
        }
    }

    /// Set the orientation from yaw/pitch angles in radians.
    pub fn set_yaw_pitch(&mut self, yaw: f32, pitch: f32) {
        self.orientation = Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0);
    }

    /// Recover (yaw, pitch) from the orientation quaternion.
    pub fn yaw_pitch(&self) -> (f32, f32) {
        let (yaw, pitch, _roll) = self.orientation.to_euler(EulerRot::YXZ);
        (yaw, pitch)
    }

    /// View direction (normalized).
    #[inline]
    pub fn forward(&self) -> Vec3 {
        (self.orientation * Vec3::NEG_Z).normalize()
    }

    /// Right direction in the horizontal plane (normalized).
    ///
    /// Degenerates when looking straight up/down; callers needing a
    /// horizontal basis should go through [`CameraPose::horizontal_forward`].
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize_or(Vec3::X)
    }

    /// Up direction (normalized).
    #[inline]
    pub fn up(&self) -> Vec3 {
        (self.orientation * Vec3::Y).normalize()
    }

    /// View direction projected to the horizontal plane and re-normalized,
    /// or `None` when the projection is numerically negligible (looking
    /// straight up/down).
    pub fn horizontal_forward(&self) -> Option<Vec3> {
        let mut flat = self.forward();
        flat.y = 0.0;
        if flat.length_squared() < 1e-6 {
            None
        } else {
            Some(flat.normalize())
        }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}
