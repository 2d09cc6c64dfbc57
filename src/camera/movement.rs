//! Movement Integrator
//!
//! Kinematic first-person movement: pressed keys become a normalized local
//! intent vector, oriented by the camera's current yaw, scaled by speed and
//! the fixed step, and added directly to the camera position. There is no
//! velocity or acceleration state; displacement is recomputed from scratch
//! every step.

use glam::Vec3;

use crate::camera::pose::CameraPose;
use crate::config::MovementSettings;
use crate::input::MovementKeys;

/// Converts movement keys plus camera orientation into per-step camera
/// displacement.
#[derive(Debug, Clone)]
pub struct MovementIntegrator {
    /// Walk speed in meters per second.
    speed: f32,
    /// Multiplier applied while sprinting.
    sprint_multiplier: f32,
    /// Absolute ceiling on distance covered in one step, guarding against a
    /// misconfigured speed or step size.
    max_step_distance: f32,
}

impl MovementIntegrator {
    pub fn new(settings: &MovementSettings) -> Self {
        Self {
            speed: settings.speed,
            sprint_multiplier: settings.sprint_multiplier,
            max_step_distance: settings.max_step_distance,
        }
    }

    /// Advance the camera position one fixed step.
    ///
    /// Reads the pose's orientation as already updated this step, so
    /// movement always follows the latest view direction. Horizontal
    /// movement speed is independent of pitch: the forward basis is the
    /// view direction projected to the horizontal plane, falling back to a
    /// pure yaw-derived direction when the projection degenerates at the
    /// pitch poles.
    pub fn step(&self, dt_s: f32, keys: &MovementKeys, pose: &mut CameraPose) {
        let mut intent = Vec3::ZERO;
        if keys.forward {
            intent.z += 1.0;
        }
        if keys.backward {
            intent.z -= 1.0;
        }
        if keys.right {
            intent.x += 1.0;
        }
        if keys.left {
            intent.x -= 1.0;
        }
        if keys.up {
            intent.y += 1.0;
        }

        if intent.length_squared() == 0.0 {
            return;
        }
        // Diagonal movement must not outrun axis-aligned movement
        let intent = intent.normalize();

        let forward = match pose.horizontal_forward() {
            Some(flat) => flat,
            None => {
                let (yaw, _pitch) = pose.yaw_pitch();
                Vec3::new(-yaw.sin(), 0.0, -yaw.cos())
            }
        };
        let right = forward.cross(Vec3::Y).normalize();

        let direction = forward * intent.z + right * intent.x + Vec3::Y * intent.y;

        let speed = if keys.sprint {
            self.speed * self.sprint_multiplier
        } else {
            self.speed
        };
        let distance = (speed * dt_s).min(self.max_step_distance);

        pose.position += direction * distance;
    }
}
