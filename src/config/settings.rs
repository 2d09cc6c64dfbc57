//! Tuning Settings
//!
//! All gameplay-facing tuning values as one serializable struct, so hosts
//! can load them from JSON instead of recompiling. Defaults match the
//! shipped walkthrough tuning.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Camera projection and placement settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraSettings {
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    /// Near clip distance in meters (renderer-facing, carried for the host).
    pub near: f32,
    /// Far clip distance in meters.
    pub far: f32,
    /// Camera start position in world space.
    pub start_position: Vec3,
    /// Operator eye height in meters.
    pub eye_height: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_deg: 75.0,
            near: 0.1,
            far: 1000.0,
            start_position: Vec3::new(0.0, 1.6, 5.0),
            eye_height: 1.6,
        }
    }
}

/// First-person movement and look tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MovementSettings {
    /// Walk speed in meters per second.
    pub speed: f32,
    /// Speed multiplier while the sprint key is held.
    pub sprint_multiplier: f32,
    /// Look sensitivity in radians per pointer unit.
    pub mouse_sensitivity: f32,
    /// Exponential smoothing rate for orientation. Higher = snappier.
    pub rotation_smoothing: f32,
    /// Per-event component-wise clamp on pointer deltas, suppressing
    /// device spikes around capture transitions.
    pub max_pointer_delta: f32,
    /// Absolute ceiling on distance covered in a single fixed step.
    pub max_step_distance: f32,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            speed: 8.0,
            sprint_multiplier: 2.0,
            mouse_sensitivity: 0.002,
            rotation_smoothing: 12.0,
            max_pointer_delta: 100.0,
            max_step_distance: 10.0,
        }
    }
}

/// Exhibit editor tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Gizmo arm length in meters.
    pub arm_length: f32,
    /// Half thickness of an arm's hit box in meters.
    pub arm_half_thickness: f32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            arm_length: 2.0,
            arm_half_thickness: 0.15,
        }
    }
}

/// Simulation loop timing settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimSettings {
    /// Fixed simulation step in seconds.
    pub fixed_step_s: f32,
    /// Per-frame real-delta clamp in seconds. Prevents a runaway step burst
    /// after a stall (tab suspend, breakpoint).
    pub max_frame_delta_s: f32,
    /// Window after pointer-capture acquisition during which incoming
    /// deltas are discarded. The first reported delta after capture is
    /// unreliable on some platforms.
    pub capture_debounce_s: f32,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            fixed_step_s: 1.0 / 60.0,
            max_frame_delta_s: 0.1,
            capture_debounce_s: 0.06,
        }
    }
}

/// Top-level settings bundle.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub camera: CameraSettings,
    pub movement: MovementSettings,
    pub editor: EditorSettings,
    pub sim: SimSettings,
}

impl Settings {
    /// Parse settings from a JSON string. Missing fields fall back to
    /// defaults via `#[serde(default)]`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize settings to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_tuning() {
        let s = Settings::default();
        assert_eq!(s.movement.speed, 8.0);
        assert_eq!(s.movement.sprint_multiplier, 2.0);
        assert_eq!(s.movement.mouse_sensitivity, 0.002);
        assert_eq!(s.camera.eye_height, 1.6);
        assert!((s.sim.fixed_step_s - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_json_round_trip() {
        let s = Settings::default();
        let json = s.to_json().unwrap();
        let back = Settings::from_json(&json).unwrap();
        assert_eq!(back.movement.speed, s.movement.speed);
        assert_eq!(back.camera.start_position, s.camera.start_position);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let s = Settings::from_json("{}").unwrap();
        assert_eq!(s.movement.sprint_multiplier, 2.0);
        assert_eq!(s.editor.arm_length, 2.0);
    }
}
