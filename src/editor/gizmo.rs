//! Translation Gizmo
//!
//! The visual affordance for constrained dragging: three axis arms anchored
//! at the selected exhibit. The core models each arm as a world-space box
//! for hit testing; the host renders whatever arrows it likes at
//! [`Gizmo::origin`].

use glam::Vec3;

use crate::camera::raycast::{HitCandidate, HitShape};
use crate::config::EditorSettings;

/// World axis a drag can be constrained to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes, in the order arm candidates are listed.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Unit vector along this axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Keep only this axis' component of `v`.
    pub fn project(self, v: Vec3) -> Vec3 {
        match self {
            Axis::X => Vec3::new(v.x, 0.0, 0.0),
            Axis::Y => Vec3::new(0.0, v.y, 0.0),
            Axis::Z => Vec3::new(0.0, 0.0, v.z),
        }
    }
}

/// Three-arm translation gizmo state.
#[derive(Debug, Clone)]
pub struct Gizmo {
    /// Anchor position; mirrors the selected exhibit.
    pub origin: Vec3,
    /// Visible while a selection exists.
    pub visible: bool,
    /// Arm length in meters.
    arm_length: f32,
    /// Half thickness of each arm's hit box.
    arm_half_thickness: f32,
}

impl Gizmo {
    pub fn new(settings: &EditorSettings) -> Self {
        Self {
            origin: Vec3::ZERO,
            visible: false,
            arm_length: settings.arm_length,
            arm_half_thickness: settings.arm_half_thickness,
        }
    }

    /// Show the gizmo at the given anchor.
    pub fn show_at(&mut self, origin: Vec3) {
        self.origin = origin;
        self.visible = true;
    }

    /// Hide the gizmo.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Hit boxes for the three arms, in [`Axis::ALL`] order. Each arm is a
    /// thin box from the origin to `origin + axis * arm_length`.
    pub fn arm_candidates(&self) -> [HitCandidate; 3] {
        Axis::ALL.map(|axis| {
            let along = axis.unit() * (self.arm_length * 0.5);
            let mut half_extents = Vec3::splat(self.arm_half_thickness);
            half_extents += axis.unit() * (self.arm_length * 0.5 - self.arm_half_thickness);
            HitCandidate {
                position: self.origin + along,
                shape: HitShape::Aabb { half_extents },
            }
        })
    }

    /// Map a winning arm-candidate index back to its axis.
    pub fn axis_at(index: usize) -> Option<Axis> {
        Axis::ALL.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::raycast::{pick, Ray};

    fn gizmo_at(origin: Vec3) -> Gizmo {
        let mut gizmo = Gizmo::new(&EditorSettings::default());
        gizmo.show_at(origin);
        gizmo
    }

    #[test]
    fn test_axis_project() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Axis::X.project(v), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(Axis::Y.project(v), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(Axis::Z.project(v), Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_arm_boxes_span_arm_length() {
        let gizmo = gizmo_at(Vec3::ZERO);
        let arms = gizmo.arm_candidates();

        // X arm: centered halfway along +X, reaching from 0 to arm_length
        let x_arm = arms[0];
        assert!((x_arm.position.x - 1.0).abs() < 1e-5);
        if let HitShape::Aabb { half_extents } = x_arm.shape {
            assert!((half_extents.x - 1.0).abs() < 1e-5);
            assert!((half_extents.y - 0.15).abs() < 1e-5);
        } else {
            panic!("arm must be a box");
        }
    }

    #[test]
    fn test_ray_down_x_arm_picks_x() {
        let gizmo = gizmo_at(Vec3::ZERO);
        // Camera off to +X looking back toward the origin along -X
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::NEG_X);
        let hit = pick(&ray, &gizmo.arm_candidates()).unwrap();
        assert_eq!(Gizmo::axis_at(hit.index), Some(Axis::X));
    }

    #[test]
    fn test_ray_above_y_arm_picks_y() {
        let gizmo = gizmo_at(Vec3::new(2.0, 0.0, -3.0));
        let ray = Ray::new(Vec3::new(2.0, 5.0, -3.0), Vec3::NEG_Y);
        let hit = pick(&ray, &gizmo.arm_candidates()).unwrap();
        assert_eq!(Gizmo::axis_at(hit.index), Some(Axis::Y));
    }

    #[test]
    fn test_ray_past_arms_misses() {
        let gizmo = gizmo_at(Vec3::ZERO);
        let ray = Ray::new(Vec3::new(10.0, 10.0, 10.0), Vec3::Y);
        assert!(pick(&ray, &gizmo.arm_candidates()).is_none());
    }
}
