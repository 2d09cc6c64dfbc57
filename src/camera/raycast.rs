//! Raycast and Picking
//!
//! Ray construction from normalized device coordinates plus the analytic
//! intersection tests the editor picks with. The picker is stateless: the
//! caller supplies a candidate list per invocation, so the same function
//! serves "select an exhibit" and "select a gizmo arm" with different
//! candidate sets on the same event.

use glam::Vec3;

use crate::camera::pose::CameraPose;
use crate::config::CameraSettings;

/// Ray directions with a smaller component than this are treated as
/// parallel to the plane/slab under test.
const PARALLEL_EPSILON: f32 = 1e-4;

/// Projection parameters needed to turn an NDC point into a world ray.
#[derive(Clone, Copy, Debug)]
pub struct RaycastConfig {
    /// Screen aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
}

impl Default for RaycastConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            fov_y: 75.0_f32.to_radians(),
        }
    }
}

impl RaycastConfig {
    /// Build from camera settings and the current surface aspect ratio.
    pub fn from_settings(settings: &CameraSettings, aspect_ratio: f32) -> Self {
        Self {
            aspect_ratio,
            fov_y: settings.fov_deg.to_radians(),
        }
    }
}

/// A world-space ray with normalized direction.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize(),
        }
    }

    /// Construct the ray from the camera eye through an NDC point
    /// (x right, y up, both in [-1, 1]).
    pub fn from_ndc(pose: &CameraPose, ndc: (f32, f32), config: &RaycastConfig) -> Self {
        let half_tan = (config.fov_y * 0.5).tan();

        // Full local basis from the quaternion; well-defined at the pitch
        // poles where the horizontal right vector degenerates.
        let forward = pose.forward();
        let right = pose.orientation * Vec3::X;
        let up = pose.orientation * Vec3::Y;

        let dir = right * (ndc.0 * config.aspect_ratio * half_tan) + up * (ndc.1 * half_tan)
            + forward;
        Self::new(pose.position, dir)
    }

    /// Point at parameter `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// Intersect with a plane. Returns the hit point, or `None` when the
    /// ray is parallel to the plane or the intersection lies behind the
    /// origin.
    pub fn intersect_plane(&self, plane: &Plane) -> Option<Vec3> {
        let denom = self.dir.dot(plane.normal);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = (plane.point - self.origin).dot(plane.normal) / denom;
        if t < 0.0 {
            return None;
        }
        Some(self.at(t))
    }

    /// Distance to a sphere of `radius` around `center`, or `None` on miss.
    /// When the origin is inside the sphere the exit distance is returned.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.dir);
        let c = oc.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_disc = discriminant.sqrt();
        let t_near = -b - sqrt_disc;
        let t_far = -b + sqrt_disc;
        if t_near > 0.0 {
            Some(t_near)
        } else if t_far > 0.0 {
            Some(t_far)
        } else {
            None
        }
    }

    /// Distance to an axis-aligned box (`center`, `half_extents`) via the
    /// slab test, or `None` on miss. An origin inside the box reports
    /// distance zero.
    pub fn intersect_aabb(&self, center: Vec3, half_extents: Vec3) -> Option<f32> {
        let min = center - half_extents;
        let max = center + half_extents;

        let mut t_min = 0.0_f32;
        let mut t_max = f32::INFINITY;

        for axis in 0..3 {
            let origin = self.origin[axis];
            let dir = self.dir[axis];
            if dir.abs() < PARALLEL_EPSILON {
                // Parallel to this slab: miss unless the origin is inside it
                if origin < min[axis] || origin > max[axis] {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / dir;
            let t1 = (min[axis] - origin) * inv;
            let t2 = (max[axis] - origin) * inv;
            let (near, far) = if t1 < t2 { (t1, t2) } else { (t2, t1) };
            t_min = t_min.max(near);
            t_max = t_max.min(far);
            if t_min > t_max {
                return None;
            }
        }
        Some(t_min)
    }
}

/// A plane defined by a normal and a point on it.
#[derive(Clone, Copy, Debug)]
pub struct Plane {
    pub normal: Vec3,
    pub point: Vec3,
}

impl Plane {
    /// Plane through `point` with the given (normalized) normal.
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        Self {
            normal: normal.normalize(),
            point,
        }
    }
}

/// Hit-test geometry for a pick candidate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitShape {
    /// Sphere of the given radius around the candidate position.
    Sphere { radius: f32 },
    /// Axis-aligned box with the given half extents around the position.
    Aabb { half_extents: Vec3 },
}

impl HitShape {
    /// Ray distance to this shape placed at `position`, or `None` on miss.
    pub fn intersect(&self, position: Vec3, ray: &Ray) -> Option<f32> {
        match *self {
            HitShape::Sphere { radius } => ray.intersect_sphere(position, radius),
            HitShape::Aabb { half_extents } => ray.intersect_aabb(position, half_extents),
        }
    }
}

/// One entry in a pick candidate list: world position plus hit geometry.
/// The caller keeps whatever identity it needs alongside the list; the
/// picker only reports the winning index.
#[derive(Clone, Copy, Debug)]
pub struct HitCandidate {
    pub position: Vec3,
    pub shape: HitShape,
}

/// Result of a successful pick.
#[derive(Clone, Copy, Debug)]
pub struct PickHit {
    /// Index into the candidate list passed to [`pick`].
    pub index: usize,
    /// Ray distance to the hit.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

/// Return the nearest intersected candidate, or `None` when the ray misses
/// everything. Ties at exactly equal distance resolve to the earlier list
/// entry; candidate order is part of the contract.
pub fn pick(ray: &Ray, candidates: &[HitCandidate]) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        if let Some(distance) = candidate.shape.intersect(candidate.position, ray) {
            let closer = match &best {
                Some(hit) => distance < hit.distance,
                None => true,
            };
            if closer {
                best = Some(PickHit {
                    index,
                    distance,
                    point: ray.at(distance),
                });
            }
        }
    }
    best
}
