//! Scene Interface
//!
//! The selectable-exhibit contract between the host's scene layer and this
//! core. The host owns meshes, materials and asset loading; the core only
//! sees stable ids, world positions and hit-test geometry. Removing an
//! exhibit from the set is the liveness signal: the editor treats any
//! selection naming a removed id as empty on next use instead of
//! dereferencing a stale handle.

use glam::Vec3;

use crate::camera::raycast::HitCandidate;

pub use crate::camera::raycast::HitShape;

/// A selectable, movable exhibit as the core sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Exhibit {
    /// Stable identifier, unique within the set.
    pub id: String,
    /// World position. The editor writes this during drags.
    pub position: Vec3,
    /// Hit-test geometry for picking, centered on `position`.
    pub shape: HitShape,
}

impl Exhibit {
    pub fn new(id: impl Into<String>, position: Vec3, shape: HitShape) -> Self {
        Self {
            id: id.into(),
            position,
            shape,
        }
    }
}

/// The set of exhibits the editor may select and move.
///
/// Insertion order is preserved; it doubles as the pick-candidate order and
/// therefore as the documented tie-break for equal-distance hits.
#[derive(Debug, Clone, Default)]
pub struct ExhibitSet {
    exhibits: Vec<Exhibit>,
}

impl ExhibitSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exhibit. Replaces any existing exhibit with the same id.
    pub fn insert(&mut self, exhibit: Exhibit) {
        if let Some(existing) = self.exhibits.iter_mut().find(|e| e.id == exhibit.id) {
            *existing = exhibit;
        } else {
            self.exhibits.push(exhibit);
        }
    }

    /// Remove an exhibit by id. Returns the removed entry, if any.
    pub fn remove(&mut self, id: &str) -> Option<Exhibit> {
        let index = self.exhibits.iter().position(|e| e.id == id)?;
        Some(self.exhibits.remove(index))
    }

    /// Look up an exhibit by id. `None` doubles as the liveness check.
    pub fn get(&self, id: &str) -> Option<&Exhibit> {
        self.exhibits.iter().find(|e| e.id == id)
    }

    /// Mutable lookup by id.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Exhibit> {
        self.exhibits.iter_mut().find(|e| e.id == id)
    }

    /// Whether an exhibit with this id is still alive.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.exhibits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exhibits.is_empty()
    }

    /// Iterate exhibits in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Exhibit> {
        self.exhibits.iter()
    }

    /// Build the pick-candidate list, parallel to [`ExhibitSet::iter`]
    /// order, for one stateless picker invocation.
    pub fn pick_candidates(&self) -> Vec<HitCandidate> {
        self.exhibits
            .iter()
            .map(|e| HitCandidate {
                position: e.position,
                shape: e.shape,
            })
            .collect()
    }

    /// Resolve a winning pick-candidate index back to an exhibit id.
    pub fn id_at(&self, index: usize) -> Option<&str> {
        self.exhibits.get(index).map(|e| e.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stand(id: &str, x: f32) -> Exhibit {
        Exhibit::new(id, Vec3::new(x, 0.0, 0.0), HitShape::Sphere { radius: 1.0 })
    }

    #[test]
    fn test_insert_get_remove() {
        let mut set = ExhibitSet::new();
        set.insert(stand("center-stand", 0.0));
        set.insert(stand("left-stand", -5.0));

        assert_eq!(set.len(), 2);
        assert!(set.contains("center-stand"));
        assert_eq!(set.get("left-stand").unwrap().position.x, -5.0);

        assert!(set.remove("center-stand").is_some());
        assert!(!set.contains("center-stand"));
        assert!(set.remove("center-stand").is_none());
    }

    #[test]
    fn test_insert_same_id_replaces() {
        let mut set = ExhibitSet::new();
        set.insert(stand("stand", 0.0));
        set.insert(stand("stand", 3.0));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("stand").unwrap().position.x, 3.0);
    }

    #[test]
    fn test_candidates_parallel_to_ids() {
        let mut set = ExhibitSet::new();
        set.insert(stand("a", 0.0));
        set.insert(stand("b", 5.0));

        let candidates = set.pick_candidates();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[1].position.x, 5.0);
        assert_eq!(set.id_at(1), Some("b"));
        assert_eq!(set.id_at(7), None);
    }
}
