//! Exhibit Editor
//!
//! Pick-and-drag manipulation of exhibits behind an explicit edit-mode
//! toggle. While the editor is enabled it owns the pointer; navigation
//! never consumes pointer movement in the same tick. State machine:
//!
//! `Idle` (no selection) → `Selected` (gizmo visible) → `Dragging` (one
//! axis engaged) → back to `Selected` on release, or `Idle` on deselect.

pub mod export;
pub mod gizmo;

use glam::Vec3;

use crate::camera::raycast::{pick, Plane, Ray};
use crate::camera::CameraPose;
use crate::config::EditorSettings;
use crate::scene::ExhibitSet;

pub use export::ExhibitPlacement;
pub use gizmo::{Axis, Gizmo};

/// Externally observable editor phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    Idle,
    Selected,
    Dragging,
}

/// An in-progress axis-constrained drag.
///
/// Invariant: a drag only exists while a selection exists.
#[derive(Debug, Clone)]
struct DragState {
    /// Engaged axis; the only component of plane intersections applied.
    axis: Axis,
    /// View-aligned plane through the object's position at drag start.
    /// Its normal is the camera view direction, which keeps the ray/plane
    /// intersection well-conditioned whichever axis is engaged.
    plane: Plane,
    /// Most recent plane intersection, for hosts that render drag feedback.
    last_hit: Vec3,
}

/// Edit-mode selection and drag state machine.
///
/// Owns no scene data: selection is a stable exhibit id validated against
/// the [`ExhibitSet`] on every use, so an exhibit removed externally
/// degrades to an empty selection instead of a dangling reference.
#[derive(Debug, Clone)]
pub struct Editor {
    enabled: bool,
    selection: Option<String>,
    gizmo: Gizmo,
    drag: Option<DragState>,
}

impl Editor {
    pub fn new(settings: &EditorSettings) -> Self {
        Self {
            enabled: false,
            selection: None,
            gizmo: Gizmo::new(settings),
            drag: None,
        }
    }

    /// Whether edit mode is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> EditorPhase {
        if self.drag.is_some() {
            EditorPhase::Dragging
        } else if self.selection.is_some() {
            EditorPhase::Selected
        } else {
            EditorPhase::Idle
        }
    }

    /// Id of the selected exhibit, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Axis of the drag in progress, if any.
    pub fn drag_axis(&self) -> Option<Axis> {
        self.drag.as_ref().map(|d| d.axis)
    }

    /// Gizmo visibility and pose for rendering.
    pub fn gizmo(&self) -> &Gizmo {
        &self.gizmo
    }

    /// Toggle edit mode. Disabling forces `Idle` and hands input authority
    /// back to navigation. Returns the new enabled state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        log::info!("edit mode: {}", if self.enabled { "on" } else { "off" });
        if !self.enabled {
            self.deselect();
        }
        self.enabled
    }

    /// Handle a pointer-down at the given ray.
    ///
    /// Gizmo arms are tested first (only meaningful while something is
    /// selected), then exhibits; hitting neither deselects. Both tests go
    /// through the same stateless picker with different candidate sets.
    pub fn handle_pointer_down(&mut self, ray: &Ray, camera: &CameraPose, scene: &ExhibitSet) {
        if !self.enabled {
            return;
        }
        self.validate_selection(scene);

        if let Some(id) = self.selection.clone() {
            if let Some(hit) = pick(ray, &self.gizmo.arm_candidates()) {
                let axis = Gizmo::axis_at(hit.index)
                    .unwrap_or(Axis::X);
                self.start_drag(axis, camera, scene.get(&id).map(|e| e.position));
                return;
            }
        }

        let candidates = scene.pick_candidates();
        match pick(ray, &candidates) {
            Some(hit) => {
                if let Some(id) = scene.id_at(hit.index) {
                    self.select(id.to_string(), scene);
                }
            }
            None => self.deselect(),
        }
    }

    /// Handle pointer movement while a drag may be in progress.
    ///
    /// Intersects the ray with the recorded drag plane and applies only the
    /// engaged-axis component of (intersection - current position) to the
    /// exhibit. A plane miss is a no-op for this tick, not a fault.
    pub fn handle_pointer_move(&mut self, ray: &Ray, scene: &mut ExhibitSet) {
        if !self.enabled {
            return;
        }
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let Some(id) = self.selection.as_deref() else {
            // Broken invariant from external interference; recover to Idle
            self.drag = None;
            return;
        };
        let Some(exhibit) = scene.get_mut(id) else {
            // Selection died mid-drag: clear rather than dereference
            self.drag = None;
            self.selection = None;
            self.gizmo.hide();
            return;
        };

        if let Some(hit) = ray.intersect_plane(&drag.plane) {
            let delta = hit - exhibit.position;
            exhibit.position += drag.axis.project(delta);
            drag.last_hit = hit;
            self.gizmo.origin = exhibit.position;
        }
    }

    /// Handle pointer release: a drag always commits its current position
    /// and returns to `Selected`. There are no cancel semantics.
    pub fn handle_pointer_up(&mut self, scene: &ExhibitSet) {
        if let Some(drag) = self.drag.take() {
            if let Some(id) = self.selection.as_deref() {
                if let Some(exhibit) = scene.get(id) {
                    log::info!(
                        "drag along {:?} ended at {:?}",
                        drag.axis,
                        exhibit.position
                    );
                }
            }
        }
    }

    /// Per-step update: validate selection liveness and mirror the gizmo to
    /// the selected exhibit while not dragging.
    pub fn update(&mut self, scene: &ExhibitSet) {
        self.validate_selection(scene);
        if self.drag.is_none() {
            if let Some(exhibit) = self.selection.as_deref().and_then(|id| scene.get(id)) {
                self.gizmo.origin = exhibit.position;
            }
        }
    }

    /// Export the current exhibit layout.
    pub fn export_layout(&self, scene: &ExhibitSet) -> Vec<ExhibitPlacement> {
        export::layout_of(scene)
    }

    fn select(&mut self, id: String, scene: &ExhibitSet) {
        if let Some(exhibit) = scene.get(&id) {
            log::info!("selected {:?}", exhibit.id);
            self.gizmo.show_at(exhibit.position);
            self.selection = Some(id);
            self.drag = None;
        }
    }

    fn deselect(&mut self) {
        self.selection = None;
        self.drag = None;
        self.gizmo.hide();
    }

    fn start_drag(&mut self, axis: Axis, camera: &CameraPose, anchor: Option<Vec3>) {
        let Some(anchor) = anchor else {
            self.deselect();
            return;
        };
        log::debug!("dragging along {:?} axis", axis);
        self.drag = Some(DragState {
            axis,
            plane: Plane::from_normal_and_point(camera.forward(), anchor),
            last_hit: anchor,
        });
    }

    /// Clear the selection if its exhibit no longer exists.
    fn validate_selection(&mut self, scene: &ExhibitSet) {
        if let Some(id) = self.selection.as_deref() {
            if !scene.contains(id) {
                self.deselect();
            }
        }
    }
}
