//! Editor Tests - Selection, Constrained Dragging, and Export
//!
//! Integration tests for the gizmo state machine driven with explicit
//! world-space rays, plus the layout export surface.

use glam::Vec3;

use gallery_walk::camera::raycast::Ray;
use gallery_walk::camera::CameraPose;
use gallery_walk::config::EditorSettings;
use gallery_walk::editor::{export, Axis, Editor, EditorPhase};
use gallery_walk::scene::{Exhibit, ExhibitSet, HitShape};

/// Camera on the +Z axis looking at the origin.
fn camera() -> CameraPose {
    CameraPose::new(Vec3::new(0.0, 0.0, 10.0))
}

fn ray_to(camera: &CameraPose, target: Vec3) -> Ray {
    Ray::new(camera.position, target - camera.position)
}

fn gallery() -> ExhibitSet {
    let mut scene = ExhibitSet::new();
    let shape = HitShape::Sphere { radius: 0.5 };
    scene.insert(Exhibit::new("center-stand", Vec3::ZERO, shape));
    scene.insert(Exhibit::new("left-stand", Vec3::new(-5.0, 0.0, 0.0), shape));
    scene
}

fn enabled_editor() -> Editor {
    let mut editor = Editor::new(&EditorSettings::default());
    editor.toggle();
    editor
}

// ============================================================================
// State machine walk-through (select → drag → commit)
// ============================================================================

#[test]
fn test_full_drag_scenario_moves_only_along_x() {
    let mut editor = enabled_editor();
    let mut scene = gallery();
    let cam = camera();

    // Pointer-down on the stand selects it and shows the gizmo
    editor.handle_pointer_down(&ray_to(&cam, Vec3::ZERO), &cam, &scene);
    assert_eq!(editor.phase(), EditorPhase::Selected);
    assert_eq!(editor.selected_id(), Some("center-stand"));
    assert!(editor.gizmo().visible);

    // Pointer-down on the X arm engages an X-constrained drag
    editor.handle_pointer_down(&ray_to(&cam, Vec3::new(1.5, 0.0, 0.0)), &cam, &scene);
    assert_eq!(editor.phase(), EditorPhase::Dragging);
    assert_eq!(editor.drag_axis(), Some(Axis::X));

    // The drag plane is the view-aligned plane z = 0; a pointer path whose
    // intersection wanders in Y must still move the stand only in X
    editor.handle_pointer_move(&ray_to(&cam, Vec3::new(2.0, 1.4, 0.0)), &mut scene);
    let position = scene.get("center-stand").unwrap().position;
    assert!((position.x - 2.0).abs() < 1e-3);
    assert_eq!(position.y, 0.0);
    assert_eq!(position.z, 0.0);

    // Release commits and returns to Selected
    editor.handle_pointer_up(&scene);
    assert_eq!(editor.phase(), EditorPhase::Selected);
    let committed = scene.get("center-stand").unwrap().position;
    assert!((committed - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-3);

    // Motion without a fresh pointer-down is inert
    editor.handle_pointer_move(&ray_to(&cam, Vec3::new(-3.0, 0.0, 0.0)), &mut scene);
    assert_eq!(scene.get("center-stand").unwrap().position, committed);
}

#[test]
fn test_y_arm_drag_moves_vertically() {
    let mut editor = enabled_editor();
    let mut scene = gallery();
    let cam = camera();

    editor.handle_pointer_down(&ray_to(&cam, Vec3::ZERO), &cam, &scene);
    editor.handle_pointer_down(&ray_to(&cam, Vec3::new(0.0, 1.5, 0.0)), &cam, &scene);
    assert_eq!(editor.drag_axis(), Some(Axis::Y));

    editor.handle_pointer_move(&ray_to(&cam, Vec3::new(0.7, 2.0, 0.0)), &mut scene);
    let position = scene.get("center-stand").unwrap().position;
    assert_eq!(position.x, 0.0);
    assert!((position.y - 2.0).abs() < 1e-3);
}

#[test]
fn test_drag_plane_miss_is_a_no_op_and_drag_survives() {
    let mut editor = enabled_editor();
    let mut scene = gallery();
    let cam = camera();

    editor.handle_pointer_down(&ray_to(&cam, Vec3::ZERO), &cam, &scene);
    editor.handle_pointer_down(&ray_to(&cam, Vec3::new(1.5, 0.0, 0.0)), &cam, &scene);

    // A ray pointing away from the drag plane (z = 0) cannot intersect it
    editor.handle_pointer_move(&Ray::new(cam.position, Vec3::Z), &mut scene);
    assert_eq!(scene.get("center-stand").unwrap().position, Vec3::ZERO);
    assert_eq!(editor.phase(), EditorPhase::Dragging);

    // Intersection exists again: dragging resumes where the pointer is
    editor.handle_pointer_move(&ray_to(&cam, Vec3::new(1.0, 0.0, 0.0)), &mut scene);
    assert!((scene.get("center-stand").unwrap().position.x - 1.0).abs() < 1e-3);
}

#[test]
fn test_selecting_second_stand_replaces_first() {
    let mut editor = enabled_editor();
    let scene = gallery();
    let cam = camera();

    editor.handle_pointer_down(&ray_to(&cam, Vec3::ZERO), &cam, &scene);
    editor.handle_pointer_down(&ray_to(&cam, Vec3::new(-5.0, 0.0, 0.0)), &cam, &scene);
    assert_eq!(editor.selected_id(), Some("left-stand"));
    assert_eq!(editor.phase(), EditorPhase::Selected);
    assert_eq!(editor.gizmo().origin, Vec3::new(-5.0, 0.0, 0.0));
}

#[test]
fn test_gizmo_visibility_tracks_selection() {
    let mut editor = enabled_editor();
    let scene = gallery();
    let cam = camera();

    assert!(!editor.gizmo().visible);
    editor.handle_pointer_down(&ray_to(&cam, Vec3::ZERO), &cam, &scene);
    assert!(editor.gizmo().visible);
    editor.handle_pointer_down(&ray_to(&cam, Vec3::new(40.0, 40.0, 0.0)), &cam, &scene);
    assert!(!editor.gizmo().visible);
}

#[test]
fn test_stale_selection_degrades_to_idle() {
    let mut editor = enabled_editor();
    let mut scene = gallery();
    let cam = camera();

    editor.handle_pointer_down(&ray_to(&cam, Vec3::ZERO), &cam, &scene);
    scene.remove("center-stand");

    // Next pointer-down validates liveness before anything else
    editor.handle_pointer_down(&ray_to(&cam, Vec3::new(30.0, 0.0, 0.0)), &cam, &scene);
    assert_eq!(editor.phase(), EditorPhase::Idle);
    assert!(!editor.gizmo().visible);
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn test_export_reflects_edited_positions() {
    let mut editor = enabled_editor();
    let mut scene = gallery();
    let cam = camera();

    editor.handle_pointer_down(&ray_to(&cam, Vec3::ZERO), &cam, &scene);
    editor.handle_pointer_down(&ray_to(&cam, Vec3::new(1.5, 0.0, 0.0)), &cam, &scene);
    editor.handle_pointer_move(&ray_to(&cam, Vec3::new(2.0, 0.0, 0.0)), &mut scene);
    editor.handle_pointer_up(&scene);

    let layout = editor.export_layout(&scene);
    assert_eq!(layout.len(), 2);
    assert_eq!(layout[0].id, "center-stand");
    assert!((layout[0].x - 2.0).abs() < 0.01);
    assert_eq!(layout[0].z, 0.0);
    assert_eq!(layout[1].id, "left-stand");
    assert_eq!(layout[1].x, -5.0);
}

#[test]
fn test_export_json_shape() {
    let scene = gallery();
    let json = export::layout_json(&scene).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["id"], "center-stand");
    assert!(entries[0]["x"].is_number());
    assert!(entries[0]["z"].is_number());
}
