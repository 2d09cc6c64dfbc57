//! Gallery Walk Core
//!
//! Real-time interaction core for a first-person navigable gallery with an
//! in-place exhibit editor. The host application owns windowing, rendering
//! and asset loading; this crate owns everything between a raw input event
//! and the camera/scene state the renderer reads back:
//!
//! - [`sim`] - Fixed-timestep simulation loop (accumulator, spiral-of-death
//!   guard, render interpolation factor)
//! - [`camera`] - Smoothed first-person orientation, kinematic movement, and
//!   NDC raycasting
//! - [`input`] - Platform-agnostic input state written by a thin adapter at
//!   the windowing boundary
//! - [`editor`] - Pick-and-drag exhibit manipulation (axis gizmo) plus
//!   layout export
//! - [`scene`] - The selectable-exhibit contract shared by picker and editor
//! - [`config`] - Serializable tuning settings
//!
//! # Example
//!
//! ```ignore
//! use gallery_walk::{Simulation, InputState, CameraPose, ExhibitSet};
//! use gallery_walk::config::Settings;
//!
//! let settings = Settings::default();
//! let mut sim = Simulation::new(&settings);
//! let mut input = InputState::new();
//! let mut camera = CameraPose::new(settings.camera.start_position);
//! let mut scene = ExhibitSet::new();
//!
//! // Each display refresh, after the adapter has fed events into `input`:
//! let out = sim.frame(real_delta_s, &mut input, &mut camera, &mut scene);
//! // render with `camera` (optionally blending by `out.alpha`)
//! ```

pub mod camera;
pub mod config;
pub mod editor;
pub mod input;
pub mod scene;
pub mod sim;

// Re-export the types most hosts touch every frame
pub use camera::{CameraPose, MovementIntegrator, OrientationController, Ray, RaycastConfig};
pub use config::Settings;
pub use editor::{Axis, Editor, EditorPhase};
pub use input::{InputState, KeyCode, MovementKeys, PointerButton};
pub use scene::{Exhibit, ExhibitSet, HitShape};
pub use sim::{FrameOutput, Simulation, SimulationClock};
