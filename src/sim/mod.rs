//! Simulation Loop
//!
//! Fixed-timestep driver decoupling simulation updates from variable-rate
//! rendering. Each display refresh the host calls
//! [`Simulation::frame`] with real elapsed time; the loop runs zero or more
//! whole fixed steps (never a fractional one) and reports the residual as
//! an interpolation factor. Given identical input sequences the step
//! sequence is identical regardless of frame rate.

use crate::camera::raycast::{Ray, RaycastConfig};
use crate::camera::{CameraPose, MovementIntegrator, OrientationController};
use crate::config::Settings;
use crate::editor::Editor;
use crate::input::{InputState, PointerCapture};
use crate::scene::ExhibitSet;

/// Accumulating fixed-step clock.
///
/// Invariants: the accumulator ends every frame in `[0, fixed_step)`, and
/// elapsed time grows monotonically by the clamped frame delta.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    /// Fixed step in seconds.
    fixed_step_s: f32,
    /// Per-frame clamp on incoming real delta, guarding against a step
    /// burst after a stall.
    max_frame_delta_s: f32,
    /// Unconsumed simulation time.
    accumulator_s: f32,
    /// Total clamped time since construction.
    elapsed_s: f64,
}

impl SimulationClock {
    pub fn new(fixed_step_s: f32, max_frame_delta_s: f32) -> Self {
        Self {
            fixed_step_s,
            max_frame_delta_s,
            accumulator_s: 0.0,
            elapsed_s: 0.0,
        }
    }

    /// The fixed step in seconds.
    pub fn fixed_step_s(&self) -> f32 {
        self.fixed_step_s
    }

    /// Total clamped elapsed time in seconds.
    pub fn elapsed_s(&self) -> f64 {
        self.elapsed_s
    }

    /// Residual unconsumed time, always in `[0, fixed_step)` between
    /// frames.
    pub fn accumulator_s(&self) -> f32 {
        self.accumulator_s
    }

    /// Clamp and bank one frame's real delta. Returns the clamped delta.
    pub fn begin_frame(&mut self, real_delta_s: f32) -> f32 {
        let delta = real_delta_s.clamp(0.0, self.max_frame_delta_s);
        self.accumulator_s += delta;
        self.elapsed_s += delta as f64;
        delta
    }

    /// Consume one whole fixed step if enough time is banked.
    pub fn consume_step(&mut self) -> bool {
        if self.accumulator_s >= self.fixed_step_s {
            self.accumulator_s -= self.fixed_step_s;
            true
        } else {
            false
        }
    }

    /// Interpolation factor in `[0, 1)`: the banked fraction of the next
    /// step. Hosts may blend previous/current state by it; rendering the
    /// latest state unblended is equally valid.
    pub fn alpha(&self) -> f32 {
        (self.accumulator_s / self.fixed_step_s).clamp(0.0, 1.0)
    }
}

/// Result of one driven frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    /// Whole fixed steps executed this frame.
    pub steps: u32,
    /// Interpolation factor for rendering, in `[0, 1)`.
    pub alpha: f32,
}

/// Top-level per-frame driver owning the interaction subsystems.
///
/// Single-threaded and synchronous end to end: input adapters write state
/// before the frame, `frame` consumes it, the host renders after. Within
/// each fixed step the order is orientation → movement → editor, so
/// movement follows the just-updated view direction and drags see the
/// latest camera ray.
#[derive(Debug, Clone)]
pub struct Simulation {
    clock: SimulationClock,
    orientation: OrientationController,
    movement: MovementIntegrator,
    editor: Editor,
    capture: PointerCapture,
    raycast: RaycastConfig,
}

impl Simulation {
    pub fn new(settings: &Settings) -> Self {
        Self {
            clock: SimulationClock::new(settings.sim.fixed_step_s, settings.sim.max_frame_delta_s),
            orientation: OrientationController::new(&settings.movement),
            movement: MovementIntegrator::new(&settings.movement),
            editor: Editor::new(&settings.editor),
            capture: PointerCapture::new(settings.sim.capture_debounce_s),
            raycast: RaycastConfig::default(),
        }
    }

    /// Set the projection used to build pick rays (call on resize).
    pub fn set_raycast_config(&mut self, config: RaycastConfig) {
        self.raycast = config;
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn orientation(&self) -> &OrientationController {
        &self.orientation
    }

    pub fn capture(&self) -> &PointerCapture {
        &self.capture
    }

    /// The platform acquired pointer capture (lock granted). Re-seeds the
    /// look targets from the current pose so the view cannot jump, and
    /// discards the pending unreliable delta.
    pub fn pointer_captured(&mut self, input: &mut InputState, camera: &CameraPose) {
        if self.capture.acquire() {
            self.orientation.sync_from_pose(camera);
            input.pointer.clear_delta();
        }
    }

    /// The platform released pointer capture.
    pub fn pointer_released(&mut self, input: &mut InputState) {
        if self.capture.release() {
            input.pointer.clear_delta();
            input.keyboard.reset();
        }
    }

    /// Drive one display frame.
    ///
    /// 1. Clamp and bank `real_delta_s`.
    /// 2. Route edge-triggered actions and pointer events: the editor owns
    ///    the pointer while edit mode is on, navigation owns it otherwise —
    ///    never both in the same frame.
    /// 3. Run whole fixed steps while banked time allows.
    /// 4. Report the residual as `alpha` and clear per-frame input edges.
    pub fn frame(
        &mut self,
        real_delta_s: f32,
        input: &mut InputState,
        camera: &mut CameraPose,
        scene: &mut ExhibitSet,
    ) -> FrameOutput {
        let delta = self.clock.begin_frame(real_delta_s);
        self.capture.tick(delta);

        if input.release_requested() {
            self.pointer_released(input);
        }
        if input.edit_toggle_requested() {
            let enabled = self.editor.toggle();
            if enabled {
                // Editing needs a visible cursor
                self.pointer_released(input);
            } else {
                self.orientation.sync_from_pose(camera);
            }
        }
        if input.export_requested() {
            let layout = self.editor.export_layout(scene);
            match serde_json::to_string_pretty(&layout) {
                Ok(json) => log::info!("exported layout:\n{json}"),
                Err(err) => log::warn!("layout export failed: {err}"),
            }
        }

        if self.editor.is_enabled() {
            self.route_editor_pointer(input, camera, scene);
        } else if self.capture.deltas_usable() {
            let (dx, dy) = input.pointer.consume_delta();
            self.orientation.consume_pointer_delta(dx, dy);
        } else {
            // Deltas accumulated while uncaptured or debouncing are
            // unreliable; drop them instead of banking a spike
            input.pointer.clear_delta();
        }

        let mut steps = 0;
        while self.clock.consume_step() {
            self.step(input, camera, scene);
            steps += 1;
        }

        input.end_frame();
        FrameOutput {
            steps,
            alpha: self.clock.alpha(),
        }
    }

    /// One fixed step: orientation, then movement, then editor bookkeeping.
    fn step(&mut self, input: &InputState, camera: &mut CameraPose, scene: &mut ExhibitSet) {
        let dt = self.clock.fixed_step_s();
        self.orientation.step(dt, camera);
        if !self.editor.is_enabled() {
            self.movement.step(dt, &input.keyboard.movement, camera);
        }
        self.editor.update(scene);
    }

    fn route_editor_pointer(
        &mut self,
        input: &mut InputState,
        camera: &CameraPose,
        scene: &mut ExhibitSet,
    ) {
        let ndc = input.pointer.ndc();
        let ray = Ray::from_ndc(camera, ndc, &self.raycast);

        if input.pointer.left.just_pressed {
            self.editor.handle_pointer_down(&ray, camera, scene);
        }
        self.editor.handle_pointer_move(&ray, scene);
        if input.pointer.left.just_released {
            self.editor.handle_pointer_up(scene);
        }
        // Navigation never sees pointer motion from an editing frame
        input.pointer.clear_delta();
    }
}
