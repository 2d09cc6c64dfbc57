//! Config Module
//!
//! Centralized, serializable tuning parameters for the walkthrough core.

pub mod settings;

pub use settings::{CameraSettings, EditorSettings, MovementSettings, Settings, SimSettings};
