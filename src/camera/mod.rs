//! Camera Module
//!
//! First-person camera state and control:
//!
//! - [`pose`] - World-space camera pose shared between subsystems
//! - [`orientation`] - Smoothed yaw/pitch look control
//! - [`movement`] - Kinematic WASD movement integration
//! - [`raycast`] - NDC ray construction and stateless picking

pub mod movement;
pub mod orientation;
pub mod pose;
pub mod raycast;

pub use movement::MovementIntegrator;
pub use orientation::OrientationController;
pub use pose::CameraPose;
pub use raycast::{pick, HitCandidate, PickHit, Plane, Ray, RaycastConfig};
