//! Systems module - all ECS systems for the hoop-shot simulation.

pub mod debug;
pub mod gesture;
pub mod kinematics;
pub mod lifecycle;
pub mod placement;
pub mod scoring;
pub mod vfx;
