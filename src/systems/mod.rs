//! Collaborator systems the stack engine drives: rigid body physics and the
//! render scene.

pub mod render;
pub mod rigid_body;
pub mod rigid_body_system;
