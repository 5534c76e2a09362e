use glam::Vec3;

use crate::core::EngineError;
use crate::rigid_body::{BodyHandle, BodyTransform};

/// Physics collaborator consumed by the stack engine.
///
/// The engine only ever holds `BodyHandle`s; bodies live in the world.
pub trait RigidBodyWorld {
    /// Create a single-box body. `mass == 0` makes it kinematic.
    fn create_body(
        &mut self,
        half_extents: Vec3,
        mass: f32,
        position: Vec3,
    ) -> Result<BodyHandle, EngineError>;

    /// Returns `false` when the handle is unknown.
    fn remove_body(&mut self, handle: BodyHandle) -> bool;

    /// Drop every shape on the body and attach exactly one new box.
    fn replace_shape(&mut self, handle: BodyHandle, half_extents: Vec3) -> Result<(), EngineError>;

    /// Teleport a body (used for kinematic layers driven by game logic).
    fn set_position(&mut self, handle: BodyHandle, position: Vec3) -> Result<(), EngineError>;

    /// Change mass in place; going from zero to positive makes the body fall.
    fn set_mass(&mut self, handle: BodyHandle, mass: f32) -> Result<(), EngineError>;

    fn set_gravity(&mut self, gravity: Vec3);

    fn step(&mut self, dt_seconds: f32);

    fn transform(&self, handle: BodyHandle) -> Option<BodyTransform>;

    fn body_count(&self) -> usize;
}
