//! RigidBody - A solid box that moves as a unit
//!
//! Bodies carry their collision shapes as half extents around the centre of
//! mass. Mass zero marks a kinematic body: game logic places it, the world
//! never integrates it.

mod body;

pub use body::{BodyHandle, BodyTransform, BoxShape, RigidBody};
