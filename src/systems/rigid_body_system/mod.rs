//! RigidBodySystem - Minimal box physics for falling overhangs
//!
//! This is intentionally simple (no SAT / no impulse solver).
//! Goals:
//! - Let overhangs fall, bounce and tumble believably.
//! - Keep kinematic layers exactly where game logic put them.
//! - Stay deterministic for a given sequence of steps.
//!
//! Current behavior:
//! - Gravity integration for dynamic bodies only.
//! - Per-axis AABB collision against every other body, with restitution.
//! - Bodies landing with their centre past the support's edge get a tipping
//!   spin; rotation is visual only (collision stays axis-aligned).

mod collision;
mod system;
mod world;

pub use system::RigidBodySystem;
pub use world::RigidBodyWorld;
