//! Core primitives shared by every system: sliding axes, the engine error
//! type and the deterministic random source.

pub mod axis;
pub mod error;
pub mod random;

pub use axis::Axis;
pub use error::EngineError;
pub use random::Rng;
