//! Domain data: tunable game configuration and the outward event stream.

pub mod config;
pub mod events;
