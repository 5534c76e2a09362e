//! Stacker Engine - block stacking game core in WASM
//!
//! Blocks slide in over a growing tower, get cut to their overlap with the
//! layer below, and the missed part tumbles away under physics.
//!
//! Architecture:
//! - core/        - Axes, errors, deterministic randomness
//! - domain/      - Game config and outward events
//! - systems/     - Rigid body world and render scene (collaborators)
//! - simulation/  - StackEngine, GameLoop and the JS facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Short paths for the collaborator systems
pub use systems::render;
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook, browser console logging.
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    // A second init() keeps the logger already installed.
    #[cfg(target_arch = "wasm32")]
    let _ = console_log::init_with_level(log::Level::Info);

    web_sys::console::log_1(&"🧱 Stacker WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{Axis, EngineError};
pub use domain::config::GameConfig;
pub use domain::events::GameEvent;
pub use simulation::{
    Block, BlockMode, Game, GameLoop, Phase, Placement, StackEngine, TickStats,
};
