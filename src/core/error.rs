use thiserror::Error;

/// Errors surfaced by the engine and its collaborators.
///
/// Misses are *not* errors: a placement without overlap is a normal game
/// transition and is reported through `Placement::Missed`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine not initialized: call start_game() before playing")]
    NotInitialized,

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid box shape: half extents must be finite and positive, got {0:?}")]
    InvalidShape([f32; 3]),

    #[error("unknown rigid body {0}")]
    UnknownBody(u32),
}
