use crate::core::EngineError;
use crate::domain::events::GameEvent;
use crate::render::SceneRenderer;
use crate::rigid_body_system::RigidBodyWorld;

use super::{Phase, StackEngine};

/// Turn the active layer into a falling overhang and end the game.
pub(super) fn miss_block<W: RigidBodyWorld, R: SceneRenderer>(
    engine: &mut StackEngine<W, R>,
) -> Result<(), EngineError> {
    if engine.phase == Phase::Ended {
        return Ok(());
    }
    if engine.stack.len() < 2 {
        return Err(EngineError::NotInitialized);
    }

    let layer = engine.stack.len() - 1;
    let Some(mut top) = engine.stack.pop() else {
        return Err(EngineError::NotInitialized);
    };
    let mass = engine.overhang_mass(top.width(), top.depth());
    top.release(mass, &mut engine.world)?;
    engine.overhangs.push(top);

    engine.phase = Phase::Ended;
    engine.ended_ms = 0.0;

    let autopilot = engine.autopilot;
    engine.publish(GameEvent::BlockMissed {
        layer: layer as u32,
        autopilot,
    });
    if !autopilot {
        log::info!("game over with score {}", engine.score);
        engine.publish(GameEvent::GameOver { score: engine.score });
    }
    Ok(())
}
