use crate::core::EngineError;
use crate::render::SceneRenderer;
use crate::rigid_body_system::RigidBodyWorld;

use super::miss::miss_block;
use super::overhangs::{cull_overhangs, sync_overhangs};
use super::place::place_block;
use super::{Phase, StackEngine};

pub(super) fn update<W: RigidBodyWorld, R: SceneRenderer>(
    engine: &mut StackEngine<W, R>,
    dt_ms: f32,
) -> Result<(), EngineError> {
    let dt = dt_ms.max(0.0);

    // Autopilot shrugs off a miss and starts over after a short pause.
    if engine.phase == Phase::Ended && engine.autopilot {
        engine.ended_ms += dt;
        if engine.ended_ms >= engine.config.autopilot_restart_delay_ms {
            log::info!("autopilot restarting after a miss at score {}", engine.score);
            return engine.start_game(true);
        }
    }

    let len = engine.stack.len();
    if len >= 2 {
        let target_y = engine.config.camera_base_height + engine.config.box_height * (len - 2) as f32;
        engine.scene.follow_camera(target_y, dt);

        if engine.phase == Phase::AwaitingInput {
            advance_top(engine, dt)?;
        }
    }

    sync_overhangs(engine);
    cull_overhangs(engine);
    Ok(())
}

/// Slide the active layer, or let the autopilot drop it.
fn advance_top<W: RigidBodyWorld, R: SceneRenderer>(
    engine: &mut StackEngine<W, R>,
    dt: f32,
) -> Result<(), EngineError> {
    let len = engine.stack.len();
    let top = &engine.stack[len - 1];
    let prev = &engine.stack[len - 2];
    let axis = top.axis().ok_or(EngineError::NotInitialized)?;

    let should_move =
        !engine.autopilot || top.coord(axis) < prev.coord(axis) + engine.robot_precision;

    if should_move {
        let amount = engine.config.speed * dt;
        let top = &mut engine.stack[len - 1];
        top.slide(axis, amount, &mut engine.world, &mut engine.scene)?;
        if top.coord(axis).abs() > engine.config.move_bound {
            miss_block(engine)?;
        }
    } else {
        place_block(engine)?;
        engine.robot_precision = engine.rng.centered(engine.config.robot_precision_spread);
    }
    Ok(())
}
