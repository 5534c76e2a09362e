use glam::Vec3;

use crate::core::{Axis, EngineError, Rng};
use crate::domain::config::GameConfig;
use crate::domain::events::{EventQueue, GameEvent};
use crate::render::SceneRenderer;
use crate::rigid_body_system::RigidBodyWorld;

use super::block::{Block, BlockMode, BlockSpec};
use super::{Phase, StackEngine};

pub(super) fn create_engine<W: RigidBodyWorld, R: SceneRenderer>(
    config: GameConfig,
    mut world: W,
    scene: R,
) -> Result<StackEngine<W, R>, EngineError> {
    config.validate()?;
    world.set_gravity(Vec3::new(0.0, config.gravity, 0.0));

    let mut rng = Rng::new(config.seed);
    let robot_precision = rng.centered(config.robot_precision_spread);

    Ok(StackEngine {
        autopilot: config.start_in_autopilot,
        config,
        world,
        scene,
        stack: Vec::new(),
        overhangs: Vec::new(),
        score: 0,
        phase: Phase::AwaitingInput,
        robot_precision,
        rng,
        events: EventQueue::new(),
        ended_ms: 0.0,
    })
}

pub(super) fn start_game<W: RigidBodyWorld, R: SceneRenderer>(
    engine: &mut StackEngine<W, R>,
    autopilot: bool,
) -> Result<(), EngineError> {
    clear_blocks(engine);

    engine.autopilot = autopilot;
    engine.phase = Phase::AwaitingInput;
    engine.score = 0;
    engine.ended_ms = 0.0;
    engine.robot_precision = engine.rng.centered(engine.config.robot_precision_spread);
    engine.scene.reset_camera();

    let size = engine.config.base_size;
    let height = engine.config.box_height;

    // Foundation
    let base = Block::spawn(
        BlockSpec {
            position: Vec3::ZERO,
            width: size,
            depth: size,
            height,
            axis: None,
            mode: BlockMode::Resting,
            mass: 0.0,
            hue: engine.layer_hue(0),
        },
        &mut engine.world,
        &mut engine.scene,
    )?;
    engine.stack.push(base);

    // First layer slides in on X
    let first = Block::spawn(
        BlockSpec {
            position: Vec3::new(engine.config.spawn_offset, height, 0.0),
            width: size,
            depth: size,
            height,
            axis: Some(Axis::X),
            mode: BlockMode::Moving,
            mass: 0.0,
            hue: engine.layer_hue(1),
        },
        &mut engine.world,
        &mut engine.scene,
    )?;
    engine.stack.push(first);

    log::info!("game started (autopilot: {autopilot})");
    engine.publish(GameEvent::GameStarted { autopilot });
    engine.publish(GameEvent::ScoreChanged { score: 0 });
    Ok(())
}

/// Dispose every layer and overhang, releasing their bodies and meshes.
pub(super) fn clear_blocks<W: RigidBodyWorld, R: SceneRenderer>(engine: &mut StackEngine<W, R>) {
    for block in engine.stack.drain(..).chain(engine.overhangs.drain(..)) {
        block.dispose(&mut engine.world, &mut engine.scene);
    }
}
