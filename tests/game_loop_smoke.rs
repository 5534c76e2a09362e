use stacker_engine::render::SceneRenderer;
use stacker_engine::rigid_body_system::RigidBodyWorld;
use stacker_engine::{Game, GameConfig, GameEvent, Phase};

fn human_config() -> GameConfig {
    GameConfig {
        speed: 0.25,
        start_in_autopilot: false,
        ..GameConfig::default()
    }
}

fn top_x(game: &Game) -> f32 {
    game.game_loop().engine().top().unwrap().position().x
}

#[test]
fn first_tick_and_resume_run_with_zero_dt() {
    let mut game = Game::build(human_config()).unwrap();
    let game_loop = game.game_loop_mut();

    game_loop.tick(1000.0).unwrap();
    assert_eq!(top_x(&game), -10.0);

    game.game_loop_mut().tick(1004.0).unwrap();
    assert_eq!(top_x(&game), -9.0);

    // Time spent paused is never simulated.
    game.game_loop_mut().pause();
    game.game_loop_mut().tick(5000.0).unwrap();
    game.game_loop_mut().resume();
    game.game_loop_mut().tick(9000.0).unwrap();
    assert_eq!(top_x(&game), -9.0);
    assert_eq!(game.game_loop().frame(), 3);

    game.game_loop_mut().tick(9004.0).unwrap();
    assert_eq!(top_x(&game), -8.0);
}

#[test]
fn frames_pack_one_instance_per_mesh() {
    let mut game = Game::build(human_config()).unwrap();
    game.game_loop_mut().tick(0.0).unwrap();

    let engine = game.game_loop().engine();
    let scene = engine.scene();
    assert_eq!(scene.instance_count(), 2);
    assert_eq!(scene.instances_len(), 2 * stacker_engine::render::INSTANCE_STRIDE);
    assert_eq!(scene.instance_count(), engine.world().body_count());
}

#[test]
fn overhang_tumbles_across_frames() {
    let mut game = Game::build(human_config()).unwrap();
    let game_loop = game.game_loop_mut();
    game_loop.tick(0.0).unwrap();
    // 44 ms at 0.25 u/ms: one unit past the base.
    game_loop.tick(44.0).unwrap();
    game_loop.engine_mut().request_placement().unwrap();
    assert_eq!(game_loop.engine().score(), 1);

    let mut now = 44.0;
    for _ in 0..30 {
        now += 1.0;
        game_loop.tick(now).unwrap();
    }
    // The next layer slid only 7.5 units, still in bounds.
    assert_eq!(game_loop.engine().phase(), Phase::AwaitingInput);
    let overhang = &game_loop.engine().overhangs()[0];
    assert!(overhang.position().y < 1.0);
}

#[test]
fn human_game_reports_game_over_once() {
    let mut game = Game::build(human_config()).unwrap();
    let game_loop = game.game_loop_mut();
    game_loop.engine_mut().drain_events();

    let mut now = 0.0;
    while game_loop.engine().phase() != Phase::Ended {
        now += 16.0;
        game_loop.tick(now).unwrap();
        assert!(now < 10_000.0);
    }
    for _ in 0..10 {
        now += 16.0;
        game_loop.tick(now).unwrap();
    }

    let events = game_loop.engine_mut().drain_events();
    let game_overs = events
        .iter()
        .filter(|e| matches!(e, GameEvent::GameOver { .. }))
        .count();
    assert_eq!(game_overs, 1);
    assert!(!game_loop.engine().is_autopilot());
}

#[test]
fn demo_mode_keeps_itself_running() {
    let mut game = Game::build(GameConfig::default()).unwrap();
    assert!(game.game_loop().engine().is_autopilot());

    let game_loop = game.game_loop_mut();
    for frame in 0..3000 {
        game_loop.tick(frame as f64 * 16.0).unwrap();
    }
    let engine = game_loop.engine();
    assert!(engine.is_autopilot());
    assert!(engine.stack().len() >= 2);
    assert_eq!(engine.world().body_count(), engine.scene().mesh_count());
}

#[test]
fn reset_starts_a_human_game() {
    let mut game = Game::build(GameConfig::default()).unwrap();
    let game_loop = game.game_loop_mut();
    for frame in 0..100 {
        game_loop.tick(frame as f64 * 16.0).unwrap();
    }
    game_loop.engine_mut().request_reset().unwrap();

    let engine = game_loop.engine();
    assert!(!engine.is_autopilot());
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.stack().len(), 2);
    assert!(engine.overhangs().is_empty());
}

#[test]
fn events_serialize_with_a_type_tag() {
    let mut game = Game::build(human_config()).unwrap();
    let events = game.game_loop_mut().engine_mut().drain_events();
    let json = serde_json::to_string(&events).unwrap();
    assert_eq!(
        json,
        r#"[{"type":"gameStarted","autopilot":false},{"type":"scoreChanged","score":0}]"#
    );
}
