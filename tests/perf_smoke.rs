use stacker_engine::{Game, GameConfig};

#[test]
fn perf_smoke_tick() {
    let mut game = Game::build(GameConfig::default()).expect("default config builds");
    let game_loop = game.game_loop_mut();
    game_loop.enable_perf_metrics(true);

    for frame in 0..120 {
        game_loop.tick(frame as f64 * 16.0).unwrap();
    }
    let stats = game_loop.stats();
    assert_eq!(stats.dt_ms(), 16.0);
    assert!(stats.tick_ms() >= 0.0);
    assert!(stats.bodies() >= 2);
    assert_eq!(stats.bodies(), stats.meshes());

    game_loop.enable_perf_metrics(false);
    assert_eq!(game_loop.stats().bodies(), 0);
}
