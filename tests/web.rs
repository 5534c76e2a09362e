#![cfg(target_arch = "wasm32")]

use stacker_engine::Game;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn game_runs_through_the_js_surface() {
    stacker_engine::init();
    let mut game = Game::with_config(r#"{ "speed": 0.25, "startInAutopilot": false }"#.to_string())
        .expect("config parses");
    game.tick(0.0).unwrap();
    game.tick(44.0).unwrap();
    game.place().unwrap();
    assert_eq!(game.score(), 1);
    assert_eq!(game.instance_stride(), 12);

    let events = game.drain_events_json();
    assert!(events.contains(r#""type":"blockPlaced""#));
}

#[wasm_bindgen_test]
fn bad_config_is_rejected() {
    assert!(Game::with_config(r#"{ "baseSize": -1 }"#.to_string()).is_err());
}
