use wasm_bindgen::prelude::*;

use crate::core::EngineError;
use crate::domain::config::GameConfig;
use crate::domain::events::GameEvent;
use crate::render::{Camera, SceneBuffer, SceneRenderer, INSTANCE_STRIDE};
use crate::rigid_body_system::{RigidBodySystem, RigidBodyWorld};

use super::game_loop::GameLoop;
use super::tick_stats::TickStats;
use super::{Phase, StackEngine};

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JS-facing game: engine + physics world + scene buffer behind one handle.
#[wasm_bindgen]
pub struct Game {
    inner: GameLoop<RigidBodySystem, SceneBuffer>,
    listener: Option<js_sys::Function>,
}

impl Game {
    /// Build and start a game natively (no JS types involved).
    pub fn build(config: GameConfig) -> Result<Self, EngineError> {
        let mut world = RigidBodySystem::new();
        world.set_max_speed(config.max_fall_speed);
        world.set_restitution(config.restitution);
        let scene = SceneBuffer::new(Camera::new(
            config.camera_base_height,
            config.camera_follow_speed,
        ));

        let autopilot = config.start_in_autopilot;
        let mut engine = StackEngine::new(config, world, scene)?;
        engine.start_game(autopilot)?;
        Ok(Self {
            inner: GameLoop::new(engine),
            listener: None,
        })
    }

    pub fn game_loop(&self) -> &GameLoop<RigidBodySystem, SceneBuffer> {
        &self.inner
    }

    pub fn game_loop_mut(&mut self) -> &mut GameLoop<RigidBodySystem, SceneBuffer> {
        &mut self.inner
    }

    fn engine(&self) -> &StackEngine<RigidBodySystem, SceneBuffer> {
        self.inner.engine()
    }

    fn engine_mut(&mut self) -> &mut StackEngine<RigidBodySystem, SceneBuffer> {
        self.inner.engine_mut()
    }

    /// Push pending events to the JS listener, if one is registered. Events
    /// go out one at a time; when the listener throws, the ones after it stay
    /// queued for the next frame.
    fn dispatch_events(&mut self) -> Result<(), JsValue> {
        let Some(listener) = self.listener.clone() else {
            return Ok(());
        };
        while let Some(event) = self.engine_mut().next_event() {
            let json = serde_json::to_string(&event).map_err(|e| JsValue::from_str(&e.to_string()))?;
            listener.call1(&JsValue::NULL, &JsValue::from_str(&json))?;
        }
        Ok(())
    }
}

#[wasm_bindgen]
impl Game {
    /// Create a game with the default config
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Game, JsValue> {
        Game::build(GameConfig::default()).map_err(to_js)
    }

    /// Create a game from a JSON config (missing keys keep defaults)
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: String) -> Result<Game, JsValue> {
        let config = GameConfig::from_json(&json).map_err(to_js)?;
        Game::build(config).map_err(to_js)
    }

    /// Run one animation frame (timestamp from requestAnimationFrame)
    pub fn tick(&mut self, now_ms: f64) -> Result<(), JsValue> {
        self.inner.tick(now_ms).map_err(to_js)?;
        self.dispatch_events()
    }

    /// Placement requested (tap, click or space)
    pub fn place(&mut self) -> Result<(), JsValue> {
        self.engine_mut().request_placement().map_err(to_js)?;
        self.dispatch_events()
    }

    /// Reset requested: start a fresh human game
    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.engine_mut().request_reset().map_err(to_js)?;
        self.dispatch_events()
    }

    pub fn pause(&mut self) {
        self.inner.pause();
    }

    pub fn resume(&mut self) {
        self.inner.resume();
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.engine_mut().set_autopilot(enabled);
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.engine_mut().set_gravity(gravity);
    }

    /// Receive every event as a JSON string, e.g. `{"type":"scoreChanged","score":3}`
    pub fn set_event_listener(&mut self, listener: js_sys::Function) {
        self.listener = Some(listener);
    }

    pub fn clear_event_listener(&mut self) {
        self.listener = None;
    }

    /// Pending events as a JSON array (for hosts that poll instead of listening)
    pub fn drain_events_json(&mut self) -> String {
        let events: Vec<GameEvent> = self.engine_mut().drain_events();
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u32 {
        self.engine().score()
    }

    #[wasm_bindgen(getter)]
    pub fn game_over(&self) -> bool {
        self.engine().phase() == Phase::Ended
    }

    #[wasm_bindgen(getter)]
    pub fn autopilot(&self) -> bool {
        self.engine().is_autopilot()
    }

    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool {
        self.inner.is_paused()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.inner.frame()
    }

    /// Layers on the stack, base included
    pub fn stack_height(&self) -> usize {
        self.engine().stack().len()
    }

    pub fn overhang_count(&self) -> usize {
        self.engine().overhangs().len()
    }

    pub fn camera_y(&self) -> f32 {
        self.engine().scene().camera_y()
    }

    // === RENDER API ===

    /// Get pointer to the packed instance buffer (for JS rendering)
    pub fn instances_ptr(&self) -> *const f32 {
        self.engine().scene().instances_ptr()
    }

    /// Length of the instance buffer in floats
    pub fn instances_len(&self) -> usize {
        self.engine().scene().instances_len()
    }

    pub fn instance_count(&self) -> usize {
        self.engine().scene().instance_count()
    }

    pub fn instance_stride(&self) -> usize {
        INSTANCE_STRIDE
    }

    // === PERF / CONFIG ===

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.inner.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_tick_stats(&self) -> TickStats {
        self.inner.stats()
    }

    pub fn config_json(&self) -> String {
        self.engine().config().to_json()
    }

    pub fn body_count(&self) -> usize {
        self.engine().world().body_count()
    }
}
