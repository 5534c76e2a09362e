//! StackEngine - the block stacking game core
//!
//! The engine owns the ordered stack of layers and the falling overhangs and
//! is their only mutator. Physics and rendering are collaborators reached
//! through `RigidBodyWorld` and `SceneRenderer`; the UI only ever sees the
//! `GameEvent` queue.
//!
//! Per tick (see `GameLoop`): update -> physics step -> overhang sync -> render.

use crate::core::{EngineError, Rng};
use crate::domain::config::GameConfig;
use crate::domain::events::{EventQueue, GameEvent};
use crate::render::SceneRenderer;
use crate::rigid_body_system::RigidBodyWorld;

#[path = "block/block.rs"]
mod block;
#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/tick_stats.rs"]
mod tick_stats;
#[path = "step/place.rs"]
mod place;
#[path = "step/miss.rs"]
mod miss;
#[path = "step/update.rs"]
mod update;
#[path = "step/overhangs.rs"]
mod overhangs;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "game_loop/game_loop.rs"]
mod game_loop;
mod facade;

pub use block::{Block, BlockMode, BlockSpec};
pub use facade::Game;
pub use game_loop::GameLoop;
pub use place::{plan_cut, Cut, CutPlan, CutReport};
pub use tick_stats::TickStats;

use perf_timer::PerfTimer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingInput,
    Ended,
}

/// Result of a placement attempt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// The layer survived, cut to its overlap.
    Placed(CutReport),
    /// No overlap: the whole layer fell.
    Missed,
    /// The game has already ended.
    Ignored,
}

/// The stacking game state and its rules.
pub struct StackEngine<W: RigidBodyWorld, R: SceneRenderer> {
    config: GameConfig,
    world: W,
    scene: R,

    // Bottom to top; index 0 is the base.
    stack: Vec<Block>,
    overhangs: Vec<Block>,

    score: u32,
    phase: Phase,
    autopilot: bool,
    robot_precision: f32,
    rng: Rng,
    events: EventQueue,

    // Time spent in `Ended` while on autopilot
    ended_ms: f32,
}

impl<W: RigidBodyWorld, R: SceneRenderer> StackEngine<W, R> {
    /// Build an engine around its collaborators. The stack stays empty until
    /// `start_game()`.
    pub fn new(config: GameConfig, world: W, scene: R) -> Result<Self, EngineError> {
        init::create_engine(config, world, scene)
    }

    /// Dispose every block, zero the score and lay the two seed layers.
    pub fn start_game(&mut self, autopilot: bool) -> Result<(), EngineError> {
        init::start_game(self, autopilot)
    }

    /// Advance one tick of game logic. `dt_ms` is 0 on the first tick.
    pub fn update(&mut self, dt_ms: f32) -> Result<(), EngineError> {
        update::update(self, dt_ms)
    }

    /// Cut the active layer against the one below it.
    pub fn place_block(&mut self) -> Result<Placement, EngineError> {
        place::place_block(self)
    }

    /// Drop the active layer entirely and end the game.
    pub fn miss_block(&mut self) -> Result<(), EngineError> {
        miss::miss_block(self)
    }

    /// Input handler for "placement requested" (tap, click, space).
    /// While the demo autopilot runs this starts a real game instead.
    pub fn request_placement(&mut self) -> Result<(), EngineError> {
        if self.autopilot {
            return self.start_game(false);
        }
        self.place_block().map(|_| ())
    }

    /// Input handler for "reset requested".
    pub fn request_reset(&mut self) -> Result<(), EngineError> {
        self.start_game(false)
    }

    /// Copy physics poses onto every overhang's mesh.
    pub fn sync_overhangs(&mut self) {
        overhangs::sync_overhangs(self);
    }

    pub fn step_physics(&mut self, dt_ms: f32) {
        self.world.step(dt_ms.max(0.0) / 1000.0);
    }

    pub fn render(&mut self) {
        self.scene.render();
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        settings::set_autopilot(self, enabled);
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        settings::set_gravity(self, gravity);
    }

    /// Override the autopilot's next stopping offset.
    pub fn set_robot_precision(&mut self, precision: f32) {
        settings::set_robot_precision(self, precision);
    }

    /// Take every pending event, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Take the oldest pending event, leaving the rest queued.
    pub fn next_event(&mut self) -> Option<GameEvent> {
        self.events.pop()
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn robot_precision(&self) -> f32 {
        self.robot_precision
    }

    pub fn stack(&self) -> &[Block] {
        &self.stack
    }

    pub fn overhangs(&self) -> &[Block] {
        &self.overhangs
    }

    pub fn top(&self) -> Option<&Block> {
        self.stack.last()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn scene(&self) -> &R {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut R {
        &mut self.scene
    }

    fn publish(&mut self, event: GameEvent) {
        self.events.publish(event);
    }

    /// Hue of the layer at `index` in the stack.
    fn layer_hue(&self, index: usize) -> f32 {
        self.config.hue_base + index as f32 * self.config.hue_step
    }

    /// Overhang mass, proportional to its footprint relative to the base.
    fn overhang_mass(&self, width: f32, depth: f32) -> f32 {
        let base = self.config.base_size;
        self.config.overhang_mass * (width / base) * (depth / base)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
