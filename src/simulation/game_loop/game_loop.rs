use crate::core::EngineError;
use crate::render::SceneRenderer;
use crate::rigid_body_system::RigidBodyWorld;

use super::tick_stats::TickStats;
use super::{PerfTimer, StackEngine};

/// Frame driver: update -> physics step -> overhang sync -> render, in that
/// order, once per animation frame.
pub struct GameLoop<W: RigidBodyWorld, R: SceneRenderer> {
    engine: StackEngine<W, R>,
    last_time_ms: Option<f64>,
    paused: bool,
    frame: u64,
    perf_enabled: bool,
    stats: TickStats,
}

impl<W: RigidBodyWorld, R: SceneRenderer> GameLoop<W, R> {
    pub fn new(engine: StackEngine<W, R>) -> Self {
        Self {
            engine,
            last_time_ms: None,
            paused: false,
            frame: 0,
            perf_enabled: false,
            stats: TickStats::default(),
        }
    }

    /// Run one frame stamped `now_ms`. The first frame, and the first after
    /// `resume()`, runs with dt = 0.
    pub fn tick(&mut self, now_ms: f64) -> Result<(), EngineError> {
        if self.paused {
            return Ok(());
        }
        let dt = match self.last_time_ms {
            Some(last) => (now_ms - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last_time_ms = Some(now_ms);
        self.advance(dt)
    }

    /// Run one frame with an explicit elapsed time.
    pub fn advance(&mut self, dt_ms: f32) -> Result<(), EngineError> {
        let perf_on = self.perf_enabled;
        if perf_on {
            self.stats.reset();
            self.stats.dt_ms = dt_ms as f64;
        }

        let t0 = perf_on.then(PerfTimer::start);
        self.engine.update(dt_ms)?;
        if let Some(t0) = t0 {
            self.stats.update_ms = t0.elapsed_ms();
        }

        let t0 = perf_on.then(PerfTimer::start);
        self.engine.step_physics(dt_ms);
        self.engine.sync_overhangs();
        if let Some(t0) = t0 {
            self.stats.physics_ms = t0.elapsed_ms();
        }

        let t0 = perf_on.then(PerfTimer::start);
        self.engine.render();
        if let Some(t0) = t0 {
            self.stats.render_ms = t0.elapsed_ms();
            self.stats.bodies = self.engine.world().body_count() as u32;
            self.stats.meshes = self.engine.scene().mesh_count() as u32;
            self.stats.overhangs = self.engine.overhangs().len() as u32;
        }

        self.frame += 1;
        Ok(())
    }

    /// Stop scheduling work (e.g. the page lost visibility).
    pub fn pause(&mut self) {
        self.paused = true;
        self.last_time_ms = None;
    }

    /// Resume with a fresh time baseline so no time-skip is simulated.
    pub fn resume(&mut self) {
        self.paused = false;
        self.last_time_ms = None;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Enable or disable per-tick timings (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
        if !enabled {
            self.stats.reset();
        }
    }

    pub fn stats(&self) -> TickStats {
        self.stats
    }

    pub fn engine(&self) -> &StackEngine<W, R> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut StackEngine<W, R> {
        &mut self.engine
    }
}
