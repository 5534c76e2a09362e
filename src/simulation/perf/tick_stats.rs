use wasm_bindgen::prelude::*;

/// Timing of the last tick (zeros when perf metrics are disabled).
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default)]
pub struct TickStats {
    pub(super) dt_ms: f64,
    pub(super) update_ms: f64,
    pub(super) physics_ms: f64,
    pub(super) render_ms: f64,
    pub(super) bodies: u32,
    pub(super) meshes: u32,
    pub(super) overhangs: u32,
}

#[wasm_bindgen]
impl TickStats {
    #[wasm_bindgen(getter)]
    pub fn dt_ms(&self) -> f64 { self.dt_ms }
    #[wasm_bindgen(getter)]
    pub fn update_ms(&self) -> f64 { self.update_ms }
    #[wasm_bindgen(getter)]
    pub fn physics_ms(&self) -> f64 { self.physics_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn bodies(&self) -> u32 { self.bodies }
    #[wasm_bindgen(getter)]
    pub fn meshes(&self) -> u32 { self.meshes }
    #[wasm_bindgen(getter)]
    pub fn overhangs(&self) -> u32 { self.overhangs }

    /// Sum of the timed phases
    pub fn tick_ms(&self) -> f64 {
        self.update_ms + self.physics_ms + self.render_ms
    }
}

impl TickStats {
    pub(crate) fn reset(&mut self) {
        *self = TickStats::default();
    }
}
