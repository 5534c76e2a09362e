use crate::render::SceneRenderer;
use crate::rigid_body_system::RigidBodyWorld;

use super::StackEngine;

/// Physics -> visual copy for every falling piece. Read-only on the world,
/// so repeated calls without a step are idempotent.
pub(super) fn sync_overhangs<W: RigidBodyWorld, R: SceneRenderer>(engine: &mut StackEngine<W, R>) {
    for block in engine.overhangs.iter_mut() {
        block.sync_from_physics(&engine.world, &mut engine.scene);
    }
}

/// Dispose overhangs that fell well below the top of the stack.
pub(super) fn cull_overhangs<W: RigidBodyWorld, R: SceneRenderer>(engine: &mut StackEngine<W, R>) {
    let top_y = engine.stack.last().map_or(0.0, |b| b.position().y);
    let floor = top_y - engine.config.overhang_cull_depth;

    let mut idx = 0;
    while idx < engine.overhangs.len() {
        if engine.overhangs[idx].position().y < floor {
            let block = engine.overhangs.swap_remove(idx);
            log::debug!("culling overhang at y {}", block.position().y);
            block.dispose(&mut engine.world, &mut engine.scene);
        } else {
            idx += 1;
        }
    }
}
