use crate::core::{Axis, EngineError};
use crate::domain::events::GameEvent;
use crate::render::SceneRenderer;
use crate::rigid_body_system::RigidBodyWorld;

use super::block::{Block, BlockMode, BlockSpec};
use super::miss::miss_block;
use super::{Phase, Placement, StackEngine};

/// Geometry of a surviving placement along the cut axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cut {
    /// Signed offset of the active layer from the one below.
    pub delta: f32,
    /// Extent kept on the stack.
    pub overlap: f32,
    /// Extent that falls off (may be zero for a perfect drop).
    pub overhang: f32,
    /// New centre of the kept part.
    pub kept_coord: f32,
    /// Centre of the falling part, flush against the kept part.
    pub overhang_coord: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CutPlan {
    Miss { delta: f32, overlap: f32 },
    Cut(Cut),
}

/// What a successful placement did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CutReport {
    pub axis: Axis,
    /// Stack index of the layer that was cut.
    pub layer: usize,
    pub cut: Cut,
}

/// Split a layer of `size` at `top_coord` against the layer below at
/// `prev_coord`. Zero overlap is a miss.
pub fn plan_cut(size: f32, top_coord: f32, prev_coord: f32) -> CutPlan {
    let delta = top_coord - prev_coord;
    let overhang = delta.abs();
    let overlap = size - overhang;

    if overlap <= 0.0 {
        return CutPlan::Miss { delta, overlap };
    }

    let kept_coord = top_coord - delta / 2.0;
    let overhang_coord = kept_coord + delta.signum() * (overlap / 2.0 + overhang / 2.0);
    CutPlan::Cut(Cut {
        delta,
        overlap,
        overhang,
        kept_coord,
        overhang_coord,
    })
}

pub(super) fn place_block<W: RigidBodyWorld, R: SceneRenderer>(
    engine: &mut StackEngine<W, R>,
) -> Result<Placement, EngineError> {
    // A first-layer miss leaves only the base; taps stay harmless.
    if engine.phase == Phase::Ended {
        return Ok(Placement::Ignored);
    }
    let len = engine.stack.len();
    if len < 2 {
        return Err(EngineError::NotInitialized);
    }

    let top = &engine.stack[len - 1];
    let prev = &engine.stack[len - 2];
    let axis = top.axis().ok_or(EngineError::NotInitialized)?;

    let cut = match plan_cut(top.extent(axis), top.coord(axis), prev.coord(axis)) {
        CutPlan::Miss { delta, overlap } => {
            log::debug!("miss on layer {}: delta {delta}, overlap {overlap}", len - 1);
            miss_block(engine)?;
            return Ok(Placement::Missed);
        }
        CutPlan::Cut(cut) => cut,
    };

    let top = &mut engine.stack[len - 1];
    top.cut(axis, &cut, &mut engine.world, &mut engine.scene)?;
    top.settle();
    let kept = top.position();
    let (width, depth, height, hue) = (top.width(), top.depth(), engine.config.box_height, top.hue());

    // A perfect drop leaves nothing to fall.
    if cut.overhang > 0.0 {
        let mut position = kept;
        axis.set(&mut position, cut.overhang_coord);
        let (o_width, o_depth) = match axis {
            Axis::X => (cut.overhang, depth),
            Axis::Z => (width, cut.overhang),
        };
        let overhang = Block::spawn(
            BlockSpec {
                position,
                width: o_width,
                depth: o_depth,
                height,
                axis: Some(axis),
                mode: BlockMode::Falling,
                mass: engine.overhang_mass(o_width, o_depth),
                hue,
            },
            &mut engine.world,
            &mut engine.scene,
        )?;
        engine.overhangs.push(overhang);
    }

    // Next layer: same footprint, slides in on the other axis from the
    // spawn edge, aligned with the kept part on this axis.
    let next_axis = axis.other();
    let mut position = kept;
    position.y = height * len as f32;
    next_axis.set(&mut position, engine.config.spawn_offset);
    let next = Block::spawn(
        BlockSpec {
            position,
            width,
            depth,
            height,
            axis: Some(next_axis),
            mode: BlockMode::Moving,
            mass: 0.0,
            hue: engine.layer_hue(len),
        },
        &mut engine.world,
        &mut engine.scene,
    )?;
    engine.stack.push(next);

    engine.score = (engine.stack.len() - 2) as u32;
    log::debug!(
        "placed layer {} on {}: overlap {}, overhang {}",
        len - 1,
        axis.as_str(),
        cut.overlap,
        cut.overhang
    );
    engine.publish(GameEvent::BlockPlaced {
        layer: (len - 1) as u32,
        overlap: cut.overlap,
        overhang: cut.overhang,
    });
    engine.publish(GameEvent::ScoreChanged { score: engine.score });

    Ok(Placement::Placed(CutReport {
        axis,
        layer: len - 1,
        cut,
    }))
}
