use glam::Vec3;

use crate::render::SceneRenderer;
use crate::rigid_body_system::RigidBodyWorld;

use super::StackEngine;

pub(super) fn set_autopilot<W: RigidBodyWorld, R: SceneRenderer>(engine: &mut StackEngine<W, R>, enabled: bool) {
    engine.autopilot = enabled;
    engine.ended_ms = 0.0;
}

pub(super) fn set_gravity<W: RigidBodyWorld, R: SceneRenderer>(engine: &mut StackEngine<W, R>, gravity: f32) {
    engine.config.gravity = gravity;
    engine.world.set_gravity(Vec3::new(0.0, gravity, 0.0));
}

pub(super) fn set_robot_precision<W: RigidBodyWorld, R: SceneRenderer>(
    engine: &mut StackEngine<W, R>,
    precision: f32,
) {
    engine.robot_precision = precision;
}
