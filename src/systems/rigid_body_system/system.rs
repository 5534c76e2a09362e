use glam::{Quat, Vec3};

use crate::core::EngineError;
use crate::rigid_body::{BodyHandle, BodyTransform, BoxShape, RigidBody};

use super::collision::{first_hit, tipping_spin};
use super::world::RigidBodyWorld;

/// Fraction of angular velocity lost per second.
const ANGULAR_DAMPING: f32 = 0.6;

/// Manages all rigid bodies in the game
pub struct RigidBodySystem {
    bodies: Vec<RigidBody>,
    next_id: u32,
    gravity: Vec3,
    max_speed: f32,
    restitution: f32,
}

impl RigidBodySystem {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
            gravity: Vec3::new(0.0, -10.0, 0.0),
            max_speed: 40.0,
            restitution: 0.1,
        }
    }

    /// Clamp on body speed; keeps per-axis resolution from tunneling.
    pub fn set_max_speed(&mut self, max_speed: f32) {
        self.max_speed = max_speed.max(0.0);
    }

    /// Restitution given to bodies created from now on.
    pub fn set_restitution(&mut self, restitution: f32) {
        self.restitution = restitution.clamp(0.0, 1.0);
    }

    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.bodies.iter().find(|b| b.id == handle.0)
    }

    fn body_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBody, EngineError> {
        self.bodies
            .iter_mut()
            .find(|b| b.id == handle.0)
            .ok_or(EngineError::UnknownBody(handle.0))
    }

    /// Integrate one dynamic body and resolve its motion axis by axis.
    fn integrate(&mut self, idx: usize, dt: f32) {
        let (pos, mut vel, half, mass, restitution) = {
            let b = &self.bodies[idx];
            (b.pos, b.velocity, b.half_extents(), b.mass, b.restitution)
        };

        vel += self.gravity * dt;
        vel = vel.clamp_length_max(self.max_speed);

        let desired = pos + vel * dt;
        let mut next = pos;
        let mut spin = Vec3::ZERO;

        // Resolve per-axis (cheap + deterministic). Y first so landing wins
        // over sideways grazing.
        for axis in [1usize, 0, 2] {
            let mut trial = next;
            trial[axis] = desired[axis];
            match first_hit(&self.bodies, idx, half, trial) {
                Some(hit) => {
                    if axis == 1 && vel.y < 0.0 {
                        spin += tipping_spin(next, &self.bodies[hit]);
                    }
                    if self.bodies[hit].is_dynamic() {
                        vel[axis] = self.exchange(hit, axis, next[axis], mass, vel[axis], restitution);
                    } else {
                        vel[axis] = -vel[axis] * restitution;
                    }
                }
                None => next[axis] = trial[axis],
            }
        }

        let body = &mut self.bodies[idx];
        body.pos = next;
        body.velocity = vel;
        body.angular_vel += spin;

        let turn = body.angular_vel * dt;
        if turn.length_squared() > 0.0 {
            body.orientation = (Quat::from_scaled_axis(turn) * body.orientation).normalize();
        }
        body.angular_vel *= (1.0 - ANGULAR_DAMPING * dt).max(0.0);
    }

    /// Momentum exchange along `axis` between a moving body (at `coord`) and
    /// the dynamic body it ran into. Pushes `other` through an impulse and
    /// returns the mover's new velocity component.
    fn exchange(&mut self, other: usize, axis: usize, coord: f32, mass: f32, v1: f32, restitution: f32) -> f32 {
        let (m2, v2, toward) = {
            let b = &self.bodies[other];
            (b.mass, b.velocity[axis], (b.pos[axis] - coord).signum())
        };

        // Already separating: nothing to exchange.
        if (v1 - v2) * toward <= 0.0 {
            return v1;
        }

        let total = mass + m2;
        let momentum = mass * v1 + m2 * v2;
        let after_self = (momentum + m2 * restitution * (v2 - v1)) / total;
        let after_other = (momentum + mass * restitution * (v1 - v2)) / total;

        let mut impulse = Vec3::ZERO;
        impulse[axis] = m2 * (after_other - v2);
        self.bodies[other].apply_impulse(impulse);
        after_self
    }
}

impl Default for RigidBodySystem {
    fn default() -> Self {
        Self::new()
    }
}

fn valid_half_extents(half: Vec3) -> Result<(), EngineError> {
    if half.is_finite() && half.min_element() > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidShape(half.to_array()))
    }
}

impl RigidBodyWorld for RigidBodySystem {
    fn create_body(
        &mut self,
        half_extents: Vec3,
        mass: f32,
        position: Vec3,
    ) -> Result<BodyHandle, EngineError> {
        valid_half_extents(half_extents)?;

        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);

        let mut body = RigidBody::new_box(position, half_extents, mass, id);
        body.set_restitution(self.restitution);
        self.bodies.push(body);
        Ok(BodyHandle(id))
    }

    fn remove_body(&mut self, handle: BodyHandle) -> bool {
        if let Some(idx) = self.bodies.iter().position(|b| b.id == handle.0) {
            self.bodies.swap_remove(idx);
            return true;
        }
        false
    }

    fn replace_shape(&mut self, handle: BodyHandle, half_extents: Vec3) -> Result<(), EngineError> {
        valid_half_extents(half_extents)?;
        let body = self.body_mut(handle)?;
        body.shapes.clear();
        body.shapes.push(BoxShape { half_extents });
        Ok(())
    }

    fn set_position(&mut self, handle: BodyHandle, position: Vec3) -> Result<(), EngineError> {
        let body = self.body_mut(handle)?;
        body.pos = position;
        Ok(())
    }

    fn set_mass(&mut self, handle: BodyHandle, mass: f32) -> Result<(), EngineError> {
        let body = self.body_mut(handle)?;
        if !body.is_dynamic() {
            // Kinematic bodies carry no momentum into the dynamic regime.
            body.velocity = Vec3::ZERO;
            body.angular_vel = Vec3::ZERO;
        }
        body.mass = mass.max(0.0);
        Ok(())
    }

    fn set_gravity(&mut self, gravity: Vec3) {
        self.gravity = gravity;
    }

    /// Main update loop. Kinematic bodies are left untouched.
    fn step(&mut self, dt_seconds: f32) {
        if dt_seconds <= 0.0 {
            return;
        }
        for idx in 0..self.bodies.len() {
            if self.bodies[idx].is_dynamic() {
                self.integrate(idx, dt_seconds);
            }
        }
    }

    fn transform(&self, handle: BodyHandle) -> Option<BodyTransform> {
        self.body(handle).map(RigidBody::transform)
    }

    fn body_count(&self) -> usize {
        self.bodies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dynamic_bodies_fall_and_kinematic_ones_stay() {
        let mut world = RigidBodySystem::new();
        let fixed = world
            .create_body(Vec3::splat(0.5), 0.0, Vec3::new(10.0, 0.0, 0.0))
            .unwrap();
        let falling = world.create_body(Vec3::splat(0.5), 1.0, Vec3::ZERO).unwrap();

        for _ in 0..10 {
            world.step(1.0 / 60.0);
        }

        assert_eq!(world.transform(fixed).unwrap().position, Vec3::new(10.0, 0.0, 0.0));
        assert!(world.transform(falling).unwrap().position.y < 0.0);
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut world = RigidBodySystem::new();
        let falling = world.create_body(Vec3::splat(0.5), 1.0, Vec3::ZERO).unwrap();
        world.step(0.0);
        assert_eq!(world.transform(falling).unwrap().position, Vec3::ZERO);
    }

    #[test]
    fn falling_body_lands_on_a_kinematic_body() {
        let mut world = RigidBodySystem::new();
        world
            .create_body(Vec3::new(1.5, 0.5, 1.5), 0.0, Vec3::ZERO)
            .unwrap();
        let falling = world
            .create_body(Vec3::splat(0.5), 1.0, Vec3::new(0.0, 3.0, 0.0))
            .unwrap();

        for _ in 0..600 {
            world.step(1.0 / 60.0);
        }

        // Top face of the support is y = 0.5, so the centre rests above 1.0 - skin.
        let y = world.transform(falling).unwrap().position.y;
        assert!(y > 0.99 && y < 1.1, "resting height was {y}");
    }

    #[test]
    fn replace_shape_leaves_exactly_one_box() {
        let mut world = RigidBodySystem::new();
        let handle = world.create_body(Vec3::splat(1.5), 0.0, Vec3::ZERO).unwrap();
        world
            .replace_shape(handle, Vec3::new(1.0, 0.5, 1.5))
            .unwrap();

        let body = world.body(handle).unwrap();
        assert_eq!(body.shapes.len(), 1);
        assert_eq!(body.half_extents(), Vec3::new(1.0, 0.5, 1.5));
    }

    #[test]
    fn invalid_shapes_are_rejected() {
        let mut world = RigidBodySystem::new();
        let err = world
            .create_body(Vec3::new(0.0, 0.5, 1.0), 1.0, Vec3::ZERO)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidShape(_)));
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn unknown_handles_report_errors() {
        let mut world = RigidBodySystem::new();
        assert!(!world.remove_body(BodyHandle(42)));
        assert!(matches!(
            world.set_position(BodyHandle(42), Vec3::ZERO),
            Err(EngineError::UnknownBody(42))
        ));
        assert!(world.transform(BodyHandle(42)).is_none());
    }

    #[test]
    fn set_mass_turns_a_kinematic_body_dynamic() {
        let mut world = RigidBodySystem::new();
        let handle = world.create_body(Vec3::splat(0.5), 0.0, Vec3::ZERO).unwrap();
        world.step(0.1);
        assert_eq!(world.transform(handle).unwrap().position, Vec3::ZERO);

        world.set_mass(handle, 2.0).unwrap();
        world.step(0.1);
        assert!(world.transform(handle).unwrap().position.y < 0.0);
    }

    /// Drop a box moving at 1 u/s onto a free-floating box of `lower_mass`
    /// and return the lower box's velocity after the hit.
    fn hit_from_above(upper_mass: f32, lower_mass: f32) -> Vec3 {
        let mut world = RigidBodySystem::new();
        world.set_gravity(Vec3::ZERO);
        let lower = world.create_body(Vec3::splat(0.5), lower_mass, Vec3::ZERO).unwrap();
        let upper = world
            .create_body(Vec3::splat(0.5), upper_mass, Vec3::new(0.0, 1.05, 0.0))
            .unwrap();
        world.body_mut(upper).unwrap().velocity = Vec3::new(0.0, -1.0, 0.0);

        world.step(0.1);
        world.body(lower).unwrap().velocity
    }

    #[test]
    fn mass_decides_how_hard_a_dynamic_body_is_pushed() {
        let by_light = hit_from_above(0.01, 1000.0);
        let by_heavy = hit_from_above(1000.0, 0.01);

        assert!(by_light.y > -0.01, "light hit moved it at {by_light}");
        // Heavy body carries through: (1 + restitution) times its speed.
        assert!(by_heavy.y < -1.0, "heavy hit moved it at {by_heavy}");
    }

    #[test]
    fn momentum_is_conserved_in_a_dynamic_hit() {
        let mut world = RigidBodySystem::new();
        world.set_gravity(Vec3::ZERO);
        let lower = world.create_body(Vec3::splat(0.5), 3.0, Vec3::ZERO).unwrap();
        let upper = world
            .create_body(Vec3::splat(0.5), 1.0, Vec3::new(0.0, 1.05, 0.0))
            .unwrap();
        world.body_mut(upper).unwrap().velocity = Vec3::new(0.0, -2.0, 0.0);

        world.step(0.1);
        let momentum = 3.0 * world.body(lower).unwrap().velocity.y
            + 1.0 * world.body(upper).unwrap().velocity.y;
        assert!((momentum + 2.0).abs() < 1e-5, "momentum {momentum}");
    }
}
