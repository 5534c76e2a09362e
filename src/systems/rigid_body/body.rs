use glam::{Quat, Vec3};

/// Opaque handle to a body owned by a `RigidBodyWorld`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub u32);

/// Live pose of a body, read back every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyTransform {
    pub position: Vec3,
    pub orientation: Quat,
}

/// Axis-aligned box collision shape centred on the body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxShape {
    pub half_extents: Vec3,
}

/// Rigid Body - moves as a single unit
pub struct RigidBody {
    // === Physics State ===
    /// World position (center of mass)
    pub pos: Vec3,
    /// Velocity (units per second)
    pub velocity: Vec3,
    pub orientation: Quat,
    /// Angular velocity (radians per second, scaled axis)
    pub angular_vel: Vec3,
    /// Zero means kinematic
    pub mass: f32,
    /// Unique ID for this body
    pub id: u32,

    // === Shape Definition ===
    pub shapes: Vec<BoxShape>,

    // === Material properties ===
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
}

impl RigidBody {
    /// Create a box body with a single shape
    pub fn new_box(pos: Vec3, half_extents: Vec3, mass: f32, id: u32) -> Self {
        Self {
            pos,
            velocity: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            angular_vel: Vec3::ZERO,
            mass: mass.max(0.0),
            id,
            shapes: vec![BoxShape { half_extents }],
            restitution: 0.1,
        }
    }

    #[inline]
    pub fn is_dynamic(&self) -> bool {
        self.mass > 0.0
    }

    /// Half extents of the box enclosing every attached shape
    pub fn half_extents(&self) -> Vec3 {
        self.shapes
            .iter()
            .fold(Vec3::ZERO, |acc, s| acc.max(s.half_extents))
    }

    pub fn transform(&self) -> BodyTransform {
        BodyTransform {
            position: self.pos,
            orientation: self.orientation,
        }
    }

    /// Apply impulse at center of mass. Kinematic bodies ignore it.
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        if self.is_dynamic() {
            self.velocity += impulse / self.mass;
        }
    }

    /// Set restitution (bounciness)
    pub fn set_restitution(&mut self, r: f32) {
        self.restitution = r.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_mass_is_kinematic() {
        let body = RigidBody::new_box(Vec3::ZERO, Vec3::splat(0.5), 0.0, 1);
        assert!(!body.is_dynamic());
        let body = RigidBody::new_box(Vec3::ZERO, Vec3::splat(0.5), 2.0, 1);
        assert!(body.is_dynamic());
    }

    #[test]
    fn impulse_scales_with_inverse_mass_and_skips_kinematic() {
        let mut heavy = RigidBody::new_box(Vec3::ZERO, Vec3::splat(0.5), 4.0, 1);
        heavy.apply_impulse(Vec3::new(8.0, 0.0, 0.0));
        assert_eq!(heavy.velocity, Vec3::new(2.0, 0.0, 0.0));

        let mut fixed = RigidBody::new_box(Vec3::ZERO, Vec3::splat(0.5), 0.0, 2);
        fixed.apply_impulse(Vec3::new(8.0, 0.0, 0.0));
        assert_eq!(fixed.velocity, Vec3::ZERO);
    }

    #[test]
    fn half_extents_cover_all_shapes() {
        let mut body = RigidBody::new_box(Vec3::ZERO, Vec3::new(1.0, 0.5, 0.25), 1.0, 1);
        body.shapes.push(BoxShape { half_extents: Vec3::new(0.5, 2.0, 0.25) });
        assert_eq!(body.half_extents(), Vec3::new(1.0, 2.0, 0.25));
    }
}
