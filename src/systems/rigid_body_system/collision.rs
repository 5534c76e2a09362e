use glam::Vec3;

use crate::rigid_body::RigidBody;

/// Boxes must interpenetrate by more than this to count as touching. Cut
/// pieces are spawned face to face and must separate freely.
pub(super) const COLLISION_SKIN: f32 = 1e-3;

/// Spin (rad/s) given to a body that lands past the edge of its support.
const TIP_RATE: f32 = 2.5;

#[derive(Clone, Copy, Debug)]
pub(super) struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn around(center: Vec3, half: Vec3) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x + COLLISION_SKIN < other.max.x
            && other.min.x + COLLISION_SKIN < self.max.x
            && self.min.y + COLLISION_SKIN < other.max.y
            && other.min.y + COLLISION_SKIN < self.max.y
            && self.min.z + COLLISION_SKIN < other.max.z
            && other.min.z + COLLISION_SKIN < self.max.z
    }
}

/// Index of the first body (other than `skip`) that a box of `half` at `pos`
/// would intersect.
pub(super) fn first_hit(bodies: &[RigidBody], skip: usize, half: Vec3, pos: Vec3) -> Option<usize> {
    let probe = Aabb::around(pos, half);
    bodies.iter().enumerate().position(|(idx, other)| {
        idx != skip && probe.overlaps(&Aabb::around(other.pos, other.half_extents()))
    })
}

/// Spin for a body whose centre sits beyond the top face of `support`.
pub(super) fn tipping_spin(center: Vec3, support: &RigidBody) -> Vec3 {
    let s = Aabb::around(support.pos, support.half_extents());
    let mut spin = Vec3::ZERO;

    // Off the +x edge: rotate about -z so the +x side drops.
    if center.x > s.max.x {
        spin.z -= TIP_RATE;
    } else if center.x < s.min.x {
        spin.z += TIP_RATE;
    }

    if center.z > s.max.z {
        spin.x += TIP_RATE;
    } else if center.z < s.min.z {
        spin.x -= TIP_RATE;
    }

    spin
}
