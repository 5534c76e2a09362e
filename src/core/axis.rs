use glam::Vec3;

/// Horizontal axis a layer slides along (and may later be cut along).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Z,
}

impl Axis {
    /// The other horizontal axis. Layers alternate strictly X, Z, X, ...
    #[inline]
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Z,
            Axis::Z => Axis::X,
        }
    }

    /// Read this axis' component of a vector.
    #[inline]
    pub fn get(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Z => v.z,
        }
    }

    /// Write this axis' component of a vector.
    #[inline]
    pub fn set(self, v: &mut Vec3, value: f32) {
        match self {
            Axis::X => v.x = value,
            Axis::Z => v.z = value,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Z => "z",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_flips_between_x_and_z() {
        assert_eq!(Axis::X.other(), Axis::Z);
        assert_eq!(Axis::Z.other(), Axis::X);
        assert_eq!(Axis::X.other().other(), Axis::X);
    }

    #[test]
    fn get_and_set_touch_only_their_component() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        Axis::Z.set(&mut v, 7.5);
        assert_eq!(v, Vec3::new(1.0, 2.0, 7.5));
        assert_eq!(Axis::X.get(v), 1.0);
        assert_eq!(Axis::Z.get(v), 7.5);
    }
}
