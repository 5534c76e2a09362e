/// Vertical follow camera. It only ever rises, at a bounded speed.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    y: f32,
    start_y: f32,
    /// Units per millisecond
    follow_speed: f32,
}

impl Camera {
    pub fn new(start_y: f32, follow_speed: f32) -> Self {
        Self {
            y: start_y,
            start_y,
            follow_speed,
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Rise toward `target_y` by at most `follow_speed * dt_ms`.
    pub fn follow(&mut self, target_y: f32, dt_ms: f32) {
        if self.y < target_y {
            self.y = (self.y + self.follow_speed * dt_ms.max(0.0)).min(target_y);
        }
    }

    pub fn reset(&mut self) {
        self.y = self.start_y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rises_at_bounded_speed_without_overshoot() {
        let mut camera = Camera::new(4.0, 0.01);
        camera.follow(6.0, 100.0);
        assert!((camera.y() - 5.0).abs() < 1e-5);
        camera.follow(6.0, 1000.0);
        assert_eq!(camera.y(), 6.0);
    }

    #[test]
    fn never_moves_down() {
        let mut camera = Camera::new(4.0, 0.01);
        camera.follow(10.0, 200.0);
        let y = camera.y();
        camera.follow(0.0, 200.0);
        assert_eq!(camera.y(), y);
    }

    #[test]
    fn reset_returns_to_start() {
        let mut camera = Camera::new(4.0, 0.01);
        camera.follow(10.0, 200.0);
        camera.reset();
        assert_eq!(camera.y(), 4.0);
    }
}
