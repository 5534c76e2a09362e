use serde::{Deserialize, Serialize};

use crate::core::EngineError;

/// Every tunable of the game. Loaded from JSON (camelCase keys); any key left
/// out keeps its default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Height of every layer (world units).
    pub box_height: f32,
    /// Width and depth of the base layer.
    pub base_size: f32,
    /// Slide speed of the active layer (units per millisecond).
    pub speed: f32,
    /// A sliding layer past this coordinate magnitude is a miss.
    pub move_bound: f32,
    /// Where a new layer starts on its sliding axis.
    pub spawn_offset: f32,
    /// Mass of a full base-sized overhang; smaller pieces scale by area.
    pub overhang_mass: f32,
    /// Vertical gravity (units per second squared).
    pub gravity: f32,
    pub max_fall_speed: f32,
    pub restitution: f32,
    pub hue_base: f32,
    pub hue_step: f32,
    pub camera_base_height: f32,
    /// Camera rise speed (units per millisecond).
    pub camera_follow_speed: f32,
    /// Autopilot stops within [-spread/2, spread/2] of a perfect placement.
    pub robot_precision_spread: f32,
    pub autopilot_restart_delay_ms: f32,
    /// Overhangs this far below the top layer are disposed.
    pub overhang_cull_depth: f32,
    pub seed: u32,
    pub start_in_autopilot: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            box_height: 1.0,
            base_size: 3.0,
            speed: 0.008,
            move_bound: 10.0,
            spawn_offset: -10.0,
            overhang_mass: 5.0,
            gravity: -10.0,
            max_fall_speed: 40.0,
            restitution: 0.1,
            hue_base: 30.0,
            hue_step: 4.0,
            camera_base_height: 4.0,
            camera_follow_speed: 0.008,
            robot_precision_spread: 1.0,
            autopilot_restart_delay_ms: 1500.0,
            overhang_cull_depth: 30.0,
            seed: 12345,
            start_in_autopilot: true,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let positive = [
            ("boxHeight", self.box_height),
            ("baseSize", self.base_size),
            ("speed", self.speed),
            ("moveBound", self.move_bound),
            ("overhangMass", self.overhang_mass),
            ("maxFallSpeed", self.max_fall_speed),
            ("cameraFollowSpeed", self.camera_follow_speed),
            ("overhangCullDepth", self.overhang_cull_depth),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(EngineError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        let finite = [
            ("spawnOffset", self.spawn_offset),
            ("gravity", self.gravity),
            ("hueBase", self.hue_base),
            ("hueStep", self.hue_step),
            ("cameraBaseHeight", self.camera_base_height),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(EngineError::InvalidConfig(format!("{name} must be finite")));
            }
        }

        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(EngineError::InvalidConfig(format!(
                "restitution must be within [0, 1], got {}",
                self.restitution
            )));
        }
        if !self.robot_precision_spread.is_finite() || self.robot_precision_spread < 0.0 {
            return Err(EngineError::InvalidConfig(
                "robotPrecisionSpread must be >= 0".to_string(),
            ));
        }
        if !self.autopilot_restart_delay_ms.is_finite() || self.autopilot_restart_delay_ms < 0.0 {
            return Err(EngineError::InvalidConfig(
                "autopilotRestartDelayMs must be >= 0".to_string(),
            ));
        }
        // Spawning past the bound is a miss on the first tick.
        if self.spawn_offset.abs() > self.move_bound {
            return Err(EngineError::InvalidConfig(format!(
                "spawnOffset {} lies outside moveBound {}",
                self.spawn_offset, self.move_bound
            )));
        }
        Ok(())
    }
}
