//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub walk_speed: f32,
    pub jump_force: f32,
    /// World gravity magnitude; the body's gravity scale multiplies it.
    pub gravity: f32,
    /// Frames an early jump press stays buffered.
    pub jump_buffer_frames: i32,
    /// Seconds after leaving a ledge during which a ground jump is allowed.
    pub coyote_time: f32,
    /// Maximum air jumps (0 = no double jump, 1 = double jump, 2 = triple, etc.)
    pub max_air_jumps: u8,
    pub dash_speed: f32,
    pub dash_time: f32,
    pub dash_cooldown: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walk_speed: 320.0,
            jump_force: 680.0,
            gravity: 1800.0,
            jump_buffer_frames: 8,
            coyote_time: 0.12,
            max_air_jumps: 1,
            dash_speed: 900.0,
            dash_time: 0.16,
            dash_cooldown: 0.35,
        }
    }
}

impl MovementTuning {
    /// Apex height of a single jump: h = v² / (2g)
    pub fn single_jump_height(&self) -> f32 {
        self.jump_force * self.jump_force / (2.0 * self.gravity)
    }

    /// Upper bound on height gained with every air jump spent at the apex.
    pub fn max_reachable_height(&self) -> f32 {
        self.single_jump_height() * (1.0 + self.max_air_jumps as f32)
    }
}

/// Geometry of the three downward ground rays.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeTuning {
    /// Ray anchor relative to the character's origin (usually its feet).
    #[serde(with = "crate::core::config::vec2")]
    pub anchor: Vec2,
    /// Horizontal distance of the outer rays from the anchor.
    pub offset_x: f32,
    /// Maximum ray length.
    pub length: f32,
}

impl Default for ProbeTuning {
    fn default() -> Self {
        Self {
            anchor: Vec2::new(0.0, -22.0),
            offset_x: 10.0,
            length: 6.0,
        }
    }
}

/// Directional input and button edges sampled once per frame.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub dash_just_pressed: bool,
}
