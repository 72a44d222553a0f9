//! Combat domain: tuning and input resources.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::combat::attacks::{AttackDirection, AttackShape};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AttackTuning {
    /// Minimum seconds between executed attacks.
    pub cooldown: f32,
    pub damage: f32,
    /// Knockback speed given to each target hit.
    pub knockback: f32,
    pub side: AttackShape,
    pub up: AttackShape,
    pub down: AttackShape,
}

impl Default for AttackTuning {
    fn default() -> Self {
        Self {
            cooldown: 0.3,
            damage: 10.0,
            knockback: 300.0,
            side: AttackShape::new(Vec2::new(30.0, 0.0), Vec2::new(40.0, 36.0)),
            up: AttackShape::new(Vec2::new(0.0, 40.0), Vec2::new(36.0, 40.0)),
            down: AttackShape::new(Vec2::new(0.0, -40.0), Vec2::new(36.0, 40.0)),
        }
    }
}

impl AttackTuning {
    pub fn shape(&self, direction: AttackDirection) -> &AttackShape {
        match direction {
            AttackDirection::Side => &self.side,
            AttackDirection::Up => &self.up,
            AttackDirection::Down => &self.down,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct CombatInput {
    pub attack: bool,
}

/// Training dummies placed in the arena.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DummyTuning {
    pub count: u32,
    pub health: f32,
    /// Seconds before a destroyed dummy comes back.
    pub respawn_delay: f32,
    /// Seed for respawn positions.
    pub seed: u64,
    pub spawn_min_x: f32,
    pub spawn_max_x: f32,
    pub spawn_y: f32,
}

impl Default for DummyTuning {
    fn default() -> Self {
        Self {
            count: 3,
            health: 50.0,
            respawn_delay: 2.0,
            seed: 7,
            spawn_min_x: -340.0,
            spawn_max_x: 340.0,
            spawn_y: -150.0,
        }
    }
}

/// Pending dummy respawns and the seeded generator placing them.
#[derive(Resource, Debug)]
pub struct DummyRespawns {
    pub timers: Vec<f32>,
    pub rng: ChaCha8Rng,
}

impl DummyRespawns {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            timers: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Advance all timers and return how many dummies are due.
    pub fn tick(&mut self, dt: f32) -> usize {
        for timer in &mut self.timers {
            *timer -= dt;
        }
        let before = self.timers.len();
        self.timers.retain(|timer| *timer > 0.0);
        before - self.timers.len()
    }
}

impl Default for DummyRespawns {
    fn default() -> Self {
        Self::from_seed(DummyTuning::default().seed)
    }
}
