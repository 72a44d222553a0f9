//! Combat domain: attack timing, hits and the damageable capability.

use bevy::prelude::*;

/// Rate limiter for the player's melee attack.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttackState {
    /// Seconds since the last executed attack.
    pub time_since_last_attack: f32,
}

impl AttackState {
    pub fn tick(&mut self, dt: f32) {
        self.time_since_last_attack += dt;
    }

    /// Consume an attack request. Only an executed attack resets the timer.
    pub fn try_attack(&mut self, requested: bool, cooldown: f32) -> bool {
        if requested && self.time_since_last_attack >= cooldown {
            self.time_since_last_attack = 0.0;
            true
        } else {
            false
        }
    }
}

/// One resolved melee hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub damage: f32,
    /// Unit vector from attacker to target.
    pub direction: Vec2,
    pub knockback: f32,
}

impl Hit {
    pub fn knockback_velocity(&self) -> Vec2 {
        self.direction * self.knockback
    }
}

/// Capability of anything the player's attacks can hurt.
pub trait Damageable {
    /// Take a hit. Returns true when it was lethal.
    fn apply_hit(&mut self, hit: &Hit) -> bool;
}

/// Health component for damageable entities
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percent(&self) -> f32 {
        self.current / self.max
    }
}

impl Damageable for Health {
    fn apply_hit(&mut self, hit: &Hit) -> bool {
        if self.is_dead() {
            return false;
        }
        self.take_damage(hit.damage);
        self.is_dead()
    }
}

/// Stationary target for practising attacks.
#[derive(Component, Debug)]
pub struct TrainingDummy;

/// Brief tint after being hit.
#[derive(Component, Debug, Default)]
pub struct HitFlash {
    pub timer: f32,
}
