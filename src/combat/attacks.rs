//! Combat domain: attack shapes and attack direction selection.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::Facing;
use crate::sprites::AnimTrigger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackDirection {
    Side,
    Up,
    Down,
}

/// Axis-aligned hit box hanging off the character.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct AttackShape {
    #[serde(with = "crate::core::config::vec2")]
    pub offset: Vec2,
    #[serde(with = "crate::core::config::vec2")]
    pub size: Vec2,
}

impl AttackShape {
    pub const fn new(offset: Vec2, size: Vec2) -> Self {
        Self { offset, size }
    }

    /// Centre of the box for a character at `origin`. The x offset mirrors
    /// with facing.
    pub fn world_center(&self, origin: Vec2, facing: Facing) -> Vec2 {
        origin + Vec2::new(self.offset.x * facing.sign(), self.offset.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackSelection {
    pub direction: AttackDirection,
    pub trigger: Option<AnimTrigger>,
}

/// Pick the attack from the vertical axis and grounded state.
///
/// Neutral input is always a side attack; airborne it plays the jump-attack
/// animation instead of the grounded swing. Holding down on the ground also
/// swings sideways. The down attack has no animation of its own.
pub fn select_attack(vertical: f32, grounded: bool) -> AttackSelection {
    if vertical == 0.0 || (vertical < 0.0 && grounded) {
        let trigger = if grounded {
            AnimTrigger::Attacking
        } else {
            AnimTrigger::AttackJump
        };
        AttackSelection {
            direction: AttackDirection::Side,
            trigger: Some(trigger),
        }
    } else if vertical > 0.0 {
        AttackSelection {
            direction: AttackDirection::Up,
            trigger: Some(AnimTrigger::AttackUp),
        }
    } else {
        AttackSelection {
            direction: AttackDirection::Down,
            trigger: None,
        }
    }
}

/// Unit vector from attacker to target; zero when they coincide.
pub fn knockback_direction(attacker: Vec2, target: Vec2) -> Vec2 {
    (target - attacker).normalize_or_zero()
}
