//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Anything the player's attacks can hit
    Enemy,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 for right, -1 for left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    /// Facing after horizontal input `axis_x`. Neutral input keeps the
    /// current facing.
    pub fn turned_by(self, axis_x: f32) -> Self {
        if axis_x < 0.0 {
            Facing::Left
        } else if axis_x > 0.0 {
            Facing::Right
        } else {
            self
        }
    }
}

/// Short-lived sprite left behind by a grounded dash.
#[derive(Component, Debug)]
pub struct DashEffect {
    pub timer: f32,
    pub lifetime: f32,
}
