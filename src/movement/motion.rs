//! Horizontal walking.

use bevy::prelude::*;

/// Set horizontal velocity from the axis; vertical velocity is left alone.
pub fn walk(velocity: &mut Vec2, axis_x: f32, walk_speed: f32) {
    velocity.x = walk_speed * axis_x;
}

pub fn is_walking(velocity: Vec2, grounded: bool) -> bool {
    velocity.x != 0.0 && grounded
}
