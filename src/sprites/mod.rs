//! Sprites module: animation parameters, state machine and sprite presentation.

pub mod animation;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::*;

use crate::controller::ControllerSet;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                animation_state_machine,
                update_animation_frames,
                apply_sprite_state,
            )
                .chain()
                .in_set(ControllerSet::Present),
        );
    }
}
