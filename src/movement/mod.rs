//! Movement domain: locomotion state, tuning and plugin wiring.

mod bootstrap;
mod components;
pub mod dash;
pub mod jump;
pub mod motion;
pub mod probe;
mod resources;
pub(crate) mod systems;

#[cfg(test)]
mod tests;

pub use components::{DashEffect, Facing, GameLayer, Ground, Player, Wall};
pub use dash::{DashPhase, DashState, DashTick};
pub use jump::{JumpOutcome, JumpState};
pub use resources::{MovementInput, MovementTuning, ProbeTuning};

use bevy::prelude::*;

use crate::controller::ControllerSet;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{fade_dash_effects, read_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<ProbeTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, spawn_player)
            .add_systems(Update, read_input.in_set(ControllerSet::Input))
            .add_systems(Update, fade_dash_effects);
    }
}
