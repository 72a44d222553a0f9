//! Controller domain: the per-frame player controller and its schedule.

pub mod frame;
mod world;


pub use frame::{CharacterWorld, ControllerTuning, FrameInput, FrameReport, PlayerController};

use bevy::prelude::*;

use crate::controller::world::drive_player;
use crate::core::gameplay_active;

/// Ordering of the player pipeline within `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    /// Sample devices into input resources.
    Input,
    /// Run the controller for each player.
    Drive,
    /// Apply damage, deaths and respawns produced by the drive.
    Resolve,
    /// Animation and sprite presentation.
    Present,
}

pub struct ControllerPlugin;

impl Plugin for ControllerPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                ControllerSet::Input,
                ControllerSet::Drive,
                ControllerSet::Resolve,
                ControllerSet::Present,
            )
                .chain(),
        )
        .add_systems(
            Update,
            drive_player
                .in_set(ControllerSet::Drive)
                .run_if(gameplay_active),
        );
    }
}
