//! Core domain: config loading, pause state, camera and player ownership.

pub mod config;
mod resources;
mod systems;


pub use config::{ConfigDiagnostics, ControllerConfig};
pub use resources::{ActivePlayer, CameraTuning, GameplayPaused, gameplay_active};

use bevy::prelude::*;

use crate::core::systems::{
    enforce_single_player, follow_player, load_controller_config, release_despawned_player,
    setup_camera, sync_physics_clock, toggle_pause,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameplayPaused>()
            .init_resource::<ActivePlayer>()
            .init_resource::<CameraTuning>()
            .init_resource::<ConfigDiagnostics>()
            .add_systems(PreStartup, load_controller_config)
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (
                    toggle_pause,
                    sync_physics_clock.run_if(resource_changed::<GameplayPaused>),
                )
                    .chain(),
            )
            .add_systems(
                PostUpdate,
                (
                    (release_despawned_player, enforce_single_player).chain(),
                    follow_player,
                )
                    .chain(),
            );
    }
}
