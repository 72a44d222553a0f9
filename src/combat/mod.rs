//! Combat domain: attack resolution data, damage flow and plugin wiring.

pub mod attacks;
mod components;
mod events;
mod resources;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use attacks::{AttackDirection, AttackShape, select_attack};
pub use components::{AttackState, Damageable, Health, Hit, HitFlash, TrainingDummy};
pub use events::{DamageEvent, DeathEvent};
pub use resources::{AttackTuning, CombatInput, DummyRespawns, DummyTuning};
pub use spawn::spawn_training_dummy;

use bevy::prelude::*;

use crate::combat::spawn::spawn_training_dummies;
use crate::combat::systems::{
    apply_damage, apply_knockback, process_deaths, read_combat_input, respawn_dummies,
    update_hit_flash,
};
use crate::controller::ControllerSet;
use crate::core::gameplay_active;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AttackTuning>()
            .init_resource::<CombatInput>()
            .init_resource::<DummyTuning>()
            .init_resource::<DummyRespawns>()
            .add_message::<DamageEvent>()
            .add_message::<DeathEvent>()
            .add_systems(Startup, spawn_training_dummies)
            .add_systems(Update, read_combat_input.in_set(ControllerSet::Input))
            .add_systems(
                Update,
                (
                    (apply_damage, apply_knockback),
                    process_deaths,
                    respawn_dummies,
                )
                    .chain()
                    .in_set(ControllerSet::Resolve)
                    .run_if(gameplay_active),
            )
            .add_systems(Update, update_hit_flash);
    }
}
