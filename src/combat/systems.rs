//! Combat domain: combat systems for input, damage, knockback and cleanup.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::{Damageable, Health, HitFlash, TrainingDummy};
use crate::combat::events::{DamageEvent, DeathEvent};
use crate::combat::resources::{CombatInput, DummyRespawns, DummyTuning};
use crate::combat::spawn::{DUMMY_COLOR, random_dummy_position, spawn_training_dummy};

const HIT_FLASH_DURATION: f32 = 0.12;

pub(crate) fn read_combat_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut input: ResMut<CombatInput>,
) {
    input.attack = mouse.just_pressed(MouseButton::Left)
        || keyboard.just_pressed(KeyCode::KeyZ)
        || keyboard.just_pressed(KeyCode::KeyU);
}

pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    mut query: Query<(&mut Health, Option<&mut HitFlash>)>,
) {
    for event in damage_events.read() {
        let Ok((mut health, flash)) = query.get_mut(event.target) else {
            continue;
        };

        let lethal = health.apply_hit(&event.hit);
        debug!(
            "{:?} hit {:?} for {:.1}: {:.0}% left",
            event.source,
            event.target,
            event.hit.damage,
            health.percent() * 100.0
        );

        if let Some(mut flash) = flash {
            flash.timer = HIT_FLASH_DURATION;
        }

        if lethal {
            death_events.write(DeathEvent {
                entity: event.target,
            });
        }
    }
}

/// Maximum velocity an entity can have after knockback
const MAX_KNOCKBACK_VELOCITY: f32 = 800.0;

pub(crate) fn apply_knockback(
    mut damage_events: MessageReader<DamageEvent>,
    mut query: Query<&mut LinearVelocity>,
) {
    for event in damage_events.read() {
        if let Ok(mut velocity) = query.get_mut(event.target) {
            velocity.0 += event.hit.knockback_velocity();
            velocity.0 = velocity.0.clamp_length_max(MAX_KNOCKBACK_VELOCITY);
        }
    }
}

pub(crate) fn update_hit_flash(
    time: Res<Time>,
    mut query: Query<(&mut HitFlash, &mut Sprite), With<TrainingDummy>>,
) {
    let dt = time.delta_secs();
    for (mut flash, mut sprite) in &mut query {
        if flash.timer > 0.0 {
            flash.timer -= dt;
            sprite.color = if flash.timer > 0.0 {
                Color::srgb(1.0, 0.7, 0.7)
            } else {
                DUMMY_COLOR
            };
        }
    }
}

pub(crate) fn process_deaths(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    tuning: Res<DummyTuning>,
    mut respawns: ResMut<DummyRespawns>,
    dummies: Query<(), With<TrainingDummy>>,
) {
    for event in death_events.read() {
        if dummies.contains(event.entity) {
            respawns.timers.push(tuning.respawn_delay);
            info!("Training dummy {:?} destroyed", event.entity);
        }
        commands.entity(event.entity).despawn();
    }
}

pub(crate) fn respawn_dummies(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<DummyTuning>,
    mut respawns: ResMut<DummyRespawns>,
) {
    let due = respawns.tick(time.delta_secs());
    for _ in 0..due {
        let position = random_dummy_position(&tuning, &mut respawns.rng);
        let entity = spawn_training_dummy(&mut commands, position, tuning.health);
        debug!("Respawned training dummy {:?} at {:?}", entity, position);
    }
}
