//! Core domain: setup, config loading, camera follow and player ownership.

use avian2d::prelude::*;
use bevy::prelude::*;
use std::path::Path;

use crate::core::config::{
    CONFIG_PATH, ConfigDiagnostics, ControllerConfig, load_config, validate_config,
};
use crate::core::resources::{ActivePlayer, CameraTuning, GameplayPaused};
use crate::movement::Player;

const PAUSE_SOURCE: &str = "pause_key";

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Read the tuning file and publish each section as a resource.
pub(crate) fn load_controller_config(mut commands: Commands) {
    let config = match load_config(Path::new(CONFIG_PATH)) {
        Ok(config) => {
            info!("Loaded controller config from {}", CONFIG_PATH);
            config
        }
        Err(e) => {
            warn!("{}; using built-in controller defaults", e);
            ControllerConfig::default()
        }
    };

    info!(
        "Jump apex {:.0}, reachable height {:.0} with {} air jump(s)",
        config.movement.single_jump_height(),
        config.movement.max_reachable_height(),
        config.movement.max_air_jumps
    );

    let errors = validate_config(&config);
    for error in &errors {
        error!("Invalid controller config: {}", error);
    }

    commands.insert_resource(Gravity(Vec2::NEG_Y * config.movement.gravity));
    commands.insert_resource(config.movement);
    commands.insert_resource(config.probe);
    commands.insert_resource(config.attack);
    commands.insert_resource(config.camera);
    commands.insert_resource(config.dummies);
    commands.insert_resource(ConfigDiagnostics { errors });
}

/// One frame of camera smoothing toward `target + offset`. Depth is kept.
pub fn follow_step(current: Vec3, target: Vec2, offset: Vec2, follow_speed: f32) -> Vec3 {
    let goal = target + offset;
    current.truncate().lerp(goal, follow_speed).extend(current.z)
}

pub(crate) fn follow_player(
    tuning: Res<CameraTuning>,
    active: Res<ActivePlayer>,
    players: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut cameras: Query<&mut Transform, With<Camera2d>>,
) {
    let Some(player) = active.entity else {
        return;
    };
    let Ok(target) = players.get(player) else {
        return;
    };

    for mut camera in &mut cameras {
        camera.translation = follow_step(
            camera.translation,
            target.translation.truncate(),
            tuning.offset,
            tuning.follow_speed,
        );
    }
}

/// Keep exactly one authoritative player. Newcomers lose.
pub(crate) fn enforce_single_player(
    mut commands: Commands,
    mut active: ResMut<ActivePlayer>,
    added: Query<Entity, Added<Player>>,
    players: Query<(), With<Player>>,
) {
    for entity in &added {
        let current_alive = active
            .entity
            .is_some_and(|current| players.contains(current));

        if active.claim(entity, current_alive) {
            info!("Player {:?} is now authoritative", entity);
        } else {
            warn!(
                "Duplicate player {:?} despawned; {:?} stays authoritative",
                entity, active.entity
            );
            commands.entity(entity).despawn();
        }
    }
}

pub(crate) fn release_despawned_player(
    mut active: ResMut<ActivePlayer>,
    mut removed: RemovedComponents<Player>,
) {
    for entity in removed.read() {
        active.release(entity);
    }
}

pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut paused: ResMut<GameplayPaused>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    if paused.is_paused_by(PAUSE_SOURCE) {
        paused.unpause(PAUSE_SOURCE);
    } else {
        paused.pause(PAUSE_SOURCE);
    }
    info!("Gameplay paused: {}", paused.is_paused());
}

/// Stop the physics clock whenever any pause source is active, so bodies
/// freeze along with the systems gated by `gameplay_active`.
pub(crate) fn sync_physics_clock(
    paused: Res<GameplayPaused>,
    mut physics_time: ResMut<Time<Physics>>,
) {
    if paused.is_paused() == physics_time.is_paused() {
        return;
    }

    if paused.is_paused() {
        physics_time.pause();
    } else {
        physics_time.unpause();
    }
    debug!("Physics clock paused: {}", physics_time.is_paused());
}
