//! Movement domain: player spawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::PlayerController;
use crate::core::ConfigDiagnostics;
use crate::movement::{GameLayer, Player};
use crate::sprites::{AnimationController, Animator};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
const PLAYER_GRAVITY_SCALE: f32 = 1.0;

/// Spawn the player unless the config failed validation.
pub(crate) fn spawn_player(
    mut commands: Commands,
    diagnostics: Res<ConfigDiagnostics>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !diagnostics.is_valid() {
        error!(
            "Player setup aborted: controller config has {} error(s)",
            diagnostics.errors.len()
        );
        return;
    }

    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let gravity = GravityScale(PLAYER_GRAVITY_SCALE);

    commands.spawn((
        // Identity & control
        (
            Player,
            PlayerController::new(gravity.0),
            Animator::default(),
            AnimationController::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, -150.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            gravity,
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));

    info!("Spawned player with gravity scale {}", PLAYER_GRAVITY_SCALE);
}
