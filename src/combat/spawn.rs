//! Combat domain: training dummy spawning.

use avian2d::prelude::*;
use bevy::prelude::*;
use rand::Rng;

use crate::combat::components::{Health, HitFlash, TrainingDummy};
use crate::combat::resources::{DummyRespawns, DummyTuning};
use crate::core::ConfigDiagnostics;
use crate::movement::GameLayer;

const DUMMY_SIZE: Vec2 = Vec2::new(28.0, 40.0);
pub(crate) const DUMMY_COLOR: Color = Color::srgb(0.8, 0.3, 0.3);

pub fn spawn_training_dummy(commands: &mut Commands, position: Vec2, health: f32) -> Entity {
    commands
        .spawn((
            (TrainingDummy, Health::new(health), HitFlash::default()),
            Sprite {
                color: DUMMY_COLOR,
                custom_size: Some(DUMMY_SIZE),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            (
                RigidBody::Dynamic,
                Collider::rectangle(DUMMY_SIZE.x, DUMMY_SIZE.y),
                CollisionLayers::new(GameLayer::Enemy, [GameLayer::Ground, GameLayer::Wall]),
                LinearVelocity::default(),
                LinearDamping(5.0), // High damping to quickly decay knockback velocity
                LockedAxes::ROTATION_LOCKED,
                GravityScale(1.0),
            ),
        ))
        .id()
}

pub(crate) fn random_dummy_position(tuning: &DummyTuning, rng: &mut impl Rng) -> Vec2 {
    let x = if tuning.spawn_min_x < tuning.spawn_max_x {
        rng.random_range(tuning.spawn_min_x..tuning.spawn_max_x)
    } else {
        tuning.spawn_min_x
    };
    Vec2::new(x, tuning.spawn_y)
}

pub(crate) fn spawn_training_dummies(
    mut commands: Commands,
    tuning: Res<DummyTuning>,
    diagnostics: Res<ConfigDiagnostics>,
) {
    if !diagnostics.is_valid() {
        error!("Training dummies not spawned: controller config is invalid");
        return;
    }

    let mut respawns = DummyRespawns::from_seed(tuning.seed);

    for _ in 0..tuning.count {
        let position = random_dummy_position(&tuning, &mut respawns.rng);
        spawn_training_dummy(&mut commands, position, tuning.health);
    }

    info!(
        "Spawned {} training dummies (seed {})",
        tuning.count, tuning.seed
    );
    commands.insert_resource(respawns);
}
