//! Arena domain: static test level with ground, walls and platforms.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_test_arena);
    }
}

fn spawn_block(
    commands: &mut Commands,
    position: Vec2,
    size: Vec2,
    color: Color,
    layers: CollisionLayers,
) -> Entity {
    commands
        .spawn((
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            layers,
        ))
        .id()
}

pub(crate) fn spawn_test_arena(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player, GameLayer::Enemy]);

    let grounds = [
        // Floor
        (Vec2::new(0.0, -200.0), Vec2::new(800.0, 40.0), ground_color),
        // Low left ledge, for walking off into coyote time
        (Vec2::new(-250.0, -50.0), Vec2::new(150.0, 20.0), platform_color),
        // Right ledge, one jump up
        (Vec2::new(250.0, 50.0), Vec2::new(150.0, 20.0), platform_color),
        // Top platform, needs an air jump
        (Vec2::new(0.0, 150.0), Vec2::new(120.0, 20.0), platform_color),
    ];
    for (position, size, color) in grounds {
        let entity = spawn_block(&mut commands, position, size, color, ground_layers);
        commands.entity(entity).insert(Ground);
    }

    let walls = [
        (Vec2::new(-420.0, 50.0), Vec2::new(40.0, 500.0)),
        (Vec2::new(420.0, 50.0), Vec2::new(40.0, 500.0)),
    ];
    for (position, size) in walls {
        let entity = spawn_block(&mut commands, position, size, wall_color, wall_layers);
        commands.entity(entity).insert(Wall);
    }

    info!(
        "Spawned test arena: {} ground pieces, {} walls",
        grounds.len(),
        walls.len()
    );
}
