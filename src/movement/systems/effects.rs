//! Movement domain: dash effect lifetime.

use bevy::prelude::*;

use crate::movement::DashEffect;

pub(crate) const DASH_EFFECT_LIFETIME: f32 = 0.3;

pub(crate) fn spawn_dash_effect(commands: &mut Commands, position: Vec2) {
    commands.spawn((
        DashEffect {
            timer: DASH_EFFECT_LIFETIME,
            lifetime: DASH_EFFECT_LIFETIME,
        },
        Sprite {
            color: Color::srgba(0.9, 0.9, 1.0, 0.8),
            custom_size: Some(Vec2::new(28.0, 10.0)),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, -1.0),
    ));
}

pub(crate) fn fade_dash_effects(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut DashEffect, &mut Sprite)>,
) {
    let dt = time.delta_secs();
    for (entity, mut effect, mut sprite) in &mut query {
        effect.timer -= dt;
        if effect.timer <= 0.0 {
            commands.entity(entity).despawn();
        } else {
            sprite.color.set_alpha(0.8 * effect.timer / effect.lifetime);
        }
    }
}
