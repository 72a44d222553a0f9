//! Combat domain: unit tests for attack selection, rate limiting and damage.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::attacks::knockback_direction;
use super::spawn::random_dummy_position;
use super::{
    AttackDirection, AttackShape, AttackState, AttackTuning, Damageable, DummyRespawns,
    DummyTuning, Health, Hit, select_attack,
};
use crate::movement::Facing;
use crate::sprites::AnimTrigger;

#[test]
fn test_select_attack_neutral() {
    let grounded = select_attack(0.0, true);
    assert_eq!(grounded.direction, AttackDirection::Side);
    assert_eq!(grounded.trigger, Some(AnimTrigger::Attacking));

    let airborne = select_attack(0.0, false);
    assert_eq!(airborne.direction, AttackDirection::Side);
    assert_eq!(airborne.trigger, Some(AnimTrigger::AttackJump));
}

#[test]
fn test_select_attack_up() {
    for grounded in [true, false] {
        let selection = select_attack(1.0, grounded);
        assert_eq!(selection.direction, AttackDirection::Up);
        assert_eq!(selection.trigger, Some(AnimTrigger::AttackUp));
    }
}

#[test]
fn test_select_attack_down() {
    let airborne = select_attack(-1.0, false);
    assert_eq!(airborne.direction, AttackDirection::Down);
    assert_eq!(airborne.trigger, None);

    // Holding down on the ground swings sideways instead.
    let grounded = select_attack(-1.0, true);
    assert_eq!(grounded.direction, AttackDirection::Side);
    assert_eq!(grounded.trigger, Some(AnimTrigger::Attacking));
}

#[test]
fn test_attack_rate_limit() {
    let mut attack = AttackState::default();
    assert!(!attack.try_attack(true, 0.25));

    attack.tick(0.125);
    attack.tick(0.125);
    assert!(attack.try_attack(true, 0.25));
    assert_eq!(attack.time_since_last_attack, 0.0);

    // Denied requests leave the timer running.
    attack.tick(0.125);
    assert!(!attack.try_attack(true, 0.25));
    assert_eq!(attack.time_since_last_attack, 0.125);

    // No request, no reset.
    attack.tick(0.5);
    assert!(!attack.try_attack(false, 0.25));
    assert_eq!(attack.time_since_last_attack, 0.625);
}

#[test]
fn test_shape_mirrors_with_facing() {
    let shape = AttackShape::new(Vec2::new(30.0, 5.0), Vec2::new(40.0, 36.0));
    let origin = Vec2::new(100.0, 0.0);

    assert_eq!(
        shape.world_center(origin, Facing::Right),
        Vec2::new(130.0, 5.0)
    );
    assert_eq!(
        shape.world_center(origin, Facing::Left),
        Vec2::new(70.0, 5.0)
    );
}

#[test]
fn test_tuning_shape_lookup() {
    let tuning = AttackTuning::default();
    assert_eq!(tuning.shape(AttackDirection::Side), &tuning.side);
    assert_eq!(tuning.shape(AttackDirection::Up), &tuning.up);
    assert_eq!(tuning.shape(AttackDirection::Down), &tuning.down);
}

#[test]
fn test_knockback_direction() {
    assert_eq!(
        knockback_direction(Vec2::ZERO, Vec2::new(0.0, -20.0)),
        Vec2::NEG_Y
    );
    assert_eq!(knockback_direction(Vec2::ONE, Vec2::ONE), Vec2::ZERO);

    let hit = Hit {
        damage: 1.0,
        direction: Vec2::X,
        knockback: 300.0,
    };
    assert_eq!(hit.knockback_velocity(), Vec2::new(300.0, 0.0));
}

#[test]
fn test_health_damage_and_death() {
    let mut health = Health::new(25.0);
    let hit = Hit {
        damage: 10.0,
        direction: Vec2::X,
        knockback: 0.0,
    };

    assert!(!health.apply_hit(&hit));
    assert!(!health.apply_hit(&hit));
    assert_eq!(health.current, 5.0);
    assert_eq!(health.percent(), 0.2);

    // Lethal exactly once; overkill is clamped.
    assert!(health.apply_hit(&hit));
    assert_eq!(health.current, 0.0);
    assert!(health.is_dead());
    assert!(!health.apply_hit(&hit));
}

#[test]
fn test_respawn_timers() {
    let mut respawns = DummyRespawns::from_seed(1);
    respawns.timers = vec![0.25, 0.5, 1.0];

    assert_eq!(respawns.tick(0.25), 1);
    assert_eq!(respawns.timers, vec![0.25, 0.75]);
    assert_eq!(respawns.tick(0.5), 1);
    assert_eq!(respawns.tick(0.5), 1);
    assert!(respawns.timers.is_empty());
    assert_eq!(respawns.tick(0.5), 0);
}

#[test]
fn test_dummy_positions_are_seeded_and_in_range() {
    let tuning = DummyTuning::default();
    let mut a = ChaCha8Rng::seed_from_u64(tuning.seed);
    let mut b = ChaCha8Rng::seed_from_u64(tuning.seed);

    for _ in 0..16 {
        let position = random_dummy_position(&tuning, &mut a);
        assert_eq!(position, random_dummy_position(&tuning, &mut b));
        assert!(position.x >= tuning.spawn_min_x && position.x < tuning.spawn_max_x);
        assert_eq!(position.y, tuning.spawn_y);
    }
}

#[test]
fn test_dummy_position_with_empty_range() {
    let tuning = DummyTuning {
        spawn_min_x: 12.0,
        spawn_max_x: 12.0,
        ..default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(
        random_dummy_position(&tuning, &mut rng),
        Vec2::new(12.0, tuning.spawn_y)
    );
}
