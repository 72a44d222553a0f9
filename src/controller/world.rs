//! Controller domain: avian2d-backed world and the player drive system.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::{AttackTuning, CombatInput, DamageEvent, Health, Hit};
use crate::controller::frame::{CharacterWorld, ControllerTuning, FrameInput, PlayerController};
use crate::movement::systems::spawn_dash_effect;
use crate::movement::{GameLayer, MovementInput, MovementTuning, Player, ProbeTuning};
use crate::sprites::Animator;

/// Component writes and side effects buffered during one frame.
#[derive(Debug)]
pub(crate) struct FrameWrites {
    pub velocity: Vec2,
    pub gravity_scale: f32,
    pub damage: Vec<DamageEvent>,
    /// World position of the dash dust, if a grounded dash started.
    pub dash_effect_at: Option<Vec2>,
}

/// One player's view of the physics world for a single frame. Writes are
/// buffered and flushed back to components after the frame runs.
pub(crate) struct PhysicsWorld<R, O> {
    position: Vec2,
    velocity: Vec2,
    gravity_scale: f32,
    ground_ray: R,
    overlap: O,
    hits: Vec<(Entity, Hit)>,
    dash_effect: bool,
}

impl<R, O> PhysicsWorld<R, O> {
    pub fn new(
        position: Vec2,
        velocity: Vec2,
        gravity_scale: f32,
        ground_ray: R,
        overlap: O,
    ) -> Self {
        Self {
            position,
            velocity,
            gravity_scale,
            ground_ray,
            overlap,
            hits: Vec::new(),
            dash_effect: false,
        }
    }

    /// Consume the frame, turning buffered hits into damage from `source` and
    /// placing the dash effect at the probe anchor.
    pub fn finish(self, source: Entity, probe: &ProbeTuning) -> FrameWrites {
        FrameWrites {
            velocity: self.velocity,
            gravity_scale: self.gravity_scale,
            damage: self
                .hits
                .into_iter()
                .map(|(target, hit)| DamageEvent {
                    source,
                    target,
                    hit,
                })
                .collect(),
            dash_effect_at: self.dash_effect.then_some(self.position + probe.anchor),
        }
    }
}

impl<R, O> CharacterWorld for PhysicsWorld<R, O>
where
    R: Fn(Vec2, f32) -> bool,
    O: Fn(Vec2, Vec2) -> Vec<(Entity, Vec2)>,
{
    type Target = Entity;

    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale = scale;
    }

    fn cast_ground_ray(&self, origin: Vec2, max_distance: f32) -> bool {
        (self.ground_ray)(origin, max_distance)
    }

    fn overlap_damageables(&self, center: Vec2, size: Vec2) -> Vec<(Entity, Vec2)> {
        (self.overlap)(center, size)
    }

    fn apply_hit(&mut self, target: Entity, hit: Hit) {
        self.hits.push((target, hit));
    }

    fn spawn_dash_effect(&mut self) {
        self.dash_effect = true;
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn drive_player(
    mut commands: Commands,
    time: Res<Time>,
    movement_input: Res<MovementInput>,
    combat_input: Res<CombatInput>,
    movement: Res<MovementTuning>,
    probe: Res<ProbeTuning>,
    attack: Res<AttackTuning>,
    spatial_query: SpatialQuery,
    targets: Query<&Transform, (With<Health>, Without<Player>)>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut players: Query<
        (
            Entity,
            &Transform,
            &mut PlayerController,
            &mut LinearVelocity,
            &mut GravityScale,
            &mut Animator,
        ),
        With<Player>,
    >,
) {
    let input = FrameInput {
        axis: movement_input.axis,
        jump_pressed: movement_input.jump_just_pressed,
        jump_released: movement_input.jump_just_released,
        dash_pressed: movement_input.dash_just_pressed,
        attack_pressed: combat_input.attack,
        dt: time.delta_secs(),
    };
    let tuning = ControllerTuning {
        movement: &movement,
        probe: &probe,
        attack: &attack,
    };

    // Ground probes see only ground; attacks see only the enemy layer.
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let target_filter = SpatialQueryFilter::from_mask(GameLayer::Enemy);

    for (entity, transform, mut controller, mut velocity, mut gravity, mut animator) in &mut players
    {
        let mut world = PhysicsWorld::new(
            transform.translation.truncate(),
            velocity.0,
            gravity.0,
            |origin: Vec2, length: f32| {
                spatial_query
                    .cast_ray(origin, Dir2::NEG_Y, length, true, &ground_filter)
                    .is_some()
            },
            |center: Vec2, size: Vec2| {
                spatial_query
                    .shape_intersections(
                        &Collider::rectangle(size.x, size.y),
                        center,
                        0.0,
                        &target_filter,
                    )
                    .into_iter()
                    .filter_map(|hit| {
                        targets
                            .get(hit)
                            .ok()
                            .map(|target| (hit, target.translation.truncate()))
                    })
                    .collect::<Vec<_>>()
            },
        );

        let report = controller.run_frame(&input, tuning, &mut world, &mut *animator);
        let writes = world.finish(entity, &probe);

        velocity.0 = writes.velocity;
        gravity.0 = writes.gravity_scale;
        damage_events.write_batch(writes.damage);

        if let Some(at) = writes.dash_effect_at {
            spawn_dash_effect(&mut commands, at);
        }

        if report.dash_started || report.attack.is_some() {
            debug!(
                "Player {:?}: dashing={}, attack={:?}, targets_hit={}",
                entity,
                controller.is_dashing(),
                report.attack,
                report.targets_hit
            );
        }
    }
}
