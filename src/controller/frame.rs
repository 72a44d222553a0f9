//! The per-frame player controller: one ordered pass over probe, jump
//! counters, dash, facing, walking, jump arbitration, dash start and attack.

use bevy::prelude::*;

use crate::combat::attacks::knockback_direction;
use crate::combat::{AttackDirection, AttackState, AttackTuning, Hit, select_attack};
use crate::movement::motion::{is_walking, walk};
use crate::movement::probe::is_grounded;
use crate::movement::{
    DashState, DashTick, Facing, JumpOutcome, JumpState, MovementTuning, ProbeTuning,
};
use crate::sprites::{AnimParam, AnimTrigger, AnimationSink};

/// Physics and scene operations the controller depends on.
pub trait CharacterWorld {
    /// Handle identifying something an attack can hit.
    type Target: Copy;

    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn set_gravity_scale(&mut self, scale: f32);
    /// Downward ray against ground colliders only.
    fn cast_ground_ray(&self, origin: Vec2, max_distance: f32) -> bool;
    /// Damageable targets overlapping an axis-aligned box, with their positions.
    fn overlap_damageables(&self, center: Vec2, size: Vec2) -> Vec<(Self::Target, Vec2)>;
    fn apply_hit(&mut self, target: Self::Target, hit: Hit);
    fn spawn_dash_effect(&mut self);
}

/// Resolved input for one frame. Button fields are edges: true on exactly
/// one frame per press or release.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub axis: Vec2,
    pub jump_pressed: bool,
    pub jump_released: bool,
    pub dash_pressed: bool,
    pub attack_pressed: bool,
    pub dt: f32,
}

/// Tuning sections read by the controller.
#[derive(Debug, Clone, Copy)]
pub struct ControllerTuning<'a> {
    pub movement: &'a MovementTuning,
    pub probe: &'a ProbeTuning,
    pub attack: &'a AttackTuning,
}

/// What happened during one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub grounded: bool,
    /// The frame was skipped because a dash was in flight.
    pub suspended: bool,
    pub jump: JumpOutcome,
    pub dash_started: bool,
    pub dash_ended: bool,
    pub attack: Option<AttackDirection>,
    pub targets_hit: usize,
}

impl FrameReport {
    fn new(grounded: bool) -> Self {
        Self {
            grounded,
            suspended: false,
            jump: JumpOutcome::None,
            dash_started: false,
            dash_ended: false,
            attack: None,
            targets_hit: 0,
        }
    }
}

/// All controller state owned by the player entity.
#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    pub facing: Facing,
    pub jump: JumpState,
    pub dash: DashState,
    pub attack: AttackState,
    grounded: bool,
}

impl PlayerController {
    /// `base_gravity` is the body's gravity scale at spawn, restored after
    /// every dash.
    pub fn new(base_gravity: f32) -> Self {
        Self {
            facing: Facing::Right,
            jump: JumpState::default(),
            dash: DashState::new(base_gravity),
            attack: AttackState::default(),
            grounded: false,
        }
    }

    /// Result of the most recent ground probe.
    pub fn grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_dashing(&self) -> bool {
        self.dash.is_dashing()
    }

    pub fn probe_ground<W: CharacterWorld>(&self, world: &W, probe: &ProbeTuning) -> bool {
        is_grounded(world.position(), probe, |origin, length| {
            world.cast_ground_ray(origin, length)
        })
    }

    /// Run one frame.
    pub fn run_frame<W, A>(
        &mut self,
        input: &FrameInput,
        tuning: ControllerTuning<'_>,
        world: &mut W,
        animator: &mut A,
    ) -> FrameReport
    where
        W: CharacterWorld,
        A: AnimationSink,
    {
        let grounded = self.probe_ground(world, tuning.probe);
        if grounded != self.grounded {
            debug!("Grounded: {} -> {}", self.grounded, grounded);
        }
        self.grounded = grounded;

        let mut report = FrameReport::new(grounded);

        self.jump
            .update_counters(grounded, input.jump_pressed, input.dt, tuning.movement);
        self.dash.note_grounded(grounded);

        match self.dash.tick(input.dt, tuning.movement) {
            DashTick::DashEnded => {
                world.set_gravity_scale(self.dash.base_gravity);
                report.dash_ended = true;
                debug!("Dash ended, gravity scale {}", self.dash.base_gravity);
            }
            DashTick::Ready => debug!("Dash ready"),
            DashTick::Unchanged => {}
        }

        if self.dash.is_dashing() {
            report.suspended = true;
            return report;
        }

        self.facing = self.facing.turned_by(input.axis.x);

        let mut velocity = world.velocity();
        walk(&mut velocity, input.axis.x, tuning.movement.walk_speed);
        animator.set_bool(AnimParam::Walking, is_walking(velocity, grounded));

        report.jump = self.jump.arbitrate(
            &mut velocity,
            grounded,
            input.jump_pressed,
            input.jump_released,
            tuning.movement,
        );
        match report.jump {
            JumpOutcome::Ground => animator.set_bool(AnimParam::Jumping, true),
            JumpOutcome::Air(_) => {}
            JumpOutcome::None => animator.set_bool(AnimParam::Jumping, !grounded),
        }
        world.set_velocity(velocity);

        if self.dash.try_start(input.dash_pressed, tuning.movement) {
            self.start_dash(grounded, tuning.movement, world, animator);
            report.dash_started = true;
        }

        self.attack.tick(input.dt);
        if self
            .attack
            .try_attack(input.attack_pressed, tuning.attack.cooldown)
        {
            let (direction, hits) =
                self.resolve_attack(input.axis.y, grounded, tuning.attack, world, animator);
            report.attack = Some(direction);
            report.targets_hit = hits;
        }

        report
    }

    fn start_dash<W: CharacterWorld, A: AnimationSink>(
        &self,
        grounded: bool,
        tuning: &MovementTuning,
        world: &mut W,
        animator: &mut A,
    ) {
        animator.set_trigger(AnimTrigger::Dashing);
        world.set_gravity_scale(0.0);
        world.set_velocity(Vec2::new(self.facing.sign() * tuning.dash_speed, 0.0));
        if grounded {
            world.spawn_dash_effect();
        }
        debug!("Dash started: facing={:?}, grounded={}", self.facing, grounded);
    }

    fn resolve_attack<W: CharacterWorld, A: AnimationSink>(
        &self,
        vertical: f32,
        grounded: bool,
        tuning: &AttackTuning,
        world: &mut W,
        animator: &mut A,
    ) -> (AttackDirection, usize) {
        let selection = select_attack(vertical, grounded);
        if let Some(trigger) = selection.trigger {
            animator.set_trigger(trigger);
        }

        let origin = world.position();
        let shape = tuning.shape(selection.direction);
        let center = shape.world_center(origin, self.facing);
        let targets = world.overlap_damageables(center, shape.size);

        if !targets.is_empty() {
            debug!(
                "{:?} attack hit {} target(s)",
                selection.direction,
                targets.len()
            );
        }

        let count = targets.len();
        for (target, position) in targets {
            world.apply_hit(
                target,
                Hit {
                    damage: tuning.damage,
                    direction: knockback_direction(origin, position),
                    knockback: tuning.knockback,
                },
            );
        }

        (selection.direction, count)
    }
}
