//! Movement domain: unit tests for jump arbitration, dash phases and probes.

use bevy::prelude::*;

use super::motion::{is_walking, walk};
use super::probe::{is_grounded, probe_origins};
use super::{
    DashPhase, DashState, DashTick, Facing, JumpOutcome, JumpState, MovementTuning, ProbeTuning,
};

fn tuning() -> MovementTuning {
    MovementTuning {
        walk_speed: 100.0,
        jump_force: 500.0,
        gravity: 1000.0,
        jump_buffer_frames: 3,
        coyote_time: 0.25,
        max_air_jumps: 1,
        dash_speed: 800.0,
        dash_time: 0.25,
        dash_cooldown: 0.5,
    }
}

// ============================================================================
// Jump
// ============================================================================

#[test]
fn test_grounded_frame_refills_timers() {
    let tuning = tuning();
    let mut jump = JumpState {
        is_jumping: true,
        coyote_timer: 0.0,
        jump_buffer_counter: 0,
        air_jumps_used: 1,
    };

    jump.update_counters(true, false, 0.125, &tuning);
    assert!(!jump.is_jumping);
    assert_eq!(jump.coyote_timer, 0.25);
    assert_eq!(jump.air_jumps_used, 0);
}

#[test]
fn test_counters_count_down_and_clamp() {
    let tuning = tuning();
    let mut jump = JumpState::default();

    jump.update_counters(true, true, 0.125, &tuning);
    assert_eq!(jump.jump_buffer_counter, 3);

    for expected in [2, 1, 0, 0] {
        jump.update_counters(false, false, 0.125, &tuning);
        assert_eq!(jump.jump_buffer_counter, expected);
    }
    assert_eq!(jump.coyote_timer, 0.0);
}

#[test]
fn test_grounded_press_jumps() {
    let tuning = tuning();
    let mut jump = JumpState::default();
    let mut velocity = Vec2::new(30.0, 0.0);

    jump.update_counters(true, true, 0.125, &tuning);
    let outcome = jump.arbitrate(&mut velocity, true, true, false, &tuning);

    assert_eq!(outcome, JumpOutcome::Ground);
    assert_eq!(velocity, Vec2::new(30.0, 500.0));
    assert!(jump.is_jumping);
    assert_eq!(jump.jump_buffer_counter, 0);
    assert_eq!(jump.coyote_timer, 0.0);
}

#[test]
fn test_coyote_jump_after_leaving_ledge() {
    let tuning = tuning();
    let mut jump = JumpState::default();
    let mut velocity = Vec2::ZERO;

    jump.update_counters(true, false, 0.125, &tuning);
    jump.arbitrate(&mut velocity, true, false, false, &tuning);

    // One frame off the ledge, still inside the grace window.
    jump.update_counters(false, true, 0.125, &tuning);
    let outcome = jump.arbitrate(&mut velocity, false, true, false, &tuning);
    assert_eq!(outcome, JumpOutcome::Ground);
    assert_eq!(jump.air_jumps_used, 0);
}

#[test]
fn test_coyote_window_expires_into_air_jump() {
    let tuning = tuning();
    let mut jump = JumpState::default();
    let mut velocity = Vec2::ZERO;

    jump.update_counters(true, false, 0.125, &tuning);
    jump.update_counters(false, false, 0.125, &tuning);
    jump.update_counters(false, false, 0.125, &tuning);
    assert_eq!(jump.coyote_timer, 0.0);

    jump.update_counters(false, true, 0.125, &tuning);
    let outcome = jump.arbitrate(&mut velocity, false, true, false, &tuning);
    assert_eq!(outcome, JumpOutcome::Air(1));
    assert_eq!(velocity.y, 500.0);
}

#[test]
fn test_buffered_press_fires_on_landing() {
    let tuning = tuning();
    let mut jump = JumpState::default();
    let mut velocity = Vec2::new(0.0, -200.0);
    jump.air_jumps_used = 1;

    // Pressed in the air with no air jumps left.
    jump.update_counters(false, true, 0.125, &tuning);
    assert_eq!(
        jump.arbitrate(&mut velocity, false, true, false, &tuning),
        JumpOutcome::None
    );

    // Lands two frames later; the buffer is still live.
    jump.update_counters(false, false, 0.125, &tuning);
    jump.update_counters(true, false, 0.125, &tuning);
    assert_eq!(jump.jump_buffer_counter, 1);
    assert_eq!(
        jump.arbitrate(&mut velocity, true, false, false, &tuning),
        JumpOutcome::Ground
    );
    assert_eq!(velocity.y, 500.0);
}

#[test]
fn test_buffer_expires_before_landing() {
    let tuning = tuning();
    let mut jump = JumpState {
        air_jumps_used: 1,
        ..default()
    };
    let mut velocity = Vec2::ZERO;

    jump.update_counters(false, true, 0.125, &tuning);
    for _ in 0..3 {
        jump.update_counters(false, false, 0.125, &tuning);
    }
    jump.update_counters(true, false, 0.125, &tuning);
    assert_eq!(
        jump.arbitrate(&mut velocity, true, false, false, &tuning),
        JumpOutcome::None
    );
}

#[test]
fn test_release_cuts_rising_jump() {
    let tuning = tuning();
    let mut jump = JumpState {
        is_jumping: true,
        ..default()
    };
    let mut velocity = Vec2::new(10.0, 300.0);

    jump.update_counters(false, false, 0.125, &tuning);
    let outcome = jump.arbitrate(&mut velocity, false, false, true, &tuning);

    assert_eq!(outcome, JumpOutcome::None);
    assert_eq!(velocity, Vec2::new(10.0, 0.0));
    assert!(!jump.is_jumping);
}

#[test]
fn test_release_while_falling_keeps_velocity() {
    let tuning = tuning();
    let mut jump = JumpState::default();
    let mut velocity = Vec2::new(0.0, -300.0);

    jump.arbitrate(&mut velocity, false, false, true, &tuning);
    assert_eq!(velocity.y, -300.0);
}

#[test]
fn test_air_jumps_are_limited() {
    let tuning = tuning();
    let mut jump = JumpState::default();
    let mut velocity = Vec2::ZERO;

    jump.update_counters(false, true, 0.125, &tuning);
    assert_eq!(
        jump.arbitrate(&mut velocity, false, true, false, &tuning),
        JumpOutcome::Air(1)
    );

    // Cut the jump so the next press is considered.
    jump.arbitrate(&mut velocity, false, false, true, &tuning);
    jump.update_counters(false, true, 0.125, &tuning);
    assert_eq!(
        jump.arbitrate(&mut velocity, false, true, false, &tuning),
        JumpOutcome::None
    );
    assert_eq!(jump.air_jumps_used, 1);
}

#[test]
fn test_no_air_jump_while_jumping() {
    let tuning = tuning();
    let mut jump = JumpState {
        is_jumping: true,
        ..default()
    };
    let mut velocity = Vec2::new(0.0, 200.0);

    assert_eq!(
        jump.arbitrate(&mut velocity, false, true, false, &tuning),
        JumpOutcome::None
    );
    assert_eq!(jump.air_jumps_used, 0);
}

#[test]
fn test_jump_heights() {
    let tuning = tuning();
    assert_eq!(tuning.single_jump_height(), 125.0);
    assert_eq!(tuning.max_reachable_height(), 250.0);
}

// ============================================================================
// Dash
// ============================================================================

#[test]
fn test_dash_phases() {
    let tuning = tuning();
    let mut dash = DashState::new(1.0);
    assert!(dash.can_dash());

    assert!(dash.try_start(true, &tuning));
    assert!(dash.is_dashing());
    assert!(dash.dashed_since_grounded);

    assert_eq!(dash.tick(0.125, &tuning), DashTick::Unchanged);
    assert!(dash.is_dashing());
    assert_eq!(dash.tick(0.125, &tuning), DashTick::DashEnded);
    assert_eq!(dash.phase, DashPhase::CoolingDown { remaining: 0.5 });

    for _ in 0..3 {
        assert_eq!(dash.tick(0.125, &tuning), DashTick::Unchanged);
    }
    assert_eq!(dash.tick(0.125, &tuning), DashTick::Ready);
    assert_eq!(dash.phase, DashPhase::Idle);
}

#[test]
fn test_dash_overshoot_counts_against_cooldown() {
    let tuning = tuning();
    let mut dash = DashState::new(1.0);
    dash.try_start(true, &tuning);

    assert_eq!(dash.tick(0.5, &tuning), DashTick::DashEnded);
    assert_eq!(dash.phase, DashPhase::CoolingDown { remaining: 0.25 });
}

#[test]
fn test_dash_overshoot_past_cooldown_goes_idle() {
    let tuning = tuning();
    let mut dash = DashState::new(1.0);
    dash.try_start(true, &tuning);

    assert_eq!(dash.tick(1.0, &tuning), DashTick::DashEnded);
    assert!(dash.can_dash());
}

#[test]
fn test_one_dash_per_airtime() {
    let tuning = MovementTuning {
        dash_cooldown: 0.0,
        ..tuning()
    };
    let mut dash = DashState::new(1.0);

    dash.note_grounded(false);
    assert!(dash.try_start(true, &tuning));
    dash.tick(0.25, &tuning);
    assert!(dash.can_dash());

    // Still airborne: the gate holds.
    dash.note_grounded(false);
    assert!(!dash.try_start(true, &tuning));

    dash.note_grounded(true);
    assert!(dash.try_start(true, &tuning));
}

#[test]
fn test_dash_needs_press_and_idle_phase() {
    let tuning = tuning();
    let mut dash = DashState::new(1.0);
    assert!(!dash.try_start(false, &tuning));

    dash.try_start(true, &tuning);
    dash.note_grounded(true);
    assert!(!dash.try_start(true, &tuning));
    assert_eq!(dash.base_gravity, 1.0);
}

// ============================================================================
// Probe, facing, walking
// ============================================================================

#[test]
fn test_probe_origins() {
    let probe = ProbeTuning {
        anchor: Vec2::new(0.0, -20.0),
        offset_x: 8.0,
        length: 4.0,
    };
    let origins = probe_origins(Vec2::new(100.0, 50.0), &probe);
    assert_eq!(
        origins,
        [
            Vec2::new(100.0, 30.0),
            Vec2::new(108.0, 30.0),
            Vec2::new(92.0, 30.0)
        ]
    );
}

#[test]
fn test_any_ray_grounds() {
    let probe = ProbeTuning::default();
    let position = Vec2::ZERO;

    // Only the left ray finds ground.
    let mut lengths = Vec::new();
    let grounded = is_grounded(position, &probe, |origin, length| {
        lengths.push(length);
        origin.x < 0.0
    });
    assert!(grounded);
    assert!(lengths.iter().all(|l| *l == probe.length));

    assert!(!is_grounded(position, &probe, |_, _| false));
}

#[test]
fn test_facing() {
    assert_eq!(Facing::Right.sign(), 1.0);
    assert_eq!(Facing::Left.sign(), -1.0);
    assert_eq!(Facing::Right.turned_by(-0.5), Facing::Left);
    assert_eq!(Facing::Left.turned_by(1.0), Facing::Right);
    assert_eq!(Facing::Left.turned_by(0.0), Facing::Left);
}

#[test]
fn test_walk_keeps_vertical_velocity() {
    let mut velocity = Vec2::new(5.0, -40.0);
    walk(&mut velocity, -1.0, 100.0);
    assert_eq!(velocity, Vec2::new(-100.0, -40.0));

    assert!(is_walking(velocity, true));
    assert!(!is_walking(velocity, false));
    assert!(!is_walking(Vec2::new(0.0, -40.0), true));
}
