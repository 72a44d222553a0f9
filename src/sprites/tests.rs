//! Sprites domain: unit tests for the animator and clip playback.

use super::{
    AnimParam, AnimTrigger, AnimationController, AnimationSink, AnimationState, Animator,
    AttackAnimation,
};

#[test]
fn test_animator_params_and_triggers() {
    let mut animator = Animator::default();
    animator.set_bool(AnimParam::Walking, true);
    assert!(animator.get_bool(AnimParam::Walking));
    assert!(!animator.get_bool(AnimParam::Jumping));

    animator.set_trigger(AnimTrigger::Dashing);
    animator.set_trigger(AnimTrigger::AttackUp);
    assert_eq!(
        animator.take_triggers(),
        vec![AnimTrigger::Dashing, AnimTrigger::AttackUp]
    );
    assert!(animator.take_triggers().is_empty());
}

#[test]
fn test_resting_state_prefers_jump() {
    let mut animator = Animator::default();
    assert_eq!(animator.resting_state(), AnimationState::Idle);

    animator.set_bool(AnimParam::Walking, true);
    assert_eq!(animator.resting_state(), AnimationState::Walk);

    animator.set_bool(AnimParam::Jumping, true);
    assert_eq!(animator.resting_state(), AnimationState::Jump);
}

#[test]
fn test_trigger_states() {
    assert_eq!(
        AnimationState::from(AnimTrigger::Dashing),
        AnimationState::Dash
    );
    assert_eq!(
        AnimationState::from(AnimTrigger::Attacking),
        AnimationState::Attack(AttackAnimation::Side)
    );
    assert_eq!(
        AnimationState::from(AnimTrigger::AttackUp),
        AnimationState::Attack(AttackAnimation::Up)
    );
    assert_eq!(
        AnimationState::from(AnimTrigger::AttackJump),
        AnimationState::Attack(AttackAnimation::Air)
    );
}

#[test]
fn test_one_shot_finishes_on_last_frame() {
    let mut controller = AnimationController::default();
    controller.play(AnimationState::Attack(AttackAnimation::Side));
    controller.frame_duration = 0.125;
    assert!(controller.playing_one_shot());

    controller.advance(0.25);
    assert_eq!(controller.current_frame, 2);
    assert!(!controller.finished);

    controller.advance(0.5);
    assert_eq!(controller.current_frame, 2);
    assert!(controller.finished);
    assert!(!controller.playing_one_shot());
}

#[test]
fn test_looping_wraps() {
    let mut controller = AnimationController::default();
    controller.set_state(AnimationState::Walk);
    controller.frame_duration = 0.125;

    controller.advance(0.5);
    assert_eq!(controller.current_frame, 0);
    assert!(!controller.finished);
    assert!(!controller.playing_one_shot());
}

#[test]
fn test_set_state_does_not_restart() {
    let mut controller = AnimationController::default();
    controller.set_state(AnimationState::Walk);
    controller.frame_duration = 0.125;
    controller.advance(0.25);
    assert_eq!(controller.current_frame, 2);

    controller.set_state(AnimationState::Walk);
    assert_eq!(controller.current_frame, 2);

    // Replaying restarts from the first frame.
    controller.play(AnimationState::Walk);
    assert_eq!(controller.current_frame, 0);
}
