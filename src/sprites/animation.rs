//! Animation state machine and playback.
//!
//! Gameplay code writes named parameters and triggers into an [`Animator`];
//! the state machine here turns them into an [`AnimationState`] with frame
//! timing, and the sprite is tinted per state until real clips exist.

use bevy::prelude::*;

use crate::controller::PlayerController;
use crate::movement::Facing;

/// Boolean animation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimParam {
    Walking,
    Jumping,
}

/// One-shot animation triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimTrigger {
    Dashing,
    Attacking,
    AttackUp,
    AttackJump,
}

/// Fire-and-forget animation requests.
pub trait AnimationSink {
    fn set_bool(&mut self, param: AnimParam, value: bool);
    fn set_trigger(&mut self, trigger: AnimTrigger);
}

/// Parameter store written by gameplay, read by the state machine.
#[derive(Component, Debug, Default)]
pub struct Animator {
    pub walking: bool,
    pub jumping: bool,
    triggers: Vec<AnimTrigger>,
}

impl Animator {
    pub fn get_bool(&self, param: AnimParam) -> bool {
        match param {
            AnimParam::Walking => self.walking,
            AnimParam::Jumping => self.jumping,
        }
    }

    /// Triggers fired since the last call, oldest first.
    pub fn take_triggers(&mut self) -> Vec<AnimTrigger> {
        std::mem::take(&mut self.triggers)
    }

    /// Looping state implied by the boolean parameters.
    pub fn resting_state(&self) -> AnimationState {
        if self.get_bool(AnimParam::Jumping) {
            AnimationState::Jump
        } else if self.get_bool(AnimParam::Walking) {
            AnimationState::Walk
        } else {
            AnimationState::Idle
        }
    }
}

impl AnimationSink for Animator {
    fn set_bool(&mut self, param: AnimParam, value: bool) {
        match param {
            AnimParam::Walking => self.walking = value,
            AnimParam::Jumping => self.jumping = value,
        }
    }

    fn set_trigger(&mut self, trigger: AnimTrigger) {
        self.triggers.push(trigger);
    }
}

/// Animation states for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    Jump,
    Dash,
    Attack(AttackAnimation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackAnimation {
    Side,
    Up,
    Air,
}

impl From<AnimTrigger> for AnimationState {
    fn from(trigger: AnimTrigger) -> Self {
        match trigger {
            AnimTrigger::Dashing => AnimationState::Dash,
            AnimTrigger::Attacking => AnimationState::Attack(AttackAnimation::Side),
            AnimTrigger::AttackUp => AnimationState::Attack(AttackAnimation::Up),
            AnimTrigger::AttackJump => AnimationState::Attack(AttackAnimation::Air),
        }
    }
}

/// Component for animation playback.
#[derive(Component, Debug)]
pub struct AnimationController {
    pub state: AnimationState,
    /// Current frame index (0-based).
    pub current_frame: u32,
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
    pub looping: bool,
    /// Whether the animation has finished (for non-looping).
    pub finished: bool,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            state: AnimationState::Idle,
            current_frame: 0,
            total_frames: 4,
            frame_timer: 0.0,
            frame_duration: 0.15,
            looping: true,
            finished: false,
        }
    }
}

impl AnimationController {
    /// Switch to a looping state; no-op if already in it.
    pub fn set_state(&mut self, state: AnimationState) {
        if self.state != state {
            self.play(state);
        }
    }

    /// Start `state` from its first frame, even if it is already playing.
    pub fn play(&mut self, state: AnimationState) {
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.finished = false;

        self.looping = matches!(
            state,
            AnimationState::Idle | AnimationState::Walk | AnimationState::Jump
        );

        self.total_frames = match state {
            AnimationState::Idle | AnimationState::Walk => 4,
            AnimationState::Jump => 2,
            AnimationState::Dash => 2,
            AnimationState::Attack(_) => 3,
        };

        self.frame_duration = match state {
            AnimationState::Attack(_) => 0.08,
            AnimationState::Dash => 0.08,
            _ => 0.15,
        };
    }

    /// A non-looping clip that has not finished yet.
    pub fn playing_one_shot(&self) -> bool {
        !self.looping && !self.finished
    }

    pub fn advance(&mut self, dt: f32) {
        if self.finished {
            return;
        }

        self.frame_timer += dt;
        while self.frame_timer >= self.frame_duration && !self.finished {
            self.frame_timer -= self.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= self.total_frames {
                if self.looping {
                    self.current_frame = 0;
                } else {
                    self.current_frame = self.total_frames - 1;
                    self.finished = true;
                }
            }
        }
    }

    /// Placeholder tint standing in for sprite clips.
    pub fn tint(&self) -> Color {
        match self.state {
            AnimationState::Idle => Color::srgb(0.9, 0.9, 0.9),
            AnimationState::Walk => Color::srgb(0.85, 0.9, 1.0),
            AnimationState::Jump => Color::srgb(0.7, 0.85, 1.0),
            AnimationState::Dash => Color::srgb(0.6, 1.0, 1.0),
            AnimationState::Attack(_) => Color::srgb(1.0, 0.85, 0.5),
        }
    }
}

/// Resolve parameters and triggers into the playing state.
pub fn animation_state_machine(mut query: Query<(Entity, &mut Animator, &mut AnimationController)>) {
    for (entity, mut animator, mut controller) in &mut query {
        let previous = controller.state;

        // Several triggers in one frame: the last one wins.
        if let Some(trigger) = animator.take_triggers().pop() {
            controller.play(trigger.into());
        } else if !controller.playing_one_shot() {
            controller.set_state(animator.resting_state());
        }

        if controller.state != previous {
            debug!(
                "{:?} animation: {:?} -> {:?}",
                entity, previous, controller.state
            );
        }
    }
}

/// System that updates animation frames based on time.
pub fn update_animation_frames(time: Res<Time>, mut query: Query<&mut AnimationController>) {
    for mut controller in &mut query {
        controller.advance(time.delta_secs());
    }
}

/// Mirror the sprite with facing and tint it by animation state.
pub fn apply_sprite_state(
    mut query: Query<(&PlayerController, &AnimationController, &mut Sprite)>,
) {
    for (player, animation, mut sprite) in &mut query {
        sprite.flip_x = player.facing == Facing::Left;
        sprite.color = animation.tint();
    }
}
