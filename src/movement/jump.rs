//! Jump arbitration: coyote time, jump buffering, air jumps and jump cut.

use bevy::prelude::*;

use crate::movement::MovementTuning;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JumpState {
    pub is_jumping: bool,
    /// Counts down while airborne, refilled every grounded frame.
    pub coyote_timer: f32,
    /// Frames left on a buffered jump press.
    pub jump_buffer_counter: i32,
    pub air_jumps_used: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    /// Grounded, buffered or coyote jump.
    Ground,
    /// Air jump; carries the number of air jumps spent so far.
    Air(u8),
    /// No jump this frame.
    None,
}

impl JumpState {
    /// Per-frame timer upkeep. Runs every frame, dashing or not.
    pub fn update_counters(
        &mut self,
        grounded: bool,
        jump_pressed: bool,
        dt: f32,
        tuning: &MovementTuning,
    ) {
        if grounded {
            self.is_jumping = false;
            self.coyote_timer = tuning.coyote_time;
            self.air_jumps_used = 0;
        } else {
            self.coyote_timer = (self.coyote_timer - dt).max(0.0);
        }

        if jump_pressed {
            self.jump_buffer_counter = tuning.jump_buffer_frames;
        } else {
            self.jump_buffer_counter = (self.jump_buffer_counter - 1).max(0);
        }
    }

    /// Decide whether to jump this frame and write the result into
    /// `velocity.y`.
    pub fn arbitrate(
        &mut self,
        velocity: &mut Vec2,
        grounded: bool,
        jump_pressed: bool,
        jump_released: bool,
        tuning: &MovementTuning,
    ) -> JumpOutcome {
        // Releasing early while rising ends the jump here.
        if jump_released && velocity.y > 0.0 {
            velocity.y = 0.0;
            self.is_jumping = false;
            debug!("Jump cut");
        }

        if self.is_jumping {
            return JumpOutcome::None;
        }

        if self.jump_buffer_counter > 0 && self.coyote_timer > 0.0 {
            velocity.y = tuning.jump_force;
            self.is_jumping = true;
            // Spend the press and the ledge grace so a release cannot re-fire this jump.
            self.jump_buffer_counter = 0;
            self.coyote_timer = 0.0;
            debug!("Ground jump: grounded={}", grounded);
            return JumpOutcome::Ground;
        }

        if !grounded && self.air_jumps_used < tuning.max_air_jumps && jump_pressed {
            velocity.y = tuning.jump_force;
            self.air_jumps_used += 1;
            self.is_jumping = true;
            debug!(
                "Air jump: {}/{} used",
                self.air_jumps_used, tuning.max_air_jumps
            );
            return JumpOutcome::Air(self.air_jumps_used);
        }

        JumpOutcome::None
    }
}
