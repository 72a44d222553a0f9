//! Dash maneuver as an explicit phase machine advanced by frame time.

use crate::movement::MovementTuning;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DashPhase {
    #[default]
    Idle,
    /// Horizontal override active, gravity off.
    Dashing { remaining: f32 },
    /// Physics restored, next dash still locked.
    CoolingDown { remaining: f32 },
}

/// What a call to [`DashState::tick`] changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashTick {
    Unchanged,
    /// The dash itself finished; gravity must be restored.
    DashEnded,
    /// Cooldown finished; a new dash may start.
    Ready,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashState {
    pub phase: DashPhase,
    /// Set by a dash, cleared on any grounded frame.
    pub dashed_since_grounded: bool,
    /// Gravity scale to restore when a dash ends.
    pub base_gravity: f32,
}

impl DashState {
    pub fn new(base_gravity: f32) -> Self {
        Self {
            phase: DashPhase::Idle,
            dashed_since_grounded: false,
            base_gravity,
        }
    }

    pub fn can_dash(&self) -> bool {
        matches!(self.phase, DashPhase::Idle)
    }

    pub fn is_dashing(&self) -> bool {
        matches!(self.phase, DashPhase::Dashing { .. })
    }

    /// Landing re-arms the once-per-airtime gate. The phase is untouched.
    pub fn note_grounded(&mut self, grounded: bool) {
        if grounded {
            self.dashed_since_grounded = false;
        }
    }

    /// Start a dash if the press is allowed. Returns whether it started.
    pub fn try_start(&mut self, dash_pressed: bool, tuning: &MovementTuning) -> bool {
        if !dash_pressed || !self.can_dash() || self.dashed_since_grounded {
            return false;
        }

        self.dashed_since_grounded = true;
        self.phase = DashPhase::Dashing {
            remaining: tuning.dash_time,
        };
        true
    }

    /// Advance the active phase by `dt`. Time overshooting the end of the
    /// dash is charged to the cooldown, so the next dash unlocks exactly
    /// `dash_time + dash_cooldown` after the last one started.
    pub fn tick(&mut self, dt: f32, tuning: &MovementTuning) -> DashTick {
        match self.phase {
            DashPhase::Idle => DashTick::Unchanged,
            DashPhase::Dashing { remaining } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    self.phase = DashPhase::Dashing { remaining };
                    return DashTick::Unchanged;
                }

                let cooldown = tuning.dash_cooldown + remaining;
                self.phase = if cooldown > 0.0 {
                    DashPhase::CoolingDown {
                        remaining: cooldown,
                    }
                } else {
                    DashPhase::Idle
                };
                DashTick::DashEnded
            }
            DashPhase::CoolingDown { remaining } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    self.phase = DashPhase::CoolingDown { remaining };
                    DashTick::Unchanged
                } else {
                    self.phase = DashPhase::Idle;
                    DashTick::Ready
                }
            }
        }
    }
}
