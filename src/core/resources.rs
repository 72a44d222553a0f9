//! Core domain: shared resources for pausing, player ownership and camera tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Resource tracking if gameplay should be paused.
/// Gameplay is paused if any source is active.
#[derive(Resource, Debug, Default)]
pub struct GameplayPaused {
    pub sources: HashSet<String>,
}

impl GameplayPaused {
    pub fn is_paused(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn pause(&mut self, source: impl Into<String>) {
        self.sources.insert(source.into());
    }

    pub fn unpause(&mut self, source: impl Into<String>) {
        self.sources.remove(&source.into());
    }

    pub fn is_paused_by(&self, source: &str) -> bool {
        self.sources.contains(source)
    }
}

/// Run condition: returns true only when gameplay is not paused
pub fn gameplay_active(paused: Res<GameplayPaused>) -> bool {
    !paused.is_paused()
}

/// Handle to the one authoritative player entity. Systems that need the
/// player (camera, HUD) read it from here.
#[derive(Resource, Debug, Default)]
pub struct ActivePlayer {
    pub entity: Option<Entity>,
}

impl ActivePlayer {
    /// Offer `candidate` as the authoritative player. Returns false when a
    /// different, still-alive player already holds the slot; the caller is
    /// expected to discard the candidate.
    pub fn claim(&mut self, candidate: Entity, current_alive: bool) -> bool {
        match self.entity {
            Some(current) if current != candidate && current_alive => false,
            _ => {
                self.entity = Some(candidate);
                true
            }
        }
    }

    pub fn release(&mut self, entity: Entity) {
        if self.entity == Some(entity) {
            self.entity = None;
        }
    }
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraTuning {
    /// Fraction of the remaining distance covered each frame.
    pub follow_speed: f32,
    #[serde(with = "crate::core::config::vec2")]
    pub offset: Vec2,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            follow_speed: 0.1,
            offset: Vec2::new(0.0, 40.0),
        }
    }
}
