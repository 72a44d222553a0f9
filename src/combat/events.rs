//! Combat domain: messages between the controller and damage resolution.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::combat::components::Hit;

/// A player attack landed on `target`. Applied in `ControllerSet::Resolve`.
#[derive(Debug)]
pub struct DamageEvent {
    pub source: Entity,
    pub target: Entity,
    pub hit: Hit,
}

impl Message for DamageEvent {}

/// Sent once when a hit empties a target's health.
#[derive(Debug)]
pub struct DeathEvent {
    pub entity: Entity,
}

impl Message for DeathEvent {}
