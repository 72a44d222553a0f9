//! Debug overlay for tuning the controller.
//!
//! Features:
//! - Draw the three attack shapes and the ground probe rays (F2 toggles)
//! - Dump controller state to the log (F3)

use bevy::math::Isometry2d;
use bevy::prelude::*;

use crate::combat::AttackTuning;
use crate::controller::PlayerController;
use crate::movement::probe::probe_origins;
use crate::movement::{Player, ProbeTuning};

// ============================================================================
// Debug State Resource
// ============================================================================

#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether gizmos are drawn
    pub show_gizmos: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self { show_gizmos: true }
    }
}

// ============================================================================
// Plugin
// ============================================================================

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (toggle_gizmos, log_controller_state))
            .add_systems(
                Update,
                (draw_attack_shapes, draw_ground_probes)
                    .run_if(|state: Res<DebugState>| state.show_gizmos),
            );
    }
}

// ============================================================================
// Systems
// ============================================================================

fn toggle_gizmos(keyboard: Res<ButtonInput<KeyCode>>, mut debug_state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.show_gizmos = !debug_state.show_gizmos;
    }
}

fn draw_attack_shapes(
    mut gizmos: Gizmos,
    tuning: Res<AttackTuning>,
    query: Query<(&Transform, &PlayerController), With<Player>>,
) {
    let color = Color::srgb(1.0, 0.0, 0.0);
    for (transform, controller) in &query {
        let origin = transform.translation.truncate();
        for shape in [&tuning.side, &tuning.up, &tuning.down] {
            let center = shape.world_center(origin, controller.facing);
            gizmos.rect_2d(Isometry2d::from_translation(center), shape.size, color);
        }
    }
}

fn draw_ground_probes(
    mut gizmos: Gizmos,
    probe: Res<ProbeTuning>,
    query: Query<(&Transform, &PlayerController), With<Player>>,
) {
    for (transform, controller) in &query {
        let color = if controller.grounded() {
            Color::srgb(0.2, 1.0, 0.2)
        } else {
            Color::srgb(1.0, 1.0, 0.2)
        };
        for origin in probe_origins(transform.translation.truncate(), &probe) {
            gizmos.line_2d(origin, origin - Vec2::new(0.0, probe.length), color);
        }
    }
}

fn log_controller_state(
    keyboard: Res<ButtonInput<KeyCode>>,
    query: Query<(Entity, &PlayerController), With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    for (entity, controller) in &query {
        info!(
            "Player {:?}: grounded={}, facing={:?}, jump={:?}, dash={:?}, attack={:?}",
            entity,
            controller.grounded(),
            controller.facing,
            controller.jump,
            controller.dash,
            controller.attack
        );
    }
}
