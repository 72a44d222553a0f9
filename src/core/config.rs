//! Loader and validation for the controller tuning file.

use bevy::prelude::*;
use ron::Options;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::combat::{AttackShape, AttackTuning, DummyTuning};
use crate::core::resources::CameraTuning;
use crate::movement::{MovementTuning, ProbeTuning};

/// Default location of the tuning file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/data/controller.ron";

/// Every tunable the controller reads, one section per domain resource.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub movement: MovementTuning,
    pub probe: ProbeTuning,
    pub attack: AttackTuning,
    pub camera: CameraTuning,
    pub dummies: DummyTuning,
}

/// Error type for config loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// A single rejected value in an otherwise parseable config.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub section: &'static str,
    pub field: &'static str,
    pub reason: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.reason)
    }
}

/// Validation outcome of the active config. Player setup is refused while
/// it holds any error.
#[derive(Resource, Debug, Default)]
pub struct ConfigDiagnostics {
    pub errors: Vec<ConfigError>,
}

impl ConfigDiagnostics {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a config from RON text. Missing fields fall back to defaults.
pub fn parse_config(contents: &str) -> Result<ControllerConfig, ron::error::SpannedError> {
    ron_options().from_str(contents)
}

/// Load the config file at `path`.
pub fn load_config(path: &Path) -> Result<ControllerConfig, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_config(&contents).map_err(|e| ConfigLoadError {
        file: file_name,
        message: format!("Parse error: {}", e),
    })
}

macro_rules! check_positive {
    ($errors:expr, $section:expr, $owner:expr, $field:ident) => {
        if !($owner.$field > 0.0) {
            $errors.push(ConfigError {
                section: $section,
                field: stringify!($field),
                reason: format!("must be positive, got {}", $owner.$field),
            });
        }
    };
}

macro_rules! check_non_negative {
    ($errors:expr, $section:expr, $owner:expr, $field:ident) => {
        if !($owner.$field >= 0.0) {
            $errors.push(ConfigError {
                section: $section,
                field: stringify!($field),
                reason: format!("must not be negative, got {}", $owner.$field),
            });
        }
    };
}

fn check_shape(errors: &mut Vec<ConfigError>, field: &'static str, shape: &AttackShape) {
    if !(shape.size.x > 0.0 && shape.size.y > 0.0) {
        errors.push(ConfigError {
            section: "attack",
            field,
            reason: format!("shape size must be positive, got {}", shape.size),
        });
    }
}

/// Validate value ranges. Returns an empty list when the config is usable.
pub fn validate_config(config: &ControllerConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    let movement = &config.movement;
    check_non_negative!(errors, "movement", movement, walk_speed);
    check_positive!(errors, "movement", movement, jump_force);
    check_positive!(errors, "movement", movement, gravity);
    check_positive!(errors, "movement", movement, coyote_time);
    check_positive!(errors, "movement", movement, dash_speed);
    check_positive!(errors, "movement", movement, dash_time);
    check_non_negative!(errors, "movement", movement, dash_cooldown);
    // A ground jump needs both a live buffer and a live coyote window.
    if movement.jump_buffer_frames < 1 {
        errors.push(ConfigError {
            section: "movement",
            field: "jump_buffer_frames",
            reason: format!("must be at least 1, got {}", movement.jump_buffer_frames),
        });
    }

    let probe = &config.probe;
    check_positive!(errors, "probe", probe, length);
    check_non_negative!(errors, "probe", probe, offset_x);

    let attack = &config.attack;
    check_non_negative!(errors, "attack", attack, cooldown);
    check_non_negative!(errors, "attack", attack, damage);
    check_non_negative!(errors, "attack", attack, knockback);
    check_shape(&mut errors, "side", &attack.side);
    check_shape(&mut errors, "up", &attack.up);
    check_shape(&mut errors, "down", &attack.down);

    let camera = &config.camera;
    if !(camera.follow_speed > 0.0 && camera.follow_speed <= 1.0) {
        errors.push(ConfigError {
            section: "camera",
            field: "follow_speed",
            reason: format!("must be in (0, 1], got {}", camera.follow_speed),
        });
    }

    let dummies = &config.dummies;
    check_positive!(errors, "dummies", dummies, health);
    check_non_negative!(errors, "dummies", dummies, respawn_delay);
    for (field, value) in [
        ("spawn_min_x", dummies.spawn_min_x),
        ("spawn_max_x", dummies.spawn_max_x),
        ("spawn_y", dummies.spawn_y),
    ] {
        if !value.is_finite() {
            errors.push(ConfigError {
                section: "dummies",
                field,
                reason: format!("must be finite, got {}", value),
            });
        }
    }
    if dummies.spawn_min_x > dummies.spawn_max_x {
        errors.push(ConfigError {
            section: "dummies",
            field: "spawn_min_x",
            reason: format!(
                "must not exceed spawn_max_x ({} > {})",
                dummies.spawn_min_x, dummies.spawn_max_x
            ),
        });
    }

    errors
}

/// Serde adapter writing `Vec2` as an `(x, y)` tuple.
pub mod vec2 {
    use bevy::math::Vec2;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &Vec2, serializer: S) -> Result<S::Ok, S::Error> {
        (value.x, value.y).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec2, D::Error> {
        let (x, y) = <(f32, f32)>::deserialize(deserializer)?;
        Ok(Vec2::new(x, y))
    }
}
