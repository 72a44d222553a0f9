//! Movement domain: system modules for input and effects.

pub(crate) mod effects;
pub(crate) mod input;

pub(crate) use effects::{fade_dash_effects, spawn_dash_effect};
pub(crate) use input::read_input;
