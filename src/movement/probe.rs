//! Ground probe: three short rays cast straight down from the character's feet.

use bevy::prelude::*;

use crate::movement::ProbeTuning;

/// Ray origins for a character at `position`: centre, right, left.
pub fn probe_origins(position: Vec2, probe: &ProbeTuning) -> [Vec2; 3] {
    let anchor = position + probe.anchor;
    [
        anchor,
        anchor + Vec2::new(probe.offset_x, 0.0),
        anchor - Vec2::new(probe.offset_x, 0.0),
    ]
}

/// True if any of the three rays hits ground. `cast` receives the ray
/// origin and maximum length and reports whether it hit.
///
/// A character balanced on a narrow edge between rays reads as airborne.
pub fn is_grounded(
    position: Vec2,
    probe: &ProbeTuning,
    mut cast: impl FnMut(Vec2, f32) -> bool,
) -> bool {
    probe_origins(position, probe)
        .into_iter()
        .any(|origin| cast(origin, probe.length))
}
