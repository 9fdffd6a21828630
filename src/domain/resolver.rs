//! Click resolution: display click -> display-space highlight set.

use crate::domain::perspective::Perspective;
use crate::domain::snapshot::BoardSnapshot;
use crate::domain::square::Square;

/// Resolve a display-space click into the display-space squares to
/// highlight, in the order the engine reported them.
///
/// Clicking a square that holds no piece, or one with no power entry, is a
/// normal no-op and yields an empty set.
pub fn resolve_click(
    snapshot: &BoardSnapshot,
    perspective: Perspective,
    click: Square,
) -> Vec<Square> {
    let normalized = perspective.from_display(click);

    if snapshot.piece_at(normalized).is_none() {
        return Vec::new();
    }
    let Some(power) = snapshot.power_of(normalized) else {
        return Vec::new();
    };

    power
        .iter()
        .map(|&target| perspective.to_display(target))
        .collect()
}
