//! Immutable board state decoded from one `/state` response.

use std::collections::HashMap;

use crate::domain::square::{Color, Square};

/// One fetch's worth of board state, in normalized coordinates.
///
/// Built by the codec, read by everything else. A new snapshot replaces the
/// old one wholesale on each fetch; nothing mutates it in between.
#[derive(Clone, Debug)]
pub struct BoardSnapshot {
    width: u32,
    height: u32,
    pieces: HashMap<Square, String>,
    power: HashMap<Square, Vec<Square>>,
    history: Vec<String>,
    turn: Color,
}

impl BoardSnapshot {
    pub fn new(
        width: u32,
        height: u32,
        pieces: HashMap<Square, String>,
        power: HashMap<Square, Vec<Square>>,
        history: Vec<String>,
        turn: Color,
    ) -> Self {
        Self {
            width,
            height,
            pieces,
            power,
            history,
            turn,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The service's opaque label for the piece on `sq`, if any.
    pub fn piece_at(&self, sq: Square) -> Option<&str> {
        self.pieces.get(&sq).map(String::as_str)
    }

    /// The squares the piece on `sq` threatens or defends, as reported by
    /// the engine. `None` when the square has no power entry.
    pub fn power_of(&self, sq: Square) -> Option<&[Square]> {
        self.power.get(&sq).map(Vec::as_slice)
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, &str)> {
        self.pieces.iter().map(|(sq, label)| (*sq, label.as_str()))
    }

    pub fn power_entries(&self) -> impl Iterator<Item = (Square, &[Square])> {
        self.power.iter().map(|(sq, targets)| (*sq, targets.as_slice()))
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn turn(&self) -> Color {
        self.turn
    }
}
