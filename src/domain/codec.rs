//! Coordinate codec for the engine service's stringly-typed wire format.
//!
//! The service serializes square coordinates as `"(col,row)"` tuples and
//! power lists as bracketed, whitespace-separated tuple sequences, e.g.
//! `"[(4,2) (4,3)]"`. This module parses both strictly (fail-fast, no
//! best-effort literal evaluation) and assembles a `BoardSnapshot`
//! all-or-nothing: one malformed tuple or missing field aborts the build.
//!
//! Decoding only swaps `(col,row)` into `(row,col)`; no orientation flip is
//! applied here. That belongs to `Perspective`, applied at render time.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::snapshot::BoardSnapshot;
use crate::domain::square::{Color, Square};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed coordinate {0:?}, expected \"(col,row)\"")]
    MalformedCoordinate(String),
    #[error("missing required field {0:?} in state payload")]
    MissingField(&'static str),
}

/// Raw `/state` response body, before any coordinate parsing.
///
/// Every field is optional so that absence surfaces as a `MissingField`
/// decode error rather than a generic deserialization failure.
#[derive(Deserialize, Debug)]
pub struct StatePayload {
    board: Option<BoardPayload>,
    turn: Option<Color>,
}

#[derive(Deserialize, Debug)]
struct BoardPayload {
    width: Option<u32>,
    height: Option<u32>,
    pieces: Option<HashMap<String, String>>,
    power: Option<HashMap<String, String>>,
    history: Option<Vec<String>>,
}

fn require<T>(value: Option<T>, name: &'static str) -> Result<T, DecodeError> {
    value.ok_or(DecodeError::MissingField(name))
}

/// Parse one `"(col,row)"` tuple into a normalized square.
///
/// The components are swapped: the wire sends `(col,row)`, the snapshot
/// stores `(row,col)`.
pub fn parse_square(text: &str) -> Result<Square, DecodeError> {
    let malformed = || DecodeError::MalformedCoordinate(text.to_string());

    let inner = text
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(malformed)?;

    let (col, row) = inner.split_once(',').ok_or_else(malformed)?;
    let col: u32 = col.trim().parse().map_err(|_| malformed())?;
    let row: u32 = row.trim().parse().map_err(|_| malformed())?;

    Ok(Square::new(row, col))
}

/// Parse a `"[(col,row) (col,row) ...]"` power list, preserving order.
pub fn parse_square_list(text: &str) -> Result<Vec<Square>, DecodeError> {
    let inner = text
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| DecodeError::MalformedCoordinate(text.to_string()))?;

    inner.split_whitespace().map(parse_square).collect()
}

/// Encode a normalized square back into the wire's `"(col,row)"` form.
pub fn encode_square(sq: Square) -> String {
    format!("({},{})", sq.col, sq.row)
}

/// Encode a power list back into the wire's bracketed form.
pub fn encode_square_list(squares: &[Square]) -> String {
    let tuples: Vec<String> = squares.iter().copied().map(encode_square).collect();
    format!("[{}]", tuples.join(" "))
}

/// Decode a full `/state` payload into an immutable snapshot.
///
/// Piece and power data are trusted verbatim - no bounds or legality checks.
pub fn decode_state(payload: StatePayload) -> Result<BoardSnapshot, DecodeError> {
    let board = require(payload.board, "board")?;
    let turn = require(payload.turn, "turn")?;
    let width = require(board.width, "width")?;
    let height = require(board.height, "height")?;
    let raw_pieces = require(board.pieces, "pieces")?;
    let raw_power = require(board.power, "power")?;
    let history = require(board.history, "history")?;

    let mut pieces = HashMap::with_capacity(raw_pieces.len());
    for (key, label) in raw_pieces {
        pieces.insert(parse_square(&key)?, label);
    }

    let mut power = HashMap::with_capacity(raw_power.len());
    for (key, targets) in raw_power {
        power.insert(parse_square(&key)?, parse_square_list(&targets)?);
    }

    Ok(BoardSnapshot::new(width, height, pieces, power, history, turn))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> StatePayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_parse_square_swaps_components() {
        // Wire order is (col,row).
        assert_eq!(parse_square("(4,1)").unwrap(), Square::new(1, 4));
        assert_eq!(parse_square("(0,0)").unwrap(), Square::new(0, 0));
        assert_eq!(parse_square("(7, 2)").unwrap(), Square::new(2, 7));
    }

    #[test]
    fn test_parse_square_malformed() {
        for text in ["", "4,1", "(4,1", "4,1)", "(4)", "(a,1)", "(4,b)", "(4;1)"] {
            assert_eq!(
                parse_square(text),
                Err(DecodeError::MalformedCoordinate(text.to_string())),
                "expected {text:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_parse_square_list() {
        assert_eq!(
            parse_square_list("[(4,2) (4,3)]").unwrap(),
            vec![Square::new(2, 4), Square::new(3, 4)]
        );
        assert_eq!(parse_square_list("[]").unwrap(), Vec::<Square>::new());
    }

    #[test]
    fn test_parse_square_list_rejects_bad_entry() {
        assert!(matches!(
            parse_square_list("[(4,2) (x,3)]"),
            Err(DecodeError::MalformedCoordinate(_))
        ));
        assert!(matches!(
            parse_square_list("(4,2) (4,3)"),
            Err(DecodeError::MalformedCoordinate(_))
        ));
    }

    #[test]
    fn test_tuple_round_trip() {
        for (col, row) in [(0u32, 0u32), (4, 1), (7, 7), (2, 5)] {
            let text = format!("({col},{row})");
            assert_eq!(encode_square(parse_square(&text).unwrap()), text);
        }
        let list = "[(0,1) (2,3) (4,5)]";
        assert_eq!(
            encode_square_list(&parse_square_list(list).unwrap()),
            list
        );
    }

    #[test]
    fn test_decode_state() {
        let snapshot = decode_state(payload(json!({
            "board": {
                "width": 8,
                "height": 8,
                "pieces": { "(4,1)": "white_pawn" },
                "power": { "(4,1)": "[(4,2) (4,3)]" },
                "history": ["White: (4,1) -> (4,3) -> "],
            },
            "turn": "White",
        })))
        .unwrap();

        assert_eq!(snapshot.width(), 8);
        assert_eq!(snapshot.height(), 8);
        assert_eq!(snapshot.turn(), Color::White);
        // Unflipped decode: (4,1) on the wire is row 1, col 4.
        assert_eq!(snapshot.piece_at(Square::new(1, 4)), Some("white_pawn"));
        assert_eq!(
            snapshot.power_of(Square::new(1, 4)),
            Some([Square::new(2, 4), Square::new(3, 4)].as_slice())
        );
        assert_eq!(snapshot.history().len(), 1);
    }

    #[test]
    fn test_decode_state_missing_fields() {
        let missing_turn = payload(json!({
            "board": {
                "width": 8, "height": 8,
                "pieces": {}, "power": {}, "history": [],
            },
        }));
        assert_eq!(
            decode_state(missing_turn).unwrap_err(),
            DecodeError::MissingField("turn")
        );

        let missing_pieces = payload(json!({
            "board": { "width": 8, "height": 8, "power": {}, "history": [] },
            "turn": "Black",
        }));
        assert_eq!(
            decode_state(missing_pieces).unwrap_err(),
            DecodeError::MissingField("pieces")
        );

        let missing_board = payload(json!({ "turn": "White" }));
        assert_eq!(
            decode_state(missing_board).unwrap_err(),
            DecodeError::MissingField("board")
        );
    }

    #[test]
    fn test_decode_state_is_all_or_nothing() {
        let bad_key = payload(json!({
            "board": {
                "width": 8,
                "height": 8,
                "pieces": { "(4,1)": "white_pawn", "oops": "black_rook" },
                "power": {},
                "history": [],
            },
            "turn": "White",
        }));
        assert_eq!(
            decode_state(bad_key).unwrap_err(),
            DecodeError::MalformedCoordinate("oops".to_string())
        );
    }
}
