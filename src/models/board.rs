//! Board state model - the application layer over one fetched snapshot.

use std::sync::Arc;

use gpui::{Pixels, Size, px};

use crate::api::EngineClient;
use crate::domain::{BoardSnapshot, Color, Perspective, Square, resolve_click};
use crate::ui::theme::{BOARD_PADDING, INITIAL_LEFT_PANEL, LABEL_GUTTER, PIECE_SCALE};

/// The main board model: the current snapshot, the active highlight set,
/// and the viewing orientation.
pub struct BoardModel {
    client: Arc<EngineClient>,
    snapshot: Option<BoardSnapshot>,
    /// Display-space squares currently highlighted. Replaced wholesale on
    /// every click - at most one click's highlights are ever visible.
    highlights: Vec<Square>,
    /// Explicit viewer color; when unset, orientation follows the
    /// snapshot's turn.
    viewer_override: Option<Color>,
    /// Last transport/decode failure, shown in the side panel.
    last_error: Option<String>,
    /// Measured panel size from canvas
    pub panel_size: Size<Pixels>,
}

impl BoardModel {
    pub fn new(client: Arc<EngineClient>) -> Self {
        Self {
            client,
            snapshot: None,
            highlights: Vec::new(),
            viewer_override: None,
            last_error: None,
            panel_size: Size {
                width: px(INITIAL_LEFT_PANEL),
                height: px(600.0),
            },
        }
    }

    pub fn snapshot(&self) -> Option<&BoardSnapshot> {
        self.snapshot.as_ref()
    }

    /// Fetch a fresh snapshot, replacing the old one wholesale. Highlights
    /// from the previous snapshot never survive a fetch.
    pub fn refresh(&mut self) {
        match self.client.state() {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.highlights.clear();
                self.last_error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch board state");
                self.last_error = Some(err.to_string());
            }
        }
    }

    /// Start a new game on the service, then fetch its state.
    pub fn new_game(&mut self) {
        if let Err(err) = self.client.start() {
            tracing::warn!(error = %err, "failed to start a new game");
            self.last_error = Some(err.to_string());
            return;
        }
        self.refresh();
    }

    /// Toggle between the turn-derived orientation and the flipped one.
    pub fn flip_board(&mut self) {
        self.viewer_override = match (self.viewer_override, self.viewer()) {
            (Some(_), _) => None,
            (None, Some(viewer)) => Some(viewer.opponent()),
            (None, None) => None,
        };
        self.highlights.clear();
    }

    pub fn viewer(&self) -> Option<Color> {
        self.viewer_override
            .or_else(|| self.snapshot.as_ref().map(|s| s.turn()))
    }

    fn perspective(&self) -> Option<Perspective> {
        let snapshot = self.snapshot.as_ref()?;
        Some(Perspective::for_snapshot(self.viewer()?, snapshot))
    }

    pub fn board_width(&self) -> u32 {
        self.snapshot.as_ref().map(|s| s.width()).unwrap_or(8)
    }

    pub fn board_height(&self) -> u32 {
        self.snapshot.as_ref().map(|s| s.height()).unwrap_or(8)
    }

    pub fn turn(&self) -> Option<Color> {
        self.snapshot.as_ref().map(|s| s.turn())
    }

    pub fn history(&self) -> &[String] {
        self.snapshot.as_ref().map(|s| s.history()).unwrap_or(&[])
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Calculate square size from measured panel dimensions
    pub fn square_size(&self) -> f32 {
        let panel_width: f32 = self.panel_size.width.into();
        let panel_height: f32 = self.panel_size.height.into();
        let available_width = panel_width - BOARD_PADDING * 2.0 - LABEL_GUTTER;
        let available_height = panel_height - BOARD_PADDING * 2.0 - LABEL_GUTTER;
        let cells_x = self.board_width().max(1) as f32;
        let cells_y = self.board_height().max(1) as f32;
        (available_width / cells_x)
            .min(available_height / cells_y)
            .max(30.0)
    }

    pub fn piece_size(&self) -> f32 {
        self.square_size() * PIECE_SCALE
    }

    /// Convert a position relative to the board panel into a display-space
    /// square, if it falls within the board.
    pub fn pos_to_square(&self, x: f32, y: f32) -> Option<Square> {
        // The rank-label gutter sits left of the board; file labels are
        // below it and do not shift the origin.
        let board_x = x - BOARD_PADDING - LABEL_GUTTER;
        let board_y = y - BOARD_PADDING;

        if board_x < 0.0 || board_y < 0.0 {
            return None;
        }

        let square_size = self.square_size();
        let col = (board_x / square_size) as u32;
        let row = (board_y / square_size) as u32;

        let sq = Square::new(row, col);
        sq.in_bounds(self.board_width(), self.board_height())
            .then_some(sq)
    }

    /// The piece label on a display-space square, if any.
    pub fn piece_at_display(&self, display: Square) -> Option<&str> {
        let snapshot = self.snapshot.as_ref()?;
        let normalized = self.perspective()?.from_display(display);
        snapshot.piece_at(normalized)
    }

    /// Resolve a click on a display-space square, replacing the previous
    /// highlight set with the new one.
    pub fn handle_click(&mut self, display: Square) {
        self.highlights.clear();
        if let (Some(snapshot), Some(perspective)) = (self.snapshot.as_ref(), self.perspective()) {
            self.highlights = resolve_click(snapshot, perspective, display);
        }
    }

    pub fn is_highlighted(&self, display: Square) -> bool {
        self.highlights.contains(&display)
    }

    pub fn highlights(&self) -> &[Square] {
        &self.highlights
    }

    /// Rank label for a display row, oriented via the same perspective as
    /// the squares (ranks are 1-based on screen).
    pub fn rank_label(&self, display_row: u32) -> String {
        match self.perspective() {
            Some(p) => {
                let normalized = p.from_display(Square::new(display_row, 0));
                (normalized.row + 1).to_string()
            }
            None => String::new(),
        }
    }

    /// File label for a display column ('a'-based).
    pub fn file_label(&self, display_col: u32) -> String {
        match self.perspective() {
            Some(p) => {
                let normalized = p.from_display(Square::new(0, display_col));
                char::from(b'a' + normalized.col as u8).to_string()
            }
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::codec::decode_state;
    use serde_json::json;

    fn model_with_snapshot() -> BoardModel {
        let mut model = BoardModel::new(Arc::new(EngineClient::new("http://unused.invalid")));
        model.snapshot = Some(
            decode_state(
                serde_json::from_value(json!({
                    "board": {
                        "width": 8,
                        "height": 8,
                        "pieces": {
                            "(4,1)": "white_pawn",
                            "(0,0)": "white_rook",
                        },
                        "power": {
                            "(4,1)": "[(4,2) (4,3)]",
                        },
                        "history": ["White: (4,1) -> (4,3) -> "],
                    },
                    "turn": "White",
                }))
                .unwrap(),
            )
            .unwrap(),
        );
        model
    }

    #[test]
    fn test_click_sets_then_replaces_highlights() {
        let mut model = model_with_snapshot();
        let p = model.perspective().unwrap();

        model.handle_click(p.to_display(Square::new(1, 4)));
        assert_eq!(model.highlights().len(), 2);

        // Clicking a powerless piece clears the previous set entirely.
        model.handle_click(p.to_display(Square::new(0, 0)));
        assert!(model.highlights().is_empty());
    }

    #[test]
    fn test_click_empty_square_is_noop() {
        let mut model = model_with_snapshot();
        model.handle_click(Square::new(5, 5));
        assert!(model.highlights().is_empty());
    }

    #[test]
    fn test_flip_board_changes_viewer_and_clears_highlights() {
        let mut model = model_with_snapshot();
        assert_eq!(model.viewer(), Some(Color::White));

        let p = model.perspective().unwrap();
        model.handle_click(p.to_display(Square::new(1, 4)));
        assert!(!model.highlights().is_empty());

        model.flip_board();
        assert_eq!(model.viewer(), Some(Color::Black));
        assert!(model.highlights().is_empty());

        model.flip_board();
        assert_eq!(model.viewer(), Some(Color::White));
    }

    #[test]
    fn test_piece_lookup_goes_through_perspective() {
        let model = model_with_snapshot();
        let p = model.perspective().unwrap();
        let display = p.to_display(Square::new(1, 4));
        assert_eq!(model.piece_at_display(display), Some("white_pawn"));
    }

    #[test]
    fn test_axis_labels_follow_perspective() {
        let mut model = model_with_snapshot();
        // White viewer: rows are unflipped, columns mirrored.
        assert_eq!(model.rank_label(0), "1");
        assert_eq!(model.file_label(7), "a");

        model.flip_board();
        // Black viewer: rows mirrored, columns unflipped.
        assert_eq!(model.rank_label(0), "8");
        assert_eq!(model.file_label(0), "a");
    }

    #[test]
    fn test_pos_to_square_respects_gutter_and_bounds() {
        let model = model_with_snapshot();
        let size = model.square_size();

        assert_eq!(
            model.pos_to_square(
                BOARD_PADDING + LABEL_GUTTER + size * 0.5,
                BOARD_PADDING + size * 1.5,
            ),
            Some(Square::new(1, 0))
        );
        assert_eq!(model.pos_to_square(0.0, 0.0), None);
        assert_eq!(
            model.pos_to_square(
                BOARD_PADDING + LABEL_GUTTER + size * 9.0,
                BOARD_PADDING + size * 0.5,
            ),
            None
        );
    }
}
