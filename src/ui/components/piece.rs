//! Piece rendering component.

use gpui::{div, img, prelude::*, px};

use crate::ui::assets::piece_asset_path;

/// Render a piece image centered in its container, looked up by the
/// service's opaque label.
pub fn render_piece(label: &str, piece_size: f32) -> impl IntoElement {
    div()
        .size_full()
        .flex()
        .items_center()
        .justify_center()
        .child(img(piece_asset_path(label)).size(px(piece_size)))
}
