//! Square rendering component.

use gpui::{div, prelude::*, px, rgb};

use crate::ui::components::render_piece;
use crate::ui::theme::{HIGHLIGHT, HIGHLIGHT_OPACITY, square_color};

/// Render a single board square with an optional piece and an optional
/// power-highlight overlay.
pub fn render_square(
    row: u32,
    col: u32,
    piece: Option<String>,
    is_highlighted: bool,
    square_size: f32,
    piece_size: f32,
) -> impl IntoElement {
    div()
        .flex_shrink_0() // never shrink - maintain aspect ratio
        .relative()
        .size(px(square_size))
        .bg(square_color(row, col))
        .flex()
        .items_center()
        .justify_center()
        .when_some(piece, |el, label| el.child(render_piece(&label, piece_size)))
        .when(is_highlighted, |el| {
            // translucent overlay, drawn over the piece like the highlight
            // rectangles it replaces
            el.child(
                div()
                    .absolute()
                    .top_0()
                    .left_0()
                    .size_full()
                    .bg(rgb(HIGHLIGHT))
                    .opacity(HIGHLIGHT_OPACITY),
            )
        })
}
