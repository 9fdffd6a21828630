//! Board view - renders the fetched snapshot and resolves clicks into
//! power highlights.

use gpui::{
    Context, Entity, MouseButton, MouseDownEvent, Pixels, Subscription, Window, canvas, div,
    prelude::*, px, rgb,
};
use gpui_component::resizable::{h_resizable, resizable_panel};

use crate::domain::Square;
use crate::models::BoardModel;
use crate::ui::components::render_square;
use crate::ui::theme::{
    BOARD_PADDING, INITIAL_LEFT_PANEL, INITIAL_RIGHT_PANEL, LABEL_GUTTER, PANEL_BG, TEXT_SECONDARY,
};
use crate::ui::views::render_side_panel;

/// The main board view that observes a BoardModel
pub struct BoardView {
    model: Entity<BoardModel>,
    _subscription: Subscription,
}

impl BoardView {
    pub fn new(model: Entity<BoardModel>, cx: &mut Context<Self>) -> Self {
        let _subscription = cx.observe(&model, |_, _, cx| cx.notify());
        Self {
            model,
            _subscription,
        }
    }
}

impl Render for BoardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let model = self.model.clone();
        let model_down = model.clone();
        let model_measure = model.clone();

        let board = self.model.read(cx);

        // Sizing based on measured panel dimensions
        let square_size = board.square_size();
        let piece_size = board.piece_size();
        let width = board.board_width();
        let height = board.board_height();

        // Collect cells and labels for rendering (can't borrow the model in
        // element closures)
        let cells: Vec<(Option<String>, bool)> = (0..height)
            .flat_map(|row| {
                (0..width).map(move |col| {
                    let sq = Square::new(row, col);
                    let piece = board.piece_at_display(sq).map(str::to_string);
                    (piece, board.is_highlighted(sq))
                })
            })
            .collect();
        let rank_labels: Vec<String> = (0..height).map(|row| board.rank_label(row)).collect();
        let file_labels: Vec<String> = (0..width).map(|col| board.file_label(col)).collect();

        let board_total_width = LABEL_GUTTER + square_size * width as f32;
        let board_total_height = square_size * height as f32 + LABEL_GUTTER;

        // Board element with fixed size - always maintains its aspect ratio
        let board_element = div()
            .flex_shrink_0()
            .flex()
            .flex_col()
            .w(px(board_total_width))
            .h(px(board_total_height))
            .overflow_hidden()
            .children((0..height).map(|row| {
                let rank_label = rank_labels[row as usize].clone();
                div()
                    .flex()
                    .flex_shrink_0()
                    // rank label gutter, left of the row
                    .child(
                        div()
                            .flex_shrink_0()
                            .w(px(LABEL_GUTTER))
                            .h(px(square_size))
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(rgb(TEXT_SECONDARY))
                            .text_sm()
                            .child(rank_label),
                    )
                    .children((0..width).map(|col| {
                        let idx = (row * width + col) as usize;
                        let (piece, is_highlighted) = cells[idx].clone();
                        render_square(row, col, piece, is_highlighted, square_size, piece_size)
                    }))
            }))
            // file label strip, below the board
            .child(
                div()
                    .flex()
                    .flex_shrink_0()
                    .child(div().flex_shrink_0().w(px(LABEL_GUTTER)).h(px(LABEL_GUTTER)))
                    .children((0..width).map(|col| {
                        div()
                            .flex_shrink_0()
                            .w(px(square_size))
                            .h(px(LABEL_GUTTER))
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(rgb(TEXT_SECONDARY))
                            .text_sm()
                            .child(file_labels[col as usize].clone())
                    })),
            );

        let board_panel_content = div()
            .id("board-panel")
            .relative()
            .size_full()
            .overflow_hidden()
            .bg(rgb(PANEL_BG))
            .p(px(BOARD_PADDING))
            .child(board_element)
            // Mouse down: resolve the clicked square into highlights
            .on_mouse_down(
                MouseButton::Left,
                move |ev: &MouseDownEvent, _window, cx| {
                    model_down.update(cx, |board, cx| {
                        let pos = ev.position;
                        if let Some(sq) = board.pos_to_square(pos.x.into(), pos.y.into()) {
                            board.handle_click(sq);
                            cx.notify();
                        }
                    });
                },
            );

        // Canvas to measure actual panel size
        let measure_canvas = canvas(
            move |bounds, _window, cx| {
                model_measure.update(cx, |board, cx| {
                    if board.panel_size != bounds.size {
                        board.panel_size = bounds.size;
                        cx.notify();
                    }
                });
            },
            |_, _, _, _| {},
        )
        .absolute()
        .top_0()
        .left_0()
        .size_full();

        // Wrap board panel content with measuring canvas
        let board_panel_with_measure = div()
            .relative()
            .size_full()
            .child(measure_canvas)
            .child(board_panel_content);

        // Side panel with turn, history and actions
        let side_panel_content = render_side_panel(&model, cx);

        // Main resizable layout
        div().size_full().child(
            h_resizable("board-layout")
                .child(
                    resizable_panel()
                        .size(px(INITIAL_LEFT_PANEL))
                        .size_range(px(320.)..px(1200.))
                        .child(board_panel_with_measure),
                )
                .child(
                    resizable_panel()
                        .size(px(INITIAL_RIGHT_PANEL))
                        .size_range(px(150.)..Pixels::MAX)
                        .child(side_panel_content),
                ),
        )
    }
}
