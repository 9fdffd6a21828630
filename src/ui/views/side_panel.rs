//! Side panel - current turn, move history, and game actions.

use gpui::{App, Div, Entity, SharedString, div, prelude::*, px, rgb};

use crate::models::BoardModel;
use crate::ui::theme::{
    BOARD_PADDING, BORDER_COLOR, PANEL_BG, SIDE_PANEL_BG, TEXT_PRIMARY, TEXT_SECONDARY,
};

const BUTTON_BG: u32 = 0x3a3a3a;
const BUTTON_HOVER_BG: u32 = 0x4a4a4a;
const ERROR_TEXT: u32 = 0xcc6666;

/// Render the side panel for a given board model.
/// Returns a Div element that can be used as a child.
pub fn render_side_panel(model: &Entity<BoardModel>, cx: &App) -> Div {
    let board = model.read(cx);

    let turn_line = match board.turn() {
        Some(turn) => format!("Turn: {turn}"),
        None => "No game loaded".to_string(),
    };
    let viewer_line = board
        .viewer()
        .map(|viewer| format!("Viewing as: {viewer}"));
    let last_error = board.last_error().map(str::to_string);
    let history: Vec<String> = board.history().to_vec();

    // Clone model for action closures
    let model_new_game = model.clone();
    let model_refresh = model.clone();
    let model_flip = model.clone();

    let history_content = if history.is_empty() {
        div().text_color(rgb(TEXT_SECONDARY)).child("No moves yet")
    } else {
        div().flex().flex_col().gap_1().children(
            history.into_iter().enumerate().map(|(i, entry)| {
                div()
                    .flex()
                    .gap_2()
                    .child(
                        div()
                            .text_color(rgb(TEXT_SECONDARY))
                            .text_sm()
                            .w(px(32.0))
                            .child(format!("{}.", i + 1)),
                    )
                    .child(
                        div()
                            .text_color(rgb(TEXT_PRIMARY))
                            .text_sm()
                            .flex_1()
                            .child(entry),
                    )
            }),
        )
    };

    let panel = div()
        .flex_1()
        .flex()
        .flex_col()
        .bg(rgb(SIDE_PANEL_BG))
        .border_1()
        .border_color(rgb(BORDER_COLOR))
        .rounded_md()
        .overflow_hidden()
        // Header (fixed)
        .child(
            div()
                .p_4()
                .pb_2()
                .flex()
                .flex_col()
                .gap_1()
                .text_color(rgb(TEXT_PRIMARY))
                .border_b_1()
                .border_color(rgb(BORDER_COLOR))
                .child(turn_line)
                .when_some(viewer_line, |el, line| {
                    el.child(div().text_color(rgb(TEXT_SECONDARY)).text_sm().child(line))
                })
                .when_some(last_error, |el, message| {
                    el.child(div().text_color(rgb(ERROR_TEXT)).text_sm().child(message))
                }),
        )
        // Scrollable history
        .child(
            div()
                .id("history-scroll")
                .flex_1()
                .overflow_y_scroll()
                .p_4()
                .pt_2()
                .child(history_content),
        )
        // Action buttons at bottom
        .child(
            div()
                .flex()
                .items_center()
                .justify_center()
                .gap_2()
                .p_3()
                .border_t_1()
                .border_color(rgb(BORDER_COLOR))
                .child(render_action_button("New Game", move |cx| {
                    model_new_game.update(cx, |board, cx| {
                        board.new_game();
                        cx.notify();
                    });
                }))
                .child(render_action_button("Refresh", move |cx| {
                    model_refresh.update(cx, |board, cx| {
                        board.refresh();
                        cx.notify();
                    });
                }))
                .child(render_action_button("Flip", move |cx| {
                    model_flip.update(cx, |board, cx| {
                        board.flip_board();
                        cx.notify();
                    });
                })),
        );

    div()
        .size_full()
        .flex()
        .flex_col()
        .bg(rgb(PANEL_BG))
        .p(px(BOARD_PADDING))
        .child(panel)
}

/// Render an action button (new game / refresh / flip)
fn render_action_button(
    label: &'static str,
    on_click: impl Fn(&mut App) + 'static,
) -> impl IntoElement {
    div()
        .id(SharedString::from(format!("action-{label}")))
        .px_3()
        .py_2()
        .rounded(px(4.0))
        .text_color(rgb(TEXT_PRIMARY))
        .text_sm()
        .bg(rgb(BUTTON_BG))
        .cursor_pointer()
        .hover(|s| s.bg(rgb(BUTTON_HOVER_BG)))
        .on_click(move |_ev, _window, cx| {
            on_click(cx);
        })
        .child(label)
}
