//! Application setup and window creation.

use std::sync::Arc;

use gpui::{App, Bounds, WindowBounds, WindowOptions, prelude::*, px, size};
use gpui_component::Root;

use crate::api::EngineClient;
use crate::models::BoardModel;
use crate::ui::views::BoardView;

/// Initialize and run the board application: build the client, fetch the
/// initial snapshot, then open the window.
pub fn run(cx: &mut App, server_url: String) {
    gpui_component::init(cx);

    let client = Arc::new(EngineClient::new(server_url));
    tracing::info!(url = client.base_url(), "connecting to engine service");

    // Create the board model and do the initial fetch
    let model = cx.new(|_| BoardModel::new(client));
    model.update(cx, |board, _| board.refresh());

    let bounds = Bounds::centered(None, size(px(900.0), px(600.0)), cx);
    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|cx| BoardView::new(model, cx));
            cx.new(|cx| Root::new(view, window, cx))
        },
    )
    .unwrap();
}
