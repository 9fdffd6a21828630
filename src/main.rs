use clap::Parser;
use gpui::Application;
use tracing_subscriber::EnvFilter;

use chessbot_client::app;
use chessbot_client::ui::FsAssets;

/// Desktop board viewer for the chessbot engine service.
#[derive(Parser)]
#[command(name = "chessbot-client", version)]
struct Args {
    /// Base URL of the engine service
    #[arg(long, env = "CHESS_SERVER_URL", default_value = "http://localhost:8000")]
    server_url: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    Application::new()
        .with_assets(FsAssets::new())
        .run(move |cx| app::run(cx, args.server_url));
}
