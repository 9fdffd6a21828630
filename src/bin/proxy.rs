//! Thin HTTP proxy in front of the chessbot engine service.
//!
//! Forwards `/start`, `/state` and `/move` to the backend. The stringly-typed
//! `/state` payload is decoded through the coordinate codec and re-served as
//! a versioned structured snapshot document, so downstream consumers never
//! see `"(col,row)"` tuples. Moves are forwarded verbatim - legality is the
//! engine's business.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use chessbot_client::api::MoveRequest;
use chessbot_client::domain::codec::{self, DecodeError, StatePayload};
use chessbot_client::domain::{BoardSnapshot, Color, Square};

const SNAPSHOT_VERSION: u32 = 1;

/// Proxy for the chessbot engine service.
#[derive(Parser)]
#[command(name = "chessbot-proxy", version)]
struct Args {
    /// Base URL of the engine service to forward to
    #[arg(long, env = "CHESS_SERVER_URL", default_value = "http://localhost:8000")]
    backend: String,
    /// Address to listen on
    #[arg(long, env = "PROXY_LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    listen: String,
}

#[derive(Clone)]
struct ProxyState {
    http: reqwest::Client,
    backend: String,
}

impl ProxyState {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.backend.trim_end_matches('/'), path)
    }
}

#[derive(Error, Debug)]
enum ProxyError {
    #[error("engine service unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("engine service returned status {0}")]
    UpstreamStatus(u16),
    #[error("engine service sent an undecodable payload: {0}")]
    Decode(#[from] DecodeError),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "proxy request failed");
        let body = Json(MessageDoc {
            message: self.to_string(),
        });
        (StatusCode::BAD_GATEWAY, body).into_response()
    }
}

#[derive(Serialize)]
struct MessageDoc {
    message: String,
}

/// One piece placement in the structured snapshot document.
#[derive(Serialize)]
struct PieceDoc {
    square: Square,
    piece: String,
}

/// One power entry: the squares a piece threatens or defends, in the order
/// the engine reported them.
#[derive(Serialize)]
struct PowerDoc {
    square: Square,
    targets: Vec<Square>,
}

/// Structured, versioned replacement for the backend's stringly-typed
/// `/state` payload. Squares are `{row, col}` objects in normalized space.
#[derive(Serialize)]
struct SnapshotDoc {
    snapshot_version: u32,
    width: u32,
    height: u32,
    turn: Color,
    pieces: Vec<PieceDoc>,
    power: Vec<PowerDoc>,
    history: Vec<String>,
}

impl From<&BoardSnapshot> for SnapshotDoc {
    fn from(snapshot: &BoardSnapshot) -> Self {
        let mut pieces: Vec<PieceDoc> = snapshot
            .pieces()
            .map(|(square, label)| PieceDoc {
                square,
                piece: label.to_string(),
            })
            .collect();
        pieces.sort_by_key(|p| (p.square.row, p.square.col));

        let mut power: Vec<PowerDoc> = snapshot
            .power_entries()
            .map(|(square, targets)| PowerDoc {
                square,
                targets: targets.to_vec(),
            })
            .collect();
        power.sort_by_key(|p| (p.square.row, p.square.col));

        Self {
            snapshot_version: SNAPSHOT_VERSION,
            width: snapshot.width(),
            height: snapshot.height(),
            turn: snapshot.turn(),
            pieces,
            power,
            history: snapshot.history().to_vec(),
        }
    }
}

/// Inbound move in structured form; converted to the backend's
/// `{file, rank}` wire shape before forwarding.
#[derive(Deserialize)]
struct MoveDoc {
    from: Square,
    to: Square,
}

fn check_status(response: &reqwest::Response) -> Result<(), ProxyError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ProxyError::UpstreamStatus(status.as_u16()))
    }
}

async fn start(State(state): State<ProxyState>) -> Result<Json<MessageDoc>, ProxyError> {
    let response = state.http.get(state.url("/start")).send().await?;
    check_status(&response)?;
    Ok(Json(MessageDoc {
        message: "game started".to_string(),
    }))
}

async fn board_state(State(state): State<ProxyState>) -> Result<Json<SnapshotDoc>, ProxyError> {
    let response = state.http.get(state.url("/state")).send().await?;
    check_status(&response)?;
    let payload: StatePayload = response.json().await?;
    let snapshot = codec::decode_state(payload)?;
    Ok(Json(SnapshotDoc::from(&snapshot)))
}

async fn submit_move(
    State(state): State<ProxyState>,
    Json(mv): Json<MoveDoc>,
) -> Result<Json<MessageDoc>, ProxyError> {
    let wire_move = MoveRequest::from_squares(mv.from, mv.to);
    let response = state
        .http
        .post(state.url("/move"))
        .json(&wire_move)
        .send()
        .await?;
    check_status(&response)?;
    Ok(Json(MessageDoc {
        message: "move submitted".to_string(),
    }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let state = ProxyState {
        http: reqwest::Client::new(),
        backend: args.backend,
    };

    let router = Router::new()
        .route("/start", get(start))
        .route("/state", get(board_state))
        .route("/move", post(submit_move))
        .with_state(state);

    tracing::info!(listen = %args.listen, "proxy listening");
    let listener = tokio::net::TcpListener::bind(&args.listen).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snapshot_doc_is_sorted_and_versioned() {
        let snapshot = codec::decode_state(
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
                    "history": [],
                },
                "turn": "White",
            }))
            .unwrap(),
        )
        .unwrap();

        let doc = SnapshotDoc::from(&snapshot);
        assert_eq!(doc.snapshot_version, SNAPSHOT_VERSION);
        assert_eq!(doc.pieces.len(), 2);
        // Sorted by (row, col): the rook at (0,0) comes first.
        assert_eq!(doc.pieces[0].piece, "white_rook");
        assert_eq!(doc.pieces[1].square, Square::new(1, 4));
        assert_eq!(
            doc.power[0].targets,
            vec![Square::new(2, 4), Square::new(3, 4)]
        );
    }

    #[test]
    fn test_move_doc_accepts_structured_squares() {
        let mv: MoveDoc = serde_json::from_value(json!({
            "from": { "row": 1, "col": 4 },
            "to": { "row": 3, "col": 4 },
        }))
        .unwrap();
        let wire = MoveRequest::from_squares(mv.from, mv.to);
        assert_eq!(
            serde_json::to_value(wire).unwrap(),
            json!({
                "from": { "file": 4, "rank": 1 },
                "to": { "file": 4, "rank": 3 },
            })
        );
    }
}
