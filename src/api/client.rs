//! Blocking HTTP client for the external chess engine service.
//!
//! The service owns all chess logic; this client only ferries payloads.
//! One request is in flight at a time and failures surface to the caller -
//! no retries are made here.

use serde::Serialize;
use thiserror::Error;

use crate::domain::codec::{self, DecodeError, StatePayload};
use crate::domain::{BoardSnapshot, Square};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request to engine service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("engine service returned status {0}")]
    Status(reqwest::StatusCode),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// A coordinate in the form the engine service expects: file = column,
/// rank = row.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WirePosition {
    pub file: u32,
    pub rank: u32,
}

impl From<Square> for WirePosition {
    fn from(sq: Square) -> Self {
        Self {
            file: sq.col,
            rank: sq.row,
        }
    }
}

/// Body of a `POST /move` request. Forwarded verbatim - the service decides
/// legality.
#[derive(Serialize, Clone, Copy, Debug)]
pub struct MoveRequest {
    pub from: WirePosition,
    pub to: WirePosition,
}

impl MoveRequest {
    pub fn from_squares(from: Square, to: Square) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

pub struct EngineClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl EngineClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a fresh game on the service.
    pub fn start(&self) -> Result<(), ApiError> {
        let response = self.http.get(self.url("/start")).send()?;
        Self::check_status(&response)?;
        Ok(())
    }

    /// Fetch the current game state and decode it into a snapshot.
    pub fn state(&self) -> Result<BoardSnapshot, ApiError> {
        let response = self.http.get(self.url("/state")).send()?;
        Self::check_status(&response)?;
        let payload: StatePayload = response.json()?;
        Ok(codec::decode_state(payload)?)
    }

    /// Submit a move. No validation happens on this side.
    pub fn submit_move(&self, mv: &MoveRequest) -> Result<(), ApiError> {
        let response = self.http.post(self.url("/move")).json(mv).send()?;
        Self::check_status(&response)?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn check_status(response: &reqwest::blocking::Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status(status))
        }
    }
}
