pub mod client;

pub use client::{ApiError, EngineClient, MoveRequest, WirePosition};
