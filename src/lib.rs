pub mod api;
pub mod app;
pub mod domain;
pub mod models;
pub mod ui;
