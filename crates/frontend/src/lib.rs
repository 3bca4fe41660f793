//! Browser frontend: session-aware routing for admin, doctor and patient views

pub mod app;
pub mod auth;
pub mod config;
pub mod guard;
pub mod logging;
pub mod navigator;
pub mod routes;
pub mod storage;
pub mod views;

pub use app::App;
pub use routes::Route;
