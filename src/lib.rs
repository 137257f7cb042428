//! Bootstrap and configuration for the journitag backend.
//!
//! The binary in `main.rs` is a thin wrapper; integration tests and
//! downstream collaborators build the application in-process through
//! [`create_app`].

pub mod app;
pub mod config;
pub mod constants;
pub mod cors;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod uploads;

pub use app::{create_app, AppState};
pub use config::Config;
pub use error::AppError;
