//! Portal Server
//!
//! Registration, login and the gated hotel pages on a single axum router.
//! `main.rs` wires settings, the database and the listener around
//! [`app::build_app`].

pub mod app;
pub mod pages;
pub mod settings;

pub use app::{AppOptions, build_app};
pub use settings::{Environment, Settings, SettingsError};
