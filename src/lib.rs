//! Smart Krishi: a small farmer portal with accounts, village weather, a demo soil
//! analyzer, crop fertilizer advice and a help card.

pub mod advice;
pub mod app;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod error;
pub mod i18n;
pub mod session;
pub mod state;
pub mod storage;
pub mod views;
pub mod weather;

pub use app::build_app;
pub use state::AppState;
