use crate::state::AppState;
use axum::Router;

pub mod crops;
pub mod handlers;
pub mod help;
pub mod soil;

pub fn router() -> Router<AppState> {
    handlers::advice_routes()
}
