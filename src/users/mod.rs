use axum::Router;

use crate::state::AppState;

pub mod dto;
pub mod handlers;
pub mod memory;
pub mod model;
pub mod password;
pub mod repo;
pub mod store;

pub fn router() -> Router<AppState> {
    handlers::api_routes()
}
