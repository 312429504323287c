use axum::Router;

pub mod bins;
pub mod system;

/// Router for the versioned inventory API.
pub fn router() -> Router {
    Router::new().nest("/api", bins::router())
}
