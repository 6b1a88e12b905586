use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

pub fn create_app(state: state::AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::client::index))
        .route("/static/script.js", get(routes::client::script))
        .route("/health", get(routes::health::health_check))
        .route("/config", get(routes::config::client_config))
        .merge(routes::game::routes())
        .merge(routes::auth::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
