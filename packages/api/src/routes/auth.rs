use axum::{extract::State, routing::post, Json, Router};
use lambda_http::tracing::{debug, error};

use crate::{error::ApiError, extract::ApiJson, routes::game, state::AppState};
use shared::models::game::requests::LoginRequest;
use shared::models::game::responses::SessionResponse;

pub fn routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Opens a session for a player already seated in the game.
async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    game::require_fields(&[
        ("username", &payload.username),
        ("game_id", &payload.game_id),
    ])?;
    let username = payload.username.as_deref().unwrap_or_default().trim();
    let game_id = payload.game_id.as_deref().unwrap_or_default().trim();

    let player = state
        .game_service
        .login(username, game_id)
        .await
        .map_err(|e| {
            error!("Failed to log in {} to game {}: {}", username, game_id, e);
            ApiError::from(e)
        })?;

    debug!("{} logged in to game {} as {}", username, game_id, player);
    game::session_response(&state, game_id, player, username)
}
