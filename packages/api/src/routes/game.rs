use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use lambda_http::tracing::{debug, error};

use crate::{
    error::ApiError, extract::ApiJson, middleware::auth::AuthenticatedPlayer, state::AppState,
};
use shared::models::game::requests::{CreateGameRequest, JoinGameRequest, MakeChoiceRequest};
use shared::models::game::responses::{GameResponse, MakeChoiceResponse, SessionResponse};
use shared::models::game::PlayerSlot;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/create_game", post(create_game))
        .route("/join_game", post(join_game))
        .route("/make_choice", post(make_choice))
        .route("/games/{game_id}", get(get_game))
}

/// Rejects the request listing every field that is absent or blank.
pub(crate) fn require_fields(fields: &[(&str, &Option<String>)]) -> Result<(), ApiError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.as_deref().map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiError::BadRequest(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

pub(crate) fn session_response(
    state: &AppState,
    game_id: &str,
    player: PlayerSlot,
    player_name: &str,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = state
        .session_service
        .issue_token(game_id, player, player_name)
        .map_err(|e| {
            error!("Failed to issue session for game {}: {}", game_id, e);
            ApiError::from(e)
        })?;

    Ok(Json(SessionResponse {
        success: true,
        game_id: game_id.to_string(),
        player,
        token: session.token,
        token_type: session.token_type,
        expires_in: session.expires_in,
    }))
}

async fn create_game(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateGameRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    require_fields(&[("player_name", &payload.player_name)])?;
    let player_name = payload.player_name.as_deref().unwrap_or_default();

    let game = state
        .game_service
        .create_game(player_name)
        .await
        .map_err(|e| {
            error!("Failed to create game for {}: {}", player_name, e);
            ApiError::from(e)
        })?;

    session_response(&state, &game.id, PlayerSlot::Player1, &game.player1)
}

async fn join_game(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<JoinGameRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    require_fields(&[
        ("game_id", &payload.game_id),
        ("player_name", &payload.player_name),
    ])?;
    let game_id = payload.game_id.as_deref().unwrap_or_default().trim();
    let player_name = payload.player_name.as_deref().unwrap_or_default();

    let game = state
        .game_service
        .join_game(game_id, player_name)
        .await
        .map_err(|e| {
            error!("Failed to join game {}: {}", game_id, e);
            ApiError::from(e)
        })?;

    let player2 = game.player2.as_deref().unwrap_or(player_name);
    session_response(&state, &game.id, PlayerSlot::Player2, player2)
}

async fn make_choice(
    State(state): State<AppState>,
    session: AuthenticatedPlayer,
    ApiJson(payload): ApiJson<MakeChoiceRequest>,
) -> Result<Json<MakeChoiceResponse>, ApiError> {
    require_fields(&[("choice", &payload.choice)])?;
    let choice = payload.choice.as_deref().unwrap_or_default();

    debug!(
        "Received choice {} from {} in game {}",
        choice, session.player, session.game_id
    );

    let (game, report) = state
        .game_service
        .make_choice(&session.game_id, session.player, choice)
        .await
        .map_err(|e| {
            error!(
                "Failed to apply choice for {} in game {}: {}",
                session.player, session.game_id, e
            );
            ApiError::from(e)
        })?;

    Ok(Json(MakeChoiceResponse {
        success: true,
        round_complete: report.round_complete,
        round_winner: report.round_winner,
        winner: report.winner,
        game,
    }))
}

async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<GameResponse>, ApiError> {
    state
        .game_service
        .get_game(&game_id)
        .await
        .map(|game| {
            Json(GameResponse {
                success: true,
                game,
            })
        })
        .map_err(ApiError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_fields_lists_all_missing() {
        let game_id = None;
        let player_name = Some("  ".to_string());

        let result = require_fields(&[("game_id", &game_id), ("player_name", &player_name)]);

        match result {
            Err(ApiError::BadRequest(msg)) => {
                assert_eq!(msg, "Missing required fields: game_id, player_name")
            }
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_require_fields_accepts_present_values() {
        let choice = Some("rock".to_string());

        assert!(require_fields(&[("choice", &choice)]).is_ok());
    }
}
