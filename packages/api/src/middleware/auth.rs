use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};

use crate::{error::ApiError, state::AppState};
use shared::models::game::PlayerSlot;

/// Game and seat resolved from the caller's session token.
#[derive(Debug, Clone)]
pub struct AuthenticatedPlayer {
    pub game_id: String,
    pub player: PlayerSlot,
    pub player_name: String,
}

impl FromRequestParts<AppState> for AuthenticatedPlayer {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(ApiError::Unauthorized)?
            .to_str()
            .map_err(|_| ApiError::BadRequest("Invalid Authorization header".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthorized)?;

        let claims = state.session_service.verify_token(token)?;

        Ok(AuthenticatedPlayer {
            game_id: claims.game_id,
            player: claims.player,
            player_name: claims.sub,
        })
    }
}
