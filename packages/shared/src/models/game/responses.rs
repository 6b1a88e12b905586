use serde::{Deserialize, Serialize};

use crate::models::game::{Game, PlayerSlot, RoundOutcome};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionResponse {
    pub success: bool,
    pub game_id: String,
    pub player: PlayerSlot,
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MakeChoiceResponse {
    pub success: bool,
    pub round_complete: bool,
    pub round_winner: Option<RoundOutcome>,
    pub winner: Option<PlayerSlot>,
    pub game: Game,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameResponse {
    pub success: bool,
    pub game: Game,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorResponse {
            success: false,
            message: message.into(),
        }
    }
}
