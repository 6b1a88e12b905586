use serde::{Deserialize, Serialize};

use crate::models::game::PlayerSlot;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionToken {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SessionClaims {
    pub sub: String, // player display name
    pub game_id: String,
    pub player: PlayerSlot,
    pub exp: usize,
    pub iat: usize,
}
