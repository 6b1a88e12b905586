use serde::{Deserialize, Serialize};

// Fields are optional so that missing values surface as validation errors
// with a readable message instead of a body rejection.

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateGameRequest {
    pub player_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JoinGameRequest {
    pub game_id: Option<String>,
    pub player_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub game_id: Option<String>,
}

/// The game and seat come from the session, only the move travels in the body.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MakeChoiceRequest {
    pub choice: Option<String>,
}
