use crate::repositories::errors::game_repository_errors::GameRepositoryError;
use crate::services::errors::round_service_errors::RoundServiceError;

#[derive(Debug)]
pub enum GameServiceError {
    GameNotFound,
    ValidationError(String),
    InvalidState(String),
    PlayerNotInGame,
    Conflict(String),
    RepositoryError(GameRepositoryError),
}

impl std::fmt::Display for GameServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameServiceError::GameNotFound => write!(f, "Game not found"),
            GameServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            GameServiceError::InvalidState(msg) => write!(f, "{}", msg),
            GameServiceError::PlayerNotInGame => write!(f, "Player is not part of this game"),
            GameServiceError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            GameServiceError::RepositoryError(err) => write!(f, "Repository error: {}", err),
        }
    }
}

impl std::error::Error for GameServiceError {}

impl From<GameRepositoryError> for GameServiceError {
    fn from(err: GameRepositoryError) -> Self {
        match err {
            GameRepositoryError::NotFound => GameServiceError::GameNotFound,
            other => GameServiceError::RepositoryError(other),
        }
    }
}

impl From<RoundServiceError> for GameServiceError {
    fn from(err: RoundServiceError) -> Self {
        GameServiceError::InvalidState(err.to_string())
    }
}
