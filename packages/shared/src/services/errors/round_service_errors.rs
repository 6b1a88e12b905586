use crate::models::game::PlayerSlot;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RoundServiceError {
    GameNotStarted,
    GameFinished,
    ChoiceAlreadyMade(PlayerSlot),
}

impl fmt::Display for RoundServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RoundServiceError::GameNotStarted => {
                write!(f, "Game has not started, waiting for a second player")
            }
            RoundServiceError::GameFinished => write!(f, "Game is already finished"),
            RoundServiceError::ChoiceAlreadyMade(player) => {
                write!(f, "{} has already made a choice this round", player)
            }
        }
    }
}

impl std::error::Error for RoundServiceError {}
