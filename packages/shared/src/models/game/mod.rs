pub mod requests;
pub mod responses;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Whether this choice defeats `other` under the classic rules.
    pub fn beats(self, other: Choice) -> bool {
        matches!(
            (self, other),
            (Choice::Rock, Choice::Scissors)
                | (Choice::Scissors, Choice::Paper)
                | (Choice::Paper, Choice::Rock)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseChoiceError(pub String);

impl fmt::Display for ParseChoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid choice '{}', expected one of rock, paper, scissors",
            self.0
        )
    }
}

impl std::error::Error for ParseChoiceError {}

impl FromStr for Choice {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Choice::Rock),
            "paper" => Ok(Choice::Paper),
            "scissors" => Ok(Choice::Scissors),
            _ => Err(ParseChoiceError(s.to_string())),
        }
    }
}

/// One of the two fixed seats in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerSlot {
    Player1,
    Player2,
}

impl PlayerSlot {
    pub fn opponent(self) -> PlayerSlot {
        match self {
            PlayerSlot::Player1 => PlayerSlot::Player2,
            PlayerSlot::Player2 => PlayerSlot::Player1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerSlot::Player1 => "player1",
            PlayerSlot::Player2 => "player2",
        }
    }
}

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Waiting,
    Playing,
    Finished,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Waiting => f.write_str("waiting"),
            GameStatus::Playing => f.write_str("playing"),
            GameStatus::Finished => f.write_str("finished"),
        }
    }
}

/// Result of a single resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    Player1,
    Player2,
    Tie,
}

impl RoundOutcome {
    pub fn winner(self) -> Option<PlayerSlot> {
        match self {
            RoundOutcome::Player1 => Some(PlayerSlot::Player1),
            RoundOutcome::Player2 => Some(PlayerSlot::Player2),
            RoundOutcome::Tie => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub player1: String,
    pub player2: Option<String>,
    pub player1_choice: Option<Choice>,
    pub player2_choice: Option<Choice>,
    pub player1_score: u32,
    pub player2_score: u32,
    pub status: GameStatus,
    pub winner: Option<PlayerSlot>,
    pub round: u32,
    pub version: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    pub fn new(player1: &str) -> Self {
        let now = Utc::now();
        Game {
            id: Uuid::new_v4().to_string(),
            player1: player1.to_string(),
            player2: None,
            player1_choice: None,
            player2_choice: None,
            player1_score: 0,
            player2_score: 0,
            status: GameStatus::Waiting,
            winner: None,
            round: 1,
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn player_name(&self, slot: PlayerSlot) -> Option<&str> {
        match slot {
            PlayerSlot::Player1 => Some(self.player1.as_str()),
            PlayerSlot::Player2 => self.player2.as_deref(),
        }
    }

    /// Seat occupied by `name`, checking player1 first.
    pub fn slot_of(&self, name: &str) -> Option<PlayerSlot> {
        if self.player1 == name {
            Some(PlayerSlot::Player1)
        } else if self.player2.as_deref() == Some(name) {
            Some(PlayerSlot::Player2)
        } else {
            None
        }
    }

    pub fn choice(&self, slot: PlayerSlot) -> Option<Choice> {
        match slot {
            PlayerSlot::Player1 => self.player1_choice,
            PlayerSlot::Player2 => self.player2_choice,
        }
    }

    pub fn set_choice(&mut self, slot: PlayerSlot, choice: Option<Choice>) {
        match slot {
            PlayerSlot::Player1 => self.player1_choice = choice,
            PlayerSlot::Player2 => self.player2_choice = choice,
        }
    }

    pub fn score(&self, slot: PlayerSlot) -> u32 {
        match slot {
            PlayerSlot::Player1 => self.player1_score,
            PlayerSlot::Player2 => self.player2_score,
        }
    }

    pub fn score_mut(&mut self, slot: PlayerSlot) -> &mut u32 {
        match slot {
            PlayerSlot::Player1 => &mut self.player1_score,
            PlayerSlot::Player2 => &mut self.player2_score,
        }
    }

    pub fn clear_choices(&mut self) {
        self.player1_choice = None;
        self.player2_choice = None;
    }
}
