use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use tracing::{debug, info, warn};

use crate::{
    models::game::{Choice, Game, GameStatus, PlayerSlot},
    repositories::{
        errors::game_repository_errors::GameRepositoryError, game_repository::GameRepository,
    },
    services::{
        errors::game_service_errors::GameServiceError,
        round_service::{RoundReport, RoundService},
    },
};

const MAX_UPDATE_ATTEMPTS: usize = 5;

/// One async mutex per game id. Entries nobody holds or waits on are dropped
/// on the next acquire.
#[derive(Default)]
struct GameLocks {
    locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl GameLocks {
    async fn acquire(&self, game_id: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks.entry(game_id.to_string()).or_default().clone()
        };
        lock.lock_owned().await
    }
}

pub struct GameService {
    repository: Arc<dyn GameRepository + Send + Sync>,
    round_service: RoundService,
    locks: GameLocks,
}

impl GameService {
    pub fn new(
        repository: Arc<dyn GameRepository + Send + Sync>,
        round_service: RoundService,
    ) -> Self {
        GameService {
            repository,
            round_service,
            locks: GameLocks::default(),
        }
    }

    pub async fn create_game(&self, player_name: &str) -> Result<Game, GameServiceError> {
        let player_name = player_name.trim();
        if player_name.is_empty() {
            return Err(GameServiceError::ValidationError(
                "Player name cannot be empty".to_string(),
            ));
        }

        let game = Game::new(player_name);
        self.repository.create_game(&game).await?;

        info!("Created game {} for {}", game.id, player_name);
        Ok(game)
    }

    pub async fn join_game(
        &self,
        game_id: &str,
        player_name: &str,
    ) -> Result<Game, GameServiceError> {
        validate_game_id(game_id)?;
        let player_name = player_name.trim();
        if player_name.is_empty() {
            return Err(GameServiceError::ValidationError(
                "Player name cannot be empty".to_string(),
            ));
        }

        let (game, ()) = self
            .update_game(game_id, |game| {
                if game.status != GameStatus::Waiting {
                    return Err(GameServiceError::InvalidState(
                        "Game is already full".to_string(),
                    ));
                }
                game.player2 = Some(player_name.to_string());
                game.status = GameStatus::Playing;
                Ok(())
            })
            .await?;

        info!("{} joined game {}", player_name, game.id);
        Ok(game)
    }

    /// Resolve which seat `username` occupies in the game.
    pub async fn login(
        &self,
        username: &str,
        game_id: &str,
    ) -> Result<PlayerSlot, GameServiceError> {
        validate_game_id(game_id)?;
        let username = username.trim();
        if username.is_empty() {
            return Err(GameServiceError::ValidationError(
                "Username cannot be empty".to_string(),
            ));
        }

        let game = self.get_game(game_id).await?;
        let player = game
            .slot_of(username)
            .ok_or(GameServiceError::PlayerNotInGame)?;

        debug!("{} logged in to game {} as {}", username, game_id, player);
        Ok(player)
    }

    pub async fn make_choice(
        &self,
        game_id: &str,
        player: PlayerSlot,
        choice: &str,
    ) -> Result<(Game, RoundReport), GameServiceError> {
        validate_game_id(game_id)?;
        let choice = choice
            .parse::<Choice>()
            .map_err(|e| GameServiceError::ValidationError(e.to_string()))?;

        let (game, report) = self
            .update_game(game_id, |game| {
                self.round_service
                    .apply_choice(game, player, choice)
                    .map_err(GameServiceError::from)
            })
            .await?;

        if let Some(winner) = report.winner {
            info!("Game {} finished, winner: {}", game.id, winner);
        } else if let Some(outcome) = report.round_winner {
            debug!("Game {} round resolved: {:?}", game.id, outcome);
        }
        Ok((game, report))
    }

    pub async fn get_game(&self, game_id: &str) -> Result<Game, GameServiceError> {
        validate_game_id(game_id)?;
        self.repository
            .get_game(game_id)
            .await?
            .ok_or(GameServiceError::GameNotFound)
    }

    /// Read-modify-write of one game, serialized per id within this process and
    /// guarded by the record version against writers in other processes.
    async fn update_game<T, F>(
        &self,
        game_id: &str,
        mut mutate: F,
    ) -> Result<(Game, T), GameServiceError>
    where
        F: FnMut(&mut Game) -> Result<T, GameServiceError>,
    {
        let _guard = self.locks.acquire(game_id).await;

        for attempt in 1..=MAX_UPDATE_ATTEMPTS {
            let mut game = self
                .repository
                .get_game(game_id)
                .await?
                .ok_or(GameServiceError::GameNotFound)?;

            let expected_version = game.version;
            let output = mutate(&mut game)?;
            game.version = expected_version + 1;
            game.updated_at = Utc::now();

            match self.repository.replace_game(&game, expected_version).await {
                Ok(()) => return Ok((game, output)),
                Err(GameRepositoryError::VersionConflict) => {
                    warn!(
                        "Version conflict on game {} (attempt {}/{})",
                        game_id, attempt, MAX_UPDATE_ATTEMPTS
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(GameServiceError::Conflict(format!(
            "Game {} is being modified concurrently, please retry",
            game_id
        )))
    }
}

fn validate_game_id(game_id: &str) -> Result<(), GameServiceError> {
    if game_id.trim().is_empty() {
        return Err(GameServiceError::ValidationError(
            "Game ID cannot be empty".to_string(),
        ));
    }
    Ok(())
}
