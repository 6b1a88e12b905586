use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::game::Game;
use crate::repositories::errors::game_repository_errors::GameRepositoryError;
use crate::repositories::game_repository::GameRepository;

/// Process-local game store with the same conditional-write rules as the
/// DynamoDB table. Used for local runs and tests.
#[derive(Default)]
pub struct InMemoryGameRepository {
    games: RwLock<HashMap<String, Game>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn create_game(&self, game: &Game) -> Result<(), GameRepositoryError> {
        let mut games = self.games.write().await;
        if games.contains_key(&game.id) {
            return Err(GameRepositoryError::AlreadyExists);
        }
        games.insert(game.id.clone(), game.clone());
        Ok(())
    }

    async fn get_game(&self, game_id: &str) -> Result<Option<Game>, GameRepositoryError> {
        Ok(self.games.read().await.get(game_id).cloned())
    }

    async fn replace_game(
        &self,
        game: &Game,
        expected_version: u64,
    ) -> Result<(), GameRepositoryError> {
        let mut games = self.games.write().await;
        match games.get_mut(&game.id) {
            None => Err(GameRepositoryError::NotFound),
            Some(stored) if stored.version != expected_version => {
                Err(GameRepositoryError::VersionConflict)
            }
            Some(stored) => {
                *stored = game.clone();
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get_game() {
        let repository = InMemoryGameRepository::new();
        let game = Game::new("Alice");

        repository.create_game(&game).await.unwrap();

        let stored = repository.get_game(&game.id).await.unwrap();
        assert_eq!(stored, Some(game));
    }

    #[tokio::test]
    async fn test_get_unknown_game_returns_none() {
        let repository = InMemoryGameRepository::new();

        let stored = repository.get_game("missing").await.unwrap();
        assert!(stored.is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_id_fails() {
        let repository = InMemoryGameRepository::new();
        let game = Game::new("Alice");

        repository.create_game(&game).await.unwrap();
        let result = repository.create_game(&game).await;

        assert!(matches!(result, Err(GameRepositoryError::AlreadyExists)));
    }

    #[tokio::test]
    async fn test_replace_with_matching_version() {
        let repository = InMemoryGameRepository::new();
        let mut game = Game::new("Alice");
        repository.create_game(&game).await.unwrap();

        game.player2 = Some("Bob".to_string());
        game.version = 1;
        repository.replace_game(&game, 0).await.unwrap();

        let stored = repository.get_game(&game.id).await.unwrap().unwrap();
        assert_eq!(stored.player2.as_deref(), Some("Bob"));
        assert_eq!(stored.version, 1);
    }

    #[tokio::test]
    async fn test_replace_with_stale_version_conflicts() {
        let repository = InMemoryGameRepository::new();
        let mut game = Game::new("Alice");
        repository.create_game(&game).await.unwrap();

        game.version = 1;
        repository.replace_game(&game, 0).await.unwrap();

        let mut stale = game.clone();
        stale.player1_score = 3;
        stale.version = 1;
        let result = repository.replace_game(&stale, 0).await;

        assert!(matches!(result, Err(GameRepositoryError::VersionConflict)));
        let stored = repository.get_game(&game.id).await.unwrap().unwrap();
        assert_eq!(stored.player1_score, 0);
    }

    #[tokio::test]
    async fn test_replace_unknown_game_is_not_found() {
        let repository = InMemoryGameRepository::new();
        let game = Game::new("Alice");

        let result = repository.replace_game(&game, 0).await;

        assert!(matches!(result, Err(GameRepositoryError::NotFound)));
    }
}
