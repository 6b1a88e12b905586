use serde::{Deserialize, Serialize};

use crate::{
    models::game::{Choice, Game, GameStatus, PlayerSlot, RoundOutcome},
    services::errors::round_service_errors::RoundServiceError,
};

pub const DEFAULT_WINNING_SCORE: u32 = 3;

/// What a single submission did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round_complete: bool,
    pub round_winner: Option<RoundOutcome>,
    pub winner: Option<PlayerSlot>,
}

/// Resolve a round from player1's and player2's choices.
pub fn resolve_round(player1: Choice, player2: Choice) -> RoundOutcome {
    if player1 == player2 {
        RoundOutcome::Tie
    } else if player1.beats(player2) {
        RoundOutcome::Player1
    } else {
        RoundOutcome::Player2
    }
}

#[derive(Debug, Clone)]
pub struct RoundService {
    winning_score: u32,
}

impl Default for RoundService {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundService {
    pub fn new() -> Self {
        RoundService {
            winning_score: DEFAULT_WINNING_SCORE,
        }
    }

    /// Threshold is clamped to at least one win.
    pub fn with_winning_score(winning_score: u32) -> Self {
        RoundService {
            winning_score: winning_score.max(1),
        }
    }

    pub fn winning_score(&self) -> u32 {
        self.winning_score
    }

    /// Record `choice` for `player` and resolve the round once both players
    /// have chosen. Leaves `game` untouched on error.
    pub fn apply_choice(
        &self,
        game: &mut Game,
        player: PlayerSlot,
        choice: Choice,
    ) -> Result<RoundReport, RoundServiceError> {
        match game.status {
            GameStatus::Waiting => return Err(RoundServiceError::GameNotStarted),
            GameStatus::Finished => return Err(RoundServiceError::GameFinished),
            GameStatus::Playing => {}
        }

        if game.choice(player).is_some() {
            return Err(RoundServiceError::ChoiceAlreadyMade(player));
        }

        game.set_choice(player, Some(choice));

        let (Some(player1_choice), Some(player2_choice)) =
            (game.player1_choice, game.player2_choice)
        else {
            return Ok(RoundReport {
                round_complete: false,
                round_winner: None,
                winner: None,
            });
        };

        let outcome = resolve_round(player1_choice, player2_choice);

        if let Some(round_winner) = outcome.winner() {
            let score = game.score_mut(round_winner);
            *score += 1;

            if *score >= self.winning_score {
                // Final round keeps its choices so both players can see the last throw.
                game.status = GameStatus::Finished;
                game.winner = Some(round_winner);
                return Ok(RoundReport {
                    round_complete: true,
                    round_winner: Some(outcome),
                    winner: Some(round_winner),
                });
            }
        }

        game.clear_choices();
        game.round += 1;

        Ok(RoundReport {
            round_complete: true,
            round_winner: Some(outcome),
            winner: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn playing_game() -> Game {
        let mut game = Game::new("Alice");
        game.player2 = Some("Bob".to_string());
        game.status = GameStatus::Playing;
        game
    }

    fn play_round(
        service: &RoundService,
        game: &mut Game,
        player1: Choice,
        player2: Choice,
    ) -> RoundReport {
        service
            .apply_choice(game, PlayerSlot::Player1, player1)
            .unwrap();
        service
            .apply_choice(game, PlayerSlot::Player2, player2)
            .unwrap()
    }

    fn any_choice() -> impl Strategy<Value = Choice> {
        prop_oneof![Just(Choice::Rock), Just(Choice::Paper), Just(Choice::Scissors)]
    }

    #[rstest]
    #[case(Choice::Rock, Choice::Scissors, RoundOutcome::Player1)]
    #[case(Choice::Scissors, Choice::Paper, RoundOutcome::Player1)]
    #[case(Choice::Paper, Choice::Rock, RoundOutcome::Player1)]
    #[case(Choice::Scissors, Choice::Rock, RoundOutcome::Player2)]
    #[case(Choice::Paper, Choice::Scissors, RoundOutcome::Player2)]
    #[case(Choice::Rock, Choice::Paper, RoundOutcome::Player2)]
    #[case(Choice::Rock, Choice::Rock, RoundOutcome::Tie)]
    #[case(Choice::Paper, Choice::Paper, RoundOutcome::Tie)]
    #[case(Choice::Scissors, Choice::Scissors, RoundOutcome::Tie)]
    fn test_resolve_round(
        #[case] player1: Choice,
        #[case] player2: Choice,
        #[case] expected: RoundOutcome,
    ) {
        assert_eq!(resolve_round(player1, player2), expected);
    }

    proptest! {
        #[test]
        fn prop_resolution_is_symmetric_opposite(a in any_choice(), b in any_choice()) {
            let forward = resolve_round(a, b);
            let backward = resolve_round(b, a);
            match forward {
                RoundOutcome::Player1 => prop_assert_eq!(backward, RoundOutcome::Player2),
                RoundOutcome::Player2 => prop_assert_eq!(backward, RoundOutcome::Player1),
                RoundOutcome::Tie => {
                    prop_assert_eq!(a, b);
                    prop_assert_eq!(backward, RoundOutcome::Tie);
                }
            }
        }

        #[test]
        fn prop_round_changes_at_most_one_score_by_one(a in any_choice(), b in any_choice()) {
            let service = RoundService::new();
            let mut game = playing_game();
            game.player1_score = 1;
            game.player2_score = 1;

            let report = play_round(&service, &mut game, a, b);
            let total_before = 2;
            let total_after = game.player1_score + game.player2_score;

            prop_assert!(report.round_complete);
            match report.round_winner {
                Some(RoundOutcome::Tie) => prop_assert_eq!(total_after, total_before),
                Some(RoundOutcome::Player1) => {
                    prop_assert_eq!(game.player1_score, 2);
                    prop_assert_eq!(game.player2_score, 1);
                }
                Some(RoundOutcome::Player2) => {
                    prop_assert_eq!(game.player1_score, 1);
                    prop_assert_eq!(game.player2_score, 2);
                }
                None => prop_assert!(false, "completed round without an outcome"),
            }
        }

        #[test]
        fn prop_finished_iff_threshold_reached(
            rounds in proptest::collection::vec((any_choice(), any_choice()), 1..30)
        ) {
            let service = RoundService::new();
            let mut game = playing_game();

            for (a, b) in rounds {
                if game.status == GameStatus::Finished {
                    break;
                }
                let report = play_round(&service, &mut game, a, b);
                let reached = game.player1_score >= DEFAULT_WINNING_SCORE
                    || game.player2_score >= DEFAULT_WINNING_SCORE;

                prop_assert_eq!(game.status == GameStatus::Finished, reached);
                prop_assert_eq!(game.winner.is_some(), reached);
                prop_assert_eq!(report.winner, game.winner);
                if reached {
                    prop_assert_eq!(game.player1_choice, Some(a));
                    prop_assert_eq!(game.player2_choice, Some(b));
                } else {
                    prop_assert!(game.player1_choice.is_none());
                    prop_assert!(game.player2_choice.is_none());
                }
            }
        }
    }

    #[test]
    fn test_first_choice_does_not_resolve_round() {
        let service = RoundService::new();
        let mut game = playing_game();

        let report = service
            .apply_choice(&mut game, PlayerSlot::Player2, Choice::Paper)
            .unwrap();

        assert!(!report.round_complete);
        assert!(report.round_winner.is_none());
        assert_eq!(game.player2_choice, Some(Choice::Paper));
        assert!(game.player1_choice.is_none());
        assert_eq!(game.player1_score + game.player2_score, 0);
    }

    #[test]
    fn test_tie_clears_choices_without_scoring() {
        let service = RoundService::new();
        let mut game = playing_game();

        let report = play_round(&service, &mut game, Choice::Rock, Choice::Rock);

        assert_eq!(report.round_winner, Some(RoundOutcome::Tie));
        assert!(report.winner.is_none());
        assert_eq!(game.player1_score, 0);
        assert_eq!(game.player2_score, 0);
        assert!(game.player1_choice.is_none());
        assert!(game.player2_choice.is_none());
        assert_eq!(game.status, GameStatus::Playing);
        assert_eq!(game.round, 2);
    }

    #[test]
    fn test_three_wins_finish_the_game() {
        let service = RoundService::new();
        let mut game = playing_game();

        for expected_score in 1..=2 {
            let report = play_round(&service, &mut game, Choice::Rock, Choice::Scissors);
            assert_eq!(report.round_winner, Some(RoundOutcome::Player1));
            assert!(report.winner.is_none());
            assert_eq!(game.player1_score, expected_score);
            assert_eq!(game.status, GameStatus::Playing);
            assert!(game.winner.is_none());
        }

        let report = play_round(&service, &mut game, Choice::Rock, Choice::Scissors);

        assert_eq!(report.winner, Some(PlayerSlot::Player1));
        assert_eq!(game.player1_score, 3);
        assert_eq!(game.player2_score, 0);
        assert_eq!(game.status, GameStatus::Finished);
        assert_eq!(game.winner, Some(PlayerSlot::Player1));
        assert_eq!(game.player1_choice, Some(Choice::Rock));
        assert_eq!(game.player2_choice, Some(Choice::Scissors));
        assert_eq!(game.round, 3);
    }

    #[test]
    fn test_duplicate_choice_is_rejected_and_first_kept() {
        let service = RoundService::new();
        let mut game = playing_game();

        service
            .apply_choice(&mut game, PlayerSlot::Player1, Choice::Rock)
            .unwrap();
        let result = service.apply_choice(&mut game, PlayerSlot::Player1, Choice::Paper);

        assert_eq!(
            result,
            Err(RoundServiceError::ChoiceAlreadyMade(PlayerSlot::Player1))
        );
        assert_eq!(game.player1_choice, Some(Choice::Rock));
    }

    #[test]
    fn test_choice_rejected_while_waiting() {
        let service = RoundService::new();
        let mut game = Game::new("Alice");
        let before = game.clone();

        let result = service.apply_choice(&mut game, PlayerSlot::Player1, Choice::Rock);

        assert_eq!(result, Err(RoundServiceError::GameNotStarted));
        assert_eq!(game, before);
    }

    #[test]
    fn test_choice_rejected_after_finish() {
        let service = RoundService::with_winning_score(1);
        let mut game = playing_game();
        play_round(&service, &mut game, Choice::Paper, Choice::Scissors);
        assert_eq!(game.winner, Some(PlayerSlot::Player2));
        let before = game.clone();

        let result = service.apply_choice(&mut game, PlayerSlot::Player1, Choice::Rock);

        assert_eq!(result, Err(RoundServiceError::GameFinished));
        assert_eq!(game, before);
    }

    #[test]
    fn test_winning_score_is_at_least_one() {
        assert_eq!(RoundService::with_winning_score(0).winning_score(), 1);
        assert_eq!(RoundService::with_winning_score(5).winning_score(), 5);
        assert_eq!(RoundService::new().winning_score(), DEFAULT_WINNING_SCORE);
    }
}
