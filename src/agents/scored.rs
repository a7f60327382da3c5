//! Agent driven by an external move scorer.

use tracing::warn;

use crate::core::{GameState, Move, Player};
use crate::mcts::policy::first_max_by;
use crate::nn::{check_scores, CircuitEncoder, MoveScorer, ScorerError, StateEncoder};

use super::Agent;

/// Agent that plays the legal move its scorer rates highest.
///
/// The state is encoded with [`CircuitEncoder`]; the scorer returns one
/// score per entry of the 50-move space. Ties go to the first legal move in
/// `valid_moves` order. When the scorer fails, the agent logs a warning and
/// falls back to the first legal move instead of giving up its turn.
pub struct ScoredAgent<S: MoveScorer> {
    player: Player,
    scorer: S,
    name: String,
}

impl<S: MoveScorer> ScoredAgent<S> {
    /// Create an agent for `player` backed by `scorer`.
    pub fn new(player: Player, scorer: S) -> Self {
        Self {
            player,
            scorer,
            name: "Scored".to_string(),
        }
    }

    /// Override the display name (e.g. the model's name).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The backing scorer.
    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    fn scores(&self, state: &GameState) -> Result<Vec<f32>, ScorerError> {
        let encoded = CircuitEncoder.encode(state);
        let scores = self.scorer.score(&encoded)?;
        check_scores(&scores)?;
        Ok(scores)
    }
}

impl<S: MoveScorer> Agent for ScoredAgent<S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn player(&self) -> Player {
        self.player
    }

    fn select_move(&mut self, state: &GameState) -> Option<Move> {
        let moves = state.valid_moves();
        let first = *moves.first()?;

        let scores = match self.scores(state) {
            Ok(scores) => scores,
            Err(err) => {
                warn!(%err, agent = %self.name, fallback = %first, "scorer failed, playing first legal move");
                return Some(first);
            }
        };

        let best = first_max_by(moves.iter().map(|mv| f64::from(scores[mv.index()])));
        match best {
            Some(i) => Some(moves[i]),
            None => {
                warn!(agent = %self.name, fallback = %first, "no usable score, playing first legal move");
                Some(first)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GateKind, MOVE_SPACE_SIZE};
    use crate::nn::{EncodedState, TableScorer, UniformScorer};

    struct Failing;

    impl MoveScorer for Failing {
        fn score(&self, _: &EncodedState) -> Result<Vec<f32>, ScorerError> {
            Err(ScorerError::Backend("no model".into()))
        }
    }

    #[test]
    fn test_scored_agent_prefers_highest_legal() {
        let mut table = vec![0.0; MOVE_SPACE_SIZE];
        // Illegal at the opening: slot 9 has no resolved inputs yet
        table[Move::new(9, GateKind::Xor).index()] = 10.0;
        table[Move::new(3, GateKind::Nand).index()] = 5.0;

        let mut agent = ScoredAgent::new(Player::One, TableScorer::new(table));
        let mv = agent.select_move(&GameState::standard());

        assert_eq!(mv, Some(Move::new(3, GateKind::Nand)));
    }

    #[test]
    fn test_scored_agent_ties_go_first() {
        let mut agent = ScoredAgent::new(Player::One, UniformScorer);
        let state = GameState::standard();

        assert_eq!(agent.select_move(&state), Some(state.valid_moves()[0]));
    }

    #[test]
    fn test_scored_agent_falls_back_on_error() {
        let state = GameState::standard();
        let mut failing = ScoredAgent::new(Player::One, Failing).with_name("broken");
        let mut short = ScoredAgent::new(Player::One, TableScorer::new(vec![1.0; 7]));

        assert_eq!(failing.name(), "broken");
        assert_eq!(failing.select_move(&state), Some(state.valid_moves()[0]));
        assert_eq!(short.select_move(&state), Some(state.valid_moves()[0]));
    }

    #[test]
    fn test_scored_agent_nan_scores_fall_back() {
        let state = GameState::standard();
        let mut agent = ScoredAgent::new(Player::Two, TableScorer::new(vec![f32::NAN; MOVE_SPACE_SIZE]));

        assert_eq!(agent.select_move(&state), Some(state.valid_moves()[0]));
    }
}
