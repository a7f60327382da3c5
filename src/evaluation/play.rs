//! Playing games between agents.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::agents::Agent;
use crate::core::{GameConfig, GameState, Move, MoveRecord, Player, PlayerMap};
use crate::rules::MoveError;

use super::config::MatchConfig;
use super::summary::MatchSummary;

/// An agent broke the rules during a match.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The agent returned a move the engine rejected.
    #[error("{player} played illegal move {mv}: {source}")]
    IllegalMove {
        player: Player,
        mv: Move,
        #[source]
        source: MoveError,
    },
}

/// Outcome of one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Winner, or `None` for a draw (including games cut short).
    pub winner: Option<Player>,

    /// Moves in play order.
    pub moves: Vec<MoveRecord>,

    /// Number of moves played.
    pub length: usize,
}

impl GameRecord {
    /// Winner as 0 (draw), 1 or 2.
    #[must_use]
    pub fn winner_id(&self) -> u8 {
        crate::core::winner_id(self.winner)
    }
}

/// Play one game, `one` moving first.
///
/// The game ends when the state is terminal, when the side to move returns
/// `None`, or after `max_moves` moves. Only a terminal state can have a
/// winner; the other two endings are draws.
pub fn play_game<'a>(
    one: &'a mut dyn Agent,
    two: &'a mut dyn Agent,
    config: &GameConfig,
    max_moves: usize,
) -> Result<GameRecord, MatchError> {
    let mut state = GameState::new(config);
    let mut agents = PlayerMap::new(one, two);

    while state.move_count() < max_moves && !state.is_terminal() {
        let player = state.current_player();
        let agent = &mut agents[player];
        debug_assert_eq!(agent.player(), player, "agent seated in the wrong chair");

        let Some(mv) = agent.select_move(&state) else {
            debug!(%player, agent = agent.name(), "agent passed on a live position");
            break;
        };
        state
            .apply_move(mv)
            .map_err(|source| MatchError::IllegalMove { player, mv, source })?;
    }

    let winner = if state.is_terminal() {
        state.winner()
    } else {
        None
    };
    debug_assert!(
        winner.is_some() || !state.is_terminal() || !config.has_opposed_targets(),
        "a finished game with opposed targets has a winner"
    );

    Ok(GameRecord {
        winner,
        moves: state.history().iter().copied().collect(),
        length: state.move_count(),
    })
}

/// Play `config.games` games and aggregate the results.
///
/// Agents are rebuilt for every game from the factories, which receive
/// `config.game_seed(i)` so a whole run is reproducible from one seed.
pub fn evaluate<A, B>(
    mut make_one: impl FnMut(u64) -> A,
    mut make_two: impl FnMut(u64) -> B,
    config: &MatchConfig,
) -> Result<MatchSummary, MatchError>
where
    A: Agent,
    B: Agent,
{
    let mut summary = MatchSummary::new();
    let mut names = None;

    for index in 0..config.games {
        let seed = config.game_seed(index);
        let mut one = make_one(seed);
        let mut two = make_two(seed);
        names.get_or_insert_with(|| (one.name().to_string(), two.name().to_string()));

        let record = play_game(&mut one, &mut two, &config.game, config.max_moves)?;
        debug!(game = index, winner = record.winner_id(), length = record.length, "game finished");
        summary.record(&record);
    }

    let (p1, p2) = names.unwrap_or_default();
    info!(
        p1 = %p1,
        p2 = %p2,
        opposed_targets = config.game.has_opposed_targets(),
        games = summary.games(),
        p1_win_rate = summary.p1_win_rate(),
        p2_win_rate = summary.p2_win_rate(),
        draw_rate = summary.draw_rate(),
        mean_length = summary.mean_length(),
        "evaluation complete"
    );
    Ok(summary)
}
