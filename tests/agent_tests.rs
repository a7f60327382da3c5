//! Agent integration tests: every agent kind driving real games.

use gate_duel::agents::{Agent, MctsAgent, RandomAgent, ScoredAgent};
use gate_duel::core::{GameState, Move, Player, MOVE_SPACE_SIZE};
use gate_duel::mcts::MCTSConfig;
use gate_duel::nn::{CircuitEncoder, EncodedState, MoveScorer, ScorerError, StateEncoder};

/// Prefers higher slots regardless of gate.
struct SlotPreference;

impl MoveScorer for SlotPreference {
    fn score(&self, encoded: &EncodedState) -> Result<Vec<f32>, ScorerError> {
        if encoded.len() != 36 {
            return Err(ScorerError::Backend(format!("bad input of {}", encoded.len())));
        }
        Ok((0..MOVE_SPACE_SIZE).map(|i| (i / 5) as f32).collect())
    }
}

fn play_out(agents: &mut [Box<dyn Agent>; 2]) -> GameState {
    let mut state = GameState::standard();
    while !state.is_terminal() {
        let agent = &mut agents[state.current_player().index()];
        let mv = agent.select_move(&state).expect("live position has a move");
        state.apply_move(mv).expect("agents play legal moves");
    }
    state
}

// =============================================================================
// Mixed Agent Games
// =============================================================================

#[test]
fn test_every_agent_pairing_finishes() {
    let make = |kind: usize, player: Player| -> Box<dyn Agent> {
        match kind {
            0 => Box::new(RandomAgent::new(player, 11)),
            1 => Box::new(MctsAgent::new(player, MCTSConfig::default().with_simulations(40))),
            _ => Box::new(ScoredAgent::new(player, SlotPreference)),
        }
    };

    for one in 0..3 {
        for two in 0..3 {
            let mut agents = [make(one, Player::One), make(two, Player::Two)];
            let state = play_out(&mut agents);

            assert_eq!(state.move_count(), 10);
            assert!(state.winner().is_some());
        }
    }
}

#[test]
fn test_agents_report_their_seat() {
    let agents: [Box<dyn Agent>; 3] = [
        Box::new(RandomAgent::new(Player::Two, 0)),
        Box::new(MctsAgent::new(Player::Two, MCTSConfig::default())),
        Box::new(ScoredAgent::new(Player::Two, SlotPreference).with_name("slots")),
    ];

    let names: Vec<_> = agents.iter().map(|a| a.name().to_string()).collect();
    assert_eq!(names, ["Random", "MCTS", "slots"]);
    assert!(agents.iter().all(|a| a.player() == Player::Two));
}

// =============================================================================
// Scored Agent
// =============================================================================

#[test]
fn test_scored_agent_prefers_highest_playable_slot() {
    let mut state = GameState::standard();
    let mut agent = ScoredAgent::new(Player::One, SlotPreference);

    // At the opening only the bottom row is open; slot 3 is the highest
    let mv = agent.select_move(&state).unwrap();
    assert_eq!(mv.slot, 3);

    state.apply_move(mv).unwrap();
    state.apply_move(Move::new(2, gate_duel::GateKind::Xor)).unwrap();
    // Slot 6 opens once slots 2 and 3 are filled
    assert_eq!(agent.select_move(&state).unwrap().slot, 6);
}

#[test]
fn test_scored_agent_sees_circuit_encoding() {
    struct Echo;
    impl MoveScorer for Echo {
        fn score(&self, encoded: &EncodedState) -> Result<Vec<f32>, ScorerError> {
            let expected = CircuitEncoder.encode(&GameState::standard());
            if encoded != &expected {
                return Err(ScorerError::Backend("unexpected encoding".into()));
            }
            let mut scores = vec![0.0; MOVE_SPACE_SIZE];
            scores[MOVE_SPACE_SIZE - 1] = -1.0;
            scores[7] = 1.0;
            Ok(scores)
        }
    }

    let mut agent = ScoredAgent::new(Player::One, Echo);
    assert_eq!(
        agent.select_move(&GameState::standard()),
        Move::from_index(7)
    );
}

// =============================================================================
// MCTS Agent
// =============================================================================

#[test]
fn test_mcts_agent_statistics_cover_root() {
    let mut agent = MctsAgent::new(Player::One, MCTSConfig::default().with_simulations(300));
    let state = GameState::standard();

    let stats = agent.move_statistics(&state);

    assert_eq!(stats.len(), state.valid_moves().len());
    assert!(stats.windows(2).all(|w| w[0].visits >= w[1].visits));
    assert!(stats.iter().all(|s| s.visits > 0));
}
