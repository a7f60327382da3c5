//! Rules engine integration tests.

use gate_duel::core::{GameConfig, GameState, GateKind, Move, Player, Signal, FINAL_SIGNAL};
use gate_duel::rules::{wiring, MoveError, TOPOLOGY};
use proptest::prelude::*;
use proptest::sample::Index;

/// Play the game out, choosing each move by `picks[i]` among the legal ones.
fn play_indexed(config: &GameConfig, picks: &[Index]) -> GameState {
    let mut state = GameState::new(config);
    for pick in picks {
        let moves = state.valid_moves();
        if moves.is_empty() {
            break;
        }
        state.apply_move(moves[pick.index(moves.len())]).unwrap();
    }
    state
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_every_game_fills_the_board(picks in prop::collection::vec(any::<Index>(), 10)) {
        let state = play_indexed(&GameConfig::default(), &picks);

        prop_assert!(state.is_terminal());
        prop_assert_eq!(state.move_count(), 10);
        prop_assert_eq!(state.filled_slots(), 10);
        prop_assert!(state.signals().iter().all(|s| s.is_set()));
        prop_assert!(state.hand(Player::One).is_empty());
        prop_assert!(state.hand(Player::Two).is_empty());
        // Opposed targets: someone always wins
        prop_assert!(state.winner().is_some());
    }

    #[test]
    fn prop_valid_moves_are_playable(picks in prop::collection::vec(any::<Index>(), 0..10)) {
        let state = play_indexed(&GameConfig::default(), &picks);
        let player = state.current_player();

        for mv in state.valid_moves() {
            let slot = mv.slot as usize;
            prop_assert!(state.slot(slot).is_none());
            prop_assert!(state.hand(player).contains(mv.gate));
            let w = wiring(slot).unwrap();
            prop_assert!(w.inputs.iter().all(|&i| state.signal(i).is_set()));
            prop_assert_eq!(state.signal(w.output), Signal::Unset);
            prop_assert!(state.check_move(mv).is_ok());
        }
    }

    #[test]
    fn prop_wires_match_gates(picks in prop::collection::vec(any::<Index>(), 0..=10)) {
        let state = play_indexed(&GameConfig::default(), &picks);

        for (slot, w) in TOPOLOGY.iter().enumerate() {
            match state.slot(slot) {
                Some(gate) => {
                    let a = state.signal(w.inputs[0]).value().unwrap();
                    let b = state.signal(w.inputs[1]).value().unwrap();
                    prop_assert_eq!(state.signal(w.output).value(), Some(gate.eval(a, b)));
                }
                None => prop_assert_eq!(state.signal(w.output), Signal::Unset),
            }
        }
    }

    #[test]
    fn prop_clone_is_independent(
        picks in prop::collection::vec(any::<Index>(), 0..9),
        next in any::<Index>(),
    ) {
        let original = play_indexed(&GameConfig::default(), &picks);
        let snapshot = original.clone();
        let mut copy = original.clone();

        let moves = copy.valid_moves();
        prop_assume!(!moves.is_empty());
        copy.apply_move(moves[next.index(moves.len())]).unwrap();

        prop_assert_eq!(&original, &snapshot);
        prop_assert_eq!(copy.move_count(), original.move_count() + 1);
    }

    #[test]
    fn prop_rejected_move_leaves_state(picks in prop::collection::vec(any::<Index>(), 1..10)) {
        let mut state = play_indexed(&GameConfig::default(), &picks);
        let before = state.clone();

        // Replaying the first move always hits an occupied slot
        let first = state.history()[0].mv;
        let err = state.apply_move(first).unwrap_err();

        prop_assert_eq!(err, MoveError::SlotOccupied { slot: first.slot });
        prop_assert_eq!(state, before);
    }
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_alternating_turns() {
    let mut state = GameState::standard();
    let mut expected = Player::One;

    while let Some(&mv) = state.valid_moves().first() {
        assert_eq!(state.current_player(), expected);
        state.apply_move(mv).unwrap();
        expected = expected.opponent();
    }

    let players: Vec<_> = state.history().iter().map(|r| r.player).collect();
    assert_eq!(players.len(), 10);
    assert!(players.chunks(2).all(|pair| pair == [Player::One, Player::Two]));
}

#[test]
fn test_opening_only_bottom_row() {
    let moves = GameState::standard().valid_moves();

    assert_eq!(moves.len(), 20);
    assert!(moves.iter().all(|mv| mv.slot < 4));
}

#[test]
fn test_final_wire_decides() {
    // Same inputs flipped: the final wire is the same function of them,
    // so a line that wins for one target loses under the other.
    let line = [
        Move::new(0, GateKind::And),
        Move::new(1, GateKind::And),
        Move::new(2, GateKind::Or),
        Move::new(3, GateKind::Or),
        Move::new(4, GateKind::Nand),
        Move::new(5, GateKind::Nand),
        Move::new(6, GateKind::Nor),
        Move::new(7, GateKind::Nor),
        Move::new(8, GateKind::Xor),
        Move::new(9, GateKind::Xor),
    ];

    let standard = GameConfig::default();
    let swapped = GameConfig::default()
        .with_target(Player::One, false)
        .with_target(Player::Two, true);

    let mut a = GameState::new(&standard);
    let mut b = GameState::new(&swapped);
    for mv in line {
        a.apply_move(mv).unwrap();
        b.apply_move(mv).unwrap();
    }

    assert!(a.is_terminal() && b.is_terminal());
    assert_eq!(a.signal(FINAL_SIGNAL), b.signal(FINAL_SIGNAL));
    assert_eq!(a.winner().map(Player::opponent), b.winner());
}

#[test]
fn test_equal_targets_can_draw() {
    let config = GameConfig::default()
        .with_target(Player::One, true)
        .with_target(Player::Two, true);

    let mut state = GameState::new(&config);
    while let Some(&mv) = state.valid_moves().first() {
        state.apply_move(mv).unwrap();
    }

    match state.final_signal().value() {
        Some(true) => assert_eq!(state.winner_id(), 1),
        Some(false) => assert_eq!(state.winner_id(), 0),
        None => unreachable!("full board resolves the final wire"),
    }
}
