//! Rules integration tests: invariants over random playouts.

use std::collections::BTreeSet;

use freckers::core::{Action, Color, Coord, Direction, GameState, FROGS_PER_COLOR, MAX_TURNS};
use freckers::rules::GameResult;
use proptest::prelude::*;

fn frog_cells(state: &GameState) -> BTreeSet<Coord> {
    state.frogs().map(|(at, _)| at).collect()
}

/// Play `choices` from the initial position, picking `legal[i % len]` each turn.
fn playout(choices: &[usize]) -> Vec<(GameState, Action)> {
    let mut state = GameState::new();
    let mut trace = Vec::new();
    for &choice in choices {
        if state.is_terminal() {
            break;
        }
        let actions = state.legal_actions();
        let action = actions[choice % actions.len()].clone();
        trace.push((state.clone(), action.clone()));
        state.apply_action(&action).unwrap();
    }
    trace
}

// =============================================================================
// Random Playout Properties
// =============================================================================

proptest! {
    #[test]
    fn test_frog_counts_never_change(choices in prop::collection::vec(0usize..64, 0..120)) {
        for (before, action) in playout(&choices) {
            let after = before.successor(&action).unwrap();
            for color in Color::BOTH {
                prop_assert_eq!(after.frog_counts()[color], FROGS_PER_COLOR);
            }
        }
    }

    #[test]
    fn test_generated_moves_relocate_one_frog(choices in prop::collection::vec(0usize..64, 0..120)) {
        for (before, action) in playout(&choices) {
            let after = before.successor(&action).unwrap();
            let Action::Move { start, steps } = &action else {
                prop_assert_eq!(frog_cells(&before), frog_cells(&after));
                continue;
            };

            let dest = before.resolve_move(*start, steps).unwrap();
            let old = frog_cells(&before);
            let new = frog_cells(&after);
            let left: Vec<_> = old.difference(&new).copied().collect();
            let arrived: Vec<_> = new.difference(&old).copied().collect();

            prop_assert_eq!(left, vec![*start]);
            prop_assert_eq!(arrived, vec![dest]);
            prop_assert_eq!(after.frog_at(dest), Some(before.current_player));
            prop_assert!(!after.has_pad(*start));
        }
    }

    #[test]
    fn test_turn_passes_after_every_action(choices in prop::collection::vec(0usize..64, 0..60)) {
        for (before, action) in playout(&choices) {
            let after = before.successor(&action).unwrap();
            prop_assert_eq!(after.current_player, before.current_player.opponent());
            prop_assert_eq!(after.turn_count, before.turn_count + 1);
        }
    }

    #[test]
    fn test_grow_never_removes_pads(choices in prop::collection::vec(0usize..64, 0..60)) {
        for (before, _) in playout(&choices) {
            let after = before.successor(&Action::Grow).unwrap();
            prop_assert!(before.lily_pads().all(|at| after.has_pad(at)));
            prop_assert!(after.lily_pads().all(|at| !after.has_frog(at) || before.has_pad(at)));
        }
    }
}

// =============================================================================
// Fixed Positions
// =============================================================================

#[test]
fn test_initial_red_hops_and_single_grow() {
    let state = GameState::new();
    let actions = state.legal_actions();

    for c in 1..7 {
        let from = Coord::new(0, c);
        assert!(actions.contains(&Action::hop(from, Direction::Down)));
        assert!(!actions.contains(&Action::hop(from, Direction::Up)));
    }
    assert_eq!(actions.iter().filter(|a| **a == Action::Grow).count(), 1);
}

#[test]
fn test_grow_with_surrounded_frogs_is_noop() {
    let frog = Coord::new(4, 4);
    let ring: Vec<Coord> = frog.neighbours().collect();
    let mut state = GameState::from_parts(ring, [(frog, Color::Blue)], Color::Blue, 10);
    let pads_before: Vec<Coord> = state.lily_pads().collect();

    state.apply_action(&Action::Grow).unwrap();

    assert_eq!(state.lily_pads().collect::<Vec<_>>(), pads_before);
    assert_eq!(state.current_player, Color::Red);
}

#[test]
fn test_jump_chain_does_not_cycle() {
    // Red can bounce between (3,2) and (3,4) over the blue frog at (3,3)
    // forever unless landings are tracked per chain.
    let start = Coord::new(3, 0);
    let state = GameState::from_parts(
        [Coord::new(3, 2), Coord::new(3, 4)],
        [
            (start, Color::Red),
            (Coord::new(3, 1), Color::Blue),
            (Coord::new(3, 3), Color::Blue),
        ],
        Color::Red,
        0,
    );

    let actions = state.legal_actions();

    assert_eq!(
        actions,
        vec![
            Action::chain(start, &[Direction::Right, Direction::Right]),
            Action::chain(start, &[Direction::Right]),
            Action::Grow,
        ]
    );
    for action in &actions {
        assert!(state.successor(action).is_ok());
    }
}

#[test]
fn test_game_ends_at_turn_limit() {
    let mut state = GameState::new();
    state.turn_count = MAX_TURNS - 1;
    assert!(!state.is_terminal());

    state.apply_action(&Action::Grow).unwrap();

    assert!(state.is_terminal());
    assert_eq!(state.outcome(), Some(GameResult::Draw));
}

#[test]
fn test_blue_full_arrival_wins() {
    let frogs = (1..7)
        .map(|c| (Coord::new(0, c), Color::Blue))
        .chain((1..7).map(|c| (Coord::new(3, c), Color::Red)));
    let state = GameState::from_parts([], frogs, Color::Red, 40);

    assert!(state.is_terminal());
    assert_eq!(state.winner(), Some(Color::Blue));
    assert_eq!(state.outcome(), Some(GameResult::Winner(Color::Blue)));
}
