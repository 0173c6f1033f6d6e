//! Search integration tests: alpha-beta against plain minimax, deadlines.

use std::time::{Duration, Instant};

use freckers::core::{Action, Color, Coord, Direction, GameState};
use freckers::search::{AlphaBetaSearch, Evaluator, Heuristic, SearchConfig, TickClock};

/// Unpruned minimax with the same move order and tie-breaking as the search.
fn minimax(state: &GameState, depth: u32, me: Color, eval: &dyn Evaluator) -> f64 {
    if depth == 0 || state.is_terminal() {
        return eval.evaluate(state, me);
    }
    let values = state
        .legal_actions()
        .into_iter()
        .map(|action| minimax(&state.successor(&action).unwrap(), depth - 1, me, eval));
    if state.current_player == me {
        values.fold(f64::NEG_INFINITY, f64::max)
    } else {
        values.fold(f64::INFINITY, f64::min)
    }
}

fn minimax_root(state: &GameState, depth: u32, eval: &dyn Evaluator) -> (Action, f64) {
    let me = state.current_player;
    let mut best = (Action::Grow, f64::NEG_INFINITY);
    for action in state.legal_actions() {
        let value = minimax(&state.successor(&action).unwrap(), depth - 1, me, eval);
        if value > best.1 {
            best = (action, value);
        }
    }
    best
}

fn unlimited(depth: u32) -> SearchConfig {
    SearchConfig::default()
        .with_depth(depth)
        .with_time_limit(Duration::from_secs(3600))
}

fn midgame() -> GameState {
    let mut state = GameState::new();
    for action in [
        Action::hop(Coord::new(0, 3), Direction::Down),
        Action::hop(Coord::new(7, 4), Direction::Up),
        Action::Grow,
        Action::Grow,
        Action::hop(Coord::new(1, 3), Direction::Down),
    ] {
        state.apply_action(&action).unwrap();
    }
    state
}

// =============================================================================
// Pruning Correctness
// =============================================================================

#[test]
fn test_alphabeta_matches_minimax() {
    let heuristic = Heuristic::default();
    let positions = [GameState::new(), midgame()];

    for state in &positions {
        for depth in 1..=3 {
            let (expected_action, expected_value) = minimax_root(state, depth, &heuristic);

            let mut search = AlphaBetaSearch::new(unlimited(depth));
            let result = search.search(state);

            assert_eq!(result.value, expected_value, "depth {depth}");
            assert_eq!(result.action, expected_action, "depth {depth}");
            assert!(!result.stats.timed_out);
        }
    }
}

#[test]
fn test_pruning_takes_cutoffs() {
    let mut search = AlphaBetaSearch::new(unlimited(3));
    let result = search.search(&GameState::new());

    assert!(result.stats.cutoffs > 0);
    // Unpruned, depth 3 from the start visits over 21^3 nodes.
    assert!(result.stats.nodes < 21 * 21 * 21);
}

// =============================================================================
// Deadline Behaviour
// =============================================================================

#[test]
fn test_near_zero_deadline_returns_legal_action() {
    let state = midgame();
    let config = unlimited(3).with_time_limit(Duration::from_nanos(1));
    let mut search = AlphaBetaSearch::new(config);

    let started = Instant::now();
    let result = search.search(&state);
    let took = started.elapsed();

    assert!(state.legal_actions().contains(&result.action));
    assert!(result.stats.timed_out);
    // Overrun is bounded by one node's work, far from a full depth-3 search.
    assert!(took < Duration::from_millis(200), "took {took:?}");
}

#[test]
fn test_tick_clock_deadline_is_reproducible() {
    let state = midgame();
    let config = unlimited(3).with_time_limit(Duration::from_millis(50));

    let run = || {
        let clock = TickClock::new(Duration::from_millis(1));
        let mut search = AlphaBetaSearch::new(config.clone());
        let result = search.search_with_clock(&state, &clock);
        (result.action, result.stats.nodes, result.stats.timed_out)
    };

    let first = run();
    assert_eq!(first, run());
    assert!(first.2);
    assert!(state.legal_actions().contains(&first.0));
}

#[test]
fn test_search_does_not_modify_state() {
    let state = midgame();
    let before = state.clone();

    let mut search = AlphaBetaSearch::new(unlimited(2));
    let _ = search.search(&state);

    assert_eq!(state, before);
}

// =============================================================================
// Custom Evaluation
// =============================================================================

/// Prefers positions where the blue frog at the far right has moved.
struct FleeCorner;

impl Evaluator for FleeCorner {
    fn evaluate(&self, state: &GameState, _perspective: Color) -> f64 {
        if state.has_frog(Coord::new(7, 6)) {
            0.0
        } else {
            1.0
        }
    }
}

#[test]
fn test_custom_evaluator_drives_choice() {
    let mut state = GameState::new();
    state.current_player = Color::Blue;

    let mut search = AlphaBetaSearch::new(unlimited(1)).with_evaluator(FleeCorner);
    let result = search.search(&state);

    assert_eq!(result.value, 1.0);
    assert_eq!(result.action.start(), Some(Coord::new(7, 6)));
}
