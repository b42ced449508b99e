//! Common test utilities for the oxo test suite.

#![allow(dead_code)]

use oxo::{
    BoardState,
    tictactoe::{Cell, GameOutcome, Player},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Parse a 9-character board, panicking on malformed input.
pub fn cells(s: &str) -> [Cell; 9] {
    BoardState::from_string(s).unwrap().cells
}

/// Boards reached by random play from an empty board, including the
/// terminal ones.
///
/// Every intermediate state of `games` seeded random games is returned.
pub fn random_positions(games: usize, seed: u64) -> Vec<BoardState> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions = Vec::new();
    for _ in 0..games {
        let first = if rng.random_bool(0.5) {
            Player::X
        } else {
            Player::O
        };
        let mut state = BoardState::new_with_player(first);
        positions.push(state);
        while !state.is_terminal() {
            let moves = state.legal_moves();
            let pos = moves[rng.random_range(0..moves.len())];
            state = state.make_move(pos).unwrap();
            positions.push(state);
        }
    }
    positions
}

/// Exhaustively play every opponent reply against `choose`, which moves
/// for `hero`, and collect the outcome of each line of play.
pub fn enumerate_outcomes<F>(state: BoardState, hero: Player, choose: &mut F) -> Vec<GameOutcome>
where
    F: FnMut(&BoardState) -> usize,
{
    if let Some(outcome) = GameOutcome::of(&state) {
        return vec![outcome];
    }
    if state.to_move == hero {
        let pos = choose(&state);
        let next = state.make_move(pos).unwrap();
        enumerate_outcomes(next, hero, choose)
    } else {
        state
            .legal_moves()
            .into_iter()
            .flat_map(|pos| {
                let next = state.make_move(pos).unwrap();
                enumerate_outcomes(next, hero, choose)
            })
            .collect()
    }
}
