//! Rule-based play: win, block, then positional preference
//!
//! 1. Complete a line if one is open
//! 2. Otherwise block the opponent's open line
//! 3. Otherwise take the center, a corner, or a side, in that order
//!
//! It never looks further ahead than one ply, so forks beat it.

use crate::{
    Result,
    oracle::opening_move,
    ports::Strategy,
    tictactoe::{BoardState, LineAnalyzer},
};

pub struct HeuristicStrategy {
    name: String,
}

impl HeuristicStrategy {
    pub fn new(name: String) -> Self {
        Self { name }
    }

    /// The rule-based choice, `None` on a terminal state
    pub fn choose(state: &BoardState) -> Option<usize> {
        if state.is_terminal() {
            return None;
        }
        let me = state.to_move;
        let first_win = |player| {
            LineAnalyzer::winning_moves(&state.cells, player)
                .first()
                .copied()
        };
        first_win(me)
            .or_else(|| first_win(me.opponent()))
            .or_else(|| opening_move(&state.cells))
    }
}

impl Strategy for HeuristicStrategy {
    fn select_move(&mut self, state: &BoardState) -> Result<usize> {
        Self::choose(state).ok_or(crate::Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
