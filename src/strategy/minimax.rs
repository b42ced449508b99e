//! Perfect play through the oracle

use crate::{Result, oracle, ports::Strategy, tictactoe::BoardState};

/// Plays [`oracle::best_move`] for the player to move
pub struct MinimaxStrategy {
    name: String,
}

impl MinimaxStrategy {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl Strategy for MinimaxStrategy {
    fn select_move(&mut self, state: &BoardState) -> Result<usize> {
        oracle::best_move(&state.cells, state.to_move)?.ok_or(crate::Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delegates_to_oracle() {
        let mut strategy = MinimaxStrategy::new("Minimax".to_string());
        let state = BoardState::from_string("XX..O...._O").unwrap();
        assert_eq!(strategy.select_move(&state).unwrap(), 2);
    }

    #[test]
    fn terminal_state_is_an_error() {
        let mut strategy = MinimaxStrategy::new("Minimax".to_string());
        let state = BoardState::from_string("XOXXOOOXX").unwrap();
        assert!(matches!(
            strategy.select_move(&state),
            Err(crate::Error::NoValidMoves)
        ));
    }
}
