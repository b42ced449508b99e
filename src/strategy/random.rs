//! Uniform random play

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{Result, ports::Strategy, tictactoe::BoardState};

/// Picks uniformly among the empty cells
pub struct RandomStrategy {
    name: String,
    rng: StdRng,
}

impl RandomStrategy {
    /// Create a new random strategy seeded from system entropy
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random strategy with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn select_move(&mut self, state: &BoardState) -> Result<usize> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return Err(crate::Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_picks_empty_cells() {
        let state = BoardState::from_string("XOXOX....").unwrap();
        let mut strategy = RandomStrategy::with_seed("Random".to_string(), 3);
        for _ in 0..50 {
            let pos = strategy.select_move(&state).unwrap();
            assert!(state.is_empty(pos));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let state = BoardState::new();
        let mut a = RandomStrategy::with_seed("A".to_string(), 42);
        let mut b = RandomStrategy::new("B".to_string());
        b.set_rng_seed(42).unwrap();
        for _ in 0..20 {
            assert_eq!(a.select_move(&state).unwrap(), b.select_move(&state).unwrap());
        }
    }

    #[test]
    fn terminal_state_has_no_move() {
        let state = BoardState::from_string("XXXOO...._O").unwrap();
        let mut strategy = RandomStrategy::with_seed("Random".to_string(), 1);
        assert!(matches!(
            strategy.select_move(&state),
            Err(crate::Error::NoValidMoves)
        ));
    }
}
