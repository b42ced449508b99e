//! Strategy port - abstraction over move selection
//!
//! Implemented by the random, heuristic and minimax adapters in
//! [`crate::strategy`]. The match pipeline and the interactive CLI only
//! see this trait.

use crate::{Result, tictactoe::BoardState};

/// Move selection for the player to move in a given state
///
/// # Examples
///
/// ```
/// use oxo::{ports::Strategy, strategy::MinimaxStrategy, tictactoe::BoardState};
///
/// let mut strategy = MinimaxStrategy::new("Hard".to_string());
/// let position = strategy.select_move(&BoardState::new()).unwrap();
/// assert_eq!(position, 4);
/// ```
pub trait Strategy: Send {
    /// Select a move (0-8) for `state.to_move`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoValidMoves`] when the state is terminal.
    fn select_move(&mut self, state: &BoardState) -> Result<usize>;

    /// Display name used in reports and logs.
    fn name(&self) -> &str;

    /// Reseed the internal random number generator.
    ///
    /// Deterministic strategies ignore this; the default does nothing.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
