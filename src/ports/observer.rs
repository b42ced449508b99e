//! Observer port - hooks into a running match
//!
//! Observers collect data during a match without coupling the game loop
//! to a particular output format.

use crate::{
    Result,
    tictactoe::{BoardState, GameOutcome},
};

/// Observer trait for monitoring a match
///
/// # Event Sequence
///
/// 1. `on_match_start(total_games)` - once
/// 2. For each game:
///    - `on_game_start(game_num)`
///    - `on_move(...)` - for each ply
///    - `on_game_end(game_num, outcome)`
/// 3. `on_match_end()` - once, also when the match stops early
///
/// # Examples
///
/// ```no_run
/// use oxo::{ports::Observer, tictactoe::GameOutcome};
///
/// struct DrawCounter {
///     draws: usize,
/// }
///
/// impl Observer for DrawCounter {
///     fn on_game_end(&mut self, _game_num: usize, outcome: GameOutcome) -> oxo::Result<()> {
///         if outcome == GameOutcome::Draw {
///             self.draws += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called before the first game with the number of games scheduled.
    fn on_match_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called when a game starts (0-based index).
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        Ok(())
    }

    /// Called after a move is chosen and before it is applied.
    ///
    /// * `state` - board before the move; `state.to_move` made it
    /// * `move_pos` - position (0-8) played
    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        _state: &BoardState,
        _move_pos: usize,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when a game reaches a terminal state.
    fn on_game_end(&mut self, _game_num: usize, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }

    /// Called once after the last game.
    fn on_match_end(&mut self) -> Result<()> {
        Ok(())
    }
}
