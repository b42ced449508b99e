//! Game record: initial position, move history and outcome

use serde::{Deserialize, Serialize};

use super::board::{BoardState, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal state, `None` while the game is still running
    pub fn of(state: &BoardState) -> Option<GameOutcome> {
        if let Some(winner) = state.winner() {
            Some(GameOutcome::Win(winner))
        } else if state.is_draw() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

/// A game with its history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: BoardState,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game with X to move first
    pub fn new() -> Self {
        Self::new_with_player(Player::X)
    }

    /// Create a new game with the given player moving first
    pub fn new_with_player(first_player: Player) -> Self {
        Game {
            initial: BoardState::new_with_player(first_player),
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Replay a sequence of positions from an empty board
    ///
    /// # Errors
    ///
    /// Returns error on the first illegal position or a move after the game ended.
    pub fn from_positions(first_player: Player, positions: &[usize]) -> crate::Result<Self> {
        let mut game = Self::new_with_player(first_player);
        for &pos in positions {
            game.play(pos)?;
        }
        Ok(game)
    }

    /// Play a move for the player whose turn it is
    pub fn play(&mut self, position: usize) -> crate::Result<BoardState> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_state()?;
        let next = current.make_move(position)?;

        self.moves.push(Move {
            position,
            player: current.to_move,
        });
        self.outcome = GameOutcome::of(&next);

        Ok(next)
    }

    /// Whose turn it is, `None` once the game is over
    pub fn to_move(&self) -> crate::Result<Option<Player>> {
        if self.outcome.is_some() {
            return Ok(None);
        }
        Ok(Some(self.current_state()?.to_move))
    }

    /// Positions played so far
    pub fn positions(&self) -> Vec<usize> {
        self.moves.iter().map(|m| m.position).collect()
    }

    /// Board state after applying `moves[0..end_index]`
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::CorruptHistory`] if a recorded move is illegal.
    fn replay_moves_until(&self, end_index: usize) -> crate::Result<BoardState> {
        let mut state = self.initial;
        for (index, m) in self.moves.iter().take(end_index).enumerate() {
            state = state
                .make_move(m.position)
                .map_err(|source| crate::Error::CorruptHistory {
                    index,
                    source: Box::new(source),
                })?;
        }
        Ok(state)
    }

    /// Get current board state
    pub fn current_state(&self) -> crate::Result<BoardState> {
        self.replay_moves_until(self.moves.len())
    }

    /// Get the sequence of board states, starting with the initial one
    pub fn state_sequence(&self) -> crate::Result<Vec<BoardState>> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut state = self.initial;
        states.push(state);
        for (index, m) in self.moves.iter().enumerate() {
            state = state
                .make_move(m.position)
                .map_err(|source| crate::Error::CorruptHistory {
                    index,
                    source: Box::new(source),
                })?;
            states.push(state);
        }
        Ok(states)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
