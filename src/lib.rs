//! Tic-Tac-Toe game outcome oracle
//!
//! This crate provides:
//! - Board representation with validation and terminal detection
//! - A full-depth minimax oracle with a fixed opening book and deterministic tie-breaks
//! - Random, heuristic and minimax strategies behind one [`ports::Strategy`] trait
//! - A match pipeline with observers for progress, metrics and JSONL export
//!
//! ```
//! use oxo::tictactoe::{Cell, Player};
//!
//! let e = Cell::Empty;
//! let cells = [Cell::X, Cell::X, e, Cell::O, Cell::O, e, e, e, e];
//! assert_eq!(oxo::best_move(&cells, Player::O).unwrap(), Some(5));
//! ```

pub mod cli;
pub mod error;
pub mod oracle;
pub mod pipeline;
pub mod ports;
pub mod strategy;
pub mod tictactoe;

pub use error::{Error, Result};
pub use oracle::{ScoredMove, Terminal, best_coord, best_move, evaluate_terminal, score_moves};
pub use strategy::{StrategyConfig, StrategyKind, choose_move};
pub use tictactoe::{BoardState, Cell, Coord, Player};
