//! Tic-Tac-Toe board, lines and game records

pub mod board;
pub mod game;
pub mod lines;
pub mod validation;

pub use board::{
    BOARD_CELLS, BOARD_SIDE, BoardState, CENTER, CORNERS, Cell, CellClass, Coord, Player, SIDES,
};
pub use game::{Game, GameOutcome, Move};
pub use lines::{CompletedLine, LineAnalyzer, LineKind, WINNING_LINES};
pub use validation::{validate_cells, winning_lines_share_cell};
