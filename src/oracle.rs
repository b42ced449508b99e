//! Game outcome oracle: terminal detection and minimax move selection
//!
//! The search scores a terminal win for the acting player as `10 - depth`
//! and a loss as `depth - 10`, so quicker wins and slower losses are
//! preferred. Draws score zero. Depth is zero at the root.
//!
//! The caller's cells are never touched: the search copies them into a
//! scratch board and places and removes marks while it recurses.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    Result,
    tictactoe::{
        BOARD_CELLS, CENTER, CORNERS, Cell, CellClass, Coord, LineAnalyzer, Player, SIDES,
        validate_cells,
    },
};

/// Score of an immediate win found one ply below the root is `WIN_SCORE - 1`
pub const WIN_SCORE: i32 = 10;

/// Terminal status of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terminal {
    Win(Player),
    Draw,
    Ongoing,
}

impl Terminal {
    pub fn is_over(self) -> bool {
        self != Terminal::Ongoing
    }
}

/// A legal root move with its minimax score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    pub position: usize,
    pub coord: Coord,
    pub score: i32,
}

/// Classify a board as won, drawn or still in progress.
///
/// Lines are scanned in `WINNING_LINES` order and the first complete one decides.
pub fn evaluate_terminal(cells: &[Cell; 9]) -> Terminal {
    if let Some(line) = LineAnalyzer::completed_line(cells) {
        Terminal::Win(line.owner)
    } else if cells.contains(&Cell::Empty) {
        Terminal::Ongoing
    } else {
        Terminal::Draw
    }
}

/// Fixed opening preference: center, then corners, then sides, each in scan order
pub fn opening_move(cells: &[Cell; 9]) -> Option<usize> {
    std::iter::once(CENTER)
        .chain(CORNERS)
        .chain(SIDES)
        .find(|&pos| cells[pos] == Cell::Empty)
}

/// The minimax-optimal move for `player`.
///
/// Returns `Ok(None)` when the board is already decided (full or won).
/// When `player` has no mark on the board yet the opening preference is
/// used instead of a search.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidBoard`] for boards that cannot arise from
/// alternating play.
pub fn best_move(cells: &[Cell; 9], player: Player) -> Result<Option<usize>> {
    validate_cells(cells).inspect_err(|e| warn!(error = %e, "rejected board"))?;
    if evaluate_terminal(cells).is_over() {
        return Ok(None);
    }

    if !cells.contains(&player.to_cell()) {
        let choice = opening_move(cells);
        debug!(?player, ?choice, "opening move without search");
        return Ok(choice);
    }

    let mut search = Search::new(cells, player);
    let scored = search.root();
    let choice = pick_root(&scored);
    debug!(
        ?player,
        ?choice,
        nodes = search.nodes,
        "minimax search complete"
    );
    Ok(choice)
}

/// Like [`best_move`], returning the move as a coordinate
pub fn best_coord(cells: &[Cell; 9], player: Player) -> Result<Option<Coord>> {
    best_move(cells, player)?
        .map(Coord::from_index)
        .transpose()
}

/// Full-search score of every legal move in scan order.
///
/// Empty when the board is already decided. The opening shortcut is not
/// applied, so this also scores first moves; from an empty board the
/// search reaches terminal positions at depth 9. [`best_move`] only
/// searches once the player has a mark, so its depths stay within 1..=8.
pub fn score_moves(cells: &[Cell; 9], player: Player) -> Result<Vec<ScoredMove>> {
    validate_cells(cells)?;
    if evaluate_terminal(cells).is_over() {
        return Ok(Vec::new());
    }
    Ok(Search::new(cells, player).root())
}

/// Highest score wins; ties go to center, then corner, then side, then scan order.
fn pick_root(scored: &[ScoredMove]) -> Option<usize> {
    scored
        .iter()
        .min_by_key(|m| (-m.score, CellClass::of(m.position), m.position))
        .map(|m| m.position)
}

struct Search {
    board: [Cell; 9],
    maximizer: Player,
    nodes: u64,
}

impl Search {
    fn new(cells: &[Cell; 9], maximizer: Player) -> Self {
        Search {
            board: *cells,
            maximizer,
            nodes: 0,
        }
    }

    fn root(&mut self) -> Vec<ScoredMove> {
        let mut scored = Vec::with_capacity(BOARD_CELLS);
        for position in 0..BOARD_CELLS {
            if self.board[position] != Cell::Empty {
                continue;
            }
            self.board[position] = self.maximizer.to_cell();
            let score = self.minimax(1, self.maximizer.opponent());
            self.board[position] = Cell::Empty;
            scored.push(ScoredMove {
                position,
                coord: Coord {
                    row: position / 3,
                    col: position % 3,
                },
                score,
            });
        }
        scored
    }

    fn minimax(&mut self, depth: i32, to_move: Player) -> i32 {
        self.nodes += 1;
        match evaluate_terminal(&self.board) {
            Terminal::Win(winner) if winner == self.maximizer => return WIN_SCORE - depth,
            Terminal::Win(_) => return depth - WIN_SCORE,
            Terminal::Draw => return 0,
            Terminal::Ongoing => {}
        }

        let maximizing = to_move == self.maximizer;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for position in 0..BOARD_CELLS {
            if self.board[position] != Cell::Empty {
                continue;
            }
            self.board[position] = to_move.to_cell();
            let score = self.minimax(depth + 1, to_move.opponent());
            self.board[position] = Cell::Empty;

            if maximizing {
                best = best.max(score);
            } else {
                best = best.min(score);
            }
        }
        best
    }
}
