//! The eight winning lines and queries over them

use serde::{Deserialize, Serialize};

use super::{Cell, Player};

/// Winning line indices on the 3x3 board: rows, then columns, then diagonals
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Orientation of a winning line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    Row(usize),
    Column(usize),
    Diagonal,
    AntiDiagonal,
}

impl LineKind {
    /// Orientation of `WINNING_LINES[index]`
    pub fn of(index: usize) -> LineKind {
        match index {
            0..=2 => LineKind::Row(index),
            3..=5 => LineKind::Column(index - 3),
            6 => LineKind::Diagonal,
            _ => LineKind::AntiDiagonal,
        }
    }
}

/// A completed line on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedLine {
    pub owner: Player,
    pub kind: LineKind,
    pub cells: [usize; 3],
}

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// The player holding all three cells of `line`, if any
    pub fn owner(cells: &[Cell; 9], line: &[usize; 3]) -> Option<Player> {
        let first = cells[line[0]];
        if first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first) {
            first.to_player()
        } else {
            None
        }
    }

    /// First completed line in `WINNING_LINES` order
    pub fn completed_line(cells: &[Cell; 9]) -> Option<CompletedLine> {
        WINNING_LINES
            .iter()
            .enumerate()
            .find_map(|(index, line)| {
                Self::owner(cells, line).map(|owner| CompletedLine {
                    owner,
                    kind: LineKind::of(index),
                    cells: *line,
                })
            })
    }

    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::owner(cells, line) == Some(player))
    }

    /// All completed lines belonging to `player`
    pub fn lines_of(cells: &[Cell; 9], player: Player) -> Vec<[usize; 3]> {
        WINNING_LINES
            .iter()
            .filter(|line| Self::owner(cells, line) == Some(player))
            .copied()
            .collect()
    }

    /// Positions that would immediately win for the player, ascending and deduplicated
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> Vec<usize> {
        let mut moves: Vec<usize> = WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, player, line))
            .collect();
        moves.sort_unstable();
        moves.dedup();
        moves
    }

    /// Check if a player has an immediate winning move available (2 in a line with 1 empty)
    pub fn has_immediate_win(cells: &[Cell; 9], player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::winning_move_in_line(cells, player, line).is_some())
    }

    fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty if empty_pos.is_none() => empty_pos = Some(idx),
                Cell::Empty => return None,
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}
