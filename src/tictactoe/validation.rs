//! Board state validation logic

use super::{
    board::{BoardState, Cell, PieceCount, Player},
    lines::LineAnalyzer,
};

/// Check that a cell array could arise from alternating play.
///
/// Rejects piece counts differing by more than one, both players owning a
/// line, and a player owning two lines that share no cell. Turn order is not
/// checked: callers own the turn state.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidBoard`] naming the violated rule.
pub fn validate_cells(cells: &[Cell; 9]) -> crate::Result<()> {
    let invalid = |reason: String| crate::Error::InvalidBoard {
        board: cells.iter().map(|c| c.to_char()).collect(),
        reason,
    };

    let count = PieceCount::of(cells);
    if count.x.abs_diff(count.o) > 1 {
        return Err(invalid(format!(
            "piece counts must differ by at most 1 (X={}, O={})",
            count.x, count.o
        )));
    }

    let x_wins = LineAnalyzer::has_won(cells, Player::X);
    let o_wins = LineAnalyzer::has_won(cells, Player::O);
    if x_wins && o_wins {
        return Err(invalid("both players cannot have winning lines".to_string()));
    }

    for player in [Player::X, Player::O] {
        if !winning_lines_share_cell(cells, player) {
            return Err(invalid(format!(
                "{player} owns winning lines that share no cell"
            )));
        }
    }

    Ok(())
}

/// Check if all winning lines for a player share at least one cell.
///
/// Two lines can only be completed together by a single final move.
/// Holds vacuously when the player owns fewer than two lines.
pub fn winning_lines_share_cell(cells: &[Cell; 9], player: Player) -> bool {
    let lines = LineAnalyzer::lines_of(cells, player);
    match lines.split_first() {
        None => true,
        Some((first, rest)) => first
            .iter()
            .any(|idx| rest.iter().all(|line| line.contains(idx))),
    }
}

impl BoardState {
    /// Check if the board state is valid according to Tic-Tac-Toe rules,
    /// including that the recorded turn matches the piece counts.
    pub fn is_valid(&self) -> bool {
        if validate_cells(&self.cells).is_err() {
            return false;
        }

        let count = PieceCount::of(&self.cells);
        let diff = count.x as isize - count.o as isize;
        let turn_ok = match self.to_move {
            Player::X => diff == 0 || diff == -1,
            Player::O => diff == 0 || diff == 1,
        };
        if !turn_ok {
            return false;
        }

        // The winner moved last, so the turn must belong to their opponent.
        match self.winner() {
            Some(winner) => self.to_move == winner.opponent(),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_is_valid() {
        assert!(BoardState::new().is_valid());
        assert!(BoardState::new_with_player(Player::O).is_valid());
    }

    #[test]
    fn rejects_large_piece_difference() {
        let board = BoardState::from_string("XXX......_O").unwrap();
        assert!(validate_cells(&board.cells).is_err());
        assert!(!board.is_valid());
    }

    #[test]
    fn rejects_two_winners() {
        let board = BoardState::from_string("XXXOOO..._X").unwrap();
        let err = validate_cells(&board.cells).unwrap_err();
        assert!(err.to_string().contains("both players"));
    }

    #[test]
    fn rejects_disjoint_double_win() {
        // X X X
        // O O .
        // X X X  (impossible: the rows share no cell)
        let board = BoardState::from_string("XXXOO.XXX_O").unwrap();
        assert!(!winning_lines_share_cell(&board.cells, Player::X));
        assert!(validate_cells(&board.cells).is_err());
    }

    #[test]
    fn accepts_double_win_through_shared_cell() {
        // X X X
        // X O O
        // X O O  (row 0 and column 0 meet at cell 0)
        let board = BoardState::from_string("XXXXOOXOO_O").unwrap();
        assert!(winning_lines_share_cell(&board.cells, Player::X));
        assert!(validate_cells(&board.cells).is_ok());
    }

    #[test]
    fn rejects_turn_after_own_win() {
        let board = BoardState::from_string("XXXOO...._X").unwrap();
        assert!(validate_cells(&board.cells).is_ok());
        assert!(!board.is_valid());
    }

    #[test]
    fn turn_order_is_not_part_of_cell_validation() {
        // X to move although X is already a piece ahead
        let board = BoardState::from_string("X........_X").unwrap();
        assert!(validate_cells(&board.cells).is_ok());
        assert!(!board.is_valid());
    }
}
