//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of cells on the board
pub const BOARD_CELLS: usize = 9;

/// Board side length
pub const BOARD_SIDE: usize = 3;

/// Index of the center cell
pub const CENTER: usize = 4;

/// Corner indices in scan order
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Side (edge-middle) indices in scan order
pub const SIDES: [usize; 4] = [1, 3, 5, 7];

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn to_char(self) -> char {
        self.to_cell().to_char()
    }

    /// Parse `X`/`O` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPlayerString`] for anything else.
    pub fn parse(token: &str, context: &str) -> Result<Player, crate::Error> {
        match token.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayerString {
                player: other.to_string(),
                label: context.to_string(),
            }),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Geometric class of a cell, ordered by opening preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CellClass {
    Center,
    Corner,
    Side,
}

impl CellClass {
    /// Classify a flat index (0-8)
    pub fn of(position: usize) -> CellClass {
        if position == CENTER {
            CellClass::Center
        } else if CORNERS.contains(&position) {
            CellClass::Corner
        } else {
            CellClass::Side
        }
    }
}

/// Row/column address of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Create a coordinate, rejecting rows or columns outside 0-2
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row >= BOARD_SIDE || col >= BOARD_SIDE {
            return Err(crate::Error::InvalidCoord { row, col });
        }
        Ok(Coord { row, col })
    }

    /// Convert a flat row-major index into a coordinate
    pub fn from_index(position: usize) -> Result<Self, crate::Error> {
        if position >= BOARD_CELLS {
            return Err(crate::Error::InvalidPosition { position });
        }
        Ok(Coord {
            row: position / BOARD_SIDE,
            col: position % BOARD_SIDE,
        })
    }

    /// Flat row-major index of this coordinate
    pub fn index(self) -> usize {
        self.row * BOARD_SIDE + self.col
    }
}

impl TryFrom<usize> for Coord {
    type Error = crate::Error;

    fn try_from(position: usize) -> Result<Self, Self::Error> {
        Coord::from_index(position)
    }
}

impl From<Coord> for usize {
    fn from(coord: Coord) -> usize {
        coord.index()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, col {}", self.row, self.col)
    }
}

/// Complete board state including cells and whose turn it is
///
/// Cells are stored flat in row-major order. `Copy` since it's only 10 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
    pub to_move: Player,
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub(crate) x: usize,
    pub(crate) o: usize,
    pub(crate) empty: usize,
}

impl PieceCount {
    pub(crate) fn of(cells: &[Cell; 9]) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    pub(crate) fn marks_of(&self, player: Player) -> usize {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

impl BoardState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Self::new_with_player(Player::X)
    }

    /// Create a new empty board with a specified player to move first.
    ///
    /// O-first games are accepted everywhere: valid states then have
    /// `o_count == x_count` or `o_count == x_count + 1`.
    pub fn new_with_player(first_player: Player) -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            to_move: first_player,
        }
    }

    /// Build a board from a flat slice of cells.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidBoardLength`] unless the slice holds exactly 9 cells.
    pub fn from_cells(cells: &[Cell], to_move: Player) -> Result<Self, crate::Error> {
        let cells: [Cell; 9] =
            cells
                .try_into()
                .map_err(|_| crate::Error::InvalidBoardLength {
                    expected: BOARD_CELLS,
                    got: cells.len(),
                    context: cells.iter().map(|c| c.to_char()).collect(),
                })?;
        Ok(BoardState { cells, to_move })
    }

    /// Build a board from a 3x3 matrix
    pub fn from_rows(rows: [[Cell; 3]; 3], to_move: Player) -> Self {
        let mut cells = [Cell::Empty; 9];
        for (r, row) in rows.iter().enumerate() {
            cells[r * BOARD_SIDE..(r + 1) * BOARD_SIDE].copy_from_slice(row);
        }
        BoardState { cells, to_move }
    }

    /// Build a board from a dynamically sized matrix.
    ///
    /// # Errors
    ///
    /// Returns an error unless the matrix is exactly 3 rows of 3 cells.
    pub fn from_matrix(rows: &[Vec<Cell>], to_move: Player) -> Result<Self, crate::Error> {
        if rows.len() != BOARD_SIDE {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_SIDE,
                got: rows.len(),
                context: "matrix rows".to_string(),
            });
        }
        let mut matrix = [[Cell::Empty; 3]; 3];
        for (r, row) in rows.iter().enumerate() {
            matrix[r] = row
                .as_slice()
                .try_into()
                .map_err(|_| crate::Error::InvalidRowLength {
                    row: r,
                    got: row.len(),
                })?;
        }
        Ok(Self::from_rows(matrix, to_move))
    }

    /// The board as a 3x3 matrix
    pub fn to_rows(&self) -> [[Cell; 3]; 3] {
        let mut rows = [[Cell::Empty; 3]; 3];
        for (i, &cell) in self.cells.iter().enumerate() {
            rows[i / BOARD_SIDE][i % BOARD_SIDE] = cell;
        }
        rows
    }

    /// Helper: Parse exactly 9 cells from a slice of characters.
    fn parse_cells(chars: &[char], context: &str) -> Result<[Cell; 9], crate::Error> {
        if chars.len() != BOARD_CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_CELLS,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: context.to_string(),
            })?;
        }

        Ok(cells)
    }

    fn determine_turn_from_counts(count: &PieceCount, context: &str) -> Result<Player, crate::Error> {
        if count.x == count.o || count.o == count.x + 1 {
            Ok(Player::X)
        } else if count.x == count.o + 1 {
            Ok(Player::O)
        } else {
            Err(crate::Error::InvalidBoard {
                board: context.to_string(),
                reason: format!(
                    "piece counts must differ by at most 1 (X={}, O={})",
                    count.x, count.o
                ),
            })
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string holds 9 cell characters (whitespace and `/` `|` row
    /// separators are ignored) and may end with `_X` or `_O` to set the
    /// player to move. Without a suffix the player is inferred from the
    /// piece counts, with X moving on equal counts.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The board part does not hold exactly 9 cell characters
    /// - Any character is not a valid cell representation
    /// - The suffix is not `X` or `O`
    /// - No suffix is given and the piece counts differ by more than one
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let cleaned: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();
        let (board_part, suffix) = match cleaned.split_once('_') {
            Some((board, suffix)) => (board, Some(suffix)),
            None => (cleaned.as_str(), None),
        };
        let chars: Vec<char> = board_part.chars().collect();
        let cells = Self::parse_cells(&chars, s)?;

        let to_move = match suffix {
            Some(token) => Player::parse(token, s)?,
            None => Self::determine_turn_from_counts(&PieceCount::of(&cells), s)?,
        };

        Ok(BoardState { cells, to_move })
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = PieceCount::of(&self.cells);
        count.x + count.o
    }

    /// Number of marks the player has placed
    pub fn marks_of(&self, player: Player) -> usize {
        PieceCount::of(&self.cells).marks_of(player)
    }

    /// Get cell at a coordinate
    pub fn at(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Make a move and return a new board state
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, pos: usize) -> Result<BoardState, crate::Error> {
        if pos >= BOARD_CELLS {
            return Err(crate::Error::InvalidPosition { position: pos });
        }

        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        let mut new_state = *self;
        new_state.cells[pos] = self.to_move.to_cell();
        new_state.to_move = self.to_move.opponent();
        Ok(new_state)
    }

    /// Get legal moves in this position (empty cells when game not terminal)
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
    }

    /// Check if current player has an immediate winning move available
    pub fn has_immediate_win(&self) -> bool {
        super::lines::LineAnalyzer::has_immediate_win(&self.cells, self.to_move)
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        super::lines::LineAnalyzer::has_won(&self.cells, player)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.has_won(Player::X) || self.has_won(Player::O) || !self.cells.contains(&Cell::Empty)
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        !self.cells.contains(&Cell::Empty) && self.winner().is_none()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Shareable string encoding, e.g. `XO......._X`
    pub fn encode(&self) -> String {
        format!(
            "{}_{}",
            self.cells.iter().map(|&c| c.to_char()).collect::<String>(),
            self.to_move.to_char()
        )
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(BOARD_SIDE) && i < BOARD_CELLS - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
