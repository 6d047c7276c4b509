//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rows, columns and diagonals, as cell indices
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Symbol used for this cell in board lines of the input file
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '-' | '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
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
}

/// Complete board state including cells and whose turn it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
    pub to_move: Player,
}

impl BoardState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            to_move: Player::X,
        }
    }

    /// Build a state from raw cells; X moves next on even ply, O on odd ply.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        let ply = cells.iter().filter(|&&c| c != Cell::Empty).count();
        let to_move = if ply % 2 == 0 { Player::X } else { Player::O };
        BoardState { cells, to_move }
    }

    /// Parse a board line such as `X-O--X---`.
    ///
    /// Surrounding whitespace is ignored. Piece counts are not validated.
    ///
    /// # Errors
    ///
    /// Returns error if the line does not hold exactly 9 symbols or any
    /// symbol is not a valid cell.
    pub fn from_label(line: &str) -> Result<Self, crate::Error> {
        let trimmed = line.trim();
        let count = trimmed.chars().count();
        if count != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: count,
                context: line.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, c) in trimmed.chars().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: line.to_string(),
            })?;
        }

        Ok(Self::from_cells(cells))
    }

    /// The 9-symbol board line for this state
    pub fn label(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    /// Number of occupied cells (moves played so far)
    pub fn ply(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
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
        if pos >= 9 || self.cells[pos] != Cell::Empty {
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

    /// True when `player` holds all three cells of some line
    pub fn has_won(&self, player: Player) -> bool {
        let mark = player.to_cell();
        LINES.iter().any(|line| line.map(|i| self.cells[i]) == [mark; 3])
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.has_won(Player::X) || self.has_won(Player::O) || self.ply() == 9
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
            if (i + 1) % 3 == 0 && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
