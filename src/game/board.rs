use std::fmt;

use log::debug;

use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Number of aligned tokens that wins the game.
pub const CONNECT: usize = 4;

/// Fewest tokens on the board before any player can have `CONNECT` in a line.
const MIN_MOVES_FOR_WIN: usize = 2 * CONNECT - 1;

/// Scan directions as (row step, column step). Row 0 is the top.
const DOWN: (isize, isize) = (1, 0);
const RIGHT: (isize, isize) = (0, 1);
const DOWN_RIGHT: (isize, isize) = (1, 1);
const DOWN_LEFT: (isize, isize) = (1, -1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Token(char),
}

impl Cell {
    /// Character to display for this cell; empty cells render as a space.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Token(token) => token,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

/// The vertical grid plus the count of cells still open.
///
/// Columns and rows are 1-indexed at the API; row 1 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    moves_remaining: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            moves_remaining: ROWS * COLS,
        }
    }

    pub fn rows(&self) -> usize {
        ROWS
    }

    pub fn columns(&self) -> usize {
        COLS
    }

    /// Number of empty cells left
    pub fn moves_remaining(&self) -> usize {
        self.moves_remaining
    }

    pub fn moves_played(&self) -> usize {
        ROWS * COLS - self.moves_remaining
    }

    /// Get the cell at a 1-indexed position.
    ///
    /// Panics if the position lies outside the board.
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        assert!(
            (1..=ROWS).contains(&row) && (1..=COLS).contains(&column),
            "cell ({row}, {column}) is outside the {ROWS}x{COLS} board"
        );
        self.cells[row - 1][column - 1]
    }

    /// Token symbol at a 1-indexed position, or `' '` when the cell is empty.
    pub fn token_at(&self, row: usize, column: usize) -> char {
        self.cell(row, column).symbol()
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        if !(1..=COLS).contains(&column) {
            return true;
        }
        self.cells[0][column - 1] != Cell::Empty
    }

    /// Columns that can still take a token
    pub fn legal_columns(&self) -> Vec<usize> {
        (1..=COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop `player`'s token into `column`. Returns false without touching the
    /// board if the column is out of range or full.
    pub fn place(&mut self, column: usize, player: &Player) -> bool {
        match self.try_place(column, player.token()) {
            Ok(row) => {
                debug!(
                    "{} placed '{}' at row {row}, column {column}",
                    player.name(),
                    player.token()
                );
                true
            }
            Err(err) => {
                debug!("{} rejected from column {column}: {err:?}", player.name());
                false
            }
        }
    }

    /// Drop a token into a column, returns the 1-indexed row where it landed
    pub fn try_place(&mut self, column: usize, token: char) -> Result<usize, MoveError> {
        if !(1..=COLS).contains(&column) {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(column) {
            return Err(MoveError::ColumnFull);
        }

        let col = column - 1;
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = Cell::Token(token);
                self.moves_remaining -= 1;
                return Ok(row + 1);
            }
        }

        unreachable!("column {column} has an open top cell but no open row");
    }

    pub fn is_tied(&self) -> bool {
        self.moves_remaining == 0
    }

    /// Check whether any player has `CONNECT` tokens in a line.
    ///
    /// Only cells that can start a full run are scanned: the top
    /// `ROWS - CONNECT + 1` rows for vertical and diagonal runs, the left
    /// `COLS - CONNECT + 1` columns for horizontal and down-right runs, and the
    /// right ones for down-left runs.
    pub fn is_won(&self) -> bool {
        if self.moves_played() < MIN_MOVES_FOR_WIN {
            return false;
        }

        let start_rows = 0..=ROWS - CONNECT;
        let start_cols = 0..=COLS - CONNECT;

        let vertical = (0..COLS)
            .any(|col| start_rows.clone().any(|row| self.run_from(row, col, DOWN)));
        if vertical {
            return true;
        }

        let horizontal = (0..ROWS)
            .any(|row| start_cols.clone().any(|col| self.run_from(row, col, RIGHT)));
        if horizontal {
            return true;
        }

        let down_right = start_rows.clone().any(|row| {
            start_cols
                .clone()
                .any(|col| self.run_from(row, col, DOWN_RIGHT))
        });
        if down_right {
            return true;
        }

        start_rows.clone().any(|row| {
            (CONNECT - 1..COLS)
                .rev()
                .any(|col| self.run_from(row, col, DOWN_LEFT))
        })
    }

    /// True if `CONNECT` equal tokens start at (row, col) and follow `step`.
    /// Leaving the board ends the run.
    fn run_from(&self, row: usize, col: usize, (row_step, col_step): (isize, isize)) -> bool {
        let start = self.cells[row][col];
        if start == Cell::Empty {
            return false;
        }

        let mut connected = 1;
        while connected < CONNECT {
            let offset = connected as isize;
            let (Some(r), Some(c)) = (
                row.checked_add_signed(row_step * offset),
                col.checked_add_signed(col_step * offset),
            ) else {
                return false;
            };
            match self.cells.get(r).and_then(|line| line.get(c)) {
                Some(&cell) if cell == start => connected += 1,
                _ => return false,
            }
        }
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.cells {
            write!(f, "|")?;
            for cell in line {
                write!(f, "{}|", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Alternating X/O column order that fills the board without a four.
    const TIE_SEQUENCE: [usize; 42] = [
        1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 5, 4, 4, 4, 4, 4, 4, 5, 5, 5, 5,
        5, 6, 6, 6, 6, 6, 6, 7, 7, 7, 7, 7, 7,
    ];

    fn empty_cells(board: &Board) -> usize {
        let mut count = 0;
        for row in 1..=ROWS {
            for col in 1..=COLS {
                if board.cell(row, col) == Cell::Empty {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 1..=ROWS {
            for col in 1..=COLS {
                assert_eq!(board.cell(row, col), Cell::Empty);
                assert_eq!(board.token_at(row, col), ' ');
            }
        }
        assert_eq!(board.moves_remaining(), ROWS * COLS);
        assert!(!board.is_tied());
        assert!(!board.is_won());
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        let row = board.try_place(4, 'X').unwrap();
        assert_eq!(row, ROWS); // Should land at bottom
        assert_eq!(board.token_at(ROWS, 4), 'X');

        let row = board.try_place(4, 'O').unwrap();
        assert_eq!(row, ROWS - 1); // Lands on top of the first piece
        assert_eq!(board.token_at(ROWS - 1, 4), 'O');
        assert_eq!(board.moves_remaining(), ROWS * COLS - 2);
    }

    #[test]
    fn test_place_with_player() {
        let mut board = Board::new();
        let player = Player::human("Player 1", 'X', Default::default());
        assert!(board.place(1, &player));
        assert_eq!(board.token_at(ROWS, 1), 'X');
        assert!(!board.place(0, &player));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        for _ in 0..ROWS {
            board.try_place(1, 'X').unwrap();
        }

        assert!(board.is_column_full(1));
        let before = board;
        assert_eq!(board.try_place(1, 'O'), Err(MoveError::ColumnFull));
        assert_eq!(board, before);
        assert_eq!(board.legal_columns(), vec![2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        board.try_place(3, 'X').unwrap();
        let before = board;

        for col in [0, COLS + 1, 100, usize::MAX] {
            assert_eq!(board.try_place(col, 'O'), Err(MoveError::InvalidColumn));
        }
        assert_eq!(board, before);
        assert_eq!(board.moves_remaining(), ROWS * COLS - 1);
    }

    #[test]
    fn test_moves_remaining_tracks_empty_cells() {
        let mut board = Board::new();
        let attempts = [1, 1, 8, 2, 0, 1, 1, 1, 1, 1, 3];
        for (i, &col) in attempts.iter().enumerate() {
            let token = if i % 2 == 0 { 'X' } else { 'O' };
            let _ = board.try_place(col, token);
            assert_eq!(board.moves_remaining(), empty_cells(&board));
        }
    }

    #[test]
    #[should_panic]
    fn test_cell_out_of_range_panics() {
        Board::new().cell(0, 1);
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..3 {
            board.try_place(1, 'X').unwrap();
            board.try_place(7, 'O').unwrap();
        }
        assert!(!board.is_won());
        board.try_place(1, 'X').unwrap();
        assert!(board.is_won());
    }

    #[test]
    fn test_vertical_win_at_top_of_column() {
        let mut board = Board::new();
        board.try_place(2, 'O').unwrap();
        board.try_place(2, 'O').unwrap();
        board.try_place(3, 'O').unwrap();
        for _ in 0..4 {
            board.try_place(2, 'X').unwrap();
        }
        assert!(board.is_column_full(2));
        assert!(board.is_won());
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 4..7 {
            board.try_place(col, 'X').unwrap();
            board.try_place(col, 'O').unwrap();
        }
        assert!(!board.is_won());
        board.try_place(7, 'X').unwrap();
        assert!(board.is_won());
    }

    #[test]
    fn test_diagonal_down_left_win() {
        let mut board = Board::new();
        // Create diagonal / pattern
        board.try_place(1, 'X').unwrap();

        board.try_place(2, 'O').unwrap();
        board.try_place(2, 'X').unwrap();

        board.try_place(3, 'O').unwrap();
        board.try_place(3, 'O').unwrap();
        board.try_place(3, 'X').unwrap();

        board.try_place(4, 'O').unwrap();
        board.try_place(4, 'O').unwrap();
        board.try_place(4, 'O').unwrap();
        assert!(!board.is_won());
        board.try_place(4, 'X').unwrap();

        assert!(board.is_won());
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let mut board = Board::new();
        // Create diagonal \ pattern
        board.try_place(7, 'X').unwrap();

        board.try_place(6, 'O').unwrap();
        board.try_place(6, 'X').unwrap();

        board.try_place(5, 'O').unwrap();
        board.try_place(5, 'O').unwrap();
        board.try_place(5, 'X').unwrap();

        board.try_place(4, 'O').unwrap();
        board.try_place(4, 'O').unwrap();
        board.try_place(4, 'O').unwrap();
        assert!(!board.is_won());
        board.try_place(4, 'X').unwrap();

        assert!(board.is_won());
    }

    #[test]
    fn test_diagonal_near_miss() {
        let mut board = Board::new();
        board.try_place(1, 'X').unwrap();

        board.try_place(2, 'O').unwrap();
        board.try_place(2, 'X').unwrap();

        board.try_place(3, 'O').unwrap();
        board.try_place(3, 'O').unwrap();
        board.try_place(3, 'X').unwrap();

        board.try_place(4, 'X').unwrap();
        board.try_place(4, 'O').unwrap();
        board.try_place(4, 'X').unwrap();
        board.try_place(4, 'O').unwrap();

        assert!(!board.is_won());
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 1..4 {
            board.try_place(col, 'X').unwrap();
            board.try_place(col, 'O').unwrap();
        }
        board.try_place(5, 'X').unwrap();
        assert!(!board.is_won());
    }

    #[test]
    fn test_win_not_checked_before_seven_moves() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.try_place(1, 'X').unwrap();
        }
        assert_eq!(board.moves_played(), 4);
        assert!(!board.is_won());
    }

    #[test]
    fn test_full_board_tie() {
        let mut board = Board::new();
        for (i, &col) in TIE_SEQUENCE.iter().enumerate() {
            assert!(!board.is_tied());
            let token = if i % 2 == 0 { 'X' } else { 'O' };
            board.try_place(col, token).unwrap();
        }
        assert!(board.is_tied());
        assert!(!board.is_won());
        assert!(board.legal_columns().is_empty());
    }

    #[test]
    fn test_display_renders_grid() {
        let mut board = Board::new();
        board.try_place(1, 'X').unwrap();
        board.try_place(7, 'O').unwrap();
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), ROWS);
        assert_eq!(lines[0], "| | | | | | | |");
        assert_eq!(lines[ROWS - 1], "|X| | | | | |O|");
    }
}
