use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::error::BoardError;
use crate::types::{BOARD_CELLS, BOARD_SIZE, Census, Coordinate, MarbleKind};

/// Standard Kuba starting position, row 0 first.
const OPENING_ROWS: [&str; BOARD_SIZE] = [
    "W W . . . B B",
    "W W . R . B B",
    ". . R R R . .",
    ". R R R R R .",
    ". . R R R . .",
    "B B . R . W W",
    "B B . . . W W",
];

static OPENING: Lazy<Board> = Lazy::new(|| {
    Board::from_rows(&OPENING_ROWS).unwrap_or_else(|err| unreachable!("opening layout: {err}"))
});

/// 7x7 grid of marbles. Knows nothing about turns or rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [MarbleKind; BOARD_CELLS],
}

impl Board {
    /// Creates the standard opening position:
    /// white and black 2x2 blocks in the corners, a red diamond in the center.
    pub fn new() -> Self {
        *OPENING
    }

    /// A board with every cell empty.
    pub fn empty() -> Self {
        Self {
            cells: [MarbleKind::Empty; BOARD_CELLS],
        }
    }

    /// Parses seven rows of `.`/`W`/`B`/`R` symbols. Whitespace inside a row
    /// is ignored.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::RowCount(rows.len()));
        }

        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line
                .as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            if symbols.len() != BOARD_SIZE {
                return Err(BoardError::RowWidth {
                    row,
                    width: symbols.len(),
                });
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                let kind = MarbleKind::from_symbol(symbol)
                    .ok_or(BoardError::UnknownSymbol { symbol, row, col })?;
                board.cells[row * BOARD_SIZE + col] = kind;
            }
        }

        Ok(board)
    }

    pub fn get(&self, coord: Coordinate) -> Result<MarbleKind, BoardError> {
        Ok(self.cells[checked_index(coord)?])
    }

    pub fn set(&mut self, coord: Coordinate, kind: MarbleKind) -> Result<(), BoardError> {
        self.cells[checked_index(coord)?] = kind;
        Ok(())
    }

    /// Counts marbles of each kind across all 49 cells.
    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for cell in &self.cells {
            match cell {
                MarbleKind::White => census.white += 1,
                MarbleKind::Black => census.black += 1,
                MarbleKind::Red => census.red += 1,
                MarbleKind::Empty => {}
            }
        }
        census
    }

    /// Converts board to `[u8; 49]`, see [`MarbleKind::code`].
    pub fn to_array(&self) -> [u8; BOARD_CELLS] {
        let mut board = [0u8; BOARD_CELLS];
        for (code, cell) in board.iter_mut().zip(&self.cells) {
            *code = cell.code();
        }
        board
    }

    /// Iterates rows from the front edge.
    pub fn rows(&self) -> impl Iterator<Item = &[MarbleKind]> {
        self.cells.chunks(BOARD_SIZE)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().filter(|line| !line.trim().is_empty()).collect();
        Self::from_rows(&rows)
    }
}

fn checked_index(coord: Coordinate) -> Result<usize, BoardError> {
    if coord.is_on_board() {
        Ok(coord.to_index())
    } else {
        Err(BoardError::OutOfBounds {
            row: coord.row.into(),
            col: coord.col.into(),
        })
    }
}
