use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ParseError;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 7;
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum MarbleKind {
    #[default]
    Empty,
    White,
    Black,
    Red,
}

impl MarbleKind {
    /// One-character symbol used by the text board format.
    pub fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::White => 'W',
            Self::Black => 'B',
            Self::Red => 'R',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Self::Empty),
            'W' => Some(Self::White),
            'B' => Some(Self::Black),
            'R' => Some(Self::Red),
            _ => None,
        }
    }

    /// Flat-array code: 0=empty, 1=white, 2=black, 3=red.
    pub fn code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::White => 1,
            Self::Black => 2,
            Self::Red => 3,
        }
    }
}

/// Marble color owned by a player. Red is never owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlayerColor {
    White,
    Black,
}

impl PlayerColor {
    pub fn marble(self) -> MarbleKind {
        match self {
            Self::White => MarbleKind::White,
            Self::Black => MarbleKind::Black,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::White => f.write_str("white"),
            Self::Black => f.write_str("black"),
        }
    }
}

impl FromStr for PlayerColor {
    type Err = ParseError;

    /// Accepts `W`/`B` or the full color name, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("w") || s.eq_ignore_ascii_case("white") {
            Ok(Self::White)
        } else if s.eq_ignore_ascii_case("b") || s.eq_ignore_ascii_case("black") {
            Ok(Self::Black)
        } else {
            Err(ParseError::Color(s.to_string()))
        }
    }
}

/// Push direction. Row 0 is the front edge, so `Forward` decreases the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Left,
    Right,
    Forward,
    Back,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Forward,
        Direction::Back,
    ];

    pub fn reverse(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Forward => Self::Back,
            Self::Back => Self::Forward,
        }
    }

    /// Unit step as `(row, col)` deltas.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Left => (0, -1),
            Self::Right => (0, 1),
            Self::Forward => (-1, 0),
            Self::Back => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Forward => "forward",
            Self::Back => "back",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    /// Accepts `L`/`R`/`F`/`B` or the full direction name, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Direction::ALL
            .into_iter()
            .find(|dir| {
                let name = dir.to_string();
                s.eq_ignore_ascii_case(&name) || s.eq_ignore_ascii_case(&name[..1])
            })
            .ok_or_else(|| ParseError::Direction(s.to_string()))
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coordinate {
    pub row: u8,
    pub col: u8,
}

impl Coordinate {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Neighbor one step in `direction`, or `None` past the board edge.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if in_bounds(row, col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub(crate) fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u8, u8)> for Coordinate {
    fn from((row, col): (u8, u8)) -> Self {
        Self::new(row, col)
    }
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

/// Marble counts per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Census {
    pub white: u8,
    pub black: u8,
    pub red: u8,
}

impl Census {
    pub fn of_color(&self, color: PlayerColor) -> u8 {
        match color {
            PlayerColor::White => self.white,
            PlayerColor::Black => self.black,
        }
    }

    pub fn total(&self) -> u8 {
        self.white + self.black + self.red
    }
}

/// Record of the last accepted push.
///
/// `terminal` and `direction` drive the Ko rule; `origin` and `ejected`
/// are kept for display layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PushRecord {
    pub origin: Coordinate,
    /// Last cell the chain reached: the empty cell that absorbed it, or the
    /// edge cell when a marble fell off.
    pub terminal: Coordinate,
    pub direction: Direction,
    /// Marble pushed off the board, if any.
    pub ejected: Option<MarbleKind>,
}

/// Coarse game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Won,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerState {
    pub name: String,
    pub color: PlayerColor,
    pub captured: u8,
}

/// Public game state handed to display layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Row-major cell codes, see [`MarbleKind::code`].
    pub board: Vec<u8>,
    pub status: GameStatus,
    pub current_turn: Option<String>,
    pub winner: Option<String>,
    pub players: Vec<PlayerState>,
    pub census: Census,
    pub last_push: Option<PushRecord>,
}
