use thiserror::Error;

use crate::types::PlayerColor;

/// Errors raised by direct board access and board parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("expected 7 rows, got {0}")]
    RowCount(usize),

    #[error("row {row} has {width} cells, expected 7")]
    RowWidth { row: usize, width: usize },

    #[error("unknown symbol {symbol:?} at ({row}, {col})")]
    UnknownSymbol { symbol: char, row: usize, col: usize },
}

/// Reasons a requested move is refused. The engine state is untouched
/// whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveRejected {
    #[error("the game has already been won")]
    GameAlreadyWon,

    #[error("no player named {0:?} in this game")]
    UnknownPlayer(String),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("it is not this player's turn")]
    NotYourTurn,

    #[error("that marble does not belong to the player")]
    NotYourMarble,

    #[error("the marble is blocked from behind and cannot be pushed")]
    MarbleNotAccessible,

    #[error("the push would knock the player's own marble off the board")]
    SelfElimination,

    #[error("the push would immediately undo the previous push (Ko rule)")]
    KoViolation,
}

impl MoveRejected {
    /// Stable identifier for display layers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::GameAlreadyWon => "GameAlreadyWon",
            Self::UnknownPlayer(_) => "UnknownPlayer",
            Self::Board(_) => "OutOfBounds",
            Self::NotYourTurn => "NotYourTurn",
            Self::NotYourMarble => "NotYourMarble",
            Self::MarbleNotAccessible => "MarbleNotAccessible",
            Self::SelfElimination => "SelfElimination",
            Self::KoViolation => "KoViolation",
        }
    }

    /// False for caller mistakes (unknown name, off-board coordinate),
    /// true for moves the game rules forbid.
    pub fn is_rule_violation(&self) -> bool {
        !matches!(self, Self::UnknownPlayer(_) | Self::Board(_))
    }
}

/// Invalid game setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("both players are named {0:?}")]
    DuplicateName(String),

    #[error("both players chose {0}")]
    SameColor(PlayerColor),

    #[error("the starting board has no {0} marbles")]
    NoMarbles(PlayerColor),
}

/// Text input that does not name a direction or color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unrecognized direction {0:?} (expected L, R, F or B)")]
    Direction(String),

    #[error("unrecognized marble color {0:?} (expected W or B)")]
    Color(String),
}
