use wasm_bindgen::prelude::*;

pub mod board;
pub mod error;
pub mod game;
pub mod player;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use error::{BoardError, MoveRejected, ParseError, SetupError};
pub use game::{RED_TO_WIN, RuleEngine};
pub use player::Player;
pub use types::{
    BOARD_CELLS, BOARD_SIZE, Census, Coordinate, Direction, GameSnapshot, GameStatus, MarbleKind,
    PlayerColor, PlayerState, PushRecord,
};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
