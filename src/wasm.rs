//! Browser-facing API. Display layers drive the game through [`KubaGame`]
//! and read state back as plain JS objects.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::{BoardError, MoveRejected};
use crate::game::RuleEngine;
use crate::types::{Coordinate, Direction, PlayerColor};

/// Error object thrown to JS when a move is refused.
#[derive(Debug, Serialize)]
struct Rejection {
    code: &'static str,
    message: String,
}

impl From<&MoveRejected> for Rejection {
    fn from(err: &MoveRejected) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

#[wasm_bindgen]
pub struct KubaGame {
    engine: RuleEngine,
}

#[wasm_bindgen]
impl KubaGame {
    /// Colors are given as `"W"`/`"B"` or `"white"`/`"black"`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        name_a: String,
        color_a: &str,
        name_b: String,
        color_b: &str,
    ) -> Result<KubaGame, JsError> {
        let color_a: PlayerColor = color_a.parse()?;
        let color_b: PlayerColor = color_b.parse()?;
        let engine = RuleEngine::new((name_a, color_a), (name_b, color_b))?;
        Ok(Self { engine })
    }

    /// Throws `{ code, message }` when the move is rejected. Rows and columns
    /// outside `0..7` are rejected as `OutOfBounds`, never wrapped.
    pub fn make_move(
        &mut self,
        player: &str,
        row: i32,
        col: i32,
        direction: &str,
    ) -> Result<(), JsValue> {
        let direction: Direction = direction.parse().map_err(JsError::from)?;
        let outcome = match board_coordinate(row, col) {
            Ok(coordinate) => self.engine.make_move(player, coordinate, direction),
            // The game-over and player checks still take precedence.
            Err(err) => self.engine.admit(player).and(Err(err.into())),
        };
        outcome.map_err(|err| {
            serde_wasm_bindgen::to_value(&Rejection::from(&err)).unwrap_or_else(Into::into)
        })
    }

    /// Full [`GameSnapshot`](crate::types::GameSnapshot) as a JS object.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.engine.snapshot())?)
    }

    /// Text board, one row per line.
    pub fn render(&self) -> String {
        self.engine.board().to_string()
    }

    pub fn current_turn(&self) -> Option<String> {
        self.engine.current_turn().map(str::to_string)
    }

    pub fn winner(&self) -> Option<String> {
        self.engine.winner().map(str::to_string)
    }

    pub fn captured(&self, player: &str) -> Option<u8> {
        self.engine.captured(player)
    }

    pub fn is_over(&self) -> bool {
        self.engine.is_over()
    }
}

/// Narrows JS numbers to a board coordinate without truncating.
fn board_coordinate(row: i32, col: i32) -> Result<Coordinate, BoardError> {
    match (u8::try_from(row), u8::try_from(col)) {
        (Ok(r), Ok(c)) if Coordinate::new(r, c).is_on_board() => Ok(Coordinate::new(r, c)),
        _ => Err(BoardError::OutOfBounds { row, col }),
    }
}

/// Routes `log` output and panics to the browser console. No-op off wasm.
#[wasm_bindgen]
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}
