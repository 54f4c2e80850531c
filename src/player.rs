use crate::types::{PlayerColor, PlayerState};

/// A participant in a game: name, marble color and captured reds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    color: PlayerColor,
    captured_red: u8,
}

impl Player {
    pub fn new(name: impl Into<String>, color: PlayerColor) -> Self {
        Self {
            name: name.into(),
            color,
            captured_red: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> PlayerColor {
        self.color
    }

    /// Red marbles this player has pushed off the board.
    pub fn captured_red(&self) -> u8 {
        self.captured_red
    }

    pub(crate) fn record_red_capture(&mut self) {
        self.captured_red += 1;
    }

    #[cfg(test)]
    pub(crate) fn set_captured_for_test(&mut self, count: u8) {
        self.captured_red = count;
    }

    pub(crate) fn to_state(&self) -> PlayerState {
        PlayerState {
            name: self.name.clone(),
            color: self.color,
            captured: self.captured_red,
        }
    }
}
