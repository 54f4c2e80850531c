use log::{debug, info};

use crate::board::Board;
use crate::error::{BoardError, MoveRejected, SetupError};
use crate::player::Player;
use crate::types::{
    Census, Coordinate, Direction, GameSnapshot, GameStatus, MarbleKind, PlayerColor, PushRecord,
};

/// Captured reds needed to win.
pub const RED_TO_WIN: u8 = 7;

/// Kuba rules: owns the board and both players and applies pushes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEngine {
    board: Board,
    players: [Player; 2],
    current_turn: Option<usize>,
    winner: Option<usize>,
    last_push: Option<PushRecord>,
}

/// Where a push would go, computed before anything is mutated.
#[derive(Debug)]
struct PushTrace {
    /// Contiguous occupied cells starting at the origin.
    run: Vec<Coordinate>,
    terminal: Coordinate,
    /// Marble that falls off when the run reaches the far edge.
    ejected: Option<MarbleKind>,
}

impl RuleEngine {
    /// Starts a game from the standard opening position.
    pub fn new(
        player_a: (impl Into<String>, PlayerColor),
        player_b: (impl Into<String>, PlayerColor),
    ) -> Result<Self, SetupError> {
        Self::from_position(player_a, player_b, Board::new())
    }

    /// Starts a game from an arbitrary position.
    pub fn from_position(
        player_a: (impl Into<String>, PlayerColor),
        player_b: (impl Into<String>, PlayerColor),
        board: Board,
    ) -> Result<Self, SetupError> {
        let a = Player::new(player_a.0, player_a.1);
        let b = Player::new(player_b.0, player_b.1);

        if a.name() == b.name() {
            return Err(SetupError::DuplicateName(a.name().to_string()));
        }
        if a.color() == b.color() {
            return Err(SetupError::SameColor(a.color()));
        }
        let census = board.census();
        for color in [PlayerColor::White, PlayerColor::Black] {
            if census.of_color(color) == 0 {
                return Err(SetupError::NoMarbles(color));
            }
        }

        Ok(Self {
            board,
            players: [a, b],
            current_turn: None,
            winner: None,
            last_push: None,
        })
    }

    /// Validates and applies one push. On error nothing changes.
    pub fn make_move(
        &mut self,
        player_name: &str,
        coordinate: Coordinate,
        direction: Direction,
    ) -> Result<(), MoveRejected> {
        let result = self.try_move(player_name, coordinate, direction);
        if let Err(reason) = &result {
            debug!("rejected {player_name} {coordinate} {direction}: {reason}");
        }
        result
    }

    fn try_move(
        &mut self,
        player_name: &str,
        coordinate: Coordinate,
        direction: Direction,
    ) -> Result<(), MoveRejected> {
        let mover = self.admit(player_name)?;
        let marble = self.board.get(coordinate)?;

        if self.current_turn.is_some_and(|turn| turn != mover) {
            return Err(MoveRejected::NotYourTurn);
        }

        let color = self.players[mover].color();
        if marble != color.marble() {
            return Err(MoveRejected::NotYourMarble);
        }

        if let Some(behind) = coordinate.step(direction.reverse()) {
            if self.board.get(behind)? != MarbleKind::Empty {
                return Err(MoveRejected::MarbleNotAccessible);
            }
        }

        let trace = trace_push(&self.board, coordinate, direction)?;
        if trace.ejected == Some(color.marble()) {
            return Err(MoveRejected::SelfElimination);
        }

        if self
            .last_push
            .is_some_and(|last| last.terminal == coordinate && last.direction == direction.reverse())
        {
            return Err(MoveRejected::KoViolation);
        }

        let mut board = self.board;
        apply_push(&mut board, &trace)?;

        self.board = board;
        if trace.ejected == Some(MarbleKind::Red) {
            self.players[mover].record_red_capture();
        }
        let record = PushRecord {
            origin: coordinate,
            terminal: trace.terminal,
            direction,
            ejected: trace.ejected,
        };
        self.last_push = Some(record);
        debug!(
            "{player_name} pushed {coordinate} {direction} to {}, ejected {:?}",
            record.terminal, record.ejected
        );

        self.winner = self.detect_winner();
        if let Some(winner) = self.winner {
            info!("{} wins", self.players[winner].name());
        }
        self.current_turn = Some(1 - mover);

        Ok(())
    }

    /// Checks that run before the coordinate is looked at: the game is still
    /// open and `player_name` is seated. Returns the mover's slot.
    pub(crate) fn admit(&self, player_name: &str) -> Result<usize, MoveRejected> {
        if self.winner.is_some() {
            return Err(MoveRejected::GameAlreadyWon);
        }
        self.slot_of(player_name)
            .ok_or_else(|| MoveRejected::UnknownPlayer(player_name.to_string()))
    }

    /// Capture win takes priority over elimination.
    fn detect_winner(&self) -> Option<usize> {
        if let Some(slot) = self
            .players
            .iter()
            .position(|p| p.captured_red() >= RED_TO_WIN)
        {
            return Some(slot);
        }

        let census = self.board.census();
        self.players
            .iter()
            .position(|p| census.of_color(p.color().opponent()) == 0)
    }

    fn slot_of(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name() == name)
    }

    /// Name of the player to move, `None` before the first move.
    pub fn current_turn(&self) -> Option<&str> {
        self.current_turn.map(|slot| self.players[slot].name())
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.map(|slot| self.players[slot].name())
    }

    /// Red marbles captured by `player_name`, `None` for an unknown name.
    pub fn captured(&self, player_name: &str) -> Option<u8> {
        self.player(player_name).map(Player::captured_red)
    }

    pub fn marble_at(&self, coordinate: Coordinate) -> Result<MarbleKind, BoardError> {
        self.board.get(coordinate)
    }

    pub fn marble_census(&self) -> Census {
        self.board.census()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.slot_of(name).map(|slot| &self.players[slot])
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn last_push(&self) -> Option<&PushRecord> {
        self.last_push.as_ref()
    }

    pub fn status(&self) -> GameStatus {
        match (self.winner, self.current_turn) {
            (Some(_), _) => GameStatus::Won,
            (None, Some(_)) => GameStatus::InProgress,
            (None, None) => GameStatus::NotStarted,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.to_array().to_vec(),
            status: self.status(),
            current_turn: self.current_turn().map(str::to_string),
            winner: self.winner().map(str::to_string),
            players: self.players.iter().map(Player::to_state).collect(),
            census: self.board.census(),
            last_push: self.last_push,
        }
    }

    #[cfg(test)]
    fn set_captured_for_test(&mut self, name: &str, count: u8) {
        let slot = self.slot_of(name).expect("known player");
        self.players[slot].set_captured_for_test(count);
    }
}

/// Walks from `origin` along `direction` over occupied cells until an empty
/// cell or the far edge.
fn trace_push(
    board: &Board,
    origin: Coordinate,
    direction: Direction,
) -> Result<PushTrace, BoardError> {
    let mut run = vec![origin];
    let mut cursor = origin;

    loop {
        match cursor.step(direction) {
            None => {
                let ejected = board.get(cursor)?;
                return Ok(PushTrace {
                    run,
                    terminal: cursor,
                    ejected: Some(ejected),
                });
            }
            Some(next) if board.get(next)? == MarbleKind::Empty => {
                return Ok(PushTrace {
                    run,
                    terminal: next,
                    ejected: None,
                });
            }
            Some(next) => {
                run.push(next);
                cursor = next;
            }
        }
    }
}

/// Shifts every marble of the run one cell forward. The origin ends up empty.
fn apply_push(board: &mut Board, trace: &PushTrace) -> Result<(), BoardError> {
    let mut carried = MarbleKind::Empty;
    for &cell in &trace.run {
        let here = board.get(cell)?;
        board.set(cell, carried)?;
        carried = here;
    }
    // Off the edge, `carried` is the ejected marble and is dropped.
    if trace.ejected.is_none() {
        board.set(trace.terminal, carried)?;
    }
    Ok(())
}
