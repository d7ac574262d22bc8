//! Wire-facing views of the core types.

use std::collections::BTreeMap;
use std::fmt;
use std::string::{String, ToString};
use std::vec::Vec;

use crate::core::{Board, BoardError, BoxCoord, GameSession, Move, Orientation, PlayerId};

/// HTTP-style status for a rejected request (illegal move, bad input).
pub const STATUS_BAD_REQUEST: u16 = 400;
/// HTTP-style status for a failure on the serving side.
pub const STATUS_INTERNAL: u16 = 500;

/// A move as sent by clients. Coordinates are signed so that bad input
/// survives decoding and is rejected by the game, not the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WireMove {
    pub orientation: Orientation,
    pub r: i64,
    pub c: i64,
}

impl WireMove {
    pub fn new(orientation: Orientation, r: i64, c: i64) -> Self {
        Self { orientation, r, c }
    }

    /// Core move, or `None` for negative coordinates.
    pub fn to_move(self) -> Option<Move> {
        let r = usize::try_from(self.r).ok()?;
        let c = usize::try_from(self.c).ok()?;
        Some(Move::new(self.orientation, r, c))
    }
}

impl From<Move> for WireMove {
    fn from(mv: Move) -> Self {
        Self {
            orientation: mv.orientation,
            r: i64::try_from(mv.r).unwrap_or(i64::MAX),
            c: i64::try_from(mv.c).unwrap_or(i64::MAX),
        }
    }
}

/// Full state of one game as reported to clients.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameView {
    pub rows: usize,
    pub cols: usize,
    pub horizontal_edges: Vec<u8>,
    pub vertical_edges: Vec<u8>,
    pub current_player: u8,
    /// Player number to boxes owned.
    pub scores: BTreeMap<u8, u32>,
    /// `"br,bc"` box key to owning player number.
    pub box_owners: BTreeMap<String, u8>,
    pub game_over: bool,
}

impl From<&GameSession> for GameView {
    fn from(session: &GameSession) -> Self {
        let board = session.board();
        GameView {
            rows: board.rows(),
            cols: board.cols(),
            horizontal_edges: board.horizontal_edges().to_vec(),
            vertical_edges: board.vertical_edges().to_vec(),
            current_player: session.current_player().number(),
            scores: PlayerId::ALL
                .iter()
                .map(|&p| (p.number(), session.score(p)))
                .collect(),
            box_owners: session
                .box_owners()
                .iter()
                .map(|(b, p)| (b.to_string(), p.number()))
                .collect(),
            game_over: session.is_game_over(),
        }
    }
}

impl GameView {
    /// Rebuild the board carried by this view.
    pub fn board(&self) -> Result<Board, BoardError> {
        Board::with_edges(
            self.rows,
            self.cols,
            Some(&self.horizontal_edges),
            Some(&self.vertical_edges),
        )
    }

    /// Box owners keyed by coordinate. Malformed keys or players are skipped.
    pub fn owners(&self) -> BTreeMap<BoxCoord, PlayerId> {
        self.box_owners
            .iter()
            .filter_map(|(key, &p)| Some((key.parse().ok()?, PlayerId::from_number(p)?)))
            .collect()
    }

    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores.get(&player.number()).copied().unwrap_or(0)
    }
}

/// Result of a successful move submission.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MoveOutcome {
    /// Boxes closed by this move, as `(br, bc)`.
    pub completed_boxes: Vec<(usize, usize)>,
    pub state: GameView,
}

/// A request failure the client is meant to see.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(STATUS_BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(STATUS_INTERNAL, message)
    }

    pub fn illegal_move() -> Self {
        Self::bad_request("Illegal move")
    }
}

impl From<BoardError> for ApiError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::IllegalMove(_) | BoardError::OutOfBounds => ApiError::illegal_move(),
            other => ApiError::bad_request(other.to_string()),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.status)
    }
}

impl std::error::Error for ApiError {}
