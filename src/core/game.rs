use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::core::{
    board::Board,
    common::BoardError,
    config::{DEFAULT_COLS, DEFAULT_ROWS, NUM_PLAYERS},
    moves::{BoxCoord, Move},
};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlayerId {
    One = 1,
    Two = 2,
}

impl PlayerId {
    pub const ALL: [PlayerId; NUM_PLAYERS] = [PlayerId::One, PlayerId::Two];

    /// The player whose turn comes next.
    pub const fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Player number as shown to clients (1 or 2).
    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(PlayerId::One),
            2 => Some(PlayerId::Two),
            _ => None,
        }
    }

    const fn slot(self) -> usize {
        self as usize - 1
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
    Draw,
}

/// Turn and score bookkeeping on top of a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    current_player: PlayerId,
    scores: [u32; NUM_PLAYERS],
    box_owners: BTreeMap<BoxCoord, PlayerId>,
}

impl GameSession {
    /// A fresh game on the default board, player one to move.
    pub fn new() -> Self {
        let board = match Board::new(DEFAULT_ROWS, DEFAULT_COLS) {
            Ok(board) => board,
            Err(_) => unreachable!("default dimensions are positive"),
        };
        Self::from_board(board)
    }

    /// A fresh game on an empty `rows x cols` board.
    pub fn with_dimensions(rows: usize, cols: usize) -> Result<Self, BoardError> {
        Ok(Self::from_board(Board::new(rows, cols)?))
    }

    fn from_board(board: Board) -> Self {
        Self {
            board,
            current_player: PlayerId::One,
            scores: [0; NUM_PLAYERS],
            box_owners: BTreeMap::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player.slot()]
    }

    /// Scores indexed by seat, player one first.
    pub fn scores(&self) -> [u32; NUM_PLAYERS] {
        self.scores
    }

    pub fn box_owners(&self) -> &BTreeMap<BoxCoord, PlayerId> {
        &self.box_owners
    }

    pub fn owner(&self, b: BoxCoord) -> Option<PlayerId> {
        self.box_owners.get(&b).copied()
    }

    /// Play `mv` for the current player.
    ///
    /// Completed boxes are credited in the order the board reports them.
    /// Completing at least one box keeps the turn; otherwise it passes.
    pub fn submit(&mut self, mv: Move) -> Result<Vec<BoxCoord>, BoardError> {
        let completed = self.board.apply_move(mv)?;
        let player = self.current_player;
        for &b in &completed {
            self.scores[player.slot()] += 1;
            self.box_owners.entry(b).or_insert(player);
        }
        if completed.is_empty() {
            self.current_player = player.other();
        }
        Ok(completed)
    }

    /// `true` once every edge is drawn.
    pub fn is_game_over(&self) -> bool {
        self.board.legal_moves().is_empty()
    }

    pub fn status(&self) -> GameStatus {
        if !self.is_game_over() {
            return GameStatus::InProgress;
        }
        let (one, two) = (self.score(PlayerId::One), self.score(PlayerId::Two));
        match one.cmp(&two) {
            core::cmp::Ordering::Greater => GameStatus::Won(PlayerId::One),
            core::cmp::Ordering::Less => GameStatus::Won(PlayerId::Two),
            core::cmp::Ordering::Equal => GameStatus::Draw,
        }
    }

    /// Start over on an empty `rows x cols` board.
    ///
    /// Either everything is replaced or, on invalid dimensions, nothing is.
    pub fn reset(&mut self, rows: usize, cols: usize) -> Result<(), BoardError> {
        *self = Self::with_dimensions(rows, cols)?;
        Ok(())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
