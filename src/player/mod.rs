//! Player trait and implementations
//!
//! - RandomPlayer: uniform choice among legal moves, for data generation
//! - CliPlayer: interactive command-line player

use rand::rngs::SmallRng;

use crate::core::{Board, BoxCoord, GameSession, Move};

/// Something that picks edges to draw.
pub trait Player: Send {
    /// Choose the next edge, or `None` to stop playing.
    fn select_move(&mut self, rng: &mut SmallRng, board: &Board) -> Option<Move>;

    /// Inform the player which boxes its last move closed.
    fn handle_move_result(&mut self, _mv: Move, _completed: &[BoxCoord]) {}

    /// Called with the whole session before each of this player's turns.
    fn observe_session(&mut self, _session: &GameSession) {}
}

pub mod random;
pub use random::RandomPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_command, parse_move, CliPlayer, Command};
