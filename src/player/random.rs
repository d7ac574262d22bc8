use rand::rngs::SmallRng;
use rand::Rng;

use super::Player;
use crate::core::{Board, Move};

/// Draws a uniformly random empty edge. Not a strategy; used to generate
/// varied boards for training data and smoke tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomPlayer {
    fn select_move(&mut self, rng: &mut SmallRng, board: &Board) -> Option<Move> {
        let moves = board.legal_moves();
        if moves.is_empty() {
            return None;
        }
        Some(moves[rng.random_range(0..moves.len())])
    }
}
