//! Flat vector encoding of board state for training consumers.
//!
//! The state vector is the horizontal block followed by the vertical block.
//! An edge's position in that vector doubles as its action index, so
//! `legal_moves()` order is ascending action-index order.

use alloc::vec::Vec;

use crate::core::board::{edge_lengths, Board};
use crate::core::common::BoardError;
use crate::core::moves::{Move, Orientation};

impl Board {
    /// Concatenated edges: `[horizontal..., vertical...]`.
    pub fn state_vector(&self) -> Vec<u8> {
        let mut vec = Vec::with_capacity(self.horizontal.len() + self.vertical.len());
        vec.extend_from_slice(&self.horizontal);
        vec.extend_from_slice(&self.vertical);
        vec
    }

    /// Rebuild a board from [`Board::state_vector`] output.
    pub fn from_state_vector(rows: usize, cols: usize, vec: &[u8]) -> Result<Self, BoardError> {
        let (h_len, v_len) = edge_lengths(rows, cols)?;
        let expected = h_len + v_len;
        if vec.len() != expected {
            return Err(BoardError::InvalidVectorLength {
                expected,
                actual: vec.len(),
            });
        }
        let (h, v) = vec.split_at(h_len);
        Board::with_edges(rows, cols, Some(h), Some(v))
    }

    /// 1 where an edge can still be drawn, aligned with the state vector.
    pub fn legal_mask(&self) -> Vec<u8> {
        self.horizontal
            .iter()
            .chain(self.vertical.iter())
            .map(|&e| 1 - e)
            .collect()
    }

    /// Action index of `mv`, or `None` when it is off the board.
    pub fn move_index(&self, mv: Move) -> Option<usize> {
        let (rows, cols) = (self.rows(), self.cols());
        match mv.orientation {
            Orientation::Horizontal if mv.r <= rows && mv.c < cols => Some(mv.r * cols + mv.c),
            Orientation::Vertical if mv.r < rows && mv.c <= cols => {
                Some(self.horizontal.len() + mv.r * (cols + 1) + mv.c)
            }
            _ => None,
        }
    }

    /// Move at action index `index`, the inverse of [`Board::move_index`].
    pub fn move_at(&self, index: usize) -> Option<Move> {
        let cols = self.cols();
        let h_len = self.horizontal.len();
        if index < h_len {
            Some(Move::horizontal(index / cols, index % cols))
        } else if index < h_len + self.vertical.len() {
            let i = index - h_len;
            Some(Move::vertical(i / (cols + 1), i % (cols + 1)))
        } else {
            None
        }
    }
}
