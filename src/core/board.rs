//! Board state: edge storage, legality and box-completion detection.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::core::common::BoardError;
use crate::core::config::{horizontal_len, state_vector_len, vertical_len};
use crate::core::moves::{BoxCoord, Move, Orientation};

/// A `rows x cols` grid of boxes and the edges around them.
///
/// Each edge is stored as `0` (empty) or `1` (drawn) in two flat,
/// fixed-length buffers so the layout can be handed straight to a model:
/// - horizontal edges: `(rows + 1) * cols`, index `r * cols + c`
/// - vertical edges: `rows * (cols + 1)`, index `r * (cols + 1) + c`
///
/// The board knows nothing about players or turns.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    pub(crate) horizontal: Box<[u8]>,
    pub(crate) vertical: Box<[u8]>,
}

impl Board {
    /// Create an empty board.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        Self::with_edges(rows, cols, None, None)
    }

    /// Create a board from existing edge values.
    ///
    /// Supplied sequences must match the board dimensions exactly; any
    /// non-zero value counts as a drawn edge. Omitted sequences start empty.
    pub fn with_edges(
        rows: usize,
        cols: usize,
        horizontal: Option<&[u8]>,
        vertical: Option<&[u8]>,
    ) -> Result<Self, BoardError> {
        let (h_len, v_len) = edge_lengths(rows, cols)?;
        let horizontal = edge_buffer(Orientation::Horizontal, h_len, horizontal)?;
        let vertical = edge_buffer(Orientation::Vertical, v_len, vertical)?;
        Ok(Self {
            rows,
            cols,
            horizontal,
            vertical,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn horizontal_edges(&self) -> &[u8] {
        &self.horizontal
    }

    pub fn vertical_edges(&self) -> &[u8] {
        &self.vertical
    }

    /// Lengths of the horizontal and vertical edge buffers.
    pub fn edge_count(&self) -> (usize, usize) {
        (self.horizontal.len(), self.vertical.len())
    }

    /// Number of edges drawn so far.
    pub fn filled_count(&self) -> usize {
        count_set(&self.horizontal) + count_set(&self.vertical)
    }

    /// Returns `true` when every edge is drawn.
    pub fn is_full(&self) -> bool {
        self.horizontal.iter().chain(self.vertical.iter()).all(|&e| e == 1)
    }

    fn h_index(&self, r: usize, c: usize) -> Result<usize, BoardError> {
        if r <= self.rows && c < self.cols {
            Ok(r * self.cols + c)
        } else {
            Err(BoardError::OutOfBounds)
        }
    }

    fn v_index(&self, r: usize, c: usize) -> Result<usize, BoardError> {
        if r < self.rows && c <= self.cols {
            Ok(r * (self.cols + 1) + c)
        } else {
            Err(BoardError::OutOfBounds)
        }
    }

    /// Current value (0/1) of the edge named by `mv`.
    pub fn get_edge(&self, mv: Move) -> Result<u8, BoardError> {
        match mv.orientation {
            Orientation::Horizontal => Ok(self.horizontal[self.h_index(mv.r, mv.c)?]),
            Orientation::Vertical => Ok(self.vertical[self.v_index(mv.r, mv.c)?]),
        }
    }

    /// `true` iff the edge exists and is still empty. Never errors.
    pub fn is_legal(&self, mv: Move) -> bool {
        matches!(self.get_edge(mv), Ok(0))
    }

    /// All empty edges: horizontal row-major, then vertical row-major.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.horizontal.len() + self.vertical.len());
        for r in 0..=self.rows {
            for c in 0..self.cols {
                if self.horizontal[r * self.cols + c] == 0 {
                    moves.push(Move::horizontal(r, c));
                }
            }
        }
        for r in 0..self.rows {
            for c in 0..=self.cols {
                if self.vertical[r * (self.cols + 1) + c] == 0 {
                    moves.push(Move::vertical(r, c));
                }
            }
        }
        moves
    }

    /// Returns `true` when all four edges of `b` are drawn.
    pub fn is_box_complete(&self, b: BoxCoord) -> Result<bool, BoardError> {
        if b.br >= self.rows || b.bc >= self.cols {
            return Err(BoardError::OutOfBounds);
        }
        let top = self.horizontal[self.h_index(b.br, b.bc)?];
        let bottom = self.horizontal[self.h_index(b.br + 1, b.bc)?];
        let left = self.vertical[self.v_index(b.br, b.bc)?];
        let right = self.vertical[self.v_index(b.br, b.bc + 1)?];
        Ok(top + bottom + left + right == 4)
    }

    /// Boxes adjacent to `mv` that are complete, assuming the edge is set.
    ///
    /// Horizontal edges check the box above, then the box below. Vertical
    /// edges check the box to the left, then the box to the right.
    pub fn boxes_completed_by(&self, mv: Move) -> Vec<BoxCoord> {
        let mut candidates = [None, None];
        match mv.orientation {
            Orientation::Horizontal => {
                if mv.r >= 1 {
                    candidates[0] = Some(BoxCoord::new(mv.r - 1, mv.c));
                }
                if mv.r < self.rows {
                    candidates[1] = Some(BoxCoord::new(mv.r, mv.c));
                }
            }
            Orientation::Vertical => {
                if mv.c >= 1 {
                    candidates[0] = Some(BoxCoord::new(mv.r, mv.c - 1));
                }
                if mv.c < self.cols {
                    candidates[1] = Some(BoxCoord::new(mv.r, mv.c));
                }
            }
        }
        candidates
            .into_iter()
            .flatten()
            .filter(|&b| matches!(self.is_box_complete(b), Ok(true)))
            .collect()
    }

    /// Draw an edge and report the boxes it completed.
    pub fn apply_move(&mut self, mv: Move) -> Result<Vec<BoxCoord>, BoardError> {
        if !self.is_legal(mv) {
            return Err(BoardError::IllegalMove(mv));
        }
        match mv.orientation {
            Orientation::Horizontal => {
                let idx = self.h_index(mv.r, mv.c)?;
                self.horizontal[idx] = 1;
            }
            Orientation::Vertical => {
                let idx = self.v_index(mv.r, mv.c)?;
                self.vertical[idx] = 1;
            }
        }
        Ok(self.boxes_completed_by(mv))
    }
}

/// Horizontal and vertical edge counts for a `rows x cols` board.
///
/// Zero or unrepresentably large dimensions are `InvalidDimensions`.
pub(crate) fn edge_lengths(rows: usize, cols: usize) -> Result<(usize, usize), BoardError> {
    if rows == 0 || cols == 0 {
        return Err(BoardError::InvalidDimensions { rows, cols });
    }
    match (
        horizontal_len(rows, cols),
        vertical_len(rows, cols),
        state_vector_len(rows, cols),
    ) {
        (Some(h), Some(v), Some(_)) => Ok((h, v)),
        _ => Err(BoardError::InvalidDimensions { rows, cols }),
    }
}

fn edge_buffer(
    orientation: Orientation,
    expected: usize,
    values: Option<&[u8]>,
) -> Result<Box<[u8]>, BoardError> {
    match values {
        None => Ok(vec![0u8; expected].into_boxed_slice()),
        Some(values) if values.len() == expected => {
            Ok(values.iter().map(|&v| u8::from(v != 0)).collect())
        }
        Some(values) => Err(BoardError::InvalidEdgeLength {
            orientation,
            expected,
            actual: values.len(),
        }),
    }
}

fn count_set(edges: &[u8]) -> usize {
    edges.iter().filter(|&&e| e == 1).count()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board(rows={}, cols={}, horizontal_edges={}/{}, vertical_edges={}/{})",
            self.rows,
            self.cols,
            count_set(&self.horizontal),
            self.horizontal.len(),
            count_set(&self.vertical),
            self.vertical.len()
        )
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("horizontal", &self.horizontal)
            .field("vertical", &self.vertical)
            .finish()
    }
}
