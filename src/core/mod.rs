//! Core Dots and Boxes engine (no_std compatible)
//!
//! Pure, synchronous game logic: edge storage, move legality, box
//! completion, turn and score bookkeeping, and the flat state-vector
//! encoding. Only `alloc` is required, so it can be embedded in a training
//! pipeline or compiled to WebAssembly.

pub mod board;
pub mod common;
pub mod config;
pub mod encoding;
pub mod game;
pub mod moves;

// Re-export commonly used types
pub use board::Board;
pub use common::BoardError;
pub use config::*;
pub use game::{GameSession, GameStatus, PlayerId};
pub use moves::{BoxCoord, BoxKeyError, Move, Orientation};
