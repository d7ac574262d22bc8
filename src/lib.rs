#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
pub mod player;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
pub mod selfplay;
#[cfg(feature = "std")]
pub mod server;
#[cfg(feature = "std")]
pub mod service;
#[cfg(feature = "std")]
pub mod skeleton;
#[cfg(feature = "std")]
pub mod stub;
#[cfg(feature = "std")]
pub mod transport;

pub use crate::core::*;
pub use player::{Player, RandomPlayer};

#[cfg(feature = "std")]
pub use cli::{print_game_view, render_board, render_game_view, run_cli};
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with};
#[cfg(feature = "std")]
pub use player::{CliPlayer, Command};
#[cfg(feature = "std")]
pub use protocol::domain;
#[cfg(feature = "std")]
pub use protocol::domain::{ApiError, GameView, MoveOutcome, WireMove};
#[cfg(feature = "std")]
pub use protocol::{GameApi, Message, PROTOCOL_VERSION};
#[cfg(feature = "std")]
pub use selfplay::{play_game, Step, Trajectory};
#[cfg(feature = "std")]
pub use service::{GameService, InMemoryStore, SessionConfig, SessionStore, SharedSession};
#[cfg(feature = "std")]
pub use skeleton::Skeleton;
#[cfg(feature = "std")]
pub use stub::Stub;
#[cfg(feature = "std")]
pub use transport::{in_memory::InMemoryTransport, tcp::TcpTransport, PeerClosed, Transport};
