#![cfg(feature = "std")]

pub mod domain;

use std::string::String;

use self::domain::*;

/// Version carried in handshakes; peers with a different version are refused.
pub const PROTOCOL_VERSION: u32 = 1;

/// Messages exchanged between a game client and the game service.
///
/// Every request carries a `seq` number that the matching response echoes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Message {
    /// First message from a client.
    Handshake { version: u32 },
    /// Server acceptance of a handshake.
    HandshakeAck { version: u32 },
    /// Request the full state of a game, creating it if unknown.
    GetState { seq: u64, game_id: String },
    /// Request to draw an edge for the player whose turn it is.
    SubmitMove { seq: u64, game_id: String, mv: WireMove },
    /// Request to start a game over with default dimensions.
    Reset { seq: u64, game_id: String },
    /// Response to `GetState`.
    State { seq: u64, view: GameView },
    /// Response to an accepted `SubmitMove`.
    MoveResult { seq: u64, outcome: MoveOutcome },
    /// Response to `Reset`.
    ResetAck { seq: u64 },
    /// A rejected or failed request.
    Error { seq: u64, status: u16, message: String },
}

impl Message {
    /// Sequence number of a request or response; `None` for handshakes.
    pub fn seq(&self) -> Option<u64> {
        match self {
            Message::Handshake { .. } | Message::HandshakeAck { .. } => None,
            Message::GetState { seq, .. }
            | Message::SubmitMove { seq, .. }
            | Message::Reset { seq, .. }
            | Message::State { seq, .. }
            | Message::MoveResult { seq, .. }
            | Message::ResetAck { seq }
            | Message::Error { seq, .. } => Some(*seq),
        }
    }
}

/// Operations a game service offers, locally or across a transport.
///
/// Client-visible failures are returned as an [`ApiError`] inside the
/// `anyhow::Error`; recover it with `downcast_ref::<ApiError>()`.
#[async_trait::async_trait]
pub trait GameApi: Send + Sync {
    async fn get_state(&self, game_id: &str) -> anyhow::Result<GameView>;
    async fn submit_move(&self, game_id: &str, mv: WireMove) -> anyhow::Result<MoveOutcome>;
    async fn reset(&self, game_id: &str) -> anyhow::Result<()>;
}

#[async_trait::async_trait]
impl<A: GameApi + ?Sized> GameApi for std::sync::Arc<A> {
    async fn get_state(&self, game_id: &str) -> anyhow::Result<GameView> {
        (**self).get_state(game_id).await
    }

    async fn submit_move(&self, game_id: &str, mv: WireMove) -> anyhow::Result<MoveOutcome> {
        (**self).submit_move(game_id, mv).await
    }

    async fn reset(&self, game_id: &str) -> anyhow::Result<()> {
        (**self).reset(game_id).await
    }
}
