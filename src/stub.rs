#![cfg(feature = "std")]

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tokio::sync::Mutex;

use crate::protocol::domain::{ApiError, GameView, MoveOutcome, WireMove};
use crate::protocol::{GameApi, Message, PROTOCOL_VERSION};
use crate::transport::Transport;

/// Client side of a connection: a [`GameApi`] that forwards every call.
pub struct Stub<T: Transport> {
    transport: Mutex<T>,
    next_seq: AtomicU64,
    handshaken: AtomicBool,
}

impl<T: Transport> Stub<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Mutex::new(transport),
            next_seq: AtomicU64::new(0),
            handshaken: AtomicBool::new(false),
        }
    }

    async fn ensure_handshake(&self, transport: &mut T) -> anyhow::Result<()> {
        if self.handshaken.load(Ordering::SeqCst) {
            return Ok(());
        }
        transport
            .send(Message::Handshake {
                version: PROTOCOL_VERSION,
            })
            .await?;
        match transport.recv().await? {
            Message::HandshakeAck { version } if version == PROTOCOL_VERSION => {
                self.handshaken.store(true, Ordering::SeqCst);
                Ok(())
            }
            Message::HandshakeAck { version } => Err(anyhow::anyhow!(
                "Protocol version mismatch in HandshakeAck: expected {}, got {}",
                PROTOCOL_VERSION,
                version
            )),
            _ => Err(anyhow::anyhow!("Expected HandshakeAck")),
        }
    }

    /// Send one request built from a fresh sequence number and return the
    /// matching response. Error responses come back as [`ApiError`].
    async fn request(&self, build: impl FnOnce(u64) -> Message + Send) -> anyhow::Result<Message> {
        let mut transport = self.transport.lock().await;
        self.ensure_handshake(&mut transport).await?;
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        transport.send(build(seq)).await?;
        let reply = transport.recv().await?;
        match reply.seq() {
            Some(resp_seq) if resp_seq == seq => {}
            Some(resp_seq) => {
                return Err(anyhow::anyhow!(
                    "Sequence mismatch: expected {}, got {}",
                    seq,
                    resp_seq
                ))
            }
            None => return Err(anyhow::anyhow!("Unexpected message")),
        }
        match reply {
            Message::Error {
                status, message, ..
            } => Err(ApiError::new(status, message).into()),
            other => Ok(other),
        }
    }
}

#[async_trait::async_trait]
impl<T: Transport> GameApi for Stub<T> {
    async fn get_state(&self, game_id: &str) -> anyhow::Result<GameView> {
        let game_id = game_id.to_string();
        match self.request(|seq| Message::GetState { seq, game_id }).await? {
            Message::State { view, .. } => Ok(view),
            _ => Err(anyhow::anyhow!("Unexpected message")),
        }
    }

    async fn submit_move(&self, game_id: &str, mv: WireMove) -> anyhow::Result<MoveOutcome> {
        let game_id = game_id.to_string();
        match self
            .request(|seq| Message::SubmitMove { seq, game_id, mv })
            .await?
        {
            Message::MoveResult { outcome, .. } => Ok(outcome),
            _ => Err(anyhow::anyhow!("Unexpected message")),
        }
    }

    async fn reset(&self, game_id: &str) -> anyhow::Result<()> {
        let game_id = game_id.to_string();
        match self.request(|seq| Message::Reset { seq, game_id }).await? {
            Message::ResetAck { .. } => Ok(()),
            _ => Err(anyhow::anyhow!("Unexpected message")),
        }
    }
}
