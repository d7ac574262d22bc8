use std::fmt;

use crate::protocol::Message;

/// The peer went away: end of stream, reset connection or dropped channel.
///
/// Transports return it inside `anyhow::Error`; callers tell an orderly
/// hang-up from a real failure with `downcast_ref::<PeerClosed>()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeerClosed(pub &'static str);

impl fmt::Display for PeerClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for PeerClosed {}

/// `true` when `err` only says the peer disconnected.
pub fn is_peer_closed(err: &anyhow::Error) -> bool {
    err.downcast_ref::<PeerClosed>().is_some()
}

/// A bidirectional, message-oriented channel between client and service.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()>;
    async fn recv(&mut self) -> anyhow::Result<Message>;
}

#[async_trait::async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        (**self).send(msg).await
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        (**self).recv().await
    }
}

pub mod in_memory;
pub mod tcp;
