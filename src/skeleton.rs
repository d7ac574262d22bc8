#![cfg(feature = "std")]

use anyhow::anyhow;
use log::{debug, warn};

use crate::protocol::{domain::ApiError, GameApi, Message, PROTOCOL_VERSION};
use crate::transport::{is_peer_closed, Transport};

/// Server side of a connection: answers requests against a [`GameApi`].
pub struct Skeleton<E: GameApi, T: Transport> {
    engine: E,
    transport: T,
}

impl<E: GameApi, T: Transport> Skeleton<E, T> {
    pub fn new(engine: E, transport: T) -> Self {
        Self { engine, transport }
    }

    async fn handshake(&mut self) -> anyhow::Result<()> {
        match self.transport.recv().await? {
            Message::Handshake { version } if version == PROTOCOL_VERSION => {
                self.transport
                    .send(Message::HandshakeAck {
                        version: PROTOCOL_VERSION,
                    })
                    .await
            }
            Message::Handshake { version } => {
                warn!(
                    "handshake version mismatch: expected {}, peer sent {}",
                    PROTOCOL_VERSION, version
                );
                Err(anyhow!(
                    "Protocol version mismatch in Handshake: expected {}, got {}",
                    PROTOCOL_VERSION,
                    version
                ))
            }
            other => {
                warn!("expected Handshake, got {:?}", other);
                Err(anyhow!("Expected handshake"))
            }
        }
    }

    /// Serve requests until the peer disconnects.
    ///
    /// An orderly disconnect ends with `Ok(())`; malformed frames, timeouts
    /// and other transport failures are returned.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        self.handshake().await?;

        loop {
            let msg = match self.transport.recv().await {
                Ok(msg) => msg,
                Err(e) if is_peer_closed(&e) => {
                    debug!("peer closed: {}", e);
                    return Ok(());
                }
                Err(e) => return Err(e),
            };
            let reply = self.dispatch(msg).await;
            self.transport.send(reply).await?;
        }
    }

    async fn dispatch(&self, msg: Message) -> Message {
        debug!("request {:?}", msg);
        let Some(seq) = msg.seq() else {
            warn!("unexpected handshake after session start");
            return Message::Error {
                seq: 0,
                status: crate::protocol::domain::STATUS_BAD_REQUEST,
                message: "Unexpected handshake".into(),
            };
        };
        let result = match msg {
            Message::GetState { game_id, .. } => self
                .engine
                .get_state(&game_id)
                .await
                .map(|view| Message::State { seq, view }),
            Message::SubmitMove { game_id, mv, .. } => self
                .engine
                .submit_move(&game_id, mv)
                .await
                .map(|outcome| Message::MoveResult { seq, outcome }),
            Message::Reset { game_id, .. } => self
                .engine
                .reset(&game_id)
                .await
                .map(|()| Message::ResetAck { seq }),
            other => {
                warn!("unexpected request {:?}", other);
                Err(ApiError::bad_request("Unexpected message").into())
            }
        };
        result.unwrap_or_else(|e| {
            let api = match e.downcast_ref::<ApiError>() {
                Some(api) => api.clone(),
                None => {
                    warn!("request {} failed: {:#}", seq, e);
                    ApiError::internal(e.to_string())
                }
            };
            Message::Error {
                seq,
                status: api.status,
                message: api.message,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::service::{GameService, SessionConfig};
    use crate::transport::PeerClosed;

    /// Replays scripted receive results and records what was sent.
    struct Scripted {
        incoming: VecDeque<anyhow::Result<Message>>,
        sent: Vec<Message>,
    }

    impl Scripted {
        fn new(incoming: Vec<anyhow::Result<Message>>) -> Self {
            Self {
                incoming: incoming.into(),
                sent: Vec::new(),
            }
        }
    }

    #[async_trait::async_trait]
    impl Transport for Scripted {
        async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
            self.sent.push(msg);
            Ok(())
        }

        async fn recv(&mut self) -> anyhow::Result<Message> {
            self.incoming
                .pop_front()
                .unwrap_or_else(|| Err(PeerClosed("Channel closed").into()))
        }
    }

    fn handshake() -> anyhow::Result<Message> {
        Ok(Message::Handshake {
            version: PROTOCOL_VERSION,
        })
    }

    #[tokio::test]
    async fn decode_error_is_returned() {
        let transport = Scripted::new(vec![
            handshake(),
            Err(anyhow!("Deserialization error: garbage")),
        ]);
        let mut skeleton = Skeleton::new(GameService::new(SessionConfig::default()), transport);
        let err = skeleton.run().await.unwrap_err();
        assert!(err.to_string().contains("Deserialization error"));
        assert!(!is_peer_closed(&err));
    }

    #[tokio::test]
    async fn disconnect_ends_cleanly() {
        let transport = Scripted::new(vec![
            handshake(),
            Ok(Message::GetState {
                seq: 3,
                game_id: "g".into(),
            }),
            Err(PeerClosed("Connection closed by peer").into()),
        ]);
        let mut skeleton = Skeleton::new(GameService::new(SessionConfig::default()), transport);
        skeleton.run().await.unwrap();
        assert_eq!(skeleton.transport.sent.len(), 2);
        assert!(matches!(skeleton.transport.sent[1], Message::State { seq: 3, .. }));
    }

    #[tokio::test]
    async fn timeout_is_returned() {
        let transport = Scripted::new(vec![
            handshake(),
            Err(anyhow!("Receive timeout after 5s")),
        ]);
        let mut skeleton = Skeleton::new(GameService::new(SessionConfig::default()), transport);
        assert!(skeleton.run().await.is_err());
    }
}
