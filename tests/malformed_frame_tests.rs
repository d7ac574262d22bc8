use std::sync::Arc;

use dots_and_boxes::server::serve_connection;
use dots_and_boxes::transport::tcp::{read_frame, write_frame, TcpTransport, MAX_MESSAGE_SIZE};
use dots_and_boxes::transport::Transport;
use dots_and_boxes::{GameService, Message, SessionConfig, PROTOCOL_VERSION};
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::time::Duration;

/// Accept one connection, write `bytes` to it, then hang up.
async fn raw_peer(bytes: Vec<u8>) -> anyhow::Result<(std::net::SocketAddr, tokio::task::JoinHandle<()>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let task = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        socket.write_all(&bytes).await.unwrap();
        socket.flush().await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
    });
    Ok((addr, task))
}

#[tokio::test(flavor = "multi_thread")]
async fn test_oversize_length_prefix() -> anyhow::Result<()> {
    let (addr, peer) = raw_peer(vec![0xFF, 0xFF, 0xFF, 0xFF]).await?;
    let mut transport = TcpTransport::connect(addr).await?;

    let err = transport.recv().await.unwrap_err();
    assert!(err.to_string().contains("too large"));

    peer.await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_zero_length_frame() -> anyhow::Result<()> {
    let (addr, peer) = raw_peer(vec![0, 0, 0, 0]).await?;
    let mut transport = TcpTransport::connect(addr).await?;

    let err = transport.recv().await.unwrap_err();
    assert!(err.to_string().contains("length: 0"));

    peer.await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_truncated_frame() -> anyhow::Result<()> {
    let mut bytes = 100u32.to_be_bytes().to_vec();
    bytes.extend_from_slice(&[0u8; 10]);
    let (addr, peer) = raw_peer(bytes).await?;
    let mut transport = TcpTransport::connect(addr).await?;

    let err = transport.recv().await.unwrap_err();
    assert!(err.to_string().contains("closed by peer"));

    peer.await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_garbage_payload() -> anyhow::Result<()> {
    let mut bytes = 4u32.to_be_bytes().to_vec();
    bytes.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);
    let (addr, peer) = raw_peer(bytes).await?;
    let mut transport = TcpTransport::connect(addr).await?;

    let err = transport.recv().await.unwrap_err();
    assert!(err.to_string().contains("Deserialization error"));

    peer.await?;
    Ok(())
}

#[tokio::test]
async fn test_frame_roundtrip_in_memory() -> anyhow::Result<()> {
    let msg = Message::GetState {
        seq: 7,
        game_id: "default".into(),
    };
    let mut buf = Vec::new();
    write_frame(&mut buf, &msg, MAX_MESSAGE_SIZE).await?;
    let len = u32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]]) as usize;
    assert_eq!(len, buf.len() - 4);

    let decoded = read_frame(&mut buf.as_slice(), MAX_MESSAGE_SIZE).await?;
    assert_eq!(decoded, msg);
    Ok(())
}

#[tokio::test]
async fn test_send_respects_max_size() {
    let msg = Message::Handshake {
        version: PROTOCOL_VERSION,
    };
    let mut buf = Vec::new();
    let err = write_frame(&mut buf, &msg, 2).await.unwrap_err();
    assert!(err.to_string().contains("too large"));
    assert!(buf.is_empty());
}

/// Serve a single connection and hand back how the session ended.
async fn serve_one() -> anyhow::Result<(std::net::SocketAddr, tokio::task::JoinHandle<anyhow::Result<()>>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let task = tokio::spawn(async move {
        let (stream, _) = listener.accept().await?;
        let service = Arc::new(GameService::new(SessionConfig::default()));
        serve_connection(service, stream, Duration::from_secs(5)).await
    });
    Ok((addr, task))
}

async fn handshaken_socket(addr: std::net::SocketAddr) -> anyhow::Result<TcpStream> {
    let mut socket = TcpStream::connect(addr).await?;
    write_frame(
        &mut socket,
        &Message::Handshake {
            version: PROTOCOL_VERSION,
        },
        MAX_MESSAGE_SIZE,
    )
    .await?;
    let ack = read_frame(&mut socket, MAX_MESSAGE_SIZE).await?;
    assert_eq!(
        ack,
        Message::HandshakeAck {
            version: PROTOCOL_VERSION
        }
    );
    Ok(socket)
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_reports_garbage_after_handshake() -> anyhow::Result<()> {
    let (addr, server) = serve_one().await?;
    let mut socket = handshaken_socket(addr).await?;

    let mut bytes = 4u32.to_be_bytes().to_vec();
    bytes.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);
    socket.write_all(&bytes).await?;
    socket.flush().await?;

    let err = server.await?.unwrap_err();
    assert!(err.to_string().contains("Deserialization error"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_ends_cleanly_on_hangup() -> anyhow::Result<()> {
    let (addr, server) = serve_one().await?;
    let socket = handshaken_socket(addr).await?;
    drop(socket);

    server.await??;
    Ok(())
}
