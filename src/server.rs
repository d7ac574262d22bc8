#![cfg(feature = "std")]

//! TCP accept loop: one task and one [`Skeleton`] per connection, all
//! sharing a single [`GameService`].

use std::sync::Arc;

use log::{info, warn};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::Duration;

use crate::protocol::GameApi;
use crate::skeleton::Skeleton;
use crate::transport::tcp::TcpTransport;

/// How long a connected client may stay silent before it is dropped.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(300);

/// Serve one accepted connection until the client goes away.
pub async fn serve_connection<E>(
    service: Arc<E>,
    stream: TcpStream,
    idle_timeout: Duration,
) -> anyhow::Result<()>
where
    E: GameApi + ?Sized + 'static,
{
    stream.set_nodelay(true)?;
    let transport = TcpTransport::with_timeout(stream, idle_timeout);
    let mut skeleton = Skeleton::new(service, transport);
    skeleton.run().await
}

/// Accept connections forever, spawning a task for each.
pub async fn serve<E>(listener: TcpListener, service: Arc<E>, idle_timeout: Duration) -> anyhow::Result<()>
where
    E: GameApi + ?Sized + 'static,
{
    info!("listening on {}", listener.local_addr()?);
    loop {
        let (stream, addr) = listener.accept().await?;
        info!("client connected from {}", addr);
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            match serve_connection(service, stream, idle_timeout).await {
                Ok(()) => info!("client {} disconnected", addr),
                Err(e) => warn!("client {} dropped: {:#}", addr, e),
            }
        });
    }
}
