use super::error::PeerError;
use super::message::{Handshake, Message};
use super::peer_id::PeerId;
use super::transport::PeerTransport;
use std::net::SocketAddr;
use tokio::net::TcpStream;
use tracing::debug;

/// A handshake-completed session with one peer.
///
/// The connection owns its TCP stream; dropping the connection closes the
/// socket, so every exit path of a download releases it.
pub struct PeerConnection {
    addr: SocketAddr,
    remote_id: PeerId,
    transport: PeerTransport,
}

impl PeerConnection {
    /// Dials `addr` and performs the handshake exchange.
    ///
    /// Fails if the peer answers with a malformed handshake or echoes a
    /// different info hash than ours.
    pub async fn connect(
        addr: SocketAddr,
        info_hash: [u8; 20],
        peer_id: &PeerId,
    ) -> Result<Self, PeerError> {
        let stream = TcpStream::connect(addr).await?;
        let mut transport = PeerTransport::new(stream);

        let handshake = Handshake::new(info_hash, *peer_id.as_bytes());
        transport.send_handshake(&handshake).await?;

        let theirs = transport.receive_handshake().await?;

        if theirs.info_hash != info_hash {
            return Err(PeerError::InfoHashMismatch);
        }

        let remote_id = PeerId::from_bytes(theirs.peer_id);
        debug!(peer = %addr, remote_id = %remote_id, "handshake complete");

        Ok(Self {
            addr,
            remote_id,
            transport,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// The peer ID from the remote end of the handshake.
    pub fn remote_id(&self) -> &PeerId {
        &self.remote_id
    }

    pub async fn send(&mut self, message: Message) -> Result<(), PeerError> {
        self.transport.send_message(&message).await
    }

    pub async fn receive(&mut self) -> Result<Message, PeerError> {
        self.transport.receive_message().await
    }
}
