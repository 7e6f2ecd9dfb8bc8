//! Peer wire protocol (BEP-3)
//!
//! This module implements the subset of the peer wire protocol needed to
//! fetch one piece from one peer: the 68-byte handshake, length-prefixed
//! message framing, and a strict linear download state machine
//! (bitfield → interested → unchoke → request/piece loop → SHA-1 verify).

mod connection;
mod download;
mod error;
mod message;
mod peer_id;
mod transport;

pub use connection::PeerConnection;
pub use download::{block_requests, BlockRequest, DownloadState, PieceDownload, BLOCK_SIZE};
pub use error::PeerError;
pub use message::{Handshake, Message, MessageId};
pub use peer_id::PeerId;
pub use transport::PeerTransport;
