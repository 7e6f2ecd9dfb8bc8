use thiserror::Error;

/// Errors that can occur during peer communication.
#[derive(Debug, Error)]
pub enum PeerError {
    /// Network I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The peer sent an invalid handshake.
    #[error("invalid handshake")]
    InvalidHandshake,

    /// The peer's info hash doesn't match ours.
    #[error("info hash mismatch")]
    InfoHashMismatch,

    /// Received a malformed protocol message.
    #[error("invalid message: {0}")]
    InvalidMessage(String),

    /// Received a message ID outside the supported surface.
    #[error("invalid message id: {0}")]
    InvalidMessageId(u8),

    /// The peer broke the expected message sequence.
    #[error("expected {expected} message, got {got}")]
    UnexpectedMessage {
        expected: &'static str,
        got: &'static str,
    },

    /// A piece message carried a different block size than requested.
    #[error("block length mismatch: expected {expected}, got {got}")]
    BlockLengthMismatch { expected: u32, got: u32 },

    /// The assembled piece does not hash to the expected value.
    #[error("piece hash mismatch")]
    HashMismatch,

    /// The connection was closed by the peer.
    #[error("connection closed")]
    ConnectionClosed,

    /// Operation timed out.
    #[error("timeout")]
    Timeout,
}
