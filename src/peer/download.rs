use super::connection::PeerConnection;
use super::error::PeerError;
use super::message::Message;
use bytes::{BufMut, Bytes, BytesMut};
use sha1::{Digest, Sha1};
use tracing::debug;

/// Request/response unit of the wire protocol: 16 KiB.
pub const BLOCK_SIZE: u32 = 16384;

/// One block request within a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRequest {
    pub index: u32,
    pub begin: u32,
    pub length: u32,
}

/// Partitions a piece into block requests in increasing offset order.
/// Every block is [`BLOCK_SIZE`] long except the last, which carries the
/// remainder when `piece_length` is not a multiple of the block size.
pub fn block_requests(
    piece_index: u32,
    piece_length: u32,
) -> impl Iterator<Item = BlockRequest> {
    (0..piece_length).step_by(BLOCK_SIZE as usize).map(move |begin| BlockRequest {
        index: piece_index,
        begin,
        length: (piece_length - begin).min(BLOCK_SIZE),
    })
}

/// Progress of the strict linear download sequence.
///
/// Valid transitions run left to right; any protocol violation, network
/// failure, or hash mismatch lands in the single terminal `Failed` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadState {
    AwaitingBitfield,
    AwaitingUnchoke,
    Requesting,
    Complete,
    Failed,
}

/// Downloads one piece over one connection and verifies it.
///
/// The sequence is fixed: receive the peer's bitfield, declare interest,
/// wait for unchoke, then request blocks one at a time in offset order.
/// There is no pipelining, no retry, and no peer re-selection; the first
/// connected peer is trusted to have the piece, and any deviation from
/// the expected sequence ends the session.
pub struct PieceDownload {
    piece_index: u32,
    piece_length: u32,
    expected_hash: [u8; 20],
    state: DownloadState,
    buffer: BytesMut,
}

impl PieceDownload {
    pub fn new(piece_index: u32, piece_length: u32, expected_hash: [u8; 20]) -> Self {
        Self {
            piece_index,
            piece_length,
            expected_hash,
            state: DownloadState::AwaitingBitfield,
            buffer: BytesMut::with_capacity(piece_length as usize),
        }
    }

    pub fn state(&self) -> DownloadState {
        self.state
    }

    /// Runs the download to completion, returning the verified piece
    /// bytes. On any error the state machine lands in
    /// [`DownloadState::Failed`] and nothing is returned.
    pub async fn run(&mut self, conn: &mut PeerConnection) -> Result<Bytes, PeerError> {
        match self.drive(conn).await {
            Ok(piece) => Ok(piece),
            Err(err) => {
                self.state = DownloadState::Failed;
                Err(err)
            }
        }
    }

    async fn drive(&mut self, conn: &mut PeerConnection) -> Result<Bytes, PeerError> {
        // The bitfield payload is deliberately unused: with no peer
        // selection, the first connected peer is assumed to have every
        // piece.
        match conn.receive().await? {
            Message::Bitfield(_) => {}
            other => return Err(unexpected("bitfield", &other)),
        }
        self.state = DownloadState::AwaitingUnchoke;

        conn.send(Message::Interested).await?;
        match conn.receive().await? {
            Message::Unchoke => {}
            other => return Err(unexpected("unchoke", &other)),
        }
        self.state = DownloadState::Requesting;

        for request in block_requests(self.piece_index, self.piece_length) {
            conn.send(Message::Request {
                index: request.index,
                begin: request.begin,
                length: request.length,
            })
            .await?;

            match conn.receive().await? {
                Message::Piece { index, begin, data } => {
                    if index != request.index || begin != request.begin {
                        return Err(PeerError::InvalidMessage(format!(
                            "piece message for block {}+{}, requested {}+{}",
                            index, begin, request.index, request.begin
                        )));
                    }
                    if data.len() as u32 != request.length {
                        return Err(PeerError::BlockLengthMismatch {
                            expected: request.length,
                            got: data.len() as u32,
                        });
                    }
                    self.buffer.put_slice(&data);
                }
                other => return Err(unexpected("piece", &other)),
            }

            debug!(
                piece = self.piece_index,
                begin = request.begin,
                length = request.length,
                "block received"
            );
        }

        let piece = self.buffer.split().freeze();

        let mut hasher = Sha1::new();
        hasher.update(&piece);
        let digest: [u8; 20] = hasher.finalize().into();

        // A corrupted piece is discarded, never returned.
        if digest != self.expected_hash {
            return Err(PeerError::HashMismatch);
        }

        self.state = DownloadState::Complete;
        debug!(piece = self.piece_index, "piece verified");

        Ok(piece)
    }
}

fn unexpected(expected: &'static str, got: &Message) -> PeerError {
    PeerError::UnexpectedMessage {
        expected,
        got: got.name(),
    }
}
