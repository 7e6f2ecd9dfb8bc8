use super::error::TrackerError;
use crate::bencode::decode;
use std::net::{Ipv4Addr, SocketAddrV4};

/// A tracker's answer to an announce request.
#[derive(Debug, Clone)]
pub struct AnnounceResponse {
    /// Seconds to wait before re-announcing. Parsed when present; the
    /// single-piece download flow does not re-announce.
    pub interval: Option<u32>,
    /// Peer endpoints from the compact `peers` string.
    pub peers: Vec<SocketAddrV4>,
}

/// One 6-byte record from a compact peer list: 4 bytes IPv4 + 2 bytes
/// big-endian port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactPeer {
    pub ip: Ipv4Addr,
    pub port: u16,
}

impl CompactPeer {
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 6 {
            return None;
        }
        let ip = Ipv4Addr::new(bytes[0], bytes[1], bytes[2], bytes[3]);
        let port = u16::from_be_bytes([bytes[4], bytes[5]]);
        Some(Self { ip, port })
    }

    pub fn to_socket_addr(self) -> SocketAddrV4 {
        SocketAddrV4::new(self.ip, self.port)
    }
}

/// Parses a bencoded announce response body.
///
/// A `failure reason` key surfaces as [`TrackerError::Failure`]. The
/// `peers` field must be a byte string whose length is a multiple of 6;
/// an empty string is a valid, empty peer list.
pub fn parse_announce(body: &[u8]) -> Result<AnnounceResponse, TrackerError> {
    let value = decode(body)?;
    let dict = value
        .as_dict()
        .ok_or_else(|| TrackerError::InvalidResponse("expected dict".into()))?;

    if let Some(failure) = dict
        .get(b"failure reason".as_slice())
        .and_then(|v| v.as_str())
    {
        return Err(TrackerError::Failure(failure.to_string()));
    }

    let interval = dict
        .get(b"interval".as_slice())
        .and_then(|v| v.as_integer())
        .and_then(|v| u32::try_from(v).ok());

    let peers_bytes = dict
        .get(b"peers".as_slice())
        .ok_or_else(|| TrackerError::InvalidResponse("missing peers".into()))?
        .as_bytes()
        .ok_or_else(|| TrackerError::InvalidResponse("peers is not a byte string".into()))?;

    let peers = parse_compact_peers(peers_bytes)?;

    Ok(AnnounceResponse { interval, peers })
}

pub(super) fn parse_compact_peers(data: &[u8]) -> Result<Vec<SocketAddrV4>, TrackerError> {
    if data.len() % 6 != 0 {
        return Err(TrackerError::InvalidResponse(format!(
            "compact peer list length {} is not a multiple of 6",
            data.len()
        )));
    }

    Ok(data
        .chunks_exact(6)
        .filter_map(CompactPeer::from_bytes)
        .map(CompactPeer::to_socket_addr)
        .collect())
}
