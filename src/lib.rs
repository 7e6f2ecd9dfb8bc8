//! picobit - a minimal BitTorrent client library
//!
//! Implements just enough of the BitTorrent protocol to download and
//! verify a single piece of a single-file torrent: the bencode codec, the
//! metainfo model and info hash, the HTTP tracker announce, and a strict
//! sequential peer wire session.
//!
//! # Modules
//!
//! - [`bencode`] - BEP-3 bencode decoding/encoding
//! - [`metainfo`] - torrent metadata and the info hash
//! - [`tracker`] - HTTP announce and compact peer list parsing
//! - [`peer`] - handshake, message framing, and the piece download engine
//!
//! Data flows left to right: raw torrent bytes are decoded by [`bencode`],
//! typed by [`metainfo`], which feeds the [`tracker`] announce; the
//! resulting peer endpoints and piece hashes drive a [`peer`] session that
//! returns SHA-1-verified piece bytes.

pub mod bencode;
pub mod metainfo;
pub mod peer;
pub mod tracker;

pub use bencode::{decode, decode_prefix, encode, BencodeError, Value};
pub use metainfo::{Info, InfoHash, Metainfo, MetainfoError};
pub use peer::{
    block_requests, BlockRequest, DownloadState, Handshake, Message, MessageId, PeerConnection,
    PeerError, PeerId, PieceDownload, BLOCK_SIZE,
};
pub use tracker::{parse_announce, AnnounceResponse, CompactPeer, HttpTracker, TrackerError};
