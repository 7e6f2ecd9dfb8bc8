//! HTTP tracker protocol (BEP-3, BEP-23)
//!
//! This module implements the announce request for peer discovery: a GET
//! to the tracker with the torrent's info hash and transfer statistics,
//! answered by a bencoded body carrying a compact peer list.

mod error;
mod http;
mod response;

pub use error::TrackerError;
pub use http::HttpTracker;
pub use response::{parse_announce, AnnounceResponse, CompactPeer};
