//! Command implementations for the CLI.
//!
//! Each command is thin glue over the library: read a file, call into the
//! protocol layers, print. Fatal errors bubble up as `anyhow` errors and
//! exit non-zero with a human-readable message.

pub mod decode;
pub mod download;
pub mod handshake;
pub mod info;
pub mod inspect;
pub mod peers;

/// Port advertised to the tracker. This client never listens; the value
/// is the conventional BitTorrent port.
pub(crate) const LISTEN_PORT: u16 = 6881;
