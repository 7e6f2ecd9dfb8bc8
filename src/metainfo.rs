//! Torrent metainfo handling ([BEP-3]).
//!
//! A `.torrent` file is a bencoded dictionary with an `announce` tracker
//! URL and an `info` dictionary describing the content: its name, piece
//! size, total length, and one SHA-1 hash per piece. [`Metainfo`] is the
//! typed view of that file, and the layer where raw byte strings are
//! deliberately interpreted as text (`announce`) or kept binary (`pieces`).
//!
//! The info hash — the SHA-1 digest that identifies the torrent to trackers
//! and peers — is computed over the exact byte span the `info` dictionary
//! occupies in the source buffer, never over a re-encoding, so it is
//! byte-exact by construction.
//!
//! ```no_run
//! use picobit::metainfo::Metainfo;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("example.torrent")?;
//! let torrent = Metainfo::from_bytes(&data)?;
//!
//! println!("Tracker: {}", torrent.announce);
//! println!("Info hash: {}", torrent.info_hash);
//! println!("Pieces: {}", torrent.info.piece_count());
//! # Ok(())
//! # }
//! ```
//!
//! Single-file torrents only; a `files` list is rejected.
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod error;
mod info_hash;
mod torrent;

pub use error::MetainfoError;
pub use info_hash::InfoHash;
pub use torrent::{Info, Metainfo};

#[cfg(test)]
mod tests;
