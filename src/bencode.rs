//! Bencode decoding and encoding ([BEP-3]).
//!
//! Bencode is the serialization format used for `.torrent` files and
//! tracker responses. It has four data types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! The decoder is a recursive-descent parser over an explicit cursor:
//! [`decode_prefix`] returns each value together with the position one past
//! its encoding, and [`decode`] wraps it with a trailing-data check for
//! whole-buffer input. Byte strings come back as raw bytes; deciding which
//! fields are text is the metainfo layer's job, keeping this codec
//! domain-agnostic.
//!
//! ```
//! use picobit::bencode::{decode, decode_prefix};
//!
//! let value = decode(b"l5:helloi52ee").unwrap();
//! assert_eq!(value.as_list().map(|l| l.len()), Some(2));
//!
//! let (value, consumed) = decode_prefix(b"5:hello", 0).unwrap();
//! assert_eq!(value.as_str(), Some("hello"));
//! assert_eq!(consumed, 7);
//! ```
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod value;

pub use decode::{decode, decode_prefix};
pub use encode::encode;
pub use error::BencodeError;
pub use value::Value;

#[cfg(test)]
mod tests;
