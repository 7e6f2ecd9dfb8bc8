use super::error::MetainfoError;
use super::info_hash::InfoHash;
use crate::bencode::{decode, decode_prefix, Value};
use bytes::Bytes;
use std::ops::Range;

/// A parsed torrent file.
#[derive(Debug, Clone)]
pub struct Metainfo {
    /// Tracker announce URL.
    pub announce: String,
    /// The info dictionary: content name, sizes, and piece hashes.
    pub info: Info,
    /// SHA-1 of the raw bencoded `info` dictionary.
    pub info_hash: InfoHash,
    raw_info: Bytes,
}

/// The typed view of a torrent's `info` dictionary (single-file only).
#[derive(Debug, Clone)]
pub struct Info {
    /// Suggested file name, when present.
    pub name: Option<String>,
    /// Number of bytes per piece (the final piece may be shorter).
    pub piece_length: u64,
    /// Total content length in bytes.
    pub total_length: u64,
    /// One SHA-1 hash per piece, in piece order.
    pub pieces: Vec<[u8; 20]>,
}

impl Metainfo {
    /// Parses a torrent file from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is not valid bencode, if `announce`,
    /// `info`, `length`, `piece length`, or `pieces` are missing or have
    /// the wrong type, if `pieces` is not a multiple of 20 bytes, or if
    /// the hash count disagrees with `length` / `piece length`.
    pub fn from_bytes(data: &[u8]) -> Result<Self, MetainfoError> {
        let value = decode(data)?;
        let dict = value.as_dict().ok_or(MetainfoError::InvalidField("root"))?;

        let announce = dict
            .get(b"announce".as_slice())
            .ok_or(MetainfoError::MissingField("announce"))?
            .as_str()
            .ok_or(MetainfoError::InvalidField("announce"))?
            .to_string();

        let info_value = dict
            .get(b"info".as_slice())
            .ok_or(MetainfoError::MissingField("info"))?;

        let info = parse_info(info_value)?;

        // Hash the exact bytes the info dictionary occupies in the source
        // buffer. Re-encoding the decoded tree could diverge from the
        // original encoding; the span cannot.
        let span = info_span(data)?;
        let raw_info = Bytes::copy_from_slice(&data[span]);
        let info_hash = InfoHash::for_info_bytes(&raw_info);

        Ok(Self {
            announce,
            info,
            info_hash,
            raw_info,
        })
    }

    /// Returns the raw bencoded `info` dictionary.
    pub fn raw_info(&self) -> &Bytes {
        &self.raw_info
    }
}

impl Info {
    /// Number of pieces in the torrent.
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Actual size of the piece at `index`; the final piece carries only
    /// the remainder of the content.
    pub fn piece_size(&self, index: u32) -> u64 {
        let start = index as u64 * self.piece_length;
        let remaining = self.total_length.saturating_sub(start);
        remaining.min(self.piece_length)
    }

    /// The expected SHA-1 hash for the piece at `index`.
    pub fn piece_hash(&self, index: u32) -> Option<&[u8; 20]> {
        self.pieces.get(index as usize)
    }
}

fn parse_info(value: &Value) -> Result<Info, MetainfoError> {
    let dict = value.as_dict().ok_or(MetainfoError::InvalidField("info"))?;

    let name = dict
        .get(b"name".as_slice())
        .and_then(|v| v.as_str())
        .map(String::from);

    if dict.get(b"files".as_slice()).is_some() {
        return Err(MetainfoError::MultiFile);
    }

    let piece_length = dict
        .get(b"piece length".as_slice())
        .ok_or(MetainfoError::MissingField("piece length"))?
        .as_integer()
        .and_then(|v| u64::try_from(v).ok())
        .filter(|&v| v > 0)
        .ok_or(MetainfoError::InvalidField("piece length"))?;

    let total_length = dict
        .get(b"length".as_slice())
        .ok_or(MetainfoError::MissingField("length"))?
        .as_integer()
        .and_then(|v| u64::try_from(v).ok())
        .ok_or(MetainfoError::InvalidField("length"))?;

    let pieces_bytes = dict
        .get(b"pieces".as_slice())
        .ok_or(MetainfoError::MissingField("pieces"))?
        .as_bytes()
        .ok_or(MetainfoError::InvalidField("pieces"))?;

    if pieces_bytes.len() % 20 != 0 {
        return Err(MetainfoError::InvalidField("pieces"));
    }

    let pieces: Vec<[u8; 20]> = pieces_bytes
        .chunks_exact(20)
        .map(|chunk| {
            let mut arr = [0u8; 20];
            arr.copy_from_slice(chunk);
            arr
        })
        .collect();

    // One hash per piece: ceil(total / piece_length).
    let expected = total_length.div_ceil(piece_length);
    if pieces.len() as u64 != expected {
        return Err(MetainfoError::InvalidField("pieces"));
    }

    Ok(Info {
        name,
        piece_length,
        total_length,
        pieces,
    })
}

/// Locates the byte range the `info` dictionary's value occupies inside a
/// whole torrent buffer by walking the top-level dictionary with the
/// cursor parser.
fn info_span(data: &[u8]) -> Result<Range<usize>, MetainfoError> {
    if data.first() != Some(&b'd') {
        return Err(MetainfoError::InvalidField("root"));
    }

    let mut pos = 1;
    while pos < data.len() && data[pos] != b'e' {
        let (key, value_start) = decode_prefix(data, pos)?;
        let key = match key {
            Value::Bytes(b) => b,
            _ => return Err(MetainfoError::InvalidField("root")),
        };

        let (_, value_end) = decode_prefix(data, value_start)?;

        if key.as_ref() == b"info" {
            return Ok(value_start..value_end);
        }

        pos = value_end;
    }

    Err(MetainfoError::MissingField("info"))
}
