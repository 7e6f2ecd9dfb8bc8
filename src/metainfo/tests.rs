use std::collections::BTreeMap;

use bytes::Bytes;
use sha1::{Digest, Sha1};

use super::*;
use crate::bencode::{encode, Value};

/// Builds a canonical single-file torrent: 40 bytes of content split into
/// a 32-byte piece and an 8-byte piece.
fn fixture_torrent() -> Vec<u8> {
    fixture_with(|_| {})
}

fn fixture_with(mutate: impl FnOnce(&mut BTreeMap<Bytes, Value>)) -> Vec<u8> {
    let mut info = BTreeMap::new();
    info.insert(Bytes::from_static(b"length"), Value::Integer(40));
    info.insert(Bytes::from_static(b"name"), Value::string("sample.txt"));
    info.insert(Bytes::from_static(b"piece length"), Value::Integer(32));
    info.insert(
        Bytes::from_static(b"pieces"),
        Value::Bytes(Bytes::copy_from_slice(&[0xABu8; 40])),
    );
    mutate(&mut info);

    let mut root = BTreeMap::new();
    root.insert(
        Bytes::from_static(b"announce"),
        Value::string("http://tracker.example.com/announce"),
    );
    root.insert(Bytes::from_static(b"info"), Value::Dict(info));
    encode(&Value::Dict(root)).unwrap()
}

#[test]
fn test_parse_fixture() {
    let torrent = Metainfo::from_bytes(&fixture_torrent()).unwrap();

    assert_eq!(torrent.announce, "http://tracker.example.com/announce");
    assert_eq!(torrent.info.name.as_deref(), Some("sample.txt"));
    assert_eq!(torrent.info.piece_length, 32);
    assert_eq!(torrent.info.total_length, 40);
    assert_eq!(torrent.info.piece_count(), 2);
    assert_eq!(torrent.info.piece_hash(0), Some(&[0xABu8; 20]));
    assert!(torrent.info.piece_hash(2).is_none());
}

#[test]
fn test_info_hash_over_raw_span() {
    let data = fixture_torrent();
    let torrent = Metainfo::from_bytes(&data).unwrap();

    // The raw span is exactly the info dictionary's encoding.
    let mut expected_raw = Vec::new();
    expected_raw.extend_from_slice(b"d6:lengthi40e4:name10:sample.txt12:piece lengthi32e6:pieces40:");
    expected_raw.extend_from_slice(&[0xABu8; 40]);
    expected_raw.extend_from_slice(b"e");
    assert_eq!(torrent.raw_info().as_ref(), expected_raw.as_slice());

    // And the hash is the SHA-1 of that span, stable across parses.
    let digest: [u8; 20] = Sha1::digest(&expected_raw).into();
    assert_eq!(torrent.info_hash.as_bytes(), &digest);

    let again = Metainfo::from_bytes(&data).unwrap();
    assert_eq!(again.info_hash, torrent.info_hash);
    assert_eq!(torrent.info_hash.to_hex().len(), 40);
}

#[test]
fn test_pieces_not_multiple_of_20() {
    let data = fixture_with(|info| {
        info.insert(
            Bytes::from_static(b"pieces"),
            Value::Bytes(Bytes::copy_from_slice(&[0u8; 30])),
        );
    });
    assert!(matches!(
        Metainfo::from_bytes(&data),
        Err(MetainfoError::InvalidField("pieces"))
    ));
}

#[test]
fn test_piece_count_mismatch() {
    // 100 bytes at 32 per piece needs 4 hashes; supply 2.
    let data = fixture_with(|info| {
        info.insert(Bytes::from_static(b"length"), Value::Integer(100));
    });
    assert!(matches!(
        Metainfo::from_bytes(&data),
        Err(MetainfoError::InvalidField("pieces"))
    ));
}

#[test]
fn test_missing_fields() {
    let mut root = BTreeMap::new();
    root.insert(Bytes::from_static(b"announce"), Value::string("http://t"));
    let data = encode(&Value::Dict(root)).unwrap();
    assert!(matches!(
        Metainfo::from_bytes(&data),
        Err(MetainfoError::MissingField("info"))
    ));

    let data = fixture_with(|info| {
        info.remove(b"length".as_slice());
        // Keep the hash table consistent with nothing: still must fail on
        // the missing length first.
    });
    assert!(matches!(
        Metainfo::from_bytes(&data),
        Err(MetainfoError::MissingField("length"))
    ));

    let data = fixture_with(|info| {
        info.insert(Bytes::from_static(b"piece length"), Value::string("32"));
    });
    assert!(matches!(
        Metainfo::from_bytes(&data),
        Err(MetainfoError::InvalidField("piece length"))
    ));
}

#[test]
fn test_missing_announce() {
    let mut info = BTreeMap::new();
    info.insert(Bytes::from_static(b"length"), Value::Integer(0));
    info.insert(Bytes::from_static(b"piece length"), Value::Integer(32));
    info.insert(Bytes::from_static(b"pieces"), Value::Bytes(Bytes::new()));
    let mut root = BTreeMap::new();
    root.insert(Bytes::from_static(b"info"), Value::Dict(info));
    let data = encode(&Value::Dict(root)).unwrap();

    assert!(matches!(
        Metainfo::from_bytes(&data),
        Err(MetainfoError::MissingField("announce"))
    ));
}

#[test]
fn test_multi_file_rejected() {
    let data = fixture_with(|info| {
        info.remove(b"length".as_slice());
        info.insert(Bytes::from_static(b"files"), Value::List(vec![]));
    });
    assert!(matches!(
        Metainfo::from_bytes(&data),
        Err(MetainfoError::MultiFile)
    ));
}

#[test]
fn test_piece_size_truncation() {
    let torrent = Metainfo::from_bytes(&fixture_torrent()).unwrap();
    assert_eq!(torrent.info.piece_size(0), 32);
    assert_eq!(torrent.info.piece_size(1), 8);
    assert_eq!(torrent.info.piece_size(2), 0);
}

#[test]
fn test_not_a_dict() {
    assert!(matches!(
        Metainfo::from_bytes(b"i42e"),
        Err(MetainfoError::InvalidField("root"))
    ));
    assert!(Metainfo::from_bytes(b"").is_err());
}
