use std::collections::BTreeMap;

use bytes::Bytes;

use super::*;

#[test]
fn test_decode_integer() {
    assert_eq!(decode(b"i42e").unwrap(), Value::Integer(42));
    assert_eq!(decode(b"i-42e").unwrap(), Value::Integer(-42));
    assert_eq!(decode(b"i0e").unwrap(), Value::Integer(0));
}

#[test]
fn test_decode_integer_invalid() {
    assert!(matches!(
        decode(b"i-0e"),
        Err(BencodeError::InvalidInteger(_))
    ));
    assert!(matches!(
        decode(b"i04e"),
        Err(BencodeError::InvalidInteger(_))
    ));
    assert!(matches!(decode(b"ie"), Err(BencodeError::InvalidInteger(_))));
    assert!(matches!(decode(b"i42"), Err(BencodeError::UnexpectedEof)));
}

#[test]
fn test_decode_bytes() {
    assert_eq!(
        decode(b"5:hello").unwrap(),
        Value::Bytes(Bytes::from_static(b"hello"))
    );
    assert_eq!(
        decode(b"0:").unwrap(),
        Value::Bytes(Bytes::from_static(b""))
    );
}

#[test]
fn test_decode_bytes_truncated() {
    // Declared length exceeds the available bytes.
    assert!(matches!(decode(b"5:hel"), Err(BencodeError::UnexpectedEof)));
    assert!(matches!(decode(b"5"), Err(BencodeError::UnexpectedEof)));
    assert!(matches!(
        decode(b"x:abc"),
        Err(BencodeError::UnexpectedChar('x'))
    ));
}

#[test]
fn test_decode_prefix_positions() {
    let (value, consumed) = decode_prefix(b"5:hello", 0).unwrap();
    assert_eq!(value.as_str(), Some("hello"));
    assert_eq!(consumed, 7);

    let (value, consumed) = decode_prefix(b"i42e", 0).unwrap();
    assert_eq!(value.as_integer(), Some(42));
    assert_eq!(consumed, 4);

    // A mid-buffer start position resumes cleanly.
    let (value, consumed) = decode_prefix(b"i1ei2e", 3).unwrap();
    assert_eq!(value.as_integer(), Some(2));
    assert_eq!(consumed, 6);
}

#[test]
fn test_decode_list() {
    let result = decode(b"l5:helloi52ee").unwrap();
    match result {
        Value::List(l) => {
            assert_eq!(l.len(), 2);
            assert_eq!(l[0], Value::Bytes(Bytes::from_static(b"hello")));
            assert_eq!(l[1], Value::Integer(52));
        }
        _ => panic!("expected list"),
    }

    assert!(matches!(
        decode(b"l5:hello"),
        Err(BencodeError::UnexpectedEof)
    ));
}

#[test]
fn test_decode_dict() {
    let result = decode(b"d3:foo3:bar5:helloi52ee").unwrap();
    match result {
        Value::Dict(d) => {
            assert_eq!(d.len(), 2);
            assert_eq!(
                d.get(&Bytes::from_static(b"foo")),
                Some(&Value::Bytes(Bytes::from_static(b"bar")))
            );
            assert_eq!(
                d.get(&Bytes::from_static(b"hello")),
                Some(&Value::Integer(52))
            );
        }
        _ => panic!("expected dict"),
    }
}

#[test]
fn test_decode_dict_invalid() {
    // Key without a value.
    assert!(matches!(
        decode(b"d3:fooe"),
        Err(BencodeError::MissingDictValue)
    ));
    // Non-string key.
    assert!(matches!(
        decode(b"di1ei2ee"),
        Err(BencodeError::NonStringKey)
    ));
    // Unterminated.
    assert!(matches!(
        decode(b"d3:fooi1e"),
        Err(BencodeError::UnexpectedEof)
    ));
}

#[test]
fn test_decode_empty_input() {
    assert!(matches!(decode(b""), Err(BencodeError::UnexpectedEof)));
}

#[test]
fn test_trailing_data_error() {
    assert!(matches!(
        decode(b"i42eextra"),
        Err(BencodeError::TrailingData)
    ));
    assert!(matches!(
        decode(b"5:helloi2e"),
        Err(BencodeError::TrailingData)
    ));
}

#[test]
fn test_nesting_limit() {
    let mut data = Vec::new();
    data.extend(std::iter::repeat(b'l').take(100));
    data.extend(std::iter::repeat(b'e').take(100));
    assert!(matches!(
        decode(&data),
        Err(BencodeError::NestingTooDeep)
    ));
}

#[test]
fn test_encode_scalars() {
    assert_eq!(encode(&Value::Integer(42)).unwrap(), b"i42e");
    assert_eq!(encode(&Value::Integer(-42)).unwrap(), b"i-42e");
    assert_eq!(encode(&Value::string("spam")).unwrap(), b"4:spam");
}

#[test]
fn test_encode_list() {
    let list = Value::List(vec![Value::string("spam"), Value::Integer(42)]);
    assert_eq!(encode(&list).unwrap(), b"l4:spami42ee");
}

#[test]
fn test_encode_dict_sorted_keys() {
    let mut dict = BTreeMap::new();
    dict.insert(Bytes::from_static(b"b"), Value::Integer(2));
    dict.insert(Bytes::from_static(b"a"), Value::Integer(1));
    assert_eq!(encode(&Value::Dict(dict)).unwrap(), b"d1:ai1e1:bi2ee");
}

#[test]
fn test_roundtrip() {
    // Canonical input (sorted keys) survives a decode/encode cycle exactly.
    let original: &[u8] =
        b"d8:announce15:http://test.com4:infod4:name4:test12:piece lengthi16384eee";
    let decoded = decode(original).unwrap();
    let encoded = encode(&decoded).unwrap();
    assert_eq!(encoded, original);
}

#[test]
fn test_value_accessors() {
    let value = Value::Integer(42);
    assert_eq!(value.as_integer(), Some(42));
    assert!(value.as_bytes().is_none());

    let value = Value::Bytes(Bytes::from_static(b"test"));
    assert_eq!(value.as_str(), Some("test"));
    assert!(value.as_integer().is_none());

    // Non-UTF-8 byte strings decode fine but refuse text interpretation.
    let value = Value::Bytes(Bytes::from_static(&[0xff, 0xfe]));
    assert!(value.as_bytes().is_some());
    assert_eq!(value.as_str(), None);

    let value = Value::List(vec![]);
    assert!(value.as_list().is_some());
    assert!(value.as_dict().is_none());
}
