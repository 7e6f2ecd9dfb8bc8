use super::error::BencodeError;
use super::value::Value;
use bytes::Bytes;
use std::collections::BTreeMap;

const MAX_DEPTH: usize = 64;

/// Decodes a complete bencode buffer into a single value.
///
/// Fails with [`BencodeError::TrailingData`] if any bytes remain after the
/// first value, and with [`BencodeError::UnexpectedEof`] on empty or
/// truncated input.
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    let (value, end) = decode_prefix(data, 0)?;

    if end != data.len() {
        return Err(BencodeError::TrailingData);
    }

    Ok(value)
}

/// Decodes one value starting at `start`, returning it together with the
/// position one past its encoding.
///
/// This is the cursor-style entry point: callers that need to know where a
/// value's encoding begins and ends (for example to hash the raw bytes of a
/// sub-dictionary) can walk a buffer by chaining the returned positions.
pub fn decode_prefix(data: &[u8], start: usize) -> Result<(Value, usize), BencodeError> {
    decode_value(data, start, 0)
}

fn decode_value(data: &[u8], pos: usize, depth: usize) -> Result<(Value, usize), BencodeError> {
    if depth > MAX_DEPTH {
        return Err(BencodeError::NestingTooDeep);
    }

    match data.get(pos).copied() {
        None => Err(BencodeError::UnexpectedEof),
        Some(b'i') => decode_integer(data, pos),
        Some(b'l') => decode_list(data, pos, depth),
        Some(b'd') => decode_dict(data, pos, depth),
        Some(b'0'..=b'9') => decode_bytes(data, pos),
        Some(c) => Err(BencodeError::UnexpectedChar(c as char)),
    }
}

fn decode_integer(data: &[u8], pos: usize) -> Result<(Value, usize), BencodeError> {
    let digits_start = pos + 1;
    let mut cur = digits_start;

    while cur < data.len() && data[cur] != b'e' {
        cur += 1;
    }

    if cur >= data.len() {
        return Err(BencodeError::UnexpectedEof);
    }

    let digits = std::str::from_utf8(&data[digits_start..cur])
        .map_err(|_| BencodeError::InvalidInteger("invalid utf8".into()))?;

    if digits.is_empty() {
        return Err(BencodeError::InvalidInteger("empty".into()));
    }

    // -0 and leading zeros are not canonical bencode.
    if digits.starts_with("-0") || (digits.starts_with('0') && digits.len() > 1) {
        return Err(BencodeError::InvalidInteger("leading zeros".into()));
    }

    let value: i64 = digits
        .parse()
        .map_err(|_| BencodeError::InvalidInteger(digits.into()))?;

    Ok((Value::Integer(value), cur + 1))
}

fn decode_bytes(data: &[u8], pos: usize) -> Result<(Value, usize), BencodeError> {
    let mut cur = pos;

    while cur < data.len() && data[cur] != b':' {
        cur += 1;
    }

    if cur >= data.len() {
        return Err(BencodeError::UnexpectedEof);
    }

    let len_str =
        std::str::from_utf8(&data[pos..cur]).map_err(|_| BencodeError::InvalidStringLength)?;

    let len: usize = len_str
        .parse()
        .map_err(|_| BencodeError::InvalidStringLength)?;

    let body_start = cur + 1;
    let body_end = body_start
        .checked_add(len)
        .ok_or(BencodeError::InvalidStringLength)?;

    if body_end > data.len() {
        return Err(BencodeError::UnexpectedEof);
    }

    let bytes = Bytes::copy_from_slice(&data[body_start..body_end]);

    Ok((Value::Bytes(bytes), body_end))
}

fn decode_list(data: &[u8], pos: usize, depth: usize) -> Result<(Value, usize), BencodeError> {
    let mut cur = pos + 1;
    let mut list = Vec::new();

    while cur < data.len() && data[cur] != b'e' {
        let (item, next) = decode_value(data, cur, depth + 1)?;
        list.push(item);
        cur = next;
    }

    if cur >= data.len() {
        return Err(BencodeError::UnexpectedEof);
    }

    Ok((Value::List(list), cur + 1))
}

fn decode_dict(data: &[u8], pos: usize, depth: usize) -> Result<(Value, usize), BencodeError> {
    let mut cur = pos + 1;
    let mut dict = BTreeMap::new();

    while cur < data.len() && data[cur] != b'e' {
        let (key, after_key) = decode_value(data, cur, depth + 1)?;
        let key = match key {
            Value::Bytes(b) => b,
            _ => return Err(BencodeError::NonStringKey),
        };

        if after_key >= data.len() {
            return Err(BencodeError::UnexpectedEof);
        }
        if data[after_key] == b'e' {
            return Err(BencodeError::MissingDictValue);
        }

        let (value, after_value) = decode_value(data, after_key, depth + 1)?;
        dict.insert(key, value);
        cur = after_value;
    }

    if cur >= data.len() {
        return Err(BencodeError::UnexpectedEof);
    }

    Ok((Value::Dict(dict), cur + 1))
}
