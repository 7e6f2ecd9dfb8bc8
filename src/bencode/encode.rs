use super::error::BencodeError;
use super::value::Value;
use std::io::Write;

/// Encodes a value to canonical bencode.
///
/// Dictionary keys are written in sorted order (the `BTreeMap` iteration
/// order), so encoding a decoded value reproduces the input byte-for-byte
/// whenever the input was itself canonical.
///
/// Note that the info hash is NOT computed by re-encoding: the metainfo
/// parser hashes the original byte span of the `info` dictionary directly.
/// This encoder exists for constructing bencode (fixtures, future announce
/// bodies), where canonical output is what we want.
///
/// # Examples
///
/// ```
/// use picobit::bencode::{encode, Value};
///
/// assert_eq!(encode(&Value::Integer(42)).unwrap(), b"i42e");
/// assert_eq!(encode(&Value::string("spam")).unwrap(), b"4:spam");
/// ```
pub fn encode(value: &Value) -> Result<Vec<u8>, BencodeError> {
    let mut buf = Vec::new();
    encode_value(value, &mut buf)?;
    Ok(buf)
}

fn encode_value<W: Write>(value: &Value, writer: &mut W) -> Result<(), BencodeError> {
    match value {
        Value::Integer(i) => {
            write!(writer, "i{}e", i)?;
        }
        Value::Bytes(b) => {
            write!(writer, "{}:", b.len())?;
            writer.write_all(b)?;
        }
        Value::List(l) => {
            writer.write_all(b"l")?;
            for item in l {
                encode_value(item, writer)?;
            }
            writer.write_all(b"e")?;
        }
        Value::Dict(d) => {
            writer.write_all(b"d")?;
            for (key, val) in d {
                write!(writer, "{}:", key.len())?;
                writer.write_all(key)?;
                encode_value(val, writer)?;
            }
            writer.write_all(b"e")?;
        }
    }
    Ok(())
}
