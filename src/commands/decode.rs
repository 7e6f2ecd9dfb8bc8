use anyhow::Result;
use picobit::bencode::{decode, Value};

pub fn invoke(value: &str) -> Result<()> {
    let decoded = decode(value.as_bytes())?;
    println!("{}", to_json(&decoded));
    Ok(())
}

/// Renders a bencode value as JSON for display. Byte strings are shown as
/// (lossy) UTF-8 text; this is output formatting only and never feeds back
/// into the protocol.
pub(crate) fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Integer(i) => (*i).into(),
        Value::Bytes(b) => String::from_utf8_lossy(b).into_owned().into(),
        Value::List(l) => serde_json::Value::Array(l.iter().map(to_json).collect()),
        Value::Dict(d) => serde_json::Value::Object(
            d.iter()
                .map(|(k, v)| (String::from_utf8_lossy(k).into_owned(), to_json(v)))
                .collect(),
        ),
    }
}
