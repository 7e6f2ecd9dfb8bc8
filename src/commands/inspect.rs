use std::path::Path;

use anyhow::{Context, Result};
use picobit::bencode::decode;

use super::decode::to_json;

pub fn invoke(torrent: &Path) -> Result<()> {
    let data = std::fs::read(torrent)
        .with_context(|| format!("reading {}", torrent.display()))?;
    let value = decode(&data)?;

    println!("{}", serde_json::to_string_pretty(&to_json(&value))?);
    Ok(())
}
