use std::path::Path;

use anyhow::{Context, Result};
use picobit::metainfo::Metainfo;

pub fn invoke(torrent: &Path) -> Result<()> {
    let data = std::fs::read(torrent)
        .with_context(|| format!("reading {}", torrent.display()))?;
    let metainfo = Metainfo::from_bytes(&data)?;

    println!("Tracker URL: {}", metainfo.announce);
    println!("Length: {}", metainfo.info.total_length);
    println!("Info Hash: {}", metainfo.info_hash);
    println!("Piece Length: {}", metainfo.info.piece_length);
    println!("Piece Hashes:");
    for hash in &metainfo.info.pieces {
        println!("{}", hex(hash));
    }

    Ok(())
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
