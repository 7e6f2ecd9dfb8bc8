use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use picobit::metainfo::Metainfo;
use picobit::peer::{PeerConnection, PeerId};

pub async fn invoke(torrent: &Path, peer: &str) -> Result<()> {
    let data = std::fs::read(torrent)
        .with_context(|| format!("reading {}", torrent.display()))?;
    let metainfo = Metainfo::from_bytes(&data)?;

    let addr: SocketAddr = peer
        .parse()
        .with_context(|| format!("invalid peer address: {}", peer))?;

    let conn = PeerConnection::connect(addr, *metainfo.info_hash.as_bytes(), &PeerId::generate())
        .await?;

    println!("Peer ID: {}", conn.remote_id());
    Ok(())
}
