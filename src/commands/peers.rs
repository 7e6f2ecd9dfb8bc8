use std::path::Path;

use anyhow::{Context, Result};
use picobit::metainfo::Metainfo;
use picobit::peer::PeerId;
use picobit::tracker::HttpTracker;

use super::LISTEN_PORT;

pub async fn invoke(torrent: &Path) -> Result<()> {
    let data = std::fs::read(torrent)
        .with_context(|| format!("reading {}", torrent.display()))?;
    let metainfo = Metainfo::from_bytes(&data)?;

    let peer_id = PeerId::generate();
    let tracker = HttpTracker::new(&metainfo.announce)?;
    let response = tracker
        .announce(
            metainfo.info_hash.as_bytes(),
            peer_id.as_bytes(),
            LISTEN_PORT,
            metainfo.info.total_length,
        )
        .await?;

    for peer in &response.peers {
        println!("{}", peer);
    }

    Ok(())
}
