use std::path::Path;

use anyhow::{bail, Context, Result};
use picobit::metainfo::Metainfo;
use picobit::peer::{PeerConnection, PeerId, PieceDownload};
use picobit::tracker::HttpTracker;
use tracing::info;

use super::LISTEN_PORT;

pub async fn invoke(output: &Path, torrent: &Path, piece: u32) -> Result<()> {
    let data = std::fs::read(torrent)
        .with_context(|| format!("reading {}", torrent.display()))?;
    let metainfo = Metainfo::from_bytes(&data)?;

    let expected_hash = *metainfo
        .info
        .piece_hash(piece)
        .with_context(|| format!("piece index {} out of range", piece))?;
    let piece_length: u32 = metainfo
        .info
        .piece_size(piece)
        .try_into()
        .context("piece too large")?;

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

    // No peer selection: the first endpoint the tracker hands back is the
    // one we use.
    let Some(addr) = response.peers.first() else {
        bail!("tracker returned no peers");
    };

    let mut conn =
        PeerConnection::connect((*addr).into(), *metainfo.info_hash.as_bytes(), &peer_id).await?;
    info!(peer = %conn.addr(), piece, "starting download");

    let mut download = PieceDownload::new(piece, piece_length, expected_hash);
    let bytes = download.run(&mut conn).await?;

    // Only verified bytes ever reach disk.
    write_piece(output, &bytes).await?;
    println!("Piece {} downloaded to {}", piece, output.display());

    Ok(())
}

pub(crate) async fn write_piece(path: &Path, bytes: &[u8]) -> Result<()> {
    tokio::fs::write(path, bytes)
        .await
        .with_context(|| format!("writing {}", path.display()))
}
