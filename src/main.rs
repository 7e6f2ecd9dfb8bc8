mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "A minimal BitTorrent client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Decode a bencoded value and print it as JSON
    Decode { value: String },
    /// Print a torrent's tracker URL, sizes, and hashes
    Info { torrent: PathBuf },
    /// Pretty-print a torrent file's full decoded structure
    Inspect { torrent: PathBuf },
    /// Announce to the tracker and list peer endpoints
    Peers { torrent: PathBuf },
    /// Handshake with one peer and print its peer ID
    Handshake { torrent: PathBuf, peer: String },
    /// Download a single piece, verify it, and write it to a file
    DownloadPiece {
        /// Where to write the verified piece bytes
        #[arg(short, long)]
        output: PathBuf,
        torrent: PathBuf,
        piece: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode { value } => {
            commands::decode::invoke(&value).context("decoding bencoded value")?
        }
        Commands::Info { torrent } => {
            commands::info::invoke(&torrent).context("reading torrent info")?
        }
        Commands::Inspect { torrent } => {
            commands::inspect::invoke(&torrent).context("inspecting torrent")?
        }
        Commands::Peers { torrent } => commands::peers::invoke(&torrent)
            .await
            .context("discovering peers")?,
        Commands::Handshake { torrent, peer } => commands::handshake::invoke(&torrent, &peer)
            .await
            .context("peer handshake")?,
        Commands::DownloadPiece {
            output,
            torrent,
            piece,
        } => commands::download::invoke(&output, &torrent, piece)
            .await
            .context("downloading piece")?,
    }

    Ok(())
}
