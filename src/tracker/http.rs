use super::error::TrackerError;
use super::response::{parse_announce, AnnounceResponse};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// An HTTP announce client for one tracker URL.
pub struct HttpTracker {
    client: Client,
    url: String,
}

impl HttpTracker {
    pub fn new(url: &str) -> Result<Self, TrackerError> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(TrackerError::InvalidUrl(url.to_string()));
        }

        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(TrackerError::Http)?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Announces this client to the tracker and returns the peers it
    /// knows about.
    ///
    /// The query reports a fresh download: `uploaded=0`, `downloaded=0`,
    /// `left` set to the torrent's total length, and `compact=1`. The
    /// binary `info_hash` and `peer_id` are percent-encoded byte by byte.
    pub async fn announce(
        &self,
        info_hash: &[u8; 20],
        peer_id: &[u8; 20],
        port: u16,
        left: u64,
    ) -> Result<AnnounceResponse, TrackerError> {
        let url = format!(
            "{}?info_hash={}&peer_id={}&port={}&uploaded=0&downloaded=0&left={}&compact=1",
            self.url,
            url_encode(info_hash),
            url_encode(peer_id),
            port,
            left
        );

        debug!(url = %url, "tracker announce");

        let response = self.client.get(&url).send().await?;
        let body = response.bytes().await?;

        let announce = parse_announce(&body)?;
        debug!(peers = announce.peers.len(), "tracker responded");

        Ok(announce)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

// RFC 3986: unreserved bytes pass through, everything else becomes %XX.
// Applied per byte so binary fields round-trip exactly.
pub(super) fn url_encode(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b'.' || b == b'~' {
                format!("{}", b as char)
            } else {
                format!("%{:02X}", b)
            }
        })
        .collect()
}
