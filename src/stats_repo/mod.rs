// Connection stats via the proxy's local query API

mod parser;

pub use parser::parse_stats;

use crate::models::ConnectionInfo;
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::instrument;

/// Two-line query understood by the stats service: command, then operation.
const STATS_QUERY: &[u8] = b"StatsService\nQueryStats\n";

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("failed to connect to stats API: {0}")]
    ConnectionFailed(#[source] std::io::Error),
    #[error("stats query timed out after {0:?}")]
    Timeout(Duration),
}

pub struct StatsRepo {
    api_addr: String,
    timeout: Duration,
}

impl StatsRepo {
    pub fn new(api_addr: impl Into<String>, timeout: Duration) -> Self {
        Self {
            api_addr: api_addr.into(),
            timeout,
        }
    }

    /// Sends one query over a fresh connection and reads until the peer
    /// closes. EOF is the normal terminator. The whole exchange (connect,
    /// write, read) shares a single timeout budget. No retry here; the
    /// caller's next tick or request is the retry.
    #[instrument(skip(self), fields(repo = "stats", operation = "fetch_raw"))]
    pub async fn fetch_raw(&self) -> Result<Vec<u8>, StatsError> {
        tokio::time::timeout(self.timeout, self.query())
            .await
            .map_err(|_| StatsError::Timeout(self.timeout))?
    }

    async fn query(&self) -> Result<Vec<u8>, StatsError> {
        let mut conn = TcpStream::connect(&self.api_addr)
            .await
            .map_err(StatsError::ConnectionFailed)?;
        conn.write_all(STATS_QUERY)
            .await
            .map_err(StatsError::ConnectionFailed)?;
        let mut response = Vec::new();
        conn.read_to_end(&mut response)
            .await
            .map_err(StatsError::ConnectionFailed)?;
        Ok(response)
    }

    /// Fetches and parses one snapshot. Parsing never fails; only the
    /// network call can error.
    pub async fn fetch(&self) -> Result<ConnectionInfo, StatsError> {
        let raw = self.fetch_raw().await?;
        Ok(parse_stats(&raw))
    }
}
