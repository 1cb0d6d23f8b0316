// Stats service wire shapes and the aggregated snapshot

use serde::{Deserialize, Serialize};

/// One counter as reported by the stats service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStat {
    pub name: String,
    #[serde(default)]
    pub value: i64,
}

/// Structured stats reply: `{"stat":[{"name":...,"value":...}]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub stat: Vec<RawStat>,
}

/// Aggregated connection counters from one stats query.
/// `total_bytes` is always derived from upload + download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionInfo {
    pub active_connections: i64,
    pub upload_bytes: i64,
    pub download_bytes: i64,
    pub total_bytes: i64,
}

impl ConnectionInfo {
    pub fn new(active_connections: i64, upload_bytes: i64, download_bytes: i64) -> Self {
        Self {
            active_connections,
            upload_bytes,
            download_bytes,
            total_bytes: upload_bytes + download_bytes,
        }
    }
}
