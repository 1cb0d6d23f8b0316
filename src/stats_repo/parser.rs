// Two-tier stats parsing: structured JSON first, tolerant text fallback.
// Never fails; irrecoverable input degrades to all-zero counters.

use crate::models::{ConnectionInfo, StatsResponse};

/// Parses a raw stats response into aggregated counters.
///
/// Counter names are classified by case-insensitive substring:
///   "connection"        -> active_connections
///   "uplink" / "up"     -> upload_bytes
///   "downlink" / "down" -> download_bytes
/// The rules deliberately overlap: a single name may feed several counters,
/// and "up"/"down" are broad by design (upstream naming is not stable).
pub fn parse_stats(bytes: &[u8]) -> ConnectionInfo {
    if let Ok(response) = serde_json::from_slice::<StatsResponse>(bytes) {
        return classify(&response);
    }
    scan_text(bytes)
}

fn classify(response: &StatsResponse) -> ConnectionInfo {
    let mut active = 0i64;
    let mut up = 0i64;
    let mut down = 0i64;
    for stat in &response.stat {
        let name = stat.name.to_lowercase();
        if name.contains("connection") {
            active += stat.value;
        }
        if name.contains("uplink") || name.contains("up") {
            up += stat.value;
        }
        if name.contains("downlink") || name.contains("down") {
            down += stat.value;
        }
    }
    ConnectionInfo::new(active, up, down)
}

/// Fallback tier: scan whitespace-separated tokens and take the number
/// following any token that looks like a counter name.
fn scan_text(bytes: &[u8]) -> ConnectionInfo {
    let text = String::from_utf8_lossy(bytes);
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut active = 0i64;
    let mut up = 0i64;
    let mut down = 0i64;
    for (i, token) in tokens.iter().enumerate() {
        let name = token.to_lowercase();
        let next = tokens.get(i + 1).copied();
        if name.contains("conn")
            && let Some(v) = next.and_then(extract_int)
        {
            active += v;
        }
        if name.contains("up")
            && let Some(v) = next.and_then(extract_int)
        {
            up += v;
        }
        if name.contains("down")
            && let Some(v) = next.and_then(extract_int)
        {
            down += v;
        }
    }
    ConnectionInfo::new(active, up, down)
}

/// Extracts an integer from a token, keeping digits and a leading minus
/// sign. None when no digit survives.
fn extract_int(token: &str) -> Option<i64> {
    let mut filtered = String::new();
    for c in token.chars() {
        if c.is_ascii_digit() || (c == '-' && filtered.is_empty()) {
            filtered.push(c);
        }
    }
    if !filtered.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    filtered.parse().ok()
}
