// StatsRepo tests against in-process TCP stand-ins for the stats service

mod common;

use proxy_sidecar::stats_repo::{StatsError, StatsRepo};
use std::time::Duration;

#[tokio::test]
async fn test_fetch_parses_structured_response() {
    let addr = common::spawn_stats_service(
        br#"{"stat":[{"name":"user>>>connection","value":3},{"name":"traffic>>>uplink","value":1024}]}"#
            .to_vec(),
    )
    .await;
    let repo = StatsRepo::new(addr.to_string(), Duration::from_secs(2));
    let info = repo.fetch().await.expect("fetch");
    assert_eq!(info.active_connections, 3);
    assert_eq!(info.upload_bytes, 1024);
    assert_eq!(info.total_bytes, 1024);
}

#[tokio::test]
async fn test_fetch_raw_returns_exact_bytes() {
    let addr = common::spawn_stats_service(b"plain text reply".to_vec()).await;
    let repo = StatsRepo::new(addr.to_string(), Duration::from_secs(2));
    let raw = repo.fetch_raw().await.expect("fetch_raw");
    assert_eq!(raw, b"plain text reply");
}

#[tokio::test]
async fn test_fetch_falls_back_on_plain_text() {
    let addr = common::spawn_stats_service(b"conn 5 up 2048 down 4096".to_vec()).await;
    let repo = StatsRepo::new(addr.to_string(), Duration::from_secs(2));
    let info = repo.fetch().await.expect("fetch");
    assert_eq!(info.active_connections, 5);
    assert_eq!(info.total_bytes, 6144);
}

#[tokio::test]
async fn test_connection_refused_is_connection_failed() {
    let addr = common::refused_addr().await;
    let repo = StatsRepo::new(addr.to_string(), Duration::from_secs(2));
    match repo.fetch().await {
        Err(StatsError::ConnectionFailed(_)) => {}
        other => panic!("expected ConnectionFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_stalled_peer_times_out_within_bound() {
    let addr = common::spawn_stalling_service().await;
    let repo = StatsRepo::new(addr.to_string(), Duration::from_millis(200));
    let started = tokio::time::Instant::now();
    match repo.fetch().await {
        Err(StatsError::Timeout(_)) => {}
        other => panic!("expected Timeout, got {other:?}"),
    }
    assert!(
        started.elapsed() < Duration::from_secs(2),
        "fetch must not hang past the configured timeout"
    );
}
