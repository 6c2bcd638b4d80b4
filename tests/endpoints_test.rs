//! Endpoint contract tests for the load generator.

use std::time::{Duration, Instant};

use serde_json::Value;

mod common;

#[tokio::test]
async fn test_root_liveness() {
    let scratch = tempfile::tempdir().unwrap();
    let (url, shutdown) = common::spawn_service(common::test_config(scratch.path())).await;

    let client = reqwest::Client::new();
    let res = client.get(format!("{}/", url)).send().await.unwrap();
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"Hello": "World"}));

    shutdown.trigger();
}

#[tokio::test]
async fn test_cpu_blocks_for_configured_duration() {
    let scratch = tempfile::tempdir().unwrap();
    let config = common::test_config(scratch.path());
    let cpu_secs = config.load.cpu_duration_secs;
    let (url, shutdown) = common::spawn_service(config).await;

    let client = reqwest::Client::new();
    let start = Instant::now();
    let res = client.get(format!("{}/cpu", url)).send().await.unwrap();
    let elapsed = start.elapsed();

    assert_eq!(res.status(), 200);
    assert!(
        elapsed >= Duration::from_secs(cpu_secs),
        "CPU endpoint returned after {:?}, expected at least {}s",
        elapsed,
        cpu_secs
    );

    let body: Value = res.json().await.unwrap();
    assert_eq!(
        common::message_of(&body),
        format!("CPU load generated for {} seconds.", cpu_secs)
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_inbound_reports_exact_length() {
    let scratch = tempfile::tempdir().unwrap();
    let (url, shutdown) = common::spawn_service(common::test_config(scratch.path())).await;

    let client = reqwest::Client::new();

    // Empty body is valid and reports 0
    let res = client
        .post(format!("{}/network/inbound", url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(common::message_of(&body), "Received 0 bytes of data.");

    let payload = vec![0xABu8; 65_536];
    let res = client
        .post(format!("{}/network/inbound", url))
        .body(payload)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(common::message_of(&body), "Received 65536 bytes of data.");

    shutdown.trigger();
}

#[tokio::test]
async fn test_inbound_over_configured_limit_is_rejected() {
    let scratch = tempfile::tempdir().unwrap();
    let mut config = common::test_config(scratch.path());
    config.load.max_inbound_body_bytes = 1024;
    let (url, shutdown) = common::spawn_service(config).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/network/inbound", url))
        .body(vec![0u8; 4096])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 413);

    shutdown.trigger();
}

#[tokio::test]
async fn test_outbound_failure_is_reported_not_propagated() {
    let scratch = tempfile::tempdir().unwrap();
    let mut config = common::test_config(scratch.path());
    // Nothing listens here, so the probe fails fast with connection refused
    config.load.outbound_url = "http://127.0.0.1:9".to_string();
    let timeout_secs = config.load.outbound_timeout_secs;
    let (url, shutdown) = common::spawn_service(config).await;

    let client = reqwest::Client::new();
    let start = Instant::now();
    let res = client
        .get(format!("{}/network/outbound", url))
        .send()
        .await
        .unwrap();
    let elapsed = start.elapsed();

    // Outbound failure is an expected outcome: 2xx with a failure description
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert!(
        common::message_of(&body).starts_with("Failed to make outbound request:"),
        "unexpected message: {}",
        common::message_of(&body)
    );
    assert!(
        elapsed < Duration::from_secs(timeout_secs + 2),
        "failure took {:?}, expected well under the timeout bound",
        elapsed
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_disk_cycle_reports_and_cleans_up() {
    let scratch = tempfile::tempdir().unwrap();
    let (url, shutdown) = common::spawn_service(common::test_config(scratch.path())).await;

    let client = reqwest::Client::new();
    for _ in 0..3 {
        let res = client.get(format!("{}/disk", url)).send().await.unwrap();
        assert_eq!(res.status(), 200);

        let body: Value = res.json().await.unwrap();
        assert_eq!(
            common::message_of(&body),
            "Disk I/O simulation complete (1MB write/read)."
        );
    }

    let residue: Vec<_> = std::fs::read_dir(scratch.path())
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert!(
        residue.is_empty(),
        "scratch dir should be empty, found {} entries",
        residue.len()
    );

    shutdown.trigger();
}
