//! Behavior tests for the fetch-and-persist workflow.
//!
//! These verify WHAT an operator observes on disk after a run, driving the
//! core pipeline (fixture catalog -> fetch -> stores) end to end.

use symfetch_tests::{
    catalog_body, fixture_source, read_symbols_file, write_coins, write_symbols, BingxSource,
    HttpError, HttpResponse, SourceErrorKind, StaticHttpClient, Symbol, SymbolSource, WriteOutcome,
};

use std::sync::Arc;
use tempfile::tempdir;

const CATALOG: &[(&str, &str, i64)] = &[
    ("AAA-USDT", "USDT", 1),
    ("BBB-USDT", "USDT", 1),
    ("CCC-USDT", "USDT", 1),
];

#[tokio::test]
async fn first_run_persists_the_catalog_in_fetch_order() {
    // Given: a fresh working directory and a three-symbol catalog
    let dir = tempdir().expect("tempdir");
    let symbols_path = dir.path().join("symbols.json");
    let source = fixture_source(CATALOG);

    // When: the operator fetches and persists without flags
    let symbols = source.fetch_symbols().await.expect("fetch should succeed");
    let outcome = write_symbols(&symbols_path, &symbols, false).expect("write should succeed");

    // Then: symbols.json holds the normalized catalog in fetch order
    assert_eq!(outcome, WriteOutcome::Written);
    assert_eq!(
        read_symbols_file(&symbols_path),
        vec!["AAAUSDT", "BBBUSDT", "CCCUSDT"]
    );
}

#[tokio::test]
async fn rerun_without_force_leaves_existing_output_unchanged() {
    // Given: a previous run already produced symbols.json
    let dir = tempdir().expect("tempdir");
    let symbols_path = dir.path().join("symbols.json");
    let source = fixture_source(CATALOG);
    let symbols = source.fetch_symbols().await.expect("fetch should succeed");
    write_symbols(&symbols_path, &symbols, false).expect("first write");
    let before = std::fs::read_to_string(&symbols_path).expect("read back");

    // When: a second run fetches a different catalog but does not force
    let bigger = fixture_source(&[("DDD-USDT", "USDT", 1)]);
    let newer = bigger.fetch_symbols().await.expect("fetch should succeed");
    let outcome = write_symbols(&symbols_path, &newer, false).expect("guarded write");

    // Then: the run reports a no-op and the file bytes are identical
    assert_eq!(outcome, WriteOutcome::SkippedExisting);
    let after = std::fs::read_to_string(&symbols_path).expect("read back");
    assert_eq!(before, after);
}

#[tokio::test]
async fn force_replaces_output_regardless_of_prior_content() {
    // Given: symbols.json with stale hand-written content
    let dir = tempdir().expect("tempdir");
    let symbols_path = dir.path().join("symbols.json");
    std::fs::write(&symbols_path, "not even json").expect("seed file");

    // When: the operator forces a rewrite
    let source = fixture_source(CATALOG);
    let symbols = source.fetch_symbols().await.expect("fetch should succeed");
    let outcome = write_symbols(&symbols_path, &symbols, true).expect("forced write");

    // Then: the file is fully replaced by the fetched list
    assert_eq!(outcome, WriteOutcome::Written);
    assert_eq!(
        read_symbols_file(&symbols_path),
        vec!["AAAUSDT", "BBBUSDT", "CCCUSDT"]
    );
}

#[tokio::test]
async fn coin_list_is_alphabetical_with_quote_suffix_stripped() {
    // Given: a catalog served out of alphabetical order
    let dir = tempdir().expect("tempdir");
    let coins_path = dir.path().join("coins.txt");
    let source = fixture_source(&[
        ("SOL-USDT", "USDT", 1),
        ("BTC-USDT", "USDT", 1),
        ("ETH-USDT", "USDT", 1),
    ]);

    // When: the coin list is written
    let symbols = source.fetch_symbols().await.expect("fetch should succeed");
    write_coins(&coins_path, &symbols, false).expect("coins write");

    // Then: coins are sorted, stripped, and sit behind the editable header
    let contents = std::fs::read_to_string(&coins_path).expect("read back");
    assert!(contents.starts_with('#'), "header comment expected");
    let coins: Vec<&str> = contents
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    assert_eq!(coins, vec!["BTC", "ETH", "SOL"]);
}

#[tokio::test]
async fn inactive_and_foreign_margin_contracts_never_reach_disk() {
    // Given: a catalog mixing active USDT-M listings with noise
    let dir = tempdir().expect("tempdir");
    let symbols_path = dir.path().join("symbols.json");
    let source = fixture_source(&[
        ("AAA-USDT", "USDT", 1),
        ("OLD-USDT", "USDT", 0),
        ("BTC-USD", "USD", 1),
        ("BBB-USDT", "USDT", 1),
    ]);

    // When: the run persists the fetched list
    let symbols = source.fetch_symbols().await.expect("fetch should succeed");
    write_symbols(&symbols_path, &symbols, false).expect("write");

    // Then: only the active USDT-M symbols survive
    assert_eq!(read_symbols_file(&symbols_path), vec!["AAAUSDT", "BBBUSDT"]);
}

#[tokio::test]
async fn exchange_rejection_means_nothing_is_written() {
    // Given: the exchange answers with an API-level error code
    let dir = tempdir().expect("tempdir");
    let source = BingxSource::new(Arc::new(StaticHttpClient::ok(
        r#"{"code": 100001, "msg": "signature verification failed", "data": []}"#,
    )));

    // When: the fetch runs
    let error = source.fetch_symbols().await.expect_err("fetch must fail");

    // Then: the failure is a rejection and the directory stays empty
    assert_eq!(error.kind(), SourceErrorKind::Rejected);
    assert_eq!(
        std::fs::read_dir(dir.path()).expect("readable dir").count(),
        0
    );
}

#[tokio::test]
async fn transport_failure_is_surfaced_as_unavailable() {
    // Given: the exchange host cannot be reached
    let source = BingxSource::new(Arc::new(StaticHttpClient::fail_with(HttpError::new(
        "connection failed: host unreachable",
    ))));

    // When/Then: the fetch reports an unavailable source
    let error = source.fetch_symbols().await.expect_err("fetch must fail");
    assert_eq!(error.kind(), SourceErrorKind::Unavailable);
    assert!(error.message().contains("host unreachable"));
}

#[tokio::test]
async fn malformed_catalog_rows_are_dropped_without_losing_the_rest() {
    // Given: one row missing its symbol field entirely
    let body = r#"{"code": 0, "msg": "", "data": [
        {"currency": "USDT", "status": 1},
        {"symbol": "BBB-USDT", "currency": "USDT", "status": 1}
    ]}"#;
    let source = BingxSource::new(Arc::new(StaticHttpClient::ok(body)));

    // When/Then: the good row still produces a symbol
    let symbols = source.fetch_symbols().await.expect("fetch should succeed");
    let names: Vec<&str> = symbols.iter().map(Symbol::as_str).collect();
    assert_eq!(names, vec!["BBBUSDT"]);
}

#[tokio::test]
async fn http_error_status_from_the_exchange_is_a_rejection() {
    // Given: the endpoint exists but is melting down
    let source = BingxSource::new(Arc::new(StaticHttpClient::respond_with(HttpResponse {
        status: 502,
        body: String::from("bad gateway"),
    })));

    // When/Then: the run fails with a rejection carrying the status
    let error = source.fetch_symbols().await.expect_err("fetch must fail");
    assert_eq!(error.kind(), SourceErrorKind::Rejected);
    assert!(error.message().contains("502"));
}

#[tokio::test]
async fn catalog_fixture_builder_round_trips_through_the_adapter() {
    // Sanity check on the shared fixture: what goes in comes out normalized.
    let source = fixture_source(&[("1000PEPE-USDT", "USDT", 1)]);
    let symbols = source.fetch_symbols().await.expect("fetch should succeed");
    assert_eq!(symbols[0].as_str(), "1000PEPEUSDT");
    assert!(catalog_body(&[("X-USDT", "USDT", 1)]).contains("X-USDT"));
}
