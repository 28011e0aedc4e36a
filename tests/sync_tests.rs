//! Whole-run orchestration.

mod common;

use common::{InsertCall, RecordingStore, StaticSource};
use crexi_sync::crexi::{CrexiProber, ListingQuery};
use crexi_sync::storage::{SupabaseStore, MARKET_SNAPSHOTS_TABLE, SUITE_SNAPSHOTS_TABLE};
use crexi_sync::{run_sync, SyncOutcome};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn completed_run_reports_totals() {
    let source = StaticSource::success(json!({
        "results": [
            {"id": "A1", "suites": [{"id": "S1", "size": 1000}, {"id": "S2", "size": 2000}]},
            {"id": "A2", "squareFeet": 500}
        ]
    }));
    let store = RecordingStore::new();

    let outcome = run_sync(&source, &store).await.unwrap();

    let summary = match outcome {
        SyncOutcome::Completed(summary) => summary,
        other => panic!("expected completion, got {:?}", other),
    };
    assert_eq!(summary.market, "Los Angeles");
    assert_eq!(summary.endpoint, "https://api.crexi.com/v1/listings");
    assert_eq!(summary.properties, 2);
    assert_eq!(summary.suites, 3);
    assert_eq!(summary.persisted.suite_rows, 3);
    assert_eq!(
        store.calls(),
        vec![
            InsertCall {
                table: MARKET_SNAPSHOTS_TABLE.to_string(),
                rows: 1
            },
            InsertCall {
                table: SUITE_SNAPSHOTS_TABLE.to_string(),
                rows: 3
            },
        ]
    );
}

#[tokio::test]
async fn failed_probe_writes_nothing() {
    let store = RecordingStore::new();

    let outcome = run_sync(&StaticSource::failure(), &store).await.unwrap();

    match outcome {
        SyncOutcome::NoWorkingEndpoint { error } => assert_eq!(error, "No working endpoint found"),
        other => panic!("expected no endpoint, got {:?}", other),
    }
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn backend_failure_propagates() {
    let source = StaticSource::success(json!({"data": [{"assetId": "A2"}]}));
    let store = RecordingStore::failing_on(1);

    let err = run_sync(&source, &store).await.unwrap_err();

    assert!(err.to_string().contains("simulated insert failure"));
    assert_eq!(store.calls().len(), 2);
}

#[tokio::test]
async fn end_to_end_against_mock_services() {
    let crexi = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/listings"))
        .and(header("x-api-key", "crexi-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"assetId": "A2", "squareFeet": 500, "city": "Vernon"}]
        })))
        .mount(&crexi)
        .await;

    let supabase = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/crexi_market_snapshots"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&supabase)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/crexi_suite_snapshots"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&supabase)
        .await;

    let prober = CrexiProber::with_base_urls("crexi-key", vec![crexi.uri()]).unwrap();
    let store = SupabaseStore::new(supabase.uri(), "service-key").unwrap();

    let outcome = run_sync(&prober, &store).await.unwrap();
    let summary = match outcome {
        SyncOutcome::Completed(summary) => summary,
        other => panic!("expected completion, got {:?}", other),
    };
    assert_eq!(summary.endpoint, format!("{}/api/v1/listings", crexi.uri()));
    assert_eq!(summary.properties, 1);
    assert_eq!(summary.suites, 1);

    let requests = supabase.received_requests().await.unwrap();
    let market: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(market["total_properties"], 1);
    assert_eq!(market["total_suites"], 1);
    assert_eq!(market["market_area"], "Los Angeles");

    let suites: Value = serde_json::from_slice(&requests[1].body).unwrap();
    assert_eq!(suites[0]["crexi_asset_id"], "A2");
    assert_eq!(suites[0]["crexi_suite_id"], "");
    assert_eq!(suites[0]["suite_size"], 500.0);
    assert_eq!(suites[0]["city"], "Vernon");
    assert_eq!(suites[0]["snapshot_date"], market["snapshot_date"]);
}

#[tokio::test]
async fn rows_are_labelled_with_the_queried_market() {
    let crexi = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/listings"))
        .and(query_param("market", "San Diego"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"id": "A7", "suites": [{"id": "S1"}]}]
        })))
        .expect(1)
        .mount(&crexi)
        .await;

    let query = ListingQuery {
        market: "San Diego".to_string(),
        ..ListingQuery::default()
    };
    let prober = CrexiProber::with_base_urls("crexi-key", vec![crexi.uri()])
        .unwrap()
        .with_query(query);
    let store = RecordingStore::new();

    let outcome = run_sync(&prober, &store).await.unwrap();
    let summary = match outcome {
        SyncOutcome::Completed(summary) => summary,
        other => panic!("expected completion, got {:?}", other),
    };
    assert_eq!(summary.market, "San Diego");

    let payloads = store.payloads();
    assert_eq!(payloads.len(), 2);
    assert_eq!(payloads[0]["market_area"], "San Diego");
    assert_eq!(payloads[1][0]["market_area"], "San Diego");
}
