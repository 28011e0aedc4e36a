//! Shared helpers for integration tests.

#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use crexi_sync::crexi::{ListingSource, TARGET_MARKET};
use crexi_sync::models::{ProbeResult, SuiteSnapshot};
use crexi_sync::storage::SnapshotStore;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// One insert call as seen by the store
#[derive(Debug, Clone, PartialEq)]
pub struct InsertCall {
    pub table: String,
    pub rows: usize,
}

/// In-memory store that records calls and can fail on a chosen call
#[derive(Default)]
pub struct RecordingStore {
    calls: Mutex<Vec<InsertCall>>,
    payloads: Mutex<Vec<Value>>,
    fail_on_call: Option<usize>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the n-th insert (0-based); the failing call is still recorded
    pub fn failing_on(call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<InsertCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Rows sent with every call, in call order
    pub fn payloads(&self) -> Vec<Value> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl SnapshotStore for RecordingStore {
    async fn insert(&self, table: &str, rows: Value) -> Result<()> {
        let count = match &rows {
            Value::Array(items) => items.len(),
            _ => 1,
        };
        let mut calls = self.calls.lock().unwrap();
        let index = calls.len();
        calls.push(InsertCall {
            table: table.to_string(),
            rows: count,
        });
        self.payloads.lock().unwrap().push(rows);

        if self.fail_on_call == Some(index) {
            anyhow::bail!("simulated insert failure on call {}", index);
        }
        Ok(())
    }
}

/// Listing source returning a fixed result
pub struct StaticSource(pub ProbeResult);

impl StaticSource {
    pub fn success(data: Value) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("x-api-key".to_string(), "test-key".to_string());
        Self(ProbeResult::Success {
            endpoint: "https://api.crexi.com/v1/listings".to_string(),
            headers,
            data,
        })
    }

    pub fn failure() -> Self {
        Self(ProbeResult::Failure {
            error: "No working endpoint found".to_string(),
        })
    }
}

#[async_trait]
impl ListingSource for StaticSource {
    async fn fetch_listings(&self) -> ProbeResult {
        self.0.clone()
    }

    fn source_name(&self) -> &'static str {
        "Static"
    }

    fn market(&self) -> &str {
        TARGET_MARKET
    }
}

pub fn captured_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 14, 30, 0).unwrap()
}

pub fn suite(asset: &str, suite: usize) -> SuiteSnapshot {
    SuiteSnapshot {
        snapshot_date: captured_at(),
        crexi_asset_id: asset.to_string(),
        crexi_suite_id: format!("S{}", suite),
        market_area: "Los Angeles".to_string(),
        property_type: "Industrial".to_string(),
        suite_size: Some(1000.0 + suite as f64),
        lease_rate: None,
        rate_type: "Monthly".to_string(),
        status: "Active".to_string(),
        address: None,
        city: Some("Vernon".to_string()),
        state: Some("CA".to_string()),
        zip: None,
        raw_data: serde_json::json!({"id": format!("S{}", suite)}),
    }
}

pub fn suites(count: usize) -> Vec<SuiteSnapshot> {
    (0..count).map(|i| suite("A1", i)).collect()
}
