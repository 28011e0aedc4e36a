use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Market-level snapshot row, one per sync run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub snapshot_date: DateTime<Utc>,
    pub market_area: String,
    pub property_type: String,
    pub total_properties: usize,
    pub total_suites: usize,
    pub notes: String,
    pub raw_data: serde_json::Value,
}

/// Suite-level snapshot row, one per suite (or per suite-less listing)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteSnapshot {
    pub snapshot_date: DateTime<Utc>,
    pub crexi_asset_id: String,
    pub crexi_suite_id: String,
    pub market_area: String,
    pub property_type: String,
    pub suite_size: Option<f64>,
    pub lease_rate: Option<f64>,
    pub rate_type: String,
    pub status: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub raw_data: serde_json::Value,
}

/// Outcome of walking the endpoint candidates
#[derive(Debug, Clone)]
pub enum ProbeResult {
    Success {
        endpoint: String,
        /// Header that authenticated the request. Values hold the live key.
        headers: BTreeMap<String, String>,
        data: serde_json::Value,
    },
    Failure {
        error: String,
    },
}

impl ProbeResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeResult::Success { .. })
    }
}
