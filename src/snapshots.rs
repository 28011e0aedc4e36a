use crate::crexi::types::DEFAULT_PROPERTY_TYPE;
use crate::models::{MarketSnapshot, SuiteSnapshot};
use crate::normalize::{
    extract_listings, id_field, number_field, shared_field, string_field, suites_of,
};
use chrono::{DateTime, Utc};
use serde_json::Value;

pub const SNAPSHOT_NOTES: &str = "Synced from Crexi API";
pub const DEFAULT_RATE_TYPE: &str = "Monthly";
pub const DEFAULT_STATUS: &str = "Active";

/// Aggregate counts for the whole payload
pub fn build_market_snapshot(
    payload: &Value,
    market: &str,
    captured_at: DateTime<Utc>,
) -> MarketSnapshot {
    let listings = extract_listings(payload);
    let total_suites = listings.iter().map(|listing| suites_of(listing).len()).sum();

    MarketSnapshot {
        snapshot_date: captured_at,
        market_area: market.to_string(),
        property_type: DEFAULT_PROPERTY_TYPE.to_string(),
        total_properties: listings.len(),
        total_suites,
        notes: SNAPSHOT_NOTES.to_string(),
        raw_data: payload.clone(),
    }
}

/// One record per suite; suite-less listings yield one record each
pub fn build_suite_snapshots(
    payload: &Value,
    market: &str,
    captured_at: DateTime<Utc>,
) -> Vec<SuiteSnapshot> {
    extract_listings(payload)
        .iter()
        .flat_map(move |listing| {
            suites_of(listing)
                .into_iter()
                .map(move |suite| suite_snapshot(listing, suite, market, captured_at))
        })
        .collect()
}

fn suite_snapshot(
    listing: &Value,
    suite: &Value,
    market: &str,
    captured_at: DateTime<Utc>,
) -> SuiteSnapshot {
    SuiteSnapshot {
        snapshot_date: captured_at,
        crexi_asset_id: id_field(listing, &["id", "assetId"]),
        crexi_suite_id: id_field(suite, &["id", "suiteId"]),
        market_area: market.to_string(),
        property_type: string_field(listing, &["propertyType"])
            .unwrap_or_else(|| DEFAULT_PROPERTY_TYPE.to_string()),
        suite_size: number_field(suite, &["size", "squareFeet"]),
        lease_rate: number_field(suite, &["rate", "leaseRate"]),
        rate_type: string_field(suite, &["rateType"])
            .unwrap_or_else(|| DEFAULT_RATE_TYPE.to_string()),
        status: string_field(suite, &["status"]).unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        address: shared_field(listing, "address", suite, "address"),
        city: shared_field(listing, "city", suite, "city"),
        state: shared_field(listing, "state", suite, "state"),
        zip: shared_field(listing, "zip", suite, "zipCode"),
        raw_data: suite.clone(),
    }
}
