use crate::crexi::traits::ListingSource;
use crate::models::ProbeResult;
use crate::snapshots::{build_market_snapshot, build_suite_snapshots};
use crate::storage::{persist_snapshots, PersistReport, SnapshotStore};
use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::info;

/// Totals reported at the end of a successful run
#[derive(Debug, Clone)]
pub struct SyncSummary {
    pub market: String,
    pub endpoint: String,
    pub properties: usize,
    pub suites: usize,
    pub snapshot_date: DateTime<Utc>,
    pub persisted: PersistReport,
}

#[derive(Debug, Clone)]
pub enum SyncOutcome {
    Completed(SyncSummary),
    /// Every candidate failed; nothing was written
    NoWorkingEndpoint { error: String },
}

/// Fetch, reshape and persist one market snapshot.
///
/// Rows are labelled with the market the source actually queried.
pub async fn run_sync(
    source: &dyn ListingSource,
    store: &dyn SnapshotStore,
) -> Result<SyncOutcome> {
    let market = source.market();
    info!("🔍 Fetching {} listings for {}...", source.source_name(), market);

    let (endpoint, data) = match source.fetch_listings().await {
        ProbeResult::Success { endpoint, data, .. } => (endpoint, data),
        ProbeResult::Failure { error } => return Ok(SyncOutcome::NoWorkingEndpoint { error }),
    };

    info!("🔄 Processing API response...");
    let captured_at = Utc::now();
    let market_snapshot = build_market_snapshot(&data, market, captured_at);
    let suite_snapshots = build_suite_snapshots(&data, market, captured_at);
    info!("Processed {} properties", market_snapshot.total_properties);
    info!("Processed {} suites", suite_snapshots.len());

    let persisted = persist_snapshots(store, &market_snapshot, &suite_snapshots).await?;

    Ok(SyncOutcome::Completed(SyncSummary {
        market: market.to_string(),
        endpoint,
        properties: market_snapshot.total_properties,
        suites: suite_snapshots.len(),
        snapshot_date: captured_at,
        persisted,
    }))
}
