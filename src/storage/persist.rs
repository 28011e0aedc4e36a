use crate::models::{MarketSnapshot, SuiteSnapshot};
use crate::storage::traits::SnapshotStore;
use anyhow::{Context, Result};
use tracing::{error, info};

pub const MARKET_SNAPSHOTS_TABLE: &str = "crexi_market_snapshots";
pub const SUITE_SNAPSHOTS_TABLE: &str = "crexi_suite_snapshots";
pub const SUITE_BATCH_SIZE: usize = 100;

/// What was written during one persist call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PersistReport {
    pub market_rows: usize,
    pub suite_batches: usize,
    pub suite_rows: usize,
}

/// Write the market row, then the suites in sequential batches.
///
/// The first failing insert stops the run. Earlier batches stay written;
/// nothing is retried or rolled back.
pub async fn persist_snapshots(
    store: &dyn SnapshotStore,
    market: &MarketSnapshot,
    suites: &[SuiteSnapshot],
) -> Result<PersistReport> {
    info!("💾 Saving data to Supabase...");
    let mut report = PersistReport::default();

    info!("Inserting market snapshot...");
    let row = serde_json::to_value(market).context("Failed to serialize market snapshot")?;
    if let Err(e) = store.insert(MARKET_SNAPSHOTS_TABLE, row).await {
        error!("❌ Error saving market snapshot: {}", e);
        return Err(e);
    }
    report.market_rows = 1;
    info!("✅ Market snapshot saved");

    if !suites.is_empty() {
        info!("Inserting {} suite snapshots...", suites.len());
        for (index, batch) in suites.chunks(SUITE_BATCH_SIZE).enumerate() {
            let rows = serde_json::to_value(batch).context("Failed to serialize suite batch")?;
            if let Err(e) = store.insert(SUITE_SNAPSHOTS_TABLE, rows).await {
                error!("❌ Error saving suite batch {}: {}", index + 1, e);
                return Err(e);
            }
            report.suite_batches += 1;
            report.suite_rows += batch.len();
            info!("✅ Inserted batch {} ({} suites)", index + 1, batch.len());
        }
    }

    info!("✅ All data saved successfully!");
    Ok(report)
}
