use crexi_sync::config::{Config, REQUIRED_VARS};
use crexi_sync::crexi::{CrexiProber, TARGET_MARKET};
use crexi_sync::storage::SupabaseStore;
use crexi_sync::{run_sync, SyncOutcome};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("============================================================");
    info!("🏭 Crexi to Supabase Sync - {} Industrial Listings", TARGET_MARKET);
    info!("============================================================");

    // Nothing touches the network until every variable is present
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ {}", e);
            eprintln!("\nPlease set them in your environment or .env file:");
            for name in REQUIRED_VARS {
                eprintln!("  export {}='your-{}'", name, name.to_lowercase().replace('_', "-"));
            }
            std::process::exit(1);
        }
    };

    info!("📊 Connecting to Supabase...");
    let store = SupabaseStore::new(&config.supabase_url, &config.supabase_key)?;
    let prober = match &config.crexi_base_urls {
        Some(urls) => CrexiProber::with_base_urls(&config.crexi_api_key, urls.clone())?,
        None => CrexiProber::new(&config.crexi_api_key)?,
    };

    let summary = match run_sync(&prober, &store).await? {
        SyncOutcome::Completed(summary) => summary,
        SyncOutcome::NoWorkingEndpoint { error } => {
            error!("❌ {}", error);
            warn!("💡 Next steps:");
            warn!("  1. Check Crexi API documentation for correct endpoint");
            warn!("  2. Verify API key is activated for staging/production");
            warn!("  3. Contact Crexi support for endpoint and authentication details");
            warn!("⚠️  Sync completed with errors. Check output above.");
            std::process::exit(1);
        }
    };

    info!("============================================================");
    info!("✅ Sync completed successfully!");
    info!("============================================================");

    println!("\n📈 Summary:");
    println!("  Market: {}", summary.market);
    println!("  Endpoint: {}", summary.endpoint);
    println!("  Properties: {}", summary.properties);
    println!("  Suites: {} ({} batches)", summary.suites, summary.persisted.suite_batches);
    println!("  Timestamp: {}", summary.snapshot_date.to_rfc3339());
    println!();

    Ok(())
}
