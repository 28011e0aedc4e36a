use crate::models::ProbeResult;
use async_trait::async_trait;

/// Common trait for listing sources
/// The sync run only depends on this, so tests can hand it a canned payload
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch the raw listings payload, or report why none could be fetched
    async fn fetch_listings(&self) -> ProbeResult;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;

    /// Market the listings are fetched for; labels every snapshot row
    fn market(&self) -> &str;
}
