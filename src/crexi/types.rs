use serde::Serialize;

/// Market every run targets
pub const TARGET_MARKET: &str = "Los Angeles";

/// Property type reported on market snapshots and used as the suite default
pub const DEFAULT_PROPERTY_TYPE: &str = "Industrial";

/// Search parameters sent with every probe request, serialized as the query string
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingQuery {
    /// Market name, e.g. "Los Angeles"
    pub market: String,
    pub property_type: String,
    pub transaction_type: String,
    pub status: String,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            market: TARGET_MARKET.to_string(),
            property_type: DEFAULT_PROPERTY_TYPE.to_string(),
            transaction_type: "Lease".to_string(),
            status: "Active".to_string(),
        }
    }
}
