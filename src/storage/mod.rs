pub mod persist;
pub mod supabase;
pub mod traits;

pub use persist::{
    persist_snapshots, PersistReport, MARKET_SNAPSHOTS_TABLE, SUITE_BATCH_SIZE,
    SUITE_SNAPSHOTS_TABLE,
};
pub use supabase::SupabaseStore;
pub use traits::SnapshotStore;
