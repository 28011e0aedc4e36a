//! Crexi to Supabase sync.
//!
//! Discovers a working Crexi listings endpoint, reshapes the industrial lease
//! listings for one market into market and suite snapshots, and appends them
//! to Supabase tables.

pub mod config;
pub mod crexi;
pub mod models;
pub mod normalize;
pub mod snapshots;
pub mod storage;
pub mod sync;

pub use config::{Config, ConfigError};
pub use sync::{run_sync, SyncOutcome, SyncSummary};
