pub mod probe;
pub mod traits;
pub mod types;

pub use probe::{AttemptOutcome, AuthScheme, CrexiProber, ProbeCandidate};
pub use traits::ListingSource;
pub use types::{ListingQuery, DEFAULT_PROPERTY_TYPE, TARGET_MARKET};
