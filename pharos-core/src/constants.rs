/// Pharos system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Separator between aggregation key segments.
pub const KEY_SEPARATOR: char = '|';

/// Maximum accepted edit distance between a broken path and a candidate.
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 5;

/// Actor recorded on entities the system mutates on its own.
pub const SYSTEM_UPDATED_BY: &str = "system";

/// Default availability-cache capacity (entries).
pub const DEFAULT_AVAILABILITY_CACHE_ENTRIES: u64 = 10_000;

/// Default availability-cache TTL (seconds).
pub const DEFAULT_AVAILABILITY_CACHE_TTL_SECS: u64 = 300;
