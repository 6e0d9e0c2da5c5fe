//! Default values shared by the config structs.

use crate::constants;

pub(crate) fn max_edit_distance() -> usize {
    constants::DEFAULT_MAX_EDIT_DISTANCE
}

pub(crate) fn availability_cache_entries() -> u64 {
    constants::DEFAULT_AVAILABILITY_CACHE_ENTRIES
}

pub(crate) fn availability_cache_ttl_secs() -> u64 {
    constants::DEFAULT_AVAILABILITY_CACHE_TTL_SECS
}

pub(crate) fn updated_by() -> String {
    constants::SYSTEM_UPDATED_BY.to_string()
}
