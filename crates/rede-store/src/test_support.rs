//! Shared helpers for store tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::NetworkStore;

/// Fixed reference instant so seed timestamps are deterministic.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap()
}

/// A store seeded with the standard mock dataset.
pub fn test_store() -> NetworkStore {
    NetworkStore::seeded(fixed_now())
}
