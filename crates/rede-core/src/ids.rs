//! ID prefix constants and the monotonic ID generator.
//!
//! The original implementation derived new IDs from the wall clock, which can
//! collide under rapid successive creation. New IDs here come from a per-store
//! monotonic counter and are collision-free by construction. Seed data keeps
//! its original literal IDs (`est-1`, `prof-1`, `aff-1`, ...).

use std::sync::atomic::{AtomicU64, Ordering};

pub const PREFIX_PARTNER: &str = "par";
pub const PREFIX_PROFESSIONAL: &str = "prof";
pub const PREFIX_LINK: &str = "aff";
pub const PREFIX_EXAM: &str = "ex";
pub const PREFIX_LOG: &str = "log";

/// Format an ID from a prefix and a counter value.
#[must_use]
pub fn format_id(prefix: &str, n: u64) -> String {
    format!("{prefix}-{n:08}")
}

/// Monotonic counter shared by all entity collections of one store.
///
/// A single counter is enough: IDs only need to be unique within their
/// collection, and the prefix keeps them readable.
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    #[must_use]
    pub const fn starting_at(n: u64) -> Self {
        Self {
            next: AtomicU64::new(n),
        }
    }

    /// Mint the next ID with the given prefix.
    pub fn next_id(&self, prefix: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format_id(prefix, n)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
