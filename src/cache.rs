//! Single-slot, version-stamped memoization for per-document computations.
//!
//! The slot holds exactly one (key, value) pair behind a lock. A read
//! returns the value only on exact key equality; a miss recomputes *outside*
//! the lock and overwrites the slot afterwards. Two concurrent misses may
//! therefore both compute — the later store wins and there is no staleness
//! guard beyond the key equality test. Kein Verlauf: ein Store fuer (D, V2)
//! verdraengt (D, V1) endgueltig.
//!
//! Used to memoize member-boundary spans per document version, but generic
//! over key and value.

use std::fmt;
use std::ops::Range;
use std::sync::{Arc, Mutex, PoisonError};

/// Cache key for a document snapshot: identity plus version stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentVersion {
    pub document_id: u64,
    pub version: u64,
}

/// Member-boundary spans of one document, shared between readers.
pub type MemberSpans = Arc<Vec<Range<usize>>>;

/// The concrete cache the formatting pipeline uses.
pub type MemberSpanCache = VersionedCache<DocumentVersion, MemberSpans>;

/// A guarded single-slot cache: compare-on-read, overwrite-on-miss, no
/// eviction policy beyond slot replacement.
pub struct VersionedCache<K, V> {
    slot: Mutex<Option<(K, V)>>,
}

impl<K, V> Default for VersionedCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for VersionedCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersionedCache").finish_non_exhaustive()
    }
}

impl<K, V> VersionedCache<K, V> {
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }
}

impl<K: Eq + Clone, V: Clone> VersionedCache<K, V> {
    /// Returns the cached value iff the stored key matches `key` exactly.
    pub fn get(&self, key: &K) -> Option<V> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        match &*slot {
            Some((stored, value)) if stored == key => Some(value.clone()),
            _ => None,
        }
    }

    /// Overwrites the slot. Last writer wins.
    pub fn store(&self, key: K, value: V) {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some((key, value));
    }

    /// Returns the cached value on a key hit; otherwise computes outside the
    /// lock, stores the result, and returns it.
    pub fn get_or_compute(&self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some(value) = self.get(&key) {
            log::trace!("cache hit");
            return value;
        }
        // Miss: Berechnung ausserhalb des Locks, danach Store (last-write-wins).
        log::debug!("cache miss, recomputing");
        let value = compute();
        self.store(key, value.clone());
        value
    }
}
