// Copyright 2026 the Dotmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packed glyph cache keyed by character and cell size.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard};

use hashbrown::HashMap;

use crate::{CellSize, PackedBitmap, packed_len};

type Bucket = HashMap<char, PackedBitmap>;

/// Memoizes packed bitmaps per `(char, size)`.
///
/// Entries are never evicted: the set of characters a display shows is small
/// and the cache lives as long as the process serving it.
///
/// Each cell size has its own bucket behind its own mutex. Missing glyphs are
/// computed with no lock held and inserted afterwards; when two callers race on
/// the same miss, both compute it and the first insert wins, so every caller
/// sees the same bytes.
pub struct GlyphCache {
    buckets: RwLock<HashMap<CellSize, Arc<Mutex<Bucket>>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Counters describing a [`GlyphCache`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of distinct cell sizes with at least one bucket.
    pub sizes: usize,
    /// Number of cached bitmaps across all sizes.
    pub entries: usize,
    /// Lookups answered from the cache since the last [`GlyphCache::clear_stats`].
    pub hits: u64,
    /// Lookups that had to compute since the last [`GlyphCache::clear_stats`].
    pub misses: u64,
}

impl GlyphCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            buckets: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns the packed bitmap of every distinct character in `text`.
    ///
    /// Characters already cached for `size` are returned as stored. The others
    /// are computed with `compute`, at most once per character per call, and
    /// cached. The result has exactly one entry per distinct character.
    ///
    /// A computed bitmap with the wrong length for `size` is replaced by a blank
    /// one, so a cache entry is always well formed.
    pub fn get_or_compute<F>(
        &self,
        text: &str,
        size: CellSize,
        mut compute: F,
    ) -> BTreeMap<char, PackedBitmap>
    where
        F: FnMut(char) -> PackedBitmap,
    {
        let distinct: BTreeSet<char> = text.chars().collect();
        let bucket = self.bucket(size);
        let mut glyphs = BTreeMap::new();
        let mut missing = Vec::new();
        {
            let entries = lock(&bucket);
            for ch in distinct {
                match entries.get(&ch) {
                    Some(bitmap) => {
                        glyphs.insert(ch, bitmap.clone());
                    }
                    None => missing.push(ch),
                }
            }
        }
        self.hits.fetch_add(glyphs.len() as u64, Ordering::Relaxed);
        if missing.is_empty() {
            return glyphs;
        }
        self.misses.fetch_add(missing.len() as u64, Ordering::Relaxed);
        log::debug!("rasterizing {} new glyphs at {size}", missing.len());

        let expected = packed_len(size.get());
        let computed: Vec<_> = missing
            .into_iter()
            .map(|ch| {
                let bitmap = compute(ch);
                if bitmap.len() == expected {
                    (ch, bitmap)
                } else {
                    log::warn!(
                        "discarding {} byte bitmap for {ch:?} at {size}, expected {expected}",
                        bitmap.len()
                    );
                    (ch, PackedBitmap::blank(size.get()))
                }
            })
            .collect();

        let mut entries = lock(&bucket);
        for (ch, bitmap) in computed {
            let stored = entries.entry(ch).or_insert(bitmap);
            glyphs.insert(ch, stored.clone());
        }
        glyphs
    }

    /// Returns the cached bitmap for `(ch, size)`, without computing anything.
    pub fn get(&self, ch: char, size: CellSize) -> Option<PackedBitmap> {
        let bucket = read(&self.buckets).get(&size).cloned()?;
        let bitmap = lock(&bucket).get(&ch).cloned();
        bitmap
    }

    /// Number of cached bitmaps across all sizes.
    pub fn len(&self) -> usize {
        read(&self.buckets)
            .values()
            .map(|bucket| lock(bucket).len())
            .sum()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The cell sizes that have been requested, in ascending order.
    pub fn sizes(&self) -> Vec<CellSize> {
        let mut sizes: Vec<_> = read(&self.buckets).keys().copied().collect();
        sizes.sort_unstable();
        sizes
    }

    /// A snapshot of the cache counters.
    pub fn stats(&self) -> CacheStats {
        let buckets = read(&self.buckets);
        CacheStats {
            sizes: buckets.len(),
            entries: buckets.values().map(|bucket| lock(bucket).len()).sum(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Resets the hit and miss counters, keeping every entry.
    pub fn clear_stats(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    fn bucket(&self, size: CellSize) -> Arc<Mutex<Bucket>> {
        if let Some(bucket) = read(&self.buckets).get(&size) {
            return bucket.clone();
        }
        self.buckets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(size)
            .or_default()
            .clone()
    }
}

impl Default for GlyphCache {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for GlyphCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let stats = self.stats();
        f.debug_struct("GlyphCache")
            .field("sizes", &stats.sizes)
            .field("entries", &stats.entries)
            .finish_non_exhaustive()
    }
}

// Every critical section leaves the maps consistent, so a panic elsewhere
// while a lock was held does not invalidate the data.
fn lock(bucket: &Mutex<Bucket>) -> MutexGuard<'_, Bucket> {
    bucket.lock().unwrap_or_else(PoisonError::into_inner)
}

fn read<T>(table: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    table.read().unwrap_or_else(PoisonError::into_inner)
}
