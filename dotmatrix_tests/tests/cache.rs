// Copyright 2026 the Dotmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caching behind the glyph service.

use std::sync::Arc;
use std::thread;

use dotmatrix::{CacheStats, GlyphCache, GlyphProvider, GlyphService, Rasterizer};

use crate::util::builtin_service;

#[test]
fn cache_shared_between_threads() {
    let service = Arc::new(builtin_service());
    let texts = ["Hello", "World", "Hello, World!", "lo"];
    let handles: Vec<_> = (0..16)
        .map(|i| {
            let service = service.clone();
            let text = texts[i % texts.len()];
            thread::spawn(move || service.bitmaps(text, 16).unwrap())
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let reference = service.bitmaps("Hello, World!", 16).unwrap();
    for glyphs in &results {
        for (ch, bitmap) in glyphs {
            assert_eq!(reference.get(*ch), Some(bitmap), "{ch:?}");
        }
    }
    // H e l o , space W r d !
    assert_eq!(service.cache().len(), 10);
}

#[test]
fn cache_counts_hits_and_misses() {
    let cache = Arc::new(GlyphCache::new());
    let service =
        GlyphService::with_cache(Rasterizer::new(GlyphProvider::builtin()), cache.clone());
    service.bitmaps("abc", 8).unwrap();
    service.bitmaps("abcd", 8).unwrap();
    service.bitmaps("abcd", 16).unwrap();
    assert_eq!(
        cache.stats(),
        CacheStats {
            sizes: 2,
            entries: 8,
            hits: 3,
            misses: 8,
        }
    );
    assert_eq!(
        cache.sizes().iter().map(|s| s.get()).collect::<Vec<_>>(),
        [8, 16]
    );
}

#[test]
fn cache_is_untouched_by_rejected_requests() {
    let service = builtin_service();
    assert!(service.bitmaps("abc", 0).is_err());
    assert!(service.bitmaps("abc", 1000).is_err());
    assert_eq!(service.cache().stats(), CacheStats::default());
}
