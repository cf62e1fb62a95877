// Copyright 2026 the Dotmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Request level entry point.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::sync::Arc;

use crate::{CellSize, Error, GlyphCache, PackedBitmap, Rasterizer, pack};

/// Answers "bitmaps for this text at this size" requests.
///
/// A service owns its rasterizer and shares a [`GlyphCache`], which may be shared
/// with other services as long as they render with the same sources.
#[derive(Debug)]
pub struct GlyphService {
    rasterizer: Rasterizer,
    cache: Arc<GlyphCache>,
}

impl GlyphService {
    /// Creates a service with a fresh cache.
    pub fn new(rasterizer: Rasterizer) -> Self {
        Self::with_cache(rasterizer, Arc::new(GlyphCache::new()))
    }

    /// Creates a service that stores its glyphs in `cache`.
    pub fn with_cache(rasterizer: Rasterizer, cache: Arc<GlyphCache>) -> Self {
        Self { rasterizer, cache }
    }

    /// The rasterizer used for cache misses.
    pub fn rasterizer(&self) -> &Rasterizer {
        &self.rasterizer
    }

    /// The cache backing this service.
    pub fn cache(&self) -> &Arc<GlyphCache> {
        &self.cache
    }

    /// Returns one packed bitmap per distinct character of `text`.
    ///
    /// `size` is validated before anything is rasterized; it is the only way this
    /// can fail. Characters no source can render come back as blank cells.
    pub fn bitmaps(&self, text: &str, size: i64) -> Result<GlyphSet, Error> {
        let size = CellSize::try_from(size)?;
        let glyphs = self
            .cache
            .get_or_compute(text, size, |ch| pack(&self.rasterizer.rasterize(ch, size)));
        Ok(GlyphSet { size, glyphs })
    }
}

/// The bitmaps returned for one request, ordered by character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphSet {
    size: CellSize,
    glyphs: BTreeMap<char, PackedBitmap>,
}

impl GlyphSet {
    /// The cell size every bitmap was rendered at.
    pub fn size(&self) -> CellSize {
        self.size
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the request text was empty.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// The bitmap for `ch`, if it appeared in the request text.
    pub fn get(&self, ch: char) -> Option<&PackedBitmap> {
        self.glyphs.get(&ch)
    }

    /// Iterates over `(char, bitmap)` pairs in ascending character order.
    pub fn iter(&self) -> btree_map::Iter<'_, char, PackedBitmap> {
        self.glyphs.iter()
    }
}

impl<'a> IntoIterator for &'a GlyphSet {
    type Item = (&'a char, &'a PackedBitmap);
    type IntoIter = btree_map::Iter<'a, char, PackedBitmap>;

    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.iter()
    }
}

impl IntoIterator for GlyphSet {
    type Item = (char, PackedBitmap);
    type IntoIter = btree_map::IntoIter<char, PackedBitmap>;

    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.into_iter()
    }
}
