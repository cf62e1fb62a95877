// Copyright 2026 the Dotmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::Path;

use crate::{BuiltinFont, FontFile, GlyphSource};

/// A primary glyph source backed by a built-in fallback.
///
/// The source for each character is chosen by asking
/// [`GlyphSource::covers`], primary first.
pub struct GlyphProvider {
    primary: Option<Box<dyn GlyphSource>>,
    fallback: Box<dyn GlyphSource>,
}

impl GlyphProvider {
    /// Uses the font file at `path`, or only the built-in font if it cannot be loaded.
    ///
    /// A missing or broken font is logged and otherwise ignored: the display should
    /// keep working with degraded glyphs rather than fail.
    pub fn open(path: impl AsRef<Path>) -> Self {
        match FontFile::open(path) {
            Ok(font) => Self::new(font),
            Err(err) => {
                log::warn!("{err}; using the built-in font");
                Self::builtin()
            }
        }
    }

    /// Uses `primary` first and the built-in font for anything it lacks.
    pub fn new(primary: impl GlyphSource + 'static) -> Self {
        Self {
            primary: Some(Box::new(primary)),
            fallback: Box::new(BuiltinFont::new()),
        }
    }

    /// Uses only the built-in font.
    pub fn builtin() -> Self {
        Self {
            primary: None,
            fallback: Box::new(BuiltinFont::new()),
        }
    }

    /// Replaces the fallback source.
    pub fn with_fallback(mut self, fallback: impl GlyphSource + 'static) -> Self {
        self.fallback = Box::new(fallback);
        self
    }

    /// Whether a primary source is configured.
    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    /// The first source that covers `ch` at `size`, if any.
    pub fn source_for(&self, ch: char, size: u32) -> Option<&dyn GlyphSource> {
        self.primary
            .as_deref()
            .into_iter()
            .chain(core::iter::once(&*self.fallback))
            .find(|source| source.covers(ch, size))
    }
}

impl core::fmt::Debug for GlyphProvider {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GlyphProvider")
            .field("primary", &self.primary.as_ref().map(|s| s.name()))
            .field("fallback", &self.fallback.name())
            .finish()
    }
}
