// Copyright 2026 the Dotmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synthetic glyph sources with predictable geometry.

use dotmatrix::{GlyphMask, GlyphSource};

/// Renders every covered character as a solid rectangle sized relative to the
/// requested size, sitting on the baseline.
pub(crate) struct Rect {
    pub(crate) chars: &'static str,
    /// Width as a fraction of the requested size.
    pub(crate) width: f32,
    /// Height as a fraction of the requested size.
    pub(crate) height: f32,
}

impl Rect {
    fn extent(fraction: f32, size: u32) -> u32 {
        (fraction * size as f32).round().max(1.0) as u32
    }
}

impl GlyphSource for Rect {
    fn name(&self) -> &str {
        "rect"
    }

    fn covers(&self, ch: char, _size: u32) -> bool {
        self.chars.contains(ch)
    }

    fn render(&self, _ch: char, size: u32) -> Option<GlyphMask> {
        let w = Self::extent(self.width, size);
        let h = Self::extent(self.height, size);
        let coverage = vec![u8::MAX; (w * h) as usize];
        GlyphMask::from_coverage(0, -(h as i32), w, h, &coverage)
    }
}

/// Claims every character and renders none of them.
pub(crate) struct Unrenderable;

impl GlyphSource for Unrenderable {
    fn name(&self) -> &str {
        "unrenderable"
    }

    fn covers(&self, _ch: char, _size: u32) -> bool {
        true
    }

    fn render(&self, _ch: char, _size: u32) -> Option<GlyphMask> {
        None
    }
}
