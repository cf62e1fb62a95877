// Copyright 2026 the Dotmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The glyph source abstraction and the masks sources produce.

/// Something that can render a coverage mask for a single character.
///
/// Sources are queried by capability first: [`covers`](Self::covers) must be
/// cheap and is used to pick between a real font and the built-in fallback.
/// [`render`](Self::render) may still return `None` for a covered character
/// when rendering itself fails.
pub trait GlyphSource: Send + Sync {
    /// Human readable name, used in log messages.
    fn name(&self) -> &str;

    /// Whether this source has a glyph for `ch` at `size` pixels per em.
    fn covers(&self, ch: char, size: u32) -> bool;

    /// Renders `ch` at `size` pixels per em.
    fn render(&self, ch: char, size: u32) -> Option<GlyphMask>;
}

/// The tight pixel bounds of a glyph relative to its pen position.
///
/// The pen sits at `(0, 0)` on the baseline and `y` grows downward, so glyphs
/// above the baseline have a negative `y0`. Fonts routinely report negative
/// left bearings as well.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphBounds {
    /// Left edge.
    pub x0: i32,
    /// Top edge.
    pub y0: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl GlyphBounds {
    /// Whether the bounds fit in a `size`×`size` cell.
    pub fn fits(&self, size: u32) -> bool {
        self.width <= size && self.height <= size
    }

    /// Whether the bounds enclose no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A rendered glyph: 8-bit coverage values for the pixels inside its bounds.
///
/// Masks are always trimmed to their tight bounds, so the first and last rows
/// and columns each contain at least one covered pixel.
#[derive(Clone, PartialEq, Eq)]
pub struct GlyphMask {
    bounds: GlyphBounds,
    coverage: Vec<u8>,
}

impl GlyphMask {
    /// A mask with no covered pixels.
    pub fn empty() -> Self {
        Self {
            bounds: GlyphBounds::default(),
            coverage: Vec::new(),
        }
    }

    /// Builds a mask from a `width`×`height` row-major coverage buffer whose
    /// top-left pixel sits at `(left, top)` relative to the pen.
    ///
    /// Rows and columns without any coverage are trimmed away. Returns `None`
    /// if `coverage` is shorter than `width * height`.
    pub fn from_coverage(
        left: i32,
        top: i32,
        width: u32,
        height: u32,
        coverage: &[u8],
    ) -> Option<Self> {
        let (w, h) = (width as usize, height as usize);
        let coverage = coverage.get(..w * h)?;
        let mut min_x = usize::MAX;
        let mut min_y = usize::MAX;
        let mut max_x = 0;
        let mut max_y = 0;
        for (y, row) in coverage.chunks_exact(w.max(1)).enumerate() {
            for (x, _) in row.iter().enumerate().filter(|(_, c)| **c != 0) {
                min_x = min_x.min(x);
                max_x = max_x.max(x);
                min_y = min_y.min(y);
                max_y = max_y.max(y);
            }
        }
        if min_x == usize::MAX {
            return Some(Self::empty());
        }

        let tight_w = max_x - min_x + 1;
        let tight_h = max_y - min_y + 1;
        let mut trimmed = Vec::with_capacity(tight_w * tight_h);
        for row in coverage.chunks_exact(w).skip(min_y).take(tight_h) {
            trimmed.extend_from_slice(&row[min_x..=max_x]);
        }
        Some(Self {
            bounds: GlyphBounds {
                x0: left.saturating_add(i32::try_from(min_x).ok()?),
                y0: top.saturating_add(i32::try_from(min_y).ok()?),
                width: u32::try_from(tight_w).ok()?,
                height: u32::try_from(tight_h).ok()?,
            },
            coverage: trimmed,
        })
    }

    /// The tight bounds of the covered pixels.
    pub fn bounds(&self) -> GlyphBounds {
        self.bounds
    }

    /// Coverage at `(row, col)` inside the bounds, `0` outside.
    #[inline]
    pub fn coverage(&self, row: usize, col: usize) -> u8 {
        let w = self.bounds.width as usize;
        if col >= w {
            return 0;
        }
        self.coverage.get(row * w + col).copied().unwrap_or(0)
    }

    /// Rows of coverage values, top to bottom.
    pub fn rows(&self) -> core::slice::ChunksExact<'_, u8> {
        self.coverage.chunks_exact((self.bounds.width as usize).max(1))
    }
}

impl core::fmt::Debug for GlyphMask {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GlyphMask")
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}
