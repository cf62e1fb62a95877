// Copyright 2026 the Dotmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fitting one glyph into a square cell.

use crate::{CellSize, Error, GlyphMask, GlyphProvider, GlyphSource, PixelGrid};

/// Tuning knobs for [`Rasterizer`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RasterConfig {
    /// Fraction of the exact fit used when shrinking an overflowing glyph.
    ///
    /// Rendered bounds do not scale perfectly linearly with the font size, so
    /// aiming slightly below the exact fit makes the corrected glyph more likely
    /// to fit.
    pub overflow_margin: f32,
    /// Smallest size an overflowing glyph is re-rendered at.
    pub min_corrected_size: u32,
    /// Coverage from which a mask pixel counts as foreground.
    pub min_coverage: u8,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            overflow_margin: 0.9,
            min_corrected_size: 8,
            min_coverage: 1,
        }
    }
}

/// Renders characters into centered 1-bit cells.
///
/// For each character the rasterizer:
///
/// 1. picks a source from its [`GlyphProvider`] and renders the glyph at the
///    cell size,
/// 2. if the glyph's tight bounds overflow the cell, re-renders it once at
///    `max(min_corrected_size, round(size * margin * min(size / w, size / h)))`,
/// 3. centers the tight bounds in the cell and thresholds the coverage.
///
/// The overflow correction is a single pass. Glyph bounds do not always shrink
/// in proportion to the font size, so a corrected glyph can still overflow; it is
/// then placed centered anyway and whatever lies outside the cell is clipped.
#[derive(Debug)]
pub struct Rasterizer {
    provider: GlyphProvider,
    config: RasterConfig,
}

impl Rasterizer {
    /// Creates a rasterizer with the default configuration.
    pub fn new(provider: GlyphProvider) -> Self {
        Self::with_config(provider, RasterConfig::default())
    }

    /// Creates a rasterizer with a custom configuration.
    pub fn with_config(provider: GlyphProvider, config: RasterConfig) -> Self {
        Self { provider, config }
    }

    /// The glyph provider.
    pub fn provider(&self) -> &GlyphProvider {
        &self.provider
    }

    /// The configuration.
    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    /// Renders `ch` into a `size`×`size` grid, substituting a blank cell when no
    /// source can render it.
    pub fn rasterize(&self, ch: char, size: CellSize) -> PixelGrid {
        self.try_rasterize(ch, size).unwrap_or_else(|err| {
            log::warn!("{err}; using a blank cell");
            PixelGrid::new(size.get())
        })
    }

    /// Renders `ch` into a `size`×`size` grid.
    ///
    /// Fails with [`ErrorKind::GlyphRenderFailure`](crate::ErrorKind::GlyphRenderFailure)
    /// if no source covers `ch` or the selected source fails to render it.
    pub fn try_rasterize(&self, ch: char, size: CellSize) -> Result<PixelGrid, Error> {
        let n = size.get();
        let source = self
            .provider
            .source_for(ch, n)
            .ok_or_else(|| Error::glyph_render_failure(ch, n))?;
        let mask = source
            .render(ch, n)
            .ok_or_else(|| Error::glyph_render_failure(ch, n))?;
        let mask = self.correct_overflow(source, ch, n, mask);
        Ok(self.place(&mask, n))
    }

    /// Re-renders an overflowing glyph once at a proportionally smaller size.
    fn correct_overflow(
        &self,
        source: &dyn GlyphSource,
        ch: char,
        n: u32,
        mask: GlyphMask,
    ) -> GlyphMask {
        let bounds = mask.bounds();
        if bounds.fits(n) {
            return mask;
        }
        let corrected = corrected_size(n, bounds.width, bounds.height, &self.config);
        match source.render(ch, corrected) {
            Some(retry) => {
                let fitted = retry.bounds();
                if !fitted.fits(n) {
                    log::debug!(
                        "{ch:?} still overflows {n}px at {corrected}px ({}x{}); keeping it",
                        fitted.width,
                        fitted.height
                    );
                }
                retry
            }
            None => {
                log::debug!("{ch:?} could not be re-rendered at {corrected}px; keeping the overflow");
                mask
            }
        }
    }

    /// Centers `mask` in an `n`×`n` grid and thresholds its coverage.
    fn place(&self, mask: &GlyphMask, n: u32) -> PixelGrid {
        let mut grid = PixelGrid::new(n);
        let bounds = mask.bounds();
        if bounds.is_empty() {
            return grid;
        }
        let (dx, dy) = centering_offset(n, &bounds);
        for (row, coverage) in (0_i32..).zip(mask.rows()) {
            for (col, &value) in (0_i32..).zip(coverage) {
                if value >= self.config.min_coverage {
                    grid.set_clipped(bounds.y0 + row + dy, bounds.x0 + col + dx, true);
                }
            }
        }
        grid
    }
}

/// The size to re-render an overflowing `width`×`height` glyph at for an `n` pixel cell.
#[expect(
    clippy::cast_possible_truncation,
    reason = "float to integer casts saturate and the value is non-negative"
)]
fn corrected_size(n: u32, width: u32, height: u32, config: &RasterConfig) -> u32 {
    let n_f = f64::from(n);
    let scale = f64::from(config.overflow_margin)
        * (n_f / f64::from(width.max(1))).min(n_f / f64::from(height.max(1)));
    let scaled = (n_f * scale).round().max(0.0) as u32;
    scaled.max(config.min_corrected_size)
}

/// Offset that moves the tight bounds to the middle of the cell.
///
/// The bounds' origin is subtracted, so glyphs with negative bearings land in
/// the same place as glyphs that start at the pen.
fn centering_offset(n: u32, bounds: &crate::GlyphBounds) -> (i32, i32) {
    let n = i64::from(n);
    let axis = |extent: u32, origin: i32| {
        let start = (n - i64::from(extent)).div_euclid(2);
        i32::try_from(start - i64::from(origin)).unwrap_or(i32::MAX)
    };
    (
        axis(bounds.width, bounds.x0),
        axis(bounds.height, bounds.y0),
    )
}
