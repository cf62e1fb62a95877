// Copyright 2026 the Dotmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

mod sources;

use std::path::PathBuf;

use dotmatrix::{GlyphProvider, GlyphService, PixelGrid, Rasterizer};

pub(crate) use sources::{Rect, Unrenderable};

/// Fonts tried, in order, when `DOTMATRIX_TEST_FONT` is not set.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// A real font file to test against, if this machine has one.
pub(crate) fn test_font() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("DOTMATRIX_TEST_FONT") {
        return Some(PathBuf::from(path));
    }
    let found = SYSTEM_FONTS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file());
    if found.is_none() {
        eprintln!("no test font found; set DOTMATRIX_TEST_FONT to run font tests");
    }
    found
}

/// A service that only has the built-in font.
pub(crate) fn builtin_service() -> GlyphService {
    GlyphService::new(Rasterizer::new(GlyphProvider::builtin()))
}

/// The `(top, left, height, width)` box around the lit pixels of `grid`.
pub(crate) fn lit_extent(grid: &PixelGrid) -> Option<(usize, usize, usize, usize)> {
    let mut extent: Option<(usize, usize, usize, usize)> = None;
    for (row, pixels) in grid.rows().enumerate() {
        for (col, _) in pixels.iter().enumerate().filter(|(_, on)| **on) {
            extent = Some(match extent {
                None => (row, col, row, col),
                Some((top, left, bottom, right)) => {
                    (top.min(row), left.min(col), bottom.max(row), right.max(col))
                }
            });
        }
    }
    extent.map(|(top, left, bottom, right)| (top, left, bottom - top + 1, right - left + 1))
}
