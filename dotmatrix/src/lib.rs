// Copyright 2026 the Dotmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dotmatrix turns characters into packed 1-bit cells for LED dot-matrix displays.
//!
//! Every character is rasterized on its own into a square `N`×`N` cell, centered,
//! and shrunk once if its natural rendering overflows the cell. The cell is then
//! packed row-major, eight pixels per byte with the most significant bit on the left,
//! which is the layout the display firmware scrolls through.
//!
//! The pieces, leaf first:
//!
//! - [`PixelGrid`]: an owned `N`×`N` buffer of on/off pixels.
//! - [`pack`] and [`PackedBitmap`]: the byte form of a grid.
//! - [`GlyphSource`]: anything that can render a coverage mask for a character.
//!   [`FontFile`] reads a real font, [`BuiltinFont`] is the embedded fallback and
//!   [`GlyphProvider`] picks between them.
//! - [`Rasterizer`]: measures, corrects and centers one glyph into a grid.
//! - [`GlyphCache`]: memoizes packed bitmaps per `(char, size)`.
//! - [`GlyphService`]: validates a request and returns a [`GlyphSet`].
//!
//! ## Example
//!
//! ```
//! use dotmatrix::{GlyphProvider, GlyphService, Rasterizer};
//!
//! let provider = GlyphProvider::open("/does/not/exist.ttf");
//! let service = GlyphService::new(Rasterizer::new(provider));
//! let glyphs = service.bitmaps("Hi!", 16).unwrap();
//!
//! assert_eq!(glyphs.len(), 3);
//! assert_eq!(glyphs.get('H').unwrap().len(), 16 * 2);
//! ```

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builtin;
mod cache;
mod error;
mod font;
mod grid;
mod pack;
mod provider;
mod raster;
mod service;
mod size;
mod source;

pub use builtin::BuiltinFont;
pub use cache::{CacheStats, GlyphCache};
pub use error::{Error, ErrorKind};
pub use font::FontFile;
pub use grid::PixelGrid;
pub use pack::{PackedBitmap, pack, packed_len};
pub use provider::GlyphProvider;
pub use raster::{RasterConfig, Rasterizer};
pub use service::{GlyphService, GlyphSet};
pub use size::CellSize;
pub use source::{GlyphBounds, GlyphMask, GlyphSource};
