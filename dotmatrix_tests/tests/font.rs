// Copyright 2026 the Dotmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering with a real font file, when one is available.

use dotmatrix::{
    CellSize, FontFile, GlyphProvider, GlyphService, GlyphSource, PackedBitmap, Rasterizer,
};

use crate::util::{lit_extent, test_font};

#[test]
fn font_opens_and_covers_ascii() {
    let Some(path) = test_font() else { return };
    let font = FontFile::open(&path).unwrap();
    assert!(font.covers('A', 16));
    let mask = font.render('A', 16).unwrap();
    assert!(!mask.bounds().is_empty());
    assert!(mask.bounds().y0 < 0, "'A' should sit above the baseline");
}

#[test]
fn font_glyphs_are_drawn_and_blank_is_blank() {
    let Some(path) = test_font() else { return };
    let service = GlyphService::new(Rasterizer::new(GlyphProvider::open(&path)));
    let glyphs = service.bitmaps("A W", 16).unwrap();
    assert_eq!(glyphs.get(' '), Some(&PackedBitmap::blank(16)));
    for ch in ['A', 'W'] {
        let grid = glyphs.get(ch).unwrap().unpack(16).unwrap();
        let (_, _, height, width) = lit_extent(&grid).unwrap();
        assert!(height <= 16 && width <= 16, "{ch:?}: {width}x{height}");
        assert!(grid.count_on() > 8, "{ch:?} is nearly empty:\n{grid:?}");
    }
}

#[test]
fn font_glyphs_are_roughly_centered() {
    let Some(path) = test_font() else { return };
    let rasterizer = Rasterizer::new(GlyphProvider::open(&path));
    let grid = rasterizer.rasterize('O', CellSize::new(32).unwrap());
    let (top, left, height, width) = lit_extent(&grid).unwrap();
    let bottom_gap = 32 - (top + height);
    let right_gap = 32 - (left + width);
    assert!(top.abs_diff(bottom_gap) <= 1, "{grid:?}");
    assert!(left.abs_diff(right_gap) <= 1, "{grid:?}");
}

#[test]
fn font_rendering_is_deterministic() {
    let Some(path) = test_font() else { return };
    let a = GlyphService::new(Rasterizer::new(GlyphProvider::open(&path)));
    let b = GlyphService::new(Rasterizer::new(GlyphProvider::open(&path)));
    assert_eq!(
        a.bitmaps("Dotmatrix 123", 24).unwrap(),
        b.bitmaps("Dotmatrix 123", 24).unwrap()
    );
}

#[test]
fn font_visible_whitespace_is_drawn() {
    let Some(path) = test_font() else { return };
    let font = FontFile::open(&path).unwrap();
    let ogham = '\u{1680}';
    if !font.covers(ogham, 16) {
        return;
    }
    let mask = font.render(ogham, 16).unwrap();
    assert!(!mask.bounds().is_empty(), "U+1680 should have ink");
    assert!(font.render(' ', 16).unwrap().bounds().is_empty());
}
