// Copyright 2026 the Dotmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Behavior without a usable font.

use std::sync::Arc;

use dotmatrix::{GlyphProvider, GlyphService, PackedBitmap, Rasterizer, packed_len};
use linebender_resource_handle::Blob;

use crate::util::{Rect, lit_extent};

#[test]
fn fallback_missing_font_still_serves_every_character() {
    let provider = GlyphProvider::open("/nonexistent/fonts/NotoSansTC-Regular.otf");
    assert!(!provider.has_primary());
    let service = GlyphService::new(Rasterizer::new(provider));

    let glyphs = service.bitmaps("abc ㄅ ㄆ", 24).unwrap();
    assert_eq!(glyphs.len(), 6);
    for (ch, bitmap) in &glyphs {
        assert_eq!(bitmap.len(), packed_len(24), "{ch:?}");
    }
    assert_eq!(glyphs.get('ㄅ'), Some(&PackedBitmap::blank(24)));
    assert_ne!(glyphs.get('a'), Some(&PackedBitmap::blank(24)));
}

#[test]
fn fallback_garbage_font_is_not_used() {
    let blob = Blob::new(Arc::new(vec![0_u8; 64]));
    assert!(dotmatrix::FontFile::from_blob("zeros", blob, 0).is_err());
}

#[test]
fn fallback_fills_gaps_in_primary() {
    let provider = GlyphProvider::new(Rect {
        chars: "#",
        width: 1.0,
        height: 1.0,
    });
    let service = GlyphService::new(Rasterizer::new(provider));
    let glyphs = service.bitmaps("#A", 8).unwrap();

    let block = glyphs.get('#').unwrap().unpack(8).unwrap();
    assert_eq!(block.count_on(), 64);

    // The built-in 'A' is five pixels wide at 8px.
    let letter = glyphs.get('A').unwrap().unpack(8).unwrap();
    assert_eq!(lit_extent(&letter).map(|(_, _, _, w)| w), Some(5));
}
