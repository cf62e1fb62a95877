// Copyright 2026 the Dotmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyphs from TrueType and OpenType font files.

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use linebender_resource_handle::Blob;
use skrifa::MetadataProvider;
use swash::scale::image::Image;
use swash::scale::{Render, ScaleContext, Source};
use swash::zeno::Format;

use crate::{Error, GlyphMask, GlyphSource};

/// A font file used as the primary glyph source.
///
/// Character lookup goes through `skrifa`; outlines are scaled and scan converted
/// by `swash` without hinting, so the same font always produces the same masks.
pub struct FontFile {
    name: String,
    data: Blob<u8>,
    index: u32,
    /// Scratch space for the scaler, reused across renders.
    scale_cx: Mutex<ScaleContext>,
}

impl FontFile {
    /// Reads and validates the font at `path`, using the first face of a collection.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes =
            std::fs::read(path).map_err(|err| Error::font_unavailable(Some(path), err.to_string()))?;
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        Self::from_blob(name, Blob::new(Arc::new(bytes)), 0)
            .map_err(|err| Error::font_unavailable(Some(path), err.reason()))
    }

    /// Uses already loaded font data, selecting face `index` of a collection.
    pub fn from_blob(name: impl Into<String>, data: Blob<u8>, index: u32) -> Result<Self, Error> {
        let font = skrifa::FontRef::from_index(data.data(), index)
            .map_err(|err| Error::font_unavailable(None, err.to_string()))?;
        if font.charmap().mappings().next().is_none() {
            return Err(Error::font_unavailable(None, "font has no character map"));
        }
        if swash::FontRef::from_index(data.data(), index as usize).is_none() {
            return Err(Error::font_unavailable(None, "font cannot be scaled"));
        }
        Ok(Self {
            name: name.into(),
            data,
            index,
            scale_cx: Mutex::new(ScaleContext::new()),
        })
    }

    fn glyph_id(&self, ch: char) -> Option<u16> {
        let font = skrifa::FontRef::from_index(self.data.data(), self.index).ok()?;
        let gid = font.charmap().map(ch)?;
        // Glyph 0 is .notdef, which is a box rather than the character.
        match u16::try_from(gid.to_u32()) {
            Ok(0) | Err(_) => None,
            Ok(gid) => Some(gid),
        }
    }
}

impl GlyphSource for FontFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn covers(&self, ch: char, _size: u32) -> bool {
        self.glyph_id(ch).is_some()
    }

    fn render(&self, ch: char, size: u32) -> Option<GlyphMask> {
        let gid = self.glyph_id(ch)?;
        let font = swash::FontRef::from_index(self.data.data(), self.index as usize)?;
        let mut scale_cx = self.scale_cx.lock().unwrap_or_else(PoisonError::into_inner);
        let mut scaler = scale_cx.builder(font).size(size as f32).hint(false).build();
        let image = Render::new(&[Source::Outline])
            .format(Format::Alpha)
            .render(&mut scaler, gid);
        to_mask(ch, image.as_ref())
    }
}

/// Converts a scaler image into a mask.
///
/// Outline-free glyphs produce no image at all; for whitespace that simply
/// means a blank glyph.
fn to_mask(ch: char, image: Option<&Image>) -> Option<GlyphMask> {
    let Some(image) = image else {
        return ch.is_whitespace().then(GlyphMask::empty);
    };
    // Swash reports `top` upward from the baseline.
    GlyphMask::from_coverage(
        image.placement.left,
        -image.placement.top,
        image.placement.width,
        image.placement.height,
        &image.data,
    )
}

impl core::fmt::Debug for FontFile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FontFile")
            .field("name", &self.name)
            .field("index", &self.index)
            .field("len", &self.data.data().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn missing_file_is_unavailable() {
        let err = FontFile::open("/nonexistent/dotmatrix/font.ttf").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FontUnavailable);
        assert_eq!(err.path(), Some(Path::new("/nonexistent/dotmatrix/font.ttf")));
    }

    fn image(left: i32, top: i32, width: u32, height: u32, data: Vec<u8>) -> Image {
        let mut image = Image::new();
        image.placement.left = left;
        image.placement.top = top;
        image.placement.width = width;
        image.placement.height = height;
        image.data = data;
        image
    }

    #[test]
    fn missing_image_is_blank_only_for_whitespace() {
        assert_eq!(to_mask(' ', None), Some(GlyphMask::empty()));
        assert_eq!(to_mask('\u{3000}', None), Some(GlyphMask::empty()));
        assert_eq!(to_mask('A', None), None);
    }

    #[test]
    fn visible_whitespace_keeps_its_ink() {
        // U+1680 OGHAM SPACE MARK is whitespace but draws a horizontal stroke.
        let stroke = image(0, 3, 4, 1, vec![255; 4]);
        let mask = to_mask('\u{1680}', Some(&stroke)).unwrap();
        assert_eq!(mask.bounds().width, 4);
        assert_eq!(mask.bounds().y0, -3);
    }

    #[test]
    fn garbage_is_unavailable() {
        let blob = Blob::new(Arc::new(b"definitely not a font".to_vec()));
        let err = FontFile::from_blob("garbage", blob, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FontUnavailable);
        assert_eq!(err.path(), None);
    }
}
