// Copyright 2026 the Dotmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::{Path, PathBuf};

/// Error type for glyph loading, rendering and request validation.
///
/// Only [`ErrorKind::InvalidSize`] ever reaches callers of
/// [`GlyphService`](crate::GlyphService). The other kinds are produced by the
/// lower level entry points and recovered (and logged) on the way up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    detail: Detail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Detail {
    Size(i64),
    Font {
        path: Option<PathBuf>,
        reason: String,
    },
    Glyph {
        ch: char,
        size: u32,
    },
}

impl Error {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The rejected size, for [`ErrorKind::InvalidSize`].
    pub fn requested_size(&self) -> Option<i64> {
        match self.detail {
            Detail::Size(size) => Some(size),
            _ => None,
        }
    }

    /// The font path, for [`ErrorKind::FontUnavailable`] errors raised while opening a file.
    pub fn path(&self) -> Option<&Path> {
        match &self.detail {
            Detail::Font { path, .. } => path.as_deref(),
            _ => None,
        }
    }

    /// The character, for [`ErrorKind::GlyphRenderFailure`].
    pub fn character(&self) -> Option<char> {
        match self.detail {
            Detail::Glyph { ch, .. } => Some(ch),
            _ => None,
        }
    }

    /// The underlying cause of a [`ErrorKind::FontUnavailable`] error.
    pub(crate) fn reason(&self) -> String {
        match &self.detail {
            Detail::Font { reason, .. } => reason.clone(),
            _ => self.to_string(),
        }
    }

    pub(crate) fn invalid_size(size: i64) -> Self {
        Self {
            kind: ErrorKind::InvalidSize,
            detail: Detail::Size(size),
        }
    }

    pub(crate) fn font_unavailable(path: Option<&Path>, reason: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::FontUnavailable,
            detail: Detail::Font {
                path: path.map(Path::to_path_buf),
                reason: reason.into(),
            },
        }
    }

    pub(crate) fn glyph_render_failure(ch: char, size: u32) -> Self {
        Self {
            kind: ErrorKind::GlyphRenderFailure,
            detail: Detail::Glyph { ch, size },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.detail {
            Detail::Size(size) => write!(
                f,
                "invalid cell size {size}: expected 1..={}",
                crate::CellSize::MAX
            ),
            Detail::Font {
                path: Some(path),
                reason,
            } => write!(f, "font {} unavailable: {reason}", path.display()),
            Detail::Font { path: None, reason } => write!(f, "font unavailable: {reason}"),
            Detail::Glyph { ch, size } => {
                write!(f, "no source could render {ch:?} (U+{:04X}) at {size}px", *ch as u32)
            }
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The requested cell size was zero, negative or larger than [`CellSize::MAX`](crate::CellSize::MAX).
    InvalidSize,

    /// A font file could not be read or parsed.
    FontUnavailable,

    /// No glyph source could render a particular character.
    GlyphRenderFailure,
}
