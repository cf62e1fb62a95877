// Copyright 2026 the Dotmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error returned by [`Feed`](crate::Feed) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedError {
    kind: FeedErrorKind,
    /// The submitted size text, for [`FeedErrorKind::InvalidSize`].
    value: String,
    /// The glyph error behind the failure, when there is one.
    glyphs: Option<dotmatrix::Error>,
}

impl FeedError {
    /// The category of this error.
    pub fn kind(&self) -> FeedErrorKind {
        self.kind
    }

    /// The rejected size as it was submitted.
    pub fn submitted(&self) -> &str {
        &self.value
    }

    pub(crate) fn invalid_size(value: &str) -> Self {
        Self {
            kind: FeedErrorKind::InvalidSize,
            value: value.to_owned(),
            glyphs: None,
        }
    }

    pub(crate) fn glyphs(err: dotmatrix::Error) -> Self {
        let kind = match err.kind() {
            dotmatrix::ErrorKind::InvalidSize => FeedErrorKind::InvalidSize,
            _ => FeedErrorKind::Glyphs,
        };
        Self {
            kind,
            value: err
                .requested_size()
                .map(|size| size.to_string())
                .unwrap_or_default(),
            glyphs: Some(err),
        }
    }
}

impl core::fmt::Display for FeedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match (&self.glyphs, self.kind) {
            (Some(err), _) => write!(f, "cannot build frame: {err}"),
            (None, FeedErrorKind::InvalidSize) => write!(
                f,
                "invalid size {:?}: expected a whole number in 1..={}",
                self.value,
                dotmatrix::CellSize::MAX
            ),
            (None, FeedErrorKind::Glyphs) => f.write_str("cannot build frame"),
        }
    }
}

impl core::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.glyphs
            .as_ref()
            .map(|err| err as &(dyn core::error::Error + 'static))
    }
}

/// The non-exhaustive category of a [`FeedError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum FeedErrorKind {
    /// A size was not a whole number within the accepted cell sizes.
    InvalidSize,

    /// The glyph service rejected the request.
    Glyphs,
}
