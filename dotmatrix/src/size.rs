// Copyright 2026 the Dotmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Error;

/// A validated cell dimension in pixels.
///
/// Cells are square, so a single number describes both width and height.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellSize(u32);

impl CellSize {
    /// The largest accepted cell size.
    ///
    /// Anything beyond this is a misuse rather than a display that exists.
    pub const MAX: u32 = 256;

    /// Validates `size`, rejecting zero and anything above [`Self::MAX`].
    pub fn new(size: u32) -> Result<Self, Error> {
        if size == 0 || size > Self::MAX {
            return Err(Error::invalid_size(i64::from(size)));
        }
        Ok(Self(size))
    }

    /// The size in pixels.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Number of packed bytes per row for this size.
    pub const fn bytes_per_row(self) -> usize {
        (self.0 as usize).div_ceil(8)
    }
}

impl TryFrom<u32> for CellSize {
    type Error = Error;

    fn try_from(size: u32) -> Result<Self, Error> {
        Self::new(size)
    }
}

impl TryFrom<i64> for CellSize {
    type Error = Error;

    fn try_from(size: i64) -> Result<Self, Error> {
        u32::try_from(size)
            .map_err(|_| Error::invalid_size(size))
            .and_then(Self::new)
    }
}

impl From<CellSize> for u32 {
    fn from(size: CellSize) -> Self {
        size.0
    }
}

impl core::fmt::Display for CellSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}px", self.0)
    }
}
