// Copyright 2026 the Dotmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packing pixel grids into the byte layout the display consumes.
//!
//! The layout is row-major. Each row is split into groups of eight columns
//! starting at column 0, and each group becomes one byte whose most significant
//! bit is the leftmost pixel. When the size is not a multiple of eight, the
//! unused low bits of the last byte in every row are zero.

use std::sync::Arc;

use crate::PixelGrid;

/// Number of bytes a packed `size`×`size` cell occupies.
///
/// Saturates at `usize::MAX` for sizes no buffer could hold.
#[inline]
pub const fn packed_len(size: u32) -> usize {
    let side = size as usize;
    side.saturating_mul(side.div_ceil(8))
}

/// The packed, immutable form of a [`PixelGrid`].
///
/// Cloning is cheap: the bytes are shared.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PackedBitmap {
    bytes: Arc<[u8]>,
}

impl PackedBitmap {
    /// The all-background bitmap for a cell of `size` pixels.
    ///
    /// # Panics
    ///
    /// Panics if [`packed_len`] bytes cannot be allocated.
    pub fn blank(size: u32) -> Self {
        Self {
            bytes: vec![0; packed_len(size)].into(),
        }
    }

    /// Wraps already packed bytes.
    ///
    /// Returns `None` if `bytes` does not have the length of a `size` cell.
    pub fn from_bytes(size: u32, bytes: &[u8]) -> Option<Self> {
        (bytes.len() == packed_len(size)).then(|| Self {
            bytes: bytes.into(),
        })
    }

    /// The packed bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of packed bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether there are no bytes, which only happens for a zero-sized cell.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Reconstructs the pixel grid for a cell of `size` pixels.
    ///
    /// Returns `None` if the byte length does not match `size`. The length is
    /// checked before anything is allocated, so a bogus `size` is cheap.
    pub fn unpack(&self, size: u32) -> Option<PixelGrid> {
        if self.bytes.len() != packed_len(size) {
            return None;
        }
        let mut grid = PixelGrid::new(size);
        let stride = (size as usize).div_ceil(8);
        if stride == 0 {
            return Some(grid);
        }
        for (row, bytes) in self.bytes.chunks_exact(stride).enumerate() {
            for col in 0..size as usize {
                let byte = bytes[col / 8];
                grid.set(row, col, byte & (0x80 >> (col % 8)) != 0);
            }
        }
        Some(grid)
    }
}

impl AsRef<[u8]> for PackedBitmap {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl core::fmt::Debug for PackedBitmap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PackedBitmap")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

/// Packs `grid` row-major, eight pixels per byte, most significant bit first.
pub fn pack(grid: &PixelGrid) -> PackedBitmap {
    let mut bytes = Vec::with_capacity(packed_len(grid.size()));
    if grid.size() > 0 {
        for row in grid.rows() {
            for group in row.chunks(8) {
                let byte = group
                    .iter()
                    .enumerate()
                    .filter(|(_, on)| **on)
                    .fold(0_u8, |byte, (offset, _)| byte | (0x80 >> offset));
                bytes.push(byte);
            }
        }
    }
    PackedBitmap {
        bytes: bytes.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn msb_is_the_leftmost_pixel() {
        let grid = PixelGrid::from_ascii(&[
            "#........", // 9 columns: two bytes per row
            "........#",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            "#######.#",
        ])
        .unwrap();
        let packed = pack(&grid);
        assert_eq!(packed.len(), 9 * 2);
        assert_eq!(&packed.as_bytes()[0..2], &[0x80, 0x00]);
        assert_eq!(&packed.as_bytes()[2..4], &[0x00, 0x80]);
        assert_eq!(&packed.as_bytes()[16..18], &[0xFE, 0x80]);
    }

    #[test]
    fn padding_bits_stay_clear() {
        let rows = vec!["#".repeat(5); 5];
        let packed = pack(&PixelGrid::from_ascii(&rows).unwrap());
        assert!(packed.as_bytes().iter().all(|&b| b == 0b1111_1000));
    }

    #[test]
    fn zero_size_packs_to_nothing() {
        let packed = pack(&PixelGrid::new(0));
        assert!(packed.is_empty());
        assert_eq!(packed.unpack(0), Some(PixelGrid::new(0)));
    }

    #[test]
    fn length_matches_size_for_every_valid_size() {
        for size in 1..=64 {
            let packed = pack(&PixelGrid::new(size));
            let expected = size as usize * (size as usize).div_ceil(8);
            assert_eq!(packed.len(), expected, "size {size}");
            assert_eq!(PackedBitmap::blank(size), packed);
        }
    }

    fn patterned(size: u32, on: impl Fn(usize, usize) -> bool) -> PixelGrid {
        let mut grid = PixelGrid::new(size);
        for row in 0..size as usize {
            for col in 0..size as usize {
                grid.set(row, col, on(row, col));
            }
        }
        grid
    }

    #[test]
    fn unpack_restores_every_pattern_at_every_size() {
        let patterns: [(&str, fn(usize, usize, usize) -> bool); 6] = [
            ("checkerboard", |_, r, c| (r + c) % 2 == 0),
            ("all on", |_, _, _| true),
            ("last column", |n, _, c| c == n - 1),
            ("first column", |_, _, c| c == 0),
            ("diagonal", |_, r, c| r == c),
            ("irregular", |_, r, c| (r * 7 + c * 3) % 5 == 0),
        ];
        for size in 1..=64_u32 {
            let n = size as usize;
            for (name, on) in patterns {
                let grid = patterned(size, |r, c| on(n, r, c));
                let packed = pack(&grid);
                assert_eq!(packed.len(), packed_len(size), "{name} at {size}");
                assert_eq!(packed.unpack(size), Some(grid), "{name} at {size}");
            }
        }
    }

    #[test]
    fn last_column_sets_only_its_own_bit() {
        for size in [1_u32, 7, 8, 9, 16, 17, 24] {
            let packed = pack(&patterned(size, |_, c| c == size as usize - 1));
            let stride = (size as usize).div_ceil(8);
            let bit = 0x80_u8 >> ((size as usize - 1) % 8);
            for row in packed.as_bytes().chunks_exact(stride) {
                let (last, rest) = row.split_last().unwrap();
                assert_eq!(*last, bit, "size {size}");
                assert!(rest.iter().all(|&b| b == 0), "size {size}");
            }
        }
    }

    #[test]
    fn unpack_rejects_mismatched_sizes() {
        let packed = pack(&patterned(13, |r, c| r == c));
        assert_eq!(packed.unpack(12), None);
        assert_eq!(PackedBitmap::blank(8).unpack(u32::MAX), None);
    }

    #[test]
    fn from_bytes_checks_the_length() {
        assert!(PackedBitmap::from_bytes(8, &[0xFF; 8]).is_some());
        assert!(PackedBitmap::from_bytes(9, &[0xFF; 9]).is_none());
    }
}
