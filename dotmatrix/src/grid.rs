// Copyright 2026 the Dotmatrix Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Square on/off pixel buffers.

/// A square grid of foreground/background pixels.
///
/// Pixels are stored row-major in one contiguous buffer and addressed by
/// `(row, column)`, both starting at the top-left corner.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PixelGrid {
    size: u32,
    pixels: Vec<bool>,
}

impl PixelGrid {
    /// Creates an all-background grid of `size`×`size` pixels.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` bytes cannot be allocated. Glyph cells are
    /// bounded by [`CellSize::MAX`](crate::CellSize::MAX), so only callers
    /// building grids by hand can hit this.
    pub fn new(size: u32) -> Self {
        let side = size as usize;
        Self {
            size,
            pixels: vec![false; side.saturating_mul(side)],
        }
    }

    /// Builds a grid from rows of text, where `#` is foreground and anything else
    /// is background.
    ///
    /// Returns `None` unless there are as many rows as every row has characters.
    pub fn from_ascii<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        let size = u32::try_from(rows.len()).ok()?;
        let mut grid = Self::new(size);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != rows.len() {
                return None;
            }
            for (col, ch) in line.chars().enumerate() {
                grid.set(row, col, ch == '#');
            }
        }
        Some(grid)
    }

    /// The side length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the pixel at `(row, col)`, or `false` outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.index(row, col).is_some_and(|i| self.pixels[i])
    }

    /// Sets the pixel at `(row, col)`. Writes outside the grid are ignored.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, on: bool) {
        if let Some(i) = self.index(row, col) {
            self.pixels[i] = on;
        }
    }

    /// Sets the pixel at signed coordinates, clipping anything outside the grid.
    #[inline]
    pub(crate) fn set_clipped(&mut self, row: i32, col: i32, on: bool) {
        if let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) {
            self.set(row, col, on);
        }
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> core::slice::ChunksExact<'_, bool> {
        self.pixels.chunks_exact(self.size.max(1) as usize)
    }

    /// Number of foreground pixels.
    pub fn count_on(&self) -> usize {
        self.pixels.iter().filter(|&&on| on).count()
    }

    /// Whether every pixel is background.
    pub fn is_blank(&self) -> bool {
        !self.pixels.contains(&true)
    }

    /// Renders the grid as text, one line per row, `#` for foreground and `.` otherwise.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.pixels.len() + self.size as usize);
        for row in self.rows() {
            out.extend(row.iter().map(|&on| if on { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        let side = self.size as usize;
        (row < side && col < side).then(|| row * side + col)
    }
}

impl core::fmt::Debug for PixelGrid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "PixelGrid({}x{})", self.size, self.size)?;
        f.write_str(&self.to_ascii())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set_stay_inside_the_grid() {
        let mut grid = PixelGrid::new(3);
        grid.set(1, 2, true);
        grid.set(3, 0, true);
        grid.set_clipped(-1, 0, true);
        assert!(grid.get(1, 2));
        assert!(!grid.get(3, 0));
        assert_eq!(grid.count_on(), 1);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn impossible_sizes_panic_instead_of_wrapping() {
        let _ = PixelGrid::new(u32::MAX);
    }

    #[test]
    fn ascii_round_trip() {
        let rows = ["#..", ".#.", "..#"];
        let grid = PixelGrid::from_ascii(&rows).unwrap();
        assert_eq!(grid.to_ascii(), "#..\n.#.\n..#\n");
        assert_eq!(grid.rows().len(), 3);
        assert!(PixelGrid::from_ascii(&["#.", "."]).is_none());
    }

    #[test]
    fn empty_grid_has_no_rows() {
        let grid = PixelGrid::new(0);
        assert_eq!(grid.rows().count(), 0);
        assert!(grid.is_blank());
    }
}
