//! Integer lattice enumeration
//!
//! A [`GridShape`] describes a `num_x × num_y × num_z` block of cells.
//! Cells are visited in row-major order with `x` outermost and `z` innermost.

/// One cell of a lattice
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCoord {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }
}

/// Dimensions of a lattice
///
/// Dimensions are signed so that a negative count read from configuration is
/// representable and can be reported, rather than wrapping or being clamped.
/// A shape with any non-positive dimension has no cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridShape {
    pub num_x: i64,
    pub num_y: i64,
    pub num_z: i64,
}

impl GridShape {
    /// Create a new grid shape
    pub const fn new(num_x: i64, num_y: i64, num_z: i64) -> Self {
        Self { num_x, num_y, num_z }
    }

    /// Dimensions as `(axis name, count)` pairs
    pub fn axes(&self) -> [(&'static str, i64); 3] {
        [("x", self.num_x), ("y", self.num_y), ("z", self.num_z)]
    }

    /// Number of cells the shape contains, or `None` if it overflows `usize`
    pub fn checked_cell_count(&self) -> Option<usize> {
        self.axes()
            .iter()
            .map(|&(_, n)| usize::try_from(n).unwrap_or(0))
            .try_fold(1usize, |acc, n| acc.checked_mul(n))
    }

    /// Number of cells the shape contains, saturating at `usize::MAX`
    pub fn cell_count(&self) -> usize {
        self.checked_cell_count().unwrap_or(usize::MAX)
    }

    /// Iterate all cells, `x` outermost, then `y`, then `z`
    pub fn cells(&self) -> impl Iterator<Item = GridCoord> {
        let (ny, nz) = (self.num_y, self.num_z);
        (0..self.num_x).flat_map(move |x| {
            (0..ny).flat_map(move |y| (0..nz).map(move |z| GridCoord::new(x, y, z)))
        })
    }
}
