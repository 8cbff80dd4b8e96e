//! Per-axis affine maps from lattice cells to world positions

use crate::grid::GridCoord;
use crate::Vec3;

/// `value = scale * i + offset` for one axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisMap {
    pub scale: f64,
    pub offset: f64,
}

impl AxisMap {
    /// Create a new axis map
    pub const fn new(scale: f64, offset: f64) -> Self {
        Self { scale, offset }
    }

    /// Map a lattice index to a coordinate
    ///
    /// Evaluated as a separate multiply then add (never fused) so results
    /// match the literal `scale * i + offset` bit for bit.
    #[inline]
    pub fn apply(&self, i: i64) -> f64 {
        self.scale * i as f64 + self.offset
    }

    pub fn is_finite(&self) -> bool {
        self.scale.is_finite() && self.offset.is_finite()
    }
}

/// Independent affine maps for the x, y and z axes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridMapping {
    pub x: AxisMap,
    pub y: AxisMap,
    pub z: AxisMap,
}

impl GridMapping {
    /// Create a mapping from per-axis maps
    pub const fn new(x: AxisMap, y: AxisMap, z: AxisMap) -> Self {
        Self { x, y, z }
    }

    /// Create a mapping from `[sx, sy, sz]` scales and `[ox, oy, oz]` offsets
    pub fn from_arrays(scale: [f64; 3], offset: [f64; 3]) -> Self {
        Self::new(
            AxisMap::new(scale[0], offset[0]),
            AxisMap::new(scale[1], offset[1]),
            AxisMap::new(scale[2], offset[2]),
        )
    }

    /// Map a lattice cell to a position
    #[inline]
    pub fn apply(&self, cell: GridCoord) -> Vec3 {
        Vec3::new(self.x.apply(cell.x), self.y.apply(cell.y), self.z.apply(cell.z))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}
