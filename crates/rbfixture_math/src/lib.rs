//! Math types for fixture construction
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector, serialized as a `[x, y, z]` array
//! - [`GridShape`] / [`GridCoord`] - integer lattice and its row-major cells
//! - [`AxisMap`] / [`GridMapping`] - per-axis affine maps from lattice cells to positions

mod vec3;
pub mod affine;
pub mod grid;

pub use vec3::Vec3;
pub use affine::{AxisMap, GridMapping};
pub use grid::{GridCoord, GridShape};
