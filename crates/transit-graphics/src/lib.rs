//! Pure math/data for element transport geometry
//!
//! This crate contains the geometry primitives shared across the transit
//! workspace: points, sizes, instantaneous bounds rectangles, and the
//! layer transform issued to the host's animation driver.

mod geometry;
mod transform;

pub use geometry::*;
pub use transform::*;

pub mod prelude {
    pub use crate::geometry::{Bounds, Point, Size};
    pub use crate::transform::{LayerTransform, TransformOrigin};
}
