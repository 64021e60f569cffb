//! Core geometric types for setu-map.
//!
//! This module provides the fundamental types the transformer is built
//! from:
//! - [`Point2D`]: 2D point/vector in map pixels
//! - [`Bounds`]: axis-aligned bounding box
//! - [`Affine2`]: 2x3 affine transform
//! - [`TriangleIndices`]: index triple into the correspondence arrays
//!
//! Coordinates follow the raster convention of the input maps:
//! x grows to the right, y grows downward, units are map pixels.

pub mod affine;
pub mod bounds;
pub mod point;
pub mod triangle;

pub use affine::Affine2;
pub use bounds::Bounds;
pub use point::Point2D;
pub use triangle::TriangleIndices;
