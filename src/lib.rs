//! # Setu-Map: Piecewise-Affine Map-to-Map Point Transformation
//!
//! A library for translating 2D points between the coordinate spaces
//! of two floor-plan style maps of the same physical space: typically
//! a map built by a mobile robot's sensors and a reference map such as
//! an architectural plan.
//!
//! The two maps cover the same territory but are not related by a
//! single rigid transform: local skew, stretch, drift and scan noise
//! make the offset between equivalent points vary across the map. The
//! warp is therefore interpolated from a sparse set of hand-picked
//! *correspondence points* (pixel coordinates known to mark the same
//! physical feature in both maps) as a piecewise-affine map over a
//! Delaunay triangulation of their midpoints.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use setu_map::{MapTransformer, Point2D};
//!
//! let yaml = std::fs::read_to_string("maps.yaml").unwrap();
//! let transformer = MapTransformer::from_yaml(&yaml).unwrap();
//!
//! let in_ref = transformer.to_ref(Point2D::new(341.0, 168.0)).unwrap();
//! let back = transformer.to_robot(in_ref).unwrap();
//! println!("({:.2}, {:.2}) -> ({:.2}, {:.2})", back.x, back.y, in_ref.x, in_ref.y);
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: geometric primitives ([`Point2D`], [`Bounds`],
//!   [`Affine2`], [`TriangleIndices`])
//! - [`document`]: YAML schema for the map description document
//! - [`config`]: the validated configuration snapshot
//! - [`validation`]: structural checks, including image cross-checks
//! - [`triangulation`]: Delaunay triangulation and per-triangle
//!   affine precomputation
//! - [`transformer`]: the query engine ([`MapTransformer`])
//! - [`viz`]: SVG overlay rendering for inspection
//!
//! ## Data Flow
//!
//! ```text
//!   ┌──────────────┐   ┌────────────┐   ┌────────────┐
//!   │ YAML document│──►│  validate  │──►│ triangulate│
//!   │  (document)  │   │ (images,   │   │ (midpoints,│
//!   └──────────────┘   │  geometry) │   │  affines)  │
//!                      └────────────┘   └─────┬──────┘
//!                                             │
//!                                             ▼
//!                                   ┌──────────────────┐
//!                                   │  MapTransformer  │──► to_ref / to_robot
//!                                   │  (read-only once │──► bounding_box
//!                                   │     loaded)      │──► getters
//!                                   └──────────────────┘
//! ```
//!
//! ## Accuracy
//!
//! Inside the convex hull of the correspondence midpoints, queries go
//! through the local triangle's affine transform and correspondence
//! points round-trip exactly. Outside the hull only the global map
//! transform applies, and no accuracy is claimed there.
//!
//! ## Concurrency
//!
//! All queries take `&self`; a loaded [`MapTransformer`] can be shared
//! across threads freely. `load` and `reset` take `&mut self`, so the
//! borrow checker enforces exclusive access for writers.

pub mod config;
pub mod core;
pub mod document;
pub mod error;
pub mod transformer;
pub mod triangulation;
pub mod validation;
pub mod viz;

// Re-export the main types at the crate root.
pub use crate::core::{Affine2, Bounds, Point2D, TriangleIndices};
pub use document::MapDocument;
pub use error::{Error, Fault, Result, ValidationError};
pub use transformer::MapTransformer;
