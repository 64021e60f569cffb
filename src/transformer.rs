//! The map transformer engine.
//!
//! [`MapTransformer`] translates points between the coordinate spaces
//! of two maps of the same physical space. The two maps are related by
//! a non-linear warp: the offset between equivalent points varies
//! across the map, so a single rigid transform is not enough. The warp
//! is interpolated from hand-picked correspondence points as a
//! piecewise-affine map over a Delaunay triangulation (see
//! [`crate::triangulation`]).
//!
//! # States
//!
//! A transformer is either *empty* or *loaded*. `load` is only legal
//! on an empty instance; `reset` returns a loaded instance to empty.
//! Getters and transform queries are only legal on a loaded instance.
//! Violations are logic faults ([`Error::AlreadyLoaded`],
//! [`Error::NotLoaded`]) and never change state.
//!
//! # Example
//!
//! ```rust,ignore
//! use setu_map::{MapTransformer, Point2D};
//!
//! let transformer = MapTransformer::from_yaml(&yaml_doc)?;
//! let in_ref = transformer.to_ref(Point2D::new(341.0, 168.0))?;
//! let back = transformer.to_robot(in_ref)?;
//! ```

use std::path::Path;

use crate::config::MapConfig;
use crate::core::triangle::contains_point;
use crate::core::{Affine2, Bounds, Point2D, TriangleIndices};
use crate::document::MapDocument;
use crate::error::{Error, MapSide, Result, ValidationError};
use crate::triangulation::{self, Triangulation};
use crate::validation;

/// Transforms points between a robot-built map and a reference map.
#[derive(Clone, Debug, Default)]
pub struct MapTransformer {
    loaded: Option<Loaded>,
}

/// Everything derived from a successfully loaded document.
#[derive(Clone, Debug)]
struct Loaded {
    config: MapConfig,
    ref_size: Point2D,
    robot_size: Point2D,
    triangulation: Triangulation,
    global_to_ref: Affine2,
    global_to_robot: Affine2,
}

impl MapTransformer {
    /// Create a new empty transformer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transformer and load the given YAML document into it.
    pub fn from_yaml(doc: &str) -> Result<Self> {
        let mut transformer = Self::new();
        transformer.load(doc)?;
        Ok(transformer)
    }

    /// Load map information from a YAML document.
    ///
    /// Only legal on an empty transformer; a loaded one reports
    /// [`Error::AlreadyLoaded`] and keeps its data. Loading is atomic:
    /// on any input fault the transformer stays empty.
    pub fn load(&mut self, doc: &str) -> Result<()> {
        if self.loaded.is_some() {
            return Err(Error::AlreadyLoaded);
        }

        let document = MapDocument::from_yaml(doc)?;
        let config = MapConfig::from(&document);
        validation::validate(&config)?;

        // Sizes are guaranteed present once validation passed.
        let ref_size = require_size(&config, MapSide::Ref)?;
        let robot_size = require_size(&config, MapSide::Robot)?;

        let seed_rect = Bounds::new(
            Point2D::ZERO,
            combined_max_corner(ref_size, robot_size, config.transform.translation),
        );
        let triangulation = triangulation::build(
            &config.ref_map.corr_points,
            &config.robot_map.corr_points,
            seed_rect,
        )?;

        let t = &config.transform;
        let global_to_ref = Affine2::from_pose(t.scale, t.rotation, t.translation);
        let global_to_robot = Affine2::inverse_pose(t.scale, t.rotation, t.translation);

        log::debug!(
            "loaded maps '{}' / '{}': {} correspondence points, {} triangles",
            config.ref_map.name,
            config.robot_map.name,
            config.ref_map.corr_points.len(),
            triangulation.triangles.len(),
        );

        self.loaded = Some(Loaded {
            config,
            ref_size,
            robot_size,
            triangulation,
            global_to_ref,
            global_to_robot,
        });
        Ok(())
    }

    /// Clear any loaded map information, returning to the empty state.
    pub fn reset(&mut self) {
        self.loaded = None;
    }

    /// Whether this transformer holds no map data.
    pub fn is_empty(&self) -> bool {
        self.loaded.is_none()
    }

    fn loaded(&self) -> Result<&Loaded> {
        self.loaded.as_ref().ok_or(Error::NotLoaded)
    }

    /// Name of the reference map.
    pub fn ref_map_name(&self) -> Result<&str> {
        Ok(&self.loaded()?.config.ref_map.name)
    }

    /// Path to the reference map's image file, if one was declared.
    pub fn ref_map_image_file(&self) -> Result<Option<&Path>> {
        Ok(self.loaded()?.config.ref_map.image_file.as_deref())
    }

    /// Declared size of the reference map, in pixels.
    pub fn ref_map_size(&self) -> Result<Point2D> {
        Ok(self.loaded()?.ref_size)
    }

    /// Name of the robot map.
    pub fn robot_map_name(&self) -> Result<&str> {
        Ok(&self.loaded()?.config.robot_map.name)
    }

    /// Path to the robot map's image file, if one was declared.
    pub fn robot_map_image_file(&self) -> Result<Option<&Path>> {
        Ok(self.loaded()?.config.robot_map.image_file.as_deref())
    }

    /// Declared size of the robot map, in pixels.
    pub fn robot_map_size(&self) -> Result<Point2D> {
        Ok(self.loaded()?.robot_size)
    }

    /// Per-axis scale of the robot map relative to the reference map.
    pub fn robot_map_scale(&self) -> Result<Point2D> {
        Ok(self.loaded()?.config.transform.scale)
    }

    /// Rotation of the robot map relative to the reference map, in
    /// radians.
    pub fn robot_map_rotation(&self) -> Result<f64> {
        Ok(self.loaded()?.config.transform.rotation)
    }

    /// Translation of the robot map origin in the reference frame.
    pub fn robot_map_translation(&self) -> Result<Point2D> {
        Ok(self.loaded()?.config.transform.translation)
    }

    /// Correspondence points in the reference map, index-matched with
    /// [`MapTransformer::robot_map_corr_points`].
    pub fn ref_map_corr_points(&self) -> Result<&[Point2D]> {
        Ok(&self.loaded()?.config.ref_map.corr_points)
    }

    /// Correspondence points in the robot map, index-matched with
    /// [`MapTransformer::ref_map_corr_points`].
    pub fn robot_map_corr_points(&self) -> Result<&[Point2D]> {
        Ok(&self.loaded()?.config.robot_map.corr_points)
    }

    /// The triangles of the correspondence triangulation, as index
    /// triples into the correspondence point lists.
    pub fn triangle_indices(&self) -> Result<&[TriangleIndices]> {
        Ok(&self.loaded()?.triangulation.triangles)
    }

    /// The pixel rectangle needed to hold both maps when rendered in
    /// the reference frame.
    ///
    /// One corner is at `(min(0, tx), min(0, ty))`; the opposite
    /// corner is the furthest extent of either map after translating
    /// the robot map.
    pub fn bounding_box(&self) -> Result<Bounds> {
        let loaded = self.loaded()?;
        let t = loaded.config.transform.translation;
        Ok(Bounds::new(
            Point2D::new(t.x.min(0.0), t.y.min(0.0)),
            combined_max_corner(loaded.ref_size, loaded.robot_size, t),
        ))
    }

    /// Transform a point in the robot map to its equivalent point in
    /// the reference map.
    ///
    /// A point equal to a robot correspondence point returns its
    /// paired reference point exactly. Otherwise the first triangle
    /// (in [`MapTransformer::triangle_indices`] order) containing the
    /// point supplies the transform; adjacent triangles agree on their
    /// shared edges, so the scan order is not observable there. A
    /// point outside every triangle is transformed by the global map
    /// transform alone, which is only as accurate as that transform.
    pub fn to_ref(&self, point: Point2D) -> Result<Point2D> {
        let loaded = self.loaded()?;
        Ok(transform_point(
            point,
            &loaded.config.robot_map.corr_points,
            &loaded.config.ref_map.corr_points,
            &loaded.triangulation.triangles,
            &loaded.triangulation.to_ref,
            &loaded.global_to_ref,
        ))
    }

    /// Transform a point in the reference map to its equivalent point
    /// in the robot map.
    ///
    /// The mirror of [`MapTransformer::to_ref`]. The fallback outside
    /// the triangulated area applies the exact algebraic inverse of
    /// the global map transform (translation removed first, then
    /// rotation and scale undone).
    pub fn to_robot(&self, point: Point2D) -> Result<Point2D> {
        let loaded = self.loaded()?;
        Ok(transform_point(
            point,
            &loaded.config.ref_map.corr_points,
            &loaded.config.robot_map.corr_points,
            &loaded.triangulation.triangles,
            &loaded.triangulation.to_robot,
            &loaded.global_to_robot,
        ))
    }
}

/// Shared query skeleton for both directions.
fn transform_point(
    point: Point2D,
    source: &[Point2D],
    paired: &[Point2D],
    triangles: &[TriangleIndices],
    transforms: &[Affine2],
    fallback: &Affine2,
) -> Point2D {
    // Correspondence points short-circuit to their pair, bit-exact.
    if let Some(index) = source.iter().position(|c| *c == point) {
        return paired[index];
    }

    for (triangle, affine) in triangles.iter().zip(transforms.iter()) {
        let [a, b, c] = triangle.resolve(source);
        if contains_point(point, a, b, c) {
            return affine.apply(point);
        }
    }

    fallback.apply(point)
}

fn require_size(config: &MapConfig, side: MapSide) -> Result<Point2D> {
    let size = match side {
        MapSide::Ref => config.ref_map.size,
        MapSide::Robot => config.robot_map.size,
    };
    size.ok_or_else(|| Error::Validation(ValidationError::MissingSize { map: side }))
}

fn combined_max_corner(ref_size: Point2D, robot_size: Point2D, translation: Point2D) -> Point2D {
    Point2D::new(
        ref_size.x.max(robot_size.x + translation.x),
        ref_size.y.max(robot_size.y + translation.y),
    )
}
