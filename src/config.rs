//! Validated configuration snapshot.
//!
//! [`MapConfig`] is the in-memory form of a parsed document: plain
//! fields, points converted to [`Point2D`], paths to [`PathBuf`]. It
//! is passive; the validator checks it and the transformer consumes
//! it. Sizes stay optional here because their presence is a validation
//! concern, not a parsing concern.

use std::path::PathBuf;

use crate::core::Point2D;
use crate::document::{MapDocument, MapSection};

/// Metadata for one map.
#[derive(Clone, Debug)]
pub struct MapInfo {
    /// Human-readable map name.
    pub name: String,
    /// Path to the map's raster image, if declared.
    pub image_file: Option<PathBuf>,
    /// Declared size `(w, h)` in pixels.
    pub size: Option<Point2D>,
    /// Correspondence points, index-matched with the other map's list.
    pub corr_points: Vec<Point2D>,
}

impl From<&MapSection> for MapInfo {
    fn from(section: &MapSection) -> Self {
        Self {
            name: section.name.clone(),
            image_file: section.image_file.as_ref().map(PathBuf::from),
            size: section.size.map(Point2D::from),
            corr_points: section
                .correspondence_points
                .iter()
                .flatten()
                .copied()
                .map(Point2D::from)
                .collect(),
        }
    }
}

/// The global scale/rotation/translation relating the robot map to the
/// reference frame.
#[derive(Clone, Copy, Debug)]
pub struct GlobalTransform {
    /// Per-axis scale factors.
    pub scale: Point2D,
    /// Rotation in radians, CCW positive.
    pub rotation: f64,
    /// Translation of the robot map origin in the reference frame.
    pub translation: Point2D,
}

impl Default for GlobalTransform {
    fn default() -> Self {
        Self {
            scale: Point2D::new(1.0, 1.0),
            rotation: 0.0,
            translation: Point2D::ZERO,
        }
    }
}

/// Immutable snapshot of everything the transformer needs from a
/// document.
#[derive(Clone, Debug)]
pub struct MapConfig {
    /// The reference map.
    pub ref_map: MapInfo,
    /// The robot map.
    pub robot_map: MapInfo,
    /// Global robot-to-reference transform.
    pub transform: GlobalTransform,
}

impl From<&MapDocument> for MapConfig {
    fn from(doc: &MapDocument) -> Self {
        let transform = doc
            .robot_map
            .transform
            .as_ref()
            .map(|t| GlobalTransform {
                scale: Point2D::from(t.scale),
                rotation: t.rotation,
                translation: Point2D::from(t.translation),
            })
            .unwrap_or_default();

        Self {
            ref_map: MapInfo::from(&doc.ref_map),
            robot_map: MapInfo::from(&doc.robot_map),
            transform,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MapDocument;

    #[test]
    fn test_from_document() {
        let yaml = "
ref_map:
  name: ref
  image_file: plan.png
  size: [100, 100]
  correspondence_points:
    - [30, 20]
    - [40, 50]
robot_map:
  name: robot
  size: [80, 110]
  transform:
    translation: [30, 20]
  correspondence_points:
    - [0, 0]
    - [10, 20]
";
        let doc = MapDocument::from_yaml(yaml).unwrap();
        let config = MapConfig::from(&doc);

        assert_eq!(config.ref_map.name, "ref");
        assert_eq!(config.ref_map.image_file, Some(PathBuf::from("plan.png")));
        assert_eq!(config.ref_map.size, Some(Point2D::new(100.0, 100.0)));
        assert_eq!(config.ref_map.corr_points.len(), 2);
        assert_eq!(config.robot_map.image_file, None);
        assert_eq!(config.robot_map.corr_points[1], Point2D::new(10.0, 20.0));

        assert_eq!(config.transform.scale, Point2D::new(1.0, 1.0));
        assert_eq!(config.transform.rotation, 0.0);
        assert_eq!(config.transform.translation, Point2D::new(30.0, 20.0));
    }

    #[test]
    fn test_missing_transform_is_identity() {
        let yaml = "
ref_map:
  name: ref
  size: [100, 100]
  correspondence_points:
    - [30, 20]
robot_map:
  name: robot
  size: [80, 110]
  correspondence_points:
    - [0, 0]
";
        let doc = MapDocument::from_yaml(yaml).unwrap();
        let config = MapConfig::from(&doc);
        assert_eq!(config.transform.scale, Point2D::new(1.0, 1.0));
        assert_eq!(config.transform.translation, Point2D::ZERO);
    }
}
