//! YAML document schema for map descriptions.
//!
//! A map description document has two top-level mappings, `ref_map`
//! and `robot_map`:
//!
//! ```yaml
//! ref_map:
//!   name: reference
//!   image_file: floor2.png        # optional
//!   size: [694, 386]
//!   correspondence_points:
//!     - [0, 138]
//!     - [262, 0]
//! robot_map:
//!   name: robot
//!   size: [694, 386]
//!   transform:                    # optional, identity when omitted
//!     scale: [1, 1]
//!     rotation: 0
//!     translation: [0, 0]
//!   correspondence_points:
//!     - [0, 138]
//!     - [262, 0]
//! ```
//!
//! Parsing is shape-only: missing sizes or empty correspondence lists
//! are deferred to the validator so that every structural problem is
//! reported with its own message. Documents using the legacy
//! `base_map` key instead of `ref_map` are rejected by the schema.

use serde::Deserialize;

use crate::error::Result;

/// A parsed map description document.
#[derive(Clone, Debug, Deserialize)]
pub struct MapDocument {
    /// The reference map (architectural plan or prior map).
    pub ref_map: MapSection,
    /// The robot map (sensor-built map).
    pub robot_map: MapSection,
}

/// One map's section of the document.
#[derive(Clone, Debug, Deserialize)]
pub struct MapSection {
    /// Human-readable map name.
    pub name: String,

    /// Path to the raster image of this map, if one exists.
    #[serde(default)]
    pub image_file: Option<String>,

    /// Declared map size `[w, h]` in pixels.
    #[serde(default)]
    pub size: Option<[f64; 2]>,

    /// Correspondence points `[[x, y], ...]`, index-matched with the
    /// other map's list.
    #[serde(default)]
    pub correspondence_points: Option<Vec<[f64; 2]>>,

    /// Global transform relating this map to the reference frame.
    /// Only meaningful on `robot_map`.
    #[serde(default)]
    pub transform: Option<TransformSection>,
}

/// The `transform` sub-mapping of `robot_map`.
#[derive(Clone, Debug, Deserialize)]
pub struct TransformSection {
    /// Per-axis scale factors.
    #[serde(default = "default_scale")]
    pub scale: [f64; 2],

    /// Rotation in radians, CCW positive.
    #[serde(default)]
    pub rotation: f64,

    /// Translation of the robot map origin in the reference frame.
    #[serde(default)]
    pub translation: [f64; 2],
}

fn default_scale() -> [f64; 2] {
    [1.0, 1.0]
}

impl Default for TransformSection {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            rotation: 0.0,
            translation: [0.0, 0.0],
        }
    }
}

impl MapDocument {
    /// Parse a document from a YAML string.
    pub fn from_yaml(doc: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(doc)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "
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

    #[test]
    fn test_parse_minimal() {
        let doc = MapDocument::from_yaml(MINIMAL).unwrap();
        assert_eq!(doc.ref_map.name, "ref");
        assert_eq!(doc.ref_map.size, Some([100.0, 100.0]));
        assert_eq!(doc.ref_map.image_file, None);
        assert_eq!(
            doc.robot_map.correspondence_points,
            Some(vec![[0.0, 0.0]])
        );
        assert!(doc.robot_map.transform.is_none());
    }

    #[test]
    fn test_parse_transform() {
        let yaml = "
ref_map:
  name: ref
  size: [100, 100]
  correspondence_points:
    - [30, 20]
robot_map:
  name: robot
  size: [80, 110]
  transform:
    scale: [2, 0.5]
    rotation: 1.5707963
    translation: [30, 20]
  correspondence_points:
    - [0, 0]
";
        let doc = MapDocument::from_yaml(yaml).unwrap();
        let t = doc.robot_map.transform.unwrap();
        assert_eq!(t.scale, [2.0, 0.5]);
        assert_eq!(t.translation, [30.0, 20.0]);
        assert!((t.rotation - 1.5707963).abs() < 1e-12);
    }

    #[test]
    fn test_parse_partial_transform_uses_defaults() {
        let yaml = "
ref_map:
  name: ref
  size: [100, 100]
  correspondence_points:
    - [30, 20]
robot_map:
  name: robot
  size: [80, 110]
  transform:
    translation: [30, 20]
  correspondence_points:
    - [0, 0]
";
        let doc = MapDocument::from_yaml(yaml).unwrap();
        let t = doc.robot_map.transform.unwrap();
        assert_eq!(t.scale, [1.0, 1.0]);
        assert_eq!(t.rotation, 0.0);
        assert_eq!(t.translation, [30.0, 20.0]);
    }

    #[test]
    fn test_null_correspondence_points_parse_as_none() {
        let yaml = "
ref_map:
  name: ref
  size: [100, 100]
  correspondence_points:
robot_map:
  name: robot
  size: [80, 110]
  correspondence_points:
    - [0, 0]
";
        let doc = MapDocument::from_yaml(yaml).unwrap();
        assert!(doc.ref_map.correspondence_points.is_none());
    }

    #[test]
    fn test_not_yaml_fails() {
        assert!(MapDocument::from_yaml("This is not a YAML document.").is_err());
    }

    #[test]
    fn test_legacy_base_map_key_rejected() {
        let yaml = "
base_map:
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
        assert!(MapDocument::from_yaml(yaml).is_err());
    }
}
