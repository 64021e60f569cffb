//! Shared fixtures for the integration tests.
//!
//! The two map pairs here mirror real usage: an "aligned" pair where
//! both maps share the same frame and differ only by local distortion
//! around two correspondence points, and an "offset" pair where the
//! robot map is translated inside a larger reference plan. Map images
//! are synthesised into a temp directory so the image cross-checks in
//! validation run against real files.

#![allow(dead_code)]

use tempfile::TempDir;

/// Temp directory holding generated map images.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Write a blank PNG of the given size and return its path.
    pub fn png(&self, name: &str, width: u32, height: u32) -> String {
        let path = self.dir.path().join(name);
        image::RgbImage::new(width, height)
            .save(&path)
            .expect("write test image");
        path.to_string_lossy().into_owned()
    }

    /// A path inside the fixture directory that does not exist.
    pub fn missing(&self, name: &str) -> String {
        self.dir.path().join(name).to_string_lossy().into_owned()
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

pub const ALIGNED_REF_POINTS: &str = "    - [0, 138]
    - [0, 241]
    - [262, 0]
    - [262, 384]
    - [433, 0]
    - [433, 384]
    - [692, 138]
    - [692, 241]
    - [262, 138]
    - [262, 241]
    - [433, 138]
    - [433, 241]";

pub const ALIGNED_ROBOT_POINTS: &str = "    - [0, 138]
    - [0, 241]
    - [262, 0]
    - [262, 384]
    - [433, 0]
    - [433, 384]
    - [692, 138]
    - [692, 241]
    - [262, 138]
    - [262, 241]
    - [433, 201]
    - [433, 304]";

pub const OFFSET_REF_POINTS: &str = "    - [30, 20]
    - [40, 50]
    - [70, 50]
    - [40, 70]
    - [70, 70]
    - [40, 20]
    - [70, 20]
    - [30, 50]
    - [99, 50]
    - [30, 70]
    - [99, 70]
    - [40, 99]
    - [70, 99]";

pub const OFFSET_ROBOT_POINTS: &str = "    - [0, 0]
    - [10, 20]
    - [46, 20]
    - [10, 51]
    - [40, 55]
    - [10, 0]
    - [50, 0]
    - [0, 20]
    - [69, 20]
    - [0, 50]
    - [69, 59]
    - [10, 79]
    - [34, 79]";

/// Both maps 694x386, identity global transform, local distortion in
/// pairs 10 and 11 only.
pub fn aligned_doc(fixture: &Fixture) -> String {
    let ref_image = fixture.png("aligned_map_ref.png", 694, 386);
    let robot_image = fixture.png("aligned_map_robot.png", 694, 386);
    format!(
        "ref_map:
  name: reference
  image_file: {ref_image}
  size: [694, 386]
  correspondence_points:
{ALIGNED_REF_POINTS}
robot_map:
  name: robot
  image_file: {robot_image}
  size: [694, 386]
  correspondence_points:
{ALIGNED_ROBOT_POINTS}
"
    )
}

/// Reference map 100x100, robot map 80x110 translated by (30, 20).
pub fn offset_doc(fixture: &Fixture) -> String {
    let ref_image = fixture.png("ref_map_100_100.png", 100, 100);
    let robot_image = fixture.png("robot_map_80_110.png", 80, 110);
    format!(
        "ref_map:
  name: reference
  size: [100, 100]
  image_file: {ref_image}
  correspondence_points:
{OFFSET_REF_POINTS}
robot_map:
  name: robot
  image_file: {robot_image}
  size: [80, 110]
  transform:
    scale: [1, 1]
    rotation: 0
    translation: [30, 20]
  correspondence_points:
{OFFSET_ROBOT_POINTS}
"
    )
}
