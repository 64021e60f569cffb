//! Error types for setu-map.
//!
//! Errors are split into two disjoint kinds:
//!
//! - **Input faults** come from the document being loaded: malformed
//!   YAML, inconsistent geometry, missing or wrong-sized image files.
//!   They abort the current `load` and leave the transformer empty.
//! - **Logic faults** are API contract violations by the caller:
//!   loading into a non-empty transformer, or querying an empty one.
//!
//! [`Error::fault`] reports the kind, so a wrapper can map the two to
//! distinct exit codes without matching on individual variants.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which of the two maps an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapSide {
    /// The reference map (`ref_map` in the document).
    Ref,
    /// The robot map (`robot_map` in the document).
    Robot,
}

impl fmt::Display for MapSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapSide::Ref => write!(f, "reference"),
            MapSide::Robot => write!(f, "robot"),
        }
    }
}

/// Structural validation failures. All are input faults.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("no reference map correspondence points provided")]
    NoRefCorrPoints,

    #[error("no robot map correspondence points provided")]
    NoRobotCorrPoints,

    #[error(
        "number of reference correspondence points ({ref_count}) and number of \
         robot correspondence points ({robot_count}) do not match"
    )]
    CorrPointCountMismatch { ref_count: usize, robot_count: usize },

    #[error("{map} map size is missing")]
    MissingSize { map: MapSide },

    #[error("{map} map size must be positive, got [{width}, {height}]")]
    NonPositiveSize { map: MapSide, width: f64, height: f64 },

    #[error("invalid scale value: 0")]
    ZeroScale,

    #[error("reference map and robot map do not overlap")]
    MapsDoNotOverlap,

    #[error("{map} map image file does not exist or is not accessible: {path}")]
    ImageUnreadable { map: MapSide, path: PathBuf },

    #[error(
        "{map} map image file dimensions ({actual_width}x{actual_height}) do \
         not match map dimensions ({expected_width}x{expected_height})"
    )]
    ImageSizeMismatch {
        map: MapSide,
        actual_width: u32,
        actual_height: u32,
        expected_width: u32,
        expected_height: u32,
    },
}

/// Fault classification for [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fault {
    /// The loaded document is bad; the transformer is left empty.
    Input,
    /// The caller broke the API contract; state is unchanged.
    Logic,
}

/// Errors produced by the transformer.
#[derive(Error, Debug)]
pub enum Error {
    /// The document is not valid YAML or does not match the schema.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The document parsed but fails a structural invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A triangle's correspondence points are collinear or repeated in
    /// one of the frames, so no affine transform exists for it.
    #[error("correspondence points {a}, {b} and {c} form a degenerate triangle")]
    DegenerateTriangle { a: usize, b: usize, c: usize },

    /// `load` was called on a transformer that already holds map data.
    #[error("transformer already contains map data; call reset() before loading")]
    AlreadyLoaded,

    /// A getter or transform query was called on an empty transformer.
    #[error("no map data loaded")]
    NotLoaded,
}

impl Error {
    /// Classify this error as an input fault or a logic fault.
    pub fn fault(&self) -> Fault {
        match self {
            Error::AlreadyLoaded | Error::NotLoaded => Fault::Logic,
            _ => Fault::Input,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
