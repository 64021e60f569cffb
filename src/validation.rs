//! Structural validation of a candidate configuration.
//!
//! Validation is a single pass that reports the first failure it
//! finds. The checks run in a fixed order: correspondence lists,
//! list lengths, map sizes, scale, map overlap, image files. A
//! configuration that passes is safe to triangulate.

use crate::config::{MapConfig, MapInfo};
use crate::core::Point2D;
use crate::error::{MapSide, ValidationError};

/// Check every structural invariant on `config`.
///
/// Returns the first violation found. Image files, when declared, are
/// opened and decoded here; the decoded buffers are dropped before the
/// function returns.
pub fn validate(config: &MapConfig) -> Result<(), ValidationError> {
    if config.ref_map.corr_points.is_empty() {
        return Err(ValidationError::NoRefCorrPoints);
    }
    if config.robot_map.corr_points.is_empty() {
        return Err(ValidationError::NoRobotCorrPoints);
    }

    let ref_count = config.ref_map.corr_points.len();
    let robot_count = config.robot_map.corr_points.len();
    if ref_count != robot_count {
        return Err(ValidationError::CorrPointCountMismatch {
            ref_count,
            robot_count,
        });
    }

    let ref_size = require_size(&config.ref_map, MapSide::Ref)?;
    let robot_size = require_size(&config.robot_map, MapSide::Robot)?;

    if config.transform.scale.x == 0.0 || config.transform.scale.y == 0.0 {
        return Err(ValidationError::ZeroScale);
    }

    // The overlap test only applies the translation. A rotated or
    // scaled robot map is compared by its untransformed rectangle;
    // this matches the behaviour map producers already rely on.
    let t = config.transform.translation;
    if t.x > ref_size.x
        || t.y > ref_size.y
        || t.x + robot_size.x < 0.0
        || t.y + robot_size.y < 0.0
    {
        return Err(ValidationError::MapsDoNotOverlap);
    }

    check_image(&config.ref_map, ref_size, MapSide::Ref)?;
    check_image(&config.robot_map, robot_size, MapSide::Robot)?;

    Ok(())
}

fn require_size(map: &MapInfo, side: MapSide) -> Result<Point2D, ValidationError> {
    let size = map
        .size
        .ok_or(ValidationError::MissingSize { map: side })?;
    if size.x <= 0.0 || size.y <= 0.0 {
        return Err(ValidationError::NonPositiveSize {
            map: side,
            width: size.x,
            height: size.y,
        });
    }
    Ok(size)
}

fn check_image(map: &MapInfo, declared: Point2D, side: MapSide) -> Result<(), ValidationError> {
    let Some(path) = &map.image_file else {
        return Ok(());
    };

    let image = image::open(path).map_err(|_| ValidationError::ImageUnreadable {
        map: side,
        path: path.clone(),
    })?;

    if f64::from(image.width()) != declared.x || f64::from(image.height()) != declared.y {
        return Err(ValidationError::ImageSizeMismatch {
            map: side,
            actual_width: image.width(),
            actual_height: image.height(),
            expected_width: declared.x as u32,
            expected_height: declared.y as u32,
        });
    }

    Ok(())
}
