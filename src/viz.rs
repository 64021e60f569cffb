//! SVG overlay rendering for manual inspection.
//!
//! Renders both maps into one picture in the reference frame: the map
//! rectangles, the correspondence points of both maps, the drift
//! between each pair, and the triangulation edges in both frames. The
//! robot-frame layer is placed with the global map transform so the
//! residual warp the triangulation corrects is visible as the gap
//! between the solid and dashed layers.

use svg::node::element::{Circle, Group, Line, Rectangle};
use svg::Document;

use crate::core::Point2D;
use crate::error::Result;
use crate::transformer::MapTransformer;

/// Colorblind-friendly color palette (Okabe-Ito).
mod colors {
    /// Reference map rectangle and triangle edges - teal
    pub const REF_LAYER: &str = "#009E73";
    /// Robot map rectangle and triangle edges - orange
    pub const ROBOT_LAYER: &str = "#E69F00";
    /// Reference correspondence points - blue
    pub const REF_POINTS: &str = "#0072B2";
    /// Robot correspondence points - sky blue
    pub const ROBOT_POINTS: &str = "#56B4E9";
    /// Drift vectors between paired points - vermillion
    pub const DRIFT_VECTOR: &str = "#D55E00";
}

/// Margin around the bounding box, in map pixels.
const MARGIN: f64 = 10.0;

/// Radius for correspondence point markers.
const POINT_RADIUS: f64 = 3.0;

/// Render the loaded maps and their triangulation as an SVG document.
///
/// Fails with a logic fault if the transformer is empty.
pub fn render_overlay(transformer: &MapTransformer) -> Result<Document> {
    let bb = transformer.bounding_box()?;
    let ref_size = transformer.ref_map_size()?;
    let robot_size = transformer.robot_map_size()?;
    let translation = transformer.robot_map_translation()?;
    let ref_points = transformer.ref_map_corr_points()?;
    let robot_points = transformer.robot_map_corr_points()?;
    let triangles = transformer.triangle_indices()?;

    // Robot-frame geometry is drawn through the global transform so
    // both layers share the reference frame.
    let scale = transformer.robot_map_scale()?;
    let rotation = transformer.robot_map_rotation()?;
    let global = crate::core::Affine2::from_pose(scale, rotation, translation);

    let mut rects = Group::new();
    rects = rects.add(map_rectangle(Point2D::ZERO, ref_size, colors::REF_LAYER));
    rects = rects.add(map_rectangle(translation, robot_size, colors::ROBOT_LAYER));

    let mut edges = Group::new();
    for t in triangles {
        let r = t.resolve(ref_points);
        let q = t.resolve(robot_points).map(|p| global.apply(p));
        for (a, b) in [(0, 1), (1, 2), (2, 0)] {
            edges = edges.add(edge(r[a], r[b], colors::REF_LAYER, false));
            edges = edges.add(edge(q[a], q[b], colors::ROBOT_LAYER, true));
        }
    }

    let mut markers = Group::new();
    for (r, q) in ref_points.iter().zip(robot_points.iter()) {
        let q_in_ref = global.apply(*q);
        markers = markers.add(edge(*r, q_in_ref, colors::DRIFT_VECTOR, false));
        markers = markers.add(point_marker(*r, colors::REF_POINTS));
        markers = markers.add(point_marker(q_in_ref, colors::ROBOT_POINTS));
    }

    let width = bb.width() + 2.0 * MARGIN;
    let height = bb.height() + 2.0 * MARGIN;
    let document = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (bb.min.x - MARGIN, bb.min.y - MARGIN, width, height))
        .add(rects)
        .add(edges)
        .add(markers);

    Ok(document)
}

fn map_rectangle(origin: Point2D, size: Point2D, color: &str) -> Rectangle {
    Rectangle::new()
        .set("x", origin.x)
        .set("y", origin.y)
        .set("width", size.x)
        .set("height", size.y)
        .set("fill", "none")
        .set("stroke", color)
        .set("stroke-width", 1.0)
        .set("stroke-opacity", 0.5)
}

fn edge(from: Point2D, to: Point2D, color: &str, dashed: bool) -> Line {
    let mut line = Line::new()
        .set("x1", from.x)
        .set("y1", from.y)
        .set("x2", to.x)
        .set("y2", to.y)
        .set("stroke", color)
        .set("stroke-width", 0.75);
    if dashed {
        line = line.set("stroke-dasharray", "3,3");
    }
    line
}

fn point_marker(at: Point2D, color: &str) -> Circle {
    Circle::new()
        .set("cx", at.x)
        .set("cy", at.y)
        .set("r", POINT_RADIUS)
        .set("fill", color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const DOC: &str = "
ref_map:
  name: plan
  size: [100, 100]
  correspondence_points:
    - [10, 10]
    - [90, 10]
    - [50, 90]
robot_map:
  name: scan
  size: [100, 100]
  correspondence_points:
    - [10, 12]
    - [90, 10]
    - [50, 88]
";

    #[test]
    fn test_render_contains_all_layers() {
        let transformer = MapTransformer::from_yaml(DOC).unwrap();
        let svg = render_overlay(&transformer).unwrap().to_string();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("viewBox"));
        assert!(svg.contains("<rect"));
        assert!(svg.contains("<line"));
        assert!(svg.contains("<circle"));
        // One triangle: three solid edges plus three dashed ones.
        assert!(svg.contains("stroke-dasharray"));
    }

    #[test]
    fn test_render_on_empty_is_logic_fault() {
        let transformer = MapTransformer::new();
        assert!(matches!(
            render_overlay(&transformer),
            Err(Error::NotLoaded)
        ));
    }
}
