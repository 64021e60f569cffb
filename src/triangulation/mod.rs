//! Triangulation of correspondence midpoints.
//!
//! The warp between the two maps is piecewise affine over a Delaunay
//! triangulation. The triangulation is computed once at load time,
//! over the *midpoints* of the correspondence pairs, so that a single
//! index triple names one triangle in each frame: the same indices
//! looked up in the reference array and in the robot array give the
//! two (generally different) shapes whose pairing defines the local
//! affine transform.

pub mod delaunay;

use crate::core::{Affine2, Bounds, Point2D, TriangleIndices};
use crate::error::{Error, Result};
use delaunay::{Subdivision, SEED_VERTEX_COUNT};

/// Margin added around the seed rectangle so that no midpoint sits
/// exactly on a seed edge.
const SEED_RECT_MARGIN: f64 = 16.0;

/// Minimum midpoint-frame triangle area (twice the signed area) for a
/// triangle to be kept. Collinear runs of midpoints along the hull can
/// produce zero-width slivers; they carry no queryable area.
const MIN_TRIANGLE_AREA: f64 = 1e-9;

/// The precomputed triangulation tables: index triples plus one affine
/// transform per triangle and direction.
#[derive(Clone, Debug)]
pub struct Triangulation {
    /// Triangles as index triples into the correspondence arrays, in
    /// the stable order the mesh emitted them.
    pub triangles: Vec<TriangleIndices>,
    /// Per-triangle robot-to-reference transforms, parallel to
    /// `triangles`.
    pub to_ref: Vec<Affine2>,
    /// Per-triangle reference-to-robot transforms, parallel to
    /// `triangles`.
    pub to_robot: Vec<Affine2>,
}

/// Triangulate the midpoints of the correspondence pairs and solve the
/// per-triangle transforms in both directions.
///
/// `seed_rect` is the rectangle the subdivision starts from (normally
/// the combined bounding box of both maps); it is widened here to
/// enclose stray midpoints, so inputs whose correspondence points fall
/// outside the declared map area still triangulate.
///
/// The caller guarantees `ref_points.len() == robot_points.len() > 0`
/// (the validator enforces it).
pub fn build(
    ref_points: &[Point2D],
    robot_points: &[Point2D],
    seed_rect: Bounds,
) -> Result<Triangulation> {
    let midpoints: Vec<Point2D> = ref_points
        .iter()
        .zip(robot_points.iter())
        .map(|(r, q)| r.midpoint(*q))
        .collect();

    let mut rect = seed_rect;
    for &m in &midpoints {
        rect.expand_to_include(m);
    }
    let mut subdiv = Subdivision::new(rect.expand(SEED_RECT_MARGIN));

    // Vertex index in the mesh -> index into the correspondence
    // arrays. Seed vertices have no owner. A midpoint equal to an
    // earlier one is not re-inserted; triangles reference the first
    // occurrence's index.
    let mut vertex_owner: Vec<usize> = vec![usize::MAX; SEED_VERTEX_COUNT];
    for (i, &m) in midpoints.iter().enumerate() {
        let vertex = subdiv.insert(m);
        if vertex == vertex_owner.len() {
            vertex_owner.push(i);
        }
    }

    let mut triangles = Vec::new();
    let mut slivers = 0usize;
    for [a, b, c] in subdiv.interior_triangles() {
        let area = (subdiv.vertex(b) - subdiv.vertex(a))
            .cross(subdiv.vertex(c) - subdiv.vertex(a));
        if area.abs() < MIN_TRIANGLE_AREA {
            slivers += 1;
            continue;
        }
        triangles.push(TriangleIndices::new(
            vertex_owner[a],
            vertex_owner[b],
            vertex_owner[c],
        ));
    }

    let mut to_ref = Vec::with_capacity(triangles.len());
    let mut to_robot = Vec::with_capacity(triangles.len());
    for t in &triangles {
        let r = t.resolve(ref_points);
        let q = t.resolve(robot_points);
        let degenerate = Error::DegenerateTriangle {
            a: t.a,
            b: t.b,
            c: t.c,
        };
        to_ref.push(Affine2::from_triangles(q, r).ok_or(degenerate)?);
        let degenerate = Error::DegenerateTriangle {
            a: t.a,
            b: t.b,
            c: t.c,
        };
        to_robot.push(Affine2::from_triangles(r, q).ok_or(degenerate)?);
    }

    log::debug!(
        "triangulated {} midpoints into {} triangles ({} slivers dropped)",
        midpoints.len(),
        triangles.len(),
        slivers,
    );

    Ok(Triangulation {
        triangles,
        to_ref,
        to_robot,
    })
}
