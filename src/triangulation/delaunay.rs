//! Incremental Delaunay subdivision.
//!
//! Bowyer–Watson insertion into a mesh seeded with an enclosing
//! rectangle. The rectangle's four corners stay in the mesh as seed
//! vertices; triangles touching them are filtered out when the real
//! triangles are read back. Insertion is strictly sequential, so a
//! given input sequence always produces the same mesh, including the
//! diagonal chosen for cocircular quadruples.

use crate::core::{Bounds, Point2D};

/// Number of seed vertices (the enclosing rectangle's corners).
pub const SEED_VERTEX_COUNT: usize = 4;

/// A triangle mesh under incremental Delaunay insertion.
#[derive(Clone, Debug)]
pub struct Subdivision {
    vertices: Vec<Point2D>,
    triangles: Vec<[usize; 3]>,
}

impl Subdivision {
    /// Create a subdivision covering `rect`.
    ///
    /// All points inserted later must lie inside `rect`.
    pub fn new(rect: Bounds) -> Self {
        let corners = rect.corners();
        Self {
            vertices: corners.to_vec(),
            triangles: vec![[0, 1, 2], [0, 2, 3]],
        }
    }

    /// Insert a point and restore the Delaunay property.
    ///
    /// Returns the vertex index assigned to the point. Inserting a
    /// point exactly equal to an existing vertex is a no-op that
    /// returns the existing vertex's index.
    pub fn insert(&mut self, p: Point2D) -> usize {
        if let Some(existing) = self.vertices.iter().position(|v| *v == p) {
            return existing;
        }

        // Collect the cavity: every triangle whose circumcircle
        // strictly contains p. The triangle containing p is always
        // among them, so the cavity is non-empty and star-shaped
        // around p.
        let mut cavity = Vec::new();
        for (i, t) in self.triangles.iter().enumerate() {
            let contains = circumcircle_contains(
                self.vertices[t[0]],
                self.vertices[t[1]],
                self.vertices[t[2]],
                p,
            );
            if contains {
                cavity.push(i);
            }
        }

        // The cavity boundary is the set of edges belonging to exactly
        // one cavity triangle.
        let mut boundary: Vec<(usize, usize)> = Vec::new();
        for &i in &cavity {
            let t = self.triangles[i];
            for (u, v) in [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])] {
                let edge = if u < v { (u, v) } else { (v, u) };
                if let Some(pos) = boundary.iter().position(|e| *e == edge) {
                    boundary.swap_remove(pos);
                } else {
                    boundary.push(edge);
                }
            }
        }

        for &i in cavity.iter().rev() {
            self.triangles.swap_remove(i);
        }

        let vertex = self.vertices.len();
        self.vertices.push(p);
        for (u, v) in boundary {
            self.triangles.push([u, v, vertex]);
        }
        vertex
    }

    /// Triangles whose vertices are all inserted points (no seed
    /// rectangle corners), in mesh order.
    pub fn interior_triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.triangles
            .iter()
            .filter(|t| t.iter().all(|&v| v >= SEED_VERTEX_COUNT))
            .copied()
    }

    /// Position of a vertex by index.
    pub fn vertex(&self, index: usize) -> Point2D {
        self.vertices[index]
    }
}

/// Strict in-circumcircle predicate, independent of triangle winding.
///
/// Returns false for degenerate (zero-area) triangles and for points
/// exactly on the circle, which is what makes cocircular tie-breaking
/// deterministic: the first diagonal built is never flipped by a
/// cocircular later insertion.
fn circumcircle_contains(a: Point2D, b: Point2D, c: Point2D, p: Point2D) -> bool {
    let orientation = (b - a).cross(c - a);
    if orientation == 0.0 {
        return false;
    }

    let (ax, ay) = (a.x - p.x, a.y - p.y);
    let (bx, by) = (b.x - p.x, b.y - p.y);
    let (cx, cy) = (c.x - p.x, c.y - p.y);

    let det = (ax * ax + ay * ay) * (bx * cy - cx * by)
        - (bx * bx + by * by) * (ax * cy - cx * ay)
        + (cx * cx + cy * cy) * (ax * by - bx * ay);

    if orientation > 0.0 {
        det > 0.0
    } else {
        det < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subdivision_over(points: &[Point2D]) -> Subdivision {
        let mut rect = Bounds::new(Point2D::ZERO, Point2D::new(100.0, 100.0));
        for &p in points {
            rect.expand_to_include(p);
        }
        let mut subdiv = Subdivision::new(rect.expand(10.0));
        for &p in points {
            subdiv.insert(p);
        }
        subdiv
    }

    #[test]
    fn test_single_point_yields_no_interior_triangles() {
        let subdiv = subdivision_over(&[Point2D::new(50.0, 50.0)]);
        assert_eq!(subdiv.interior_triangles().count(), 0);
    }

    #[test]
    fn test_square_yields_two_triangles() {
        let subdiv = subdivision_over(&[
            Point2D::new(20.0, 20.0),
            Point2D::new(80.0, 20.0),
            Point2D::new(80.0, 80.0),
            Point2D::new(20.0, 80.0),
        ]);
        assert_eq!(subdiv.interior_triangles().count(), 2);
    }

    #[test]
    fn test_delaunay_property() {
        // No inserted point may lie strictly inside the circumcircle
        // of any interior triangle.
        let points = [
            Point2D::new(15.0, 10.0),
            Point2D::new(25.0, 35.0),
            Point2D::new(58.0, 35.0),
            Point2D::new(25.0, 60.5),
            Point2D::new(55.0, 62.5),
            Point2D::new(25.0, 10.0),
            Point2D::new(60.0, 10.0),
            Point2D::new(15.0, 35.0),
            Point2D::new(84.0, 35.0),
        ];
        let subdiv = subdivision_over(&points);

        let triangles: Vec<_> = subdiv.interior_triangles().collect();
        assert!(!triangles.is_empty());
        for t in &triangles {
            for &p in &points {
                assert!(
                    !circumcircle_contains(
                        subdiv.vertex(t[0]),
                        subdiv.vertex(t[1]),
                        subdiv.vertex(t[2]),
                        p,
                    ),
                    "point {p:?} violates the Delaunay property of {t:?}"
                );
            }
        }
    }

    #[test]
    fn test_duplicate_insert_returns_existing_vertex() {
        let mut subdiv = Subdivision::new(Bounds::new(
            Point2D::new(-10.0, -10.0),
            Point2D::new(110.0, 110.0),
        ));
        let first = subdiv.insert(Point2D::new(40.0, 40.0));
        subdiv.insert(Point2D::new(60.0, 50.0));
        let again = subdiv.insert(Point2D::new(40.0, 40.0));
        assert_eq!(first, again);
    }

    #[test]
    fn test_deterministic_for_cocircular_points() {
        // Four cocircular points admit both diagonals; two identical
        // runs must pick the same one.
        let points = [
            Point2D::new(20.0, 20.0),
            Point2D::new(80.0, 20.0),
            Point2D::new(80.0, 80.0),
            Point2D::new(20.0, 80.0),
            Point2D::new(50.0, 10.0),
        ];
        let a: Vec<_> = subdivision_over(&points).interior_triangles().collect();
        let b: Vec<_> = subdivision_over(&points).interior_triangles().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_all_vertices_used() {
        let points = [
            Point2D::new(20.0, 20.0),
            Point2D::new(80.0, 25.0),
            Point2D::new(75.0, 80.0),
            Point2D::new(25.0, 75.0),
            Point2D::new(50.0, 50.0),
        ];
        let subdiv = subdivision_over(&points);
        let mut used = vec![false; points.len() + SEED_VERTEX_COUNT];
        for t in subdiv.interior_triangles() {
            for v in t {
                used[v] = true;
            }
        }
        for (i, _) in points.iter().enumerate() {
            assert!(used[i + SEED_VERTEX_COUNT], "vertex {i} unused");
        }
    }
}
