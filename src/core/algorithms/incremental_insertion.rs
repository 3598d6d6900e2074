//! Incremental Delaunay insertion by cavity digging.
//!
//! Inserting a point `u` that conflicts with triangle `(v, w, x)`:
//!
//! 1. Delete `(v, w, x)`.
//! 2. Dig outward across each of its edges, `dig(u, v, w)`, `dig(u, w, x)`,
//!    `dig(u, x, v)`.
//! 3. Close any new boundary edges with ghost triangles.
//!
//! `dig(u, v, w)` looks at the triangle `(w, v, x)` on the far side of edge
//! `v → w`. If it conflicts with `u` it is deleted and digging continues
//! across its two outer edges, `(v, x)` then `(x, w)`. Otherwise, or if there
//! is no triangle there, the edge is part of the cavity boundary and the new
//! triangle `(u, v, w)` is created. The cavity is a star-shaped disk whose
//! dual is a tree, so every triangle is visited once and the result is the
//! Bowyer-Watson retriangulation built in a single pass.
//!
//! The recursion is expressed with an explicit stack, which pops edges in
//! exactly the order the recursive formulation would visit them.

use crate::core::algorithms::locate::{LocateError, triangle_conflicts};
use crate::core::boundary::insert_ghost_triangles;
use crate::core::collections::{DIG_STACK_CAPACITY, SmallBuffer};
use crate::core::triangle::Triangle;
use crate::core::triangulation_data_structure::{Tds, TdsError, TriangulationValidationError};
use crate::core::vertex::Vertex;
use crate::geometry::kernel::Kernel;
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateValidationError;
use smallvec::smallvec;
use std::ops::AddAssign;

/// Error during incremental insertion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InsertionError {
    /// A store mutation failed; the mesh invariants were already broken
    #[error("Triangulation data structure error: {0}")]
    Tds(#[from] TdsError),

    /// Point location failed
    #[error("Location error: {0}")]
    Location(#[from] LocateError),

    /// The point is already a vertex of the mesh
    #[error("Duplicate vertex: {point} is already in the triangulation")]
    DuplicateVertex {
        /// The rejected point, formatted
        point: String,
    },

    /// The point has a NaN or infinite coordinate
    #[error("Invalid vertex: {0}")]
    InvalidVertex(#[from] CoordinateValidationError),

    /// Post-insertion validation failed
    #[error("Validation failed after insertion: {0}")]
    Validation(#[from] TriangulationValidationError),
}

/// Triangle counts for one or more insertions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertionStatistics {
    /// Triangles deleted because they conflicted with the new vertex.
    pub triangles_removed: usize,
    /// Triangles created around the new vertex.
    pub triangles_created: usize,
    /// Ghost triangles added to close new boundary edges.
    pub ghost_triangles_added: usize,
}

impl AddAssign for InsertionStatistics {
    fn add_assign(&mut self, rhs: Self) {
        self.triangles_removed += rhs.triangles_removed;
        self.triangles_created += rhs.triangles_created;
        self.ghost_triangles_added += rhs.ghost_triangles_added;
    }
}

/// Expands the cavity of `u` across the edge `v → w`.
///
/// `(u, v, w)` is the triangle that will be created if the cavity stops at
/// this edge, so `v → w` must have been freed by deleting the triangle on
/// `u`'s side before the call.
///
/// # Errors
///
/// Returns a [`TdsError`] if the store rejects a mutation. This cannot happen
/// on a consistent mesh and indicates broken invariants.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::algorithms::incremental_insertion::dig;
/// use delaunay2d::core::triangulation_data_structure::Tds;
/// use delaunay2d::core::vertex::Vertex;
/// use delaunay2d::geometry::kernel::FastKernel;
/// use delaunay2d::geometry::point::Point;
///
/// let kernel = FastKernel::<f64>::new();
/// let (v, w) = (Vertex::from(Point::new([0.0, 0.0])), Vertex::from(Point::new([1.0, 0.0])));
/// let mut tds = Tds::new();
///
/// // Nothing across v → w: the triangle (u, v, w) is created directly
/// let u = Point::new([0.5, -1.0]);
/// let stats = dig(&mut tds, &kernel, &u, v, w).unwrap();
/// assert_eq!(stats.triangles_created, 1);
/// assert_eq!(tds.adjacent(v, w), Some(Vertex::from(u)));
/// ```
pub fn dig<K>(
    tds: &mut Tds<K::Scalar>,
    kernel: &K,
    u: &Point<K::Scalar>,
    v: Vertex<K::Scalar>,
    w: Vertex<K::Scalar>,
) -> Result<InsertionStatistics, TdsError>
where
    K: Kernel,
{
    let apex = Vertex::Real(*u);
    let mut stats = InsertionStatistics::default();
    let mut stack: SmallBuffer<(Vertex<K::Scalar>, Vertex<K::Scalar>), DIG_STACK_CAPACITY> =
        smallvec![(v, w)];

    while let Some((v, w)) = stack.pop() {
        let conflicting = tds
            .adjacent(w, v)
            .filter(|&x| triangle_conflicts(kernel, &Triangle::new(w, v, x), u));

        if let Some(x) = conflicting {
            tracing::trace!(%v, %w, %x, "dig: removing conflicting triangle");
            tds.delete_triangle(w, v, x)?;
            stats.triangles_removed += 1;
            // Popped (v, x) first, then (x, w)
            stack.push((x, w));
            stack.push((v, x));
        } else {
            tracing::trace!(%v, %w, "dig: cavity boundary");
            tds.add_triangle(apex, v, w)?;
            stats.triangles_created += 1;
        }
    }

    Ok(stats)
}

/// Inserts `u` into the mesh given a triangle whose open circumdisk
/// contains it (see [`locate`](crate::core::algorithms::locate::locate)).
///
/// Afterwards every triangle incident to `u` is Delaunay with respect to
/// the rest of the mesh, and the boundary is closed by ghost triangles.
///
/// # Errors
///
/// Returns [`InsertionError::Tds`] if `conflict` is not a stored triangle or
/// the store rejects a mutation during digging.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::algorithms::incremental_insertion::insert_vertex;
/// use delaunay2d::core::algorithms::locate::locate;
/// use delaunay2d::core::boundary::insert_ghost_triangles;
/// use delaunay2d::core::triangulation_data_structure::Tds;
/// use delaunay2d::geometry::kernel::FastKernel;
/// use delaunay2d::geometry::point::Point;
///
/// let kernel = FastKernel::<f64>::new();
/// let mut tds = Tds::seeded(
///     Point::new([0.0, 0.0]).into(),
///     Point::new([4.0, 0.0]).into(),
///     Point::new([0.0, 4.0]).into(),
/// )
/// .unwrap();
/// insert_ghost_triangles(&mut tds).unwrap();
///
/// let u = Point::new([1.0, 1.0]);
/// let conflict = locate(&tds, &kernel, &u).unwrap();
/// let stats = insert_vertex(&mut tds, &kernel, &u, &conflict).unwrap();
///
/// assert_eq!(stats.triangles_removed, 1);
/// assert_eq!(stats.triangles_created, 3);
/// assert_eq!(tds.number_of_real_triangles(), 3);
/// ```
pub fn insert_vertex<K>(
    tds: &mut Tds<K::Scalar>,
    kernel: &K,
    u: &Point<K::Scalar>,
    conflict: &Triangle<K::Scalar>,
) -> Result<InsertionStatistics, InsertionError>
where
    K: Kernel,
{
    let [v, w, x] = *conflict.vertices();
    tds.delete_triangle(v, w, x)?;

    let mut stats = InsertionStatistics {
        triangles_removed: 1,
        ..InsertionStatistics::default()
    };
    for (a, b) in [(v, w), (w, x), (x, v)] {
        stats += dig(tds, kernel, u, a, b)?;
    }
    stats.ghost_triangles_added = insert_ghost_triangles(tds)?;

    tracing::debug!(
        point = %u,
        removed = stats.triangles_removed,
        created = stats.triangles_created,
        ghosts = stats.ghost_triangles_added,
        "inserted vertex"
    );
    Ok(stats)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::algorithms::locate::locate;
    use crate::core::util::delaunay_validation::{validate_delaunay, validate_topology};
    use crate::geometry::kernel::{FastKernel, RobustKernel};
    use crate::geometry::util::generate_random_points_seeded;

    fn p(x: f64, y: f64) -> Point {
        Point::new([x, y])
    }

    fn closed_seed(a: Point, b: Point, c: Point) -> Tds {
        let mut tds = Tds::seeded(a.into(), b.into(), c.into()).unwrap();
        insert_ghost_triangles(&mut tds).unwrap();
        tds
    }

    fn insert<K: Kernel<Scalar = f64>>(tds: &mut Tds, kernel: &K, u: Point) -> InsertionStatistics {
        let conflict = locate(tds, kernel, &u).unwrap();
        insert_vertex(tds, kernel, &u, &conflict).unwrap()
    }

    // =============================================================================
    // DIG
    // =============================================================================

    #[test]
    fn dig_without_neighbour_adds_triangle() {
        let kernel = FastKernel::<f64>::new();
        let mut tds = Tds::new();
        let (v, w) = (Vertex::Real(p(0.0, 0.0)), Vertex::Real(p(1.0, 0.0)));
        let u = p(0.5, 1.0);

        let stats = dig(&mut tds, &kernel, &u, v, w).unwrap();
        assert_eq!(
            stats,
            InsertionStatistics {
                triangles_removed: 0,
                triangles_created: 1,
                ghost_triangles_added: 0,
            }
        );
        assert_eq!(tds.adjacent(v, w), Some(Vertex::Real(u)));
    }

    #[test]
    fn dig_removes_conflicting_neighbour() {
        let kernel = FastKernel::<f64>::new();
        let (v, w, x) = (p(0.0, 0.0), p(2.0, 0.0), p(1.0, -0.2));
        let mut tds = Tds::seeded(w.into(), v.into(), x.into()).unwrap();

        // u is well inside the circumcircle of the flat triangle (w, v, x)
        let u = p(1.0, 0.5);
        let stats = dig(&mut tds, &kernel, &u, v.into(), w.into()).unwrap();
        assert_eq!(stats.triangles_removed, 1);
        assert_eq!(stats.triangles_created, 2);
        assert_eq!(tds.number_of_triangles(), 2);
        assert_eq!(tds.adjacent(v.into(), x.into()), Some(u.into()));
        assert_eq!(tds.adjacent(x.into(), w.into()), Some(u.into()));
    }

    #[test]
    fn dig_keeps_non_conflicting_neighbour() {
        let kernel = FastKernel::<f64>::new();
        let (v, w, x) = (p(0.0, 0.0), p(2.0, 0.0), p(1.0, -5.0));
        let mut tds = Tds::seeded(w.into(), v.into(), x.into()).unwrap();

        let u = p(1.0, 5.0);
        let stats = dig(&mut tds, &kernel, &u, v.into(), w.into()).unwrap();
        assert_eq!(stats.triangles_removed, 0);
        assert_eq!(stats.triangles_created, 1);
        assert_eq!(tds.number_of_triangles(), 2);
    }

    #[test]
    fn dig_fails_when_boundary_edge_is_taken() {
        let kernel = FastKernel::<f64>::new();
        let (v, w) = (p(0.0, 0.0), p(1.0, 0.0));
        let mut tds = Tds::seeded(v.into(), w.into(), p(0.5, 1.0).into()).unwrap();
        // v → w is already claimed, so (u, v, w) cannot be created
        let err = dig(&mut tds, &kernel, &p(0.5, 2.0), v.into(), w.into()).unwrap_err();
        assert!(matches!(err, TdsError::DuplicateEdge { .. }));
    }

    // =============================================================================
    // INSERT VERTEX
    // =============================================================================

    #[test]
    fn insert_vertex_without_ghosts_closes_boundary() {
        let kernel = FastKernel::<f64>::new();
        let (a, b, c) = (p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));
        let mut tds = Tds::seeded(a.into(), b.into(), c.into()).unwrap();

        let u = p(1.0, 1.0);
        let stats = insert_vertex(&mut tds, &kernel, &u, &Triangle::from_points(a, b, c)).unwrap();
        assert_eq!(stats.triangles_removed, 1);
        assert_eq!(stats.triangles_created, 3);
        assert_eq!(stats.ghost_triangles_added, 3);
        assert!(validate_topology(&tds, &kernel).is_ok());
    }

    #[test]
    fn insert_vertex_rejects_unknown_triangle() {
        let kernel = FastKernel::<f64>::new();
        let mut tds = closed_seed(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));
        let bogus = Triangle::from_points(p(5.0, 5.0), p(6.0, 5.0), p(5.0, 6.0));
        let err = insert_vertex(&mut tds, &kernel, &p(5.2, 5.2), &bogus).unwrap_err();
        assert!(matches!(err, InsertionError::Tds(TdsError::MissingEdge { .. })));
    }

    #[test]
    fn insert_outside_hull_extends_boundary() {
        let kernel = FastKernel::<f64>::new();
        let mut tds = closed_seed(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));

        let stats = insert(&mut tds, &kernel, p(2.0, 2.0));
        assert!(stats.triangles_removed >= 1);
        assert_eq!(tds.number_of_vertices(), 4);
        assert_eq!(tds.number_of_real_triangles(), 2);
        // Four hull edges, four ghost triangles
        assert_eq!(tds.ghost_triangles().count(), 4);
        assert!(validate_topology(&tds, &kernel).is_ok());
        assert!(validate_delaunay(&tds, &kernel).is_ok());
    }

    #[test]
    fn insert_on_hull_edge() {
        let kernel = RobustKernel::<f64>::new();
        let mut tds = closed_seed(p(0.0, 0.0), p(2.0, 0.0), p(0.0, 2.0));

        insert(&mut tds, &kernel, p(1.0, 0.0));
        assert_eq!(tds.number_of_vertices(), 4);
        assert_eq!(tds.number_of_real_triangles(), 2);
        assert_eq!(tds.ghost_triangles().count(), 4);
        assert!(validate_topology(&tds, &kernel).is_ok());
    }

    #[test]
    fn insert_collinear_beyond_hull_vertex() {
        let kernel = RobustKernel::<f64>::new();
        let mut tds = closed_seed(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));

        insert(&mut tds, &kernel, p(2.0, 0.0));
        assert_eq!(tds.number_of_vertices(), 4);
        assert!(validate_topology(&tds, &kernel).is_ok());
        assert!(validate_delaunay(&tds, &kernel).is_ok());
    }

    #[test]
    fn random_insertion_stays_valid() {
        let kernel = FastKernel::<f64>::new();
        let mut tds = closed_seed(p(-0.1, -0.2), p(10.3, 0.1), p(0.2, 10.4));
        let mut total = InsertionStatistics::default();

        let points = generate_random_points_seeded::<f64>(36, (-2.0, 12.0), 7).unwrap();
        for u in &points {
            total += insert(&mut tds, &kernel, *u);
            assert!(validate_topology(&tds, &kernel).is_ok());
        }

        assert_eq!(tds.number_of_vertices(), 39);
        assert!(validate_delaunay(&tds, &kernel).is_ok());
        // Net change per insertion is +2 triangles (ghosts included)
        assert_eq!(
            total.triangles_created + total.ghost_triangles_added,
            total.triangles_removed + 2 * points.len()
        );
    }
}
