//! Ghost-vertex boundary management.
//!
//! Every boundary edge `u → v` of the real mesh (an edge whose reverse is
//! not stored) is closed by the ghost triangle `(v, u, ghost)`. Once all
//! ghost triangles are present every directed edge has a stored reverse,
//! points outside the convex hull can be located like any other, and the
//! hull can be read straight off the ghost triangles.

use crate::core::collections::{BOUNDARY_BUFFER_CAPACITY, FastHashMap, SmallBuffer};
use crate::core::edge::Edge;
use crate::core::triangulation_data_structure::{Tds, TdsError};
use crate::core::vertex::Vertex;
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;

/// Real edges of real triangles that have no stored reverse.
///
/// Empty once ghost triangles close the boundary.
#[must_use]
pub fn boundary_edges<T>(tds: &Tds<T>) -> Vec<Edge<T>>
where
    T: CoordinateScalar,
{
    open_edges(tds).collect()
}

fn open_edges<T>(tds: &Tds<T>) -> impl Iterator<Item = Edge<T>> + '_
where
    T: CoordinateScalar,
{
    tds.edges()
        .filter(|(edge, apex)| !apex.is_ghost() && !edge.touches_ghost())
        .map(|(edge, _)| edge)
        .filter(move |edge| tds.is_boundary_edge(edge.origin(), edge.destination()))
}

/// Closes every open boundary edge with a ghost triangle.
///
/// Scans the real edges, collects `(v, u, ghost)` for each edge `(u, v)`
/// whose reverse is absent, then adds them. Triangles already touching the
/// ghost are skipped. Returns the number of ghost triangles added, which is
/// zero when the boundary is already closed.
///
/// # Errors
///
/// Returns [`TdsError::DuplicateEdge`] if a hull vertex already has a ghost
/// edge, i.e. the boundary was only partly closed. Ghost triangles collected
/// before the failing one stay in place.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::boundary::insert_ghost_triangles;
/// use delaunay2d::core::triangulation_data_structure::Tds;
/// use delaunay2d::core::vertex::Vertex;
/// use delaunay2d::geometry::point::Point;
///
/// let (a, b, c) = (
///     Vertex::from(Point::new([0.0, 0.0])),
///     Vertex::from(Point::new([1.0, 0.0])),
///     Vertex::from(Point::new([1.0, 1.0])),
/// );
/// let mut tds = Tds::seeded(a, b, c).unwrap();
/// assert_eq!(insert_ghost_triangles(&mut tds).unwrap(), 3);
/// assert_eq!(tds.adjacent(b, a), Some(Vertex::Ghost));
///
/// // Idempotent
/// assert_eq!(insert_ghost_triangles(&mut tds).unwrap(), 0);
/// ```
pub fn insert_ghost_triangles<T>(tds: &mut Tds<T>) -> Result<usize, TdsError>
where
    T: CoordinateScalar,
{
    let pending: SmallBuffer<Edge<T>, BOUNDARY_BUFFER_CAPACITY> = open_edges(tds).collect();

    for edge in &pending {
        tds.add_triangle(edge.destination(), edge.origin(), Vertex::Ghost)?;
    }

    if !pending.is_empty() {
        tracing::debug!(added = pending.len(), "closed boundary with ghost triangles");
    }
    Ok(pending.len())
}

/// Vertices of the convex hull in counter-clockwise order, starting at the
/// smallest vertex.
///
/// Read from the ghost triangles: `(far, near, ghost)` contributes the hull
/// edge `near → far`. Returns an empty vector when no ghost triangles are
/// present.
#[must_use]
pub fn convex_hull<T>(tds: &Tds<T>) -> Vec<Point<T>>
where
    T: CoordinateScalar,
{
    let next: FastHashMap<Point<T>, Point<T>> = tds
        .ghost_triangles()
        .filter_map(|triangle| triangle.ghost_edge())
        .map(|(far, near)| (near, far))
        .collect();

    let Some(&start) = next.keys().min() else {
        return Vec::new();
    };

    let mut hull = Vec::with_capacity(next.len());
    let mut current = start;
    loop {
        hull.push(current);
        match next.get(&current) {
            Some(&following) if following != start && hull.len() < next.len() => {
                current = following;
            }
            _ => break,
        }
    }
    hull
}

// =============================================================================
// TESTS
// =============================================================================
