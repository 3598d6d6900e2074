//! Point location by circumcircle conflict.
//!
//! Locating a point for insertion means finding any triangle whose open
//! circumdisk contains it: that triangle is guaranteed to belong to the
//! point's cavity, and digging from it discovers the rest.
//!
//! # Conflict test
//!
//! - **Real triangle `(a, b, c)`**: the point is inside the circumcircle,
//!   evaluated by the kernel's in-circle predicate (the lifted-paraboloid
//!   orientation for [`FastKernel`](crate::geometry::kernel::FastKernel)).
//! - **Ghost triangle `(a, b, ghost)`**: the circumdisk degenerates to the
//!   open half-plane left of `a → b`. A point conflicts if it lies strictly
//!   left of the directed edge, or on its supporting line strictly between
//!   `a` and `b`.
//!
//! The search is a linear scan over all stored triangles and returns the
//! first conflict found; no walking or hint structure is used.

use crate::core::triangle::Triangle;
use crate::core::triangulation_data_structure::Tds;
use crate::geometry::kernel::Kernel;
use crate::geometry::point::Point;
use crate::geometry::predicates::{InSphere, Orientation, strictly_between};

/// Error during point location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocateError {
    /// Triangulation has no triangles
    #[error("Cannot locate in empty triangulation")]
    EmptyTriangulation,

    /// No triangle's open circumdisk contains the point
    #[error("No triangle's open circumdisk contains {point}")]
    NotFound {
        /// The query point, formatted
        point: String,
    },
}

/// Whether `point` lies in the open circumdisk of `triangle`.
///
/// Triangles with more than one ghost corner never conflict.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::algorithms::locate::triangle_conflicts;
/// use delaunay2d::core::triangle::Triangle;
/// use delaunay2d::core::vertex::Vertex;
/// use delaunay2d::geometry::kernel::FastKernel;
/// use delaunay2d::geometry::point::Point;
///
/// let kernel = FastKernel::<f64>::new();
/// let (a, b) = (Point::new([0.0, 0.0]), Point::new([1.0, 0.0]));
/// let c = Point::new([1.0, 1.0]);
///
/// let real = Triangle::from_points(a, b, c);
/// assert!(triangle_conflicts(&kernel, &real, &Point::new([0.5, 0.5])));
/// assert!(!triangle_conflicts(&kernel, &real, &Point::new([-1.0, 0.0])));
///
/// // Outside the edge b → a lies the half-plane y < 0
/// let ghost = Triangle::new(Vertex::Real(b), Vertex::Real(a), Vertex::Ghost);
/// assert!(triangle_conflicts(&kernel, &ghost, &Point::new([0.5, -3.0])));
/// assert!(triangle_conflicts(&kernel, &ghost, &Point::new([0.5, 0.0])));
/// assert!(!triangle_conflicts(&kernel, &ghost, &Point::new([2.0, 0.0])));
/// ```
#[must_use]
pub fn triangle_conflicts<K>(kernel: &K, triangle: &Triangle<K::Scalar>, point: &Point<K::Scalar>) -> bool
where
    K: Kernel,
{
    if let Some([a, b, c]) = triangle.points() {
        return kernel.in_circle(&a, &b, &c, point) == InSphere::INSIDE;
    }
    match triangle.ghost_edge() {
        Some((a, b)) => match kernel.orientation(&a, &b, point) {
            Orientation::POSITIVE => true,
            Orientation::DEGENERATE => strictly_between(&a, &b, point),
            Orientation::NEGATIVE => false,
        },
        None => false,
    }
}

/// Finds a triangle whose open circumdisk contains `point`.
///
/// Ghost triangles take part in the search, so once the boundary has been
/// closed every point outside the convex hull is located too.
///
/// # Errors
///
/// - [`LocateError::EmptyTriangulation`] if `tds` has no triangles.
/// - [`LocateError::NotFound`] if no triangle conflicts with `point`; in a
///   Delaunay mesh with closed boundary this happens exactly when `point` is
///   already a vertex.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::algorithms::locate::{LocateError, locate};
/// use delaunay2d::core::triangle::Triangle;
/// use delaunay2d::core::triangulation_data_structure::Tds;
/// use delaunay2d::geometry::kernel::FastKernel;
/// use delaunay2d::geometry::point::Point;
///
/// let kernel = FastKernel::<f64>::new();
/// let (a, b, c) = (
///     Point::new([0.0, 0.0]),
///     Point::new([1.0, 0.0]),
///     Point::new([1.0, 1.0]),
/// );
/// let tds = Tds::seeded(a.into(), b.into(), c.into()).unwrap();
///
/// let found = locate(&tds, &kernel, &Point::new([0.5, 0.5])).unwrap();
/// assert_eq!(found, Triangle::from_points(a, b, c));
///
/// assert!(matches!(
///     locate(&Tds::new(), &kernel, &Point::new([0.5, 0.5])),
///     Err(LocateError::EmptyTriangulation)
/// ));
/// ```
pub fn locate<K>(
    tds: &Tds<K::Scalar>,
    kernel: &K,
    point: &Point<K::Scalar>,
) -> Result<Triangle<K::Scalar>, LocateError>
where
    K: Kernel,
{
    if tds.is_empty() {
        return Err(LocateError::EmptyTriangulation);
    }

    tds.triangles()
        .find(|triangle| triangle_conflicts(kernel, triangle, point))
        .ok_or_else(|| {
            tracing::debug!(
                %point,
                triangles = tds.number_of_triangles(),
                "no conflicting triangle"
            );
            LocateError::NotFound {
                point: point.to_string(),
            }
        })
}

// =============================================================================
// TESTS
// =============================================================================
