//! Structural and Delaunay property validation.
//!
//! [`validate_topology`] checks the invariants the edge store relies on;
//! [`validate_delaunay`] checks the empty-circumcircle property on top of
//! them. Both take a kernel so the same predicates that built the mesh judge
//! it; pass a [`RobustKernel`](crate::geometry::kernel::RobustKernel) for an
//! exact verdict.

#![forbid(unsafe_code)]

use crate::core::triangle::Triangle;
use crate::core::triangulation_data_structure::{Tds, TriangulationValidationError};
use crate::core::vertex::Vertex;
use crate::geometry::kernel::Kernel;
use crate::geometry::predicates::{InSphere, Orientation};

/// Checks the structural invariants of the mesh.
///
/// - Every stored edge closes a three-edge cycle: for `(u, v) → w`, the store
///   also holds `(v, w) → u` and `(w, u) → v`.
/// - No triangle repeats a vertex or has more than one ghost corner.
/// - Every real triangle is counter-clockwise under `kernel`.
/// - If any ghost triangle is present, every edge has a stored reverse.
///
/// # Errors
///
/// Returns the first violated invariant as a [`TriangulationValidationError`].
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::triangulation_data_structure::Tds;
/// use delaunay2d::core::util::delaunay_validation::validate_topology;
/// use delaunay2d::geometry::kernel::FastKernel;
/// use delaunay2d::geometry::point::Point;
///
/// let kernel = FastKernel::<f64>::new();
/// let (a, b, c) = (
///     Point::new([0.0, 0.0]).into(),
///     Point::new([1.0, 0.0]).into(),
///     Point::new([0.0, 1.0]).into(),
/// );
/// assert!(validate_topology(&Tds::seeded(a, b, c).unwrap(), &kernel).is_ok());
/// // Clockwise
/// assert!(validate_topology(&Tds::seeded(a, c, b).unwrap(), &kernel).is_err());
/// ```
pub fn validate_topology<K>(tds: &Tds<K::Scalar>, kernel: &K) -> Result<(), TriangulationValidationError>
where
    K: Kernel,
{
    for (edge, apex) in tds.edges() {
        let (u, v) = (edge.origin(), edge.destination());
        if tds.adjacent(v, apex) != Some(u) || tds.adjacent(apex, u) != Some(v) {
            return Err(TriangulationValidationError::OpenTriangleCycle {
                edge: edge.to_string(),
                message: format!("apex {apex} does not lead back to {u}"),
            });
        }
    }

    let mut has_ghosts = false;
    for triangle in tds.triangles() {
        let ghost_corners = triangle.vertices().iter().filter(|v| v.is_ghost()).count();
        if triangle.has_repeated_vertex() || ghost_corners > 1 {
            return Err(TriangulationValidationError::DegenerateTriangle {
                triangle: triangle.to_string(),
            });
        }
        has_ghosts |= ghost_corners == 1;

        if let Some([a, b, c]) = triangle.points() {
            let orientation = kernel.orientation(&a, &b, &c);
            if orientation != Orientation::POSITIVE {
                return Err(TriangulationValidationError::InvalidOrientation {
                    triangle: triangle.to_string(),
                    orientation: orientation.to_string(),
                });
            }
        }
    }

    if !has_ghosts {
        return Ok(());
    }
    let open = tds
        .triangles()
        .filter(|triangle| {
            let [u, v, w] = *triangle.vertices();
            tds.has_boundary(u, v, w)
        })
        .flat_map(|triangle| triangle.edges())
        .find(|edge| tds.is_boundary_edge(edge.origin(), edge.destination()));
    match open {
        Some(edge) => Err(TriangulationValidationError::OpenBoundary {
            edge: edge.to_string(),
        }),
        None => Ok(()),
    }
}

/// Real triangles whose open circumcircle strictly contains a mesh vertex.
///
/// Cocircular vertices (`InSphere::BOUNDARY`) are not violations. Runs in
/// O(triangles × vertices).
#[must_use]
pub fn find_delaunay_violations<K>(tds: &Tds<K::Scalar>, kernel: &K) -> Vec<Triangle<K::Scalar>>
where
    K: Kernel,
{
    let vertices = tds.vertices();
    let violations: Vec<_> = tds
        .real_triangles()
        .filter(|triangle| {
            triangle.points().is_some_and(|[a, b, c]| {
                vertices
                    .iter()
                    .filter(|p| !triangle.contains_vertex(&Vertex::Real(**p)))
                    .any(|p| kernel.in_circle(&a, &b, &c, p) == InSphere::INSIDE)
            })
        })
        .collect();

    tracing::debug!(
        triangles = tds.number_of_real_triangles(),
        vertices = vertices.len(),
        violations = violations.len(),
        "checked Delaunay property"
    );
    violations
}

/// Checks the empty-circumcircle property of every real triangle.
///
/// # Errors
///
/// Returns [`TriangulationValidationError::DelaunayViolation`] describing the
/// number of violating triangles and the first of them.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::triangulation_data_structure::Tds;
/// use delaunay2d::core::util::delaunay_validation::validate_delaunay;
/// use delaunay2d::geometry::kernel::RobustKernel;
/// use delaunay2d::geometry::point::Point;
///
/// let kernel = RobustKernel::<f64>::new();
/// let (a, b, c, d) = (
///     Point::new([0.0, 0.0]).into(),
///     Point::new([4.0, 0.0]).into(),
///     Point::new([4.0, 1.0]).into(),
///     Point::new([0.0, 1.0]).into(),
/// );
/// // Splitting the thin rectangle along b–d is fine; its circles are empty
/// let mut tds = Tds::seeded(a, b, d).unwrap();
/// tds.add_triangle(b, c, d).unwrap();
/// assert!(validate_delaunay(&tds, &kernel).is_ok());
/// ```
pub fn validate_delaunay<K>(tds: &Tds<K::Scalar>, kernel: &K) -> Result<(), TriangulationValidationError>
where
    K: Kernel,
{
    let violations = find_delaunay_violations(tds, kernel);
    match violations.first() {
        None => Ok(()),
        Some(first) => {
            tracing::warn!(
                count = violations.len(),
                first = %first,
                "Delaunay property violated"
            );
            Err(TriangulationValidationError::DelaunayViolation {
                message: format!(
                    "{} triangle(s) have a vertex inside their circumcircle; first: {first}",
                    violations.len()
                ),
            })
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::boundary::insert_ghost_triangles;
    use crate::geometry::kernel::{FastKernel, RobustKernel};
    use crate::geometry::point::Point;

    fn v(x: f64, y: f64) -> Vertex {
        Vertex::Real(Point::new([x, y]))
    }

    // =============================================================================
    // TOPOLOGY
    // =============================================================================

    #[test]
    fn closed_mesh_is_valid() {
        let kernel = FastKernel::<f64>::new();
        let mut tds = Tds::seeded(v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0)).unwrap();
        insert_ghost_triangles(&mut tds).unwrap();
        assert!(validate_topology(&tds, &kernel).is_ok());
    }

    #[test]
    fn clockwise_triangle_is_rejected() {
        let kernel = RobustKernel::<f64>::new();
        let tds = Tds::seeded(v(0.0, 0.0), v(0.0, 1.0), v(1.0, 0.0)).unwrap();
        assert!(matches!(
            validate_topology(&tds, &kernel),
            Err(TriangulationValidationError::InvalidOrientation { .. })
        ));
    }

    #[test]
    fn collinear_triangle_is_rejected() {
        let kernel = RobustKernel::<f64>::new();
        let tds = Tds::seeded(v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0)).unwrap();
        let err = validate_topology(&tds, &kernel).unwrap_err();
        assert!(err.to_string().contains("DEGENERATE"));
    }

    #[test]
    fn partially_closed_boundary_is_rejected() {
        let kernel = FastKernel::<f64>::new();
        let (a, b) = (v(0.0, 0.0), v(1.0, 0.0));
        let mut tds = Tds::seeded(a, b, v(0.0, 1.0)).unwrap();
        tds.add_triangle(b, a, Vertex::Ghost).unwrap();
        assert!(matches!(
            validate_topology(&tds, &kernel),
            Err(TriangulationValidationError::OpenBoundary { .. })
        ));
    }

    #[test]
    fn add_then_delete_restores_validity() {
        let kernel = FastKernel::<f64>::new();
        let (a, b, c, d) = (v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0), v(1.0, 1.0));
        let mut tds = Tds::seeded(a, b, c).unwrap();
        tds.add_triangle(c, b, d).unwrap();
        tds.delete_triangle(c, b, d).unwrap();
        assert!(validate_topology(&tds, &kernel).is_ok());
        assert_eq!(tds.number_of_triangles(), 1);
    }

    // =============================================================================
    // DELAUNAY
    // =============================================================================

    #[test]
    fn cocircular_split_is_not_a_violation() {
        let kernel = RobustKernel::<f64>::new();
        let (a, b, c, d) = (v(0.0, 0.0), v(4.0, 0.0), v(4.0, 1.0), v(0.0, 1.0));
        let mut tds = Tds::seeded(a, b, c).unwrap();
        tds.add_triangle(a, c, d).unwrap();
        assert!(find_delaunay_violations(&tds, &kernel).is_empty());
        assert!(validate_delaunay(&tds, &kernel).is_ok());
    }

    #[test]
    fn skinny_split_of_kite_is_reported() {
        let kernel = RobustKernel::<f64>::new();
        // Kite: the short diagonal b–d is the Delaunay one
        let (a, b, c, d) = (v(0.0, 0.0), v(2.0, -1.0), v(4.0, 0.0), v(2.0, 1.0));
        let mut good = Tds::seeded(a, b, d).unwrap();
        good.add_triangle(b, c, d).unwrap();
        assert!(validate_delaunay(&good, &kernel).is_ok());

        let mut bad = Tds::seeded(a, b, c).unwrap();
        bad.add_triangle(a, c, d).unwrap();
        assert_eq!(find_delaunay_violations(&bad, &kernel).len(), 2);
        let err = validate_delaunay(&bad, &kernel).unwrap_err();
        assert!(matches!(
            err,
            TriangulationValidationError::DelaunayViolation { .. }
        ));
        assert!(err.to_string().starts_with("Delaunay invariant violated: 2 triangle(s)"));
    }
}
