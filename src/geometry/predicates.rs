//! Geometric predicates.
//!
//! This module contains the determinant-based orientation and in-circle
//! tests the triangulation is built on. Every predicate returns the raw
//! determinant so callers can inspect magnitude as well as sign; the sign
//! classification lives in [`Orientation::from_determinant`] and
//! [`InSphere::from_determinant`].
//!
//! All arithmetic is `f64`, whatever the coordinate scalar. No adaptive or
//! exact arithmetic is used here: near-degenerate inputs can produce
//! inconsistent signs. [`RobustKernel`](crate::geometry::kernel::RobustKernel)
//! is the exact alternative.
//!
//! # Lifting
//!
//! The in-circle test is equivalent to an orientation test on points lifted
//! onto the paraboloid `z = x² + y²`. [`lift`] subtracts a constant `weight`
//! from the height; the same weight must be used for every evaluation within
//! one mesh.

use crate::geometry::matrix::{Matrix2, Matrix3, Matrix4};
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;
use crate::geometry::vector::{Vector2, Vector3};

/// Default paraboloid offset used when lifting points for in-circle tests.
///
/// The offset is subtracted from every lifted height alike, so it has no
/// geometric meaning; it is kept configurable so one value can be used
/// consistently for locate and insertion.
pub const DEFAULT_LIFT_WEIGHT: f64 = 0.001;

/// Represents the position of a point relative to a circumcircle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InSphere {
    /// The point is outside the circumcircle
    OUTSIDE,
    /// The point is on the circumcircle
    BOUNDARY,
    /// The point is inside the circumcircle
    INSIDE,
}

impl InSphere {
    /// Classifies an in-circle determinant by its exact sign.
    ///
    /// # Example
    ///
    /// ```
    /// use delaunay2d::geometry::predicates::InSphere;
    ///
    /// assert_eq!(InSphere::from_determinant(0.5), InSphere::INSIDE);
    /// assert_eq!(InSphere::from_determinant(-2.0), InSphere::OUTSIDE);
    /// assert_eq!(InSphere::from_determinant(0.0), InSphere::BOUNDARY);
    /// ```
    #[must_use]
    pub fn from_determinant(det: f64) -> Self {
        if det > 0.0 {
            Self::INSIDE
        } else if det < 0.0 {
            Self::OUTSIDE
        } else {
            Self::BOUNDARY
        }
    }
}

impl std::fmt::Display for InSphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OUTSIDE => write!(f, "OUTSIDE"),
            Self::BOUNDARY => write!(f, "BOUNDARY"),
            Self::INSIDE => write!(f, "INSIDE"),
        }
    }
}

/// Represents the orientation of a triangle (or tetrahedron).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Clockwise (determinant < 0)
    NEGATIVE,
    /// Collinear / coplanar (determinant == 0)
    DEGENERATE,
    /// Counter-clockwise (determinant > 0)
    POSITIVE,
}

impl Orientation {
    /// Classifies an orientation determinant by its exact sign.
    ///
    /// # Example
    ///
    /// ```
    /// use delaunay2d::geometry::predicates::Orientation;
    ///
    /// assert_eq!(Orientation::from_determinant(1.0), Orientation::POSITIVE);
    /// assert_eq!(Orientation::from_determinant(-0.0), Orientation::DEGENERATE);
    /// ```
    #[must_use]
    pub fn from_determinant(det: f64) -> Self {
        if det > 0.0 {
            Self::POSITIVE
        } else if det < 0.0 {
            Self::NEGATIVE
        } else {
            Self::DEGENERATE
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NEGATIVE => write!(f, "NEGATIVE"),
            Self::DEGENERATE => write!(f, "DEGENERATE"),
            Self::POSITIVE => write!(f, "POSITIVE"),
        }
    }
}

/// Orientation of three points in the plane.
///
/// Determinant of the 2×2 matrix with rows `a − c` and `b − c`: positive if
/// `a, b, c` are counter-clockwise, negative if clockwise, zero if collinear.
///
/// # Example
///
/// ```
/// use delaunay2d::geometry::point::Point;
/// use delaunay2d::geometry::predicates::orient_2d;
///
/// let a = Point::new([0.0, 0.0]);
/// let b = Point::new([1.0, 0.0]);
/// let c = Point::new([1.0, 1.0]);
/// assert_eq!(orient_2d(&a, &b, &c), 1.0);
/// assert_eq!(orient_2d(&a, &c, &b), -1.0);
/// ```
#[inline]
#[must_use]
pub fn orient_2d<T>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> f64
where
    T: CoordinateScalar,
{
    let c = c.to_vector();
    Matrix2::from_row_vectors([a.to_vector() - c, b.to_vector() - c]).determinant()
}

/// Orientation of four points in space.
///
/// Determinant of the 3×3 matrix with rows `a − d`, `b − d`, `c − d`. Swapping
/// any two arguments negates the result; zero means coplanar.
///
/// # Example
///
/// ```
/// use delaunay2d::geometry::predicates::orient_3d;
/// use delaunay2d::geometry::vector::Vector;
///
/// let det = orient_3d(
///     Vector::new([0.0, 1.0, 0.0]),
///     Vector::new([0.0, 0.0, 1.0]),
///     Vector::new([1.0, 0.0, 0.0]),
///     Vector::new([0.0, 0.0, -1.0]),
/// );
/// assert_eq!(det, 2.0);
/// ```
#[inline]
#[must_use]
pub fn orient_3d(a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>, d: Vector3<f64>) -> f64 {
    Matrix3::from_row_vectors([a - d, b - d, c - d]).determinant()
}

/// In-circle test.
///
/// Determinant of the 3×3 matrix whose rows are `(pₓ − dₓ, p_y − d_y, |p − d|²)`
/// for `p ∈ {a, b, c}`. With `a, b, c` counter-clockwise, the result is
/// positive when `d` lies strictly inside their circumcircle, negative
/// outside, zero when the four points are concyclic.
///
/// # Example
///
/// ```
/// use delaunay2d::geometry::point::Point;
/// use delaunay2d::geometry::predicates::in_circle;
///
/// let a = Point::new([0.0, 0.0]);
/// let b = Point::new([1.0, 0.0]);
/// let c = Point::new([1.0, 1.0]);
/// assert_eq!(in_circle(&a, &b, &c, &Point::new([0.5, 0.5])), 0.5);
/// assert_eq!(in_circle(&a, &b, &c, &Point::new([-1.0, 0.0])), -2.0);
/// ```
#[inline]
#[must_use]
pub fn in_circle<T>(a: &Point<T>, b: &Point<T>, c: &Point<T>, d: &Point<T>) -> f64
where
    T: CoordinateScalar,
{
    let d = d.to_vector();
    let row = |p: Vector2<f64>| {
        let r = p - d;
        r.extend2(r.squared_norm())
    };
    Matrix3::from_row_vectors([row(a.to_vector()), row(b.to_vector()), row(c.to_vector())])
        .determinant()
}

/// In-sphere test.
///
/// Determinant of the 4×4 matrix with rows `(p − e, |p − e|²)` for
/// `p ∈ {a, b, c, d}`. For a positively oriented `a, b, c, d`
/// ([`orient_3d`] > 0) the result is positive when `e` lies inside their
/// circumsphere.
///
/// # Example
///
/// ```
/// use delaunay2d::geometry::predicates::in_sphere;
/// use delaunay2d::geometry::vector::Vector;
///
/// let det = in_sphere(
///     Vector::new([0.0, 1.0, 0.0]),
///     Vector::new([0.0, 0.0, 1.0]),
///     Vector::new([1.0, 0.0, 0.0]),
///     Vector::new([0.0, 0.0, -1.0]),
///     Vector::new([1.0, 1.0, 1.0]),
/// );
/// assert_eq!(det, -4.0);
/// ```
#[inline]
#[must_use]
pub fn in_sphere(
    a: Vector3<f64>,
    b: Vector3<f64>,
    c: Vector3<f64>,
    d: Vector3<f64>,
    e: Vector3<f64>,
) -> f64 {
    let row = |p: Vector3<f64>| {
        let r = p - e;
        r.extend3(r.squared_norm())
    };
    Matrix4::from_row_vectors([row(a), row(b), row(c), row(d)]).determinant()
}

/// Lifts a planar point onto the offset paraboloid `z = x² + y² − weight`.
#[inline]
#[must_use]
pub fn lift<T>(p: &Point<T>, weight: f64) -> Vector3<f64>
where
    T: CoordinateScalar,
{
    let v = p.to_vector();
    v.extend2(v.squared_norm() - weight)
}

/// In-circle test evaluated as [`orient_3d`] of the four lifted points.
///
/// Agrees in sign with [`in_circle`]: positive when `d` lies strictly inside
/// the circle through counter-clockwise `a, b, c`.
///
/// # Example
///
/// ```
/// use delaunay2d::geometry::point::Point;
/// use delaunay2d::geometry::predicates::{DEFAULT_LIFT_WEIGHT, lifted_in_circle};
///
/// let a = Point::new([0.0, 0.0]);
/// let b = Point::new([1.0, 0.0]);
/// let c = Point::new([1.0, 1.0]);
/// let inside = Point::new([0.5, 0.5]);
/// assert!(lifted_in_circle(&a, &b, &c, &inside, DEFAULT_LIFT_WEIGHT) > 0.0);
/// ```
#[inline]
#[must_use]
pub fn lifted_in_circle<T>(
    a: &Point<T>,
    b: &Point<T>,
    c: &Point<T>,
    d: &Point<T>,
    weight: f64,
) -> f64
where
    T: CoordinateScalar,
{
    orient_3d(
        lift(a, weight),
        lift(b, weight),
        lift(c, weight),
        lift(d, weight),
    )
}

/// Whether `p` lies strictly between `a` and `b`, assuming the three points
/// are collinear.
#[inline]
#[must_use]
pub fn strictly_between<T>(a: &Point<T>, b: &Point<T>, p: &Point<T>) -> bool
where
    T: CoordinateScalar,
{
    let (a, b, p) = (a.to_vector(), b.to_vector(), p.to_vector());
    (p - a).dot(&(b - a)) > 0.0 && (p - b).dot(&(a - b)) > 0.0
}

// =============================================================================
// TESTS
// =============================================================================
