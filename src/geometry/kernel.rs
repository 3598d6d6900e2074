//! Geometric kernel abstraction following CGAL's design.
//!
//! The Kernel trait defines the interface for geometric predicates used by
//! the triangulation algorithms. This separation allows swapping between
//! fast floating-point and exact-arithmetic implementations without touching
//! the combinatorial code.

use core::marker::PhantomData;

use crate::geometry::point::Point;
use crate::geometry::predicates::{
    DEFAULT_LIFT_WEIGHT, InSphere, Orientation, lifted_in_circle, orient_2d,
};
use crate::geometry::traits::coordinate::CoordinateScalar;

/// Geometric kernel trait defining predicates for triangulation algorithms.
///
/// Following CGAL's architecture, the kernel encapsulates all geometric
/// operations, allowing the triangulation data structure to remain purely
/// combinatorial.
///
/// # Examples
///
/// ```
/// use delaunay2d::geometry::kernel::{FastKernel, Kernel};
/// use delaunay2d::geometry::point::Point;
/// use delaunay2d::geometry::predicates::{InSphere, Orientation};
///
/// let kernel = FastKernel::<f64>::new();
///
/// let a = Point::new([0.0, 0.0]);
/// let b = Point::new([1.0, 0.0]);
/// let c = Point::new([0.5, 1.0]);
/// assert_eq!(kernel.orientation(&a, &b, &c), Orientation::POSITIVE);
///
/// // Test if point is inside circumcircle
/// let test_point = Point::new([0.5, 0.3]);
/// assert_eq!(kernel.in_circle(&a, &b, &c, &test_point), InSphere::INSIDE);
/// ```
pub trait Kernel: Clone + core::fmt::Debug {
    /// The scalar type used for coordinates.
    type Scalar: CoordinateScalar;

    /// Orientation of the triangle `a, b, c`.
    ///
    /// [`Orientation::POSITIVE`] for counter-clockwise,
    /// [`Orientation::NEGATIVE`] for clockwise and
    /// [`Orientation::DEGENERATE`] for collinear points.
    fn orientation(
        &self,
        a: &Point<Self::Scalar>,
        b: &Point<Self::Scalar>,
        c: &Point<Self::Scalar>,
    ) -> Orientation;

    /// Position of `d` relative to the circumcircle of counter-clockwise
    /// `a, b, c`.
    ///
    /// The result is only meaningful when `a, b, c` are counter-clockwise;
    /// for clockwise input the sign flips.
    fn in_circle(
        &self,
        a: &Point<Self::Scalar>,
        b: &Point<Self::Scalar>,
        c: &Point<Self::Scalar>,
        d: &Point<Self::Scalar>,
    ) -> InSphere;
}

/// Fast floating-point kernel.
///
/// Uses plain `f64` determinants. Orientation is [`orient_2d`]; the circle
/// test is [`lifted_in_circle`], i.e. a 3D orientation of the points lifted
/// onto the paraboloid offset by `lift_weight`. Near-degenerate inputs may be
/// misclassified; use [`RobustKernel`] when that matters.
///
/// # Examples
///
/// ```
/// use delaunay2d::geometry::kernel::{FastKernel, Kernel};
/// use delaunay2d::geometry::point::Point;
/// use delaunay2d::geometry::predicates::InSphere;
///
/// let kernel = FastKernel::<f64>::with_lift_weight(0.5);
/// assert_eq!(kernel.lift_weight(), 0.5);
///
/// let (a, b, c) = (
///     Point::new([0.0, 0.0]),
///     Point::new([1.0, 0.0]),
///     Point::new([0.0, 1.0]),
/// );
/// let test_point = Point::new([0.25, 0.25]);
/// assert_eq!(kernel.in_circle(&a, &b, &c, &test_point), InSphere::INSIDE);
/// ```
#[derive(Clone, Debug)]
pub struct FastKernel<T: CoordinateScalar> {
    lift_weight: f64,
    _phantom: PhantomData<T>,
}

impl<T: CoordinateScalar> FastKernel<T> {
    /// Create a new fast kernel with [`DEFAULT_LIFT_WEIGHT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use delaunay2d::geometry::kernel::FastKernel;
    ///
    /// let kernel = FastKernel::<f64>::new();
    /// assert_eq!(kernel.lift_weight(), 0.001);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self::with_lift_weight(DEFAULT_LIFT_WEIGHT)
    }

    /// Create a fast kernel lifting with the given paraboloid offset.
    #[must_use]
    pub const fn with_lift_weight(lift_weight: f64) -> Self {
        Self {
            lift_weight,
            _phantom: PhantomData,
        }
    }

    /// The paraboloid offset used by [`Kernel::in_circle`].
    #[must_use]
    pub const fn lift_weight(&self) -> f64 {
        self.lift_weight
    }
}

impl<T: CoordinateScalar> Default for FastKernel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Kernel for FastKernel<T>
where
    T: CoordinateScalar,
{
    type Scalar = T;

    #[inline]
    fn orientation(&self, a: &Point<T>, b: &Point<T>, c: &Point<T>) -> Orientation {
        Orientation::from_determinant(orient_2d(a, b, c))
    }

    #[inline]
    fn in_circle(&self, a: &Point<T>, b: &Point<T>, c: &Point<T>, d: &Point<T>) -> InSphere {
        InSphere::from_determinant(lifted_in_circle(a, b, c, d, self.lift_weight))
    }
}

/// Robust exact-arithmetic kernel.
///
/// Backed by Shewchuk's adaptive-precision predicates from the `robust`
/// crate: the sign of every determinant is exact, so collinear and
/// cocircular inputs are classified as [`Orientation::DEGENERATE`] and
/// [`InSphere::BOUNDARY`] reliably. Slower than [`FastKernel`] on
/// near-degenerate input, about as fast otherwise.
///
/// # Examples
///
/// ```
/// use delaunay2d::geometry::kernel::{Kernel, RobustKernel};
/// use delaunay2d::geometry::point::Point;
/// use delaunay2d::geometry::predicates::{InSphere, Orientation};
///
/// let kernel = RobustKernel::<f64>::new();
///
/// // Collinear to the last bit
/// let a = Point::new([0.1, 0.1]);
/// let b = Point::new([0.2, 0.2]);
/// let c = Point::new([0.3, 0.3]);
/// assert_eq!(kernel.orientation(&a, &b, &c), Orientation::DEGENERATE);
///
/// let (p, q, r) = (
///     Point::new([0.0, 0.0]),
///     Point::new([1.0, 0.0]),
///     Point::new([1.0, 1.0]),
/// );
/// assert_eq!(kernel.in_circle(&p, &q, &r, &Point::new([0.0, 1.0])), InSphere::BOUNDARY);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RobustKernel<T: CoordinateScalar> {
    _phantom: PhantomData<T>,
}

impl<T: CoordinateScalar> RobustKernel<T> {
    /// Create a new robust kernel.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

#[inline]
fn to_coord<T: CoordinateScalar>(p: &Point<T>) -> robust::Coord<f64> {
    let [x, y] = p.to_f64_array();
    robust::Coord { x, y }
}

impl<T> Kernel for RobustKernel<T>
where
    T: CoordinateScalar,
{
    type Scalar = T;

    fn orientation(&self, a: &Point<T>, b: &Point<T>, c: &Point<T>) -> Orientation {
        Orientation::from_determinant(robust::orient2d(to_coord(a), to_coord(b), to_coord(c)))
    }

    fn in_circle(&self, a: &Point<T>, b: &Point<T>, c: &Point<T>, d: &Point<T>) -> InSphere {
        InSphere::from_determinant(robust::incircle(
            to_coord(a),
            to_coord(b),
            to_coord(c),
            to_coord(d),
        ))
    }
}
