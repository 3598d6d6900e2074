//! Planar points.
//!
//! # Special Floating-Point Equality Semantics
//!
//! A [`Point`] is the identity of a mesh vertex, so equality, ordering and
//! hashing are defined on exact coordinate values through `OrderedFloat`:
//!
//! - `NaN` is equal to itself, which keeps `Eq` and `Hash` lawful
//! - `0.0` and `-0.0` are the same coordinate
//! - two points with equal coordinates are the same vertex
//!
//! Points carrying non-finite coordinates are rejected before insertion by
//! [`Point::validate`].

#![forbid(unsafe_code)]

use crate::geometry::traits::coordinate::{
    CoordinateScalar, CoordinateValidationError, HashCoordinate, OrderedEq,
};
use crate::geometry::vector::Vector;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A point in the plane with coordinates of scalar type `T`.
///
/// Points are immutable once created; the coordinates are private.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::geometry::point::Point;
///
/// let p = Point::new([1.0, 2.0]);
/// assert_eq!(p.coords(), &[1.0, 2.0]);
/// assert_eq!(p.x(), 1.0);
/// assert_eq!(p.y(), 2.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Point<T = f64>
where
    T: CoordinateScalar,
{
    coords: [T; 2],
}

impl<T> Point<T>
where
    T: CoordinateScalar,
{
    /// Creates a point from its `[x, y]` coordinates.
    #[inline]
    #[must_use]
    pub const fn new(coords: [T; 2]) -> Self {
        Self { coords }
    }

    /// Returns a reference to the point's coordinates.
    #[inline]
    #[must_use]
    pub const fn coords(&self) -> &[T; 2] {
        &self.coords
    }

    /// The x coordinate.
    #[inline]
    #[must_use]
    pub const fn x(&self) -> T {
        self.coords[0]
    }

    /// The y coordinate.
    #[inline]
    #[must_use]
    pub const fn y(&self) -> T {
        self.coords[1]
    }

    /// Coordinates widened to `f64` for predicate evaluation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use delaunay2d::geometry::point::Point;
    ///
    /// let p = Point::new([0.5f32, -1.0f32]);
    /// assert_eq!(p.to_f64_array(), [0.5, -1.0]);
    /// ```
    #[inline]
    #[must_use]
    pub fn to_f64_array(&self) -> [f64; 2] {
        self.coords.map(CoordinateScalar::into_f64)
    }

    /// The point as an `f64` vector, for predicate and utility arithmetic.
    #[inline]
    #[must_use]
    pub fn to_vector(&self) -> Vector<f64, 2> {
        Vector::new(self.to_f64_array())
    }

    /// Checks that all coordinates are finite.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateValidationError::InvalidCoordinate`] naming the first
    /// NaN or infinite coordinate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use delaunay2d::geometry::point::Point;
    ///
    /// assert!(Point::new([1.0, 2.0]).validate().is_ok());
    /// assert!(Point::new([f64::NAN, 2.0]).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), CoordinateValidationError> {
        for (index, coord) in self.coords.iter().enumerate() {
            if !coord.is_finite() {
                return Err(CoordinateValidationError::InvalidCoordinate {
                    coordinate_index: index,
                    coordinate_value: format!("{coord:?}"),
                });
            }
        }
        Ok(())
    }
}

// =============================================================================
// STANDARD TRAIT IMPLEMENTATIONS
// =============================================================================

impl<T> Hash for Point<T>
where
    T: CoordinateScalar,
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        for coord in &self.coords {
            coord.hash_scalar(state);
        }
    }
}

impl<T> PartialEq for Point<T>
where
    T: CoordinateScalar,
{
    fn eq(&self, other: &Self) -> bool {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(a, b)| a.ordered_eq(b))
    }
}

impl<T> Eq for Point<T> where T: CoordinateScalar {}

// Lexicographic: x first, then y.
impl<T> Ord for Point<T>
where
    T: CoordinateScalar,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.coords[0]
            .ordered_cmp(&other.coords[0])
            .then_with(|| self.coords[1].ordered_cmp(&other.coords[1]))
    }
}

impl<T> PartialOrd for Point<T>
where
    T: CoordinateScalar,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Default for Point<T>
where
    T: CoordinateScalar,
{
    fn default() -> Self {
        Self {
            coords: [T::default(); 2],
        }
    }
}

impl<T> From<[T; 2]> for Point<T>
where
    T: CoordinateScalar,
{
    #[inline]
    fn from(coords: [T; 2]) -> Self {
        Self::new(coords)
    }
}

impl<T> From<Point<T>> for [T; 2]
where
    T: CoordinateScalar,
{
    #[inline]
    fn from(point: Point<T>) -> Self {
        point.coords
    }
}

impl<T> fmt::Display for Point<T>
where
    T: CoordinateScalar,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.coords[0], self.coords[1])
    }
}

// =============================================================================
// TESTS
// =============================================================================
