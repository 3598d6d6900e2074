//! Geometric utility functions.
//!
//! Circumcircle and triangle-quality measures used by validation and tests,
//! plus random point generation for tests, benchmarks and demos.

use num_traits::NumCast;
use rand::Rng;
use rand::distr::uniform::SampleUniform;

use crate::geometry::point::Point;
use crate::geometry::predicates::orient_2d;
use crate::geometry::traits::coordinate::CoordinateScalar;
use crate::geometry::vector::Vector;

/// Errors from circumcircle computations.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum CircumcenterError {
    /// The three points are collinear, so no finite circumcircle exists.
    #[error("Cannot compute circumcenter of collinear points: {points}")]
    CollinearPoints {
        /// The offending points, formatted.
        points: String,
    },
    /// A computed `f64` value could not be represented in the coordinate type.
    #[error("Failed to convert {value} to coordinate type {target_type}")]
    ConversionFailed {
        /// The value that failed to convert, formatted.
        value: String,
        /// Name of the target type.
        target_type: &'static str,
    },
}

/// Errors from random point generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum RandomPointGenerationError {
    /// The coordinate range is empty or inverted.
    #[error("Invalid coordinate range: min {min} must be less than max {max}")]
    InvalidRange {
        /// Lower bound, formatted.
        min: String,
        /// Upper bound, formatted.
        max: String,
    },
}

fn from_f64<T: CoordinateScalar>(value: f64) -> Result<T, CircumcenterError> {
    <T as NumCast>::from(value)
        .filter(|v: &T| v.is_finite())
        .ok_or_else(|| CircumcenterError::ConversionFailed {
            value: format!("{value:?}"),
            target_type: std::any::type_name::<T>(),
        })
}

/// Circumcenter of a triangle.
///
/// Intersection of the perpendicular bisectors, computed relative to `a`:
/// with `b' = b − a`, `c' = c − a` and `d = 2 (b'ₓc'_y − b'_y c'ₓ)`,
///
/// ```text
/// center = a + ( (c'_y |b'|² − b'_y |c'|²) / d , (b'ₓ |c'|² − c'ₓ |b'|²) / d )
/// ```
///
/// # Errors
///
/// Returns [`CircumcenterError::CollinearPoints`] if `a, b, c` are
/// collinear, and [`CircumcenterError::ConversionFailed`] if the center does
/// not fit the coordinate type.
///
/// # Example
///
/// ```
/// use delaunay2d::geometry::point::Point;
/// use delaunay2d::geometry::util::circumcenter;
///
/// let center = circumcenter(
///     &Point::new([0.0, 0.0]),
///     &Point::new([2.0, 0.0]),
///     &Point::new([0.0, 2.0]),
/// )
/// .unwrap();
/// assert_eq!(center, Point::new([1.0, 1.0]));
/// ```
pub fn circumcenter<T>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> Result<Point<T>, CircumcenterError>
where
    T: CoordinateScalar,
{
    if orient_2d(a, b, c) == 0.0 {
        return Err(CircumcenterError::CollinearPoints {
            points: format!("[{a}, {b}, {c}]"),
        });
    }

    let origin = a.to_vector();
    let b = b.to_vector() - origin;
    let c = c.to_vector() - origin;
    let d = 2.0 * (b[0] * c[1] - b[1] * c[0]);
    let (b2, c2) = (b.squared_norm(), c.squared_norm());
    let offset = Vector::new([c[1] * b2 - b[1] * c2, b[0] * c2 - c[0] * b2]) / d;
    let center = origin + offset;

    Ok(Point::new([from_f64(center[0])?, from_f64(center[1])?]))
}

/// Circumradius of a triangle.
///
/// # Errors
///
/// Same conditions as [`circumcenter`].
///
/// # Example
///
/// ```
/// use delaunay2d::geometry::point::Point;
/// use delaunay2d::geometry::util::circumradius;
///
/// let r = circumradius(
///     &Point::new([0.0, 0.0]),
///     &Point::new([2.0, 0.0]),
///     &Point::new([0.0, 2.0]),
/// )
/// .unwrap();
/// assert!((r - 2.0_f64.sqrt()).abs() < 1e-12);
/// ```
pub fn circumradius<T>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> Result<T, CircumcenterError>
where
    T: CoordinateScalar,
{
    let center = circumcenter(a, b, c)?;
    let radius = (a.to_vector() - center.to_vector()).squared_norm().sqrt();
    from_f64(radius)
}

/// Smallest interior angle of a triangle, in radians.
///
/// Degenerate triangles (repeated or collinear vertices) yield `0.0`.
///
/// # Example
///
/// ```
/// use delaunay2d::geometry::point::Point;
/// use delaunay2d::geometry::util::min_angle;
///
/// let angle = min_angle(
///     &Point::new([0.0, 0.0]),
///     &Point::new([1.0, 0.0]),
///     &Point::new([0.0, 1.0]),
/// );
/// assert!((angle - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
/// ```
#[must_use]
pub fn min_angle<T>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> f64
where
    T: CoordinateScalar,
{
    let corners = [
        (a.to_vector(), b.to_vector(), c.to_vector()),
        (b.to_vector(), c.to_vector(), a.to_vector()),
        (c.to_vector(), a.to_vector(), b.to_vector()),
    ];
    corners
        .iter()
        .map(|&(apex, p, q)| {
            let (u, v) = (p - apex, q - apex);
            let cross = u[0] * v[1] - u[1] * v[0];
            cross.abs().atan2(u.dot(&v))
        })
        .fold(f64::INFINITY, f64::min)
}

/// Generate random points in the plane with uniform distribution.
///
/// Coordinates are drawn independently from `range.0..range.1` using the
/// thread-local RNG.
///
/// # Errors
///
/// * `RandomPointGenerationError::InvalidRange` if min >= max
///
/// # Examples
///
/// ```
/// use delaunay2d::geometry::util::generate_random_points;
///
/// let points = generate_random_points::<f64>(100, (-10.0, 10.0)).unwrap();
/// assert_eq!(points.len(), 100);
///
/// // Error handling
/// assert!(generate_random_points::<f64>(100, (10.0, -10.0)).is_err());
/// ```
pub fn generate_random_points<T: CoordinateScalar + SampleUniform>(
    n_points: usize,
    range: (T, T),
) -> Result<Vec<Point<T>>, RandomPointGenerationError> {
    validate_range(range)?;
    Ok(sample_points(&mut rand::rng(), n_points, range))
}

/// Generate random points with a seeded RNG for reproducible results.
///
/// # Errors
///
/// * `RandomPointGenerationError::InvalidRange` if min >= max
///
/// # Examples
///
/// ```
/// use delaunay2d::geometry::util::generate_random_points_seeded;
///
/// let points1 = generate_random_points_seeded::<f64>(100, (-5.0, 5.0), 42).unwrap();
/// let points2 = generate_random_points_seeded::<f64>(100, (-5.0, 5.0), 42).unwrap();
/// assert_eq!(points1, points2); // Same seed produces identical results
///
/// let points3 = generate_random_points_seeded::<f64>(100, (-5.0, 5.0), 123).unwrap();
/// assert_ne!(points1, points3);
/// ```
pub fn generate_random_points_seeded<T: CoordinateScalar + SampleUniform>(
    n_points: usize,
    range: (T, T),
    seed: u64,
) -> Result<Vec<Point<T>>, RandomPointGenerationError> {
    use rand::SeedableRng;

    validate_range(range)?;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    Ok(sample_points(&mut rng, n_points, range))
}

fn validate_range<T: CoordinateScalar>(range: (T, T)) -> Result<(), RandomPointGenerationError> {
    // NaN bounds compare as unordered and are rejected too.
    if range.0.partial_cmp(&range.1) != Some(std::cmp::Ordering::Less) {
        return Err(RandomPointGenerationError::InvalidRange {
            min: format!("{:?}", range.0),
            max: format!("{:?}", range.1),
        });
    }
    Ok(())
}

fn sample_points<T, R>(rng: &mut R, n_points: usize, range: (T, T)) -> Vec<Point<T>>
where
    T: CoordinateScalar + SampleUniform,
    R: Rng + ?Sized,
{
    (0..n_points)
        .map(|_| {
            Point::new([
                rng.random_range(range.0..range.1),
                rng.random_range(range.0..range.1),
            ])
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
