//! Scalar traits for planar coordinates.
//!
//! The triangulation keys its edge store by vertex coordinates, so every
//! scalar used for a coordinate must support exact, NaN-aware equality,
//! hashing and total ordering. Those requirements are collected here:
//!
//! - **`CoordinateScalar`**: trait alias consolidating all scalar requirements
//! - **`OrderedEq`**: NaN-aware equality and total ordering via `OrderedFloat`
//! - **`HashCoordinate`**: consistent hashing of floating-point values
//!
//! Geometric predicates always evaluate in `f64`; [`CoordinateScalar::into_f64`]
//! is the lossless widening used for that.
//!
//! # Examples
//!
//! ```rust
//! use delaunay2d::geometry::traits::coordinate::{CoordinateScalar, OrderedEq};
//!
//! assert!(f64::NAN.ordered_eq(&f64::NAN));
//! assert_eq!(1.5f32.into_f64(), 1.5f64);
//! ```

use num_traits::Float;
use ordered_float::OrderedFloat;
use std::{
    cmp::Ordering,
    fmt::Debug,
    hash::{Hash, Hasher},
};

/// Errors that can occur during coordinate validation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoordinateValidationError {
    /// A coordinate value is invalid (NaN or infinite).
    #[error("Invalid coordinate at index {coordinate_index}: {coordinate_value}")]
    InvalidCoordinate {
        /// Index of the invalid coordinate.
        coordinate_index: usize,
        /// Value of the invalid coordinate, as a string.
        coordinate_value: String,
    },
}

/// Default tolerance for f32 floating-point comparisons.
pub const DEFAULT_TOLERANCE_F32: f32 = 1e-6;

/// Default tolerance for f64 floating-point comparisons.
pub const DEFAULT_TOLERANCE_F64: f64 = 1e-15;

// =============================================================================
// SUPPORTING TRAITS
// =============================================================================

/// Helper trait for `OrderedFloat`-based comparison that handles NaN properly.
///
/// NaN compares equal to itself and greater than every other value, and
/// `0.0 == -0.0`, which is what the edge store needs for keys.
///
/// # Examples
///
/// ```
/// use delaunay2d::geometry::traits::coordinate::OrderedEq;
/// use std::cmp::Ordering;
///
/// assert!(1.0f64.ordered_eq(&1.0f64));
/// assert!(f64::NAN.ordered_eq(&f64::NAN));
/// assert!(0.0f64.ordered_eq(&(-0.0f64)));
/// assert_eq!(1.0f64.ordered_cmp(&2.0), Ordering::Less);
/// ```
pub trait OrderedEq {
    /// Compares two values for equality using ordered comparison semantics.
    fn ordered_eq(&self, other: &Self) -> bool;

    /// Total order consistent with [`OrderedEq::ordered_eq`].
    fn ordered_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! impl_ordered_eq {
    (float: $($t:ty),*) => {
        $(
            impl OrderedEq for $t {
                #[inline(always)]
                fn ordered_eq(&self, other: &Self) -> bool {
                    OrderedFloat(*self) == OrderedFloat(*other)
                }

                #[inline(always)]
                fn ordered_cmp(&self, other: &Self) -> Ordering {
                    OrderedFloat(*self).cmp(&OrderedFloat(*other))
                }
            }
        )*
    };
}

impl_ordered_eq!(float: f32, f64);

/// Helper trait for hashing individual coordinates of types like `f32` and `f64`.
///
/// Uses `OrderedFloat` so the hash agrees with [`OrderedEq::ordered_eq`].
///
/// # Examples
///
/// ```
/// use delaunay2d::geometry::traits::coordinate::HashCoordinate;
/// use std::collections::hash_map::DefaultHasher;
/// use std::hash::Hasher;
///
/// let mut h1 = DefaultHasher::new();
/// let mut h2 = DefaultHasher::new();
/// 0.0f64.hash_scalar(&mut h1);
/// (-0.0f64).hash_scalar(&mut h2);
/// assert_eq!(h1.finish(), h2.finish());
/// ```
pub trait HashCoordinate {
    /// Hashes a single coordinate value.
    fn hash_scalar<H: Hasher>(&self, state: &mut H);
}

macro_rules! impl_hash_coordinate {
    (float: $($t:ty),*) => {
        $(
            impl HashCoordinate for $t {
                #[inline(always)]
                fn hash_scalar<H: Hasher>(&self, state: &mut H) {
                    OrderedFloat(*self).hash(state);
                }
            }
        )*
    };
}

impl_hash_coordinate!(float: f32, f64);

/// Trait alias for the scalar type requirements of a coordinate.
///
/// Implemented for `f32` and `f64`.
///
/// # Examples
///
/// ```
/// use delaunay2d::geometry::traits::coordinate::CoordinateScalar;
///
/// fn widen<T: CoordinateScalar>(values: [T; 2]) -> [f64; 2] {
///     values.map(CoordinateScalar::into_f64)
/// }
///
/// assert_eq!(widen([0.5f32, 2.0]), [0.5, 2.0]);
/// ```
pub trait CoordinateScalar:
    Float + OrderedEq + HashCoordinate + Default + Debug + Send + Sync + 'static
{
    /// Returns the default comparison tolerance for this scalar type.
    fn default_tolerance() -> Self;

    /// Lossless widening to `f64`, the precision every predicate runs in.
    fn into_f64(self) -> f64;
}

impl CoordinateScalar for f32 {
    fn default_tolerance() -> Self {
        DEFAULT_TOLERANCE_F32
    }

    #[inline]
    fn into_f64(self) -> f64 {
        f64::from(self)
    }
}

impl CoordinateScalar for f64 {
    fn default_tolerance() -> Self {
        DEFAULT_TOLERANCE_F64
    }

    #[inline]
    fn into_f64(self) -> f64 {
        self
    }
}

// =============================================================================
// TESTS
// =============================================================================
