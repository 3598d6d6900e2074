//! Fixed-size vectors.
//!
//! Small, stack-allocated vectors used to build predicate matrices. All
//! operations return new values; nothing allocates.

#![forbid(unsafe_code)]

use num_traits::Float;
use std::ops::{Add, Div, Index, Sub};

/// A vector of `N` scalars.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::geometry::vector::Vector;
///
/// let a = Vector::new([1.0, 2.0, 3.0]);
/// let b = Vector::new([4.0, 5.0, 6.0]);
/// assert_eq!((b - a).to_array(), [3.0, 3.0, 3.0]);
/// assert_eq!(a.dot(&b), 32.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<T, const N: usize> {
    components: [T; N],
}

/// Two-component vector.
pub type Vector2<T> = Vector<T, 2>;
/// Three-component vector.
pub type Vector3<T> = Vector<T, 3>;
/// Four-component vector.
pub type Vector4<T> = Vector<T, 4>;

impl<T, const N: usize> Vector<T, N>
where
    T: Float,
{
    /// Creates a vector from its components.
    #[inline]
    #[must_use]
    pub const fn new(components: [T; N]) -> Self {
        Self { components }
    }

    /// The zero vector.
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self {
            components: [T::zero(); N],
        }
    }

    /// Returns the components.
    #[inline]
    #[must_use]
    pub const fn to_array(&self) -> [T; N] {
        self.components
    }

    /// Dot product.
    #[inline]
    #[must_use]
    pub fn dot(&self, other: &Self) -> T {
        self.components
            .iter()
            .zip(other.components.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Squared Euclidean length, `self · self`.
    #[inline]
    #[must_use]
    pub fn squared_norm(&self) -> T {
        self.dot(self)
    }

    /// Divides every component by `scalar`.
    ///
    /// Division by zero follows IEEE semantics and yields non-finite components.
    #[inline]
    #[must_use]
    pub fn div_scalar(&self, scalar: T) -> Self {
        Self {
            components: self.components.map(|c| c / scalar),
        }
    }

    #[inline]
    fn zip_map(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        let mut components = self.components;
        for (c, &o) in components.iter_mut().zip(other.components.iter()) {
            *c = f(*c, o);
        }
        Self { components }
    }
}

impl<T> Vector<T, 2>
where
    T: Float,
{
    /// Extends a 2D vector with a third component, e.g. the paraboloid
    /// height of a lifted point.
    #[inline]
    #[must_use]
    pub const fn extend2(&self, z: T) -> Vector<T, 3> {
        Vector::new([self.components[0], self.components[1], z])
    }
}

impl<T> Vector<T, 3>
where
    T: Float,
{
    /// Extends a 3D vector with a fourth component.
    #[inline]
    #[must_use]
    pub const fn extend3(&self, w: T) -> Vector<T, 4> {
        Vector::new([
            self.components[0],
            self.components[1],
            self.components[2],
            w,
        ])
    }
}

impl<T, const N: usize> Sub for Vector<T, N>
where
    T: Float,
{
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a - b)
    }
}

impl<T, const N: usize> Add for Vector<T, N>
where
    T: Float,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl<T, const N: usize> Div<T> for Vector<T, N>
where
    T: Float,
{
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        self.div_scalar(rhs)
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.components[index]
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N>
where
    T: Float,
{
    #[inline]
    fn from(components: [T; N]) -> Self {
        Self::new(components)
    }
}

// =============================================================================
// TESTS
// =============================================================================
