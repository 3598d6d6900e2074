//! Mesh vertices.
//!
//! A mesh vertex is either a real point in the plane or the single ghost
//! vertex that closes every boundary edge of the triangulation. The ghost is
//! a distinct variant rather than a sentinel coordinate, so it can never
//! collide with an input point.
//!
//! # Examples
//!
//! ```rust
//! use delaunay2d::core::vertex::Vertex;
//! use delaunay2d::geometry::point::Point;
//!
//! let v: Vertex = Vertex::from(Point::new([1.0, 2.0]));
//! assert!(v.is_real());
//! assert_eq!(v.point(), Some(&Point::new([1.0, 2.0])));
//! assert!(Vertex::<f64>::Ghost.is_ghost());
//! ```

#![forbid(unsafe_code)]

use crate::geometry::{point::Point, traits::coordinate::CoordinateScalar};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

/// A vertex of the triangulation: a real point or the ghost vertex.
#[derive(Clone, Copy, Debug)]
pub enum Vertex<T = f64>
where
    T: CoordinateScalar,
{
    /// A point of the input set.
    Real(Point<T>),
    /// The vertex "at infinity" shared by all ghost triangles.
    Ghost,
}

impl<T> Vertex<T>
where
    T: CoordinateScalar,
{
    /// Whether this is the ghost vertex.
    #[inline]
    #[must_use]
    pub const fn is_ghost(&self) -> bool {
        matches!(self, Self::Ghost)
    }

    /// Whether this is a real vertex.
    #[inline]
    #[must_use]
    pub const fn is_real(&self) -> bool {
        matches!(self, Self::Real(_))
    }

    /// The point of a real vertex, `None` for the ghost.
    #[inline]
    #[must_use]
    pub const fn point(&self) -> Option<&Point<T>> {
        match self {
            Self::Real(p) => Some(p),
            Self::Ghost => None,
        }
    }
}

impl<T> From<Point<T>> for Vertex<T>
where
    T: CoordinateScalar,
{
    #[inline]
    fn from(point: Point<T>) -> Self {
        Self::Real(point)
    }
}

impl<T> PartialEq for Vertex<T>
where
    T: CoordinateScalar,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Real(a), Self::Real(b)) => a == b,
            (Self::Ghost, Self::Ghost) => true,
            _ => false,
        }
    }
}

impl<T> Eq for Vertex<T> where T: CoordinateScalar {}

impl<T> Hash for Vertex<T>
where
    T: CoordinateScalar,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Real(p) => {
                0u8.hash(state);
                p.hash(state);
            }
            Self::Ghost => 1u8.hash(state),
        }
    }
}

// Real vertices order by point; the ghost sorts after all of them.
impl<T> Ord for Vertex<T>
where
    T: CoordinateScalar,
{
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Real(a), Self::Real(b)) => a.cmp(b),
            (Self::Real(_), Self::Ghost) => Ordering::Less,
            (Self::Ghost, Self::Real(_)) => Ordering::Greater,
            (Self::Ghost, Self::Ghost) => Ordering::Equal,
        }
    }
}

impl<T> PartialOrd for Vertex<T>
where
    T: CoordinateScalar,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> fmt::Display for Vertex<T>
where
    T: CoordinateScalar,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(p) => write!(f, "{p}"),
            Self::Ghost => write!(f, "ghost"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::collections::FastHashSet;

    #[test]
    fn ghost_is_distinct_from_every_point() {
        let ghost = Vertex::<f64>::Ghost;
        for coords in [[0.0, 0.0], [f64::MAX, f64::MAX], [f64::NAN, f64::NAN]] {
            assert_ne!(Vertex::Real(Point::new(coords)), ghost);
        }
        assert_eq!(ghost, Vertex::Ghost);
        assert_eq!(ghost.point(), None);
    }

    #[test]
    fn vertices_hash_by_value() {
        let mut set = FastHashSet::default();
        set.insert(Vertex::Real(Point::new([1.0, 2.0])));
        set.insert(Vertex::Real(Point::new([1.0, 2.0])));
        set.insert(Vertex::Ghost);
        set.insert(Vertex::Ghost);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn ghost_sorts_last() {
        let mut vertices = vec![
            Vertex::Ghost,
            Vertex::Real(Point::new([5.0, 5.0])),
            Vertex::Real(Point::new([-1.0, 0.0])),
        ];
        vertices.sort();
        assert_eq!(vertices[0], Vertex::Real(Point::new([-1.0, 0.0])));
        assert_eq!(vertices[2], Vertex::Ghost);
    }

    #[test]
    fn vertex_display() {
        assert_eq!(Vertex::Real(Point::new([1.0, 2.0])).to_string(), "(1.0, 2.0)");
        assert_eq!(Vertex::<f32>::Ghost.to_string(), "ghost");
    }
}
