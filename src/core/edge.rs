//! Directed edges, the storage key of the triangulation.
//!
//! Every triangle `(u, v, w)` registers its three directed edges `(u, v)`,
//! `(v, w)` and `(w, u)`. Reversing an edge yields the key under which the
//! neighbouring triangle across it is stored, so adjacency needs no extra
//! bookkeeping.

use crate::core::vertex::Vertex;
use crate::geometry::traits::coordinate::CoordinateScalar;
use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// An ordered pair of vertices.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::edge::Edge;
/// use delaunay2d::core::vertex::Vertex;
/// use delaunay2d::geometry::point::Point;
///
/// let a = Vertex::from(Point::new([0.0, 0.0]));
/// let b = Vertex::from(Point::new([1.0, 0.0]));
/// let edge = Edge::new(a, b);
/// assert_eq!(edge.reversed(), Edge::new(b, a));
/// assert_ne!(edge, edge.reversed());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Edge<T = f64>
where
    T: CoordinateScalar,
{
    origin: Vertex<T>,
    destination: Vertex<T>,
}

impl<T> Edge<T>
where
    T: CoordinateScalar,
{
    /// Creates the directed edge `origin → destination`.
    #[inline]
    #[must_use]
    pub const fn new(origin: Vertex<T>, destination: Vertex<T>) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Start vertex.
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> Vertex<T> {
        self.origin
    }

    /// End vertex.
    #[inline]
    #[must_use]
    pub const fn destination(&self) -> Vertex<T> {
        self.destination
    }

    /// The same edge traversed the other way.
    #[inline]
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self::new(self.destination, self.origin)
    }

    /// Whether either endpoint is the ghost vertex.
    #[inline]
    #[must_use]
    pub const fn touches_ghost(&self) -> bool {
        self.origin.is_ghost() || self.destination.is_ghost()
    }
}

impl<T> PartialEq for Edge<T>
where
    T: CoordinateScalar,
{
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.destination == other.destination
    }
}

impl<T> Eq for Edge<T> where T: CoordinateScalar {}

impl<T> Hash for Edge<T>
where
    T: CoordinateScalar,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.origin.hash(state);
        self.destination.hash(state);
    }
}

impl<T> From<(Vertex<T>, Vertex<T>)> for Edge<T>
where
    T: CoordinateScalar,
{
    #[inline]
    fn from((origin, destination): (Vertex<T>, Vertex<T>)) -> Self {
        Self::new(origin, destination)
    }
}

impl<T> fmt::Display for Edge<T>
where
    T: CoordinateScalar,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}
