//! Triangle views.
//!
//! Triangles are never stored; the store only knows directed edges and their
//! apexes. A [`Triangle`] is the value obtained by reading one edge and its
//! apex back out. Two triangles are equal when their vertex cycles are the
//! same up to rotation, so `(u, v, w)`, `(v, w, u)` and `(w, u, v)` compare
//! equal while `(u, w, v)` does not.

use crate::core::edge::Edge;
use crate::core::vertex::Vertex;
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::CoordinateScalar;
use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// Three vertices in cyclic order.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::triangle::Triangle;
/// use delaunay2d::core::vertex::Vertex;
/// use delaunay2d::geometry::point::Point;
///
/// let a = Vertex::from(Point::new([0.0, 0.0]));
/// let b = Vertex::from(Point::new([1.0, 0.0]));
/// let c = Vertex::from(Point::new([0.0, 1.0]));
/// assert_eq!(Triangle::new(a, b, c), Triangle::new(b, c, a));
/// assert_ne!(Triangle::new(a, b, c), Triangle::new(a, c, b));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Triangle<T = f64>
where
    T: CoordinateScalar,
{
    vertices: [Vertex<T>; 3],
}

impl<T> Triangle<T>
where
    T: CoordinateScalar,
{
    /// Creates the triangle `(u, v, w)`.
    #[inline]
    #[must_use]
    pub const fn new(u: Vertex<T>, v: Vertex<T>, w: Vertex<T>) -> Self {
        Self {
            vertices: [u, v, w],
        }
    }

    /// Creates a real triangle from three points.
    #[inline]
    #[must_use]
    pub const fn from_points(u: Point<T>, v: Point<T>, w: Point<T>) -> Self {
        Self::new(Vertex::Real(u), Vertex::Real(v), Vertex::Real(w))
    }

    /// The vertices in cyclic order.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> &[Vertex<T>; 3] {
        &self.vertices
    }

    /// The three directed edges `(u, v)`, `(v, w)`, `(w, u)`.
    #[must_use]
    pub fn edges(&self) -> [Edge<T>; 3] {
        let [u, v, w] = self.vertices;
        [Edge::new(u, v), Edge::new(v, w), Edge::new(w, u)]
    }

    /// The apex opposite each edge of [`Triangle::edges`], in the same order.
    #[must_use]
    pub fn edges_with_apex(&self) -> [(Edge<T>, Vertex<T>); 3] {
        let [u, v, w] = self.vertices;
        [
            (Edge::new(u, v), w),
            (Edge::new(v, w), u),
            (Edge::new(w, u), v),
        ]
    }

    /// Whether one of the vertices is the ghost.
    #[inline]
    #[must_use]
    pub fn is_ghost(&self) -> bool {
        self.vertices.iter().any(Vertex::is_ghost)
    }

    /// Whether `vertex` is one of the corners.
    #[inline]
    #[must_use]
    pub fn contains_vertex(&self, vertex: &Vertex<T>) -> bool {
        self.vertices.contains(vertex)
    }

    /// The three points of a real triangle, `None` for a ghost triangle.
    #[must_use]
    pub fn points(&self) -> Option<[Point<T>; 3]> {
        match self.vertices {
            [Vertex::Real(a), Vertex::Real(b), Vertex::Real(c)] => Some([a, b, c]),
            _ => None,
        }
    }

    /// For a ghost triangle, the real edge `(a, b)` such that the triangle is
    /// a rotation of `(a, b, Ghost)`.
    ///
    /// Returns `None` for real triangles and for malformed triangles with
    /// more than one ghost corner.
    #[must_use]
    pub fn ghost_edge(&self) -> Option<(Point<T>, Point<T>)> {
        match self.vertices {
            [Vertex::Real(a), Vertex::Real(b), Vertex::Ghost]
            | [Vertex::Real(b), Vertex::Ghost, Vertex::Real(a)]
            | [Vertex::Ghost, Vertex::Real(a), Vertex::Real(b)] => Some((a, b)),
            _ => None,
        }
    }

    /// Whether two corners coincide.
    #[must_use]
    pub fn has_repeated_vertex(&self) -> bool {
        let [u, v, w] = &self.vertices;
        u == v || v == w || w == u
    }

    /// The rotation of the vertex cycle that starts at the smallest vertex.
    #[must_use]
    pub fn canonical(&self) -> Self {
        let [u, v, w] = self.vertices;
        let start = if u <= v && u <= w {
            0
        } else if v <= w {
            1
        } else {
            2
        };
        let mut vertices = [u, v, w];
        vertices.rotate_left(start);
        Self { vertices }
    }
}

impl<T> PartialEq for Triangle<T>
where
    T: CoordinateScalar,
{
    fn eq(&self, other: &Self) -> bool {
        self.canonical().vertices == other.canonical().vertices
    }
}

impl<T> Eq for Triangle<T> where T: CoordinateScalar {}

impl<T> Hash for Triangle<T>
where
    T: CoordinateScalar,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().vertices.hash(state);
    }
}

impl<T> fmt::Display for Triangle<T>
where
    T: CoordinateScalar,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [u, v, w] = &self.vertices;
        write!(f, "[{u}, {v}, {w}]")
    }
}

// =============================================================================
// TESTS
// =============================================================================
