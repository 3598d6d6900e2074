//! Directed-edge triangulation data structure.
//!
//! This module provides the [`Tds`] (Triangulation Data Structure), a planar
//! triangle mesh stored as a single map from directed edge to apex vertex.
//! A triangle `(u, v, w)` is registered as the three entries
//!
//! ```text
//! (u, v) → w     (v, w) → u     (w, u) → v
//! ```
//!
//! and has no identity beyond those entries. The design follows the
//! edge-map representation of Shewchuk's *Triangle*: adjacency is implicit,
//! because the triangle on the other side of `(u, v)` is whatever is stored
//! under `(v, u)`.
//!
//! # Topological Invariants
//!
//! - **I1, unique edges**: every directed edge belongs to at most one
//!   triangle. [`Tds::add_triangle`] enforces this before mutating.
//! - **I2, paired edges**: two triangles sharing `{u, v}` store `(u, v)` and
//!   `(v, u)`, each with its own apex. An edge without a stored reverse is a
//!   boundary edge; once ghost triangles are materialized there are none.
//! - **I3, orientation**: every real triangle is counter-clockwise. The store
//!   does not evaluate geometry, so this is the caller's responsibility; it
//!   is checked by [`validate_topology`](crate::core::util::delaunay_validation::validate_topology).
//!
//! Triangles are only ever added or removed whole, so the three entries of a
//! triangle are always present together.
//!
//! # Examples
//!
//! ```rust
//! use delaunay2d::core::triangulation_data_structure::{Tds, TdsError};
//! use delaunay2d::core::vertex::Vertex;
//! use delaunay2d::geometry::point::Point;
//!
//! let a = Vertex::from(Point::new([0.0, 0.0]));
//! let b = Vertex::from(Point::new([1.0, 0.0]));
//! let c = Vertex::from(Point::new([1.0, 1.0]));
//!
//! let mut tds = Tds::new();
//! tds.add_triangle(a, b, c).unwrap();
//! assert_eq!(tds.adjacent(a, b), Some(c));
//! assert_eq!(tds.adjacent(b, a), None);
//!
//! // A second triangle on the same directed edge is rejected
//! let d = Vertex::from(Point::new([0.0, -1.0]));
//! assert!(matches!(
//!     tds.add_triangle(a, b, d),
//!     Err(TdsError::DuplicateEdge { .. })
//! ));
//!
//! tds.delete_triangle(b, c, a).unwrap();
//! assert!(tds.is_empty());
//! ```

#![forbid(unsafe_code)]

use crate::core::collections::{FastHashMap, fast_hash_map_with_capacity};
use crate::core::edge::Edge;
use crate::core::triangle::Triangle;
use crate::core::vertex::Vertex;
use crate::geometry::point::Point;
use crate::geometry::traits::coordinate::{CoordinateScalar, CoordinateValidationError};
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised by [`Tds`] mutations.
///
/// Every failing mutation leaves the store unchanged.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TdsError {
    /// The directed edge is already claimed by another triangle.
    #[error("Triangulation already contains edge {edge}")]
    DuplicateEdge {
        /// The conflicting edge, formatted.
        edge: String,
    },
    /// The directed edge is not present.
    #[error("Triangulation does not contain edge {edge}")]
    MissingEdge {
        /// The missing edge, formatted.
        edge: String,
    },
    /// The edge is present but belongs to a different triangle.
    #[error("Edge {edge} has apex {found}, expected {expected}")]
    ApexMismatch {
        /// The edge, formatted.
        edge: String,
        /// The apex the caller's triangle implies.
        expected: String,
        /// The apex actually stored.
        found: String,
    },
    /// Two corners of the triangle are the same vertex.
    #[error("Degenerate triangle {triangle}: repeated vertex")]
    DegenerateTriangle {
        /// The triangle, formatted.
        triangle: String,
    },
}

/// Errors that can occur during triangulation construction.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TriangulationConstructionError {
    /// Fewer than three distinct points were supplied.
    #[error("Insufficient vertices for 2D triangulation: found {found}, need at least 3")]
    InsufficientVertices {
        /// Number of distinct points found.
        found: usize,
    },
    /// All supplied points are collinear.
    #[error("Geometric degeneracy encountered during construction: {message}")]
    GeometricDegeneracy {
        /// Description of the degeneracy issue.
        message: String,
    },
    /// An input point has a NaN or infinite coordinate.
    #[error("Invalid vertex at input index {index}: {source}")]
    InvalidVertex {
        /// Position of the point in the input slice.
        index: usize,
        /// The underlying coordinate error.
        source: CoordinateValidationError,
    },
    /// Failed to add vertex during triangulation construction.
    #[error("Failed to add vertex during construction: {message}")]
    FailedToAddVertex {
        /// Description of the vertex addition failure.
        message: String,
    },
    /// Validation error during construction.
    #[error("Validation error during construction: {0}")]
    ValidationError(#[from] TriangulationValidationError),
}

/// Errors reported by triangulation invariant checks.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TriangulationValidationError {
    /// Following an edge to its apex does not close a three-edge cycle.
    #[error("Open triangle cycle at edge {edge}: {message}")]
    OpenTriangleCycle {
        /// The edge where the cycle breaks, formatted.
        edge: String,
        /// Description of the break.
        message: String,
    },
    /// A stored triangle repeats a vertex or has more than one ghost corner.
    #[error("Degenerate triangle {triangle}")]
    DegenerateTriangle {
        /// The triangle, formatted.
        triangle: String,
    },
    /// A real triangle is not counter-clockwise.
    #[error("Triangle {triangle} has orientation {orientation}, expected POSITIVE")]
    InvalidOrientation {
        /// The triangle, formatted.
        triangle: String,
        /// The orientation found.
        orientation: String,
    },
    /// An edge has no reverse although ghost triangles have been materialized.
    #[error("Edge {edge} has no reverse edge; boundary is not closed by ghost triangles")]
    OpenBoundary {
        /// The unpaired edge, formatted.
        edge: String,
    },
    /// The triangulation violates the Delaunay empty circumcircle property.
    #[error("Delaunay invariant violated: {message}")]
    DelaunayViolation {
        /// Human-readable description of the Delaunay violation(s).
        message: String,
    },
}

// =============================================================================
// TDS
// =============================================================================

/// A planar triangle mesh keyed by directed edges.
///
/// Vertices are coordinate values; two equal points are the same vertex. The
/// store accepts any triangle whose edges are free, including ghost
/// triangles; geometric validity is the caller's concern.
#[derive(Clone, Debug)]
pub struct Tds<T = f64>
where
    T: CoordinateScalar,
{
    edges: FastHashMap<Edge<T>, Vertex<T>>,
}

impl<T> Default for Tds<T>
where
    T: CoordinateScalar,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tds<T>
where
    T: CoordinateScalar,
{
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            edges: FastHashMap::default(),
        }
    }

    /// Creates an empty store with room for about `triangles` triangles.
    #[must_use]
    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            edges: fast_hash_map_with_capacity(triangles.saturating_mul(3)),
        }
    }

    /// Creates a store holding the single triangle `(u, v, w)`.
    ///
    /// # Errors
    ///
    /// Returns [`TdsError::DegenerateTriangle`] if two corners coincide.
    pub fn seeded(u: Vertex<T>, v: Vertex<T>, w: Vertex<T>) -> Result<Self, TdsError> {
        let mut tds = Self::with_capacity(1);
        tds.add_triangle(u, v, w)?;
        Ok(tds)
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Registers the triangle `(u, v, w)`.
    ///
    /// All three edges are checked before anything is inserted, so a failed
    /// call leaves the store untouched. Orientation is not checked.
    ///
    /// # Errors
    ///
    /// - [`TdsError::DegenerateTriangle`] if two corners coincide.
    /// - [`TdsError::DuplicateEdge`] naming the first of `(u, v)`, `(v, w)`,
    ///   `(w, u)` already present.
    pub fn add_triangle(&mut self, u: Vertex<T>, v: Vertex<T>, w: Vertex<T>) -> Result<(), TdsError> {
        let triangle = Triangle::new(u, v, w);
        if triangle.has_repeated_vertex() {
            return Err(TdsError::DegenerateTriangle {
                triangle: triangle.to_string(),
            });
        }

        let entries = triangle.edges_with_apex();
        if let Some((edge, _)) = entries.iter().find(|(edge, _)| self.edges.contains_key(edge)) {
            return Err(TdsError::DuplicateEdge {
                edge: edge.to_string(),
            });
        }

        self.edges.extend(entries);
        Ok(())
    }

    /// Removes the triangle `(u, v, w)`.
    ///
    /// Any rotation of the stored cycle is accepted. The call is atomic: all
    /// three edges are verified before any is removed.
    ///
    /// # Errors
    ///
    /// - [`TdsError::MissingEdge`] if one of the edges is absent.
    /// - [`TdsError::ApexMismatch`] if an edge is present but belongs to a
    ///   different triangle.
    pub fn delete_triangle(&mut self, u: Vertex<T>, v: Vertex<T>, w: Vertex<T>) -> Result<(), TdsError> {
        let entries = Triangle::new(u, v, w).edges_with_apex();
        for (edge, apex) in &entries {
            match self.edges.get(edge) {
                None => {
                    return Err(TdsError::MissingEdge {
                        edge: edge.to_string(),
                    });
                }
                Some(found) if found != apex => {
                    return Err(TdsError::ApexMismatch {
                        edge: edge.to_string(),
                        expected: apex.to_string(),
                        found: found.to_string(),
                    });
                }
                Some(_) => {}
            }
        }

        for (edge, _) in &entries {
            self.edges.remove(edge);
        }
        Ok(())
    }

    /// Removes every triangle.
    pub fn clear(&mut self) {
        self.edges.clear();
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// The apex of the triangle owning the directed edge `(u, v)`.
    ///
    /// `None` when no triangle lies to the left of `u → v`.
    #[inline]
    #[must_use]
    pub fn adjacent(&self, u: Vertex<T>, v: Vertex<T>) -> Option<Vertex<T>> {
        self.edges.get(&Edge::from((u, v))).copied()
    }

    /// Whether the directed edge `(u, v)` is stored.
    #[inline]
    #[must_use]
    pub fn contains_edge(&self, u: Vertex<T>, v: Vertex<T>) -> bool {
        self.edges.contains_key(&Edge::from((u, v)))
    }

    /// Whether `(u, v)` is stored but `(v, u)` is not.
    #[must_use]
    pub fn is_boundary_edge(&self, u: Vertex<T>, v: Vertex<T>) -> bool {
        let edge = Edge::from((u, v));
        self.edges.contains_key(&edge) && !self.edges.contains_key(&edge.reversed())
    }

    /// Whether any edge of the triangle `(u, v, w)` lacks a neighbour across it.
    #[must_use]
    pub fn has_boundary(&self, u: Vertex<T>, v: Vertex<T>, w: Vertex<T>) -> bool {
        !self.contains_edge(v, u) || !self.contains_edge(w, v) || !self.contains_edge(u, w)
    }

    /// Whether `vertex` is a corner of some stored triangle.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &Vertex<T>) -> bool {
        self.edges.keys().any(|edge| edge.origin() == *vertex)
    }

    /// Every stored directed edge with its apex, in unspecified order.
    pub fn edges(&self) -> impl Iterator<Item = (Edge<T>, Vertex<T>)> + '_ {
        self.edges.iter().map(|(edge, apex)| (*edge, *apex))
    }

    /// Every stored triangle exactly once, ghost triangles included.
    ///
    /// Each triangle is reported in its canonical rotation, starting at its
    /// smallest vertex.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle<T>> + '_ {
        self.edges.iter().filter_map(|(edge, apex)| {
            let triangle = Triangle::new(edge.origin(), edge.destination(), *apex);
            (triangle.canonical().vertices()[0] == edge.origin()).then_some(triangle)
        })
    }

    /// Stored triangles with three real corners.
    pub fn real_triangles(&self) -> impl Iterator<Item = Triangle<T>> + '_ {
        self.triangles().filter(|t| !t.is_ghost())
    }

    /// Stored triangles with a ghost corner.
    pub fn ghost_triangles(&self) -> impl Iterator<Item = Triangle<T>> + '_ {
        self.triangles().filter(Triangle::is_ghost)
    }

    /// Distinct real vertex coordinates, sorted lexicographically.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point<T>> {
        let mut points: Vec<Point<T>> = self
            .edges
            .keys()
            .filter_map(|edge| edge.origin().point().copied())
            .collect();
        points.sort_unstable();
        points.dedup();
        points
    }

    /// Number of stored directed edges.
    #[inline]
    #[must_use]
    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// Number of stored triangles, ghost triangles included.
    #[inline]
    #[must_use]
    pub fn number_of_triangles(&self) -> usize {
        self.edges.len() / 3
    }

    /// Number of stored triangles with three real corners.
    #[must_use]
    pub fn number_of_real_triangles(&self) -> usize {
        self.real_triangles().count()
    }

    /// Number of distinct real vertices.
    #[must_use]
    pub fn number_of_vertices(&self) -> usize {
        self.vertices().len()
    }

    /// Whether the store holds no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
