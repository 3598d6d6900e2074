//! # delaunay2d
//!
//! This is a library for computing the Delaunay triangulation of a set of
//! points in the plane by incremental insertion.
//!
//! The mesh is stored as a map from directed edges to the apex of the triangle
//! on their left, so a triangle `(u, v, w)` is the three entries
//! `(u, v) → w`, `(v, w) → u` and `(w, u) → v`. The outside of the convex hull
//! is covered by ghost triangles meeting at a single vertex at infinity, so
//! every edge has a triangle on both sides and inserting a point outside the
//! hull is no different from inserting one inside it.
//!
//! # Features
//!
//! - Bowyer-Watson insertion by recursive cavity digging
//! - Ghost triangles closing the convex hull
//! - Pluggable predicate kernels: a fast floating-point one and an exact one
//!   backed by the `robust` crate
//! - Generic floating-point coordinate types (`f32`, `f64`)
//! - Structural and Delaunay property validation
//!
//! # Basic Usage
//!
//! ```rust
//! use delaunay2d::prelude::*;
//!
//! let points = vec![
//!     Point::new([0.0, 0.0]),
//!     Point::new([4.0, 0.0]),
//!     Point::new([0.0, 4.0]),
//!     Point::new([4.0, 4.0]),
//!     Point::new([1.5, 2.0]), // Inserted inside the hull
//! ];
//!
//! let dt = DelaunayTriangulation::new(&points).unwrap();
//!
//! assert_eq!(dt.number_of_vertices(), 5);
//! assert_eq!(dt.number_of_triangles(), 4);
//! assert_eq!(dt.ghost_triangles().count(), 4); // One per hull edge
//! assert!(dt.validate_delaunay().is_ok());
//! ```
//!
//! # Incremental Construction
//!
//! ```rust
//! use delaunay2d::prelude::*;
//!
//! let mut dt: DelaunayTriangulation = DelaunayTriangulation::empty();
//! for point in generate_random_points_seeded::<f64>(25, (-10.0, 10.0), 1).unwrap() {
//!     dt.insert(point).unwrap();
//! }
//! assert_eq!(dt.number_of_vertices(), 25);
//! assert!(dt.is_valid().is_ok());
//!
//! // Inserting an existing vertex is an error, not a no-op
//! let first = dt.vertices()[0];
//! assert!(dt.insert(first).is_err());
//! ```
//!
//! # Choosing a Kernel
//!
//! [`FastKernel`](geometry::kernel::FastKernel) evaluates the circle test as
//! an orientation of points lifted onto a paraboloid, in plain `f64`. It is
//! the default. [`RobustKernel`](geometry::kernel::RobustKernel) uses
//! adaptive exact arithmetic and never misclassifies near-degenerate input:
//!
//! ```rust
//! use delaunay2d::prelude::*;
//!
//! // Points on a circle are as cocircular as it gets
//! let points: Vec<Point> = (0..16)
//!     .map(|i| {
//!         let angle = f64::from(i) * std::f64::consts::TAU / 16.0;
//!         Point::new([angle.cos(), angle.sin()])
//!     })
//!     .collect();
//!
//! let dt = DelaunayTriangulation::with_kernel(
//!     &points,
//!     RobustKernel::new(),
//!     TriangulationConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(dt.number_of_triangles(), 14);
//! assert!(dt.validate_delaunay().is_ok());
//! ```
//!
//! # Logging
//!
//! The library emits [`tracing`](https://docs.rs/tracing) events: `trace!`
//! for every cavity step, `debug!` per insertion, and `warn!` for validation
//! failures and skipped duplicate input. Install a subscriber to see them.

// Forbid unsafe code throughout the entire crate
#![forbid(unsafe_code)]

#[macro_use]
extern crate derive_builder;

/// The `core` module contains the mesh data structures and the insertion
/// algorithm.
///
/// It includes the directed-edge store [`Tds`](core::triangulation_data_structure::Tds),
/// the [`Vertex`](core::vertex::Vertex), [`Edge`](core::edge::Edge) and
/// [`Triangle`](core::triangle::Triangle) views over it, ghost-triangle
/// boundary management, and the [`DelaunayTriangulation`](core::delaunay_triangulation::DelaunayTriangulation)
/// front end.
pub mod core {
    /// Triangulation algorithms for construction and querying
    pub mod algorithms {
        /// Cavity-digging insertion
        pub mod incremental_insertion;
        /// Point location by conflict test
        pub mod locate;
    }
    /// Ghost triangles and the convex hull
    pub mod boundary;
    /// High-performance collection types optimized for computational geometry
    pub mod collections;
    /// Delaunay triangulation front end with incremental insertion
    pub mod delaunay_triangulation;
    pub mod edge;
    pub mod triangle;
    pub mod triangulation_data_structure;
    /// Validation helpers
    pub mod util {
        pub mod delaunay_validation;
        pub use delaunay_validation::*;
    }
    pub mod vertex;
    // Re-export the `core` modules.
    pub use delaunay_triangulation::*;
    pub use edge::*;
    pub use triangle::*;
    pub use triangulation_data_structure::*;
    pub use util::*;
    pub use vertex::*;
    // Note: collections module not re-exported here to avoid namespace pollution
    // Import specific types via prelude or use crate::core::collections::
}

/// Contains geometric types including the `Point` struct, the vector and
/// matrix algebra behind the predicates, and the predicate kernels.
///
/// Coordinates are abstracted by the `CoordinateScalar` trait, which provides
/// generic floating-point support (`f32`, `f64`) with NaN-aware equality,
/// ordering, hashing and validation.
pub mod geometry {
    /// Geometric kernel abstraction (CGAL-style)
    pub mod kernel;
    pub mod matrix;
    pub mod point;
    pub mod predicates;
    /// Geometric utility functions: circumcircles, angles and random points
    pub mod util;
    pub mod vector;
    /// Traits module containing coordinate abstractions.
    ///
    /// This module contains the `CoordinateScalar` trait and supporting
    /// traits for equality comparison (`OrderedEq`) and hashing
    /// (`HashCoordinate`) of floating-point coordinate values.
    pub mod traits {
        pub mod coordinate;
        pub use coordinate::*;
    }
    pub use kernel::*;
    pub use matrix::*;
    pub use point::*;
    pub use predicates::*;
    pub use traits::*;
    pub use util::*;
    pub use vector::*;
}

/// A prelude module that re-exports commonly used types.
/// This makes it easier to import the most commonly used items from the crate.
pub mod prelude {
    // Re-export from core
    pub use crate::core::{
        algorithms::{incremental_insertion::*, locate::*},
        boundary::*,
        delaunay_triangulation::*,
        edge::*,
        triangle::*,
        triangulation_data_structure::*,
        util::*,
        vertex::*,
    };

    // Re-export commonly used collection types from core::collections
    pub use crate::core::collections::{
        FastHashMap, FastHashSet, SmallBuffer, fast_hash_map_with_capacity,
        fast_hash_set_with_capacity,
    };

    // Re-export from geometry
    pub use crate::geometry::{
        kernel::*, matrix::*, point::*, predicates::*, traits::coordinate::*, util::*, vector::*,
    };
}

/// The function `is_normal` checks that structs implement `auto` traits.
/// Traits are checked at compile time, so this function is only used for
/// testing.
#[must_use]
pub const fn is_normal<T: Sized + Send + Sync + Unpin>() -> bool {
    true
}

// =============================================================================
// TESTS
// =============================================================================
