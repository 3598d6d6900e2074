//! Delaunay triangulation with incremental insertion.
//!
//! [`DelaunayTriangulation`] owns a [`Tds`], a [`Kernel`] and a
//! [`TriangulationConfig`], and keeps the mesh closed by ghost triangles
//! between insertions. Points arriving before three non-collinear ones are
//! known are held back and inserted as soon as the first triangle can be
//! seeded.

use crate::core::algorithms::incremental_insertion::{
    InsertionError, InsertionStatistics, insert_vertex,
};
use crate::core::algorithms::locate::{LocateError, locate};
use crate::core::boundary::{convex_hull, insert_ghost_triangles};
use crate::core::collections::{FastHashSet, fast_hash_set_with_capacity};
use crate::core::triangle::Triangle;
use crate::core::triangulation_data_structure::{
    Tds, TriangulationConstructionError, TriangulationValidationError,
};
use crate::core::util::delaunay_validation::{self, validate_topology};
use crate::core::vertex::Vertex;
use crate::geometry::kernel::{FastKernel, Kernel, RobustKernel};
use crate::geometry::point::Point;
use crate::geometry::predicates::{DEFAULT_LIFT_WEIGHT, Orientation};
use crate::geometry::traits::coordinate::CoordinateScalar;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Tunables for a [`DelaunayTriangulation`].
///
/// # Examples
///
/// ```rust
/// use delaunay2d::core::delaunay_triangulation::TriangulationConfigBuilder;
///
/// let config = TriangulationConfigBuilder::default()
///     .lift_weight(0.01)
///     .validate_after_insert(true)
///     .build()
///     .unwrap();
/// assert_eq!(config.lift_weight, 0.01);
/// assert!(config.validate_after_insert);
/// ```
#[derive(Builder, Clone, Copy, Debug, PartialEq)]
#[builder(default)]
pub struct TriangulationConfig {
    /// Paraboloid offset used by [`FastKernel`]'s circle test.
    pub lift_weight: f64,
    /// Run [`validate_topology`] after every insertion.
    pub validate_after_insert: bool,
}

impl Default for TriangulationConfig {
    fn default() -> Self {
        Self {
            lift_weight: DEFAULT_LIFT_WEIGHT,
            validate_after_insert: false,
        }
    }
}

// =============================================================================
// TRIANGULATION
// =============================================================================

/// Planar Delaunay triangulation built by incremental cavity digging.
///
/// # Type Parameters
/// - `K`: Geometric kernel supplying the orientation and circle predicates
///
/// # Delaunay Property Note
///
/// With [`FastKernel`] the predicates are plain floating point, so
/// near-cocircular input can produce a mesh that is structurally valid but
/// locally non-Delaunay. Use [`RobustKernel`] through
/// [`with_kernel`](Self::with_kernel) when exactness matters, and
/// [`validate_delaunay`](Self::validate_delaunay), which is always exact, to
/// check.
///
/// # Examples
///
/// ```rust
/// use delaunay2d::prelude::*;
///
/// let points = [
///     Point::new([0.0, 0.0]),
///     Point::new([1.0, 0.0]),
///     Point::new([0.0, 1.0]),
///     Point::new([1.0, 1.0]),
/// ];
/// let dt = DelaunayTriangulation::new(&points).unwrap();
/// assert_eq!(dt.number_of_vertices(), 4);
/// assert_eq!(dt.number_of_triangles(), 2);
/// assert_eq!(dt.convex_hull().len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct DelaunayTriangulation<K = FastKernel<f64>>
where
    K: Kernel,
{
    tds: Tds<K::Scalar>,
    kernel: K,
    config: TriangulationConfig,
    /// Every accepted vertex, meshed or pending.
    vertices: FastHashSet<Point<K::Scalar>>,
    /// Points accepted before the first triangle could be seeded.
    pending: Vec<Point<K::Scalar>>,
}

impl<T> DelaunayTriangulation<FastKernel<T>>
where
    T: CoordinateScalar,
{
    /// Triangulates `points` with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`with_kernel`](Self::with_kernel).
    pub fn new(points: &[Point<T>]) -> Result<Self, TriangulationConstructionError> {
        Self::with_config(points, TriangulationConfig::default())
    }

    /// Triangulates `points` with a [`FastKernel`] lifting by
    /// `config.lift_weight`.
    ///
    /// # Errors
    ///
    /// See [`with_kernel`](Self::with_kernel).
    pub fn with_config(
        points: &[Point<T>],
        config: TriangulationConfig,
    ) -> Result<Self, TriangulationConstructionError> {
        Self::with_kernel(points, FastKernel::with_lift_weight(config.lift_weight), config)
    }

    /// An empty triangulation to be filled with [`insert`](Self::insert).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use delaunay2d::prelude::*;
    ///
    /// let mut dt: DelaunayTriangulation = DelaunayTriangulation::empty();
    /// dt.insert(Point::new([0.0, 0.0])).unwrap();
    /// dt.insert(Point::new([1.0, 0.0])).unwrap();
    /// assert_eq!(dt.number_of_triangles(), 0);
    ///
    /// // Third non-collinear point seeds the mesh
    /// dt.insert(Point::new([0.0, 1.0])).unwrap();
    /// assert_eq!(dt.number_of_triangles(), 1);
    /// assert_eq!(dt.ghost_triangles().count(), 3);
    /// ```
    #[must_use]
    pub fn empty() -> Self {
        Self::empty_with_kernel(FastKernel::new(), TriangulationConfig::default())
    }
}

impl<K> DelaunayTriangulation<K>
where
    K: Kernel,
{
    /// An empty triangulation using `kernel`.
    #[must_use]
    pub fn empty_with_kernel(kernel: K, config: TriangulationConfig) -> Self {
        Self {
            tds: Tds::new(),
            kernel,
            config,
            vertices: FastHashSet::default(),
            pending: Vec::new(),
        }
    }

    /// Triangulates `points` using `kernel`.
    ///
    /// Exact duplicates are skipped with a warning. The first three
    /// non-collinear points seed a counter-clockwise triangle; every other
    /// point is then inserted in input order.
    ///
    /// # Errors
    ///
    /// - [`TriangulationConstructionError::InvalidVertex`] for a NaN or
    ///   infinite coordinate.
    /// - [`TriangulationConstructionError::InsufficientVertices`] for fewer
    ///   than three distinct points.
    /// - [`TriangulationConstructionError::GeometricDegeneracy`] if all points
    ///   are collinear.
    /// - [`TriangulationConstructionError::FailedToAddVertex`] if an insertion
    ///   fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use delaunay2d::prelude::*;
    ///
    /// let points = generate_random_points_seeded::<f64>(50, (-1.0, 1.0), 42).unwrap();
    /// let dt = DelaunayTriangulation::with_kernel(
    ///     &points,
    ///     RobustKernel::new(),
    ///     TriangulationConfig::default(),
    /// )
    /// .unwrap();
    /// assert!(dt.is_valid().is_ok());
    /// assert!(dt.validate_delaunay().is_ok());
    /// ```
    pub fn with_kernel(
        points: &[Point<K::Scalar>],
        kernel: K,
        config: TriangulationConfig,
    ) -> Result<Self, TriangulationConstructionError> {
        for (index, point) in points.iter().enumerate() {
            point
                .validate()
                .map_err(|source| TriangulationConstructionError::InvalidVertex { index, source })?;
        }

        let mut dt = Self::empty_with_kernel(kernel, config);
        dt.vertices = fast_hash_set_with_capacity(points.len());

        let mut skipped = 0usize;
        for point in points {
            match dt.insert(*point) {
                Ok(_) => {}
                Err(InsertionError::DuplicateVertex { .. }) => skipped += 1,
                Err(err) => {
                    return Err(TriangulationConstructionError::FailedToAddVertex {
                        message: format!("{point}: {err}"),
                    });
                }
            }
        }
        if skipped > 0 {
            tracing::warn!(skipped, "skipped duplicate input points");
        }

        if dt.vertices.len() < 3 {
            return Err(TriangulationConstructionError::InsufficientVertices {
                found: dt.vertices.len(),
            });
        }
        if !dt.pending.is_empty() {
            return Err(TriangulationConstructionError::GeometricDegeneracy {
                message: format!("all {} input points are collinear", dt.pending.len()),
            });
        }

        tracing::debug!(
            vertices = dt.number_of_vertices(),
            triangles = dt.number_of_triangles(),
            "constructed triangulation"
        );
        Ok(dt)
    }

    /// Inserts `point`.
    ///
    /// Until three non-collinear points are known, points are buffered and
    /// the returned statistics are empty. The insertion that completes the
    /// first triangle reports the seed triangle, its ghosts and every
    /// buffered point inserted after it.
    ///
    /// # Errors
    ///
    /// - [`InsertionError::InvalidVertex`] for a NaN or infinite coordinate.
    /// - [`InsertionError::DuplicateVertex`] if `point` is already a vertex.
    /// - [`InsertionError::Location`] or [`InsertionError::Tds`] if the mesh
    ///   invariants are broken.
    /// - [`InsertionError::Validation`] if `validate_after_insert` is set and
    ///   the mesh is invalid afterwards.
    ///
    /// On error the triangulation is left exactly as it was before the call,
    /// including any points still waiting for the first triangle.
    pub fn insert(&mut self, point: Point<K::Scalar>) -> Result<InsertionStatistics, InsertionError> {
        point.validate()?;
        if self.vertices.contains(&point) {
            return Err(InsertionError::DuplicateVertex {
                point: point.to_string(),
            });
        }

        let tds = self.tds.clone();
        let pending = self.pending.clone();
        self.vertices.insert(point);
        self.insert_accepted(point).inspect_err(|err| {
            tracing::warn!(%point, error = %err, "insertion failed, restoring previous mesh");
            self.tds = tds;
            self.pending = pending;
            self.vertices.remove(&point);
        })
    }

    fn insert_accepted(&mut self, point: Point<K::Scalar>) -> Result<InsertionStatistics, InsertionError> {
        let stats = if self.tds.is_empty() {
            self.pending.push(point);
            self.try_bootstrap()?
        } else {
            self.insert_into_mesh(&point)?
        };

        if self.config.validate_after_insert && !self.tds.is_empty() {
            validate_topology(&self.tds, &self.kernel)?;
        }
        Ok(stats)
    }

    fn insert_into_mesh(&mut self, point: &Point<K::Scalar>) -> Result<InsertionStatistics, InsertionError> {
        let conflict = locate(&self.tds, &self.kernel, point)?;
        insert_vertex(&mut self.tds, &self.kernel, point, &conflict)
    }

    /// Seeds the mesh from the first non-collinear triple in `pending`, then
    /// inserts the rest of `pending`.
    fn try_bootstrap(&mut self) -> Result<InsertionStatistics, InsertionError> {
        let Some((k, orientation)) = self.first_non_collinear() else {
            return Ok(InsertionStatistics::default());
        };

        let a = self.pending[0];
        let (b, c) = match orientation {
            Orientation::NEGATIVE => (self.pending[k], self.pending[1]),
            _ => (self.pending[1], self.pending[k]),
        };
        self.tds.add_triangle(a.into(), b.into(), c.into())?;
        let mut stats = InsertionStatistics {
            triangles_created: 1,
            ghost_triangles_added: insert_ghost_triangles(&mut self.tds)?,
            ..InsertionStatistics::default()
        };

        let rest: Vec<_> = self
            .pending
            .drain(..)
            .enumerate()
            .filter(|(i, _)| ![0, 1, k].contains(i))
            .map(|(_, p)| p)
            .collect();
        tracing::debug!(
            seed = %Triangle::from_points(a, b, c),
            deferred = rest.len(),
            "seeded triangulation"
        );
        for point in &rest {
            stats += self.insert_into_mesh(point)?;
        }
        Ok(stats)
    }

    /// Index `k >= 2` of the first pending point not collinear with the
    /// first two, and the orientation of `(pending[0], pending[1], pending[k])`.
    fn first_non_collinear(&self) -> Option<(usize, Orientation)> {
        let (a, b) = (self.pending.first()?, self.pending.get(1)?);
        self.pending
            .iter()
            .enumerate()
            .skip(2)
            .map(|(k, c)| (k, self.kernel.orientation(a, b, c)))
            .find(|(_, orientation)| *orientation != Orientation::DEGENERATE)
    }

    /// The triangle (possibly a ghost) whose conflict region contains `point`.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::EmptyTriangulation`] before the first triangle
    /// is seeded.
    pub fn locate(&self, point: &Point<K::Scalar>) -> Result<Triangle<K::Scalar>, LocateError> {
        locate(&self.tds, &self.kernel, point)
    }

    /// The underlying edge store.
    #[must_use]
    pub const fn tds(&self) -> &Tds<K::Scalar> {
        &self.tds
    }

    /// The predicate kernel.
    #[must_use]
    pub const fn kernel(&self) -> &K {
        &self.kernel
    }

    /// The configuration this triangulation was built with.
    #[must_use]
    pub const fn config(&self) -> &TriangulationConfig {
        &self.config
    }

    /// Accepted vertices, sorted lexicographically. Includes points still
    /// waiting for a seed triangle.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point<K::Scalar>> {
        let mut points: Vec<_> = self.vertices.iter().copied().collect();
        points.sort_unstable();
        points
    }

    /// Whether `point` is an accepted vertex.
    #[must_use]
    pub fn contains(&self, point: &Point<K::Scalar>) -> bool {
        self.vertices.contains(point)
    }

    /// Real triangles.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle<K::Scalar>> + '_ {
        self.tds.real_triangles()
    }

    /// Ghost triangles, one per convex hull edge.
    pub fn ghost_triangles(&self) -> impl Iterator<Item = Triangle<K::Scalar>> + '_ {
        self.tds.ghost_triangles()
    }

    /// Number of accepted vertices.
    #[must_use]
    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of real triangles.
    #[must_use]
    pub fn number_of_triangles(&self) -> usize {
        self.tds.number_of_real_triangles()
    }

    /// Convex hull vertices in counter-clockwise order, starting at the
    /// lexicographically smallest.
    #[must_use]
    pub fn convex_hull(&self) -> Vec<Point<K::Scalar>> {
        convex_hull(&self.tds)
    }

    /// Checks the structural invariants of the mesh.
    ///
    /// # Errors
    ///
    /// Returns the first violation found by [`validate_topology`].
    pub fn is_valid(&self) -> Result<(), TriangulationValidationError> {
        validate_topology(&self.tds, &self.kernel)
    }

    /// Checks structure and the empty-circumcircle property.
    ///
    /// The circle tests are exact ([`RobustKernel`]) whatever kernel built
    /// the mesh, so cocircular vertices are never reported.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation, or
    /// [`TriangulationValidationError::DelaunayViolation`].
    pub fn validate_delaunay(&self) -> Result<(), TriangulationValidationError> {
        self.is_valid()?;
        delaunay_validation::validate_delaunay(&self.tds, &RobustKernel::<K::Scalar>::new())
    }

    /// Whether `vertex` is a corner of the mesh. Pending points are not.
    #[must_use]
    pub fn is_meshed(&self, vertex: &Vertex<K::Scalar>) -> bool {
        self.tds.contains_vertex(vertex)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::predicates::InSphere;
    use crate::geometry::util::generate_random_points_seeded;

    fn p(x: f64, y: f64) -> Point {
        Point::new([x, y])
    }

    /// Exact predicates, except that `target` reports itself left of every
    /// edge it is not collinear with. Every ghost half-plane then claims it,
    /// which makes the cavity wrap the whole mesh and the dig collide with
    /// itself.
    #[derive(Clone, Debug)]
    struct LopsidedKernel {
        exact: RobustKernel<f64>,
        target: Point,
    }

    impl LopsidedKernel {
        fn new(target: Point) -> Self {
            Self {
                exact: RobustKernel::new(),
                target,
            }
        }
    }

    impl Kernel for LopsidedKernel {
        type Scalar = f64;

        fn orientation(&self, a: &Point, b: &Point, c: &Point) -> Orientation {
            match self.exact.orientation(a, b, c) {
                Orientation::NEGATIVE if *c == self.target => Orientation::POSITIVE,
                orientation => orientation,
            }
        }

        fn in_circle(&self, a: &Point, b: &Point, c: &Point, d: &Point) -> InSphere {
            self.exact.in_circle(a, b, c, d)
        }
    }

    fn assert_vertices_in_sync<K: Kernel>(dt: &DelaunayTriangulation<K>) {
        assert_eq!(
            dt.number_of_vertices(),
            dt.tds().vertices().len() + dt.pending.len()
        );
        for point in dt.tds().vertices() {
            assert!(dt.contains(&point));
        }
    }

    // =============================================================================
    // CONFIGURATION
    // =============================================================================

    #[test]
    fn config_defaults() {
        let config = TriangulationConfigBuilder::default().build().unwrap();
        assert_eq!(config, TriangulationConfig::default());
        assert!((config.lift_weight - DEFAULT_LIFT_WEIGHT).abs() < f64::EPSILON);
        assert!(!config.validate_after_insert);
    }

    #[test]
    fn config_weight_reaches_kernel() {
        let config = TriangulationConfigBuilder::default()
            .lift_weight(0.5)
            .build()
            .unwrap();
        let dt = DelaunayTriangulation::with_config(&[p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)], config)
            .unwrap();
        assert!((dt.kernel().lift_weight() - 0.5).abs() < f64::EPSILON);
        assert_eq!(dt.config(), &config);
    }

    // =============================================================================
    // CONSTRUCTION
    // =============================================================================

    #[test]
    fn three_points_make_one_triangle_and_three_ghosts() {
        // Clockwise input is reoriented
        let dt = DelaunayTriangulation::new(&[p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0)]).unwrap();
        assert_eq!(dt.number_of_triangles(), 1);
        assert_eq!(dt.ghost_triangles().count(), 3);
        assert!(dt.is_valid().is_ok());
        assert_eq!(dt.convex_hull(), vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)]);
    }

    #[test]
    fn collinear_prefix_is_deferred() {
        let points = [p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0), p(3.0, 0.0), p(1.0, 1.0)];
        let dt = DelaunayTriangulation::new(&points).unwrap();
        assert_eq!(dt.number_of_vertices(), 5);
        assert_eq!(dt.number_of_triangles(), 3);
        assert!(dt.validate_delaunay().is_ok());
        for point in &points {
            assert!(dt.is_meshed(&Vertex::Real(*point)));
        }
    }

    #[test]
    fn duplicates_are_skipped_on_construction() {
        let points = [p(0.0, 0.0), p(1.0, 0.0), p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0)];
        let dt = DelaunayTriangulation::new(&points).unwrap();
        assert_eq!(dt.number_of_vertices(), 3);
        assert_eq!(dt.number_of_triangles(), 1);
    }

    #[test]
    fn construction_errors() {
        assert!(matches!(
            DelaunayTriangulation::new(&[p(0.0, 0.0), p(1.0, 0.0), p(0.0, 0.0)]),
            Err(TriangulationConstructionError::InsufficientVertices { found: 2 })
        ));
        assert!(matches!(
            DelaunayTriangulation::new(&[p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0), p(3.0, 3.0)]),
            Err(TriangulationConstructionError::GeometricDegeneracy { .. })
        ));
        assert!(matches!(
            DelaunayTriangulation::new(&[p(0.0, 0.0), p(1.0, 0.0), p(f64::NAN, 1.0)]),
            Err(TriangulationConstructionError::InvalidVertex { index: 2, .. })
        ));
    }

    // =============================================================================
    // INSERTION
    // =============================================================================

    #[test]
    fn insert_rejects_duplicates_and_non_finite() {
        let mut dt = DelaunayTriangulation::new(&[p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)]).unwrap();
        assert!(matches!(
            dt.insert(p(1.0, 0.0)),
            Err(InsertionError::DuplicateVertex { .. })
        ));
        assert!(matches!(
            dt.insert(p(f64::INFINITY, 0.0)),
            Err(InsertionError::InvalidVertex(_))
        ));
        assert_eq!(dt.number_of_vertices(), 3);
        assert!(dt.is_valid().is_ok());
    }

    #[test]
    fn bootstrap_statistics() {
        let mut dt: DelaunayTriangulation = DelaunayTriangulation::empty();
        assert_eq!(dt.insert(p(0.0, 0.0)).unwrap(), InsertionStatistics::default());
        assert_eq!(dt.insert(p(2.0, 0.0)).unwrap(), InsertionStatistics::default());
        assert_eq!(dt.insert(p(1.0, 0.0)).unwrap(), InsertionStatistics::default());
        assert!(matches!(dt.locate(&p(0.5, 0.5)), Err(LocateError::EmptyTriangulation)));

        let stats = dt.insert(p(1.0, 1.0)).unwrap();
        assert_eq!(
            stats.triangles_created + stats.ghost_triangles_added,
            stats.triangles_removed + 6
        );
        assert_eq!(dt.number_of_triangles(), 2);
        assert_eq!(dt.ghost_triangles().count(), 4);
        assert!(dt.validate_delaunay().is_ok());
    }

    #[test]
    fn outside_point_extends_hull() {
        let mut dt = DelaunayTriangulation::new(&[p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)]).unwrap();
        dt.insert(p(2.0, 2.0)).unwrap();
        assert_eq!(dt.number_of_triangles(), 2);
        assert_eq!(dt.convex_hull().len(), 4);
        assert!(dt.validate_delaunay().is_ok());
    }

    #[test]
    fn validate_after_insert_keeps_mesh_valid() {
        let config = TriangulationConfigBuilder::default()
            .validate_after_insert(true)
            .build()
            .unwrap();
        let points = generate_random_points_seeded::<f64>(40, (-5.0, 5.0), 3).unwrap();
        let dt = DelaunayTriangulation::with_config(&points, config).unwrap();
        assert_eq!(dt.number_of_vertices(), 40);
        assert!(dt.is_valid().is_ok());
    }

    #[test]
    fn failed_insert_restores_mesh() {
        let target = p(1.0, 1.0);
        let mut dt = DelaunayTriangulation::with_kernel(
            &[p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0)],
            LopsidedKernel::new(target),
            TriangulationConfig::default(),
        )
        .unwrap();
        let before: FastHashSet<_> = dt.tds().triangles().collect();

        assert!(matches!(dt.insert(target), Err(InsertionError::Tds(_))));
        assert!(dt.is_valid().is_ok());
        assert!(!dt.contains(&target));
        assert_eq!(dt.number_of_vertices(), 3);
        assert_eq!(dt.tds().triangles().collect::<FastHashSet<_>>(), before);
        assert_vertices_in_sync(&dt);

        // The restored mesh keeps accepting points
        dt.insert(p(3.0, 3.0)).unwrap();
        assert_eq!(dt.number_of_vertices(), 4);
        assert_eq!(dt.number_of_triangles(), 2);
        assert!(dt.validate_delaunay().is_ok());
        assert_vertices_in_sync(&dt);
    }

    #[test]
    fn failed_bootstrap_keeps_pending_points() {
        let target = p(2.0, 0.0);
        let mut dt = DelaunayTriangulation::empty_with_kernel(
            LopsidedKernel::new(target),
            TriangulationConfig::default(),
        );
        for point in [p(0.0, 0.0), p(4.0, 0.0), target] {
            dt.insert(point).unwrap();
        }
        assert_eq!(dt.pending.len(), 3);

        // Seeds (0,0), (4,0), (0,4), then fails on the deferred target
        let apex = p(0.0, 4.0);
        for _ in 0..2 {
            assert!(matches!(dt.insert(apex), Err(InsertionError::Tds(_))));
            assert!(dt.tds().is_empty());
            assert!(!dt.contains(&apex));
            assert_eq!(dt.pending, vec![p(0.0, 0.0), p(4.0, 0.0), target]);
            assert_vertices_in_sync(&dt);
        }

        // With honest predicates the same points mesh normally
        dt.kernel.target = p(100.0, 100.0);
        dt.insert(apex).unwrap();
        assert_eq!(dt.number_of_vertices(), 4);
        assert_eq!(dt.number_of_triangles(), 2);
        assert!(dt.is_meshed(&Vertex::Real(target)));
        assert!(dt.validate_delaunay().is_ok());
        assert_vertices_in_sync(&dt);
    }

    #[test]
    fn default_kernel_grids_validate_as_delaunay() {
        for n in 4..=8 {
            let grid: Vec<_> = (0..n)
                .flat_map(|i| (0..n).map(move |j| p(f64::from(i), f64::from(j))))
                .collect();
            let dt = DelaunayTriangulation::new(&grid).unwrap();
            let side = usize::try_from(n - 1).unwrap();
            assert_eq!(dt.number_of_triangles(), 2 * side * side, "{n}x{n} grid");
            assert!(dt.validate_delaunay().is_ok(), "{n}x{n} grid");
        }
    }

    #[test]
    fn robust_kernel_triangulation_is_delaunay() {
        let points = generate_random_points_seeded::<f64>(100, (0.0, 1.0), 11).unwrap();
        let dt = DelaunayTriangulation::with_kernel(
            &points,
            RobustKernel::new(),
            TriangulationConfig::default(),
        )
        .unwrap();
        assert!(dt.validate_delaunay().is_ok());

        // Euler with ghosts closing the sphere: T = 2V - 4 over V + 1 vertices
        let all = dt.tds().number_of_triangles();
        assert_eq!(all, 2 * (dt.number_of_vertices() + 1) - 4);
        assert_eq!(
            dt.number_of_triangles(),
            2 * dt.number_of_vertices() - 2 - dt.convex_hull().len()
        );
    }
}
