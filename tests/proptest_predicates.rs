//! Property-based tests for geometric predicates.
//!
//! This module uses proptest to verify properties of the planar predicates
//! that must hold for all inputs, including:
//! - Orientation sign flips under transposition and is invariant under rotation
//! - The fast and exact kernels agree away from degeneracy
//! - The lifted circle test agrees with the direct determinant
//! - Triangle vertices lie exactly on their own circumcircle
//! - The 3D orientation and in-sphere determinants are antisymmetric and
//!   vanish exactly on coplanar and cospherical input

use approx::assert_relative_eq;
use delaunay2d::geometry::kernel::{FastKernel, Kernel, RobustKernel};
use delaunay2d::geometry::point::Point;
use delaunay2d::geometry::predicates::{
    DEFAULT_LIFT_WEIGHT, InSphere, Orientation, in_circle, in_sphere, lifted_in_circle, orient_2d,
    orient_3d, strictly_between,
};
use delaunay2d::geometry::util::circumcenter;
use delaunay2d::geometry::vector::{Vector, Vector3};
use proptest::prelude::*;

// =============================================================================
// TEST CONFIGURATION
// =============================================================================

/// Strategy for generating finite f64 coordinates in a reasonable range
fn finite_coordinate() -> impl Strategy<Value = f64> {
    (-1000.0..1000.0).prop_filter("must be finite", |x: &f64| x.is_finite())
}

/// Strategy for generating 2D points
fn point_2d() -> impl Strategy<Value = Point> {
    prop::array::uniform2(finite_coordinate()).prop_map(Point::new)
}

/// Strategy for generating 2D points in a small box, where the circle
/// determinant stays well inside `f64` precision
fn small_point_2d() -> impl Strategy<Value = Point> {
    prop::array::uniform2(-10.0..10.0f64).prop_map(Point::new)
}

/// Strategy for generating 3D vectors with small integer coordinates, so
/// every determinant below is computed without rounding
fn integer_vector_3d(bound: i32) -> impl Strategy<Value = Vector3<f64>> {
    prop::array::uniform3(-bound..=bound).prop_map(|c| Vector::new(c.map(f64::from)))
}

/// Every transposition of `points`, in argument order.
fn transpositions<const N: usize>(
    points: [Vector3<f64>; N],
) -> Vec<((usize, usize), [Vector3<f64>; N])> {
    let mut swapped = Vec::new();
    for i in 0..N {
        for j in (i + 1)..N {
            let mut permuted = points;
            permuted.swap(i, j);
            swapped.push(((i, j), permuted));
        }
    }
    swapped
}

// =============================================================================
// ORIENTATION PROPERTY TESTS
// =============================================================================

proptest! {
    /// Property: Swapping two vertices flips the exact orientation sign.
    #[test]
    fn prop_orientation_sign_flip(a in point_2d(), b in point_2d(), c in point_2d()) {
        let kernel = RobustKernel::<f64>::new();
        let o1 = kernel.orientation(&a, &b, &c);
        let o2 = kernel.orientation(&a, &c, &b);
        match (o1, o2) {
            (Orientation::POSITIVE, Orientation::NEGATIVE)
            | (Orientation::NEGATIVE, Orientation::POSITIVE)
            | (Orientation::DEGENERATE, Orientation::DEGENERATE) => {}
            _ => prop_assert!(false, "Expected opposite orientations, got {:?} and {:?}", o1, o2),
        }
    }

    /// Property: Cyclic rotation preserves the exact orientation.
    #[test]
    fn prop_orientation_cyclic_invariance(a in point_2d(), b in point_2d(), c in point_2d()) {
        let kernel = RobustKernel::<f64>::new();
        let o = kernel.orientation(&a, &b, &c);
        prop_assert_eq!(o, kernel.orientation(&b, &c, &a));
        prop_assert_eq!(o, kernel.orientation(&c, &a, &b));
    }

    /// Property: A repeated vertex is always degenerate.
    #[test]
    fn prop_repeated_vertex_is_degenerate(a in point_2d(), b in point_2d()) {
        prop_assert_eq!(
            FastKernel::<f64>::new().orientation(&a, &a, &b),
            Orientation::DEGENERATE
        );
        prop_assert_eq!(
            RobustKernel::<f64>::new().orientation(&a, &b, &b),
            Orientation::DEGENERATE
        );
    }

    /// Property: Fast and exact orientation agree when the determinant is
    /// far from zero.
    #[test]
    fn prop_fast_and_robust_orientation_agree(a in point_2d(), b in point_2d(), c in point_2d()) {
        prop_assume!(orient_2d(&a, &b, &c).abs() > 1e-3);
        prop_assert_eq!(
            FastKernel::<f64>::new().orientation(&a, &b, &c),
            RobustKernel::<f64>::new().orientation(&a, &b, &c)
        );
    }
}

// =============================================================================
// CIRCLE PROPERTY TESTS
// =============================================================================

proptest! {
    /// Property: The lifted-paraboloid test matches the direct circle
    /// determinant in value.
    #[test]
    fn prop_lifted_matches_direct(
        a in small_point_2d(),
        b in small_point_2d(),
        c in small_point_2d(),
        d in small_point_2d(),
    ) {
        let direct = in_circle(&a, &b, &c, &d);
        let lifted = lifted_in_circle(&a, &b, &c, &d, DEFAULT_LIFT_WEIGHT);
        assert_relative_eq!(direct, lifted, epsilon = 1e-6, max_relative = 1e-6);
    }

    /// Property: Every vertex of a triangle lies exactly on its circumcircle.
    #[test]
    fn prop_vertices_on_own_circle(a in point_2d(), b in point_2d(), c in point_2d()) {
        let kernel = RobustKernel::<f64>::new();
        prop_assume!(kernel.orientation(&a, &b, &c) != Orientation::DEGENERATE);
        for p in [&a, &b, &c] {
            prop_assert_eq!(kernel.in_circle(&a, &b, &c, p), InSphere::BOUNDARY);
        }
    }

    /// Property: The circumcenter of a counter-clockwise triangle is inside
    /// its circumcircle.
    #[test]
    fn prop_circumcenter_is_inside(a in small_point_2d(), b in small_point_2d(), c in small_point_2d()) {
        let kernel = RobustKernel::<f64>::new();
        let (b, c) = match kernel.orientation(&a, &b, &c) {
            Orientation::POSITIVE => (b, c),
            Orientation::NEGATIVE => (c, b),
            Orientation::DEGENERATE => return Ok(()),
        };
        prop_assume!(orient_2d(&a, &b, &c) > 1e-3);
        let center = circumcenter(&a, &b, &c).unwrap();
        prop_assert_eq!(kernel.in_circle(&a, &b, &c, &center), InSphere::INSIDE);
    }

    /// Property: Swapping two vertices of the triangle flips the circle
    /// test for points off the circle.
    #[test]
    fn prop_in_circle_sign_flip(
        a in point_2d(),
        b in point_2d(),
        c in point_2d(),
        d in point_2d(),
    ) {
        let kernel = RobustKernel::<f64>::new();
        let r1 = kernel.in_circle(&a, &b, &c, &d);
        let r2 = kernel.in_circle(&b, &a, &c, &d);
        match (r1, r2) {
            (InSphere::INSIDE, InSphere::OUTSIDE)
            | (InSphere::OUTSIDE, InSphere::INSIDE)
            | (InSphere::BOUNDARY, InSphere::BOUNDARY) => {}
            _ => prop_assert!(false, "Expected opposite results, got {:?} and {:?}", r1, r2),
        }
    }
}

// =============================================================================
// BETWEENNESS PROPERTY TESTS
// =============================================================================

proptest! {
    /// Property: The midpoint of a segment is strictly between its ends and
    /// the ends are not.
    #[test]
    fn prop_midpoint_strictly_between(a in point_2d(), b in point_2d()) {
        let [ax, ay] = *a.coords();
        let [bx, by] = *b.coords();
        prop_assume!((ax - bx).abs() + (ay - by).abs() > 1e-3);
        let mid = Point::new([(ax + bx) / 2.0, (ay + by) / 2.0]);
        prop_assert!(strictly_between(&a, &b, &mid));
        prop_assert!(!strictly_between(&a, &b, &a));
        prop_assert!(!strictly_between(&a, &b, &b));
    }

    /// Property: Points beyond an endpoint are not between.
    #[test]
    fn prop_extension_not_between(a in small_point_2d(), b in small_point_2d(), t in 1.01..5.0f64) {
        let [ax, ay] = *a.coords();
        let [bx, by] = *b.coords();
        prop_assume!((ax - bx).abs() + (ay - by).abs() > 1e-3);
        let beyond = Point::new([ax + t * (bx - ax), ay + t * (by - ay)]);
        prop_assert!(!strictly_between(&a, &b, &beyond));
    }
}

// =============================================================================
// 3D DETERMINANT PROPERTY TESTS
// =============================================================================

proptest! {
    /// Property: Swapping any two arguments of `orient_3d` negates it.
    #[test]
    fn prop_orient_3d_antisymmetric(
        a in integer_vector_3d(20),
        b in integer_vector_3d(20),
        c in integer_vector_3d(20),
        d in integer_vector_3d(20),
    ) {
        let det = orient_3d(a, b, c, d);
        for ((i, j), [p, q, r, s]) in transpositions([a, b, c, d]) {
            prop_assert_eq!(orient_3d(p, q, r, s), -det, "swapping {} and {}", i, j);
        }
    }

    /// Property: Swapping any two arguments of `in_sphere`, the query point
    /// included, negates it.
    #[test]
    fn prop_in_sphere_antisymmetric(
        a in integer_vector_3d(10),
        b in integer_vector_3d(10),
        c in integer_vector_3d(10),
        d in integer_vector_3d(10),
        e in integer_vector_3d(10),
    ) {
        let det = in_sphere(a, b, c, d, e);
        for ((i, j), [p, q, r, s, t]) in transpositions([a, b, c, d, e]) {
            prop_assert_eq!(in_sphere(p, q, r, s, t), -det, "swapping {} and {}", i, j);
        }
    }

    /// Property: Four points on a common plane have zero orientation, and
    /// lifting one of them off the plane makes it non-zero.
    #[test]
    fn prop_orient_3d_zero_iff_coplanar(
        slope in prop::array::uniform3(-3i32..=3),
        xy in prop::array::uniform4(prop::array::uniform2(-10i32..=10)),
    ) {
        let [sx, sy, offset] = slope.map(f64::from);
        let [a, b, c, d] = xy.map(|[x, y]| {
            let (x, y) = (f64::from(x), f64::from(y));
            Vector::new([x, y, sx * x + sy * y + offset])
        });
        prop_assert_eq!(orient_3d(a, b, c, d), 0.0);

        let [pa, pb, pc] = [a, b, c].map(|v| {
            let [x, y, _] = v.to_array();
            Point::new([x, y])
        });
        prop_assume!(orient_2d(&pa, &pb, &pc) != 0.0);
        let lifted = d + Vector::new([0.0, 0.0, 1.0]);
        prop_assert_ne!(orient_3d(a, b, c, lifted), 0.0);
    }

    /// Property: Five points on a common sphere give a zero in-sphere
    /// determinant in any order.
    #[test]
    fn prop_in_sphere_zero_on_cospherical(
        center in integer_vector_3d(10),
        radius in 1i32..=10,
        axes in prop::sample::subsequence(
            vec![[1, 0, 0], [-1, 0, 0], [0, 1, 0], [0, -1, 0], [0, 0, 1], [0, 0, -1]],
            5,
        )
        .prop_shuffle(),
    ) {
        let r = f64::from(radius);
        let on_sphere: Vec<Vector3<f64>> = axes
            .iter()
            .map(|axis: &[i32; 3]| center + Vector::new(axis.map(|k| r * f64::from(k))))
            .collect();
        let [a, b, c, d, e] = on_sphere[..] else {
            unreachable!("subsequence yields five axis points");
        };
        prop_assert_eq!(in_sphere(a, b, c, d, e), 0.0);
    }
}
