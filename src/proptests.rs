#![allow(clippy::float_cmp)]

use approx::assert_abs_diff_eq;
use proptest::prelude::*;

use crate::geometry::{BBox3, Engulf};
use crate::math::{Mat3, Mat3x4, Vec3, Vector};

fn coord() -> impl Strategy<Value = f64> {
    -100.0..100.0_f64
}

fn vec3() -> impl Strategy<Value = Vec3<f64>> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn bbox3() -> impl Strategy<Value = BBox3<f64>> {
    (vec3(), vec3()).prop_map(|(a, b)| BBox3::from_points([a, b]))
}

fn mat3() -> impl Strategy<Value = Mat3<f64>> {
    let small = || (-10.0..10.0_f64, -10.0..10.0_f64, -10.0..10.0_f64);
    (small(), small(), small()).prop_map(|(a, b, c)| {
        Mat3::from_cols(
            Vec3::new(a.0, a.1, a.2),
            Vec3::new(b.0, b.1, b.2),
            Vec3::new(c.0, c.1, c.2),
        )
    })
}

proptest! {
    #[test]
    fn dot_commutes(a in vec3(), b in vec3()) {
        prop_assert_eq!(a.dot(&b).to_bits(), b.dot(&a).to_bits());
    }

    #[test]
    fn cross_anticommutes(a in vec3(), b in vec3()) {
        prop_assert_eq!(a.cross(&b), -b.cross(&a));
    }

    #[test]
    fn cross_is_orthogonal_to_its_operands(a in vec3(), b in vec3()) {
        let c = a.cross(&b);
        let scale = a.length() * b.length() * (a.length() + b.length()) + 1.0;
        assert_abs_diff_eq!(c.dot(&a) / scale, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.dot(&b) / scale, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn length_is_root_of_self_dot(a in vec3()) {
        prop_assert_eq!(a.length(), a.dot(&a).sqrt());
    }

    #[test]
    fn normalize_gives_unit_length(a in vec3()) {
        prop_assume!(a.length() > 1e-6);
        assert_abs_diff_eq!(a.normalize().length(), 1.0, epsilon = 1e-12);
        prop_assert!(a.try_normalize().is_ok());
    }

    #[test]
    fn inverse_undoes_the_matrix(m in mat3()) {
        prop_assume!(m.determinant().abs() > 1.0);
        let id = Mat3::identity();
        for (p, q) in (m * m.inverse()).as_slice().iter().zip(id.as_slice()) {
            assert_abs_diff_eq!(*p, *q, epsilon = 1e-9);
        }
        for (p, q) in (m.inverse() * m).as_slice().iter().zip(id.as_slice()) {
            assert_abs_diff_eq!(*p, *q, epsilon = 1e-9);
        }
    }

    #[test]
    fn product_matches_column_application(m in mat3(), n in mat3(), x in vec3()) {
        let lhs = (m * n) * x;
        let rhs = m * (n * x);
        for k in 0..3 {
            assert_abs_diff_eq!(lhs[k], rhs[k], epsilon = 1e-6);
        }
    }

    #[test]
    fn overlap_is_symmetric(a in bbox3(), b in bbox3()) {
        prop_assert_eq!(a.is_overlapping(&b), b.is_overlapping(&a));
        prop_assert_eq!(a.is_not_overlapping(&b), !a.is_overlapping(&b));
    }

    #[test]
    fn containment_is_reflexive_and_implies_overlap(a in bbox3(), margin in 0.0..10.0_f64) {
        prop_assert!(a.contains(&a));
        let g = a.grown(margin);
        prop_assert!(g.contains(&a));
        prop_assert!(g.is_overlapping(&a));
    }

    #[test]
    fn engulfing_the_empty_box_collapses_onto_the_point(p in vec3()) {
        let b = BBox3::empty().engulfed(p);
        prop_assert_eq!(b.min, p);
        prop_assert_eq!(b.max, p);
        prop_assert!(b.is_not_empty());
    }

    #[test]
    fn from_points_is_componentwise_extremes(points in prop::collection::vec(vec3(), 1..16)) {
        let b = BBox3::from_points(points.iter().copied());
        for k in 0..3 {
            let lo = points.iter().map(|p| p[k]).fold(f64::INFINITY, f64::min);
            let hi = points.iter().map(|p| p[k]).fold(f64::NEG_INFINITY, f64::max);
            prop_assert_eq!(b.min[k], lo);
            prop_assert_eq!(b.max[k], hi);
        }
        for p in &points {
            prop_assert!(b.contains(&BBox3::from_point(*p)));
        }
    }

    #[test]
    fn transformed_box_covers_every_mapped_corner(
        a in bbox3(),
        m in mat3(),
        t in vec3(),
    ) {
        let affine = Mat3x4::from_linear_translation(&m, t);
        let image = a.transformed(&affine);
        for c in a.corners() {
            let p = affine.transform_point(&c);
            prop_assert!(image.contains(&BBox3::from_point(p)));
        }
    }

    #[test]
    fn identity_transform_keeps_any_box(a in bbox3()) {
        prop_assert_eq!(a.transformed(&Mat3x4::identity()), a);
    }
}
