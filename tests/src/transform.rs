#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    use lanetrace::math::{
        transforms::{rotation, rotation_x, rotation_y, rotation_z, scale, translation, uniform_scale},
        Bounds3, Matrix4x4, Normal, Point3, Ray, Transform, Vec3,
    };

    // Simple cases thrown at the implementation to catch obvious typos

    #[test]
    fn new() {
        let md = [
            [2.0, 0.0, 0.0, 1.0],
            [0.0, 4.0, 0.0, 2.0],
            [0.0, 0.0, 8.0, 3.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        let m = Matrix4x4::new(md);
        let t = Transform::new(md).expect("affine transform is invertible");
        assert_eq!(t.m(), &m);
        assert_eq!(Some(*t.m_inv()), m.inverted());
        assert_eq!(Transform::new_m(m), Some(t));

        // Singular
        assert!(Transform::new([[0.0; 4]; 4]).is_none());
    }

    #[test]
    fn default() {
        let t = Transform::<f32>::default();
        assert!(t.is_identity());
        assert_eq!(t, Transform::identity());
    }

    #[test]
    fn inverted() {
        let t = translation(Vec3::new(1.0, 2.0, 3.0));
        let ti = t.inverted();
        assert_eq!(t.m(), ti.m_inv());
        assert_eq!(t.m_inv(), ti.m());
        assert_eq!(&ti * Point3::new(1.0, 2.0, 3.0), Point3::zeros());
    }

    #[test]
    fn swaps_handedness() {
        assert!(!Transform::<f32>::identity().swaps_handedness());
        let t = Transform::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
        .expect("permutation is invertible");
        assert!(t.swaps_handedness());
        assert!(scale(1.0, 1.0, -1.0).expect("non-zero scale").swaps_handedness());
    }

    #[test]
    fn uniform_scale_detection() {
        assert!(Transform::<f64>::identity().has_uniform_scale());
        assert!(translation(Vec3::new(5.0, -1.0, 2.0)).has_uniform_scale());
        assert!(rotation(0.7, Vec3::new(1.0, 2.0, 3.0)).has_uniform_scale());
        assert!(uniform_scale(3.0).expect("non-zero scale").has_uniform_scale());
        let rotated_scaled = &rotation_y(0.3) * &uniform_scale(2.0).expect("non-zero scale");
        assert!(rotated_scaled.has_uniform_scale());

        assert!(!scale(1.0, 2.0, 1.0).expect("non-zero scale").has_uniform_scale());
        let shear = Transform::new([
            [1.0, 0.5, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
        .expect("shear is invertible");
        assert!(!shear.has_uniform_scale());
    }

    #[test]
    fn mul_transform() {
        let a = translation(Vec3::new(1.0, 0.0, 0.0));
        let b = scale(2.0, 2.0, 2.0).expect("non-zero scale");
        // Scale first, then translate
        let ab = &a * &b;
        assert_eq!(&ab * Point3::new(1.0, 1.0, 1.0), Point3::new(3.0, 2.0, 2.0));
        let round_trip = &ab.inverted() * &ab;
        assert_abs_diff_eq!(*round_trip.m(), Matrix4x4::identity());
    }

    #[test]
    fn mul_point_vec() {
        let t = translation(Vec3::new(1.0, 2.0, 3.0));
        // Points move, vectors don't
        assert_eq!(&t * Point3::new(1.0, 1.0, 1.0), Point3::new(2.0, 3.0, 4.0));
        assert_eq!(&t * Vec3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 1.0, 1.0));

        let t = Transform::new([
            [16.0, 11.0, 6.0, 13.0],
            [12.0, 15.0, 10.0, 9.0],
            [8.0, 7.0, 14.0, 5.0],
            [4.0, 3.0, 2.0, 1.0],
        ])
        .expect("projective matrix is invertible");
        assert_eq!(&t * Vec3::new(17.0, 18.0, 19.0), Vec3::new(584.0, 664.0, 528.0));
        assert_eq!(
            &t * Point3::new(17.0, 18.0, 19.0),
            Point3::new(597.0, 673.0, 533.0) / 161.0
        );
    }

    #[test]
    fn mul_normal() {
        // Normals stay perpendicular to transformed surfaces under non-uniform scale
        let t = scale(1.0, 4.0, 1.0).expect("non-zero scale");
        let tangent = Vec3::new(1.0, 1.0, 0.0);
        let n = Normal::new(1.0, -1.0, 0.0);
        assert_eq!(n.dot_v(tangent), 0.0);
        assert_abs_diff_eq!((&t * n).dot_v(&t * tangent), 0.0);
        assert_eq!(&t * n, Normal::new(1.0, -0.25, 0.0));
    }

    #[test]
    fn mul_ray() {
        let t = translation(Vec3::new(0.0, 0.0, 5.0));
        let r = Ray::new(Point3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
        let rt = &t * r;
        assert_eq!(rt.o, Point3::new(1.0, 0.0, 5.0));
        // The direction isn't normalized so distances carry over
        assert_eq!(rt.d, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(&t * r.point(3.0), rt.point(3.0));
    }

    #[test]
    fn mul_bounds() {
        let b = Bounds3::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        let t = translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(
            &t * b,
            Bounds3::new(Point3::new(0.0, 1.0, 2.0), Point3::new(2.0, 3.0, 4.0))
        );

        let r = rotation_z(std::f64::consts::FRAC_PI_4);
        let rb = &r * b;
        let s = 2.0f64.sqrt();
        assert_abs_diff_eq!(
            rb,
            Bounds3::new(Point3::new(-s, -s, -1.0), Point3::new(s, s, 1.0)),
            epsilon = 1e-12
        );

        assert!((&t * Bounds3::<f64>::empty()).is_empty());
        assert_eq!(&t * Bounds3::<f64>::infinite(), Bounds3::infinite());
    }

    #[test]
    fn translation_scale() {
        let t = translation(Vec3::new(1.0, -2.0, 3.0));
        assert_eq!(t.m().col(3), [1.0, -2.0, 3.0, 1.0]);
        assert_eq!(t.m_inv().col(3), [-1.0, 2.0, -3.0, 1.0]);

        let s = scale(2.0, 4.0, 8.0).expect("non-zero scale");
        assert_eq!(&s * Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 4.0, 8.0));
        assert_eq!(&s.inverted() * Vec3::new(2.0, 4.0, 8.0), Vec3::new(1.0, 1.0, 1.0));

        assert!(scale(1.0, 0.0, 1.0).is_none());
        assert!(uniform_scale(0.0f32).is_none());
    }

    #[test]
    fn rotations() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = Vec3::new(0.0, 0.0, 1.0);
        assert_abs_diff_eq!(&rotation_x(FRAC_PI_2) * y, z, epsilon = 1e-12);
        assert_abs_diff_eq!(&rotation_y(FRAC_PI_2) * z, x, epsilon = 1e-12);
        assert_abs_diff_eq!(&rotation_z(FRAC_PI_2) * x, y, epsilon = 1e-12);

        // The general form agrees with the axis specific ones
        for (axis, specific) in [(x, rotation_x(0.4)), (y, rotation_y(0.4)), (z, rotation_z(0.4))] {
            assert_abs_diff_eq!(rotation(0.4, axis).m(), specific.m(), epsilon = 1e-12);
        }
        // Axis length doesn't matter
        assert_abs_diff_eq!(
            rotation(0.4, z * 3.0).m(),
            rotation_z(0.4).m(),
            epsilon = 1e-12
        );

        // Inverse is the transpose
        let r = rotation(1.1, Vec3::new(1.0, -1.0, 2.0));
        assert_eq!(r.m_inv(), &r.m().transposed());
        let round_trip = &r * &r.inverted();
        assert_abs_diff_eq!(*round_trip.m(), Matrix4x4::identity(), epsilon = 1e-12);
    }
}
