#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne};

    use lanetrace::math::{vec2, vec3, vec4, Normal, Point3, Vec2, Vec3, Vec4};

    // The component-wise surface comes from one macro so Vec2 stands in for the
    // others where the behavior doesn't depend on the length.

    #[test]
    fn new() {
        let v = Vec2::new(0.0, 1.0);
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 1.0);
        assert_eq!(vec2(0.0, 1.0), v);

        let v = Vec3::new(0.0, 1.0, 2.0);
        assert_eq!((v.x, v.y, v.z), (0.0, 1.0, 2.0));
        assert_eq!(vec3(0.0, 1.0, 2.0), v);

        let v = Vec4::new(0.0f32, 1.0, 2.0, 3.0);
        assert_eq!((v.x, v.y, v.z, v.w), (0.0, 1.0, 2.0, 3.0));
        assert_eq!(vec4(0.0, 1.0, 2.0, 3.0), v);
    }

    #[test]
    fn zeros_ones() {
        assert_eq!(Vec2::zeros(), Vec2::new(0, 0));
        assert_eq!(Vec3::zeros(), Vec3::new(0, 0, 0));
        assert_eq!(Vec4::ones(), Vec4::new(1, 1, 1, 1));
    }

    #[test]
    fn has_nans() {
        // NaN components are constructible, the lane code depends on it
        assert!(!Vec3::new(0.0f32, 0.0, 0.0).has_nans());
        assert!(Vec3::new(f32::NAN, 0.0, 0.0).has_nans());
        assert!(Vec3::new(0.0, f32::NAN, 0.0).has_nans());
        assert!(Vec3::new(0.0, 0.0, f32::NAN).has_nans());
        assert!(vec2(0.0, f64::NAN).has_nans());
    }

    #[test]
    fn is_finite() {
        assert!(Vec3::new(1.0f32, 2.0, 3.0).is_finite());
        assert!(!Vec3::new(1.0, f32::INFINITY, 3.0).is_finite());
        assert!(!Vec3::new(1.0, 2.0, f32::NAN).is_finite());
    }

    #[test]
    fn dot() {
        assert_eq!(Vec2::new(2, 3).dot(Vec2::new(4, 5)), 2 * 4 + 3 * 5);
        assert_eq!(
            Vec3::new(2, 3, 4).dot(Vec3::new(5, 6, 7)),
            2 * 5 + 3 * 6 + 4 * 7
        );
        assert_eq!(
            Vec4::new(2, 3, 4, 5).dot(Vec4::new(6, 7, 8, 9)),
            2 * 6 + 3 * 7 + 4 * 8 + 5 * 9
        );
        assert_eq!(
            Vec3::new(2.0, 3.0, 4.0).dot_n(Normal::new(5.0, 6.0, 7.0)),
            2.0 * 5.0 + 3.0 * 6.0 + 4.0 * 7.0
        );
    }

    #[test]
    fn cross() {
        assert_eq!(
            Vec3::new(2.0, 3.0, 4.0).cross(Vec3::new(5.0, 6.0, -7.0)),
            Vec3::new(-45.0, 34.0, -3.0)
        );
        // Right handed
        assert_eq!(
            Vec3::new(1.0, 0.0, 0.0).cross(Vec3::new(0.0, 1.0, 0.0)),
            Vec3::new(0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn len() {
        assert_eq!(Vec3::new(2, 3, 4).len_sqr(), 2 * 2 + 3 * 3 + 4 * 4);
        assert_abs_diff_eq!(
            Vec3::new(2.0, 3.0, 4.0).len(),
            (2.0f32 * 2.0f32 + 3.0f32 * 3.0f32 + 4.0f32 * 4.0f32).sqrt()
        );
    }

    #[test]
    fn normalized() {
        assert_abs_diff_eq!(Vec3::new(1.0f32, 1.0, 1.0).normalized().len(), 1.0);
        assert_abs_diff_eq!(Vec3::new(0.0, 3.0, 0.0).normalized(), Vec3::new(0.0, 1.0, 0.0));
        // Zero vectors turn into NaNs instead of panicking
        assert!(Vec3::<f32>::zeros().normalized().has_nans());
    }

    #[test]
    fn recip() {
        assert_eq!(Vec3::new(2.0, 4.0, -0.5).recip(), Vec3::new(0.5, 0.25, -2.0));
        let r = Vec3::new(0.0f32, -0.0, 1.0).recip();
        assert_eq!(r.x, f32::INFINITY);
        assert_eq!(r.y, f32::NEG_INFINITY);
    }

    #[test]
    fn min_max() {
        let a = Vec3::new(0, 2, 4);
        let b = Vec3::new(3, 1, 5);
        assert_eq!(a.min(b), Vec3::new(0, 1, 4));
        assert_eq!(a.max(b), Vec3::new(3, 2, 5));
        assert_eq!(a.min(b), b.min(a));

        assert_eq!(Vec3::new(0.0, 1.0, 2.0).min_comp(), 0.0);
        assert_eq!(Vec3::new(0.0, 1.0, 2.0).max_comp(), 2.0);
        assert_eq!(Vec3::new(0.0, 1.0, 2.0).max_dimension(), 2);
        assert_eq!(Vec3::new(0.0, 3.0, 2.0).max_dimension(), 1);
        assert_eq!(Vec2::new(1.0, 0.0).max_dimension(), 0);
    }

    #[test]
    fn from() {
        assert_eq!(Vec2::from(2), Vec2::new(2, 2));
        assert_eq!(Vec3::from(2), Vec3::new(2, 2, 2));
        assert_eq!(Vec3::from(Normal::new(1.0, 2.0, 3.0)), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec3::from(Point3::new(1.0, 2.0, 3.0)), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec4::new(1, 2, 3, 4).xyz(), Vec3::new(1, 2, 3));
    }

    #[test]
    fn index() {
        let mut v = Vec3::new(0.0, 1.0, 2.0);
        assert_eq!(v[0], v.x);
        assert_eq!(v[1], v.y);
        assert_eq!(v[2], v.z);
        v[1] = 5.0;
        assert_eq!(v.y, 5.0);
        assert_eq!(v.to_array(), [0.0, 5.0, 2.0]);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let v = Vec3::new(0.0, 1.0, 2.0);
        let _ = v[3];
    }

    #[test]
    fn ops() {
        assert_eq!(-Vec3::new(1, 2, 3), Vec3::new(-1, -2, -3));
        assert_eq!(Vec3::new(1, 2, 3) + Vec3::new(4, 6, 7), Vec3::new(5, 8, 10));
        assert_eq!(Vec3::new(7, 7, 7) - Vec3::new(1, 2, 3), Vec3::new(6, 5, 4));
        assert_eq!(Vec3::new(2, 3, 4) * 5, Vec3::new(10, 15, 20));
        assert_eq!(Vec3::new(10, 15, 20) / 5, Vec3::new(2, 3, 4));
        assert_eq!(
            Vec3::new(1, 2, 3).mul_elem(Vec3::new(4, 5, 6)),
            Vec3::new(4, 10, 18)
        );

        let mut v = Vec2::new(1, 2);
        v += Vec2::new(4, 6);
        assert_eq!(v, Vec2::new(5, 8));
        v -= Vec2::new(1, 2);
        assert_eq!(v, Vec2::new(4, 6));
        v *= 2;
        assert_eq!(v, Vec2::new(8, 12));
        v /= 4;
        assert_eq!(v, Vec2::new(2, 3));
    }

    #[test]
    fn abs_diff_eq() {
        assert_abs_diff_eq!(&Vec2::<f32>::zeros(), &Vec2::<f32>::zeros());
        assert_abs_diff_ne!(&Vec2::<f32>::zeros(), &Vec2::<f32>::ones());

        // Should fail on diff in any coordinate if no epsilon is given
        assert_abs_diff_ne!(&Vec2::new(0.0, 1.0), &Vec2::zeros());
        assert_abs_diff_ne!(&Vec2::new(1.0, 0.0), &Vec2::zeros());

        assert_abs_diff_eq!(&Vec2::new(1.0, 1.0), &Vec2::zeros(), epsilon = 1.0);
    }

    #[test]
    fn relative_eq() {
        assert_relative_eq!(&Vec3::<f64>::zeros(), &Vec3::<f64>::zeros());
        assert_relative_ne!(&Vec3::<f64>::zeros(), &Vec3::<f64>::ones());

        assert_relative_eq!(
            &Vec2::new(2.0, 2.0),
            &Vec2::ones(),
            epsilon = 0.0,
            max_relative = 0.5
        );
    }
}
