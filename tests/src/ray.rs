#[cfg(test)]
mod tests {
    use lanetrace::math::{point3, vec3, Point3, Ray};

    #[test]
    fn new() {
        let o = point3(1.0, 2.0, 3.0);
        let d = vec3(4.0, 5.0, 6.0);
        let r = Ray::new(o, d);
        assert_eq!(r.o, o);
        // Kept as given, never normalized
        assert_eq!(r.d, d);
    }

    #[test]
    fn default() {
        let r = Ray::<f32>::default();
        assert_eq!(r.o, Point3::zeros());
        assert_eq!(r.d, vec3(0.0, 1.0, 0.0));
    }

    #[test]
    fn has_nans() {
        let mut r = Ray::<f32>::default();
        assert!(!r.has_nans());
        r.o[0] = f32::NAN;
        assert!(r.has_nans());
        r.o[0] = 0.0;
        r.d[2] = f32::NAN;
        assert!(r.has_nans());
    }

    #[test]
    fn point() {
        let o = point3(1.0, 2.0, 3.0);
        let d = vec3(4.0, 5.0, 6.0);
        let r = Ray::new(o, d);
        assert_eq!(r.point(0.0), o);
        assert_eq!(r.point(1.0), o + d);
        assert_eq!(r.point(2.0), o + d * 2.0);
    }

    #[test]
    fn inv_d() {
        let r = Ray::new(point3(0.0f32, 0.0, 0.0), vec3(2.0, -0.0, 0.5));
        let inv = r.inv_d();
        assert_eq!(inv.x, 0.5);
        assert_eq!(inv.y, f32::NEG_INFINITY);
        assert_eq!(inv.z, 2.0);

        // Tracks the direction after it is changed in place
        let mut r = r;
        r.d = vec3(4.0, 1.0, -0.25);
        assert_eq!(r.inv_d(), vec3(0.25, 1.0, -4.0));
    }
}
