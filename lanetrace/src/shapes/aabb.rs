use super::{accept_distance, Shape, ShapeHit};
use crate::math::{Bounds3, FloatValueType, Normal, Point3, Ray};

/// A solid axis-aligned box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisAlignedBox<T>
where
    T: FloatValueType,
{
    pub min: Point3<T>,
    pub max: Point3<T>,
}

impl<T> AxisAlignedBox<T>
where
    T: FloatValueType,
{
    /// Creates a new `AxisAlignedBox` spanning the two corners, in any order.
    pub fn new(p0: Point3<T>, p1: Point3<T>) -> Self {
        Self {
            min: p0.min(p1),
            max: p0.max(p1),
        }
    }
}

impl<T> Shape<T> for AxisAlignedBox<T>
where
    T: FloatValueType,
{
    fn intersect(&self, ray: &Ray<T>) -> Option<ShapeHit<T>> {
        if self.min.has_nans() || self.max.has_nans() || ray.has_nans() {
            return None;
        }

        // A NaN slab (0 * inf, a ray grazing a face) fails both comparisons and
        // leaves the interval as is, whichever axis it is on
        let inv_d = ray.inv_d();
        let mut t_near = T::neg_infinity();
        let mut t_far = T::infinity();
        for axis in 0..3 {
            let t0 = (self.min[axis] - ray.o[axis]) * inv_d[axis];
            let t1 = (self.max[axis] - ray.o[axis]) * inv_d[axis];
            let (near, far) = if t1 < t0 { (t1, t0) } else { (t0, t1) };
            if near > t_near {
                t_near = near;
            }
            if far < t_far {
                t_far = far;
            }
        }

        if !(t_near <= t_far && t_far >= T::zero()) {
            return None;
        }
        let entrance = if t_near < T::zero() { T::zero() } else { t_near };
        if !accept_distance(entrance) {
            return None;
        }

        Some(ShapeHit {
            entrance,
            exit: t_far,
            normal: self.normal_at(ray.point(entrance)),
        })
    }

    /// Returns the outward normal of the face `p` is closest to, relative to the box extent.
    fn normal_at(&self, p: Point3<T>) -> Normal<T> {
        let half = (self.max - self.min) * T::lit(0.5);
        let local = p - (self.min + self.max) * T::lit(0.5);

        let mut axis = 0;
        let mut best = (local[0] / half[0]).abs();
        for i in 1..3 {
            let rel = (local[i] / half[i]).abs();
            if rel > best {
                axis = i;
                best = rel;
            }
        }

        let mut n = Normal::zeros();
        n[axis] = local[axis].signum();
        n
    }

    fn world_bound(&self) -> Bounds3<T> {
        Bounds3::new(self.min, self.max)
    }
}
