use super::{accept_distance, Shape, ShapeHit};
use crate::math::{Bounds3, FloatValueType, Normal, Point3, Ray, Vec3};

// Möller-Trumbore
// https://www.graphics.cornell.edu/pubs/1997/MT97.pdf

/// A single triangle. The normal follows counter clockwise winding.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle<T>
where
    T: FloatValueType,
{
    pub v0: Point3<T>,
    pub v1: Point3<T>,
    pub v2: Point3<T>,
}

/// Barycentrics and distance of a ray against the plane spanned by `origin`, `e1`, `e2`.
///
/// Shared with [Parallelogram](super::Parallelogram), which only differs in the
/// containment test. A zero determinant gives infinite or NaN coordinates.
#[inline]
pub(crate) fn planar_coordinates<T>(
    ray: &Ray<T>,
    origin: Point3<T>,
    e1: Vec3<T>,
    e2: Vec3<T>,
) -> (T, T, T)
where
    T: FloatValueType,
{
    let p = ray.d.cross(e2);
    let inv_det = T::one() / e1.dot(p);
    let s = ray.o - origin;
    let u = s.dot(p) * inv_det;
    let q = s.cross(e1);
    let v = ray.d.dot(q) * inv_det;
    let t = e2.dot(q) * inv_det;
    (u, v, t)
}

impl<T> Triangle<T>
where
    T: FloatValueType,
{
    /// Creates a new `Triangle`.
    pub fn new(v0: Point3<T>, v1: Point3<T>, v2: Point3<T>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Returns the edges from `v0` to `v1` and `v2`.
    pub fn edges(&self) -> (Vec3<T>, Vec3<T>) {
        (self.v1 - self.v0, self.v2 - self.v0)
    }
}

impl<T> Shape<T> for Triangle<T>
where
    T: FloatValueType,
{
    fn intersect(&self, ray: &Ray<T>) -> Option<ShapeHit<T>> {
        let (e1, e2) = self.edges();
        let (u, v, t) = planar_coordinates(ray, self.v0, e1, e2);
        if !(u >= T::zero() && v >= T::zero() && u + v <= T::one() && accept_distance(t)) {
            return None;
        }

        Some(ShapeHit {
            entrance: t,
            exit: t,
            normal: self.normal_at(ray.point(t)),
        })
    }

    fn normal_at(&self, _p: Point3<T>) -> Normal<T> {
        let (e1, e2) = self.edges();
        Normal::from(e1.cross(e2).normalized())
    }

    fn world_bound(&self) -> Bounds3<T> {
        Bounds3::from_points([self.v0, self.v1, self.v2])
    }
}
