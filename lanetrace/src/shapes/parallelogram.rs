use super::{accept_distance, triangle::planar_coordinates, Shape, ShapeHit};
use crate::math::{Bounds3, FloatValueType, Normal, Point3, Ray, Vec3};

/// A parallelogram spanned by two edges from a corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Parallelogram<T>
where
    T: FloatValueType,
{
    pub origin: Point3<T>,
    pub edge_a: Vec3<T>,
    pub edge_b: Vec3<T>,
}

impl<T> Parallelogram<T>
where
    T: FloatValueType,
{
    /// Creates a new `Parallelogram`.
    pub fn new(origin: Point3<T>, edge_a: Vec3<T>, edge_b: Vec3<T>) -> Self {
        Self {
            origin,
            edge_a,
            edge_b,
        }
    }
}

impl<T> Shape<T> for Parallelogram<T>
where
    T: FloatValueType,
{
    fn intersect(&self, ray: &Ray<T>) -> Option<ShapeHit<T>> {
        // Same planar solve as a triangle, the coordinates are along each edge
        let (u, v, t) = planar_coordinates(ray, self.origin, self.edge_a, self.edge_b);
        let (zero, one) = (T::zero(), T::one());
        if !(u >= zero && u <= one && v >= zero && v <= one && accept_distance(t)) {
            return None;
        }

        Some(ShapeHit {
            entrance: t,
            exit: t,
            normal: self.normal_at(ray.point(t)),
        })
    }

    fn normal_at(&self, _p: Point3<T>) -> Normal<T> {
        Normal::from(self.edge_a.cross(self.edge_b).normalized())
    }

    fn world_bound(&self) -> Bounds3<T> {
        let o = self.origin;
        Bounds3::from_points([o, o + self.edge_a, o + self.edge_b, o + self.edge_a + self.edge_b])
    }
}
