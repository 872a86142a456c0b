use super::{accept_distance, parallel_epsilon, Shape, ShapeHit};
use crate::math::{Bounds3, FloatValueType, Normal, Point3, Ray};

/// An infinite two-sided plane through `point`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane<T>
where
    T: FloatValueType,
{
    pub point: Point3<T>,
    pub normal: Normal<T>,
}

impl<T> Plane<T>
where
    T: FloatValueType,
{
    /// Creates a new `Plane`. `normal` is stored as given.
    pub fn new(point: Point3<T>, normal: Normal<T>) -> Self {
        Self { point, normal }
    }
}

impl<T> Shape<T> for Plane<T>
where
    T: FloatValueType,
{
    fn intersect(&self, ray: &Ray<T>) -> Option<ShapeHit<T>> {
        let denominator = ray.d.dot_n(self.normal);
        if !(denominator.abs() > parallel_epsilon()) {
            return None;
        }

        let t = (self.point - ray.o).dot_n(self.normal) / denominator;
        if !accept_distance(t) {
            return None;
        }

        Some(ShapeHit {
            entrance: t,
            exit: t,
            normal: self.normal,
        })
    }

    fn normal_at(&self, _p: Point3<T>) -> Normal<T> {
        self.normal
    }

    fn world_bound(&self) -> Bounds3<T> {
        Bounds3::infinite()
    }
}
