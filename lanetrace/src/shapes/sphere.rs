use super::{accept_distance, Shape, ShapeHit};
use crate::math::{Bounds3, FloatValueType, Normal, Point3, Ray, Vec3};

/// A sphere given by its center and radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere<T>
where
    T: FloatValueType,
{
    pub center: Point3<T>,
    pub radius: T,
}

impl<T> Sphere<T>
where
    T: FloatValueType,
{
    /// Creates a new `Sphere`.
    pub fn new(center: Point3<T>, radius: T) -> Self {
        Self { center, radius }
    }
}

impl<T> Shape<T> for Sphere<T>
where
    T: FloatValueType,
{
    fn intersect(&self, ray: &Ray<T>) -> Option<ShapeHit<T>> {
        // Half-b form of the quadratic, a is kept since d isn't normalized
        let v = ray.o - self.center;
        let a = ray.d.len_sqr();
        let b = v.dot(ray.d);
        let c = v.len_sqr() - self.radius * self.radius;
        let discriminant = b * b - a * c;

        // Negative discriminant gives a NaN root and fails every check below
        let discriminant_sqrt = discriminant.sqrt();
        let exit = (-b + discriminant_sqrt) / a;
        let mut entrance = (-b - discriminant_sqrt) / a;
        if entrance < T::zero() {
            entrance = T::zero();
        }

        if !(exit >= T::zero()) || !accept_distance(entrance) {
            return None;
        }

        Some(ShapeHit {
            entrance,
            exit,
            normal: self.normal_at(ray.point(entrance)),
        })
    }

    fn normal_at(&self, p: Point3<T>) -> Normal<T> {
        Normal::from((p - self.center) / self.radius)
    }

    fn world_bound(&self) -> Bounds3<T> {
        let r = Vec3::from(self.radius);
        Bounds3::new(self.center - r, self.center + r)
    }
}
