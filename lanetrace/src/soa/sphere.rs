use super::{accept_lanes, LaneKernel, LaneVec3, SoaBatch};
use crate::{
    lanes::{LaneReal, LaneVector, LANE_COUNT},
    math::Ray,
    primitive::PrimitiveKind,
    shapes::Sphere,
};

/// Lane storage for spheres: center components and radius.
#[derive(Copy, Clone, Debug)]
pub struct SphereLanes<T> {
    center: LaneVec3<T>,
    radius: [T; LANE_COUNT],
}

/// A batch of up to eight spheres.
pub type SphereSoa<T> = SoaBatch<T, SphereLanes<T>>;

impl<T> LaneKernel<T> for SphereLanes<T>
where
    T: LaneReal,
{
    type Shape = Sphere<T>;

    const KIND: PrimitiveKind = PrimitiveKind::Sphere;

    fn padded() -> Self {
        Self {
            center: LaneVec3::nan(),
            radius: [T::nan(); LANE_COUNT],
        }
    }

    fn store(&mut self, lane: usize, shape: &Sphere<T>) {
        self.center.set_point(lane, shape.center);
        self.radius[lane] = shape.radius;
    }

    fn pad(&mut self, lane: usize) {
        self.center.pad(lane);
        self.radius[lane] = T::nan();
    }

    fn load(&self, lane: usize) -> Sphere<T> {
        Sphere::new(self.center.point(lane), self.radius[lane])
    }

    fn distances<V>(&self, ray: &Ray<T>) -> V
    where
        V: LaneVector<T>,
    {
        let (cx, cy, cz) = self.center.load::<V>();
        let r = V::from_array(self.radius);
        let (dx, dy, dz) = (V::splat(ray.d.x), V::splat(ray.d.y), V::splat(ray.d.z));

        // v = o - center
        let vx = V::splat(ray.o.x) - cx;
        let vy = V::splat(ray.o.y) - cy;
        let vz = V::splat(ray.o.z) - cz;

        let a = V::splat(ray.d.len_sqr());
        let b = vx * dx + vy * dy + vz * dz;
        let c = vx * vx + vy * vy + vz * vz - r * r;
        let discriminant = b * b - a * c;

        // NaN in lanes with a negative discriminant and in padding
        let discriminant_sqrt = discriminant.sqrt();
        let exit = (-b + discriminant_sqrt) / a;
        let entrance = (-b - discriminant_sqrt) / a;

        let zero = V::zero();
        let entrance = V::select(entrance.cmp_lt(zero), zero, entrance);
        entrance.keep_or_nan(exit.cmp_ge(zero) & accept_lanes::<T, V>(entrance))
    }
}
