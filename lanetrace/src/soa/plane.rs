use super::{accept_lanes, LaneKernel, LaneVec3, SoaBatch};
use crate::{
    lanes::{LaneReal, LaneVector},
    math::{Normal, Ray},
    primitive::PrimitiveKind,
    shapes::{parallel_epsilon, Plane},
};

/// Lane storage for planes: a point on the plane and its normal.
#[derive(Copy, Clone, Debug)]
pub struct PlaneLanes<T> {
    point: LaneVec3<T>,
    normal: LaneVec3<T>,
}

/// A batch of up to eight planes.
pub type PlaneSoa<T> = SoaBatch<T, PlaneLanes<T>>;

impl<T> LaneKernel<T> for PlaneLanes<T>
where
    T: LaneReal,
{
    type Shape = Plane<T>;

    const KIND: PrimitiveKind = PrimitiveKind::Plane;

    fn padded() -> Self {
        Self {
            point: LaneVec3::nan(),
            normal: LaneVec3::nan(),
        }
    }

    fn store(&mut self, lane: usize, shape: &Plane<T>) {
        self.point.set_point(lane, shape.point);
        let n = shape.normal;
        self.normal.set(lane, n.x, n.y, n.z);
    }

    fn pad(&mut self, lane: usize) {
        self.point.pad(lane);
        self.normal.pad(lane);
    }

    fn load(&self, lane: usize) -> Plane<T> {
        let n = self.normal.vec(lane);
        Plane::new(self.point.point(lane), Normal::new(n.x, n.y, n.z))
    }

    fn distances<V>(&self, ray: &Ray<T>) -> V
    where
        V: LaneVector<T>,
    {
        let (px, py, pz) = self.point.load::<V>();
        let (nx, ny, nz) = self.normal.load::<V>();

        let numerator = (px - V::splat(ray.o.x)) * nx
            + (py - V::splat(ray.o.y)) * ny
            + (pz - V::splat(ray.o.z)) * nz;
        let denominator = V::splat(ray.d.x) * nx + V::splat(ray.d.y) * ny + V::splat(ray.d.z) * nz;

        // Padding lanes have a NaN denominator and fail the comparison
        let facing = denominator.abs().cmp_gt(V::splat(parallel_epsilon()));
        let t = numerator / denominator;
        t.keep_or_nan(facing & accept_lanes::<T, V>(t))
    }
}
