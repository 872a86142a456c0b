use super::{accept_lanes, LaneKernel, LaneVec3, SoaBatch};
use crate::{
    lanes::{LaneReal, LaneVector},
    math::Ray,
    primitive::PrimitiveKind,
    shapes::AxisAlignedBox,
};

/// Lane storage for boxes: both corners.
#[derive(Copy, Clone, Debug)]
pub struct AxisAlignedBoxLanes<T> {
    min: LaneVec3<T>,
    max: LaneVec3<T>,
}

/// A batch of up to eight axis-aligned boxes.
pub type AxisAlignedBoxSoa<T> = SoaBatch<T, AxisAlignedBoxLanes<T>>;

impl<T> LaneKernel<T> for AxisAlignedBoxLanes<T>
where
    T: LaneReal,
{
    type Shape = AxisAlignedBox<T>;

    const KIND: PrimitiveKind = PrimitiveKind::AxisAlignedBox;

    fn padded() -> Self {
        Self {
            min: LaneVec3::nan(),
            max: LaneVec3::nan(),
        }
    }

    fn store(&mut self, lane: usize, shape: &AxisAlignedBox<T>) {
        self.min.set_point(lane, shape.min);
        self.max.set_point(lane, shape.max);
    }

    fn pad(&mut self, lane: usize) {
        self.min.pad(lane);
        self.max.pad(lane);
    }

    fn load(&self, lane: usize) -> AxisAlignedBox<T> {
        AxisAlignedBox {
            min: self.min.point(lane),
            max: self.max.point(lane),
        }
    }

    fn distances<V>(&self, ray: &Ray<T>) -> V
    where
        V: LaneVector<T>,
    {
        if ray.has_nans() {
            return V::nan();
        }

        // Same ordered updates as the scalar slab test so NaN slabs behave alike
        let inv_d = ray.inv_d();
        let mut t_near = V::splat(T::neg_infinity());
        let mut t_far = V::splat(T::infinity());
        let mut solid = V::zero().cmp_eq(V::zero());
        for axis in 0..3 {
            let lo = V::from_array(*self.min.axis(axis));
            let hi = V::from_array(*self.max.axis(axis));
            // Padding lanes are NaN and would otherwise skip every slab
            solid = solid & lo.cmp_eq(lo) & hi.cmp_eq(hi);

            let o = V::splat(ray.o[axis]);
            let inv = V::splat(inv_d[axis]);
            let t0 = (lo - o) * inv;
            let t1 = (hi - o) * inv;
            let swap = t1.cmp_lt(t0);
            let near = V::select(swap, t1, t0);
            let far = V::select(swap, t0, t1);
            t_near = V::select(near.cmp_gt(t_near), near, t_near);
            t_far = V::select(far.cmp_lt(t_far), far, t_far);
        }

        let zero = V::zero();
        let overlaps = t_near.cmp_le(t_far) & t_far.cmp_ge(zero);
        let entrance = V::select(t_near.cmp_lt(zero), zero, t_near);
        entrance.keep_or_nan(solid & overlaps & accept_lanes::<T, V>(entrance))
    }
}
