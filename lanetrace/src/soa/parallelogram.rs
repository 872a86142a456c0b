use super::{accept_lanes, triangle::planar_coordinates_lanes, LaneKernel, LaneVec3, SoaBatch};
use crate::{
    lanes::{LaneReal, LaneVector},
    math::Ray,
    primitive::PrimitiveKind,
    shapes::Parallelogram,
};

/// Lane storage for parallelograms: the corner and both edges.
#[derive(Copy, Clone, Debug)]
pub struct ParallelogramLanes<T> {
    origin: LaneVec3<T>,
    edge_a: LaneVec3<T>,
    edge_b: LaneVec3<T>,
}

/// A batch of up to eight parallelograms.
pub type ParallelogramSoa<T> = SoaBatch<T, ParallelogramLanes<T>>;

impl<T> LaneKernel<T> for ParallelogramLanes<T>
where
    T: LaneReal,
{
    type Shape = Parallelogram<T>;

    const KIND: PrimitiveKind = PrimitiveKind::Parallelogram;

    fn padded() -> Self {
        Self {
            origin: LaneVec3::nan(),
            edge_a: LaneVec3::nan(),
            edge_b: LaneVec3::nan(),
        }
    }

    fn store(&mut self, lane: usize, shape: &Parallelogram<T>) {
        self.origin.set_point(lane, shape.origin);
        self.edge_a.set_vec(lane, shape.edge_a);
        self.edge_b.set_vec(lane, shape.edge_b);
    }

    fn pad(&mut self, lane: usize) {
        self.origin.pad(lane);
        self.edge_a.pad(lane);
        self.edge_b.pad(lane);
    }

    fn load(&self, lane: usize) -> Parallelogram<T> {
        Parallelogram::new(
            self.origin.point(lane),
            self.edge_a.vec(lane),
            self.edge_b.vec(lane),
        )
    }

    fn distances<V>(&self, ray: &Ray<T>) -> V
    where
        V: LaneVector<T>,
    {
        let (u, v, t) = planar_coordinates_lanes(
            ray,
            self.origin.load::<V>(),
            self.edge_a.load::<V>(),
            self.edge_b.load::<V>(),
        );
        let (zero, one) = (V::zero(), V::splat(T::one()));
        let inside = u.cmp_ge(zero) & u.cmp_le(one) & v.cmp_ge(zero) & v.cmp_le(one);
        t.keep_or_nan(inside & accept_lanes::<T, V>(t))
    }
}
