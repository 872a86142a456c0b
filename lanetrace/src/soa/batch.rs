use super::{
    AxisAlignedBoxSoa, BatchState, LaneHit, ParallelogramSoa, PlaneSoa, SphereSoa, TriangleSoa,
};
use crate::{
    error::{Error, Result},
    intersection::IntersectionResult,
    lanes::{LaneReal, LaneVector},
    math::{Bounds3, Ray},
    primitive::{PrimitiveId, PrimitiveKind, PrimitiveShape},
    settings::OverflowPolicy,
};

/// A batch of any primitive kind, the payload of a batch node in the geometry graph.
#[derive(Clone, Debug)]
pub enum Batch<T>
where
    T: LaneReal,
{
    Sphere(SphereSoa<T>),
    Plane(PlaneSoa<T>),
    AxisAlignedBox(AxisAlignedBoxSoa<T>),
    Triangle(TriangleSoa<T>),
    Parallelogram(ParallelogramSoa<T>),
}

macro_rules! dispatch_batch {
    ($batch:expr, $b:ident => $body:expr) => {
        match $batch {
            Batch::Sphere($b) => $body,
            Batch::Plane($b) => $body,
            Batch::AxisAlignedBox($b) => $body,
            Batch::Triangle($b) => $body,
            Batch::Parallelogram($b) => $body,
        }
    };
}

impl<T> Batch<T>
where
    T: LaneReal,
{
    /// Creates an empty batch for primitives of `kind`.
    pub fn new(kind: PrimitiveKind, overflow: OverflowPolicy) -> Self {
        match kind {
            PrimitiveKind::Sphere => Batch::Sphere(SphereSoa::with_policy(overflow)),
            PrimitiveKind::Plane => Batch::Plane(PlaneSoa::with_policy(overflow)),
            PrimitiveKind::AxisAlignedBox => {
                Batch::AxisAlignedBox(AxisAlignedBoxSoa::with_policy(overflow))
            }
            PrimitiveKind::Triangle => Batch::Triangle(TriangleSoa::with_policy(overflow)),
            PrimitiveKind::Parallelogram => {
                Batch::Parallelogram(ParallelogramSoa::with_policy(overflow))
            }
        }
    }

    /// Appends `shape` of primitive `id`, which has to match the kind of the batch.
    pub fn push(&mut self, id: PrimitiveId, shape: &PrimitiveShape<T>) -> Result<()> {
        match (self, shape) {
            (Batch::Sphere(b), PrimitiveShape::Sphere(s)) => b.push(id, s),
            (Batch::Plane(b), PrimitiveShape::Plane(s)) => b.push(id, s),
            (Batch::AxisAlignedBox(b), PrimitiveShape::AxisAlignedBox(s)) => b.push(id, s),
            (Batch::Triangle(b), PrimitiveShape::Triangle(s)) => b.push(id, s),
            (Batch::Parallelogram(b), PrimitiveShape::Parallelogram(s)) => b.push(id, s),
            (b, s) => Err(Error::KindMismatch {
                expected: b.kind(),
                found: s.kind(),
            }),
        }
    }

    pub fn kind(&self) -> PrimitiveKind {
        dispatch_batch!(self, b => b.kind())
    }

    pub fn finalize(&mut self) {
        dispatch_batch!(self, b => b.finalize())
    }

    pub fn reset(&mut self) {
        dispatch_batch!(self, b => b.reset())
    }

    pub fn len(&self) -> usize {
        dispatch_batch!(self, b => b.len())
    }

    pub fn is_empty(&self) -> bool {
        dispatch_batch!(self, b => b.is_empty())
    }

    pub fn occupied(&self) -> usize {
        dispatch_batch!(self, b => b.occupied())
    }

    pub fn state(&self) -> BatchState {
        dispatch_batch!(self, b => b.state())
    }

    /// Returns the primitive in `lane`, `None` for padding.
    pub fn primitive(&self, lane: usize) -> Option<PrimitiveId> {
        dispatch_batch!(self, b => b.primitive(lane))
    }

    /// See [SoaBatch::intersect](super::SoaBatch::intersect).
    pub fn intersect(&self, ray: &Ray<T>) -> IntersectionResult<T> {
        dispatch_batch!(self, b => b.intersect(ray))
    }

    /// See [SoaBatch::intersect_lanes](super::SoaBatch::intersect_lanes).
    pub fn intersect_lanes<V>(&self, ray: &Ray<T>) -> LaneHit<T>
    where
        V: LaneVector<T>,
    {
        dispatch_batch!(self, b => b.intersect_lanes::<V>(ray))
    }

    /// See [SoaBatch::intersect_scalar](super::SoaBatch::intersect_scalar).
    pub fn intersect_scalar(&self, ray: &Ray<T>) -> IntersectionResult<T> {
        dispatch_batch!(self, b => b.intersect_scalar(ray))
    }

    pub fn world_bound(&self) -> Bounds3<T> {
        dispatch_batch!(self, b => b.world_bound())
    }
}
