//! Structure-of-arrays batches that test one ray against up to [LANE_COUNT] primitives
//! of the same kind at once.
//!
//! Each batch is a secondary index over primitives owned by a
//! [PrimitiveArena](crate::PrimitiveArena): it copies the shape parameters into
//! per-field lane arrays and remembers the [PrimitiveId] of every lane. Unused lanes
//! hold NaN so a full-width intersect never reports them.

mod aabb;
mod batch;
mod parallelogram;
mod plane;
mod sphere;
mod triangle;

pub use aabb::{AxisAlignedBoxLanes, AxisAlignedBoxSoa};
pub use batch::Batch;
pub use parallelogram::{ParallelogramLanes, ParallelogramSoa};
pub use plane::{PlaneLanes, PlaneSoa};
pub use sphere::{SphereLanes, SphereSoa};
pub use triangle::{TriangleLanes, TriangleSoa};

use std::marker::PhantomData;
use strum::Display;

use crate::{
    error::{Error, Result},
    intersection::IntersectionResult,
    lanes::{min_lane, LaneReal, LaneVector, LANE_COUNT},
    math::{Bounds3, FloatValueType, Point3, Ray, Vec3},
    primitive::{PrimitiveId, PrimitiveKind},
    settings::OverflowPolicy,
    shapes::Shape,
};

/// Lifecycle of a batch.
///
/// Inserting moves a batch to `Filling`, [SoaBatch::finalize] to `Finalized` and
/// [SoaBatch::reset] back to `Empty`. Only `Empty` and `Finalized` batches may be
/// intersected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
pub enum BatchState {
    Empty,
    Filling,
    Finalized,
}

/// Raw outcome of a lane intersect, before it is turned into an [IntersectionResult].
///
/// On a miss `distance` is +inf and `lane` is the fallback lane, whose `primitive`
/// may be anything. Check `distance`, not `primitive`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LaneHit<T> {
    pub lane: usize,
    pub distance: T,
    pub primitive: Option<PrimitiveId>,
}

impl<T> LaneHit<T>
where
    T: FloatValueType,
{
    /// Checks if the winning lane holds a real hit.
    pub fn is_hit(&self) -> bool {
        self.distance.is_finite() && self.primitive.is_some()
    }
}

/// Per-kind lane storage and the batched closed-form kernel for it.
///
/// Implementations must reject exactly the rays their scalar [Shape] rejects and
/// produce NaN for every lane that misses, including padding.
pub trait LaneKernel<T>: Clone + Send + Sync
where
    T: LaneReal,
{
    type Shape: Shape<T> + Copy;

    const KIND: PrimitiveKind;

    /// Creates storage with every lane padded.
    fn padded() -> Self;

    /// Copies the parameters of `shape` into `lane`.
    fn store(&mut self, lane: usize, shape: &Self::Shape);

    /// Overwrites `lane` with NaN.
    fn pad(&mut self, lane: usize);

    /// Reads the shape back from `lane`.
    fn load(&self, lane: usize) -> Self::Shape;

    /// Entrance distance per lane, NaN where the lane misses.
    fn distances<V>(&self, ray: &Ray<T>) -> V
    where
        V: LaneVector<T>;
}

/// A batch of up to [LANE_COUNT] primitives of one kind.
#[derive(Clone, Debug)]
pub struct SoaBatch<T, K>
where
    T: LaneReal,
    K: LaneKernel<T>,
{
    lanes: K,
    ids: [Option<PrimitiveId>; LANE_COUNT],
    len: usize,
    state: BatchState,
    overflow: OverflowPolicy,
    _t: PhantomData<T>,
}

impl<T, K> SoaBatch<T, K>
where
    T: LaneReal,
    K: LaneKernel<T>,
{
    /// Creates a new empty batch that rejects overflowing inserts.
    pub fn new() -> Self {
        Self::with_policy(OverflowPolicy::Reject)
    }

    /// Creates a new empty batch with the given overflow handling.
    pub fn with_policy(overflow: OverflowPolicy) -> Self {
        Self {
            lanes: K::padded(),
            ids: [None; LANE_COUNT],
            len: 0,
            state: BatchState::Empty,
            overflow,
            _t: PhantomData,
        }
    }

    /// Stores `shape` of primitive `id` in lane `index`.
    ///
    /// An `index` past the batch width is an error under [OverflowPolicy::Reject] and
    /// dropped with a warning under [OverflowPolicy::Truncate].
    pub fn insert(&mut self, index: usize, id: PrimitiveId, shape: &K::Shape) -> Result<()> {
        if index >= LANE_COUNT {
            return self.overflowed(
                id,
                Error::LaneOutOfRange {
                    index,
                    capacity: LANE_COUNT,
                },
            );
        }

        self.lanes.store(index, shape);
        self.ids[index] = Some(id);
        self.len = self.len.max(index + 1);
        self.state = BatchState::Filling;
        Ok(())
    }

    /// Stores `shape` of primitive `id` in the first lane after the used ones.
    pub fn push(&mut self, id: PrimitiveId, shape: &K::Shape) -> Result<()> {
        if self.len >= LANE_COUNT {
            return self.overflowed(
                id,
                Error::BatchFull {
                    capacity: LANE_COUNT,
                },
            );
        }
        self.insert(self.len, id, shape)
    }

    fn overflowed(&self, id: PrimitiveId, err: Error) -> Result<()> {
        match self.overflow {
            OverflowPolicy::Reject => Err(err),
            OverflowPolicy::Truncate => {
                lanetrace_warn!("Dropping primitive {} from {} batch: {}", id, K::KIND, err);
                Ok(())
            }
        }
    }

    /// Pads every lane without a primitive.
    ///
    /// Required before intersecting since the lane kernel always runs the full width.
    pub fn finalize(&mut self) {
        for lane in 0..LANE_COUNT {
            if self.ids[lane].is_none() {
                self.lanes.pad(lane);
            }
        }
        self.state = BatchState::Finalized;
        lanetrace_trace!(
            "Finalized {} batch with {}/{} lanes",
            K::KIND,
            self.occupied(),
            LANE_COUNT
        );
    }

    /// Empties the batch so it can be filled again.
    pub fn reset(&mut self) {
        self.lanes = K::padded();
        self.ids = [None; LANE_COUNT];
        self.len = 0;
        self.state = BatchState::Empty;
    }

    /// Returns the number of lanes up to and including the last inserted one.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of lanes that hold a primitive.
    pub fn occupied(&self) -> usize {
        self.ids.iter().filter(|id| id.is_some()).count()
    }

    pub fn state(&self) -> BatchState {
        self.state
    }

    pub fn kind(&self) -> PrimitiveKind {
        K::KIND
    }

    /// Returns the primitive in `lane`, `None` for padding.
    pub fn primitive(&self, lane: usize) -> Option<PrimitiveId> {
        self.ids.get(lane).copied().flatten()
    }

    /// Returns the shape stored in `lane` if the lane holds a primitive.
    pub fn shape(&self, lane: usize) -> Option<K::Shape> {
        self.primitive(lane).map(|_| self.lanes.load(lane))
    }

    /// Iterates the used lanes as `(lane, primitive, shape)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, PrimitiveId, K::Shape)> + '_ {
        self.ids
            .iter()
            .enumerate()
            .filter_map(move |(lane, id)| id.map(|id| (lane, id, self.lanes.load(lane))))
    }

    /// Intersects all lanes with backend `V` and reduces to the nearest one.
    pub fn intersect_lanes<V>(&self, ray: &Ray<T>) -> LaneHit<T>
    where
        V: LaneVector<T>,
    {
        debug_assert!(
            self.state != BatchState::Filling,
            "{} batch intersected before finalize",
            K::KIND
        );
        let min = min_lane(self.lanes.distances::<V>(ray));
        LaneHit {
            lane: min.lane,
            distance: min.value,
            primitive: self.ids[min.lane],
        }
    }

    /// Intersects the batch with the default lane backend of `T`.
    pub fn intersect(&self, ray: &Ray<T>) -> IntersectionResult<T> {
        self.resolve(ray, self.intersect_lanes::<T::Lanes>(ray))
    }

    /// Turns a [LaneHit] of this batch into an [IntersectionResult] with a normal.
    pub fn resolve(&self, ray: &Ray<T>, hit: LaneHit<T>) -> IntersectionResult<T> {
        match hit.primitive {
            Some(id) if hit.is_hit() => {
                let n = self.lanes.load(hit.lane).normal_at(ray.point(hit.distance));
                IntersectionResult::new(id, hit.distance, n)
            }
            _ => IntersectionResult::miss(),
        }
    }

    /// Reference path: runs the scalar kernel of each used lane in lane order.
    ///
    /// Picks the same primitive as [SoaBatch::intersect] for any ray.
    pub fn intersect_scalar(&self, ray: &Ray<T>) -> IntersectionResult<T> {
        let mut nearest = IntersectionResult::miss();
        for (_, id, shape) in self.iter() {
            let result = IntersectionResult::from_shape_hit(id, shape.intersect(ray));
            if result.is_nearer_than(&nearest) {
                nearest = result;
            }
        }
        nearest
    }

    /// Returns the union of the bounds of the used lanes.
    pub fn world_bound(&self) -> Bounds3<T> {
        self.iter()
            .fold(Bounds3::empty(), |b, (_, _, shape)| b.union_b(shape.world_bound()))
    }
}

impl<T, K> Default for SoaBatch<T, K>
where
    T: LaneReal,
    K: LaneKernel<T>,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Lanes where `t` is a usable hit distance, the lane version of the scalar check.
#[inline]
pub(crate) fn accept_lanes<T, V>(t: V) -> V::Mask
where
    T: FloatValueType,
    V: LaneVector<T>,
{
    t.cmp_ge(V::zero()) & t.cmp_lt(V::splat(T::infinity()))
}

/// Three lane arrays for the components of a point or vector field.
#[derive(Copy, Clone, Debug)]
pub struct LaneVec3<T> {
    pub x: [T; LANE_COUNT],
    pub y: [T; LANE_COUNT],
    pub z: [T; LANE_COUNT],
}

impl<T> LaneVec3<T>
where
    T: FloatValueType,
{
    pub fn nan() -> Self {
        Self {
            x: [T::nan(); LANE_COUNT],
            y: [T::nan(); LANE_COUNT],
            z: [T::nan(); LANE_COUNT],
        }
    }

    #[inline]
    pub fn set(&mut self, lane: usize, x: T, y: T, z: T) {
        self.x[lane] = x;
        self.y[lane] = y;
        self.z[lane] = z;
    }

    #[inline]
    pub fn set_point(&mut self, lane: usize, p: Point3<T>) {
        self.set(lane, p.x, p.y, p.z);
    }

    #[inline]
    pub fn set_vec(&mut self, lane: usize, v: Vec3<T>) {
        self.set(lane, v.x, v.y, v.z);
    }

    #[inline]
    pub fn pad(&mut self, lane: usize) {
        self.set(lane, T::nan(), T::nan(), T::nan());
    }

    #[inline]
    pub fn point(&self, lane: usize) -> Point3<T> {
        Point3::new(self.x[lane], self.y[lane], self.z[lane])
    }

    #[inline]
    pub fn vec(&self, lane: usize) -> Vec3<T> {
        Vec3::new(self.x[lane], self.y[lane], self.z[lane])
    }

    /// Returns the lane vector of component `axis`.
    #[inline]
    pub fn axis(&self, axis: usize) -> &[T; LANE_COUNT] {
        match axis {
            0 => &self.x,
            1 => &self.y,
            _ => &self.z,
        }
    }

    /// Loads all three components.
    #[inline]
    pub fn load<V>(&self) -> (V, V, V)
    where
        V: LaneVector<T>,
    {
        (
            V::from_array(self.x),
            V::from_array(self.y),
            V::from_array(self.z),
        )
    }
}
