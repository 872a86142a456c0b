//! The geometry composition graph.
//!
//! Every node answers the same question, the nearest hit of a ray, so scenes can
//! mix bare primitives, batches and wrapper nodes freely. The graph owns its nodes
//! but only refers to primitives by [PrimitiveId]; the [PrimitiveArena] holding them
//! is passed in on every query. Nothing is mutated during traversal, so a built
//! graph can be shared between threads as is.

mod bounding_volume;
mod collection;
mod transformed;

pub use bounding_volume::BoundingVolume;
pub use collection::Collection;
pub use transformed::TransformedGeometry;

use crate::{
    intersection::IntersectionResult,
    lanes::{LaneReal, LANE_COUNT},
    math::{Bounds3, Ray},
    primitive::{PrimitiveArena, PrimitiveId},
    shapes::Shape,
    soa::Batch,
};

/// Anything that can be intersected as a part of the geometry graph.
pub trait Intersectable<T>: Send + Sync
where
    T: LaneReal,
{
    /// Returns the nearest hit of `ray` in this subtree.
    fn intersect(&self, ray: &Ray<T>, primitives: &PrimitiveArena<T>) -> IntersectionResult<T>;

    /// Returns the world space AABB of this subtree.
    fn world_bound(&self, primitives: &PrimitiveArena<T>) -> Bounds3<T>;
}

/// A node of the geometry graph.
#[derive(Clone, Debug)]
pub enum Geometry<T>
where
    T: LaneReal,
{
    /// A single primitive, tested with its scalar kernel.
    Primitive(PrimitiveId),
    /// Up to eight primitives of one kind, tested together.
    Batch(Batch<T>),
    Collection(Collection<T>),
    BoundingVolume(BoundingVolume<T>),
    Transform(TransformedGeometry<T>),
}

impl<T> Geometry<T>
where
    T: LaneReal,
{
    /// Calls `f` for every primitive referenced in this subtree, depth first.
    pub fn visit_primitives(&self, f: &mut impl FnMut(PrimitiveId)) {
        match self {
            Geometry::Primitive(id) => f(*id),
            Geometry::Batch(batch) => {
                for id in (0..LANE_COUNT).filter_map(|lane| batch.primitive(lane)) {
                    f(id);
                }
            }
            Geometry::Collection(c) => {
                for child in c.iter() {
                    child.visit_primitives(&mut *f);
                }
            }
            Geometry::BoundingVolume(bv) => bv.child().visit_primitives(f),
            Geometry::Transform(t) => t.child().visit_primitives(f),
        }
    }
}

impl<T> Intersectable<T> for Geometry<T>
where
    T: LaneReal,
{
    fn intersect(&self, ray: &Ray<T>, primitives: &PrimitiveArena<T>) -> IntersectionResult<T> {
        match self {
            Geometry::Primitive(id) => primitives.get(*id).map_or_else(IntersectionResult::miss, |p| {
                IntersectionResult::from_shape_hit(*id, p.shape.intersect(ray))
            }),
            Geometry::Batch(batch) => batch.intersect(ray),
            Geometry::Collection(c) => c.intersect(ray, primitives),
            Geometry::BoundingVolume(bv) => bv.intersect(ray, primitives),
            Geometry::Transform(t) => t.intersect(ray, primitives),
        }
    }

    fn world_bound(&self, primitives: &PrimitiveArena<T>) -> Bounds3<T> {
        match self {
            Geometry::Primitive(id) => primitives
                .get(*id)
                .map_or_else(Bounds3::empty, |p| p.shape.world_bound()),
            Geometry::Batch(batch) => batch.world_bound(),
            Geometry::Collection(c) => c.world_bound(primitives),
            Geometry::BoundingVolume(bv) => bv.world_bound(primitives),
            Geometry::Transform(t) => t.world_bound(primitives),
        }
    }
}

macro_rules! impl_from_node {
    ($($variant:ident($node:ty)),+) => {
        $(
            impl<T> From<$node> for Geometry<T>
            where
                T: LaneReal,
            {
                fn from(node: $node) -> Self {
                    Geometry::$variant(node)
                }
            }
        )+
    };
}
impl_from_node!(
    Primitive(PrimitiveId),
    Batch(Batch<T>),
    Collection(Collection<T>),
    BoundingVolume(BoundingVolume<T>),
    Transform(TransformedGeometry<T>)
);
