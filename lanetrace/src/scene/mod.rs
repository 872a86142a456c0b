mod builder;

pub use builder::SceneBuilder;

use crate::{
    geometry::{Geometry, Intersectable},
    intersection::IntersectionResult,
    lanes::LaneReal,
    math::{Bounds3, Ray},
    primitive::{MaterialId, Primitive, PrimitiveArena, PrimitiveId},
};

/// A built scene: the root of the geometry graph and the primitives it refers to.
///
/// Immutable after [SceneBuilder::build] so any number of threads can trace it at once.
#[derive(Clone, Debug)]
pub struct Scene<T>
where
    T: LaneReal,
{
    pub root: Geometry<T>,
    pub primitives: PrimitiveArena<T>,
}

impl<T> Scene<T>
where
    T: LaneReal,
{
    /// Returns the nearest hit of `ray` in the whole scene.
    pub fn intersect(&self, ray: &Ray<T>) -> IntersectionResult<T> {
        self.root.intersect(ray, &self.primitives)
    }

    /// Returns the material of the primitive hit in `result`, if any.
    pub fn material_of(&self, result: &IntersectionResult<T>) -> Option<MaterialId> {
        result
            .hit
            .and_then(|id| self.primitives.get(id))
            .map(|p| p.material)
    }

    pub fn primitive(&self, id: PrimitiveId) -> Option<&Primitive<T>> {
        self.primitives.get(id)
    }

    /// Returns the world space AABB of everything in the scene.
    pub fn world_bound(&self) -> Bounds3<T> {
        self.root.world_bound(&self.primitives)
    }
}
