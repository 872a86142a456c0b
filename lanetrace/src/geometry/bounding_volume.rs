use super::{Geometry, Intersectable};
use crate::{
    intersection::IntersectionResult,
    lanes::LaneReal,
    math::{Bounds3, Ray},
    primitive::PrimitiveArena,
};

/// Guards an expensive child behind a cheap box test.
///
/// The child is only visited when the ray passes through `bound` in front of its
/// origin.
#[derive(Clone, Debug)]
pub struct BoundingVolume<T>
where
    T: LaneReal,
{
    bound: Bounds3<T>,
    child: Box<Geometry<T>>,
}

impl<T> BoundingVolume<T>
where
    T: LaneReal,
{
    /// Creates a new `BoundingVolume`. `bound` is trusted to contain `child`.
    pub fn new(bound: Bounds3<T>, child: impl Into<Geometry<T>>) -> Self {
        Self {
            bound,
            child: Box::new(child.into()),
        }
    }

    /// Creates a new `BoundingVolume` with the world bound of `child` as its box.
    pub fn enclosing(child: impl Into<Geometry<T>>, primitives: &PrimitiveArena<T>) -> Self {
        let child = child.into();
        let bound = child.world_bound(primitives);
        Self {
            bound,
            child: Box::new(child),
        }
    }

    pub fn bound(&self) -> &Bounds3<T> {
        &self.bound
    }

    pub fn child(&self) -> &Geometry<T> {
        &self.child
    }
}

impl<T> Intersectable<T> for BoundingVolume<T>
where
    T: LaneReal,
{
    fn intersect(&self, ray: &Ray<T>, primitives: &PrimitiveArena<T>) -> IntersectionResult<T> {
        if self.bound.intersect_p(ray).is_none() {
            return IntersectionResult::miss();
        }
        self.child.intersect(ray, primitives)
    }

    fn world_bound(&self, _primitives: &PrimitiveArena<T>) -> Bounds3<T> {
        self.bound
    }
}
