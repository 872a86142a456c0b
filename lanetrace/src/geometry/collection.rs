use super::{Geometry, Intersectable};
use crate::{
    intersection::IntersectionResult,
    lanes::LaneReal,
    math::{Bounds3, Ray},
    primitive::PrimitiveArena,
};

/// A flat list of nodes that are all tested against every ray.
///
/// The nearest hit wins. On equal distances the child that was added first wins,
/// which keeps coincident surfaces stable.
#[derive(Clone, Debug)]
pub struct Collection<T>
where
    T: LaneReal,
{
    children: Vec<Geometry<T>>,
}

impl<T> Collection<T>
where
    T: LaneReal,
{
    /// Creates a new empty `Collection`.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Appends `child` after the existing children.
    pub fn push(&mut self, child: impl Into<Geometry<T>>) {
        self.children.push(child.into());
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterates the children in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Geometry<T>> {
        self.children.iter()
    }
}

impl<T> Default for Collection<T>
where
    T: LaneReal,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<Geometry<T>> for Collection<T>
where
    T: LaneReal,
{
    fn from_iter<I: IntoIterator<Item = Geometry<T>>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}

impl<T> Intersectable<T> for Collection<T>
where
    T: LaneReal,
{
    fn intersect(&self, ray: &Ray<T>, primitives: &PrimitiveArena<T>) -> IntersectionResult<T> {
        self.children
            .iter()
            .fold(IntersectionResult::miss(), |nearest, child| {
                let result = child.intersect(ray, primitives);
                if result.is_nearer_than(&nearest) {
                    result
                } else {
                    nearest
                }
            })
    }

    fn world_bound(&self, primitives: &PrimitiveArena<T>) -> Bounds3<T> {
        self.children
            .iter()
            .fold(Bounds3::empty(), |b, child| b.union_b(child.world_bound(primitives)))
    }
}
