use super::{Geometry, Intersectable};
use crate::{
    error::{Error, Result},
    intersection::IntersectionResult,
    lanes::LaneReal,
    math::{Bounds3, Matrix4x4, Ray, Transform},
    primitive::PrimitiveArena,
};

/// Places a child in the world through an object-to-world transform.
///
/// Rays are taken to the child's space with the inverse, normals are brought back
/// with the inverse transpose and renormalized. For rotations with uniform scale the
/// child's distance is used as is, otherwise it is recomputed from the world space
/// hit point.
#[derive(Clone, Debug)]
pub struct TransformedGeometry<T>
where
    T: LaneReal,
{
    object_to_world: Transform<T>,
    world_to_object: Transform<T>,
    uniform_scale: bool,
    child: Box<Geometry<T>>,
}

impl<T> TransformedGeometry<T>
where
    T: LaneReal,
{
    /// Creates a new `TransformedGeometry`.
    ///
    /// Fails if `object_to_world` can't be inverted.
    pub fn new(object_to_world: Transform<T>, child: impl Into<Geometry<T>>) -> Result<Self> {
        let det = object_to_world.m().linear().determinant();
        if det == T::zero() || !det.is_finite() || object_to_world.m_inv().has_nans() {
            return Err(Error::SingularTransform);
        }

        Ok(Self {
            world_to_object: object_to_world.inverted(),
            uniform_scale: object_to_world.has_uniform_scale(),
            object_to_world,
            child: Box::new(child.into()),
        })
    }

    /// Creates a new `TransformedGeometry` from a raw matrix, computing its inverse.
    pub fn from_matrix(m: Matrix4x4<T>, child: impl Into<Geometry<T>>) -> Result<Self> {
        let object_to_world = Transform::new_m(m).ok_or(Error::SingularTransform)?;
        Self::new(object_to_world, child)
    }

    pub fn transform(&self) -> &Transform<T> {
        &self.object_to_world
    }

    pub fn child(&self) -> &Geometry<T> {
        &self.child
    }
}

impl<T> Intersectable<T> for TransformedGeometry<T>
where
    T: LaneReal,
{
    fn intersect(&self, ray: &Ray<T>, primitives: &PrimitiveArena<T>) -> IntersectionResult<T> {
        let local_ray = &self.world_to_object * *ray;
        let local = self.child.intersect(&local_ray, primitives);
        let id = match local.hit {
            Some(id) => id,
            None => return local,
        };

        let distance = if self.uniform_scale {
            local.distance
        } else {
            // Project the world hit point back on the world ray
            let p = &self.object_to_world * local_ray.point(local.distance);
            let t = (p - ray.o).dot(ray.d) / ray.d.len_sqr();
            if t < T::zero() {
                T::zero()
            } else {
                t
            }
        };
        let normal = (&self.object_to_world * local.normal).normalized();

        IntersectionResult::new(id, distance, normal)
    }

    fn world_bound(&self, primitives: &PrimitiveArena<T>) -> Bounds3<T> {
        &self.object_to_world * self.child.world_bound(primitives)
    }
}
