mod aabb;
mod parallelogram;
mod plane;
mod sphere;
mod triangle;

pub use aabb::AxisAlignedBox;
pub use parallelogram::Parallelogram;
pub use plane::Plane;
pub use sphere::Sphere;
pub use triangle::Triangle;

use crate::math::{Bounds3, FloatValueType, Normal, Point3, Ray};

/// Ray parameters of a hit along with the surface normal at the entrance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShapeHit<T>
where
    T: FloatValueType,
{
    /// Near root, clamped to 0 if the ray starts inside.
    pub entrance: T,
    /// Far root. Equal to `entrance` for planar shapes.
    pub exit: T,
    /// Normal at `ray.point(entrance)`.
    pub normal: Normal<T>,
}

/// Closed-form ray intersection for a single primitive.
///
/// The kernels never branch on degenerate input: NaN or infinite parameters and
/// zero directions fall out as misses through the arithmetic itself.
pub trait Shape<T>: Send + Sync
where
    T: FloatValueType,
{
    /// Intersects [Ray] with this shape.
    fn intersect(&self, ray: &Ray<T>) -> Option<ShapeHit<T>>;

    /// Returns the entrance distance or +inf on a miss.
    fn intersect_entrance(&self, ray: &Ray<T>) -> T {
        self.intersect(ray)
            .map_or_else(T::infinity, |hit| hit.entrance)
    }

    /// Returns the surface normal at `p`, which is expected to lie on the shape.
    fn normal_at(&self, p: Point3<T>) -> Normal<T>;

    /// Returns the world space AABB of the shape.
    fn world_bound(&self) -> Bounds3<T>;
}

// Shared by the scalar kernels here and the lane kernels in the batches so both
// accept exactly the same hits.
#[inline]
pub(crate) fn accept_distance<T>(t: T) -> bool
where
    T: FloatValueType,
{
    t >= T::zero() && t < T::infinity()
}

/// `|d·n|` at or below this counts as a ray parallel to a plane.
#[inline]
pub(crate) fn parallel_epsilon<T>() -> T
where
    T: FloatValueType,
{
    T::lit(1e-9)
}
