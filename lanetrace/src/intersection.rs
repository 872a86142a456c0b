use crate::{
    math::{FloatValueType, Normal, Point3, Ray},
    primitive::PrimitiveId,
    shapes::ShapeHit,
};

/// Nearest hit of a ray, as produced by every node of the geometry graph.
///
/// `distance` is +inf exactly when `hit` is `None`. `normal` is only meaningful
/// for a hit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntersectionResult<T>
where
    T: FloatValueType,
{
    pub hit: Option<PrimitiveId>,
    pub distance: T,
    pub normal: Normal<T>,
}

impl<T> IntersectionResult<T>
where
    T: FloatValueType,
{
    /// Creates the result of a ray that hit nothing.
    pub fn miss() -> Self {
        Self {
            hit: None,
            distance: T::infinity(),
            normal: Normal::zeros(),
        }
    }

    /// Creates a hit on `primitive`.
    ///
    /// Falls back to a miss if `distance` is not a finite non-negative value, whichever
    /// kernel produced it.
    pub fn new(primitive: PrimitiveId, distance: T, normal: Normal<T>) -> Self {
        if distance >= T::zero() && distance.is_finite() {
            Self {
                hit: Some(primitive),
                distance,
                normal,
            }
        } else {
            Self::miss()
        }
    }

    /// Creates a result from a [ShapeHit] on `primitive`, or a miss for `None`.
    pub fn from_shape_hit(primitive: PrimitiveId, hit: Option<ShapeHit<T>>) -> Self {
        hit.map_or_else(Self::miss, |h| Self::new(primitive, h.entrance, h.normal))
    }

    /// Checks if this result holds a hit.
    pub fn is_hit(&self) -> bool {
        self.hit.is_some()
    }

    /// Returns the world position of the hit along `ray`, if any.
    pub fn point(&self, ray: &Ray<T>) -> Option<Point3<T>> {
        self.hit.map(|_| ray.point(self.distance))
    }

    /// Checks if this result should replace `other` as the nearest.
    ///
    /// Strictly closer only, so on a tie the earlier result stays.
    pub fn is_nearer_than(&self, other: &Self) -> bool {
        self.distance < other.distance
    }
}

impl<T> Default for IntersectionResult<T>
where
    T: FloatValueType,
{
    fn default() -> Self {
        Self::miss()
    }
}
