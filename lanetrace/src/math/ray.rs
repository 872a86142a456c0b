use super::{common::FloatValueType, point::Point3, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Rays.html

/// A ray with origin `o` and direction `d`.
///
/// `d` is used as given and may be unnormalized, so hit distances are in units
/// of `d`. Every intersection routine solves for the full quadratic/linear
/// coefficients instead of assuming `|d| == 1`.
#[derive(Copy, PartialEq, Clone, Debug)]
pub struct Ray<T>
where
    T: FloatValueType,
{
    pub o: Point3<T>,
    pub d: Vec3<T>,
}

impl<T> Ray<T>
where
    T: FloatValueType,
{
    /// Creates a new `Ray`.
    pub fn new(o: Point3<T>, d: Vec3<T>) -> Self {
        Self { o, d }
    }

    /// Checks if any of the members in this `Ray` contain NaNs.
    pub fn has_nans(&self) -> bool {
        self.o.has_nans() || self.d.has_nans()
    }

    /// Returns the component-wise reciprocal of the direction.
    ///
    /// Computed on each call, so callers that need it more than once per query
    /// should keep the result. Zero components map to signed infinities, which
    /// the slab tests rely on.
    pub fn inv_d(&self) -> Vec3<T> {
        self.d.recip()
    }

    /// Finds the [Point3] on this `Ray` at distance `t`.
    pub fn point(&self, t: T) -> Point3<T> {
        self.o + self.d * t
    }
}

impl<T> Default for Ray<T>
where
    T: FloatValueType,
{
    /// An origin ray toward positive Y.
    fn default() -> Self {
        Self {
            o: Point3::zeros(),
            d: Vec3::new(T::zero(), T::one(), T::zero()),
        }
    }
}
