use approx::{AbsDiffEq, RelativeEq};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::{
    common::{FloatValueType, ValueType},
    vector::Vec3,
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Surface_Interaction.html

/// A surface normal.
///
/// Kept apart from [Vec3] since normals transform with the inverse transpose.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Normal<T>
where
    T: ValueType,
{
    /// The x component of the normal.
    pub x: T,
    /// The y component of the normal.
    pub y: T,
    /// The z component of the normal.
    pub z: T,
}

impl_tuple!(Normal, normal, 3 { x: 0, y: 1, z: 2 });
impl_add!(Normal + Normal = Normal { x, y, z });
impl_sub!(Normal - Normal = Normal { x, y, z });
impl_assign_ops!(Normal, Normal { x, y, z });
impl_neg!(Normal { x, y, z });

impl<T> Normal<T>
where
    T: FloatValueType,
{
    /// Calculates the dot product of this `Normal` and a [Vec3].
    #[inline]
    pub fn dot_v(&self, v: Vec3<T>) -> T {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    /// Returns this `Normal` scaled to unit length.
    #[inline]
    pub fn normalized(&self) -> Self {
        *self / Vec3::from(*self).len()
    }

    /// Returns this `Normal` flipped to the same hemisphere as `v`.
    #[inline]
    pub fn face_forward(&self, v: Vec3<T>) -> Self {
        if self.dot_v(v) < T::zero() {
            -*self
        } else {
            *self
        }
    }
}

impl<T> From<Vec3<T>> for Normal<T>
where
    T: ValueType,
{
    fn from(v: Vec3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
