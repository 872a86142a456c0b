use approx::{AbsDiffEq, RelativeEq};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::{
    common::{FloatValueType, ValueType},
    normal::Normal,
    point::Point3,
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Vectors.html

/// A two-dimensional vector.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<T>
where
    T: ValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
}

/// A three-dimensional vector.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<T>
where
    T: ValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
    /// The z component of the vector.
    pub z: T,
}

/// A four-dimensional vector.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec4<T>
where
    T: ValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
    /// The z component of the vector.
    pub z: T,
    /// The w component of the vector.
    pub w: T,
}

impl_tuple!(Vec2, vec2, 2 { x: 0, y: 1 });
impl_tuple!(Vec3, vec3, 3 { x: 0, y: 1, z: 2 });
impl_tuple!(Vec4, vec4, 4 { x: 0, y: 1, z: 2, w: 3 });

impl_add!(Vec2 + Vec2 = Vec2 { x, y });
impl_add!(Vec3 + Vec3 = Vec3 { x, y, z });
impl_add!(Vec4 + Vec4 = Vec4 { x, y, z, w });
impl_sub!(Vec2 - Vec2 = Vec2 { x, y });
impl_sub!(Vec3 - Vec3 = Vec3 { x, y, z });
impl_sub!(Vec4 - Vec4 = Vec4 { x, y, z, w });
impl_assign_ops!(Vec2, Vec2 { x, y });
impl_assign_ops!(Vec3, Vec3 { x, y, z });
impl_assign_ops!(Vec4, Vec4 { x, y, z, w });
impl_neg!(Vec2 { x, y });
impl_neg!(Vec3 { x, y, z });
impl_neg!(Vec4 { x, y, z, w });

impl<T> Vec2<T>
where
    T: ValueType,
{
    /// Calculates the dot product of this `Vec2` and another `Vec2`.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Finds the index of the maximum component in this `Vec2`.
    #[inline]
    pub fn max_dimension(&self) -> usize {
        if self.x > self.y {
            0
        } else {
            1
        }
    }
}

impl<T> Vec3<T>
where
    T: ValueType,
{
    /// Calculates the dot product of this `Vec3` and another `Vec3`.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the squared length of this `Vec3`.
    #[inline]
    pub fn len_sqr(&self) -> T {
        self.dot(*self)
    }

    /// Multiplies the components of two `Vec3`s pairwise.
    #[inline]
    pub fn mul_elem(&self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Finds the value of the minimum component in this `Vec3`.
    #[inline]
    pub fn min_comp(&self) -> T {
        self.x.mini(self.y.mini(self.z))
    }

    /// Finds the value of the maximum component in this `Vec3`.
    #[inline]
    pub fn max_comp(&self) -> T {
        self.x.maxi(self.y.maxi(self.z))
    }

    /// Finds the index of the maximum component in this `Vec3`.
    #[inline]
    pub fn max_dimension(&self) -> usize {
        if self.x > self.y {
            if self.x > self.z {
                0
            } else {
                2
            }
        } else if self.y > self.z {
            1
        } else {
            2
        }
    }
}

impl<T> Vec3<T>
where
    T: FloatValueType,
{
    /// Calculates the length of this `Vec3`.
    #[inline]
    pub fn len(&self) -> T {
        self.len_sqr().sqrt()
    }

    /// Returns this `Vec3` scaled to unit length.
    ///
    /// A zero vector turns into NaNs, which the intersection code treats as a miss.
    #[inline]
    pub fn normalized(&self) -> Self {
        *self / self.len()
    }

    /// Calculates the dot product of this `Vec3` and a [Normal].
    #[inline]
    pub fn dot_n(&self, n: Normal<T>) -> T {
        self.x * n.x + self.y * n.y + self.z * n.z
    }

    /// Calculates the cross product of this `Vec3` and another `Vec3`.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        Self {
            x: (self.y * other.z) - (self.z * other.y),
            y: (self.z * other.x) - (self.x * other.z),
            z: (self.x * other.y) - (self.y * other.x),
        }
    }
}

impl<T> Vec4<T>
where
    T: ValueType,
{
    /// Calculates the dot product of this `Vec4` and another `Vec4`.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Returns the first three components.
    #[inline]
    pub fn xyz(&self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl<T> From<Normal<T>> for Vec3<T>
where
    T: ValueType,
{
    fn from(n: Normal<T>) -> Self {
        Self::new(n.x, n.y, n.z)
    }
}

impl<T> From<Point3<T>> for Vec3<T>
where
    T: ValueType,
{
    fn from(p: Point3<T>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}
