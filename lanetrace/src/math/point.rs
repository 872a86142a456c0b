use approx::{AbsDiffEq, RelativeEq};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign,
};

use super::{
    common::{FloatValueType, ValueType},
    vector::{Vec2, Vec3},
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Points.html

// Note about Point ops:
// Some don't really make mathematical sense but are useful in weighted sums
// point + point = point
// point * scalar = point

/// A two-dimensional point.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point2<T>
where
    T: ValueType,
{
    /// The x component of the point.
    pub x: T,
    /// The y component of the point.
    pub y: T,
}

/// A three-dimensional point.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point3<T>
where
    T: ValueType,
{
    /// The x component of the point.
    pub x: T,
    /// The y component of the point.
    pub y: T,
    /// The z component of the point.
    pub z: T,
}

impl_tuple!(Point2, point2, 2 { x: 0, y: 1 });
impl_tuple!(Point3, point3, 3 { x: 0, y: 1, z: 2 });

impl_add!(Point2 + Vec2 = Point2 { x, y });
impl_add!(Point2 + Point2 = Point2 { x, y });
impl_sub!(Point2 - Vec2 = Point2 { x, y });
impl_sub!(Point2 - Point2 = Vec2 { x, y });
impl_assign_ops!(Point2, Vec2 { x, y });

impl_add!(Point3 + Vec3 = Point3 { x, y, z });
impl_add!(Point3 + Point3 = Point3 { x, y, z });
impl_sub!(Point3 - Vec3 = Point3 { x, y, z });
impl_sub!(Point3 - Point3 = Vec3 { x, y, z });
impl_assign_ops!(Point3, Vec3 { x, y, z });

impl<T> Point3<T>
where
    T: FloatValueType,
{
    /// Calculates the squared distance between this `Point3` and another `Point3`.
    #[inline]
    pub fn dist_sqr(&self, other: Self) -> T {
        (*self - other).len_sqr()
    }

    /// Calculates the distance between this `Point3` and another `Point3`.
    #[inline]
    pub fn dist(&self, other: Self) -> T {
        (*self - other).len()
    }
}

impl<T> From<Vec3<T>> for Point3<T>
where
    T: ValueType,
{
    fn from(v: Vec3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
