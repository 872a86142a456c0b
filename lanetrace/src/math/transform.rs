use std::ops::Mul;

use super::{
    bounds::Bounds3, common::FloatValueType, matrix::Matrix4x4, normal::Normal, point::Point3,
    ray::Ray, vector::Vec3,
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Transformations.html

/// An affine transformation along with its cached inverse.
#[derive(Clone, Debug, PartialEq)]
pub struct Transform<T>
where
    T: FloatValueType,
{
    m: Matrix4x4<T>,
    m_inv: Matrix4x4<T>,
}

impl<T> Transform<T>
where
    T: FloatValueType,
{
    /// Creates a new `Transform` from raw [Matrix4x4] rows.
    /// Returns `None` if the matrix is singular.
    pub fn new(m: [[T; 4]; 4]) -> Option<Self> {
        Self::new_m(Matrix4x4::new(m))
    }

    /// Creates a new `Transform` from a [Matrix4x4].
    /// Returns `None` if the matrix is singular.
    pub fn new_m(m: Matrix4x4<T>) -> Option<Self> {
        let m_inv = m.inverted()?;
        Some(Self::new_full(m, m_inv))
    }

    /// Creates a new `Transform` from a [Matrix4x4] and its inverse.
    pub fn new_full(m: Matrix4x4<T>, m_inv: Matrix4x4<T>) -> Self {
        debug_assert!(!m.has_nans());
        debug_assert!(!m_inv.has_nans());
        Self { m, m_inv }
    }

    /// Creates a new identity `Transform`.
    pub fn identity() -> Self {
        let m = Matrix4x4::identity();
        Self::new_full(m, m)
    }

    /// Returns a reference to the [Matrix4x4] of this `Transform`.
    pub fn m(&self) -> &Matrix4x4<T> {
        &self.m
    }

    /// Returns a reference to the inverse [Matrix4x4] of this `Transform`.
    pub fn m_inv(&self) -> &Matrix4x4<T> {
        &self.m_inv
    }

    /// Returns the inverse of this `Transform`.
    pub fn inverted(&self) -> Self {
        Self::new_full(self.m_inv, self.m)
    }

    /// Returns the transpose of this `Transform`.
    pub fn transposed(&self) -> Self {
        Self::new_full(self.m.transposed(), self.m_inv.transposed())
    }

    /// Checks if this `Transform` is the identity transform.
    pub fn is_identity(&self) -> bool {
        self.m == Matrix4x4::identity()
    }

    /// Checks if the linear part of this `Transform` is a rotation times a uniform scale.
    ///
    /// Ray distances are preserved exactly under these, see [TransformedGeometry](crate::geometry::TransformedGeometry).
    pub fn has_uniform_scale(&self) -> bool {
        let l = self.m.linear();
        let cols = [
            Vec3::new(l.m[0][0], l.m[1][0], l.m[2][0]),
            Vec3::new(l.m[0][1], l.m[1][1], l.m[2][1]),
            Vec3::new(l.m[0][2], l.m[1][2], l.m[2][2]),
        ];
        let s2 = cols[0].len_sqr();
        let tolerance = T::lit(1e-4) * s2;
        let orthogonal = cols[0].dot(cols[1]).abs() <= tolerance
            && cols[0].dot(cols[2]).abs() <= tolerance
            && cols[1].dot(cols[2]).abs() <= tolerance;
        orthogonal
            && (cols[1].len_sqr() - s2).abs() <= tolerance
            && (cols[2].len_sqr() - s2).abs() <= tolerance
    }

    /// Checks if this `Transform` swaps the handedness of the coordinate system.
    pub fn swaps_handedness(&self) -> bool {
        self.m.linear().determinant() < T::zero()
    }
}

impl<T> Default for Transform<T>
where
    T: FloatValueType,
{
    fn default() -> Self {
        Self::identity()
    }
}

impl<'a, 'b, T> Mul<&'b Transform<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Transform<T>;

    fn mul(self, other: &'b Transform<T>) -> Transform<T> {
        // (AB)^-1 = B^-1 A^-1
        Transform::new_full(&self.m * &other.m, &other.m_inv * &self.m_inv)
    }
}

impl<'a, T> Mul<Vec3<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Vec3<T>;

    fn mul(self, v: Vec3<T>) -> Vec3<T> {
        let m = &self.m.m;
        Vec3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }
}

impl<'a, T> Mul<Point3<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Point3<T>;

    fn mul(self, p: Point3<T>) -> Point3<T> {
        let m = &self.m.m;
        let xp = m[0][0] * p.x + m[0][1] * p.y + m[0][2] * p.z + m[0][3];
        let yp = m[1][0] * p.x + m[1][1] * p.y + m[1][2] * p.z + m[1][3];
        let zp = m[2][0] * p.x + m[2][1] * p.y + m[2][2] * p.z + m[2][3];
        let wp = m[3][0] * p.x + m[3][1] * p.y + m[3][2] * p.z + m[3][3];
        if wp == T::one() {
            Point3::new(xp, yp, zp)
        } else {
            Point3::new(xp, yp, zp) / wp
        }
    }
}

impl<'a, T> Mul<Normal<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Normal<T>;

    /// Transforms by the inverse transpose. The result is not renormalized.
    fn mul(self, n: Normal<T>) -> Normal<T> {
        let m_inv = &self.m_inv.m;
        Normal::new(
            m_inv[0][0] * n.x + m_inv[1][0] * n.y + m_inv[2][0] * n.z,
            m_inv[0][1] * n.x + m_inv[1][1] * n.y + m_inv[2][1] * n.z,
            m_inv[0][2] * n.x + m_inv[1][2] * n.y + m_inv[2][2] * n.z,
        )
    }
}

impl<'a, T> Mul<Ray<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Ray<T>;

    /// The direction is transformed as-is, so ray parameters stay comparable.
    fn mul(self, ray: Ray<T>) -> Ray<T> {
        Ray::new(self * ray.o, self * ray.d)
    }
}

impl<'a, T> Mul<Bounds3<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Bounds3<T>;

    fn mul(self, b: Bounds3<T>) -> Bounds3<T> {
        if b.is_empty() {
            return b;
        }
        if !b.is_bounded() {
            return Bounds3::infinite();
        }
        (0..8).fold(Bounds3::empty(), |acc, i| acc.union_p(self * b.corner(i)))
    }
}
