use approx::{AbsDiffEq, RelativeEq};
use std::ops::Mul;

use super::{common::FloatValueType, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Utilities/Mathematical_Routines.html#Matrix4x4

/// A row-major 3x3 `Matrix3x3`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix3x3<T>
where
    T: FloatValueType,
{
    /// Raw values in row-major order.
    pub m: [[T; 3]; 3],
}

/// A row-major 4x4 `Matrix4x4`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix4x4<T>
where
    T: FloatValueType,
{
    /// Raw values in row-major order.
    pub m: [[T; 4]; 4],
}

impl<T> Matrix3x3<T>
where
    T: FloatValueType,
{
    /// Creates a new `Matrix3x3`.
    pub fn new(m: [[T; 3]; 3]) -> Self {
        Self { m }
    }

    /// Creates a `Matrix3x3` with `a`, `b` and `c` as its columns.
    pub fn from_cols(a: Vec3<T>, b: Vec3<T>, c: Vec3<T>) -> Self {
        Self {
            m: [[a.x, b.x, c.x], [a.y, b.y, c.y], [a.z, b.z, c.z]],
        }
    }

    /// Creates a new identity `Matrix3x3`.
    pub fn identity() -> Self {
        let (o, z) = (T::one(), T::zero());
        Self {
            m: [[o, z, z], [z, o, z], [z, z, o]],
        }
    }

    /// Returns the transpose of this `Matrix3x3`.
    pub fn transposed(&self) -> Self {
        let m = &self.m;
        Self {
            m: [
                [m[0][0], m[1][0], m[2][0]],
                [m[0][1], m[1][1], m[2][1]],
                [m[0][2], m[1][2], m[2][2]],
            ],
        }
    }

    /// Calculates the determinant of this `Matrix3x3`.
    pub fn determinant(&self) -> T {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns the inverse of this `Matrix3x3` or `None` if it is singular.
    pub fn inverted(&self) -> Option<Self> {
        let det = self.determinant();
        if det == T::zero() || !det.is_finite() {
            return None;
        }
        let m = &self.m;
        let inv_det = det.recip();
        // Adjugate divided by the determinant
        let cofactor = |r0: usize, r1: usize, c0: usize, c1: usize| {
            m[r0][c0] * m[r1][c1] - m[r0][c1] * m[r1][c0]
        };
        Some(Self {
            m: [
                [
                    cofactor(1, 2, 1, 2) * inv_det,
                    cofactor(0, 2, 2, 1) * inv_det,
                    cofactor(0, 1, 1, 2) * inv_det,
                ],
                [
                    cofactor(1, 2, 2, 0) * inv_det,
                    cofactor(0, 2, 0, 2) * inv_det,
                    cofactor(0, 1, 2, 0) * inv_det,
                ],
                [
                    cofactor(1, 2, 0, 1) * inv_det,
                    cofactor(0, 2, 1, 0) * inv_det,
                    cofactor(0, 1, 0, 1) * inv_det,
                ],
            ],
        })
    }

    /// Checks if this `Matrix3x3` contains NaNs.
    pub fn has_nans(&self) -> bool {
        self.m.iter().flatten().any(|v| v.is_nan())
    }
}

impl<T> Mul<Vec3<T>> for &Matrix3x3<T>
where
    T: FloatValueType,
{
    type Output = Vec3<T>;

    fn mul(self, v: Vec3<T>) -> Vec3<T> {
        let m = &self.m;
        Vec3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }
}

impl<'a, 'b, T> Mul<&'b Matrix3x3<T>> for &'a Matrix3x3<T>
where
    T: FloatValueType,
{
    type Output = Matrix3x3<T>;

    fn mul(self, other: &'b Matrix3x3<T>) -> Matrix3x3<T> {
        let mut ret = [[T::zero(); 3]; 3];
        for (row, ret_row) in ret.iter_mut().enumerate() {
            for (col, v) in ret_row.iter_mut().enumerate() {
                *v = self.m[row][0] * other.m[0][col]
                    + self.m[row][1] * other.m[1][col]
                    + self.m[row][2] * other.m[2][col];
            }
        }
        Matrix3x3 { m: ret }
    }
}

impl<T> Matrix4x4<T>
where
    T: FloatValueType,
{
    /// Creates a new `Matrix4x4`.
    pub fn new(m: [[T; 4]; 4]) -> Self {
        Self { m }
    }

    /// Creates a new identity `Matrix4x4`.
    pub fn identity() -> Self {
        let (o, z) = (T::one(), T::zero());
        Self {
            m: [[o, z, z, z], [z, o, z, z], [z, z, o, z], [z, z, z, o]],
        }
    }

    /// Creates a new `Matrix4x4` filled with zeroes.
    pub fn zeros() -> Self {
        Self {
            m: [[T::zero(); 4]; 4],
        }
    }

    /// Checks if this `Matrix4x4` contains NaNs.
    pub fn has_nans(&self) -> bool {
        self.m.iter().flatten().any(|v| v.is_nan())
    }

    /// Returns the `i`th row of this `Matrix4x4`.
    pub fn row(&self, i: usize) -> [T; 4] {
        self.m[i]
    }

    /// Returns the `i`th column of this `Matrix4x4`.
    pub fn col(&self, i: usize) -> [T; 4] {
        [self.m[0][i], self.m[1][i], self.m[2][i], self.m[3][i]]
    }

    /// Returns the transpose of this `Matrix4x4`.
    pub fn transposed(&self) -> Self {
        let mut ret = Self::zeros();
        for row in 0..4 {
            ret.m[row] = self.col(row);
        }
        ret
    }

    /// Returns the upper-left 3x3 block, i.e. the linear part of an affine transform.
    pub fn linear(&self) -> Matrix3x3<T> {
        let m = &self.m;
        Matrix3x3::new([
            [m[0][0], m[0][1], m[0][2]],
            [m[1][0], m[1][1], m[1][2]],
            [m[2][0], m[2][1], m[2][2]],
        ])
    }

    /// Returns the inverse of this `Matrix4x4` or `None` if it is singular.
    pub fn inverted(&self) -> Option<Self> {
        // Gauss-Jordan elimination with partial pivoting on [M | I]
        let mut a = self.m;
        let mut inv = Self::identity().m;

        for col in 0..4 {
            // Largest remaining magnitude in this column keeps the division stable
            let mut pivot = col;
            for row in (col + 1)..4 {
                if a[row][col].abs() > a[pivot][col].abs() {
                    pivot = row;
                }
            }
            let pivot_value = a[pivot][col];
            if pivot_value == T::zero() || !pivot_value.is_finite() {
                return None;
            }
            a.swap(col, pivot);
            inv.swap(col, pivot);

            let pivot_inv = pivot_value.recip();
            for k in 0..4 {
                a[col][k] *= pivot_inv;
                inv[col][k] *= pivot_inv;
            }

            for row in 0..4 {
                if row == col {
                    continue;
                }
                let factor = a[row][col];
                if factor == T::zero() {
                    continue;
                }
                for k in 0..4 {
                    a[row][k] -= factor * a[col][k];
                    inv[row][k] -= factor * inv[col][k];
                }
            }
        }

        Some(Self { m: inv })
    }
}

impl<T> From<Vec<T>> for Matrix4x4<T>
where
    T: FloatValueType,
{
    fn from(m: Vec<T>) -> Self {
        assert!(m.len() == 16);
        Self::new([
            [m[0], m[1], m[2], m[3]],
            [m[4], m[5], m[6], m[7]],
            [m[8], m[9], m[10], m[11]],
            [m[12], m[13], m[14], m[15]],
        ])
    }
}

// By ref is about twice as fast as by value so let's just endure the syntax
impl<'a, 'b, T> Mul<&'b Matrix4x4<T>> for &'a Matrix4x4<T>
where
    T: FloatValueType,
{
    type Output = Matrix4x4<T>;

    fn mul(self, other: &'b Matrix4x4<T>) -> Matrix4x4<T> {
        let mut ret = Matrix4x4::zeros();
        for row in 0..4 {
            for col in 0..4 {
                ret.m[row][col] = self.m[row][0] * other.m[0][col]
                    + self.m[row][1] * other.m[1][col]
                    + self.m[row][2] * other.m[2][col]
                    + self.m[row][3] * other.m[3][col];
            }
        }
        ret
    }
}

macro_rules! impl_matrix_approx {
    ($name:ident, $n:literal) => {
        impl<T> AbsDiffEq for $name<T>
        where
            T: FloatValueType,
        {
            type Epsilon = T;

            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                (0..$n).all(|row| {
                    (0..$n).all(|col| self.m[row][col].abs_diff_eq(&other.m[row][col], epsilon))
                })
            }
        }

        impl<T> RelativeEq for $name<T>
        where
            T: FloatValueType,
        {
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                (0..$n).all(|row| {
                    (0..$n).all(|col| {
                        self.m[row][col].relative_eq(&other.m[row][col], epsilon, max_relative)
                    })
                })
            }
        }
    };
}
impl_matrix_approx!(Matrix3x3, 3);
impl_matrix_approx!(Matrix4x4, 4);
