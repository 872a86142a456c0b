use std::ops::{Add, Div, Mul, Neg, Sub};

use super::{LaneVector, LANE_COUNT};
use crate::math::FloatValueType;

/// Portable lane backend over a plain array.
///
/// Masks are bitmasks with bit `i` set for lane `i`. The loops are simple enough for
/// the optimizer to vectorize on targets that allow it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArrayLanes<T>(pub [T; LANE_COUNT])
where
    T: FloatValueType;

impl<T> ArrayLanes<T>
where
    T: FloatValueType,
{
    #[inline]
    fn map(self, f: impl Fn(T) -> T) -> Self {
        Self(self.0.map(f))
    }

    #[inline]
    fn zip(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        let mut ret = self.0;
        for (r, o) in ret.iter_mut().zip(other.0) {
            *r = f(*r, o);
        }
        Self(ret)
    }

    #[inline]
    fn compare(self, other: Self, f: impl Fn(T, T) -> bool) -> u8 {
        self.0
            .iter()
            .zip(other.0)
            .enumerate()
            .fold(0u8, |mask, (i, (&a, b))| mask | ((f(a, b) as u8) << i))
    }
}

macro_rules! impl_lane_op {
    ($trait:ident, $fn:ident, $op:tt) => {
        impl<T> $trait for ArrayLanes<T>
        where
            T: FloatValueType,
        {
            type Output = Self;

            #[inline]
            fn $fn(self, other: Self) -> Self {
                self.zip(other, |a, b| a $op b)
            }
        }
    };
}
impl_lane_op!(Add, add, +);
impl_lane_op!(Sub, sub, -);
impl_lane_op!(Mul, mul, *);
impl_lane_op!(Div, div, /);

impl<T> Neg for ArrayLanes<T>
where
    T: FloatValueType,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|v| -v)
    }
}

impl<T> LaneVector<T> for ArrayLanes<T>
where
    T: FloatValueType,
{
    type Mask = u8;

    #[inline]
    fn splat(v: T) -> Self {
        Self([v; LANE_COUNT])
    }

    #[inline]
    fn from_array(values: [T; LANE_COUNT]) -> Self {
        Self(values)
    }

    #[inline]
    fn to_array(self) -> [T; LANE_COUNT] {
        self.0
    }

    #[inline]
    fn sqrt(self) -> Self {
        self.map(|v| v.sqrt())
    }

    #[inline]
    fn abs(self) -> Self {
        self.map(|v| v.abs())
    }

    #[inline]
    fn cmp_eq(self, other: Self) -> u8 {
        self.compare(other, |a, b| a == b)
    }

    #[inline]
    fn cmp_lt(self, other: Self) -> u8 {
        self.compare(other, |a, b| a < b)
    }

    #[inline]
    fn cmp_le(self, other: Self) -> u8 {
        self.compare(other, |a, b| a <= b)
    }

    #[inline]
    fn cmp_gt(self, other: Self) -> u8 {
        self.compare(other, |a, b| a > b)
    }

    #[inline]
    fn cmp_ge(self, other: Self) -> u8 {
        self.compare(other, |a, b| a >= b)
    }

    #[inline]
    fn select(mask: u8, t: Self, f: Self) -> Self {
        let mut ret = f.0;
        for (i, r) in ret.iter_mut().enumerate() {
            if mask & (1 << i) != 0 {
                *r = t.0[i];
            }
        }
        Self(ret)
    }

    #[inline]
    fn mask_bits(mask: u8) -> u32 {
        mask as u32
    }
}
