use std::ops::{Add, Div, Mul, Neg, Sub};

use wide::{f32x8, CmpEq, CmpGe, CmpGt, CmpLe, CmpLt};

use super::{LaneVector, LANE_COUNT};

/// `f32` lanes on `wide::f32x8`, one AVX register where available.
///
/// Masks are the all-ones/all-zeros float lanes `wide` produces from comparisons.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WideLanes(pub f32x8);

macro_rules! impl_wide_op {
    ($trait:ident, $fn:ident) => {
        impl $trait for WideLanes {
            type Output = Self;

            #[inline]
            fn $fn(self, other: Self) -> Self {
                Self(self.0.$fn(other.0))
            }
        }
    };
}
impl_wide_op!(Add, add);
impl_wide_op!(Sub, sub);
impl_wide_op!(Mul, mul);
impl_wide_op!(Div, div);

impl Neg for WideLanes {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl LaneVector<f32> for WideLanes {
    type Mask = f32x8;

    #[inline]
    fn splat(v: f32) -> Self {
        Self(f32x8::splat(v))
    }

    #[inline]
    fn from_array(values: [f32; LANE_COUNT]) -> Self {
        Self(f32x8::from(values))
    }

    #[inline]
    fn to_array(self) -> [f32; LANE_COUNT] {
        self.0.to_array()
    }

    #[inline]
    fn sqrt(self) -> Self {
        Self(self.0.sqrt())
    }

    #[inline]
    fn abs(self) -> Self {
        Self(self.0.abs())
    }

    #[inline]
    fn cmp_eq(self, other: Self) -> f32x8 {
        self.0.cmp_eq(other.0)
    }

    #[inline]
    fn cmp_lt(self, other: Self) -> f32x8 {
        self.0.cmp_lt(other.0)
    }

    #[inline]
    fn cmp_le(self, other: Self) -> f32x8 {
        self.0.cmp_le(other.0)
    }

    #[inline]
    fn cmp_gt(self, other: Self) -> f32x8 {
        self.0.cmp_gt(other.0)
    }

    #[inline]
    fn cmp_ge(self, other: Self) -> f32x8 {
        self.0.cmp_ge(other.0)
    }

    #[inline]
    fn select(mask: f32x8, t: Self, f: Self) -> Self {
        Self(mask.blend(t.0, f.0))
    }

    #[inline]
    fn mask_bits(mask: f32x8) -> u32 {
        // Only the low LANE_COUNT bits are ever set
        mask.move_mask() as u32
    }
}
