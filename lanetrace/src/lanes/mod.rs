//! Fixed-width lane vectors that the batched intersection kernels are written against.
//!
//! Every batch holds [LANE_COUNT] primitives and processes all of them at once, padded
//! or not. The kernels only use the operations of [LaneVector] so the same code runs on
//! the portable [ArrayLanes] backend and, with the `simd` feature, on `wide::f32x8`.

mod array;
mod reduce;
#[cfg(feature = "simd")]
mod simd;

use std::ops::{Add, BitAnd, BitOr, Div, Mul, Neg, Not, Sub};

use crate::math::FloatValueType;

pub use array::ArrayLanes;
pub use reduce::{horizontal_min, min_lane, LaneMin};
#[cfg(feature = "simd")]
pub use simd::WideLanes;

/// Number of lanes in every batch.
pub const LANE_COUNT: usize = 8;

/// The lane picked when no lane matches the minimum, i.e. every lane missed.
pub const FALLBACK_LANE: usize = LANE_COUNT - 1;

/// A vector of [LANE_COUNT] values of `T` operated on as a whole.
///
/// Comparisons are ordered: any comparison involving a NaN lane is false in that
/// lane. The miss encoding of the kernels depends on this.
pub trait LaneVector<T>:
    Copy
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
where
    T: FloatValueType,
{
    /// Per-lane comparison result.
    type Mask: Copy + BitAnd<Output = Self::Mask> + BitOr<Output = Self::Mask> + Not<Output = Self::Mask>;

    fn splat(v: T) -> Self;
    fn from_array(values: [T; LANE_COUNT]) -> Self;
    fn to_array(self) -> [T; LANE_COUNT];

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;

    fn cmp_eq(self, other: Self) -> Self::Mask;
    fn cmp_lt(self, other: Self) -> Self::Mask;
    fn cmp_le(self, other: Self) -> Self::Mask;
    fn cmp_gt(self, other: Self) -> Self::Mask;
    fn cmp_ge(self, other: Self) -> Self::Mask;

    /// Picks `t` where `mask` is set and `f` elsewhere.
    fn select(mask: Self::Mask, t: Self, f: Self) -> Self;

    /// Packs `mask` into the low [LANE_COUNT] bits, bit `i` for lane `i`.
    fn mask_bits(mask: Self::Mask) -> u32;

    #[inline]
    fn zero() -> Self {
        Self::splat(T::zero())
    }

    #[inline]
    fn nan() -> Self {
        Self::splat(T::nan())
    }

    /// Replaces lanes where `keep` is unset with NaN, the lane encoding of a miss.
    #[inline]
    fn keep_or_nan(self, keep: Self::Mask) -> Self {
        Self::select(keep, self, Self::nan())
    }
}

/// Scalar precisions that have a lane backend.
pub trait LaneReal: FloatValueType {
    /// The backend used by default for this precision.
    type Lanes: LaneVector<Self>;
}

impl LaneReal for f32 {
    #[cfg(feature = "simd")]
    type Lanes = WideLanes;
    #[cfg(not(feature = "simd"))]
    type Lanes = ArrayLanes<f32>;
}

impl LaneReal for f64 {
    type Lanes = ArrayLanes<f64>;
}
