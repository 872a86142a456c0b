use super::{LaneVector, FALLBACK_LANE, LANE_COUNT};
use crate::math::FloatValueType;

/// The smallest lane value and the lane holding it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LaneMin<T> {
    pub lane: usize,
    pub value: T,
}

/// Minimum over all lanes by pairwise halving.
///
/// NaN lanes never win. If every lane is NaN the result is +inf.
#[inline]
pub fn horizontal_min<T, V>(values: V) -> T
where
    T: FloatValueType,
    V: LaneVector<T>,
{
    // NaN != NaN, so this swaps exactly the NaN lanes for +inf
    let ordered = V::select(values.cmp_eq(values), values, V::splat(T::infinity()));
    let mut v = ordered.to_array();
    let mut width = LANE_COUNT;
    while width > 1 {
        width /= 2;
        for i in 0..width {
            if v[i + width] < v[i] {
                v[i] = v[i + width];
            }
        }
    }
    v[0]
}

/// Finds the minimum lane value and the lowest lane index holding it.
///
/// The fallback bit for [FALLBACK_LANE] is set on top of the equality mask, so a
/// query where nothing matches (all NaN) still resolves to a definite lane. Callers
/// must decide hit or miss from `value`, never from `lane`.
#[inline]
pub fn min_lane<T, V>(values: V) -> LaneMin<T>
where
    T: FloatValueType,
    V: LaneVector<T>,
{
    let value = horizontal_min(values);
    let matches = V::mask_bits(values.cmp_eq(V::splat(value)));
    let lane = (matches | (1 << FALLBACK_LANE)).trailing_zeros() as usize;
    LaneMin { lane, value }
}
