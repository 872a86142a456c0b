use approx::{AbsDiffEq, RelativeEq};
use num::cast::{FromPrimitive, NumCast, ToPrimitive};
use num::traits::{Float, Num};
use std::fmt::Debug;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Generic types that can be stored in the math containers
pub trait ValueType:
    Num
    + Mini
    + Maxi
    + PartialOrd
    + ToPrimitive
    + FromPrimitive
    + NumCast
    + Copy
    + Debug
    + AddAssign
    + DivAssign
    + MulAssign
    + SubAssign
    + Send
    + Sync
    + 'static
{
}

/// Floating point [ValueType]s, the scalar precision the tracer runs in.
pub trait FloatValueType:
    ValueType + Float + AbsDiffEq<Epsilon = Self> + RelativeEq
{
    /// Converts an `f64` literal into this precision.
    #[inline]
    fn lit(v: f64) -> Self {
        // Lossy narrowing is the point here, f64 -> f32 always has a value
        <Self as NumCast>::from(v).unwrap_or_else(Self::nan)
    }
}

impl<T> ValueType for T where
    T: Num
        + Mini
        + Maxi
        + PartialOrd
        + ToPrimitive
        + FromPrimitive
        + NumCast
        + Copy
        + Debug
        + AddAssign
        + DivAssign
        + MulAssign
        + SubAssign
        + Send
        + Sync
        + 'static
{
}
impl<T> FloatValueType for T where
    T: ValueType + Float + AbsDiffEq<Epsilon = Self> + RelativeEq
{
}

/// Component minimum that works the same for integers and floats.
///
/// For floats, a NaN loses against any number.
pub trait Mini {
    fn mini(&self, other: Self) -> Self;
}

/// Component maximum that works the same for integers and floats.
///
/// For floats, a NaN loses against any number.
pub trait Maxi {
    fn maxi(&self, other: Self) -> Self;
}

macro_rules! impl_mini_maxi_float {
    ( $( $t:ty ),+ ) => {
        $(
            impl Mini for $t {
                #[inline]
                fn mini(&self, other: $t) -> $t {
                    self.min(other)
                }
            }

            impl Maxi for $t {
                #[inline]
                fn maxi(&self, other: $t) -> $t {
                    self.max(other)
                }
            }
        )*
    }
}
impl_mini_maxi_float!(f32, f64);

macro_rules! impl_mini_maxi_integer {
    ( $( $t:ty ),+ ) => {
        $(
            impl Mini for $t {
                #[inline]
                fn mini(&self, other: $t) -> $t {
                    *self.min(&other)
                }
            }

            impl Maxi for $t {
                #[inline]
                fn maxi(&self, other: $t) -> $t {
                    *self.max(&other)
                }
            }
        )*
    }
}
impl_mini_maxi_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64);
