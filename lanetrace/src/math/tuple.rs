// Shared impls for the small fixed-size math types.
//
// Every type gets the same component-wise surface; the operators that only make
// sense for some of them (point - point etc.) live next to the type itself.

/// Component-wise constructors, queries and `approx` impls.
macro_rules! impl_tuple {
    ($name:ident, $shorthand:ident, $n:literal { $($c:ident: $i:literal),+ }) => {
        impl<T> $name<T>
        where
            T: ValueType,
        {
            /// Constructs a new value from its components.
            ///
            /// NaN components are allowed, they encode "no hit" in the lane math.
            #[inline]
            pub fn new($($c: T),+) -> Self {
                Self { $($c),+ }
            }

            /// Constructs a new value of 0s.
            #[inline]
            pub fn zeros() -> Self {
                Self { $($c: T::zero()),+ }
            }

            /// Constructs a new value of 1s.
            #[inline]
            pub fn ones() -> Self {
                Self { $($c: T::one()),+ }
            }

            /// Returns `true` if any component is NaN.
            #[inline]
            pub fn has_nans(&self) -> bool {
                // Not all T have is_nan() so rely on NaN != NaN
                #[allow(clippy::eq_op)]
                let ret = false $(|| self.$c != self.$c)+;
                ret
            }

            /// Returns the component-wise minimum.
            #[inline]
            pub fn min(&self, other: Self) -> Self {
                Self { $($c: self.$c.mini(other.$c)),+ }
            }

            /// Returns the component-wise maximum.
            #[inline]
            pub fn max(&self, other: Self) -> Self {
                Self { $($c: self.$c.maxi(other.$c)),+ }
            }

            /// Returns the components in index order.
            #[inline]
            pub fn to_array(&self) -> [T; $n] {
                [$(self.$c),+]
            }
        }

        impl<T> $name<T>
        where
            T: FloatValueType,
        {
            /// Returns the component-wise absolute value.
            #[inline]
            pub fn abs(&self) -> Self {
                Self { $($c: self.$c.abs()),+ }
            }

            /// Returns the component-wise reciprocal.
            #[inline]
            pub fn recip(&self) -> Self {
                Self { $($c: self.$c.recip()),+ }
            }

            /// Returns `true` if every component is finite.
            #[inline]
            pub fn is_finite(&self) -> bool {
                true $(&& self.$c.is_finite())+
            }
        }

        /// Shorthand constructor
        #[inline]
        pub fn $shorthand<T>($($c: T),+) -> $name<T>
        where
            T: ValueType,
        {
            $name::new($($c),+)
        }

        impl<T> From<T> for $name<T>
        where
            T: ValueType,
        {
            fn from(v: T) -> Self {
                Self { $($c: v),+ }
            }
        }

        impl<T> Index<usize> for $name<T>
        where
            T: ValueType,
        {
            type Output = T;

            #[inline]
            fn index(&self, i: usize) -> &T {
                match i {
                    $($i => &self.$c,)+
                    _ => panic!("{} index {} out of range", stringify!($name), i),
                }
            }
        }

        impl<T> IndexMut<usize> for $name<T>
        where
            T: ValueType,
        {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut T {
                match i {
                    $($i => &mut self.$c,)+
                    _ => panic!("{} index {} out of range", stringify!($name), i),
                }
            }
        }

        impl<T> Mul<T> for $name<T>
        where
            T: ValueType,
        {
            type Output = Self;

            #[inline]
            fn mul(self, s: T) -> Self {
                Self { $($c: self.$c * s),+ }
            }
        }

        impl<T> Div<T> for $name<T>
        where
            T: ValueType,
        {
            type Output = Self;

            #[inline]
            fn div(self, s: T) -> Self {
                Self { $($c: self.$c / s),+ }
            }
        }

        impl<T> MulAssign<T> for $name<T>
        where
            T: ValueType,
        {
            #[inline]
            fn mul_assign(&mut self, s: T) {
                $(self.$c *= s;)+
            }
        }

        impl<T> DivAssign<T> for $name<T>
        where
            T: ValueType,
        {
            #[inline]
            fn div_assign(&mut self, s: T) {
                $(self.$c /= s;)+
            }
        }

        impl<T> AbsDiffEq for $name<T>
        where
            T: FloatValueType,
        {
            type Epsilon = T;

            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                true $(&& self.$c.abs_diff_eq(&other.$c, epsilon))+
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
                true $(&& self.$c.relative_eq(&other.$c, epsilon, max_relative))+
            }
        }
    };
}

/// `Add` and `AddAssign` against `$rhs`, producing `$out`.
macro_rules! impl_add {
    ($name:ident + $rhs:ident = $out:ident { $($c:ident),+ }) => {
        impl<T> Add<$rhs<T>> for $name<T>
        where
            T: ValueType,
        {
            type Output = $out<T>;

            #[inline]
            fn add(self, other: $rhs<T>) -> $out<T> {
                $out { $($c: self.$c + other.$c),+ }
            }
        }
    };
}

/// `Sub` against `$rhs`, producing `$out`.
macro_rules! impl_sub {
    ($name:ident - $rhs:ident = $out:ident { $($c:ident),+ }) => {
        impl<T> Sub<$rhs<T>> for $name<T>
        where
            T: ValueType,
        {
            type Output = $out<T>;

            #[inline]
            fn sub(self, other: $rhs<T>) -> $out<T> {
                $out { $($c: self.$c - other.$c),+ }
            }
        }
    };
}

/// `AddAssign` and `SubAssign` against `$rhs`.
macro_rules! impl_assign_ops {
    ($name:ident, $rhs:ident { $($c:ident),+ }) => {
        impl<T> AddAssign<$rhs<T>> for $name<T>
        where
            T: ValueType,
        {
            #[inline]
            fn add_assign(&mut self, other: $rhs<T>) {
                $(self.$c += other.$c;)+
            }
        }

        impl<T> SubAssign<$rhs<T>> for $name<T>
        where
            T: ValueType,
        {
            #[inline]
            fn sub_assign(&mut self, other: $rhs<T>) {
                $(self.$c -= other.$c;)+
            }
        }
    };
}

/// Unary negation, only for the types where it means something.
macro_rules! impl_neg {
    ($name:ident { $($c:ident),+ }) => {
        impl<T> Neg for $name<T>
        where
            T: ValueType + Neg<Output = T>,
        {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($c: -self.$c),+ }
            }
        }
    };
}
