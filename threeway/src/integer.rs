//! Comparison of integers of different types by their mathematical value.
//!
//! Comparing a negative signed integer against an unsigned one with `as` casts gives wrong
//! answers (`-42 as u32` is large). These functions compare the values themselves.
//!
//! ```
//! use threeway::integer::{cmp_less, in_range};
//!
//! let x = -42_i32;
//! let y = 665_u32;
//! assert!(cmp_less(x, y));
//! assert!(!in_range::<u8, _>(x));
//! assert!(in_range::<u8, _>(42));
//! ```

use serde::{Deserialize, Serialize};

use crate::order::{Category, Outcome, StrongOrder, ThreeWay, TotalOrder};

/// An integer value, widened so that every primitive integer fits.
///
/// Variants are ordered so that the derived order is the numeric order.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Wide {
    /// A value below zero.
    Negative(i128),
    /// A value of zero or more.
    NonNegative(u128),
}

/// A primitive integer type.
pub trait Integer: Copy {
    /// The smallest value of the type.
    const MIN: Self;
    /// The largest value of the type.
    const MAX: Self;
    /// The value, widened.
    fn widen(self) -> Wide;
}

macro_rules! implement_signed {
    ($($index_type:ty,)*) => (
        $(
            impl Integer for $index_type {
                const MIN: Self = <$index_type>::MIN;
                const MAX: Self = <$index_type>::MAX;
                #[inline]
                fn widen(self) -> Wide {
                    if self < 0 { Wide::Negative(self as i128) } else { Wide::NonNegative(self as u128) }
                }
            }
        )*
    )
}

macro_rules! implement_unsigned {
    ($($index_type:ty,)*) => (
        $(
            impl Integer for $index_type {
                const MIN: Self = <$index_type>::MIN;
                const MAX: Self = <$index_type>::MAX;
                #[inline]
                fn widen(self) -> Wide { Wide::NonNegative(self as u128) }
            }
        )*
    )
}

implement_signed!(i8, i16, i32, i64, i128, isize,);
implement_unsigned!(u8, u16, u32, u64, u128, usize,);

/// Compares two integers of possibly different types.
#[inline]
pub fn cmp_three_way<A: Integer, B: Integer>(a: A, b: B) -> Outcome {
    a.widen().cmp(&b.widen()).into()
}

/// `a == b` by value.
#[inline]
pub fn cmp_equal<A: Integer, B: Integer>(a: A, b: B) -> bool {
    cmp_three_way(a, b).is_eq()
}

/// `a != b` by value.
#[inline]
pub fn cmp_not_equal<A: Integer, B: Integer>(a: A, b: B) -> bool {
    cmp_three_way(a, b).is_ne()
}

/// `a < b` by value.
#[inline]
pub fn cmp_less<A: Integer, B: Integer>(a: A, b: B) -> bool {
    cmp_three_way(a, b).is_lt()
}

/// `a <= b` by value.
#[inline]
pub fn cmp_less_equal<A: Integer, B: Integer>(a: A, b: B) -> bool {
    cmp_three_way(a, b).is_le()
}

/// `a > b` by value.
#[inline]
pub fn cmp_greater<A: Integer, B: Integer>(a: A, b: B) -> bool {
    cmp_three_way(a, b).is_gt()
}

/// `a >= b` by value.
#[inline]
pub fn cmp_greater_equal<A: Integer, B: Integer>(a: A, b: B) -> bool {
    cmp_three_way(a, b).is_ge()
}

/// True iff `value` can be represented as a `T`.
#[inline]
pub fn in_range<T: Integer, V: Integer>(value: V) -> bool {
    let value = value.widen();
    T::MIN.widen() <= value && value <= T::MAX.widen()
}

/// An integer that compares by value against integers of any other type.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Safe<T>(pub T);

impl<A: Integer, B: Integer> ThreeWay<Safe<B>> for Safe<A> {
    const CATEGORY: Category = Category::Strong;
    #[inline]
    fn compare(&self, other: &Safe<B>) -> Outcome {
        cmp_three_way(self.0, other.0)
    }
}
impl<A: Integer, B: Integer> TotalOrder<Safe<B>> for Safe<A> { }
impl<A: Integer, B: Integer> StrongOrder<Safe<B>> for Safe<A> { }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_signedness() {
        assert!(cmp_less(-42_i32, 665_u32));
        assert!(cmp_greater(665_u32, -42_i32));
        assert!(cmp_not_equal(-1_i8, u128::MAX));
        assert!(cmp_equal(7_u8, 7_i64));
        assert!(cmp_less_equal(i128::MIN, 0_u8));
        assert!(cmp_greater_equal(u128::MAX, i128::MAX));
        assert_eq!(cmp_three_way(-1_i64, -2_i8), Outcome::Greater);
    }

    #[test]
    fn ranges() {
        assert!(!in_range::<u8, _>(-42_i32));
        assert!(in_range::<u8, _>(42_i32));
        assert!(in_range::<u8, _>(255_u64));
        assert!(!in_range::<u8, _>(256_u64));
        assert!(in_range::<i8, _>(-128_i64));
        assert!(!in_range::<i8, _>(-129_i64));
        assert!(!in_range::<i64, _>(u64::MAX));
        assert!(in_range::<u128, _>(usize::MAX));
    }

    #[test]
    fn safe_wrapper() {
        assert_eq!(Safe(-42_i32).compare(&Safe(665_u32)), Outcome::Less);
        assert!(Safe(3_u16).equal(&Safe(3_i128)));
        assert_eq!(<Safe<i8> as ThreeWay<Safe<u64>>>::CATEGORY, Category::Strong);
    }
}
