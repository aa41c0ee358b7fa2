//! Traits and types for three-way comparison.
//!
//! A comparison produces an [`Outcome`], and every comparator declares the [`Category`] of
//! order it implements. Composite comparators (tuples, sequences, field lists) take the
//! weakest category of their parts, and report [`Outcome::Unordered`] whenever any of their
//! parts does.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::fields::lexicographic;

/// How strict the order implemented by a comparator is.
///
/// Variants are declared from weakest to strongest, so the derived `Ord` places `Partial`
/// below `Weak` below `Strong` and the weakest of several categories is their minimum.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    /// Some pairs of values may be unordered, as with floating point `NaN`.
    Partial,
    /// A total order in which equivalent values need not be substitutable.
    Weak,
    /// A total order in which equivalent values are substitutable.
    Strong,
}

impl Category {
    /// The weaker of two categories.
    ///
    /// # Examples
    ///
    /// ```
    /// use threeway::Category;
    ///
    /// assert_eq!(Category::Strong.weaker(Category::Weak), Category::Weak);
    /// assert_eq!(Category::Weak.weaker(Category::Partial), Category::Partial);
    /// assert_eq!(Category::Strong.weaker(Category::Strong), Category::Strong);
    /// ```
    #[inline]
    pub const fn weaker(self, other: Category) -> Category {
        match (self, other) {
            (Category::Partial, _) | (_, Category::Partial) => Category::Partial,
            (Category::Weak, _) | (_, Category::Weak) => Category::Weak,
            (Category::Strong, Category::Strong) => Category::Strong,
        }
    }

    /// The weakest category in `categories`, or `Strong` if there are none.
    ///
    /// This is a `const fn`, so composite types can fix their category at compile time.
    ///
    /// # Examples
    ///
    /// ```
    /// use threeway::Category;
    ///
    /// const MIXED: Category = Category::weakest(&[Category::Strong, Category::Partial, Category::Weak]);
    /// assert_eq!(MIXED, Category::Partial);
    /// assert_eq!(Category::weakest(&[]), Category::Strong);
    /// ```
    pub const fn weakest(categories: &[Category]) -> Category {
        let mut result = Category::Strong;
        let mut index = 0;
        while index < categories.len() {
            result = result.weaker(categories[index]);
            index += 1;
        }
        result
    }

    /// The weakest category produced by an iterator, or `Strong` if it is empty.
    pub fn weakest_of<I: IntoIterator<Item = Category>>(categories: I) -> Category {
        categories.into_iter().fold(Category::Strong, Category::weaker)
    }

    /// True for `Strong` and `Weak`: comparators of these categories never yield
    /// [`Outcome::Unordered`].
    #[inline]
    pub const fn is_total(self) -> bool {
        !matches!(self, Category::Partial)
    }
}

/// The result of a three-way comparison.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// The left operand orders before the right.
    Less,
    /// The operands are equivalent.
    Equal,
    /// The left operand orders after the right.
    Greater,
    /// The operands have no order relative to each other.
    Unordered,
}

impl Outcome {
    /// True iff the outcome is `Equal`.
    #[inline]
    pub const fn is_eq(self) -> bool {
        matches!(self, Outcome::Equal)
    }
    /// True unless the outcome is `Equal`; in particular, true for `Unordered`.
    #[inline]
    pub const fn is_ne(self) -> bool {
        !self.is_eq()
    }
    /// True iff the outcome is `Less`.
    #[inline]
    pub const fn is_lt(self) -> bool {
        matches!(self, Outcome::Less)
    }
    /// True iff the outcome is `Less` or `Equal`.
    #[inline]
    pub const fn is_le(self) -> bool {
        matches!(self, Outcome::Less | Outcome::Equal)
    }
    /// True iff the outcome is `Greater`.
    #[inline]
    pub const fn is_gt(self) -> bool {
        matches!(self, Outcome::Greater)
    }
    /// True iff the outcome is `Greater` or `Equal`.
    #[inline]
    pub const fn is_ge(self) -> bool {
        matches!(self, Outcome::Greater | Outcome::Equal)
    }

    /// The outcome of the comparison with operands swapped.
    ///
    /// ```
    /// use threeway::Outcome;
    ///
    /// assert_eq!(Outcome::Less.reverse(), Outcome::Greater);
    /// assert_eq!(Outcome::Unordered.reverse(), Outcome::Unordered);
    /// ```
    #[inline]
    pub const fn reverse(self) -> Outcome {
        match self {
            Outcome::Less => Outcome::Greater,
            Outcome::Greater => Outcome::Less,
            other => other,
        }
    }

    /// The corresponding `std` ordering, or `None` for `Unordered`.
    #[inline]
    pub fn to_ordering(self) -> Option<Ordering> {
        match self {
            Outcome::Less => Some(Ordering::Less),
            Outcome::Equal => Some(Ordering::Equal),
            Outcome::Greater => Some(Ordering::Greater),
            Outcome::Unordered => None,
        }
    }
}

impl From<Ordering> for Outcome {
    #[inline]
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Outcome::Less,
            Ordering::Equal => Outcome::Equal,
            Ordering::Greater => Outcome::Greater,
        }
    }
}

impl From<Option<Ordering>> for Outcome {
    #[inline]
    fn from(ordering: Option<Ordering>) -> Self {
        ordering.map_or(Outcome::Unordered, Outcome::from)
    }
}

/// A type that can be compared three ways against `Rhs`.
///
/// This trait is distinct from Rust's `PartialOrd` and `Ord` traits, because it makes the
/// category of the order a property of the implementation, and because one type may want
/// a comparison here that differs from the one it uses for canonicalization or hashing.
///
/// Only [`compare`](ThreeWay::compare) is required; every other predicate is derived from
/// its outcome. For `Unordered` outcomes every predicate is false except `not_equal`.
///
/// # Examples
///
/// ```
/// use threeway::{Category, Outcome, ThreeWay};
///
/// assert_eq!(42_i32.compare(&665), Outcome::Less);
/// assert_eq!(<i32 as ThreeWay>::CATEGORY, Category::Strong);
///
/// let (cent, nan) = (0.01_f64, f64::NAN);
/// assert_eq!(cent.compare(&nan), Outcome::Unordered);
/// assert!(!cent.equal(&nan) && !cent.less_than(&nan) && !cent.greater_than(&nan));
/// assert!(cent.not_equal(&nan));
/// ```
pub trait ThreeWay<Rhs: ?Sized = Self> {
    /// The category of order this comparator implements.
    const CATEGORY: Category;

    /// Compares `self` to `other`. Must not depend on anything but the two operands.
    fn compare(&self, other: &Rhs) -> Outcome;

    /// Returns true iff the operands are equivalent.
    #[inline]
    fn equal(&self, other: &Rhs) -> bool {
        self.compare(other).is_eq()
    }
    /// Returns true iff the operands are not equivalent, including when they are unordered.
    #[inline]
    fn not_equal(&self, other: &Rhs) -> bool {
        self.compare(other).is_ne()
    }
    /// Returns true iff one element is strictly less than the other.
    #[inline]
    fn less_than(&self, other: &Rhs) -> bool {
        self.compare(other).is_lt()
    }
    /// Returns true iff one element is less than or equal to the other.
    #[inline]
    fn less_equal(&self, other: &Rhs) -> bool {
        self.compare(other).is_le()
    }
    /// Returns true iff one element is strictly greater than the other.
    #[inline]
    fn greater_than(&self, other: &Rhs) -> bool {
        self.compare(other).is_gt()
    }
    /// Returns true iff one element is greater than or equal to the other.
    #[inline]
    fn greater_equal(&self, other: &Rhs) -> bool {
        self.compare(other).is_ge()
    }
}

/// A type whose comparison is total.
///
/// This trait is a "carrier trait", in the sense that it adds no required functionality
/// over `ThreeWay`, but instead indicates that `compare` never returns `Unordered`, and so
/// can drive sorting algorithms as a strict weak order. Implementors should have a
/// `Strong` or `Weak` category.
pub trait TotalOrder<Rhs: ?Sized = Self>: ThreeWay<Rhs> {
    /// The comparison as a `std` ordering.
    #[inline]
    fn cmp_total(&self, other: &Rhs) -> Ordering {
        let outcome = self.compare(other);
        debug_assert!(outcome != Outcome::Unordered, "total order produced an unordered outcome");
        outcome.to_ordering().unwrap_or(Ordering::Equal)
    }
}

/// A type whose comparison is total, and whose equivalent values are substitutable.
///
/// Another carrier trait; implementors should have a `Strong` category.
pub trait StrongOrder<Rhs: ?Sized = Self>: TotalOrder<Rhs> {}

macro_rules! implement_strong {
    ($($index_type:ty,)*) => (
        $(
            impl ThreeWay for $index_type {
                const CATEGORY: Category = Category::Strong;
                #[inline] fn compare(&self, other: &Self) -> Outcome { Ord::cmp(self, other).into() }
            }
            impl TotalOrder for $index_type { }
            impl StrongOrder for $index_type { }
        )*
    )
}

macro_rules! implement_partial {
    ($($float_type:ty,)*) => (
        $(
            impl ThreeWay for $float_type {
                const CATEGORY: Category = Category::Partial;
                #[inline] fn compare(&self, other: &Self) -> Outcome { PartialOrd::partial_cmp(self, other).into() }
            }
        )*
    )
}

implement_strong!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, (), str, String, ::std::time::Duration,);
implement_partial!(f32, f64,);

impl ThreeWay<str> for String {
    const CATEGORY: Category = Category::Strong;
    #[inline]
    fn compare(&self, other: &str) -> Outcome {
        self.as_str().cmp(other).into()
    }
}
impl TotalOrder<str> for String { }
impl StrongOrder<str> for String { }

impl ThreeWay<String> for str {
    const CATEGORY: Category = Category::Strong;
    #[inline]
    fn compare(&self, other: &String) -> Outcome {
        self.cmp(other.as_str()).into()
    }
}
impl TotalOrder<String> for str { }
impl StrongOrder<String> for str { }

pub use float::{TotalF32, TotalF64};
/// Floating point numbers under the IEEE 754 `totalOrder` predicate.
mod float {
    use serde::{Deserialize, Serialize};

    use super::{Category, Outcome, StrongOrder, ThreeWay, TotalOrder};

    macro_rules! implement_total_float {
        ($($(#[$doc:meta])* $name:ident($float_type:ty),)*) => (
            $(
                $(#[$doc])*
                #[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
                pub struct $name(pub $float_type);

                impl ThreeWay for $name {
                    const CATEGORY: Category = Category::Strong;
                    #[inline] fn compare(&self, other: &Self) -> Outcome { self.0.total_cmp(&other.0).into() }
                }
                impl TotalOrder for $name { }
                impl StrongOrder for $name { }

                impl From<$float_type> for $name {
                    fn from(value: $float_type) -> Self { $name(value) }
                }
            )*
        )
    }

    implement_total_float!(
        /// An `f64` strongly ordered by [`f64::total_cmp`].
        ///
        /// Distinguishes `-0.0` from `0.0` and orders every `NaN` by its bit pattern.
        TotalF64(f64),
        /// An `f32` strongly ordered by [`f32::total_cmp`].
        TotalF32(f32),
    );
}

impl<'a, 'b, T, U> ThreeWay<&'b U> for &'a T
where
    T: ThreeWay<U> + ?Sized,
    U: ?Sized,
{
    const CATEGORY: Category = <T as ThreeWay<U>>::CATEGORY;
    #[inline]
    fn compare(&self, other: &&'b U) -> Outcome {
        (**self).compare(*other)
    }
}
impl<'a, 'b, T: TotalOrder<U> + ?Sized, U: ?Sized> TotalOrder<&'b U> for &'a T { }
impl<'a, 'b, T: StrongOrder<U> + ?Sized, U: ?Sized> StrongOrder<&'b U> for &'a T { }

/// `None` orders before every `Some`.
impl<T, U> ThreeWay<Option<U>> for Option<T>
where
    T: ThreeWay<U>,
{
    const CATEGORY: Category = <T as ThreeWay<U>>::CATEGORY;
    #[inline]
    fn compare(&self, other: &Option<U>) -> Outcome {
        match (self, other) {
            (Some(x), Some(y)) => x.compare(y),
            (None, None) => Outcome::Equal,
            (None, Some(_)) => Outcome::Less,
            (Some(_), None) => Outcome::Greater,
        }
    }
}
impl<T: TotalOrder<U>, U> TotalOrder<Option<U>> for Option<T> { }
impl<T: StrongOrder<U>, U> StrongOrder<Option<U>> for Option<T> { }

/// Sequences ordered by the lexicographic order.
mod sequence {
    use itertools::{EitherOrBoth, Itertools};

    use super::{lexicographic, Category, Outcome, StrongOrder, ThreeWay, TotalOrder};

    /// Compares two sequences element by element; a proper prefix orders first.
    ///
    /// If any pair of aligned elements is unordered, so are the sequences.
    ///
    /// # Examples
    ///
    /// ```
    /// use threeway::{Outcome, order::compare_sequences};
    ///
    /// assert_eq!(compare_sequences(&[1, 2, 3], &[1, 2, 4]), Outcome::Less);
    /// assert_eq!(compare_sequences(&[1, 2], &[1, 2, 0]), Outcome::Less);
    /// assert_eq!(compare_sequences(&[1.0, f64::NAN], &[2.0, 0.0]), Outcome::Unordered);
    /// ```
    pub fn compare_sequences<'a, 'b, T, U, I, J>(left: I, right: J) -> Outcome
    where
        T: ThreeWay<U> + 'a,
        U: 'b,
        I: IntoIterator<Item = &'a T>,
        J: IntoIterator<Item = &'b U>,
    {
        let outcomes = left.into_iter().zip_longest(right).map(|pair| match pair {
            EitherOrBoth::Both(x, y) => x.compare(y),
            EitherOrBoth::Left(_) => Outcome::Greater,
            EitherOrBoth::Right(_) => Outcome::Less,
        });
        lexicographic(<T as ThreeWay<U>>::CATEGORY, outcomes)
    }

    impl<T: ThreeWay<U>, U> ThreeWay<[U]> for [T] {
        const CATEGORY: Category = <T as ThreeWay<U>>::CATEGORY;
        #[inline]
        fn compare(&self, other: &[U]) -> Outcome {
            compare_sequences(self, other)
        }
    }
    impl<T: TotalOrder<U>, U> TotalOrder<[U]> for [T] { }
    impl<T: StrongOrder<U>, U> StrongOrder<[U]> for [T] { }

    impl<T: ThreeWay<U>, U, const N: usize> ThreeWay<[U; N]> for [T; N] {
        const CATEGORY: Category = <T as ThreeWay<U>>::CATEGORY;
        #[inline]
        fn compare(&self, other: &[U; N]) -> Outcome {
            compare_sequences(self, other)
        }
    }
    impl<T: TotalOrder<U>, U, const N: usize> TotalOrder<[U; N]> for [T; N] { }
    impl<T: StrongOrder<U>, U, const N: usize> StrongOrder<[U; N]> for [T; N] { }

    impl<T: ThreeWay<U>, U> ThreeWay<Vec<U>> for Vec<T> {
        const CATEGORY: Category = <T as ThreeWay<U>>::CATEGORY;
        #[inline]
        fn compare(&self, other: &Vec<U>) -> Outcome {
            compare_sequences(self, other)
        }
    }
    impl<T: TotalOrder<U>, U> TotalOrder<Vec<U>> for Vec<T> { }
    impl<T: StrongOrder<U>, U> StrongOrder<Vec<U>> for Vec<T> { }
}
pub use sequence::compare_sequences;

/// Rust tuples ordered by the lexicographic order.
mod tuple {
    use super::{lexicographic, Category, Outcome, StrongOrder, ThreeWay, TotalOrder};

    macro_rules! implement_tuple {
        ($($T:ident $U:ident $index:tt),+) => (
            impl<$($T, $U),+> ThreeWay<($($U,)+)> for ($($T,)+)
            where
                $($T: ThreeWay<$U>,)+
            {
                const CATEGORY: Category = Category::weakest(&[$(<$T as ThreeWay<$U>>::CATEGORY),+]);
                #[inline]
                fn compare(&self, other: &($($U,)+)) -> Outcome {
                    // We avoid Rust's `PartialOrd` implementation, which lets an early difference
                    // hide a later unordered element.
                    let outcomes = ::std::iter::empty()
                        $(.chain(::std::iter::once_with(|| self.$index.compare(&other.$index))))+;
                    lexicographic(<Self as ThreeWay<($($U,)+)>>::CATEGORY, outcomes)
                }
            }
            impl<$($T, $U),+> TotalOrder<($($U,)+)> for ($($T,)+) where $($T: TotalOrder<$U>,)+ { }
            impl<$($T, $U),+> StrongOrder<($($U,)+)> for ($($T,)+) where $($T: StrongOrder<$U>,)+ { }
        )
    }

    implement_tuple!(A0 B0 0);
    implement_tuple!(A0 B0 0, A1 B1 1);
    implement_tuple!(A0 B0 0, A1 B1 1, A2 B2 2);
    implement_tuple!(A0 B0 0, A1 B1 1, A2 B2 2, A3 B3 3);
    implement_tuple!(A0 B0 0, A1 B1 1, A2 B2 2, A3 B3 3, A4 B4 4);
    implement_tuple!(A0 B0 0, A1 B1 1, A2 B2 2, A3 B3 3, A4 B4 4, A5 B5 5);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weakest_is_minimum() {
        let all = [Category::Strong, Category::Weak, Category::Partial];
        for x in all {
            for y in all {
                assert_eq!(x.weaker(y), x.min(y));
                assert_eq!(x.weaker(y), y.weaker(x));
            }
        }
        assert_eq!(Category::weakest_of(vec![Category::Weak, Category::Strong]), Category::Weak);
        assert_eq!(Category::weakest_of(None), Category::Strong);
    }

    #[test]
    fn derived_predicates() {
        let expected = [
            // outcome, eq, ne, lt, le, gt, ge
            (Outcome::Less, false, true, true, true, false, false),
            (Outcome::Equal, true, false, false, true, false, true),
            (Outcome::Greater, false, true, false, false, true, true),
            (Outcome::Unordered, false, true, false, false, false, false),
        ];
        for (outcome, eq, ne, lt, le, gt, ge) in expected {
            assert_eq!(outcome.is_eq(), eq, "{:?}", outcome);
            assert_eq!(outcome.is_ne(), ne, "{:?}", outcome);
            assert_eq!(outcome.is_lt(), lt, "{:?}", outcome);
            assert_eq!(outcome.is_le(), le, "{:?}", outcome);
            assert_eq!(outcome.is_gt(), gt, "{:?}", outcome);
            assert_eq!(outcome.is_ge(), ge, "{:?}", outcome);
        }
    }

    #[test]
    fn primitive_categories() {
        assert_eq!(<i32 as ThreeWay>::CATEGORY, Category::Strong);
        assert_eq!(<String as ThreeWay>::CATEGORY, Category::Strong);
        assert_eq!(<f64 as ThreeWay>::CATEGORY, Category::Partial);
        assert_eq!(<TotalF64 as ThreeWay>::CATEGORY, Category::Strong);
        assert_eq!("abc".to_string().compare("abc"), Outcome::Equal);
        assert_eq!("abc".compare(&"abd".to_string()), Outcome::Less);
    }

    #[test]
    fn floats() {
        assert_eq!(0.01_f64.compare(&0.001), Outcome::Greater);
        assert_eq!(f64::NAN.compare(&f64::NAN), Outcome::Unordered);
        assert_eq!(TotalF64(42.2).compare(&TotalF64(42.23)), Outcome::Less);
        assert_eq!(TotalF64(-0.0).compare(&TotalF64(0.0)), Outcome::Less);
        assert_eq!(TotalF64(f64::NAN).compare(&TotalF64(f64::NAN)), Outcome::Equal);
    }

    #[test]
    fn tuples_degrade_to_partial() {
        assert_eq!(<(i32, String) as ThreeWay>::CATEGORY, Category::Strong);
        assert_eq!(<(i32, f64, String) as ThreeWay>::CATEGORY, Category::Partial);

        // An earlier difference does not hide an unordered element.
        assert_eq!((1, f64::NAN).compare(&(2, 0.0)), Outcome::Unordered);
        assert_eq!((1, 0.5).compare(&(2, 0.0)), Outcome::Less);
        assert_eq!((1, 0.5, 3).compare(&(1, 0.5, 3)), Outcome::Equal);
        assert_eq!((2, "b").compare(&(2, "a")), Outcome::Greater);
    }

    #[test]
    fn options_and_sequences() {
        assert_eq!(None::<i32>.compare(&Some(0)), Outcome::Less);
        assert_eq!(Some(3).compare(&Some(3)), Outcome::Equal);
        assert_eq!(vec![1, 2, 3].compare(&vec![1, 2, 3]), Outcome::Equal);
        assert_eq!([1, 2, 4].compare(&[1, 2, 3]), Outcome::Greater);
        assert_eq!(vec![1, 2].compare(&vec![1, 2, 3]), Outcome::Less);
        assert_eq!(Vec::<i32>::new().compare(&Vec::new()), Outcome::Equal);
        assert!(vec![1, 2, 3].less_equal(&vec![1, 2, 3]));
    }
}
