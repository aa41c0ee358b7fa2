//! Comparison of types that extend a base type with additional fields.

use std::cmp::Ordering;
use std::fmt::{Debug, Error, Formatter};

use serde::{Deserialize, Serialize};

use crate::order::{Category, Outcome, StrongOrder, ThreeWay, TotalOrder};

/// A base value extended with additional fields.
///
/// Ordered by the base first; the extension is consulted only when the bases are equal, so
/// whenever the bases differ the result is exactly the base comparison.
///
/// # Examples
///
/// ```
/// use threeway::{Outcome, ThreeWay, derived::Extended};
///
/// let p1 = Extended::new((1, 2), 3);
/// let p2 = Extended::new((1, 2), 4);
/// let p3 = Extended::new((0, 9), 99);
///
/// assert_eq!(p1.compare(&p2), Outcome::Less);
/// assert_eq!(p1.compare(&p3), Outcome::Greater);
/// ```
#[derive(Copy, Clone, Hash, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct Extended<B, X> {
    /// The base value.
    pub base: B,
    /// The additional fields.
    pub ext: X,
}

impl<B, X> Extended<B, X> {
    /// Creates a new value from a base and its extension.
    pub fn new(base: B, ext: X) -> Self {
        Extended { base, ext }
    }
}

// Debug implementation to avoid seeing fully qualified path names.
impl<B: Debug, X: Debug> Debug for Extended<B, X> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_str(&format!("({:?} + {:?})", self.base, self.ext))
    }
}

impl<B, B2, X, X2> ThreeWay<Extended<B2, X2>> for Extended<B, X>
where
    B: ThreeWay<B2>,
    X: ThreeWay<X2>,
{
    const CATEGORY: Category = <B as ThreeWay<B2>>::CATEGORY.weaker(<X as ThreeWay<X2>>::CATEGORY);
    #[inline]
    fn compare(&self, other: &Extended<B2, X2>) -> Outcome {
        match self.base.compare(&other.base) {
            Outcome::Equal => self.ext.compare(&other.ext),
            decided => decided,
        }
    }
}

impl<B, B2, X, X2> TotalOrder<Extended<B2, X2>> for Extended<B, X>
where
    B: TotalOrder<B2>,
    X: TotalOrder<X2>,
{ }

impl<B, B2, X, X2> StrongOrder<Extended<B2, X2>> for Extended<B, X>
where
    B: StrongOrder<B2>,
    X: StrongOrder<X2>,
{ }

/// A type that only offers the two-valued `==` and `<` predicates.
///
/// [`Legacy`] synthesizes a three-way comparison from these, rather than assuming that the
/// type supports one. With a total category the predicates must describe a strict weak order;
/// a `Partial` category allows values that are neither equal to nor ordered against others.
pub trait LegacyOrder {
    /// The category the synthesized comparison claims.
    const CATEGORY: Category = Category::Weak;
    /// Returns true iff `self` and `other` are equivalent.
    fn is_equal(&self, other: &Self) -> bool;
    /// Returns true iff `self` orders strictly before `other`.
    fn is_less(&self, other: &Self) -> bool;
}

/// A [`LegacyOrder`] whose predicates describe a total order.
///
/// Carrier trait; only implement it when the category is `Weak` or `Strong`.
pub trait TotalLegacyOrder: LegacyOrder { }

/// Synthesizes an outcome from an equality test followed by a less-than test.
///
/// A total category answers `Greater` when neither test holds. A `Partial` category asks
/// whether `y < x` before answering `Greater`, and is `Unordered` otherwise.
#[inline]
pub fn synthesize<T: LegacyOrder + ?Sized>(x: &T, y: &T) -> Outcome {
    if x.is_equal(y) {
        Outcome::Equal
    } else if x.is_less(y) {
        Outcome::Less
    } else if T::CATEGORY.is_total() || y.is_less(x) {
        Outcome::Greater
    } else {
        Outcome::Unordered
    }
}

/// Adapts a [`LegacyOrder`] type to [`ThreeWay`].
#[derive(Copy, Clone, Debug, Default, Hash, Serialize, Deserialize)]
pub struct Legacy<T>(pub T);

impl<T: LegacyOrder> ThreeWay for Legacy<T> {
    const CATEGORY: Category = <T as LegacyOrder>::CATEGORY;
    #[inline]
    fn compare(&self, other: &Self) -> Outcome {
        synthesize(&self.0, &other.0)
    }
}

impl<T: TotalLegacyOrder> TotalOrder for Legacy<T> {
    #[inline]
    fn cmp_total(&self, other: &Self) -> Ordering {
        const { assert!(<T as LegacyOrder>::CATEGORY.is_total(), "a partial legacy order is not total") };
        self.compare(other).to_ordering().unwrap_or(Ordering::Equal)
    }
}
