//! Sorting with three-way comparators.
//!
//! Total orders drive the standard library's sorts directly. Partial orders never do, as the
//! standard sorts may panic when handed an inconsistent comparator; instead a [`Sorter`]
//! separates out the elements that are unordered with themselves according to its
//! [`UnorderedPolicy`], and merge sorts the rest using `less_than` alone.

use std::fmt::{self, Display};
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::logging::{SortEvent, ThreewayLogger};
use crate::order::{Outcome, ThreeWay, TotalOrder};

/// Sorts `slice` stably by its total order.
///
/// # Examples
///
/// ```
/// use threeway::{sort, Money};
///
/// let mut wallet: Vec<Money> = ["42.50", "13.37", "0.99", "100.00", "0.01"]
///     .iter()
///     .map(|text| text.parse().unwrap())
///     .collect();
/// sort::sort(&mut wallet);
/// assert_eq!(wallet.iter().map(|m| m.to_string()).collect::<Vec<_>>(),
///            ["$0.01", "$0.99", "$13.37", "$42.50", "$100.00"]);
/// ```
pub fn sort<T: TotalOrder>(slice: &mut [T]) {
    const { assert!(<T as ThreeWay>::CATEGORY.is_total()) };
    slice.sort_by(|x, y| x.cmp_total(y));
}

/// Sorts `slice` by its total order, without preserving the order of equivalent elements.
pub fn sort_unstable<T: TotalOrder>(slice: &mut [T]) {
    const { assert!(<T as ThreeWay>::CATEGORY.is_total()) };
    slice.sort_unstable_by(|x, y| x.cmp_total(y));
}

/// True iff no element of `slice` is less than the element before it.
pub fn is_sorted<T: TotalOrder>(slice: &[T]) -> bool {
    slice.windows(2).all(|pair| !pair[1].less_than(&pair[0]))
}

/// What to do with elements that are unordered with themselves, such as `NaN`.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum UnorderedPolicy {
    /// Remove such elements from the output and hand them back to the caller.
    #[default]
    Exclude,
    /// Place such elements after the sorted elements, in their original relative order.
    Trailing,
    /// Sort such elements along with the rest; where they land is unspecified.
    Unspecified,
}

impl FromStr for UnorderedPolicy {
    type Err = String;
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "exclude" => Ok(UnorderedPolicy::Exclude),
            "trailing" => Ok(UnorderedPolicy::Trailing),
            "unspecified" => Ok(UnorderedPolicy::Unspecified),
            _ => Err(format!("unknown policy {:?}; expected exclude, trailing, or unspecified", text)),
        }
    }
}

impl Display for UnorderedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnorderedPolicy::Exclude => "exclude",
            UnorderedPolicy::Trailing => "trailing",
            UnorderedPolicy::Unspecified => "unspecified",
        };
        f.write_str(name)
    }
}

/// Sorts slices and vectors, logging each call.
#[derive(Clone, Default)]
pub struct Sorter {
    policy: UnorderedPolicy,
    stable: bool,
    logger: Option<ThreewayLogger>,
}

impl Sorter {
    /// A sorter applying `policy` to unordered elements.
    pub fn new(policy: UnorderedPolicy) -> Self {
        Sorter { policy, ..Default::default() }
    }

    /// Sets whether total sorts preserve the order of equivalent elements.
    ///
    /// Partial sorts are always stable.
    pub fn with_stable(mut self, stable: bool) -> Self {
        self.stable = stable;
        self
    }

    /// Records a [`SortEvent`] with `logger` for each call.
    pub fn with_logger(mut self, logger: ThreewayLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// The policy for unordered elements.
    pub fn policy(&self) -> UnorderedPolicy {
        self.policy
    }

    /// Sorts `slice` by its total order.
    pub fn sort<T: TotalOrder>(&self, slice: &mut [T]) {
        if self.stable {
            sort(slice);
        } else {
            sort_unstable(slice);
        }
        self.log(SortEvent {
            len: slice.len(),
            category: <T as ThreeWay>::CATEGORY,
            policy: None,
            stable: self.stable,
            set_aside: 0,
        });
    }

    /// Sorts `items` by a possibly partial order, and returns the elements set aside.
    ///
    /// An element is unordered if it compares `Unordered` with itself. Under
    /// [`UnorderedPolicy::Exclude`] these are removed from `items` and returned; under the
    /// other policies the returned vector is empty. In every case `items` and the returned
    /// vector together hold exactly the input elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use threeway::{Sorter, UnorderedPolicy};
    ///
    /// let mut values = vec![3.0, f64::NAN, 1.0, 2.0];
    /// let excluded = Sorter::new(UnorderedPolicy::Exclude).sort_partial(&mut values);
    /// assert_eq!(values, [1.0, 2.0, 3.0]);
    /// assert!(excluded[0].is_nan());
    ///
    /// let mut values = vec![3.0, f64::NAN, 1.0, 2.0];
    /// Sorter::new(UnorderedPolicy::Trailing).sort_partial(&mut values);
    /// assert_eq!(&values[..3], [1.0, 2.0, 3.0]);
    /// assert!(values[3].is_nan());
    /// ```
    pub fn sort_partial<T: ThreeWay>(&self, items: &mut Vec<T>) -> Vec<T> {
        let len = items.len();
        let input = std::mem::take(items);
        let set_aside = match self.policy {
            UnorderedPolicy::Unspecified => {
                *items = merge_sort(input);
                Vec::new()
            }
            UnorderedPolicy::Exclude | UnorderedPolicy::Trailing => {
                let (ordered, unordered): (Vec<T>, Vec<T>) = input
                    .into_iter()
                    .partition(|x| x.compare(x) != Outcome::Unordered);
                *items = merge_sort(ordered);
                if self.policy == UnorderedPolicy::Trailing {
                    items.extend(unordered);
                    Vec::new()
                } else {
                    unordered
                }
            }
        };
        self.log(SortEvent {
            len,
            category: <T as ThreeWay>::CATEGORY,
            policy: Some(self.policy),
            stable: true,
            set_aside: set_aside.len(),
        });
        set_aside
    }

    fn log(&self, event: SortEvent) {
        if let Some(logger) = &self.logger {
            logger.log(event.into());
        }
    }
}

/// A stable merge sort that only asks whether one element is less than another.
fn merge_sort<T: ThreeWay>(mut items: Vec<T>) -> Vec<T> {
    if items.len() <= 1 {
        return items;
    }
    let upper = items.split_off(items.len() / 2);
    merge_sort(items)
        .into_iter()
        .merge_by(merge_sort(upper), |x, y| !y.less_than(x))
        .collect()
}
