//! Field-by-field comparison in declared priority order.
//!
//! The first field that differs decides the comparison. The [`fieldwise_order!`] macro derives
//! a [`ThreeWay`] implementation for a struct from its field list, and [`Fieldwise`] builds the
//! same comparator at runtime from accessor closures.
//!
//! [`fieldwise_order!`]: crate::fieldwise_order

use smallvec::SmallVec;

use crate::order::{Category, Outcome, ThreeWay};

/// Folds field outcomes, produced lazily in priority order, into one outcome.
///
/// The result is the first outcome other than `Equal`, or `Equal` if there is none, except
/// that any `Unordered` outcome makes the whole result `Unordered`. Outcomes after the first
/// difference are only produced when `category` is `Partial`, because only then can a later
/// field still be unordered.
///
/// # Examples
///
/// ```
/// use threeway::{Category, Outcome, fields::lexicographic};
///
/// let outcomes = vec![Outcome::Equal, Outcome::Less, Outcome::Greater];
/// assert_eq!(lexicographic(Category::Strong, outcomes), Outcome::Less);
///
/// let outcomes = vec![Outcome::Less, Outcome::Unordered];
/// assert_eq!(lexicographic(Category::Partial, outcomes), Outcome::Unordered);
/// ```
pub fn lexicographic<I>(category: Category, outcomes: I) -> Outcome
where
    I: IntoIterator<Item = Outcome>,
{
    let mut decided = Outcome::Equal;
    for outcome in outcomes {
        match outcome {
            Outcome::Unordered => return Outcome::Unordered,
            Outcome::Equal => {}
            difference => {
                if decided == Outcome::Equal {
                    decided = difference;
                }
                if category.is_total() {
                    return decided;
                }
            }
        }
    }
    decided
}

/// A single named key field of `T`.
struct Field<T: ?Sized> {
    name: &'static str,
    category: Category,
    compare: Box<dyn Fn(&T, &T) -> Outcome>,
}

/// A comparator over `T` built from an ordered list of field accessors.
///
/// # Examples
///
/// ```
/// use threeway::{Category, Outcome, fields::Fieldwise};
///
/// struct Reading { sensor: String, value: f64 }
///
/// let order = Fieldwise::new()
///     .field("sensor", |r: &Reading| &r.sensor)
///     .field("value", |r: &Reading| &r.value);
///
/// let a = Reading { sensor: "a".into(), value: 1.0 };
/// let b = Reading { sensor: "b".into(), value: f64::NAN };
///
/// assert_eq!(order.category(), Category::Partial);
/// assert_eq!(order.compare(&a, &a), Outcome::Equal);
/// assert_eq!(order.compare(&a, &b), Outcome::Unordered);
/// ```
pub struct Fieldwise<T: ?Sized> {
    fields: SmallVec<[Field<T>; 4]>,
}

impl<T: ?Sized> Default for Fieldwise<T> {
    fn default() -> Self {
        Fieldwise { fields: SmallVec::new() }
    }
}

impl<T: ?Sized + 'static> Fieldwise<T> {
    /// Creates a comparator with no fields, under which all values are equal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a key field, of lower priority than all fields added so far.
    pub fn field<F, A>(mut self, name: &'static str, accessor: A) -> Self
    where
        F: ThreeWay + ?Sized + 'static,
        A: Fn(&T) -> &F + 'static,
    {
        self.fields.push(Field {
            name,
            category: <F as ThreeWay>::CATEGORY,
            compare: Box::new(move |x: &T, y: &T| accessor(x).compare(accessor(y))),
        });
        self
    }
}

impl<T: ?Sized> Fieldwise<T> {
    /// The weakest category among the fields; `Strong` when there are none.
    pub fn category(&self) -> Category {
        Category::weakest_of(self.fields.iter().map(|field| field.category))
    }

    /// Field names in priority order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.name)
    }

    /// Compares `x` and `y` field by field.
    pub fn compare(&self, x: &T, y: &T) -> Outcome {
        lexicographic(self.category(), self.fields.iter().map(|field| (field.compare)(x, y)))
    }

    /// The name of the first field on which `x` and `y` are not equal, if any.
    pub fn deciding_field(&self, x: &T, y: &T) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|field| (field.compare)(x, y) != Outcome::Equal)
            .map(|field| field.name)
    }
}

/// Implements [`ThreeWay`](crate::ThreeWay) for a struct by comparing the listed fields in order.
///
/// The category is the weakest of the field types' categories. Prefixing the type with
/// `total` also implements [`TotalOrder`](crate::TotalOrder), and `strong` implements
/// [`StrongOrder`](crate::StrongOrder) as well; both check the computed category at compile time.
///
/// # Examples
///
/// ```
/// use threeway::{fieldwise_order, Category, Outcome, ThreeWay};
///
/// struct Version { major: u32, minor: u32, tag: String }
/// fieldwise_order!(strong Version { major: u32, minor: u32, tag: String });
///
/// let v1 = Version { major: 1, minor: 2, tag: "b".into() };
/// let v2 = Version { major: 1, minor: 10, tag: "a".into() };
///
/// assert_eq!(<Version as ThreeWay>::CATEGORY, Category::Strong);
/// assert_eq!(v1.compare(&v2), Outcome::Less);
/// ```
#[macro_export]
macro_rules! fieldwise_order {
    (strong $name:ty { $($field:ident : $field_type:ty),+ $(,)? }) => {
        $crate::fieldwise_order!(total $name { $($field : $field_type),+ });
        const _: () = assert!(
            matches!(<$name as $crate::ThreeWay>::CATEGORY, $crate::Category::Strong),
            "a strong order requires strongly ordered fields",
        );
        impl $crate::StrongOrder for $name { }
    };
    (total $name:ty { $($field:ident : $field_type:ty),+ $(,)? }) => {
        $crate::fieldwise_order!($name { $($field : $field_type),+ });
        const _: () = assert!(
            <$name as $crate::ThreeWay>::CATEGORY.is_total(),
            "a total order requires totally ordered fields",
        );
        impl $crate::TotalOrder for $name { }
    };
    ($name:ty { $($field:ident : $field_type:ty),+ $(,)? }) => {
        impl $crate::ThreeWay for $name {
            const CATEGORY: $crate::Category =
                $crate::Category::weakest(&[$(<$field_type as $crate::ThreeWay>::CATEGORY),+]);
            #[inline]
            fn compare(&self, other: &Self) -> $crate::Outcome {
                let outcomes = ::std::iter::empty()
                    $(.chain(::std::iter::once_with(|| {
                        <$field_type as $crate::ThreeWay>::compare(&self.$field, &other.$field)
                    })))+;
                $crate::fields::lexicographic(<Self as $crate::ThreeWay>::CATEGORY, outcomes)
            }
        }
    };
}
