//! Comparison between a domain type and a foreign representation of the same value.
//!
//! The foreign value is first converted into the domain type with `TryFrom`, and the two
//! domain values are then compared with the ordinary comparator. Conversion failures are
//! returned before any comparison takes place, and leave both operands untouched.
//!
//! ```
//! use threeway::{Money, Outcome, hetero};
//!
//! let price = Money::new(42, 50).unwrap();
//! assert_eq!(hetero::try_compare(&price, 42.51_f64), Ok(Outcome::Less));
//! assert_eq!(hetero::try_compare_foreign(42.51_f64, &price), Ok(Outcome::Greater));
//! assert_eq!(hetero::try_compare(&price, (42i64, 50i64)), Ok(Outcome::Equal));
//! assert!(hetero::try_compare(&price, (42i64, 150i64)).is_err());
//! assert!(hetero::try_compare(&price, 42.504_f64).is_err());
//! ```

use std::convert::Infallible;

use crate::order::{Outcome, ThreeWay};

/// Converts `foreign` into a `T`, then compares `value` against it.
pub fn try_compare<T, F>(value: &T, foreign: F) -> Result<Outcome, <T as TryFrom<F>>::Error>
where
    T: ThreeWay + TryFrom<F>,
{
    let converted = T::try_from(foreign)?;
    Ok(value.compare(&converted))
}

/// The mirror image of [`try_compare`]: converts `foreign` and compares it against `value`.
///
/// For every successful conversion the result is the reverse of `try_compare(value, foreign)`.
pub fn try_compare_foreign<F, T>(foreign: F, value: &T) -> Result<Outcome, <T as TryFrom<F>>::Error>
where
    T: ThreeWay + TryFrom<F>,
{
    let converted = T::try_from(foreign)?;
    Ok(converted.compare(value))
}

/// Compares `value` against a foreign value whose conversion cannot fail.
pub fn compare_converted<T, F>(value: &T, foreign: F) -> Outcome
where
    T: ThreeWay + TryFrom<F, Error = Infallible>,
{
    match try_compare(value, foreign) {
        Ok(outcome) => outcome,
        Err(never) => match never {},
    }
}

/// Compares a foreign value whose conversion cannot fail against `value`.
pub fn compare_converted_foreign<F, T>(foreign: F, value: &T) -> Outcome
where
    T: ThreeWay + TryFrom<F, Error = Infallible>,
{
    match try_compare_foreign(foreign, value) {
        Ok(outcome) => outcome,
        Err(never) => match never {},
    }
}
