//! Rational numbers in canonical form.
//!
//! A [`Fraction`] is always stored reduced, with a strictly positive
//! denominator; zero is stored as `0/1`. Every constructor and setter goes
//! through the same canonicalization routine, so two fractions with the same
//! value always have the same representation.

use num_traits::{One, Zero};
use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use tracing::{debug, trace};

use crate::error::{FractionError, Result};

/// A rational number with 64-bit numerator and denominator.
///
/// Fractions are always stored in lowest terms with a positive denominator.
/// The real value is memoized on first use and forgotten whenever a setter
/// changes the fraction.
pub struct Fraction {
    numerator: i64,
    denominator: i64,
    real_value: Cell<Option<f64>>,
}

/// Greatest common divisor by the Euclidean algorithm.
pub(crate) fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Reduces `numerator / denominator` and moves the sign to the numerator.
///
/// Inputs are 128-bit so that products of two 64-bit values can be passed
/// in without overflowing; only the reduced result has to fit in 64 bits.
pub(crate) fn canonicalize(numerator: i128, denominator: i128) -> Result<(i64, i64)> {
    if denominator == 0 {
        return Err(FractionError::InvalidDenominator);
    }
    if numerator == 0 {
        return Ok((0, 1));
    }

    let negative = (numerator < 0) != (denominator < 0);
    let g = gcd(numerator.unsigned_abs(), denominator.unsigned_abs());
    let num = u64::try_from(numerator.unsigned_abs() / g).map_err(|_| FractionError::Overflow)?;
    let den = i64::try_from(denominator.unsigned_abs() / g).map_err(|_| FractionError::Overflow)?;

    // 2^63 is only representable as a negative numerator.
    let num = if negative {
        0i64.checked_sub_unsigned(num)
    } else {
        i64::try_from(num).ok()
    }
    .ok_or(FractionError::Overflow)?;

    Ok((num, den))
}

impl Fraction {
    /// Creates a fraction from numerator and denominator, reducing it.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::InvalidDenominator`] if `denominator` is zero,
    /// and [`FractionError::Overflow`] for `i64::MIN / -1`.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        Self::from_wide(i128::from(numerator), i128::from(denominator))
    }

    /// Creates a fraction from a whole number (denominator = 1).
    #[must_use]
    pub fn from_integer(whole: i64) -> Self {
        Self::from_canonical(whole, 1)
    }

    pub(crate) fn from_wide(numerator: i128, denominator: i128) -> Result<Self> {
        let (num, den) = canonicalize(numerator, denominator)?;
        Ok(Self::from_canonical(num, den))
    }

    fn from_canonical(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
            real_value: Cell::new(None),
        }
    }

    /// Returns the numerator. Carries the sign of the fraction.
    #[must_use]
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Returns the denominator. Always positive.
    #[must_use]
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Replaces the numerator, keeping the current denominator, and reduces.
    ///
    /// # Errors
    ///
    /// Only fails if canonicalization fails; with the positive denominator a
    /// fraction always holds, the reduced numerator always fits.
    pub fn set_numerator(&mut self, numerator: i64) -> Result<()> {
        let (num, den) = canonicalize(i128::from(numerator), i128::from(self.denominator))?;
        self.assign(num, den);
        Ok(())
    }

    /// Replaces the denominator, keeping the current numerator, and reduces.
    ///
    /// On error the fraction is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::InvalidDenominator`] if `denominator` is zero,
    /// and [`FractionError::Overflow`] if flipping the sign of the numerator
    /// overflows.
    pub fn set_denominator(&mut self, denominator: i64) -> Result<()> {
        match canonicalize(i128::from(self.numerator), i128::from(denominator)) {
            Ok((num, den)) => {
                self.assign(num, den);
                Ok(())
            }
            Err(err) => {
                debug!(fraction = %self, denominator, %err, "rejected denominator");
                Err(err)
            }
        }
    }

    fn assign(&mut self, numerator: i64, denominator: i64) {
        self.numerator = numerator;
        self.denominator = denominator;
        self.real_value.set(None);
    }

    /// Returns the value as a float, memoizing it until the next mutation.
    #[must_use]
    pub fn real_value(&self) -> f64 {
        if let Some(value) = self.real_value.get() {
            trace!(fraction = %self, "real value memo hit");
            return value;
        }

        #[allow(clippy::cast_precision_loss)]
        let value = self.numerator as f64 / self.denominator as f64;
        trace!(fraction = %self, value, "real value computed");
        self.real_value.set(Some(value));
        value
    }

    /// Returns true if the real value is currently memoized.
    #[must_use]
    pub fn is_real_value_cached(&self) -> bool {
        self.real_value.get().is_some()
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Returns the sum `self + other`.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::Overflow`] if the reduced sum does not fit.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Result<Self> {
        let (n1, d1, n2, d2) = self.widen(other);
        Self::from_wide(n1 * d2 + n2 * d1, d1 * d2)
    }

    /// Returns the difference `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::Overflow`] if the reduced difference does not fit.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        let (n1, d1, n2, d2) = self.widen(other);
        Self::from_wide(n1 * d2 - n2 * d1, d1 * d2)
    }

    /// Returns the product `self * other`.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::Overflow`] if the reduced product does not fit.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        let (n1, d1, n2, d2) = self.widen(other);
        Self::from_wide(n1 * n2, d1 * d2)
    }

    /// Returns the quotient `self / other`.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::DivisionByZero`] if `other` is zero, and
    /// [`FractionError::Overflow`] if the reduced quotient does not fit.
    pub fn divide(&self, other: &Self) -> Result<Self> {
        if other.numerator == 0 {
            return Err(FractionError::DivisionByZero);
        }
        let (n1, d1, n2, d2) = self.widen(other);
        Self::from_wide(n1 * d2, d1 * n2)
    }

    /// Returns `self + n`.
    ///
    /// # Errors
    ///
    /// See [`Fraction::add`].
    pub fn add_int(&self, n: i64) -> Result<Self> {
        self.add(&Self::from_integer(n))
    }

    /// Returns `self - n`.
    ///
    /// # Errors
    ///
    /// See [`Fraction::subtract`].
    pub fn subtract_int(&self, n: i64) -> Result<Self> {
        self.subtract(&Self::from_integer(n))
    }

    /// Returns `self * n`.
    ///
    /// # Errors
    ///
    /// See [`Fraction::multiply`].
    pub fn multiply_int(&self, n: i64) -> Result<Self> {
        self.multiply(&Self::from_integer(n))
    }

    /// Returns `self / n`.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::DivisionByZero`] if `n` is zero.
    pub fn divide_int(&self, n: i64) -> Result<Self> {
        if n == 0 {
            return Err(FractionError::DivisionByZero);
        }
        self.divide(&Self::from_integer(n))
    }

    /// Returns `-self`.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::Overflow`] for a numerator of `i64::MIN`.
    pub fn negate(&self) -> Result<Self> {
        Self::from_wide(-i128::from(self.numerator), i128::from(self.denominator))
    }

    /// Returns the reciprocal `1 / self`.
    ///
    /// # Errors
    ///
    /// Returns [`FractionError::DivisionByZero`] if the fraction is zero.
    pub fn recip(&self) -> Result<Self> {
        Self::from_integer(1).divide(self)
    }

    /// Compares exactly; same as [`Ord::cmp`].
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    /// Compares the floating point real values of both fractions.
    ///
    /// Agrees with [`Fraction::compare`] unless the two values are too close
    /// to be told apart as `f64`.
    #[must_use]
    pub fn compare_real(&self, other: &Self) -> Option<Ordering> {
        self.real_value().partial_cmp(&other.real_value())
    }

    fn widen(&self, other: &Self) -> (i128, i128, i128, i128) {
        (
            i128::from(self.numerator),
            i128::from(self.denominator),
            i128::from(other.numerator),
            i128::from(other.denominator),
        )
    }
}

impl Clone for Fraction {
    fn clone(&self) -> Self {
        Self::from_canonical(self.numerator, self.denominator)
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::from_integer(0)
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }
}

impl Eq for Fraction {}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numerator.hash(state);
        self.denominator.hash(state);
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplying keeps the order.
        let (n1, d1, n2, d2) = self.widen(other);
        (n1 * d2).cmp(&(n2 * d1))
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::from_integer(1)
    }

    fn is_one(&self) -> bool {
        self.numerator == 1 && self.denominator == 1
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}/{})", self.numerator, self.denominator)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    /// Parses `"n/d"` or a whole number `"n"`.
    fn from_str(s: &str) -> Result<Self> {
        let parse = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|err| FractionError::Parse(format!("{:?}: {err}", part.trim())))
        };

        match s.trim().split_once('/') {
            Some((num, den)) => Self::new(parse(num)?, parse(den)?),
            None => Ok(Self::from_integer(parse(s)?)),
        }
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Fraction {
    fn from(n: i32) -> Self {
        Self::from_integer(i64::from(n))
    }
}
