//! A memoizing decorator over [`Fraction`].
//!
//! [`CachedFraction`] keeps its own copy of the real value, independent of the
//! memo inside the wrapped fraction. Each layer can be invalidated and
//! observed on its own.

use std::cell::Cell;
use std::fmt;
use tracing::trace;

use crate::error::Result;
use crate::ops::FractionOps;
use crate::Fraction;

/// A fraction whose real value is cached until the next mutation.
#[derive(Clone, Debug)]
pub struct CachedFraction {
    fraction: Fraction,
    cache_valid: Cell<bool>,
    cached_value: Cell<f64>,
}

impl CachedFraction {
    /// Wraps an existing fraction. The cache starts out invalid.
    #[must_use]
    pub fn new(fraction: Fraction) -> Self {
        Self {
            fraction,
            cache_valid: Cell::new(false),
            cached_value: Cell::new(0.0),
        }
    }

    /// Builds the wrapped fraction from numerator and denominator.
    ///
    /// # Errors
    ///
    /// Same as [`Fraction::new`].
    pub fn from_parts(numerator: i64, denominator: i64) -> Result<Self> {
        Fraction::new(numerator, denominator).map(Self::new)
    }

    /// Returns the wrapped fraction.
    #[must_use]
    pub fn fraction(&self) -> &Fraction {
        &self.fraction
    }

    /// Unwraps the fraction, dropping this layer's cache.
    #[must_use]
    pub fn into_inner(self) -> Fraction {
        self.fraction
    }

    /// Returns true if the next [`real_value`](Self::real_value) is served
    /// from this layer's cache.
    #[must_use]
    pub fn is_cache_valid(&self) -> bool {
        self.cache_valid.get()
    }

    /// Returns the real value, computing it through the wrapped fraction only
    /// when the cache is invalid.
    #[must_use]
    pub fn real_value(&self) -> f64 {
        if self.cache_valid.get() {
            trace!(fraction = %self.fraction, "cached fraction hit");
            return self.cached_value.get();
        }

        let value = self.fraction.real_value();
        self.cached_value.set(value);
        self.cache_valid.set(true);
        value
    }

    /// Replaces the numerator of the wrapped fraction and invalidates the cache.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Fraction::set_numerator`].
    pub fn set_numerator(&mut self, numerator: i64) -> Result<()> {
        self.fraction.set_numerator(numerator)?;
        self.cache_valid.set(false);
        Ok(())
    }

    /// Replaces the denominator of the wrapped fraction and invalidates the cache.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Fraction::set_denominator`]; the cache is kept
    /// when the wrapped fraction rejects the value.
    pub fn set_denominator(&mut self, denominator: i64) -> Result<()> {
        self.fraction.set_denominator(denominator)?;
        self.cache_valid.set(false);
        Ok(())
    }
}

impl From<Fraction> for CachedFraction {
    fn from(fraction: Fraction) -> Self {
        Self::new(fraction)
    }
}

impl FractionOps for CachedFraction {
    fn real_value(&self) -> f64 {
        CachedFraction::real_value(self)
    }

    fn set_numerator(&mut self, numerator: i64) -> Result<()> {
        CachedFraction::set_numerator(self, numerator)
    }

    fn set_denominator(&mut self, denominator: i64) -> Result<()> {
        CachedFraction::set_denominator(self, denominator)
    }
}

impl fmt::Display for CachedFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.fraction, f)
    }
}
