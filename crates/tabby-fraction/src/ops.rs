//! The capability shared by plain and cached fractions.

use crate::error::Result;
use crate::Fraction;

/// Something with a real value whose parts can be replaced.
///
/// Implemented by [`Fraction`] and [`crate::CachedFraction`], so callers can
/// drive either through `&mut dyn FractionOps`.
pub trait FractionOps {
    /// Returns the value as a float.
    fn real_value(&self) -> f64;

    /// Replaces the numerator and re-normalizes.
    ///
    /// # Errors
    ///
    /// Propagates canonicalization failures.
    fn set_numerator(&mut self, numerator: i64) -> Result<()>;

    /// Replaces the denominator and re-normalizes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FractionError::InvalidDenominator`] for zero.
    fn set_denominator(&mut self, denominator: i64) -> Result<()>;
}

impl FractionOps for Fraction {
    fn real_value(&self) -> f64 {
        Fraction::real_value(self)
    }

    fn set_numerator(&mut self, numerator: i64) -> Result<()> {
        Fraction::set_numerator(self, numerator)
    }

    fn set_denominator(&mut self, denominator: i64) -> Result<()> {
        Fraction::set_denominator(self, denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CachedFraction, FractionError};

    fn update(ops: &mut dyn FractionOps) -> f64 {
        ops.set_numerator(5).unwrap();
        ops.set_denominator(8).unwrap();
        ops.real_value()
    }

    #[test]
    fn test_drive_through_trait_object() {
        let mut plain = Fraction::new(2, 3).unwrap();
        let mut cached = CachedFraction::from_parts(2, 3).unwrap();

        assert_eq!(update(&mut plain), 0.625);
        assert_eq!(update(&mut cached), 0.625);
        assert_eq!(plain.to_string(), "5/8");
        assert_eq!(cached.to_string(), "5/8");
    }

    #[test]
    fn test_trait_propagates_errors() {
        let mut boxed: Vec<Box<dyn FractionOps>> = vec![
            Box::new(Fraction::new(1, 2).unwrap()),
            Box::new(CachedFraction::from_parts(1, 2).unwrap()),
        ];
        for ops in &mut boxed {
            assert_eq!(ops.set_denominator(0), Err(FractionError::InvalidDenominator));
            assert_eq!(ops.real_value(), 0.5);
        }
    }
}
