//! Operator forms of fraction arithmetic.
//!
//! Each operator delegates to the matching [`Fraction`] method. Operators have
//! no error channel, so they panic where the method would return an error,
//! the same way integer `/` panics on a zero divisor.
//!
//! Integers on either side are lifted with [`Fraction::from_integer`] first,
//! so `3 * f` and `f * 3` give the same result as the method forms.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::Result;
use crate::Fraction;

fn settle(result: Result<Fraction>) -> Fraction {
    match result {
        Ok(fraction) => fraction,
        Err(err) => panic!("fraction arithmetic failed: {err}"),
    }
}

// Addition
impl Add for Fraction {
    type Output = Self;

    /// a/b + c/d = (ad + cb) / bd
    ///
    /// # Panics
    ///
    /// Panics if the result does not fit in 64 bits.
    fn add(self, rhs: Self) -> Self::Output {
        settle(Fraction::add(&self, &rhs))
    }
}

impl Add<&Fraction> for Fraction {
    type Output = Self;

    fn add(self, rhs: &Fraction) -> Self::Output {
        settle(Fraction::add(&self, rhs))
    }
}

impl Add for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: Self) -> Self::Output {
        settle(Fraction::add(self, rhs))
    }
}

impl Add<i64> for Fraction {
    type Output = Self;

    fn add(self, rhs: i64) -> Self::Output {
        settle(self.add_int(rhs))
    }
}

impl Add<Fraction> for i64 {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Self::Output {
        settle(Fraction::add(&Fraction::from_integer(self), &rhs))
    }
}

// Subtraction
impl Sub for Fraction {
    type Output = Self;

    /// a/b - c/d = (ad - cb) / bd
    ///
    /// # Panics
    ///
    /// Panics if the result does not fit in 64 bits.
    fn sub(self, rhs: Self) -> Self::Output {
        settle(self.subtract(&rhs))
    }
}

impl Sub<&Fraction> for Fraction {
    type Output = Self;

    fn sub(self, rhs: &Fraction) -> Self::Output {
        settle(self.subtract(rhs))
    }
}

impl Sub for &Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Self) -> Self::Output {
        settle(self.subtract(rhs))
    }
}

impl Sub<i64> for Fraction {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self::Output {
        settle(self.subtract_int(rhs))
    }
}

impl Sub<Fraction> for i64 {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Self::Output {
        settle(Fraction::from_integer(self).subtract(&rhs))
    }
}

// Multiplication
impl Mul for Fraction {
    type Output = Self;

    /// a/b * c/d = ac / bd
    ///
    /// # Panics
    ///
    /// Panics if the result does not fit in 64 bits.
    fn mul(self, rhs: Self) -> Self::Output {
        settle(self.multiply(&rhs))
    }
}

impl Mul<&Fraction> for Fraction {
    type Output = Self;

    fn mul(self, rhs: &Fraction) -> Self::Output {
        settle(self.multiply(rhs))
    }
}

impl Mul for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Self) -> Self::Output {
        settle(self.multiply(rhs))
    }
}

impl Mul<i64> for Fraction {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        settle(self.multiply_int(rhs))
    }
}

impl Mul<Fraction> for i64 {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Self::Output {
        settle(Fraction::from_integer(self).multiply(&rhs))
    }
}

// Division
impl Div for Fraction {
    type Output = Self;

    /// (a/b) / (c/d) = ad / bc
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero or the result does not fit in 64 bits.
    fn div(self, rhs: Self) -> Self::Output {
        settle(self.divide(&rhs))
    }
}

impl Div<&Fraction> for Fraction {
    type Output = Self;

    fn div(self, rhs: &Fraction) -> Self::Output {
        settle(self.divide(rhs))
    }
}

impl Div for &Fraction {
    type Output = Fraction;

    fn div(self, rhs: Self) -> Self::Output {
        settle(self.divide(rhs))
    }
}

impl Div<i64> for Fraction {
    type Output = Self;

    fn div(self, rhs: i64) -> Self::Output {
        settle(self.divide_int(rhs))
    }
}

impl Div<Fraction> for i64 {
    type Output = Fraction;

    fn div(self, rhs: Fraction) -> Self::Output {
        settle(Fraction::from_integer(self).divide(&rhs))
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        settle(self.negate())
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Self::Output {
        settle(self.negate())
    }
}

#[cfg(test)]
mod tests {
    use crate::Fraction;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn test_operators_match_methods() {
        let f1 = frac(1, 3);
        let f2 = frac(2, 3);

        assert_eq!(f1.clone() + f2.clone(), f1.add(&f2).unwrap());
        assert_eq!(&f1 - &f2, f1.subtract(&f2).unwrap());
        assert_eq!(f1.clone() * &f2, f1.multiply(&f2).unwrap());
        assert_eq!(f2.clone() / f1.clone(), f2.divide(&f1).unwrap());
        assert_eq!(-f1.clone(), frac(-1, 3));
    }

    #[test]
    fn test_integer_operands_commute() {
        let f2 = frac(2, 3);

        assert_eq!(3 * f2.clone(), f2.clone() * 3);
        assert_eq!(3 * f2.clone(), frac(2, 1));
        assert_eq!(2 + frac(1, 3), frac(7, 3));
        assert_eq!(1 - frac(1, 4), frac(3, 4));
        assert_eq!(2 / frac(2, 3), frac(3, 1));
        assert_eq!(frac(1, 3) + 2, frac(7, 3));
        assert_eq!(Fraction::from_integer(4) / 2, frac(2, 1));
    }

    #[test]
    fn test_chained_expression() {
        let f1 = frac(1, 3);
        let f2 = frac(2, 3);
        let f3 = frac(3, 4);

        let chained = f1
            .add(&f2)
            .and_then(|s| s.divide(&f3))
            .and_then(|q| q.subtract_int(5))
            .unwrap();
        let expr = (f1 + f2) / f3 - 5;

        assert_eq!(chained, expr);
        assert_eq!(expr, frac(-11, 3));
    }

    #[test]
    fn test_negative_operands() {
        assert_eq!(frac(-2, 5) * frac(3, 4), frac(-3, 10));
    }

    #[test]
    #[should_panic(expected = "cannot divide by zero")]
    fn test_div_operator_panics_on_zero() {
        let _ = frac(1, 3) / 0;
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn test_add_operator_panics_on_overflow() {
        let _ = Fraction::from_integer(i64::MAX) + 1;
    }
}
