//! Property-based tests for fraction canonicalization and arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;
    use std::cmp::Ordering;

    use crate::fraction::gcd;
    use crate::{CachedFraction, Fraction, FractionError};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn fraction() -> impl Strategy<Value = Fraction> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Fraction::new(n, d).unwrap())
    }

    proptest! {
        // Canonical form

        #[test]
        fn canonical_form(n in small_int(), d in non_zero_int()) {
            let f = Fraction::new(n, d).unwrap();
            prop_assert!(f.denominator() > 0);
            if f.numerator() == 0 {
                prop_assert_eq!(f.denominator(), 1);
            } else {
                prop_assert_eq!(
                    gcd(u128::from(f.numerator().unsigned_abs()), u128::from(f.denominator().unsigned_abs())),
                    1
                );
            }
        }

        #[test]
        fn reduction_is_scale_invariant(n in small_int(), d in non_zero_int(), k in non_zero_int()) {
            prop_assert_eq!(Fraction::new(n, d).unwrap(), Fraction::new(k * n, k * d).unwrap());
        }

        #[test]
        fn value_is_preserved(n in small_int(), d in non_zero_int()) {
            let f = Fraction::new(n, d).unwrap();
            prop_assert_eq!(i128::from(f.numerator()) * i128::from(d), i128::from(n) * i128::from(f.denominator()));
        }

        // Field axioms

        #[test]
        fn add_commutative(a in fraction(), b in fraction()) {
            prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        }

        #[test]
        fn mul_distributive(a in fraction(), b in fraction(), c in fraction()) {
            let lhs = a.multiply(&b.add(&c).unwrap()).unwrap();
            let rhs = a.multiply(&b).unwrap().add(&a.multiply(&c).unwrap()).unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn sub_then_add_roundtrips(a in fraction(), b in fraction()) {
            prop_assert_eq!(a.subtract(&b).unwrap().add(&b).unwrap(), a);
        }

        #[test]
        fn div_inverts_mul(a in fraction(), b in fraction()) {
            if b.is_zero() {
                prop_assert_eq!(a.divide(&b), Err(FractionError::DivisionByZero));
            } else {
                prop_assert_eq!(a.multiply(&b).unwrap().divide(&b).unwrap(), a);
            }
        }

        #[test]
        fn integer_ops_match_lifted(a in fraction(), n in small_int()) {
            let lifted = Fraction::from_integer(n);
            prop_assert_eq!(a.add_int(n).unwrap(), a.add(&lifted).unwrap());
            prop_assert_eq!(a.subtract_int(n).unwrap(), a.subtract(&lifted).unwrap());
            prop_assert_eq!(a.multiply_int(n).unwrap(), a.multiply(&lifted).unwrap());
            prop_assert_eq!(n * a.clone(), a.clone() * n);
            prop_assert_eq!(n - a.clone(), lifted.subtract(&a).unwrap());
        }

        // Ordering

        #[test]
        fn exact_order_agrees_with_real_order(a in fraction(), b in fraction()) {
            // Small operands are always distinguishable as f64.
            prop_assert_eq!(Some(a.compare(&b)), a.compare_real(&b));
        }

        #[test]
        fn order_consistent_with_eq(a in fraction(), b in fraction()) {
            prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
        }

        // Caching

        #[test]
        fn cached_matches_plain(n in small_int(), d in non_zero_int(), m in small_int()) {
            let mut plain = Fraction::new(n, d).unwrap();
            let mut cached = CachedFraction::new(plain.clone());
            prop_assert_eq!(cached.real_value().to_bits(), plain.real_value().to_bits());

            plain.set_numerator(m).unwrap();
            cached.set_numerator(m).unwrap();
            prop_assert_eq!(cached.real_value().to_bits(), plain.real_value().to_bits());
        }
    }
}
