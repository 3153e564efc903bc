//! Property-based checks of the algebraic laws that hold universally over
//! `BigInt`: ring axioms, the division identity, bitwise involutions, shift
//! laws, negation, comparison totality, and decimal round-tripping.

use bigint::BigInt;
use proptest::prelude::*;

/// An arbitrary signed decimal value, rendered as text and parsed through
/// the public `from_decimal` entry point — this crate has no other way to
/// construct an arbitrary-length value from outside the crate, which is
/// exactly the surface real callers use.
fn any_bigint() -> impl Strategy<Value = BigInt> {
    (any::<bool>(), prop::collection::vec(0u8..=9u8, 1..25)).prop_map(|(negative, digits)| {
        let digits: String = digits.iter().map(|d| (d + b'0') as char).collect();
        let text = if negative {
            format!("-{digits}")
        } else {
            digits
        };
        BigInt::from_decimal(&text).expect("generated digit string is always valid")
    })
}

/// A small nonzero value, kept small so division tests stay cheap.
fn any_nonzero_small() -> impl Strategy<Value = BigInt> {
    any::<i64>()
        .prop_filter("nonzero", |v| *v != 0)
        .prop_map(BigInt::from)
}

proptest! {
    #[test]
    fn addition_is_commutative(a in any_bigint(), b in any_bigint()) {
        prop_assert_eq!(a.clone() + b.clone(), b + a);
    }

    #[test]
    fn addition_is_associative(a in any_bigint(), b in any_bigint(), c in any_bigint()) {
        prop_assert_eq!((a.clone() + b.clone()) + c.clone(), a + (b + c));
    }

    #[test]
    fn zero_is_additive_identity(a in any_bigint()) {
        prop_assert_eq!(a.clone() + BigInt::from(0i32), a);
    }

    #[test]
    fn a_plus_negation_is_zero(a in any_bigint()) {
        prop_assert_eq!(a.clone() + (-a), BigInt::from(0i32));
    }

    #[test]
    fn multiplication_is_commutative(a in any_bigint(), b in any_bigint()) {
        prop_assert_eq!(a.clone() * b.clone(), b * a);
    }

    #[test]
    fn one_is_multiplicative_identity(a in any_bigint()) {
        prop_assert_eq!(a.clone() * BigInt::from(1i32), a);
    }

    #[test]
    fn zero_annihilates_multiplication(a in any_bigint()) {
        prop_assert_eq!(a * BigInt::from(0i32), BigInt::from(0i32));
    }

    #[test]
    fn multiplication_distributes_over_addition(a in any_bigint(), b in any_bigint(), c in any_bigint()) {
        prop_assert_eq!(
            a.clone() * (b.clone() + c.clone()),
            a.clone() * b + a * c
        );
    }

    #[test]
    fn division_identity_holds(a in any_bigint(), b in any_nonzero_small()) {
        let (q, r) = a.div_rem(&b);
        prop_assert_eq!(q * b.clone() + r.clone(), a.clone());
        prop_assert!(r.abs() < b.abs());
        if !r.is_zero() {
            prop_assert_eq!(r.sign(), a.sign());
        }
    }

    #[test]
    fn double_invert_is_identity(a in any_bigint()) {
        prop_assert_eq!(!(!a.clone()), a);
    }

    #[test]
    fn and_with_self_and_or_with_self_and_xor_with_self(a in any_bigint()) {
        prop_assert_eq!(a.clone() & a.clone(), a.clone());
        prop_assert_eq!(a.clone() | a.clone(), a.clone());
        prop_assert_eq!((a.clone() ^ a.clone()), BigInt::from(0i32));
    }

    #[test]
    fn and_with_complement_is_zero_or_with_complement_is_negative_one(a in any_bigint()) {
        prop_assert_eq!(a.clone() & !a.clone(), BigInt::from(0i32));
        prop_assert_eq!(a.clone() | !a.clone(), BigInt::from(-1i32));
    }

    #[test]
    fn de_morgan_holds_for_and(a in any_bigint(), b in any_bigint()) {
        prop_assert_eq!(!(a.clone() & b.clone()), !a | !b);
    }

    #[test]
    fn left_shift_matches_multiplication_by_power_of_two(a in any_bigint(), n in 0u32..96) {
        let scaled = a.clone() << n;
        let power = BigInt::from(1i32) << n;
        prop_assert_eq!(scaled, a * power);
    }

    #[test]
    fn left_then_right_shift_is_identity_for_non_negative(a in any_bigint(), n in 0u32..96) {
        prop_assume!(!a.sign());
        prop_assert_eq!((a.clone() << n) >> n, a);
    }

    #[test]
    fn right_shift_is_floor_division_by_power_of_two(a in any::<i64>(), n in 0u32..40) {
        let expected = (a as i128).div_euclid(1i128 << n);
        let actual = BigInt::from(a) >> n;
        prop_assert_eq!(actual.to_decimal(), expected.to_string());
    }

    #[test]
    fn negation_is_involutive(a in any_bigint()) {
        prop_assert_eq!(-(-a.clone()), a);
    }

    #[test]
    fn negation_equals_invert_plus_one(a in any_bigint()) {
        prop_assert_eq!(-a.clone(), !a + BigInt::from(1i32));
    }

    #[test]
    fn comparison_is_consistent_with_negation(a in any_bigint(), b in any_bigint()) {
        prop_assert_eq!(a < b, -b.clone() < -a.clone());
    }

    #[test]
    fn comparison_is_total(a in any_bigint(), b in any_bigint()) {
        let flags = [a < b, a == b, a > b];
        prop_assert_eq!(flags.iter().filter(|&&f| f).count(), 1);
    }

    #[test]
    fn round_trips_through_decimal_text(a in any_bigint()) {
        let text = a.to_decimal();
        prop_assert_eq!(BigInt::from_decimal(&text).unwrap(), a);
    }
}
