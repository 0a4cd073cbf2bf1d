use std::sync::Arc;

use proptest::prelude::*;
use rug::Rational;

use ringpoly::{
    domains::{
        custom::{CustomField, CustomRing},
        quotient::QuotientField,
        rational::{RationalField, Q},
        Field, Ring,
    },
    error::PolyError,
    poly::polynomial::Polynomial,
};

fn q(coeffs: &[i64]) -> Polynomial<RationalField> {
    Polynomial::from_dense(coeffs.iter().map(|c| Rational::from(*c)), &Q).unwrap()
}

fn gaussian_rationals() -> Arc<QuotientField<RationalField>> {
    Arc::new(QuotientField::new(&q(&[1, 0, 1])).unwrap())
}

fn gf7() -> Arc<CustomField<i64>> {
    let ring = CustomRing::new(
        "GF(7)",
        0i64,
        |a, b| (a + b).rem_euclid(7),
        |a, b| (a - b).rem_euclid(7),
        |a, b| (a * b).rem_euclid(7),
    )
    .with_contains(|a| (0..7).contains(a));

    Arc::new(CustomField::new(ring, 1, |a: &i64| {
        (1..7)
            .find(|b| (a * b).rem_euclid(7) == 1)
            .ok_or(PolyError::DivisionByZero)
    }))
}

proptest! {
    #[test]
    fn gaussian_inverse(re in -50i64..50, im in -50i64..50, d in 1i64..10) {
        prop_assume!(re != 0 || im != 0);

        let k = gaussian_rationals();
        let e = Polynomial::from_dense([Rational::from((re, d)), Rational::from((im, d))], &Q).unwrap();
        let inv = k.inv(&e).unwrap();

        prop_assert_eq!(k.mul(&e, &inv), k.one());
        prop_assert!(inv.degree() < 2);
    }
}

#[test]
fn imaginary_unit() {
    let k = gaussian_rationals();
    let i = k.generator();

    assert_eq!(k.mul(&i, &i), k.neg(&k.one()));
    assert_eq!(k.mul(&k.mul(&i, &i), &k.mul(&i, &i)), k.one());
    assert_eq!(k.pow(&i, 3), k.neg(&i));
    assert_eq!(k.to_string(), "Q/(1 + x^2)");
}

#[test]
fn polynomials_over_extension() {
    let k = gaussian_rationals();
    let i = k.generator();

    // x^2 + 1 = (x + i)(x - i)
    let f = Polynomial::new([(0, k.one()), (2, k.one())], &k).unwrap();
    let g = Polynomial::new([(0, i.clone()), (1, k.one())], &k).unwrap();

    let (quot, rem) = f.quot_rem(&g).unwrap();
    assert!(rem.is_zero());
    assert_eq!(
        quot,
        Polynomial::new([(0, k.neg(&i)), (1, k.one())], &k).unwrap()
    );
    assert_eq!(f.gcd(&g).unwrap(), g);

    // evaluation at i
    assert!(k.is_zero(&f.evaluate(&i)));
}

#[test]
fn tower() {
    // Q(i)(sqrt(2))
    let k = gaussian_rationals();
    let p = Polynomial::from_dense([q(&[-2]), k.zero(), k.one()], &k).unwrap();
    let l = QuotientField::new(&p).unwrap();

    let sqrt_2 = l.generator();
    assert_eq!(
        l.mul(&sqrt_2, &sqrt_2),
        Polynomial::from_dense([q(&[2])], &k).unwrap()
    );

    // i + sqrt(2)
    let e = Polynomial::from_dense([k.generator(), k.one()], &k).unwrap();
    let inv = l.inv(&e).unwrap();
    assert_eq!(l.mul(&e, &inv), l.one());
}

#[test]
fn galois_field() {
    let gf7 = gf7();
    let gf49 = QuotientField::new(&Polynomial::from_dense([1, 0, 1], &gf7).unwrap()).unwrap();

    let mut count = 0;
    for a in 0..7 {
        for b in 0..7 {
            if a == 0 && b == 0 {
                continue;
            }

            let e = Polynomial::from_dense([a, b], &gf7).unwrap();
            let inv = gf49.inv(&e).unwrap();
            assert_eq!(gf49.mul(&e, &inv), gf49.one(), "{}", e);
            count += 1;
        }
    }
    assert_eq!(count, 48);

    assert!(matches!(
        Polynomial::from_dense([7], &gf7),
        Err(PolyError::InvalidCoefficient { .. })
    ));
}

#[test]
fn zero_divisors() {
    let gf7 = gf7();
    // x^2 - 1 = (x - 1)(x + 1)
    let r = QuotientField::new(&Polynomial::from_dense([6, 0, 1], &gf7).unwrap()).unwrap();

    let e = Polynomial::from_dense([1, 1], &gf7).unwrap();
    assert!(matches!(r.inv(&e), Err(PolyError::NotInvertible { .. })));
    assert!(r.is_zero(&r.mul(&e, &Polynomial::from_dense([6, 1], &gf7).unwrap())));
}

#[test]
fn distinct_instances() {
    let k1 = gaussian_rationals();
    let k2 = gaussian_rationals();

    let f = Polynomial::new([(1, k1.one())], &k1).unwrap();
    let g = Polynomial::new([(1, k2.one())], &k2).unwrap();

    // the underlying Q is shared, so elements are interchangeable
    assert!(k2.contains(&k1.generator()));
    assert_ne!(f, g);
    assert_eq!(
        f.checked_add(&g),
        Err(PolyError::RingMismatch { operation: "add" })
    );
}
