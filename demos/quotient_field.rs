use std::sync::Arc;

use ringpoly::{
    domains::{
        custom::{CustomField, CustomRing},
        quotient::QuotientField,
        rational::Q,
        Field, Ring,
    },
    error::PolyError,
    poly::polynomial::Polynomial,
};
use rug::Rational;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn gaussian_rationals() -> Result<(), PolyError> {
    let p = Polynomial::from_dense([1, 0, 1].map(Rational::from), &Q)?;
    let k = Arc::new(QuotientField::new(&p)?);

    let i = k.generator();
    let e = k.add(&k.one(), &i);
    let inv = k.inv(&e)?;

    println!("> In {}:", k);
    println!("\ti^2 = {}", k.printer(&k.mul(&i, &i)));
    println!("\t1/{} = {}", k.printer(&e), k.printer(&inv));

    // a polynomial with coefficients in Q(i)
    let f = Polynomial::new([(0, k.one()), (2, k.one())], &k)?;
    let g = Polynomial::new([(0, i.clone()), (1, k.one())], &k)?;
    println!("> gcd({}, {}) = {}", f, g, f.gcd(&g)?);

    Ok(())
}

fn galois_field() -> Result<(), PolyError> {
    let ring = CustomRing::new(
        "GF(7)",
        0i64,
        |a, b| (a + b).rem_euclid(7),
        |a, b| (a - b).rem_euclid(7),
        |a, b| (a * b).rem_euclid(7),
    )
    .with_contains(|a| (0..7).contains(a));
    let gf7 = Arc::new(CustomField::new(ring, 1, |a: &i64| {
        (1..7)
            .find(|b| (a * b).rem_euclid(7) == 1)
            .ok_or(PolyError::DivisionByZero)
    }));

    let p = Polynomial::from_dense([1, 0, 1], &gf7)?;
    let gf49 = QuotientField::new(&p)?;
    let a = Polynomial::from_dense([3, 5], &gf7)?;
    println!(
        "> In {}: 1/{} = {}",
        gf49,
        gf49.printer(&a),
        gf49.printer(&gf49.inv(&a)?)
    );

    Ok(())
}

fn main() -> Result<(), PolyError> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("RINGPOLY_LOG"))
        .init();

    gaussian_rationals()?;
    galois_field()
}
