//! Univariate polynomial arithmetic over pluggable rings and fields.
//!
//! Coefficients live in any structure that implements [Ring](domains::Ring).
//! Polynomials can be added, subtracted, multiplied and evaluated over any ring,
//! divided with remainder and reduced to a monic gcd over any [Field](domains::Field),
//! and used to construct quotient fields `F[x]/(p(x))` that can in turn
//! serve as coefficient fields.
//!
//! For example:
//!
//! ```
//! use ringpoly::{
//!     domains::{quotient::QuotientField, rational::Q, Field, Ring},
//!     poly::polynomial::Polynomial,
//! };
//! use rug::Rational;
//!
//! let p = Polynomial::from_dense([-2, 0, 1].map(Rational::from), &Q).unwrap();
//! let k = QuotientField::new(&p).unwrap();
//!
//! let sqrt_2 = k.generator();
//! let inv = k.inv(&sqrt_2).unwrap();
//! assert_eq!(k.mul(&sqrt_2, &inv), k.one());
//! println!("1/{} = {}", k.printer(&sqrt_2), k.printer(&inv));
//! ```
//!
//! The crate emits [tracing] events for its iterative algorithms; install a
//! subscriber to inspect them.

pub mod domains;
pub mod error;
pub mod poly;
