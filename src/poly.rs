//! Univariate polynomials with coefficients in an arbitrary [Ring](crate::domains::Ring).
//!
//! A [Polynomial](polynomial::Polynomial) is bound to one shared ring instance for its
//! whole lifetime. Arithmetic works for any ring, while division and gcds require the
//! ring to be a [Field](crate::domains::Field).
pub mod gcd;
pub mod polynomial;
