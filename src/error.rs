//! Errors raised by polynomial arithmetic and field constructions.

use thiserror::Error;

/// Errors that can occur during polynomial and ring operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A coefficient is rejected by the membership test of its ring.
    #[error("'{value}' is not an element of {ring}")]
    InvalidCoefficient { value: String, ring: String },

    /// A degree index is negative.
    #[error("degree must be >= 0, got {0}")]
    InvalidDegree(i64),

    /// Two polynomials are bound to different ring instances.
    #[error("cannot {operation} polynomials over different rings")]
    RingMismatch { operation: &'static str },

    /// An operation that needs field capabilities got a ring.
    #[error("{ring} is not a field")]
    NotAField { ring: String },

    /// An element of a quotient field has no inverse, because the modulus is reducible
    /// or the element is a multiple of the modulus.
    #[error("{element} is not invertible modulo {modulus}")]
    NotInvertible { element: String, modulus: String },

    /// Inversion of zero or division by the zero polynomial.
    #[error("division by zero")]
    DivisionByZero,

    /// A quotient field was requested for a modulus of degree < 1.
    #[error("the modulus of a quotient field must have positive degree, got degree {degree}")]
    InvalidModulus { degree: i64 },
}
