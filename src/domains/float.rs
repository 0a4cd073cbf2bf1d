use std::{
    fmt::{Display, Formatter},
    ops::{Add, Mul, Neg, Sub},
    sync::Arc,
};

use once_cell::sync::Lazy;

use crate::error::PolyError;

use super::{Field, Ring};

/// The field of complex numbers, shared by all polynomials with complex coefficients.
pub static C: Lazy<Arc<ComplexField>> = Lazy::new(|| Arc::new(ComplexField::new()));

/// A complex number, `re + i * im`, where `i` is the imaginary unit.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    #[inline]
    pub const fn new(re: f64, im: f64) -> Complex {
        Complex { re, im }
    }

    #[inline]
    pub const fn i() -> Complex {
        Complex { re: 0., im: 1. }
    }

    #[inline]
    pub fn conj(&self) -> Self {
        Complex {
            re: self.re,
            im: -self.im,
        }
    }

    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex { re, im: 0. }
    }
}

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Neg for Complex {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Complex::new(-self.re, -self.im)
    }
}

impl Display for Complex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.im < 0. {
            write!(f, "({}-{}i)", self.re, -self.im)
        } else {
            write!(f, "({}+{}i)", self.re, self.im)
        }
    }
}

/// The field of complex numbers, with double precision components.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ComplexField;

impl Default for ComplexField {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplexField {
    pub const fn new() -> ComplexField {
        ComplexField
    }
}

impl Display for ComplexField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("C")
    }
}

impl Ring for ComplexField {
    type Element = Complex;

    #[inline]
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        *a + *b
    }

    #[inline]
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        *a - *b
    }

    #[inline]
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        *a * *b
    }

    #[inline]
    fn neg(&self, a: &Self::Element) -> Self::Element {
        -*a
    }

    #[inline]
    fn zero(&self) -> Self::Element {
        Complex::default()
    }

    /// Only finite complex numbers are members of the field.
    fn contains(&self, a: &Self::Element) -> bool {
        a.is_finite()
    }

    #[inline]
    fn is_zero(&self, a: &Self::Element) -> bool {
        a.re == 0. && a.im == 0.
    }

    #[inline]
    fn is_one(&self, a: &Self::Element) -> bool {
        a.re == 1. && a.im == 0.
    }

    fn fmt_display(&self, element: &Self::Element, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(element, f)
    }

    fn as_field(&self) -> Option<&dyn Field<Element = Self::Element>> {
        Some(self)
    }
}

impl Field for ComplexField {
    #[inline]
    fn one(&self) -> Self::Element {
        Complex::new(1., 0.)
    }

    fn inv(&self, a: &Self::Element) -> Result<Self::Element, PolyError> {
        let n = a.norm_squared();
        if n == 0. {
            return Err(PolyError::DivisionByZero);
        }

        let c = a.conj();
        Ok(Complex::new(c.re / n, c.im / n))
    }
}

#[cfg(test)]
mod test {
    use super::{Complex, C};
    use crate::{
        domains::{Field, Ring},
        error::PolyError,
    };

    #[test]
    fn axioms() {
        let a = Complex::new(1., 2.);
        let b = Complex::new(-0.5, 4.);
        let c = Complex::new(3., -1.);

        assert_eq!(C.add(&C.add(&a, &b), &c), C.add(&a, &C.add(&b, &c)));
        assert_eq!(C.add(&a, &C.zero()), a);
        assert_eq!(C.mul(&Complex::i(), &Complex::i()), Complex::from(-1.));
    }

    #[test]
    fn inverse() {
        let a = Complex::new(0., 2.);
        assert_eq!(a.conj(), Complex::new(0., -2.));
        assert_eq!(C.inv(&a), Ok(Complex::new(0., -0.5)));
        assert_eq!(C.mul(&a, &C.inv(&a).unwrap()), C.one());
        assert_eq!(C.inv(&C.zero()), Err(PolyError::DivisionByZero));
    }

    #[test]
    fn membership() {
        assert!(C.contains(&Complex::new(1., 1.)));
        assert!(!C.contains(&Complex::new(f64::NAN, 0.)));
        assert!(!C.contains(&Complex::new(0., f64::INFINITY)));
    }

    #[test]
    fn display() {
        assert_eq!(Complex::new(1., -2.).to_string(), "(1-2i)");
        assert_eq!(Complex::new(0.5, 3.).to_string(), "(0.5+3i)");
    }
}
