use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    sync::Arc,
};

use once_cell::sync::Lazy;
use rug::Rational;

use crate::error::PolyError;

use super::{Field, Ring};

/// The field of rational numbers, shared by all polynomials with rational coefficients.
pub static Q: Lazy<Arc<RationalField>> = Lazy::new(|| Arc::new(RationalField::new()));

/// The field of rational numbers. Arithmetic is exact.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RationalField;

impl Default for RationalField {
    fn default() -> Self {
        Self::new()
    }
}

impl RationalField {
    pub const fn new() -> RationalField {
        RationalField
    }
}

impl Display for RationalField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Q")
    }
}

impl Ring for RationalField {
    type Element = Rational;

    #[inline]
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.clone() + b
    }

    #[inline]
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.clone() - b
    }

    #[inline]
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.clone() * b
    }

    #[inline]
    fn neg(&self, a: &Self::Element) -> Self::Element {
        -a.clone()
    }

    #[inline]
    fn zero(&self) -> Self::Element {
        Rational::new()
    }

    fn contains(&self, _a: &Self::Element) -> bool {
        true
    }

    #[inline]
    fn is_zero(&self, a: &Self::Element) -> bool {
        a.cmp0() == Ordering::Equal
    }

    #[inline]
    fn is_one(&self, a: &Self::Element) -> bool {
        *a.denom() == 1 && *a.numer() == 1
    }

    fn is_real_subset(&self) -> bool {
        true
    }

    fn is_negative(&self, a: &Self::Element) -> bool {
        a.cmp0() == Ordering::Less
    }

    fn fmt_display(&self, element: &Self::Element, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(element, f)
    }

    fn as_field(&self) -> Option<&dyn Field<Element = Self::Element>> {
        Some(self)
    }
}

impl Field for RationalField {
    #[inline]
    fn one(&self) -> Self::Element {
        Rational::from(1)
    }

    fn inv(&self, a: &Self::Element) -> Result<Self::Element, PolyError> {
        if self.is_zero(a) {
            return Err(PolyError::DivisionByZero);
        }

        Ok(a.clone().recip())
    }
}
