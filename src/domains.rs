//! Defines core algebraic traits and data structures.
//!
//! The core trait is [Ring], which has three binary operations: addition, subtraction and multiplication.
//! Each ring has an associated element type, that should not be confused with the ring type itself.
//! For example:
//! - The ring of integers [Z](static@integer::Z) has elements of type [Integer](rug::Integer).
//! - The field of rational numbers [Q](static@rational::Q) has elements of type [Rational](rug::Rational).
//! - The field of complex numbers [C](static@float::C) has elements of type [Complex](float::Complex).
//! - A quotient field [QuotientField](quotient::QuotientField) has elements of type [Polynomial](crate::poly::polynomial::Polynomial).
//!
//! The ring elements do not implement operations such as addition or multiplication,
//! but rather the ring itself does. Polynomials are generic over the ring type and
//! hold a shared reference to one ring instance.
//!
//! An extension of the ring trait is the [`Field`] trait, which adds a multiplicative identity
//! and inverses. Code that is generic over any ring can ask for the field capabilities
//! at run time with [`Ring::as_field`].
pub mod custom;
pub mod float;
pub mod integer;
pub mod quotient;
pub mod rational;

use std::fmt::{Debug, Display, Formatter};

use crate::error::PolyError;

/// A ring is a set with a zero and the binary operations addition, subtraction and multiplication.
/// Examples of rings include the integers, rational numbers, and polynomials modulo
/// an irreducible polynomial.
///
/// The ring axioms are assumed to hold and are never verified.
pub trait Ring: Debug + Display {
    /// The element of a ring. For example, the elements of the ring of integers [Z](static@integer::Z), `IntegerRing::Element`, are [Integer](rug::Integer).
    type Element: Clone + PartialEq + Debug;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn neg(&self, a: &Self::Element) -> Self::Element {
        self.sub(&self.zero(), a)
    }

    /// The additive identity.
    fn zero(&self) -> Self::Element;

    /// Returns `true` iff `a` is a member of the ring. Only used to validate input.
    fn contains(&self, a: &Self::Element) -> bool;

    fn is_zero(&self, a: &Self::Element) -> bool {
        *a == self.zero()
    }

    /// Returns `true` iff `a` is the multiplicative identity. Only used for printing,
    /// rings without a unit can keep the default.
    fn is_one(&self, _a: &Self::Element) -> bool {
        false
    }

    /// Whether the ring is a subset of the real numbers, so that elements
    /// can be printed with a leading sign.
    fn is_real_subset(&self) -> bool {
        false
    }

    /// Only consulted when [Ring::is_real_subset] returns `true`.
    fn is_negative(&self, _a: &Self::Element) -> bool {
        false
    }

    /// Compute `b^e` for `e > 0` using repeated squaring.
    ///
    /// # Panics
    ///
    /// Panics if `e` is zero, since a ring need not have a multiplicative identity.
    fn pow(&self, b: &Self::Element, mut e: u64) -> Self::Element {
        assert!(e > 0, "Ring::pow requires a positive exponent");

        let mut x = b.clone();
        let mut y: Option<Self::Element> = None;
        while e != 1 {
            if e % 2 == 1 {
                y = Some(match y {
                    Some(y) => self.mul(&y, &x),
                    None => x.clone(),
                });
                e -= 1;
            }

            x = self.mul(&x, &x);
            e /= 2;
        }

        match y {
            Some(y) => self.mul(&x, &y),
            None => x,
        }
    }

    /// Format a ring element.
    fn fmt_display(&self, element: &Self::Element, f: &mut Formatter<'_>) -> std::fmt::Result;

    /// Get the field capabilities of this ring, if it has them.
    /// Every implementor of [Field] should return `Some(self)`.
    fn as_field(&self) -> Option<&dyn Field<Element = Self::Element>>;

    /// Create a new printer for the given ring element that
    /// can be used in a [format!] macro.
    fn printer<'a>(&'a self, element: &'a Self::Element) -> RingPrinter<'a, Self>
    where
        Self: Sized,
    {
        RingPrinter::new(self, element)
    }
}

/// A field is a ring that has a multiplicative identity and supports inversion
/// of nonzero elements.
pub trait Field: Ring {
    /// The multiplicative identity.
    fn one(&self) -> Self::Element;

    /// The multiplicative inverse of `a`. Inverting zero yields an error.
    fn inv(&self, a: &Self::Element) -> Result<Self::Element, PolyError>;

    fn div(&self, a: &Self::Element, b: &Self::Element) -> Result<Self::Element, PolyError> {
        Ok(self.mul(a, &self.inv(b)?))
    }
}

/// Provides an interface for printing elements of a ring,
/// suitable as an argument to [format!]. Internally, it will call [Ring::fmt_display].
pub struct RingPrinter<'a, R: Ring + ?Sized> {
    pub ring: &'a R,
    pub element: &'a R::Element,
}

impl<'a, R: Ring + ?Sized> RingPrinter<'a, R> {
    pub fn new(ring: &'a R, element: &'a R::Element) -> RingPrinter<'a, R> {
        RingPrinter { ring, element }
    }
}

impl<'a, R: Ring + ?Sized> Display for RingPrinter<'a, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.ring.fmt_display(self.element, f)
    }
}
