use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    sync::Arc,
};

use once_cell::sync::Lazy;
use rug::Integer;

use super::{Field, Ring};

/// The integer ring, shared by all polynomials with integer coefficients.
pub static Z: Lazy<Arc<IntegerRing>> = Lazy::new(|| Arc::new(IntegerRing::new()));

/// The integer ring.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct IntegerRing;

impl Default for IntegerRing {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegerRing {
    pub const fn new() -> IntegerRing {
        IntegerRing
    }
}

impl Display for IntegerRing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Z")
    }
}

impl Ring for IntegerRing {
    type Element = Integer;

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
        Integer::new()
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
        *a == 1
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
        None
    }
}
