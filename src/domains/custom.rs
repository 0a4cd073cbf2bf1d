//! Rings and fields assembled from caller-supplied operations.
//!
//! This is the way to plug a coefficient structure into the polynomial machinery
//! without writing a new type:
//!
//! ```
//! use ringpoly::domains::{custom::{CustomField, CustomRing}, Field, Ring};
//! use ringpoly::error::PolyError;
//!
//! // the finite field with 7 elements
//! let ring = CustomRing::new(
//!     "GF(7)",
//!     0i64,
//!     |a, b| (a + b).rem_euclid(7),
//!     |a, b| (a - b).rem_euclid(7),
//!     |a, b| (a * b).rem_euclid(7),
//! )
//! .with_contains(|a| (0..7).contains(a));
//!
//! let field = CustomField::new(ring, 1, |a: &i64| {
//!     (1..7).find(|b| (a * b).rem_euclid(7) == 1).ok_or(PolyError::DivisionByZero)
//! });
//!
//! assert_eq!(field.inv(&3), Ok(5));
//! assert!(!field.contains(&9));
//! ```
use std::{
    fmt::{Debug, Display, Formatter},
    sync::Arc,
};

use smartstring::alias::String;

use crate::error::PolyError;

use super::{Field, Ring};

type BinaryOp<T> = Arc<dyn Fn(&T, &T) -> T + Send + Sync>;
type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;
type ElementFormatter<T> = Arc<dyn Fn(&T) -> std::string::String + Send + Sync>;

/// A ring defined by a bundle of operations.
#[derive(Clone)]
pub struct CustomRing<T> {
    name: String,
    zero: T,
    add: BinaryOp<T>,
    sub: BinaryOp<T>,
    mul: BinaryOp<T>,
    contains: Option<Predicate<T>>,
    is_negative: Option<Predicate<T>>,
    is_one: Option<Predicate<T>>,
    to_str: Option<ElementFormatter<T>>,
}

impl<T: Clone + PartialEq + Debug + Display> CustomRing<T> {
    /// Create a ring from its additive identity and its three binary operations.
    /// By default every value of `T` is a member of the ring.
    pub fn new(
        name: &str,
        zero: T,
        add: impl Fn(&T, &T) -> T + Send + Sync + 'static,
        sub: impl Fn(&T, &T) -> T + Send + Sync + 'static,
        mul: impl Fn(&T, &T) -> T + Send + Sync + 'static,
    ) -> CustomRing<T> {
        CustomRing {
            name: name.into(),
            zero,
            add: Arc::new(add),
            sub: Arc::new(sub),
            mul: Arc::new(mul),
            contains: None,
            is_negative: None,
            is_one: None,
            to_str: None,
        }
    }

    /// Set the membership test.
    pub fn with_contains(mut self, contains: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.contains = Some(Arc::new(contains));
        self
    }

    /// Mark the ring as a subset of the real numbers, with the given sign test.
    pub fn with_real_subset(
        mut self,
        is_negative: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.is_negative = Some(Arc::new(is_negative));
        self
    }

    /// Set the test for the multiplicative identity, used when printing.
    pub fn with_is_one(mut self, is_one: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.is_one = Some(Arc::new(is_one));
        self
    }

    /// Set a custom formatter for elements. Without one, [Display] is used.
    pub fn with_formatter(
        mut self,
        to_str: impl Fn(&T) -> std::string::String + Send + Sync + 'static,
    ) -> Self {
        self.to_str = Some(Arc::new(to_str));
        self
    }
}

impl<T> CustomRing<T> {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T> Debug for CustomRing<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomRing")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}

impl<T> Display for CustomRing<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl<T: Clone + PartialEq + Debug + Display> Ring for CustomRing<T> {
    type Element = T;

    fn add(&self, a: &T, b: &T) -> T {
        (self.add)(a, b)
    }

    fn sub(&self, a: &T, b: &T) -> T {
        (self.sub)(a, b)
    }

    fn mul(&self, a: &T, b: &T) -> T {
        (self.mul)(a, b)
    }

    fn zero(&self) -> T {
        self.zero.clone()
    }

    fn contains(&self, a: &T) -> bool {
        self.contains.as_ref().map_or(true, |c| c(a))
    }

    fn is_one(&self, a: &T) -> bool {
        self.is_one.as_ref().map_or(false, |c| c(a))
    }

    fn is_real_subset(&self) -> bool {
        self.is_negative.is_some()
    }

    fn is_negative(&self, a: &T) -> bool {
        self.is_negative.as_ref().map_or(false, |c| c(a))
    }

    fn fmt_display(&self, element: &T, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.to_str {
            Some(to_str) => f.write_str(&to_str(element)),
            None => Display::fmt(element, f),
        }
    }

    fn as_field(&self) -> Option<&dyn Field<Element = Self::Element>> {
        None
    }
}

/// A field defined by a [CustomRing] together with a multiplicative identity and an inverse.
#[derive(Clone)]
pub struct CustomField<T> {
    ring: CustomRing<T>,
    one: T,
    inv: Arc<dyn Fn(&T) -> Result<T, PolyError> + Send + Sync>,
}

impl<T: Clone + PartialEq + Debug + Display> CustomField<T> {
    pub fn new(
        ring: CustomRing<T>,
        one: T,
        inv: impl Fn(&T) -> Result<T, PolyError> + Send + Sync + 'static,
    ) -> CustomField<T> {
        CustomField {
            ring,
            one,
            inv: Arc::new(inv),
        }
    }

    pub fn ring(&self) -> &CustomRing<T> {
        &self.ring
    }
}

impl<T> Debug for CustomField<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomField")
            .field("name", &self.ring.name())
            .finish_non_exhaustive()
    }
}

impl<T> Display for CustomField<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.ring.name())
    }
}

impl<T: Clone + PartialEq + Debug + Display> Ring for CustomField<T> {
    type Element = T;

    fn add(&self, a: &T, b: &T) -> T {
        self.ring.add(a, b)
    }

    fn sub(&self, a: &T, b: &T) -> T {
        self.ring.sub(a, b)
    }

    fn mul(&self, a: &T, b: &T) -> T {
        self.ring.mul(a, b)
    }

    fn zero(&self) -> T {
        self.ring.zero()
    }

    fn contains(&self, a: &T) -> bool {
        self.ring.contains(a)
    }

    fn is_one(&self, a: &T) -> bool {
        match &self.ring.is_one {
            Some(is_one) => is_one(a),
            None => *a == self.one,
        }
    }

    fn is_real_subset(&self) -> bool {
        self.ring.is_real_subset()
    }

    fn is_negative(&self, a: &T) -> bool {
        self.ring.is_negative(a)
    }

    fn fmt_display(&self, element: &T, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.ring.fmt_display(element, f)
    }

    fn as_field(&self) -> Option<&dyn Field<Element = Self::Element>> {
        Some(self)
    }
}

impl<T: Clone + PartialEq + Debug + Display> Field for CustomField<T> {
    fn one(&self) -> T {
        self.one.clone()
    }

    fn inv(&self, a: &T) -> Result<T, PolyError> {
        (self.inv)(a)
    }
}
