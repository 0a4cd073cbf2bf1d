use std::{
    collections::{btree_map::Entry, BTreeMap},
    fmt::{Debug, Display},
    ops::{Add, Mul, Neg, Sub},
    sync::Arc,
};

use tracing::trace;

use crate::{
    domains::{Field, Ring},
    error::PolyError,
};

/// A sparse univariate polynomial, bound to a shared ring instance.
///
/// The constant term is always stored, and it is the only coefficient that may be zero.
/// Two polynomials can only be combined if they refer to the same ring instance,
/// i.e. the same [Arc].
///
/// # Examples
///
/// ```
/// use ringpoly::{domains::rational::Q, poly::polynomial::Polynomial};
/// use rug::Rational;
///
/// // 1 + x + 4x^3
/// let f = Polynomial::new(
///     [(0, Rational::from(1)), (1, Rational::from(1)), (3, Rational::from(4))],
///     &Q,
/// )
/// .unwrap();
///
/// assert_eq!(f.degree(), 3);
/// assert_eq!(f.evaluate(&Rational::from(2)), Rational::from(35));
/// assert_eq!(f.to_string(), "1 + x + 4x^3");
/// ```
pub struct Polynomial<R: Ring> {
    coefficients: BTreeMap<usize, R::Element>,
    ring: Arc<R>,
    over_field: bool,
}

impl<R: Ring> Polynomial<R> {
    /// Create a polynomial from `(degree, coefficient)` pairs. Coefficients of the same
    /// degree are added together.
    pub fn new<I>(coeffs: I, ring: &Arc<R>) -> Result<Self, PolyError>
    where
        I: IntoIterator<Item = (i64, R::Element)>,
    {
        let mut poly = Self::new_zero(ring);
        for (n, c) in coeffs {
            if !ring.contains(&c) {
                return Err(PolyError::InvalidCoefficient {
                    value: ring.printer(&c).to_string(),
                    ring: ring.to_string(),
                });
            }

            poly.add_coeff(&c, n)?;
        }

        Ok(poly)
    }

    /// Create a polynomial from a list of coefficients, starting at the constant term.
    pub fn from_dense<I>(coeffs: I, ring: &Arc<R>) -> Result<Self, PolyError>
    where
        I: IntoIterator<Item = R::Element>,
    {
        Self::new(
            coeffs.into_iter().enumerate().map(|(n, c)| (n as i64, c)),
            ring,
        )
    }

    /// Constructs a zero polynomial over `ring`.
    pub fn new_zero(ring: &Arc<R>) -> Self {
        let mut coefficients = BTreeMap::new();
        coefficients.insert(0, ring.zero());

        Polynomial {
            coefficients,
            ring: ring.clone(),
            over_field: ring.as_field().is_some(),
        }
    }

    /// Constructs a zero polynomial, inheriting the ring from `self`.
    #[inline]
    pub fn zero(&self) -> Self {
        let mut coefficients = BTreeMap::new();
        coefficients.insert(0, self.ring.zero());

        Polynomial {
            coefficients,
            ring: self.ring.clone(),
            over_field: self.over_field,
        }
    }

    /// Constructs a constant polynomial, inheriting the ring from `self`.
    /// The coefficient is assumed to be a member of the ring.
    #[inline]
    pub fn constant(&self, coeff: R::Element) -> Self {
        self.monomial(coeff, 0)
    }

    /// Constructs the polynomial `coeff * x^exponent`, inheriting the ring from `self`.
    /// The coefficient is assumed to be a member of the ring.
    pub fn monomial(&self, coeff: R::Element, exponent: usize) -> Self {
        let mut res = self.zero();
        res.accumulate(&coeff, exponent);
        res
    }

    /// Get the ring of the coefficients.
    pub fn ring(&self) -> &Arc<R> {
        &self.ring
    }

    /// Returns true if the coefficient ring has field capabilities.
    pub fn is_over_field(&self) -> bool {
        self.over_field
    }

    /// Returns true if both polynomials are bound to the same ring instance.
    #[inline]
    pub fn same_ring(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.ring, &other.ring)
    }

    pub(crate) fn check_ring(&self, other: &Self, operation: &'static str) -> Result<(), PolyError> {
        if self.same_ring(other) {
            Ok(())
        } else {
            Err(PolyError::RingMismatch { operation })
        }
    }

    pub(crate) fn field(&self) -> Result<&dyn Field<Element = R::Element>, PolyError> {
        match self.ring.as_field() {
            Some(f) if self.over_field => Ok(f),
            _ => Err(PolyError::NotAField {
                ring: self.ring.to_string(),
            }),
        }
    }

    /// Get the coefficient of `x^n`.
    pub fn coeff(&self, n: i64) -> Result<R::Element, PolyError> {
        if n < 0 {
            return Err(PolyError::InvalidDegree(n));
        }

        Ok(self
            .coefficients
            .get(&(n as usize))
            .cloned()
            .unwrap_or_else(|| self.ring.zero()))
    }

    /// Add `a` to the coefficient of `x^n`.
    pub fn add_coeff(&mut self, a: &R::Element, n: i64) -> Result<(), PolyError> {
        if n < 0 {
            return Err(PolyError::InvalidDegree(n));
        }

        self.accumulate(a, n as usize);
        Ok(())
    }

    /// The only place where coefficients are written. Keys other than 0 never hold zero.
    fn accumulate(&mut self, a: &R::Element, n: usize) {
        let ring = &self.ring;
        match self.coefficients.entry(n) {
            Entry::Occupied(mut e) => {
                let sum = ring.add(e.get(), a);
                if n != 0 && ring.is_zero(&sum) {
                    e.remove();
                } else {
                    *e.get_mut() = sum;
                }
            }
            Entry::Vacant(e) => {
                let sum = ring.add(&ring.zero(), a);
                if !ring.is_zero(&sum) {
                    e.insert(sum);
                }
            }
        }
    }

    /// Remove the coefficient of `x^n`.
    fn clear_coeff(&mut self, n: usize) {
        if n == 0 {
            self.coefficients.insert(0, self.ring.zero());
        } else {
            self.coefficients.remove(&n);
        }
    }

    /// The highest power with a nonzero coefficient, or `-1` for the zero polynomial.
    pub fn degree(&self) -> i64 {
        match self.coefficients.last_key_value() {
            Some((&d, c)) if d > 0 || !self.ring.is_zero(c) => d as i64,
            _ => -1,
        }
    }

    /// Get the leading coefficient.
    pub fn lcoeff(&self) -> R::Element {
        self.coefficients
            .values()
            .next_back()
            .cloned()
            .unwrap_or_else(|| self.ring.zero())
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.degree() == -1
    }

    /// Returns true if the polynomial is constant.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.degree() <= 0
    }

    /// Iterate over the nonzero terms as `(exponent, coefficient)`, in increasing order.
    pub fn terms(&self) -> impl Iterator<Item = (usize, &R::Element)> + '_ {
        self.coefficients
            .iter()
            .filter(move |(n, c)| **n > 0 || !self.ring.is_zero(c))
            .map(|(n, c)| (*n, c))
    }

    fn add_terms(&self, other: &Self) -> Self {
        let mut h = self.zero();
        for (&n, c) in &self.coefficients {
            h.accumulate(c, n);
        }
        for (&n, c) in &other.coefficients {
            h.accumulate(c, n);
        }
        h
    }

    fn sub_terms(&self, other: &Self) -> Self {
        let zero = self.ring.zero();
        let mut h = self.zero();
        for (&n, c) in &self.coefficients {
            h.accumulate(c, n);
        }
        for (&n, c) in &other.coefficients {
            h.accumulate(&self.ring.sub(&zero, c), n);
        }
        h
    }

    fn mul_terms(&self, other: &Self) -> Self {
        let mut h = self.zero();
        for (e1, c1) in self.terms() {
            for (e2, c2) in other.terms() {
                h.accumulate(&self.ring.mul(c1, c2), e1 + e2);
            }
        }
        h
    }

    /// Compute `self + other`.
    pub fn checked_add(&self, other: &Self) -> Result<Self, PolyError> {
        self.check_ring(other, "add")?;
        Ok(self.add_terms(other))
    }

    /// Compute `self - other`.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, PolyError> {
        self.check_ring(other, "subtract")?;
        Ok(self.sub_terms(other))
    }

    /// Compute `self * other`.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, PolyError> {
        self.check_ring(other, "multiply")?;
        Ok(self.mul_terms(other))
    }

    /// Evaluate the polynomial at `x`, using only the operations of the ring.
    pub fn evaluate(&self, x: &R::Element) -> R::Element {
        let mut res = self.ring.zero();

        let mut last_exp = None;
        for (&e, c) in self.coefficients.iter().rev() {
            if let Some(last) = last_exp {
                let p = self.ring.pow(x, (last - e) as u64);
                res = self.ring.mul(&res, &p);
            }

            res = self.ring.add(&res, c);
            last_exp = Some(e);
        }

        match last_exp {
            Some(last) if last > 0 => {
                let p = self.ring.pow(x, last as u64);
                self.ring.mul(&res, &p)
            }
            _ => res,
        }
    }

    /// Divide `self` by `div`, returning the quotient and the remainder with
    /// `degree(remainder) < degree(div)`. Requires the ring to be a field.
    pub fn quot_rem(&self, div: &Self) -> Result<(Self, Self), PolyError> {
        self.check_ring(div, "divide")?;
        let field = self.field()?;

        if div.is_zero() {
            return Err(PolyError::DivisionByZero);
        }

        let m = div.degree();
        let u = field.inv(&div.lcoeff())?;

        let mut q = self.zero();
        let mut r = self.clone();
        let mut n = r.degree();

        while m <= n {
            let c = field.mul(&r.lcoeff(), &u);
            let shift = (n - m) as usize;

            r = r.sub_terms(&div.mul_terms(&self.monomial(c.clone(), shift)));
            q.accumulate(&c, shift);

            // the leading term cancels, also for inexact coefficients
            r.clear_coeff(n as usize);
            n = r.degree();
            trace!(degree = n, "division step");
        }

        Ok((q, r))
    }

    /// Compute `self^pow` by repeated squaring.
    ///
    /// # Panics
    ///
    /// Panics if `pow` is zero and the ring is not a field, as there is no one to return.
    pub fn pow(&self, mut pow: u64) -> Self {
        if pow == 0 {
            match self.field() {
                Ok(field) => return self.constant(field.one()),
                Err(e) => panic!("Cannot compute ({})^0: {}", self, e),
            }
        }

        let mut x = self.clone();
        let mut y: Option<Self> = None;
        while pow != 1 {
            if pow % 2 == 1 {
                y = Some(match y {
                    Some(y) => y.mul_terms(&x),
                    None => x.clone(),
                });
                pow -= 1;
            }

            x = x.mul_terms(&x);
            pow /= 2;
        }

        match y {
            Some(y) => x.mul_terms(&y),
            None => x,
        }
    }

    /// Compute the remainder `self % div`.
    pub fn rem(&self, div: &Self) -> Result<Self, PolyError> {
        Ok(self.quot_rem(div)?.1)
    }
}

impl<F: Field> Polynomial<F> {
    /// Constructs a polynomial that is one, inheriting the field from `self`.
    #[inline]
    pub fn one(&self) -> Self {
        self.constant(self.ring.one())
    }
}

impl<R: Ring> Clone for Polynomial<R> {
    fn clone(&self) -> Self {
        Polynomial {
            coefficients: self.coefficients.clone(),
            ring: self.ring.clone(),
            over_field: self.over_field,
        }
    }
}

impl<R: Ring> PartialEq for Polynomial<R> {
    /// Polynomials over different ring instances are never equal.
    fn eq(&self, other: &Self) -> bool {
        if !self.same_ring(other) {
            return false;
        }

        if self.degree() != other.degree() {
            return false;
        }

        let zero = self.ring.zero();
        (0..=self.degree().max(0) as usize).all(|n| {
            self.coefficients.get(&n).unwrap_or(&zero) == other.coefficients.get(&n).unwrap_or(&zero)
        })
    }
}

impl<R: Ring> Display for Polynomial<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        let ring = &*self.ring;
        let real = ring.is_real_subset();

        let mut first = true;
        for (e, c) in self.terms() {
            let negative = real && ring.is_negative(c);
            if first {
                if negative {
                    f.write_str("-")?;
                }
                first = false;
            } else if negative {
                f.write_str(" - ")?;
            } else {
                f.write_str(" + ")?;
            }

            if real {
                let abs = if negative { ring.neg(c) } else { c.clone() };
                if e == 0 || !ring.is_one(&abs) {
                    ring.fmt_display(&abs, f)?;
                }
            } else {
                ring.fmt_display(c, f)?;
            }

            if e > 0 {
                f.write_str("x")?;
            }
            if e > 1 {
                write!(f, "^{}", e)?;
            }
        }

        Ok(())
    }
}

impl<R: Ring> Debug for Polynomial<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Polynomial({}, R = {})", self, self.ring)
    }
}

impl<'a, 'b, R: Ring> Add<&'a Polynomial<R>> for &'b Polynomial<R> {
    type Output = Polynomial<R>;

    fn add(self, other: &'a Polynomial<R>) -> Self::Output {
        self.checked_add(other).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<R: Ring> Add for Polynomial<R> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        &self + &other
    }
}

impl<'a, 'b, R: Ring> Sub<&'a Polynomial<R>> for &'b Polynomial<R> {
    type Output = Polynomial<R>;

    fn sub(self, other: &'a Polynomial<R>) -> Self::Output {
        self.checked_sub(other).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<R: Ring> Sub for Polynomial<R> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        &self - &other
    }
}

impl<'a, 'b, R: Ring> Mul<&'a Polynomial<R>> for &'b Polynomial<R> {
    type Output = Polynomial<R>;

    fn mul(self, other: &'a Polynomial<R>) -> Self::Output {
        self.checked_mul(other).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<R: Ring> Mul for Polynomial<R> {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        &self * &other
    }
}

impl<R: Ring> Neg for Polynomial<R> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        // Negate coefficients of all terms.
        for c in self.coefficients.values_mut() {
            *c = self.ring.neg(c);
        }
        self
    }
}

impl<'a, R: Ring> Neg for &'a Polynomial<R> {
    type Output = Polynomial<R>;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}
