//! Quotient fields `F[x]/(p(x))`, e.g. the complex numbers as `Q[x]/(x^2+1)`.

use std::{
    fmt::{Debug, Display, Formatter},
    sync::Arc,
};

use tracing::{debug, instrument};

use crate::{error::PolyError, poly::polynomial::Polynomial};

use super::{Field, Ring};

/// The field `F[x]/(p(x))` of residue classes of polynomials over `F` modulo `p`.
/// The defining polynomial should be irreducible over `F`; this is not checked.
/// For a reducible `p` the structure is only a ring, and inversion of a zero divisor fails.
///
/// Elements are polynomials bound to `F`, so quotient fields can be used as
/// coefficients of new polynomials, giving towers of extensions.
///
/// # Examples
///
/// ```
/// use ringpoly::{
///     domains::{quotient::QuotientField, rational::Q, Field, Ring},
///     poly::polynomial::Polynomial,
/// };
/// use rug::Rational;
///
/// let p = Polynomial::from_dense([1, 0, 1].map(Rational::from), &Q).unwrap();
/// let k = QuotientField::new(&p).unwrap();
///
/// let i = k.generator();
/// assert_eq!(k.mul(&i, &i), k.neg(&k.one()));
/// assert_eq!(k.to_string(), "Q/(1 + x^2)");
/// ```
pub struct QuotientField<F: Field> {
    base: Arc<F>,
    modulus: Polynomial<F>,
}

impl<F: Field> QuotientField<F> {
    /// Create the quotient field of the ring of `p` modulo `p`.
    pub fn new(p: &Polynomial<F>) -> Result<QuotientField<F>, PolyError> {
        if !p.is_over_field() {
            return Err(PolyError::NotAField {
                ring: p.ring().to_string(),
            });
        }

        if p.degree() < 1 {
            return Err(PolyError::InvalidModulus {
                degree: p.degree(),
            });
        }

        Ok(QuotientField {
            base: p.ring().clone(),
            modulus: p.clone(),
        })
    }

    /// Get the field of the coefficients.
    pub fn base(&self) -> &Arc<F> {
        &self.base
    }

    /// Get the defining polynomial.
    pub fn modulus(&self) -> &Polynomial<F> {
        &self.modulus
    }

    /// The degree of the extension.
    pub fn degree(&self) -> i64 {
        self.modulus.degree()
    }

    /// The residue class of `x`.
    pub fn generator(&self) -> Polynomial<F> {
        self.reduce(&self.modulus.monomial(self.base.one(), 1))
    }

    /// Map a polynomial over the base field to its residue class.
    pub fn to_element(&self, poly: &Polynomial<F>) -> Result<Polynomial<F>, PolyError> {
        poly.rem(&self.modulus)
    }

    /// # Panics
    ///
    /// Panics if `a` is bound to a different field instance than the modulus.
    fn reduce(&self, a: &Polynomial<F>) -> Polynomial<F> {
        if a.degree() < self.modulus.degree() && a.same_ring(&self.modulus) {
            return a.clone();
        }

        match a.rem(&self.modulus) {
            Ok(r) => r,
            Err(e) => panic!("Cannot reduce {} modulo {}: {}", a, self.modulus, e),
        }
    }
}

impl<F: Field> Debug for QuotientField<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} % {:?}", self.base, self.modulus)
    }
}

impl<F: Field> Display for QuotientField<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/({})", self.base, self.modulus)
    }
}

impl<F: Field> Ring for QuotientField<F> {
    type Element = Polynomial<F>;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.reduce(&(a + b))
    }

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.reduce(&(a - b))
    }

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.reduce(&(a * b))
    }

    fn neg(&self, a: &Self::Element) -> Self::Element {
        self.reduce(&-a)
    }

    fn zero(&self) -> Self::Element {
        Polynomial::new_zero(&self.base)
    }

    /// Returns `true` if `a` is a polynomial over the same field instance as the modulus.
    fn contains(&self, a: &Self::Element) -> bool {
        a.same_ring(&self.modulus)
    }

    fn is_zero(&self, a: &Self::Element) -> bool {
        self.reduce(a).is_zero()
    }

    fn is_one(&self, a: &Self::Element) -> bool {
        self.reduce(a) == self.one()
    }

    fn fmt_display(&self, element: &Self::Element, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", element)
    }

    fn as_field(&self) -> Option<&dyn Field<Element = Self::Element>> {
        Some(self)
    }
}

impl<F: Field> Field for QuotientField<F> {
    fn one(&self) -> Self::Element {
        self.zero().one()
    }

    /// Invert `a` with the extended Euclidean algorithm.
    #[instrument(level = "debug", skip_all, fields(field = %self))]
    fn inv(&self, a: &Self::Element) -> Result<Self::Element, PolyError> {
        let (r, _, t) = self.modulus.extended_gcd(a)?;

        if r.degree() != 0 {
            debug!(degree = r.degree(), "remainder is not a unit");
            return Err(PolyError::NotInvertible {
                element: a.to_string(),
                modulus: self.modulus.to_string(),
            });
        }

        let (normalizer, _) = r.one().quot_rem(&r)?;
        self.to_element(&(&normalizer * &t))
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use rug::Rational;

    use super::QuotientField;
    use crate::{
        domains::{
            rational::{RationalField, Q},
            Field, Ring,
        },
        error::PolyError,
        poly::polynomial::Polynomial,
    };

    fn q(coeffs: &[i64]) -> Polynomial<RationalField> {
        Polynomial::from_dense(coeffs.iter().map(|c| Rational::from(*c)), &Q).unwrap()
    }

    #[test]
    fn gaussian_rationals() {
        let k = QuotientField::new(&q(&[1, 0, 1])).unwrap();
        let i = k.generator();

        assert_eq!(i, q(&[0, 1]));
        assert_eq!(k.mul(&i, &i), q(&[-1]));
        assert_eq!(k.add(&i, &i), q(&[0, 2]));
        assert_eq!(k.sub(&i, &k.one()), q(&[-1, 1]));
        assert_eq!(k.degree(), 2);
        assert!(k.contains(&i));
        assert!(k.is_zero(&q(&[1, 0, 1])));
        assert!(k.is_one(&q(&[2, 0, 1])));
    }

    #[test]
    fn inverse() {
        let k = QuotientField::new(&q(&[1, 0, 1])).unwrap();

        for re in -3..=3 {
            for im in -3..=3 {
                if re == 0 && im == 0 {
                    continue;
                }

                let e = q(&[re, im]);
                let inv = k.inv(&e).unwrap();
                assert_eq!(k.mul(&e, &inv), k.one(), "{} * {}", e, inv);
            }
        }

        // 1/(1 + x) = (1 - x)/2
        let inv = k.inv(&q(&[1, 1])).unwrap();
        assert_eq!(
            inv,
            Polynomial::from_dense([Rational::from((1, 2)), Rational::from((-1, 2))], &Q).unwrap()
        );
    }

    #[test]
    fn not_invertible() {
        // x^2 - 1 is reducible
        let k = QuotientField::new(&q(&[-1, 0, 1])).unwrap();
        assert!(matches!(
            k.inv(&q(&[1, 1])),
            Err(PolyError::NotInvertible { .. })
        ));
        assert!(matches!(
            k.inv(&k.zero()),
            Err(PolyError::NotInvertible { .. })
        ));
    }

    #[test]
    fn invalid_modulus() {
        assert_eq!(
            QuotientField::new(&q(&[3])).unwrap_err(),
            PolyError::InvalidModulus { degree: 0 }
        );
        assert_eq!(
            QuotientField::new(&q(&[])).unwrap_err(),
            PolyError::InvalidModulus { degree: -1 }
        );
    }

    #[test]
    fn membership() {
        let k = QuotientField::new(&q(&[1, 0, 1])).unwrap();
        let other = Arc::new(RationalField::new());
        let foreign = Polynomial::from_dense([Rational::from(1)], &other).unwrap();

        assert!(!k.contains(&foreign));
        assert!(matches!(
            k.inv(&foreign),
            Err(PolyError::RingMismatch { .. })
        ));
        assert!(matches!(
            Polynomial::new([(0, foreign)], &Arc::new(k)),
            Err(PolyError::InvalidCoefficient { .. })
        ));
    }

    #[test]
    fn reduction() {
        let k = QuotientField::new(&q(&[1, 0, 1])).unwrap();
        assert_eq!(k.to_element(&q(&[0, 0, 0, 1])).unwrap(), q(&[0, -1]));
        assert_eq!(k.to_element(&q(&[1, 0, 1])).unwrap(), q(&[]));
    }

    #[test]
    fn display() {
        let k = QuotientField::new(&q(&[-2, 0, 1])).unwrap();
        assert_eq!(k.to_string(), "Q/(-2 + x^2)");
        assert_eq!(format!("{}", k.printer(&q(&[1, 1]))), "[1 + x]");
    }
}
