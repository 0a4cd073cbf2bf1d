use tracing::{debug, instrument};

use crate::{domains::Ring, error::PolyError};

use super::polynomial::Polynomial;

impl<R: Ring> Polynomial<R> {
    /// Compute the univariate GCD using Euclid's algorithm. The result is monic,
    /// except for `gcd(0, 0)`, which is zero. Requires the ring to be a field.
    #[instrument(level = "debug", skip_all, fields(ring = %self.ring()))]
    pub fn gcd(&self, other: &Self) -> Result<Self, PolyError> {
        self.check_ring(other, "take the gcd of")?;
        self.field()?;

        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let r = a.rem(&b)?;
            a = std::mem::replace(&mut b, r);
        }

        if a.is_zero() {
            return Ok(a);
        }

        let g = a.make_monic()?;
        debug!(degree = g.degree(), "gcd");
        Ok(g)
    }

    /// Compute `(r, s, t)` such that `s * self + t * other = r`, where `r` is a
    /// gcd of `self` and `other` that is not normalized. Requires the ring to be a field.
    #[instrument(level = "debug", skip_all, fields(ring = %self.ring()))]
    pub fn extended_gcd(&self, other: &Self) -> Result<(Self, Self, Self), PolyError> {
        self.check_ring(other, "take the gcd of")?;
        let one = self.constant(self.field()?.one());

        let (mut r0, mut r1) = (self.clone(), other.clone());
        let (mut s0, mut s1) = (one.clone(), self.zero());
        let (mut t0, mut t1) = (self.zero(), one);

        while !r1.is_zero() {
            let (q, r) = r0.quot_rem(&r1)?;
            r0 = std::mem::replace(&mut r1, r);

            let s = &s0 - &(&q * &s1);
            s0 = std::mem::replace(&mut s1, s);

            let t = &t0 - &(&q * &t1);
            t0 = std::mem::replace(&mut t1, t);
        }

        debug!(degree = r0.degree(), "extended gcd");
        Ok((r0, s0, t0))
    }

    /// Scale the polynomial such that its leading coefficient is one.
    pub fn make_monic(&self) -> Result<Self, PolyError> {
        let field = self.field()?;
        let u = field.inv(&self.lcoeff())?;
        Ok(&self.constant(u) * self)
    }
}

#[cfg(test)]
mod test {
    use rug::{Integer, Rational};

    use crate::{
        domains::{integer::Z, rational::Q},
        error::PolyError,
        poly::polynomial::Polynomial,
    };

    fn q(coeffs: &[i64]) -> Polynomial<crate::domains::rational::RationalField> {
        Polynomial::from_dense(coeffs.iter().map(|c| Rational::from(*c)), &Q).unwrap()
    }

    #[test]
    fn gcd() {
        // (x - 1)(x + 2) and 3(x - 1)(x - 5)
        let f = q(&[-2, 1, 1]);
        let g = q(&[15, -18, 3]);

        let r = f.gcd(&g).unwrap();
        assert_eq!(r, q(&[-1, 1]));
        assert!(f.rem(&r).unwrap().is_zero());
        assert!(g.rem(&r).unwrap().is_zero());

        assert_eq!(f.gcd(&q(&[])).unwrap(), q(&[-2, 1, 1]));
        assert_eq!(q(&[]).gcd(&g).unwrap(), q(&[5, -6, 1]));
        assert!(q(&[]).gcd(&q(&[])).unwrap().is_zero());
    }

    #[test]
    fn coprime() {
        let f = q(&[1, 0, 1]);
        let g = q(&[-2, 0, 1]);
        assert_eq!(f.gcd(&g).unwrap(), q(&[1]));
    }

    #[test]
    fn monic() {
        let f = Polynomial::from_dense(
            [Rational::from(1), Rational::from((2, 3))],
            &Q,
        )
        .unwrap();
        let m = f.make_monic().unwrap();
        assert_eq!(m.lcoeff(), Rational::from(1));
        assert_eq!(m.coeff(0), Ok(Rational::from((3, 2))));
    }

    #[test]
    fn extended_gcd() {
        let f = q(&[1, 0, 0, 1]);
        let g = q(&[1, 2, 1]);

        let (r, s, t) = f.extended_gcd(&g).unwrap();
        assert_eq!(&(&s * &f) + &(&t * &g), r);
        assert_eq!(r.make_monic().unwrap(), q(&[1, 1]));
    }

    #[test]
    fn gcd_requires_field() {
        let f = Polynomial::from_dense([1, 1].map(Integer::from), &Z).unwrap();
        assert!(matches!(f.gcd(&f), Err(PolyError::NotAField { .. })));
        assert!(matches!(
            f.extended_gcd(&f),
            Err(PolyError::NotAField { .. })
        ));
    }
}
