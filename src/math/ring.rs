//! Dual-modulus arithmetic in Z_S[X]/(P).
//!
//! Every ring element is reduced twice: coefficients modulo an integer
//! modulus S, and the polynomial modulo the structural modulus P. The order
//! is fixed:
//!
//! - `add`: integer sum, coefficients mod S, remainder by P.
//! - `mul`: integer product, coefficients mod S, remainder by P, coefficients
//!   mod S again. The remainder step subtracts multiples of P and can push
//!   coefficients out of [0, S).
//!
//! The remainder is exact integer long division, so coefficients never drift
//! regardless of how large S grows.

use num_bigint::BigInt;
use num_traits::{One, Signed};
use serde::{Deserialize, Serialize};

use super::modular::ModQ;
use super::poly::Poly;
use crate::error::{invalid_params, Result};

/// The defining polynomial P of the quotient ring.
///
/// Its leading coefficient is ±1 so that division by P stays inside Z.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Poly", into = "Poly")]
pub struct StructuralModulus {
    poly: Poly,
    degree: usize,
}

impl StructuralModulus {
    /// Wrap a polynomial as structural modulus
    pub fn new(poly: Poly) -> Result<Self> {
        let degree = match poly.degree() {
            Some(d) if d > 0 => d,
            _ => return Err(invalid_params!("structural modulus must have positive degree")),
        };
        let unit_lead = poly.leading_coeff().is_some_and(|c| c.abs().is_one());
        if !unit_lead {
            return Err(invalid_params!(
                "structural modulus leading coefficient must be ±1, got {}",
                poly.coeff(degree)
            ));
        }
        let poly = poly.resized(degree + 1);
        Ok(Self { poly, degree })
    }

    /// X^d + 1, the usual power-of-two cyclotomic modulus.
    ///
    /// `d = 0` gives the constant 2, a degree-0 modulus that
    /// [`RlweParams::validate`](crate::params::RlweParams::validate) rejects.
    pub fn negacyclic(d: usize) -> Self {
        let mut coeffs = vec![0i64; d + 1];
        coeffs[0] += 1;
        coeffs[d] += 1;
        Self {
            poly: Poly::from_signed(&coeffs),
            degree: d,
        }
    }

    /// Degree of P, i.e. the rank of the quotient ring over Z
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The underlying polynomial
    pub fn poly(&self) -> &Poly {
        &self.poly
    }
}

impl TryFrom<Poly> for StructuralModulus {
    type Error = crate::error::RlweError;

    fn try_from(poly: Poly) -> Result<Self> {
        Self::new(poly)
    }
}

impl From<StructuralModulus> for Poly {
    fn from(p: StructuralModulus) -> Self {
        p.poly
    }
}

/// Ring addition modulo S and P
pub fn add(x1: &Poly, x2: &Poly, modulus: &BigInt, p: &StructuralModulus) -> Poly {
    let mut sum = x1 + x2;
    sum.reduce_coeffs(modulus);
    sum.rem_by(p.poly())
}

/// Ring multiplication modulo S and P
pub fn mul(x1: &Poly, x2: &Poly, modulus: &BigInt, p: &StructuralModulus) -> Poly {
    let mut prod = x1 * x2;
    prod.reduce_coeffs(modulus);
    let mut rem = prod.rem_by(p.poly());
    rem.reduce_coeffs(modulus);
    rem
}

/// Additive inverse with coefficients in [0, S)
pub fn neg(x: &Poly, modulus: &BigInt) -> Poly {
    Poly::from_coeffs(x.coeffs().iter().map(|c| ModQ::negate(c, modulus)).collect())
}

/// Bring any integer polynomial to its canonical representative
pub fn canonicalize(x: &Poly, modulus: &BigInt, p: &StructuralModulus) -> Poly {
    let mut r = x.clone();
    r.reduce_coeffs(modulus);
    let mut r = r.rem_by(p.poly());
    r.reduce_coeffs(modulus);
    r
}

/// Coefficients in [0, S) and degree below deg P
pub fn is_canonical(x: &Poly, modulus: &BigInt, p: &StructuralModulus) -> bool {
    x.coeffs_in_range(modulus) && x.degree().map_or(true, |d| d < p.degree())
}
