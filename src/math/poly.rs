//! Dense integer polynomials.
//!
//! A [`Poly`] is an ordered coefficient vector over Z (index = exponent) with
//! arbitrary-precision coefficients. Arithmetic here is plain integer
//! polynomial arithmetic; reduction by a coefficient modulus and by the
//! structural polynomial lives in [`crate::math::ring`] so that the order of
//! the two reductions is spelled out in exactly one place.
//!
//! # Example
//!
//! ```
//! use rlwe_fv::math::Poly;
//!
//! // (1 + x) * (1 + x) = 1 + 2x + x^2
//! let a = Poly::from_signed(&[1, 1]);
//! let sq = &a * &a;
//! assert_eq!(sq, Poly::from_signed(&[1, 2, 1]));
//!
//! // x^5 mod (x^4 + 1) = -x
//! let x5 = Poly::from_signed(&[0, 0, 0, 0, 0, 1]);
//! let p = Poly::from_signed(&[1, 0, 0, 0, 1]);
//! assert_eq!(x5.rem_by(&p), Poly::from_signed(&[0, -1]));
//! ```

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

use super::modular::ModQ;

/// Polynomial with integer coefficients.
///
/// Equality ignores trailing zero coefficients, so a polynomial padded to the
/// ring dimension equals its unpadded form.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Poly {
    /// Coefficients, lowest degree first.
    coeffs: Vec<BigInt>,
}

impl Poly {
    /// Create zero polynomial with `len` explicit coefficients
    pub fn zero(len: usize) -> Self {
        Self {
            coeffs: vec![BigInt::zero(); len],
        }
    }

    /// Create polynomial from coefficient vector
    pub fn from_coeffs(coeffs: Vec<BigInt>) -> Self {
        Self { coeffs }
    }

    /// Create polynomial from machine-word coefficients
    pub fn from_signed(coeffs: &[i64]) -> Self {
        Self {
            coeffs: coeffs.iter().map(|&c| BigInt::from(c)).collect(),
        }
    }

    /// Create polynomial with a single coefficient (constant polynomial)
    pub fn constant(value: BigInt, len: usize) -> Self {
        let mut coeffs = vec![BigInt::zero(); len.max(1)];
        coeffs[0] = value;
        Self { coeffs }
    }

    /// Number of stored coefficients, including trailing zeros
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Check if polynomial stores no coefficients
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Get reference to coefficient vector
    pub fn coeffs(&self) -> &[BigInt] {
        &self.coeffs
    }

    /// Get coefficient at index; indices past the end are zero
    pub fn coeff(&self, i: usize) -> BigInt {
        self.coeffs.get(i).cloned().unwrap_or_default()
    }

    /// Coefficients with trailing zeros stripped
    pub fn trimmed(&self) -> &[BigInt] {
        let end = self
            .coeffs
            .iter()
            .rposition(|c| !c.is_zero())
            .map_or(0, |i| i + 1);
        &self.coeffs[..end]
    }

    /// Degree of the polynomial, `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        self.trimmed().len().checked_sub(1)
    }

    /// Leading (highest non-zero) coefficient
    pub fn leading_coeff(&self) -> Option<&BigInt> {
        self.trimmed().last()
    }

    /// Check if polynomial is zero
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Zero::is_zero)
    }

    /// Pad with zeros (or drop trailing zeros) to exactly `len` coefficients.
    ///
    /// # Panics
    ///
    /// Debug-asserts that only zero coefficients are dropped.
    pub fn resized(mut self, len: usize) -> Self {
        debug_assert!(
            self.coeffs.iter().skip(len).all(Zero::is_zero),
            "resizing would drop non-zero coefficients"
        );
        self.coeffs.resize(len, BigInt::zero());
        self
    }

    /// Scalar multiplication over Z
    pub fn scalar_mul(&self, scalar: &BigInt) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| c * scalar).collect(),
        }
    }

    /// Reduce every coefficient into [0, m)
    pub fn reduce_coeffs(&mut self, m: &BigInt) {
        for c in &mut self.coeffs {
            *c = ModQ::reduce(c, m);
        }
    }

    /// Check that every coefficient lies in [0, m)
    pub fn coeffs_in_range(&self, m: &BigInt) -> bool {
        self.coeffs.iter().all(|c| !c.is_negative() && c < m)
    }

    /// Exact polynomial long division over Z.
    ///
    /// Returns `(quotient, remainder)` with `self = quotient * divisor + remainder`
    /// and `deg(remainder) < deg(divisor)`. Exactness over the integers needs a
    /// unit leading coefficient, which keeps every intermediate value integral.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is constant or its leading coefficient is not ±1.
    pub fn div_rem(&self, divisor: &Poly) -> (Poly, Poly) {
        let dd = match divisor.degree() {
            Some(d) if d > 0 => d,
            _ => panic!("divisor must have positive degree"),
        };
        let lead = &divisor.coeffs[dd];
        assert!(lead.abs().is_one(), "divisor leading coefficient must be ±1");

        let mut rem = self.trimmed().to_vec();
        if rem.len() <= dd {
            return (Poly::zero(0), Poly::from_coeffs(rem));
        }

        let mut quot = vec![BigInt::zero(); rem.len() - dd];
        for i in (dd..rem.len()).rev() {
            if rem[i].is_zero() {
                continue;
            }
            // lead is ±1, so it is its own inverse
            let factor = &rem[i] * lead;
            for (j, c) in divisor.coeffs[..=dd].iter().enumerate() {
                rem[i - dd + j] -= &factor * c;
            }
            quot[i - dd] = factor;
        }
        rem.truncate(dd);

        (Poly::from_coeffs(quot), Poly::from_coeffs(rem))
    }

    /// Remainder of exact long division by `divisor`
    pub fn rem_by(&self, divisor: &Poly) -> Poly {
        self.div_rem(divisor).1
    }

    /// L-infinity norm in centered representation modulo m
    pub fn linf_norm(&self, m: &BigInt) -> BigInt {
        self.coeffs
            .iter()
            .map(|c| ModQ::to_signed(c, m).abs())
            .max()
            .unwrap_or_default()
    }
}

impl PartialEq for Poly {
    fn eq(&self, other: &Self) -> bool {
        self.trimmed() == other.trimmed()
    }
}

impl Eq for Poly {}

impl Add for &Poly {
    type Output = Poly;

    fn add(self, rhs: Self) -> Self::Output {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..len)
            .map(|i| match (self.coeffs.get(i), rhs.coeffs.get(i)) {
                (Some(a), Some(b)) => a + b,
                (Some(a), None) => a.clone(),
                (None, Some(b)) => b.clone(),
                (None, None) => BigInt::zero(),
            })
            .collect();
        Poly { coeffs }
    }
}

impl Add for Poly {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Self::Output {
        Poly {
            coeffs: self.coeffs.iter().map(|c| -c).collect(),
        }
    }
}

impl Neg for Poly {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl Sub for &Poly {
    type Output = Poly;

    fn sub(self, rhs: Self) -> Self::Output {
        self + &(-rhs)
    }
}

impl Sub for Poly {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Mul for &Poly {
    type Output = Poly;

    /// Schoolbook product over Z
    fn mul(self, rhs: Self) -> Self::Output {
        if self.coeffs.is_empty() || rhs.coeffs.is_empty() {
            return Poly::zero(0);
        }
        let mut coeffs = vec![BigInt::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Poly { coeffs }
    }
}

impl Mul for Poly {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}
