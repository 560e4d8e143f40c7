//! Homomorphic combination of ciphertexts
//!
//! (c0, c1) + (c0', c1') = (c0 + c0', c1 + c1') mod q decrypts to m + m' mod t,
//! with the noise terms adding up. No key material is involved.

use num_bigint::BigInt;
use tracing::debug;

use crate::error::{RlweError, Result};
use crate::math::{ring, Poly};
use crate::params::RlweParams;

use super::types::Ciphertext;

/// Add two ciphertexts under the same modulus.
///
/// Components are added coefficient-wise and reduced into [0, q), so the sum
/// is canonical like a fresh ciphertext.
pub fn homomorphic_add(lhs: &Ciphertext, rhs: &Ciphertext) -> Result<Ciphertext> {
    combine(lhs, rhs, |x, y| x + y)
}

/// Subtract `rhs` from `lhs`; decrypts to m − m' mod t
pub fn homomorphic_sub(lhs: &Ciphertext, rhs: &Ciphertext) -> Result<Ciphertext> {
    combine(lhs, rhs, |x, y| x - y)
}

/// Sum any number of ciphertexts.
///
/// An empty iterator yields [`Ciphertext::zero`]. Every term is checked
/// against `params` before being folded in.
pub fn homomorphic_sum<'a, I>(params: &RlweParams, cts: I) -> Result<Ciphertext>
where
    I: IntoIterator<Item = &'a Ciphertext>,
{
    params.validate()?;

    let mut terms = 0usize;
    let sum = cts
        .into_iter()
        .try_fold(Ciphertext::zero(params), |acc, ct| {
            ct.validate(params)?;
            terms += 1;
            homomorphic_add(&acc, ct)
        })?;

    debug!(terms, q = %params.q, "summed ciphertexts");
    Ok(sum)
}

fn combine<F>(lhs: &Ciphertext, rhs: &Ciphertext, op: F) -> Result<Ciphertext>
where
    F: Fn(&Poly, &Poly) -> Poly,
{
    if lhs.q != rhs.q {
        return Err(RlweError::ModulusMismatch {
            left: lhs.q.clone(),
            right: rhs.q.clone(),
        });
    }
    check_same_len("ciphertext c0", &lhs.c0, &rhs.c0)?;
    check_same_len("ciphertext c1", &lhs.c1, &rhs.c1)?;

    let q: &BigInt = &lhs.q;
    let mut c0 = op(&lhs.c0, &rhs.c0);
    let mut c1 = op(&lhs.c1, &rhs.c1);
    c0.reduce_coeffs(q);
    c1.reduce_coeffs(q);

    debug!(ring_dim = c0.len(), q = %q, "combined ciphertexts");

    Ok(Ciphertext {
        c0,
        c1,
        q: lhs.q.clone(),
    })
}

fn check_same_len(what: &'static str, lhs: &Poly, rhs: &Poly) -> Result<()> {
    if lhs.len() == rhs.len() {
        Ok(())
    } else {
        Err(RlweError::DegreeMismatch {
            what,
            expected: lhs.len(),
            actual: rhs.len(),
        })
    }
}

impl Ciphertext {
    /// Homomorphic addition of two ciphertexts
    ///
    /// (c0, c1) + (c0', c1') = (c0 + c0', c1 + c1')
    /// Decrypts to m + m'
    pub fn add(&self, other: &Ciphertext) -> Result<Ciphertext> {
        homomorphic_add(self, other)
    }

    /// Homomorphic subtraction of two ciphertexts
    ///
    /// Decrypts to m - m'
    pub fn sub(&self, other: &Ciphertext) -> Result<Ciphertext> {
        homomorphic_sub(self, other)
    }

    /// Additive inverse mod q; decrypts to −m mod t
    pub fn neg(&self) -> Ciphertext {
        Ciphertext {
            c0: ring::neg(&self.c0, &self.q),
            c1: ring::neg(&self.c1, &self.q),
            q: self.q.clone(),
        }
    }
}
