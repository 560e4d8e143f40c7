//! RLWE key and ciphertext types.

use num_bigint::BigInt;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{invalid_params, RlweError, Result};
use crate::math::{ring, Poly};
use crate::params::RlweParams;

/// RLWE secret key: binary polynomial s with n coefficients in {0, 1}.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKey {
    /// Secret polynomial.
    pub poly: Poly,
}

/// RLWE public key (a, b) with b ≡ −(a·s + e) (mod S, mod q, mod P).
///
/// # Fields
///
/// * `a` - Uniform polynomial with coefficients in [0, S)
/// * `b` - Key polynomial, canonical modulo `modulus`
/// * `modulus` - lcm(S, q), the modulus `b` was computed under
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    /// Uniform polynomial.
    pub a: Poly,
    /// Masked key polynomial: b = −(a·s + e).
    pub b: Poly,
    /// Modulus the key relation holds under.
    pub modulus: BigInt,
}

/// Output of key generation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeyPair {
    /// Freely shareable encryption key.
    pub public: PublicKey,
    /// Decryption key, kept private.
    pub secret: SecretKey,
}

/// RLWE ciphertext (c0, c1) ∈ R_q × R_q.
///
/// Both components are canonical (coefficients in [0, q), degree below deg P)
/// and padded to n coefficients. Decryption computes c0 + c1·s = Δ·m + noise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ciphertext {
    /// c0 = b·u + e1 + Δ·m.
    pub c0: Poly,
    /// c1 = a·u + e2.
    pub c1: Poly,
    /// Ciphertext modulus q.
    pub q: BigInt,
}

/// Noise measured during decryption exceeded the correctness bound.
///
/// Advisory: the accompanying plaintext was still decoded but is likely wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoiseOverflow {
    /// Largest centered residual observed over all coefficients.
    pub max_noise: BigInt,
    /// ⌊q/(2t)⌋.
    pub bound: BigInt,
}

/// Decrypted plaintext together with a noise measurement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decryption {
    /// Recovered plaintext in [0, t).
    pub plaintext: u64,
    /// Largest centered residual |d_i − Δ·m_i| over all coefficients.
    pub noise: BigInt,
    /// Set when `noise` breaks the decryption bound.
    pub overflow: Option<NoiseOverflow>,
}

/// Reject polynomials that do not carry exactly `expected` coefficients
pub(crate) fn check_len(what: &'static str, poly: &Poly, expected: usize) -> Result<()> {
    if poly.len() == expected {
        Ok(())
    } else {
        Err(RlweError::DegreeMismatch {
            what,
            expected,
            actual: poly.len(),
        })
    }
}

impl SecretKey {
    /// Creates a secret key from a polynomial.
    pub fn from_poly(poly: Poly) -> Self {
        Self { poly }
    }

    /// Returns the ring dimension.
    pub fn ring_dim(&self) -> usize {
        self.poly.len()
    }

    /// Check that the key has the right shape for `params` and is binary
    pub fn validate(&self, params: &RlweParams) -> Result<()> {
        check_len("secret key", &self.poly, params.ring_dim)?;
        if let Some(i) = self
            .poly
            .coeffs()
            .iter()
            .position(|c| !(c.is_zero() || c.is_one()))
        {
            return Err(invalid_params!(
                "secret key coefficient {} is {}, expected 0 or 1",
                i,
                self.poly.coeff(i)
            ));
        }
        Ok(())
    }
}

impl PublicKey {
    /// Returns the ring dimension.
    pub fn ring_dim(&self) -> usize {
        self.a.len()
    }

    /// Check that the key has the right shape for `params` and can be
    /// reduced into its ciphertext ring
    pub fn validate(&self, params: &RlweParams) -> Result<()> {
        check_len("public key a", &self.a, params.ring_dim)?;
        check_len("public key b", &self.b, params.ring_dim)?;
        if !(&self.modulus % &params.q).is_zero() {
            return Err(RlweError::ModulusMismatch {
                left: self.modulus.clone(),
                right: params.q.clone(),
            });
        }
        Ok(())
    }
}

impl Ciphertext {
    /// Creates a ciphertext from component polynomials, canonicalizing both
    /// modulo q and P and padding them to `params.ring_dim`.
    pub fn from_parts(c0: Poly, c1: Poly, params: &RlweParams) -> Self {
        let n = params.ring_dim;
        let p = &params.poly_modulus;
        Self {
            c0: ring::canonicalize(&c0, &params.q, p).resized(n),
            c1: ring::canonicalize(&c1, &params.q, p).resized(n),
            q: params.q.clone(),
        }
    }

    /// Noiseless encryption of zero, the identity for homomorphic addition
    pub fn zero(params: &RlweParams) -> Self {
        Self {
            c0: Poly::zero(params.ring_dim),
            c1: Poly::zero(params.ring_dim),
            q: params.q.clone(),
        }
    }

    /// Returns the ring dimension.
    pub fn ring_dim(&self) -> usize {
        self.c0.len()
    }

    /// Returns the modulus q.
    pub fn modulus(&self) -> &BigInt {
        &self.q
    }

    /// Check that the ciphertext has the right shape for `params`
    pub fn validate(&self, params: &RlweParams) -> Result<()> {
        check_len("ciphertext c0", &self.c0, params.ring_dim)?;
        check_len("ciphertext c1", &self.c1, params.ring_dim)?;
        if self.q != params.q {
            return Err(RlweError::ModulusMismatch {
                left: self.q.clone(),
                right: params.q.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ciphertext_from_parts_canonical() {
        let params = RlweParams::toy();
        let c0 = Poly::from_signed(&[-1, 7919, 0, 0, 3]);
        let c1 = Poly::from_signed(&[5]);
        let ct = Ciphertext::from_parts(c0, c1, &params);

        assert_eq!(ct.ring_dim(), 20);
        assert_eq!(ct.c1.len(), 20);
        // -1 + 3x^4 ≡ -1 - 3 = -4 (mod x^4 + 1)
        assert_eq!(ct.c0, Poly::from_signed(&[7915]));
        assert!(ring::is_canonical(&ct.c0, &params.q, &params.poly_modulus));
        assert!(ct.validate(&params).is_ok());
    }

    #[test]
    fn test_zero_ciphertext_shape() {
        let params = RlweParams::toy();
        let ct = Ciphertext::zero(&params);
        assert!(ct.c0.is_zero() && ct.c1.is_zero());
        assert_eq!(ct.modulus(), &params.q);
        assert!(ct.validate(&params).is_ok());
    }

    #[test]
    fn test_ciphertext_validate_rejects_other_modulus() {
        let params = RlweParams::toy();
        let mut other = RlweParams::toy();
        other.q = BigInt::from(7907);
        let ct = Ciphertext::zero(&other);
        assert!(matches!(
            ct.validate(&params),
            Err(RlweError::ModulusMismatch { .. })
        ));
    }

    #[test]
    fn test_secret_key_validate_length() {
        let params = RlweParams::toy();
        let sk = SecretKey::from_poly(Poly::zero(4));
        assert_eq!(
            sk.validate(&params),
            Err(RlweError::DegreeMismatch {
                what: "secret key",
                expected: 20,
                actual: 4,
            })
        );
        assert_eq!(SecretKey::from_poly(Poly::zero(20)).ring_dim(), 20);
    }

    #[test]
    fn test_secret_key_validate_binary() {
        let params = RlweParams::toy();
        let mut coeffs = vec![1i64; 20];
        assert!(SecretKey::from_poly(Poly::from_signed(&coeffs)).validate(&params).is_ok());

        coeffs[7] = 2;
        match SecretKey::from_poly(Poly::from_signed(&coeffs)).validate(&params) {
            Err(RlweError::InvalidParameters(msg)) => assert!(msg.contains("coefficient 7 is 2")),
            other => panic!("expected InvalidParameters, got {:?}", other),
        }

        coeffs[7] = -1;
        assert!(SecretKey::from_poly(Poly::from_signed(&coeffs)).validate(&params).is_err());
    }

    #[test]
    fn test_deserialized_secret_key_checked() {
        let params = RlweParams::toy();
        let sk = SecretKey::from_poly(Poly::from_signed(&[3; 20]));
        let json = serde_json::to_string(&sk).unwrap();
        let loaded: SecretKey = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            loaded.validate(&params),
            Err(RlweError::InvalidParameters(_))
        ));
    }
}
